//! Integration tests for the resume optimizer

use resume_optimizer::api::OptimizeResponse;
use resume_optimizer::config::{Config, OutputFormat};
use resume_optimizer::input::manager::InputManager;
use resume_optimizer::output::formatter::{ConsoleFormatter, OutputFormatter, ReportGenerator};
use resume_optimizer::output::report::{
    MatchReport, NO_COVER_LETTER_MESSAGE, NO_MISSING_SKILLS_MESSAGE,
};
use std::path::Path;

fn report_from(json: &str) -> MatchReport {
    let response: OptimizeResponse = serde_json::from_str(json).unwrap();
    MatchReport::from_response(&response)
}

#[tokio::test]
async fn test_resume_loading_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let upload = manager.load_resume(path).await.unwrap();
    assert_eq!(upload.file_name, "sample_resume.txt");
    assert_eq!(upload.mime_type, "text/plain");
    assert!(!upload.bytes.is_empty());
}

#[tokio::test]
async fn test_job_description_loading() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_jd.txt");

    let text = manager.load_job_description(path).await.unwrap();
    assert!(text.contains("Rust"));
    assert!(text.contains("engineer"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.load_resume(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.pdf");

    let result = manager.load_resume(path).await;
    assert!(result.is_err());
}

#[test]
fn test_console_report_shows_empty_state_for_missing_skills() {
    let report = report_from(
        r#"{"analysis": {"score": 90, "missing_skills": [], "common_skills": ["Rust"]}}"#,
    );

    let formatter = ConsoleFormatter::new(false);
    let output = formatter.format_report(&report).unwrap();

    assert!(output.contains(NO_MISSING_SKILLS_MESSAGE));
    assert!(output.contains("Rust"));
    assert!(output.contains("90%"));
}

#[test]
fn test_console_report_renders_alias_bullets_in_order() {
    let report = report_from(
        r#"{
            "analysis": {"score": 55, "missing_skills": ["Go"], "common_skills": []},
            "ai_suggestions": {"bullets": ["First bullet", "Second bullet"]}
        }"#,
    );

    let formatter = ConsoleFormatter::new(false);
    let output = formatter.format_report(&report).unwrap();

    let first = output.find("1. First bullet").unwrap();
    let second = output.find("2. Second bullet").unwrap();
    assert!(first < second);
}

#[test]
fn test_console_report_survives_absent_suggestions() {
    let report = report_from(r#"{"analysis": {"score": 40}}"#);

    let formatter = ConsoleFormatter::new(false);
    let output = formatter.format_report(&report).unwrap();

    assert!(output.contains(NO_COVER_LETTER_MESSAGE));
    assert!(!output.contains("1. "));
}

#[test]
fn test_all_formats_render() {
    let report = report_from(
        r#"{
            "analysis": {"score": 82, "missing_skills": ["K8s"], "common_skills": ["Rust"]},
            "ai_suggestions": {
                "suggested_bullets": ["Shipped a Rust service"],
                "cover_letter_intro": "Dear hiring manager"
            }
        }"#,
    );

    let generator = ReportGenerator::new();

    let json = generator
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    assert!(json.contains("\"missing_skills\""));
    assert!(json.contains("K8s"));

    let markdown = generator
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("## Match Score: 82%"));
    assert!(markdown.contains("> Dear hiring manager"));

    let html = generator
        .generate_report(&report, &OutputFormat::Html)
        .unwrap();
    assert!(html.contains("82%"));
    assert!(html.contains("Shipped a Rust service"));
    assert!(html.contains("chip-matched"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = Config::default();
    let serialized = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&serialized).unwrap();

    assert_eq!(parsed.api.timeout_secs, config.api.timeout_secs);
    assert_eq!(parsed.output.format, config.output.format);
    assert_eq!(
        parsed.animation.typing_interval_ms,
        config.animation.typing_interval_ms
    );
}
