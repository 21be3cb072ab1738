//! Output formatters - multiple format support with rich presentation

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{MatchReport, NO_MISSING_SKILLS_MESSAGE};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with professional styling
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Match Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #6f42c1;
            padding-bottom: 20px;
        }
        .score {
            font-size: 4em;
            font-weight: bold;
            letter-spacing: -2px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
            vertical-align: middle;
        }
        .score-strong { background: #28a745; }
        .score-partial { background: #ffc107; color: #000; }
        .section {
            margin: 25px 0;
        }
        .section h2 {
            color: #6f42c1;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .chips { margin: 10px 0; }
        .chip {
            display: inline-block;
            padding: 6px 14px;
            margin: 4px;
            border-radius: 16px;
            font-size: 0.9em;
        }
        .chip-missing { background: #fdecea; color: #c0392b; border: 1px solid #f5c6cb; }
        .chip-matched { background: #eafaf1; color: #1e8449; border: 1px solid #c3e6cb; }
        .bullets li { margin: 10px 0; }
        .cover-letter {
            font-style: italic;
            font-family: Georgia, serif;
            background: #f8f9fa;
            padding: 20px;
            border-left: 4px solid #6f42c1;
            border-radius: 6px;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 Resume Match Report</h1>
            <p>Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Match Score</h2>
            <span class="score">{{ score }}%</span>
            <span class="score-badge {{ score_class }}">{{ score_label }}</span>
        </div>

        <div class="section">
            <h2>⚠️ Missing Skills</h2>
            <div class="chips">
                {{ missing_skills_html | safe }}
            </div>
        </div>

        <div class="section">
            <h2>✅ Matched Skills</h2>
            <div class="chips">
                {{ common_skills_html | safe }}
            </div>
        </div>

        <div class="section">
            <h2>✨ AI Recommended Bullet Points</h2>
            <ol class="bullets">
                {{ bullets_html | safe }}
            </ol>
        </div>

        <div class="section">
            <h2>💌 Start Your Cover Letter Like This</h2>
            <p class="cover-letter">"{{ cover_letter }}"</p>
        </div>

        <div class="metadata">
            <p><strong>Generated by Resume Optimizer v{{ version }}</strong></p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    score: u8,
    score_class: String,
    score_label: String,
    missing_skills_html: String,
    common_skills_html: String,
    bullets_html: String,
    cover_letter: String,
    version: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    pub fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            71..=79 => ("STRONG", Color::Green),
            60..=70 => ("FAIR", Color::Yellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header("📊 RESUME MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            chrono::DateTime::<chrono::Utc>::from(report.generated_at)
                .format("%Y-%m-%d %H:%M:%S UTC")
        ));

        // Score
        let score = report.score_percentage();
        output.push_str(&self.format_header("Match Score", 2));
        output.push_str(&format!(
            "{}% {}\n",
            score,
            self.format_score_badge(score)
        ));

        // Missing skills
        output.push_str(&self.format_header("⚠️  Missing Skills", 2));
        if report.missing_skills.is_empty() {
            output.push_str(&format!(
                "{}\n",
                self.colorize(NO_MISSING_SKILLS_MESSAGE, Color::Green)
            ));
        } else {
            for skill in &report.missing_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Red)));
            }
        }

        // Matched skills
        output.push_str(&self.format_header("✅ Matched Skills", 2));
        if report.common_skills.is_empty() {
            output.push_str("  (none)\n");
        } else {
            for skill in &report.common_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
            }
        }

        // AI suggestions
        output.push_str(&self.format_header("✨ AI Recommended Bullet Points", 2));
        for (i, bullet) in report.suggested_bullets.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, bullet));
        }

        output.push_str(&self.format_header("💌 Start Your Cover Letter Like This", 2));
        output.push_str(&format!(
            "\"{}\"\n",
            self.colorize(report.cover_letter_display(), Color::Cyan)
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Resume Match Analysis\n\n");

        output.push_str(&format!(
            "## Match Score: {}%\n\n",
            report.score_percentage()
        ));

        output.push_str("## ⚠️ Missing Skills\n\n");
        if report.missing_skills.is_empty() {
            output.push_str(&format!("{}\n\n", NO_MISSING_SKILLS_MESSAGE));
        } else {
            for skill in &report.missing_skills {
                output.push_str(&format!("- {}\n", skill));
            }
            output.push('\n');
        }

        output.push_str("## ✅ Matched Skills\n\n");
        for skill in &report.common_skills {
            output.push_str(&format!("- {}\n", skill));
        }
        output.push('\n');

        output.push_str("## ✨ AI Recommended Bullet Points\n\n");
        for (i, bullet) in report.suggested_bullets.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, bullet));
        }
        output.push('\n');

        output.push_str("## 💌 Start Your Cover Letter Like This\n\n");
        output.push_str(&format!("> {}\n", report.cover_letter_display()));

        if self.include_metadata {
            output.push_str(&format!(
                "\n---\n*Generated: {} by Resume Optimizer v{}*\n",
                chrono::DateTime::<chrono::Utc>::from(report.generated_at)
                    .format("%Y-%m-%d %H:%M:%S UTC"),
                env!("CARGO_PKG_VERSION")
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    fn chips_html(skills: &[String], class: &str, empty_message: &str) -> String {
        if skills.is_empty() {
            format!("<span>{}</span>", Self::escape(empty_message))
        } else {
            skills
                .iter()
                .map(|s| format!("<span class=\"chip {}\">{}</span>", class, Self::escape(s)))
                .collect::<Vec<_>>()
                .join("\n                ")
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let score = report.score_percentage();
        let (score_class, score_label) = if score > 70 {
            ("score-strong".to_string(), "Strong match".to_string())
        } else {
            ("score-partial".to_string(), "Partial match".to_string())
        };

        let bullets_html = report
            .suggested_bullets
            .iter()
            .map(|b| format!("<li>{}</li>", Self::escape(b)))
            .collect::<Vec<_>>()
            .join("\n                ");

        let template = HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: chrono::DateTime::<chrono::Utc>::from(report.generated_at)
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            score,
            score_class,
            score_label,
            missing_skills_html: Self::chips_html(
                &report.missing_skills,
                "chip-missing",
                NO_MISSING_SKILLS_MESSAGE,
            ),
            common_skills_html: Self::chips_html(&report.common_skills, "chip-matched", "(none)"),
            bullets_html,
            cover_letter: Self::escape(report.cover_letter_display()),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        template.render().map_err(|e| {
            crate::error::ResumeOptimizerError::OutputFormatting(format!(
                "HTML rendering failed: {}",
                e
            ))
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_match{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_match{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_match{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_match{}.html", base_name, timestamp_suffix),
    }
}
