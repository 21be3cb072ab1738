//! Resume optimizer: AI-powered resume and job description match analysis

mod api;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod submission;

use api::ApiClient;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::{Config, OutputFormat};
use error::{Result, ResumeOptimizerError};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use log::{error, info};
use output::animate::{self, AnimatedRenderer};
use output::formatter::{save_report_to_file, ReportGenerator};
use output::report::MatchReport;
use std::process;
use std::time::Duration;
use submission::{AnalysisInput, PostSuccessEffects, RequestState, SubmissionController};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            jd_text,
            output,
            save,
            no_animate,
        } => {
            info!("Starting resume match analysis");

            // Validate provided file extensions up front; presence is the
            // submission controller's job.
            if let Some(resume_path) = &resume {
                cli::validate_file_extension(resume_path, &["pdf", "docx", "txt"])
                    .map_err(|e| ResumeOptimizerError::InvalidInput(format!("Resume file: {}", e)))?;
            }

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md"]).map_err(|e| {
                    ResumeOptimizerError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeOptimizerError::InvalidInput)?;

            let console = output_format == OutputFormat::Console;
            if console {
                println!("🚀 Resume match analysis");
                if let Some(resume_path) = &resume {
                    println!("📄 Resume: {}", resume_path.display());
                }
                if let Some(job_path) = &job {
                    println!("💼 Job Description: {}", job_path.display());
                }
            }

            // Collect the two inputs
            let input_manager = InputManager::new();

            let resume_upload = match &resume {
                Some(path) => Some(input_manager.load_resume(path).await?),
                None => None,
            };

            let job_description = if let Some(text) = jd_text {
                text
            } else if let Some(path) = &job {
                input_manager.load_job_description(path).await?
            } else {
                String::new()
            };

            let input = AnalysisInput {
                resume: resume_upload,
                jd_text: job_description,
            };

            // Submit to the analysis service
            let client = ApiClient::new(config.api.timeout_secs)?;
            let mut controller = SubmissionController::new(client);

            let spinner = if console && submission::validate(&input).is_ok() {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::with_template("{spinner} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                spinner.set_message("Analyzing match...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                Some(spinner)
            } else {
                None
            };

            let state = controller.submit(&input).await.clone();

            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            match state {
                RequestState::Succeeded(response) => {
                    let report = MatchReport::from_response(&response);
                    let use_colors = config.output.color_output;

                    if console {
                        // Post-success effects: reveal the results region,
                        // then celebrate when the score clears the threshold.
                        let effects = PostSuccessEffects::new()
                            .on_reveal(move || {
                                println!("\n{}", "━".repeat(70).dimmed());
                            })
                            .on_celebrate(move || animate::confetti_burst(use_colors));

                        for handle in effects.schedule(report.score) {
                            // Best-effort; a panicked effect never fails the run
                            let _ = handle.await;
                        }

                        if config.output.animations && !no_animate {
                            let renderer =
                                AnimatedRenderer::new(use_colors, config.animation.clone());
                            renderer.render(&report).await;
                        } else {
                            let generator = ReportGenerator::with_options(use_colors, true, true, true);
                            print!("{}", generator.generate_report(&report, &output_format)?);
                        }
                    } else {
                        let generator = ReportGenerator::new();
                        println!("{}", generator.generate_report(&report, &output_format)?);
                    }

                    if let Some(save_path) = save {
                        let generator = ReportGenerator::with_options(false, true, true, true);
                        let content = generator.generate_report(&report, &output_format)?;
                        save_report_to_file(&content, &save_path)?;
                        if console {
                            println!("\n💾 Report saved to: {}", save_path.display());
                        }
                    }

                    info!(
                        "Analysis complete, match score: {}%",
                        report.score_percentage()
                    );
                }
                RequestState::Failed(message) => {
                    println!("\n❌ {}", message.red());
                    process::exit(1);
                }
                RequestState::Idle | RequestState::Loading => {
                    unreachable!("submit always settles into a terminal state")
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Analysis service: {}", api::client::API_BASE_URL);
                println!("Request timeout: {}s", config.api.timeout_secs);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Colors: {}", config.output.color_output);
                println!("  Animations: {}", config.output.animations);
                println!("\nAnimation pacing:");
                println!("  Typing interval: {}ms", config.animation.typing_interval_ms);
                println!("  Bullet stagger: {}ms", config.animation.bullet_stagger_ms);
                println!("  Score count-up: {}ms", config.animation.score_duration_ms);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
