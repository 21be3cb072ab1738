//! Submission controller for the analysis request lifecycle
//!
//! Owns the Idle -> Loading -> Succeeded/Failed state machine. Validation
//! happens before any network activity; a failed request surfaces a generic
//! message while the underlying cause goes to the log.

use crate::api::{ApiClient, OptimizeResponse};
use crate::error::ResumeOptimizerError;
use crate::input::manager::ResumeUpload;
use log::{error, info};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const VALIDATION_MESSAGE: &str = "Please provide both a resume and job description.";

pub const CONNECTION_FAILED_MESSAGE: &str =
    "Connection failed. Please check your backend URL and ensure the Space is running.";

/// Scores strictly above this trigger the celebration effect
pub const CELEBRATION_THRESHOLD: f32 = 75.0;

const CELEBRATE_DELAY: Duration = Duration::from_millis(500);
const REVEAL_DELAY: Duration = Duration::from_millis(200);

/// The two user inputs. Transient; never persisted.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    pub resume: Option<ResumeUpload>,
    pub jd_text: String,
}

#[derive(Debug, Clone)]
pub enum RequestState {
    Idle,
    Loading,
    Succeeded(OptimizeResponse),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

pub struct SubmissionController {
    client: ApiClient,
    state: RequestState,
}

impl SubmissionController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Run one full submission cycle.
    ///
    /// Fails fast with the validation message when either input is empty,
    /// without contacting the network. Resubmitting identical input repeats
    /// the cycle; no caching or deduplication.
    pub async fn submit(&mut self, input: &AnalysisInput) -> &RequestState {
        let resume = match validate(input) {
            Ok(resume) => resume,
            Err(message) => {
                self.state = RequestState::Failed(message);
                return &self.state;
            }
        };

        // Starting a request discards any prior result or error.
        self.state = RequestState::Loading;

        info!("Submitting analysis request");
        let outcome = self.client.optimize(resume, &input.jd_text).await;
        self.state = settle(outcome);
        &self.state
    }
}

/// Presence check for the two inputs, returning the upload on success.
/// A zero-byte file or all-whitespace job description counts as missing.
pub fn validate(input: &AnalysisInput) -> Result<&ResumeUpload, String> {
    let resume = input.resume.as_ref().filter(|r| !r.bytes.is_empty());

    match resume {
        Some(resume) if !input.jd_text.trim().is_empty() => Ok(resume),
        _ => Err(VALIDATION_MESSAGE.to_string()),
    }
}

/// Map a request outcome onto the terminal states. The raw error is logged,
/// never shown to the user.
fn settle(outcome: Result<OptimizeResponse, ResumeOptimizerError>) -> RequestState {
    match outcome {
        Ok(response) => RequestState::Succeeded(response),
        Err(e) => {
            error!("Analysis request failed: {}", e);
            RequestState::Failed(CONNECTION_FAILED_MESSAGE.to_string())
        }
    }
}

pub fn should_celebrate(score: f32) -> bool {
    score > CELEBRATION_THRESHOLD
}

type EffectFn = Box<dyn Fn() + Send + Sync + 'static>;

/// Post-success side effects, decoupled from the renderer.
///
/// Each hook is scheduled independently on its fixed delay with no ordering
/// guarantee relative to the other. Best-effort: an unset hook is skipped
/// and the returned handles may be dropped without cancelling the effects.
#[derive(Default)]
pub struct PostSuccessEffects {
    celebrate: Option<EffectFn>,
    reveal: Option<EffectFn>,
}

impl PostSuccessEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Celebration hook; only fires when the score clears the threshold.
    pub fn on_celebrate(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.celebrate = Some(Box::new(f));
        self
    }

    /// Reveal hook; advances presentation to the results region.
    pub fn on_reveal(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.reveal = Some(Box::new(f));
        self
    }

    pub fn schedule(self, score: f32) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::new();

        if let Some(reveal) = self.reveal {
            handles.push(tokio::spawn(async move {
                tokio::time::sleep(REVEAL_DELAY).await;
                reveal();
            }));
        }

        if should_celebrate(score) {
            if let Some(celebrate) = self.celebrate {
                handles.push(tokio::spawn(async move {
                    tokio::time::sleep(CELEBRATE_DELAY).await;
                    celebrate();
                }));
            }
        }

        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn upload(bytes: &[u8]) -> ResumeUpload {
        ResumeUpload {
            file_name: "resume.pdf".to_string(),
            mime_type: "application/pdf",
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_validation_requires_both_inputs() {
        let empty = AnalysisInput::default();
        assert_eq!(validate(&empty).unwrap_err(), VALIDATION_MESSAGE);

        let resume_only = AnalysisInput {
            resume: Some(upload(b"%PDF-1.4")),
            jd_text: String::new(),
        };
        assert!(validate(&resume_only).is_err());

        let jd_only = AnalysisInput {
            resume: None,
            jd_text: "Rust engineer".to_string(),
        };
        assert!(validate(&jd_only).is_err());

        let both = AnalysisInput {
            resume: Some(upload(b"%PDF-1.4")),
            jd_text: "Rust engineer".to_string(),
        };
        assert!(validate(&both).is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_inputs() {
        let blank_jd = AnalysisInput {
            resume: Some(upload(b"%PDF-1.4")),
            jd_text: "   \n\t".to_string(),
        };
        assert!(validate(&blank_jd).is_err());

        let empty_file = AnalysisInput {
            resume: Some(upload(b"")),
            jd_text: "Rust engineer".to_string(),
        };
        assert!(validate(&empty_file).is_err());
    }

    #[test]
    fn test_settle_success_and_failure() {
        let response: OptimizeResponse =
            serde_json::from_str(r#"{"analysis": {"score": 80}}"#).unwrap();
        assert!(matches!(
            settle(Ok(response)),
            RequestState::Succeeded(_)
        ));

        let failed = settle(Err(ResumeOptimizerError::Network("timeout".to_string())));
        match failed {
            RequestState::Failed(message) => assert_eq!(message, CONNECTION_FAILED_MESSAGE),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_celebration_boundary() {
        assert!(!should_celebrate(60.0));
        assert!(!should_celebrate(75.0));
        assert!(should_celebrate(76.0));
        assert!(should_celebrate(80.0));
    }

    #[tokio::test]
    async fn test_invalid_submit_fails_without_network() {
        // Unroutable base URL: any network attempt would error differently
        // than the validation message.
        let client = ApiClient::with_base_url("http://127.0.0.1:9".to_string(), 1).unwrap();
        let mut controller = SubmissionController::new(client);

        let state = controller.submit(&AnalysisInput::default()).await;
        match state {
            RequestState::Failed(message) => assert_eq!(message, VALIDATION_MESSAGE),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_effects_fire_above_threshold() {
        let celebrated = Arc::new(AtomicBool::new(false));
        let revealed = Arc::new(AtomicBool::new(false));

        let c = celebrated.clone();
        let r = revealed.clone();
        let effects = PostSuccessEffects::new()
            .on_celebrate(move || c.store(true, Ordering::SeqCst))
            .on_reveal(move || r.store(true, Ordering::SeqCst));

        for handle in effects.schedule(80.0) {
            handle.await.unwrap();
        }

        assert!(celebrated.load(Ordering::SeqCst));
        assert!(revealed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_celebration_skipped_at_threshold() {
        let celebrated = Arc::new(AtomicBool::new(false));

        let c = celebrated.clone();
        let effects = PostSuccessEffects::new()
            .on_celebrate(move || c.store(true, Ordering::SeqCst))
            .on_reveal(|| {});

        for handle in effects.schedule(75.0) {
            handle.await.unwrap();
        }

        assert!(!celebrated.load(Ordering::SeqCst));
    }
}
