//! Display projection of the analysis response

use crate::api::OptimizeResponse;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

pub const NO_MISSING_SKILLS_MESSAGE: &str = "No missing skills detected!";
pub const NO_COVER_LETTER_MESSAGE: &str = "No draft available.";

/// Everything the renderers need, projected once from the wire response.
/// Optional wire fields are resolved here so no formatter has to reason
/// about absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Match score in the 0-100 range
    pub score: f32,

    /// Skills the job description asks for that the resume lacks
    pub missing_skills: Vec<String>,

    /// Skills present on both sides
    pub common_skills: Vec<String>,

    /// AI-rewritten bullet points, alias fields already resolved
    pub suggested_bullets: Vec<String>,

    /// Optional cover-letter opening
    pub cover_letter_intro: Option<String>,

    /// Report generation time
    pub generated_at: SystemTime,
}

impl MatchReport {
    pub fn from_response(response: &OptimizeResponse) -> Self {
        Self {
            score: response.analysis.score,
            missing_skills: response.analysis.missing_skills.clone(),
            common_skills: response.analysis.common_skills.clone(),
            suggested_bullets: response.resolved_bullets().to_vec(),
            cover_letter_intro: response.cover_letter_intro().map(|s| s.to_string()),
            generated_at: SystemTime::now(),
        }
    }

    /// Score rounded for display, clamped to the documented range.
    pub fn score_percentage(&self) -> u8 {
        self.score.round().clamp(0.0, 100.0) as u8
    }

    /// Cover-letter opening with the documented fallback.
    pub fn cover_letter_display(&self) -> &str {
        self.cover_letter_intro
            .as_deref()
            .unwrap_or(NO_COVER_LETTER_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> OptimizeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_projection_of_minimal_response() {
        let report = MatchReport::from_response(&response(r#"{"analysis": {"score": 60}}"#));

        assert_eq!(report.score_percentage(), 60);
        assert!(report.missing_skills.is_empty());
        assert!(report.common_skills.is_empty());
        assert!(report.suggested_bullets.is_empty());
        assert_eq!(report.cover_letter_display(), NO_COVER_LETTER_MESSAGE);
    }

    #[test]
    fn test_projection_resolves_bullet_alias() {
        let report = MatchReport::from_response(&response(
            r#"{
                "analysis": {"score": 80},
                "ai_suggestions": {"bullets": ["A", "B"]}
            }"#,
        ));

        assert_eq!(report.suggested_bullets, ["A", "B"]);
    }

    #[test]
    fn test_score_percentage_rounds_and_clamps() {
        let mut report = MatchReport::from_response(&response(r#"{"analysis": {"score": 72.6}}"#));
        assert_eq!(report.score_percentage(), 73);

        report.score = 104.0;
        assert_eq!(report.score_percentage(), 100);

        report.score = -3.0;
        assert_eq!(report.score_percentage(), 0);
    }
}
