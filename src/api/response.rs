//! Response types for the remote analysis service
//!
//! Everything beyond `analysis.score` is optional on the wire. Absent fields
//! deserialize to defaults so that no response shape can fail rendering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub analysis: Analysis,

    #[serde(default)]
    pub ai_suggestions: Option<AiSuggestions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Match score in the 0-100 range
    pub score: f32,

    #[serde(default)]
    pub missing_skills: Vec<String>,

    #[serde(default)]
    pub common_skills: Vec<String>,
}

/// AI-generated content. The service has shipped the bullet list under two
/// different field names; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSuggestions {
    #[serde(default)]
    pub suggested_bullets: Option<Vec<String>>,

    #[serde(default)]
    pub bullets: Option<Vec<String>>,

    #[serde(default)]
    pub cover_letter_intro: Option<String>,
}

impl OptimizeResponse {
    /// Resolve the bullet list aliases: the first field that is present and
    /// non-empty wins, in the order `suggested_bullets`, `bullets`.
    pub fn resolved_bullets(&self) -> &[String] {
        let Some(suggestions) = &self.ai_suggestions else {
            return &[];
        };

        for candidate in [&suggestions.suggested_bullets, &suggestions.bullets] {
            if let Some(bullets) = candidate {
                if !bullets.is_empty() {
                    return bullets;
                }
            }
        }

        &[]
    }

    pub fn cover_letter_intro(&self) -> Option<&str> {
        self.ai_suggestions
            .as_ref()
            .and_then(|s| s.cover_letter_intro.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> OptimizeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_response_parses() {
        let response = parse(r#"{"analysis": {"score": 80}}"#);

        assert_eq!(response.analysis.score, 80.0);
        assert!(response.analysis.missing_skills.is_empty());
        assert!(response.analysis.common_skills.is_empty());
        assert!(response.ai_suggestions.is_none());
        assert!(response.resolved_bullets().is_empty());
        assert!(response.cover_letter_intro().is_none());
    }

    #[test]
    fn test_full_response_parses() {
        let response = parse(
            r#"{
                "analysis": {
                    "score": 72.5,
                    "missing_skills": ["Kubernetes", "Terraform"],
                    "common_skills": ["Rust", "SQL"]
                },
                "ai_suggestions": {
                    "suggested_bullets": ["Led migration to Kubernetes"],
                    "cover_letter_intro": "As a systems engineer..."
                }
            }"#,
        );

        assert_eq!(response.analysis.missing_skills.len(), 2);
        assert_eq!(response.analysis.common_skills[0], "Rust");
        assert_eq!(response.resolved_bullets(), ["Led migration to Kubernetes"]);
        assert_eq!(
            response.cover_letter_intro(),
            Some("As a systems engineer...")
        );
    }

    #[test]
    fn test_bullets_alias_is_used_when_suggested_bullets_absent() {
        let response = parse(
            r#"{
                "analysis": {"score": 50},
                "ai_suggestions": {"bullets": ["A", "B"]}
            }"#,
        );

        assert_eq!(response.resolved_bullets(), ["A", "B"]);
    }

    #[test]
    fn test_empty_suggested_bullets_falls_through_to_bullets() {
        let response = parse(
            r#"{
                "analysis": {"score": 50},
                "ai_suggestions": {"suggested_bullets": [], "bullets": ["A"]}
            }"#,
        );

        assert_eq!(response.resolved_bullets(), ["A"]);
    }

    #[test]
    fn test_suggested_bullets_wins_over_bullets() {
        let response = parse(
            r#"{
                "analysis": {"score": 50},
                "ai_suggestions": {"suggested_bullets": ["S"], "bullets": ["B"]}
            }"#,
        );

        assert_eq!(response.resolved_bullets(), ["S"]);
    }

    #[test]
    fn test_both_bullet_fields_empty_yields_no_bullets() {
        let response = parse(
            r#"{
                "analysis": {"score": 50},
                "ai_suggestions": {"suggested_bullets": [], "bullets": []}
            }"#,
        );

        assert!(response.resolved_bullets().is_empty());
    }
}
