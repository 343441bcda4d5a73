//! Generation orchestration
//!
//! Ties the pipeline together: prompt assembly, one provider call, reply
//! repair, normalization, influence blending. The orchestrator holds no
//! session state between requests, and a failed or malformed reply is
//! surfaced once — whether to retry with a fresh request is the caller's
//! decision.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::influence::blend_palette;
use crate::prompt::build_prompt;
use crate::provider::TextGenerator;
use crate::repair;
use crate::request::{GenerationProposal, GenerationRequest};

/// Drives one generation request end to end
#[derive(Clone)]
pub struct GenerationOrchestrator {
    provider: Arc<dyn TextGenerator>,
}

impl GenerationOrchestrator {
    /// Create an orchestrator over a provider
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    /// Run one generation request and return the reconciled proposal
    ///
    /// The proposal never touches the live theme; committing it is the
    /// caller's move.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationProposal> {
        request.dna.validate()?;

        let prompt = build_prompt(request);
        debug!(
            prompt_len = prompt.len(),
            colors = request.axes.colors,
            fonts = request.axes.fonts,
            icons = request.axes.icons,
            "dispatching generation request"
        );

        let raw = self.provider.generate(&prompt).await?;
        let reply = repair::parse_reply(&raw, request.axes.colors)?;

        let mut proposal = GenerationProposal::default();

        if request.axes.colors {
            let entries = reply
                .get("colors")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let normalized = repair::normalize_colors(&entries);
            debug!(proposed = normalized.len(), "normalized color entries");

            proposal.colors = blend_palette(
                &request.snapshot.colors,
                normalized,
                request.influence.color,
            );
            proposal.color_explanation = string_field(&reply, "colorExplanation");
        }

        if request.axes.fonts {
            proposal.fonts = reply
                .get("fonts")
                .and_then(|v| serde_json::from_value(v.clone()).ok());
            proposal.font_explanation = optional_string_field(&reply, "fontExplanation");
        }

        if request.axes.icons {
            proposal.icons = reply
                .get("icons")
                .and_then(|v| serde_json::from_value(v.clone()).ok());
            proposal.icon_explanation = optional_string_field(&reply, "iconExplanation");
        }

        Ok(proposal)
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use theme_tokens::{ColorToken, MainColorType, ThemeSnapshot, TokenCategory};

    use crate::error::GenerationError;
    use crate::influence::InfluenceSettings;
    use crate::request::GenerationAxes;

    /// Provider stub replaying a canned reply and recording the prompt
    struct ScriptedProvider {
        reply: Result<String>,
        seen_prompt: Mutex<Option<String>>,
    }

    impl ScriptedProvider {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                seen_prompt: Mutex::new(None),
            })
        }

        fn failing(err: GenerationError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(err),
                seen_prompt: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedProvider {
        async fn generate(&self, prompt: &str) -> Result<String> {
            *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(GenerationError::Provider { status, message }) => {
                    Err(GenerationError::Provider {
                        status: *status,
                        message: message.clone(),
                    })
                }
                Err(_) => unreachable!("scripted failures are provider errors"),
            }
        }
    }

    fn existing_snapshot() -> ThemeSnapshot {
        ThemeSnapshot::new(vec![ColorToken::new("#112233", "Ink", TokenCategory::Main)
            .with_main_type(MainColorType::Primary)])
    }

    #[tokio::test]
    async fn test_generate_happy_path() {
        let provider = ScriptedProvider::replying(
            r##"{"colors": [{"hex": "#AABBCC", "name": "Mist", "category": "main",
                 "mainColorType": "primary"}],
                 "colorExplanation": "soft and calm"}"##,
        );
        let orchestrator = GenerationOrchestrator::new(provider.clone());

        let request = GenerationRequest::new(existing_snapshot());
        let proposal = orchestrator.generate(&request).await.unwrap();

        assert_eq!(proposal.colors.len(), 1);
        assert_eq!(proposal.colors[0].hex, "#AABBCC");
        assert_eq!(proposal.color_explanation, "soft and calm");

        let prompt = provider.seen_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("#112233"));
    }

    #[tokio::test]
    async fn test_generate_repairs_truncated_reply() {
        let provider = ScriptedProvider::replying(r##"{"colors": [{"hex":"#AABBCC"}"##);
        let orchestrator = GenerationOrchestrator::new(provider);

        let request = GenerationRequest::new(ThemeSnapshot::default());
        let proposal = orchestrator.generate(&request).await.unwrap();

        assert_eq!(proposal.colors.len(), 1);
        assert_eq!(proposal.colors[0].name, "Color 1");
    }

    #[tokio::test]
    async fn test_generate_discards_proposal_at_high_influence() {
        let provider = ScriptedProvider::replying(
            r##"{"colors": [{"hex": "#AABBCC", "name": "Mist", "category": "main",
                 "mainColorType": "primary"}]}"##,
        );
        let orchestrator = GenerationOrchestrator::new(provider);

        let request = GenerationRequest::new(existing_snapshot())
            .with_influence(InfluenceSettings::new(0.95, 0.5, 0.5));
        let proposal = orchestrator.generate(&request).await.unwrap();

        assert_eq!(proposal.colors.len(), 1);
        assert_eq!(proposal.colors[0].hex, "#112233");
        assert_eq!(proposal.colors[0].name, "Ink");
    }

    #[tokio::test]
    async fn test_generate_blends_in_band() {
        let provider = ScriptedProvider::replying(
            r##"{"colors": [{"hex": "#AABBCC", "name": "Mist", "category": "main",
                 "mainColorType": "primary"}]}"##,
        );
        let orchestrator = GenerationOrchestrator::new(provider);

        let request = GenerationRequest::new(existing_snapshot())
            .with_influence(InfluenceSettings::new(0.8, 0.5, 0.5));
        let proposal = orchestrator.generate(&request).await.unwrap();

        assert_eq!(proposal.colors[0].hex, "#5E6F80");
    }

    #[tokio::test]
    async fn test_generate_parses_fonts_and_icons() {
        let provider = ScriptedProvider::replying(
            r##"{"colors": [],
                 "colorExplanation": "",
                 "fonts": {"headingFont": "Fraunces", "bodyFont": "Inter"},
                 "fontExplanation": "serif over sans",
                 "icons": {"setName": "Lucide", "style": "outline"},
                 "iconExplanation": "matches the line weight"}"##,
        );
        let orchestrator = GenerationOrchestrator::new(provider);

        let request =
            GenerationRequest::new(ThemeSnapshot::default()).with_axes(GenerationAxes::all());
        let proposal = orchestrator.generate(&request).await.unwrap();

        let fonts = proposal.fonts.unwrap();
        assert_eq!(fonts.heading_font.as_deref(), Some("Fraunces"));
        assert_eq!(proposal.font_explanation.as_deref(), Some("serif over sans"));

        let icons = proposal.icons.unwrap();
        assert_eq!(icons.set_name.as_deref(), Some("Lucide"));
        assert_eq!(
            proposal.icon_explanation.as_deref(),
            Some("matches the line weight")
        );
    }

    #[tokio::test]
    async fn test_generate_surfaces_provider_error_once() {
        let provider = ScriptedProvider::failing(GenerationError::Provider {
            status: 503,
            message: "overloaded".to_string(),
        });
        let orchestrator = GenerationOrchestrator::new(provider);

        let request = GenerationRequest::new(ThemeSnapshot::default());
        let err = orchestrator.generate(&request).await.unwrap_err();

        assert!(matches!(err, GenerationError::Provider { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_dna_before_calling_provider() {
        let provider = ScriptedProvider::replying("{}");
        let orchestrator = GenerationOrchestrator::new(provider.clone());

        let mut request = GenerationRequest::new(ThemeSnapshot::default());
        request.dna.num_main_colors = 0;

        let err = orchestrator.generate(&request).await.unwrap_err();
        assert!(matches!(err, GenerationError::Configuration(_)));
        assert!(provider.seen_prompt.lock().unwrap().is_none());
    }
}
