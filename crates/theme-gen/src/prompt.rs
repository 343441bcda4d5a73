//! Generation request prompt assembly
//!
//! Builds the single text instruction sent to the provider. The prompt
//! embeds existing colors with an influence percentage and wording bucket,
//! font and business metadata, generation counts and hue-variety guidance,
//! and closes with the strict one-JSON-object reply contract the repair
//! pipeline expects back.

use std::fmt::Write as _;

use crate::influence::InfluenceLevel;
use crate::request::GenerationRequest;

/// Assemble the full instruction text for a generation request
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are refreshing the visual theme of a website. Propose new design \
         tokens that fit the brand described below.\n",
    );

    write_business_section(&mut prompt, request);
    if request.axes.colors {
        write_color_section(&mut prompt, request);
    }
    if request.axes.fonts {
        write_font_section(&mut prompt, request);
    }
    if request.axes.icons {
        prompt.push_str("\nAlso propose a matching icon set (name, style, library).\n");
    }
    write_reply_contract(&mut prompt, request);

    prompt
}

fn write_business_section(prompt: &mut String, request: &GenerationRequest) {
    let business = &request.snapshot.business;
    if business.is_empty() {
        return;
    }

    let level = InfluenceLevel::from_scalar(request.influence.business_details);
    let _ = writeln!(prompt, "\nBusiness context ({} influence):", level);
    if !business.name.is_empty() {
        let _ = writeln!(prompt, "- Name: {}", business.name);
    }
    if !business.industry.is_empty() {
        let _ = writeln!(prompt, "- Industry: {}", business.industry);
    }
    if !business.description.is_empty() {
        let _ = writeln!(prompt, "- Description: {}", business.description);
    }
    if !business.target_audience.is_empty() {
        let _ = writeln!(prompt, "- Target audience: {}", business.target_audience);
    }
    let _ = writeln!(prompt, "{}", level.phrase());
}

fn write_color_section(prompt: &mut String, request: &GenerationRequest) {
    let influence = request.influence.color;
    let level = InfluenceLevel::from_scalar(influence);

    let _ = writeln!(
        prompt,
        "\nColor palette ({:.0}% influence from the existing palette, {}):",
        influence * 100.0,
        level
    );
    let _ = writeln!(prompt, "{}", level.phrase());

    if !request.snapshot.colors.is_empty() {
        prompt.push_str("Existing colors:\n");
        for token in &request.snapshot.colors {
            let usecases = token
                .ideal_usecases
                .iter()
                .map(|role| role.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let main_type = token
                .main_color_type
                .map(|t| format!(", type {}", t))
                .unwrap_or_default();
            let _ = writeln!(
                prompt,
                "- {} \"{}\" ({}{}) used for: {}",
                token.hex,
                token.name,
                token.category,
                main_type,
                if usecases.is_empty() { "-" } else { usecases.as_str() }
            );
        }
    }

    let dna = &request.dna;
    let _ = writeln!(
        prompt,
        "Generate exactly {} main colors (with mainColorType primary, secondary, \
         contrast or accent-main) and {} supplement colors.",
        dna.num_main_colors, dna.num_supplement_colors
    );
    let _ = writeln!(
        prompt,
        "Hue variety: {:.0}%. {}",
        dna.hue_variety * 100.0,
        hue_variety_guidance(dna.hue_variety)
    );
    if dna.include_error_color {
        prompt.push_str("Include a dedicated error color among the supplements.\n");
    }
    if dna.include_success_color {
        prompt.push_str("Include a dedicated success color among the supplements.\n");
    }
}

fn write_font_section(prompt: &mut String, request: &GenerationRequest) {
    let fonts = &request.snapshot.fonts;
    let level = InfluenceLevel::from_scalar(request.influence.font);

    let _ = writeln!(prompt, "\nFonts ({} influence):", level);
    if !fonts.is_empty() {
        let _ = writeln!(
            prompt,
            "Currently headings use \"{}\" and body text uses \"{}\".",
            fonts.heading_font, fonts.body_font
        );
    }
    let _ = writeln!(
        prompt,
        "{} Propose a heading/body font pairing.",
        level.phrase()
    );
}

fn write_reply_contract(prompt: &mut String, request: &GenerationRequest) {
    prompt.push_str(
        "\nReply with exactly one JSON object and nothing else - no prose, no code \
         fences. The object has these keys:\n",
    );
    if request.axes.colors {
        prompt.push_str(
            "- \"colors\": array of {hex, name, category (\"main\"|\"supplement\"), \
             mainColorType (main colors only), description, idealUsecases (array of \
             design-role names such as background, primary, chart-1)}\n\
             - \"colorExplanation\": string\n",
        );
    }
    if request.axes.fonts {
        prompt.push_str(
            "- \"fonts\": {headingFont, bodyFont, usageNotes}\n- \"fontExplanation\": string\n",
        );
    }
    if request.axes.icons {
        prompt.push_str(
            "- \"icons\": {setName, style, library}\n- \"iconExplanation\": string\n",
        );
    }
}

fn hue_variety_guidance(hue_variety: f64) -> &'static str {
    if hue_variety < 0.34 {
        "Keep supplemental hues close to the primary and secondary."
    } else if hue_variety < 0.67 {
        "Let supplemental hues drift moderately from the primary and secondary."
    } else {
        "Spread supplemental hues widely across the wheel, well away from the \
         primary and secondary."
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::GenerationDna;
    use crate::influence::InfluenceSettings;
    use crate::request::GenerationAxes;
    use theme_tokens::{
        BusinessDetails, ColorToken, FontSelection, MainColorType, ThemeSnapshot, TokenCategory,
    };

    fn sample_request() -> GenerationRequest {
        let snapshot = ThemeSnapshot::new(vec![ColorToken::new(
            "#0078D4",
            "Azure",
            TokenCategory::Main,
        )
        .with_main_type(MainColorType::Primary)])
        .with_fonts(FontSelection::new("Fraunces", "Inter"))
        .with_business(BusinessDetails {
            name: "Tidepool Coffee".to_string(),
            industry: "Hospitality".to_string(),
            ..Default::default()
        });

        GenerationRequest::new(snapshot)
    }

    #[test]
    fn test_prompt_embeds_existing_colors_and_influence() {
        let request = sample_request()
            .with_influence(InfluenceSettings::new(0.65, 0.5, 0.5));
        let prompt = build_prompt(&request);

        assert!(prompt.contains("#0078D4"));
        assert!(prompt.contains("\"Azure\""));
        assert!(prompt.contains("65% influence"));
        assert!(prompt.contains("high"));
    }

    #[test]
    fn test_prompt_embeds_dna_counts() {
        let request = sample_request().with_dna(GenerationDna {
            num_main_colors: 3,
            num_supplement_colors: 7,
            include_error_color: true,
            ..Default::default()
        });
        let prompt = build_prompt(&request);

        assert!(prompt.contains("exactly 3 main colors"));
        assert!(prompt.contains("7 supplement colors"));
        assert!(prompt.contains("dedicated error color"));
        assert!(!prompt.contains("dedicated success color"));
    }

    #[test]
    fn test_prompt_reply_contract_follows_axes() {
        let colors_only = build_prompt(&sample_request());
        assert!(colors_only.contains("\"colors\""));
        assert!(colors_only.contains("colorExplanation"));
        assert!(!colors_only.contains("fontExplanation"));
        assert!(!colors_only.contains("iconExplanation"));

        let all = build_prompt(&sample_request().with_axes(GenerationAxes::all()));
        assert!(all.contains("fontExplanation"));
        assert!(all.contains("iconExplanation"));
        assert!(all.contains("headingFont"));
    }

    #[test]
    fn test_prompt_demands_single_json_object() {
        let prompt = build_prompt(&sample_request());
        assert!(prompt.contains("exactly one JSON object"));
        assert!(prompt.contains("nothing else"));
    }

    #[test]
    fn test_empty_business_section_omitted() {
        let request = GenerationRequest::new(ThemeSnapshot::default());
        let prompt = build_prompt(&request);
        assert!(!prompt.contains("Business context"));
    }
}
