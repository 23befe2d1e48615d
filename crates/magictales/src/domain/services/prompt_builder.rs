//! Prompt Builder
//!
//! Turns a story request into the single instruction string sent to the
//! text model. User text is embedded as-is.

use crate::domain::entities::{StoryRequest, VOCAB_SIZE};
use crate::domain::value_objects::Superpower;

/// Build the generation prompt for a request. Deterministic.
pub fn build_story_prompt(request: &StoryRequest) -> String {
    let level = request.level;
    let mut prompt = format!(
        "You are a children's author writing an English story for a young learner.\n\
         Write a {style} story of about {words} words at CEFR level {code}.\n\
         Level guidance: {hint}\n",
        style = request.style.label().to_lowercase(),
        words = request.target_word_count(),
        code = level.code(),
        hint = level.hint(),
    );

    prompt.push_str("\n## Story Details\n");
    prompt.push_str(&format!("- Hero: {}\n", request.hero()));
    prompt.push_str(&format!(
        "- Pet: {}\n",
        optional_field(&request.pet_name, "none")
    ));
    prompt.push_str(&format!(
        "- City: {}\n",
        optional_field(&request.city, "anywhere")
    ));
    prompt.push_str(&format!(
        "- Favorite color: {}\n",
        optional_field(&request.favorite_color, "any")
    ));
    prompt.push_str(&format!("- Theme: {}\n", request.theme.label()));
    if request.superpower != Superpower::None {
        prompt.push_str(&format!(
            "- Superpower: the hero has {}\n",
            request.superpower.label().to_lowercase()
        ));
    }

    prompt.push_str(&format!(
        "\nChoose exactly {VOCAB_SIZE} useful vocabulary words from the story for the learner.\n"
    ));
    prompt.push_str(
        "Return only a JSON object with keys \"story\" and \"vocab\": \
         \"story\" is the full story as a string, \"vocab\" is an array of strings. \
         Do not add any text outside the JSON object.",
    );

    prompt
}

fn optional_field<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CefrLevel, StoryLength, StoryStyle, StoryTheme};

    fn sample_request() -> StoryRequest {
        StoryRequest {
            hero_name: "Leo".to_string(),
            pet_name: Some("Rex".to_string()),
            city: Some("London".to_string()),
            favorite_color: Some("blue".to_string()),
            level: CefrLevel::A1Plus,
            length: StoryLength::EightMinutes,
            style: StoryStyle::Adventure,
            theme: StoryTheme::Courage,
            superpower: Superpower::Flight,
        }
    }

    #[test]
    fn test_prompt_embeds_all_fields() {
        let prompt = build_story_prompt(&sample_request());

        assert!(prompt.contains("- Hero: Leo"));
        assert!(prompt.contains("- Pet: Rex"));
        assert!(prompt.contains("- City: London"));
        assert!(prompt.contains("- Favorite color: blue"));
        assert!(prompt.contains("- Theme: Courage"));
        assert!(prompt.contains("the hero has flight"));
        assert!(prompt.contains("about 800 words"));
        assert!(prompt.contains("CEFR level A1+"));
        assert!(prompt.contains("adventure story"));
    }

    #[test]
    fn test_prompt_requests_strict_json() {
        let prompt = build_story_prompt(&sample_request());
        assert!(prompt.contains("Return only a JSON object with keys \"story\" and \"vocab\""));
        assert!(prompt.contains("exactly 5 useful vocabulary words"));
    }

    #[test]
    fn test_missing_optionals_use_fallbacks() {
        let mut request = StoryRequest::new("Mia");
        request.pet_name = Some("  ".to_string());
        let prompt = build_story_prompt(&request);

        assert!(prompt.contains("- Pet: none"));
        assert!(prompt.contains("- City: anywhere"));
        assert!(!prompt.contains("Superpower"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = sample_request();
        assert_eq!(build_story_prompt(&request), build_story_prompt(&request));
    }
}
