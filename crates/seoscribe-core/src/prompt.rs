//! Prompt builder for content generation.
//!
//! Renders a [`GenerationRequest`] into the user prompt sent to the
//! completion endpoint. Rendering is pure and deterministic.

use seoscribe_types::content::GenerationRequest;

/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a digital marketing expert specializing in SEO and \
persuasive writing. Always respond in the requested language.";

/// Prompt used by the connectivity check.
pub const TEST_PROMPT: &str = "Say only 'OK'";

/// Builds the user prompt from a generation request.
///
/// Layout:
/// ```text
/// Write an SEO-optimized text about the topic '{topic}'.
/// Return only the final text, without quotes.
///
/// - Platform: ...
/// - Tone: ...
/// - Target Audience: ...
/// - Length: ...
/// - Language: ...
/// - {call-to-action line}
/// - {hashtag line}
/// - Mandatory keywords: ...      (only when keywords are present)
/// ```
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the prompt. Never fails; topic validation happens upstream.
    pub fn build(request: &GenerationRequest) -> String {
        let mut lines = Vec::with_capacity(11);

        lines.push(format!(
            "Write an SEO-optimized text about the topic '{}'.",
            request.topic
        ));
        lines.push("Return only the final text, without quotes.".to_string());
        lines.push(String::new());

        lines.push(format!("- Platform: {}", request.platform));
        lines.push(format!("- Tone: {}", request.tone));
        lines.push(format!("- Target Audience: {}", request.audience));
        lines.push(format!("- Length: {}", request.length));
        lines.push(format!("- Language: {}", request.language));
        lines.push(format!("- {}", Self::cta_line(request.include_cta)));
        lines.push(format!("- {}", Self::hashtag_line(request.include_hashtags)));

        if let Some(keywords) = request.keywords() {
            lines.push(format!("- Mandatory keywords: {keywords}"));
        }

        lines.join("\n")
    }

    fn cta_line(include: bool) -> &'static str {
        if include {
            "Include a clear call-to-action."
        } else {
            "Do not include a call-to-action."
        }
    }

    fn hashtag_line(include: bool) -> &'static str {
        if include {
            "Include relevant hashtags at the end."
        } else {
            "Do not include hashtags."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seoscribe_types::content::{Audience, Language, Length, Platform, Tone};

    fn request(cta: bool, hashtags: bool) -> GenerationRequest {
        GenerationRequest {
            include_cta: cta,
            include_hashtags: hashtags,
            ..GenerationRequest::new("mental health")
        }
    }

    #[test]
    fn test_contains_topic_and_fields() {
        let req = GenerationRequest {
            topic: "healthy eating".to_string(),
            platform: Platform::LinkedIn,
            tone: Tone::Inspirational,
            length: Length::Long,
            audience: Audience::YoungAdults,
            language: Language::Portuguese,
            ..Default::default()
        };
        let prompt = PromptBuilder::build(&req);

        assert!(prompt.starts_with("Write an SEO-optimized text about the topic 'healthy eating'."));
        assert!(prompt.contains("Return only the final text, without quotes."));
        assert!(prompt.contains("- Platform: LinkedIn"));
        assert!(prompt.contains("- Tone: Inspirational"));
        assert!(prompt.contains("- Target Audience: Young Adults"));
        assert!(prompt.contains("- Length: Long"));
        assert!(prompt.contains("- Language: Portuguese"));
    }

    #[test]
    fn test_cta_and_hashtag_combinations() {
        for (cta, hashtags) in [(false, false), (true, false), (false, true), (true, true)] {
            let prompt = PromptBuilder::build(&request(cta, hashtags));
            assert!(prompt.contains("mental health"));

            assert_eq!(prompt.contains("Include a clear call-to-action."), cta);
            assert_eq!(prompt.contains("Do not include a call-to-action."), !cta);
            assert_eq!(prompt.contains("Include relevant hashtags at the end."), hashtags);
            assert_eq!(prompt.contains("Do not include hashtags."), !hashtags);
        }
    }

    #[test]
    fn test_keywords_line_absent_when_empty() {
        let prompt = PromptBuilder::build(&GenerationRequest::new("prevention"));
        assert!(!prompt.contains("Mandatory keywords"));
    }

    #[test]
    fn test_any_non_empty_keywords_add_the_line() {
        let spaces = GenerationRequest {
            keywords: "  ".to_string(),
            ..GenerationRequest::new("prevention")
        };
        assert!(PromptBuilder::build(&spaces).contains("- Mandatory keywords:   "));
    }

    #[test]
    fn test_topic_is_inserted_verbatim() {
        let padded = GenerationRequest::new("  mental health ");
        let prompt = PromptBuilder::build(&padded);
        assert!(prompt.contains("'  mental health '"));
    }

    #[test]
    fn test_keywords_line_present_when_given() {
        let req = GenerationRequest {
            keywords: "wellness, prevention".to_string(),
            ..GenerationRequest::new("prevention")
        };
        let prompt = PromptBuilder::build(&req);
        let line = prompt
            .lines()
            .find(|l| l.starts_with("- Mandatory keywords:"))
            .unwrap();
        assert!(line.contains("wellness"));
        assert!(line.contains("prevention"));
        assert_eq!(prompt.lines().last(), Some(line));
    }

    #[test]
    fn test_deterministic() {
        let req = request(true, false);
        assert_eq!(PromptBuilder::build(&req), PromptBuilder::build(&req));
    }

    #[test]
    fn test_field_order() {
        let prompt = PromptBuilder::build(&request(false, false));
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("- Platform:"));
        assert!(lines[4].starts_with("- Tone:"));
        assert!(lines[5].starts_with("- Target Audience:"));
        assert!(lines[6].starts_with("- Length:"));
        assert!(lines[7].starts_with("- Language:"));
        assert_eq!(lines.len(), 10);
    }
}
