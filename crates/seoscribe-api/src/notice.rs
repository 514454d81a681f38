//! User-facing failure notices.
//!
//! Both the CLI and the REST API render failures through [`FailureNotice`]
//! so the wording stays identical across surfaces.

use std::fmt;

use console::style;

use seoscribe_types::error::GenerationError;
use seoscribe_types::llm::CompletionError;

/// Headline plus optional hints and diagnostic detail for one failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    pub headline: String,
    pub hints: Vec<String>,
    pub detail: Option<String>,
}

impl FailureNotice {
    fn headline(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            hints: Vec::new(),
            detail: None,
        }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn empty_topic() -> Self {
        Self::headline("Please enter a topic.")
    }

    pub fn for_generation(err: &GenerationError) -> Self {
        match err {
            GenerationError::EmptyTopic => Self::empty_topic(),
            GenerationError::Completion(e) => Self::for_completion(e),
        }
    }

    pub fn for_completion(err: &CompletionError) -> Self {
        match err {
            CompletionError::Http { status: 401, .. } => {
                Self::headline("HTTP Error: 401").with_hint("Invalid API key")
            }
            CompletionError::Http { status: 429, .. } => Self::headline("HTTP Error: 429")
                .with_hint("Rate limit reached. Please wait and try again."),
            CompletionError::Http { status, body } => {
                Self::headline(format!("HTTP Error: {status}"))
                    .with_hint(format!("API response: {body}"))
            }
            CompletionError::Timeout => {
                Self::headline("Timeout - The API took too long to respond. Try again.")
            }
            CompletionError::Connection(diagnostic) => Self {
                headline: "Connection error".to_string(),
                hints: vec![
                    "Check your internet connection".to_string(),
                    "Make sure CA certificates are installed and up to date".to_string(),
                    "Check whether a firewall or proxy blocks the API endpoint".to_string(),
                ],
                detail: Some(diagnostic.clone()),
            },
            CompletionError::Unexpected(detail) => {
                Self::headline(format!("Unexpected error: {detail}"))
            }
        }
    }

    /// Print the notice to stderr with terminal styling.
    pub fn eprint(&self) {
        eprintln!();
        eprintln!("  {} {}", style("✗").red().bold(), style(&self.headline).red());
        for hint in &self.hints {
            eprintln!("    {} {hint}", style("•").dim());
        }
        if let Some(detail) = &self.detail {
            eprintln!("    {}", style(format!("Details: {detail}")).dim());
        }
        eprintln!();
    }
}

impl fmt::Display for FailureNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline)?;
        for hint in &self.hints {
            write!(f, "\n- {hint}")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, "\nDetails: {detail}")?;
        }
        Ok(())
    }
}

/// Marker error for a failure whose notice was already shown.
///
/// `main` exits non-zero without printing it a second time.
#[derive(Debug)]
pub struct Reported;

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failure already reported")
    }
}

impl std::error::Error for Reported {}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> CompletionError {
        CompletionError::Http {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_empty_topic() {
        let notice = FailureNotice::for_generation(&GenerationError::EmptyTopic);
        assert_eq!(notice.headline, "Please enter a topic.");
        assert!(notice.hints.is_empty());
    }

    #[test]
    fn test_unauthorized() {
        let notice = FailureNotice::for_completion(&http(401, "{}"));
        assert_eq!(notice.headline, "HTTP Error: 401");
        assert_eq!(notice.hints, vec!["Invalid API key"]);
    }

    #[test]
    fn test_rate_limited() {
        let notice = FailureNotice::for_completion(&http(429, ""));
        assert_eq!(notice.headline, "HTTP Error: 429");
        assert_eq!(notice.hints, vec!["Rate limit reached. Please wait and try again."]);
    }

    #[test]
    fn test_other_status_shows_body() {
        let notice = FailureNotice::for_completion(&http(500, "boom"));
        assert_eq!(notice.headline, "HTTP Error: 500");
        assert_eq!(notice.hints, vec!["API response: boom"]);
    }

    #[test]
    fn test_timeout() {
        let notice = FailureNotice::for_generation(&CompletionError::Timeout.into());
        assert_eq!(
            notice.headline,
            "Timeout - The API took too long to respond. Try again."
        );
    }

    #[test]
    fn test_connection_has_hints_and_detail() {
        let notice =
            FailureNotice::for_completion(&CompletionError::Connection("dns error".to_string()));
        assert_eq!(notice.headline, "Connection error");
        assert_eq!(notice.hints.len(), 3);
        assert_eq!(notice.detail.as_deref(), Some("dns error"));
        assert!(notice.to_string().ends_with("Details: dns error"));
    }

    #[test]
    fn test_unexpected() {
        let notice =
            FailureNotice::for_completion(&CompletionError::Unexpected("no choices".to_string()));
        assert_eq!(notice.headline, "Unexpected error: no choices");
    }
}
