//! Content-generation request and result types.
//!
//! A [`GenerationRequest`] carries the form selections (topic, platform,
//! tone, length, audience, language, flags, keywords). Every selection enum
//! defaults to its first option and parses leniently: case does not matter,
//! and spaces, hyphens and underscores are interchangeable
//! (`"young adults"`, `"Young-Adults"` and `"young_adults"` are the same).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fold a user-supplied option into a comparable key.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Target publishing platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Platform {
    #[default]
    Instagram,
    Facebook,
    LinkedIn,
    Blog,
    Email,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::LinkedIn,
        Platform::Blog,
        Platform::Email,
    ];

    /// Human-readable label used in prompts and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::Blog => "Blog",
            Platform::Email => "Email",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "instagram" => Ok(Platform::Instagram),
            "facebook" => Ok(Platform::Facebook),
            "linkedin" | "linked_in" => Ok(Platform::LinkedIn),
            "blog" => Ok(Platform::Blog),
            "email" | "e_mail" => Ok(Platform::Email),
            _ => Err(format!("invalid platform: '{s}'")),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Writing tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Tone {
    #[default]
    Neutral,
    Informative,
    Inspirational,
    Urgent,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Neutral,
        Tone::Informative,
        Tone::Inspirational,
        Tone::Urgent,
        Tone::Casual,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Neutral => "Neutral",
            Tone::Informative => "Informative",
            Tone::Inspirational => "Inspirational",
            Tone::Urgent => "Urgent",
            Tone::Casual => "Casual",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "neutral" => Ok(Tone::Neutral),
            "informative" => Ok(Tone::Informative),
            "inspirational" => Ok(Tone::Inspirational),
            "urgent" => Ok(Tone::Urgent),
            "casual" => Ok(Tone::Casual),
            _ => Err(format!("invalid tone: '{s}'")),
        }
    }
}

impl TryFrom<String> for Tone {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Requested text length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Length {
    #[default]
    Short,
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn label(&self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Length {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "short" => Ok(Length::Short),
            "medium" => Ok(Length::Medium),
            "long" => Ok(Length::Long),
            _ => Err(format!("invalid length: '{s}'")),
        }
    }
}

impl TryFrom<String> for Length {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Target audience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Audience {
    #[default]
    General,
    YoungAdults,
    Families,
    Seniors,
    Teens,
}

impl Audience {
    pub const ALL: [Audience; 5] = [
        Audience::General,
        Audience::YoungAdults,
        Audience::Families,
        Audience::Seniors,
        Audience::Teens,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Audience::General => "General",
            Audience::YoungAdults => "Young Adults",
            Audience::Families => "Families",
            Audience::Seniors => "Seniors",
            Audience::Teens => "Teens",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "general" => Ok(Audience::General),
            "young_adults" | "youngadults" => Ok(Audience::YoungAdults),
            "families" => Ok(Audience::Families),
            "seniors" => Ok(Audience::Seniors),
            "teens" => Ok(Audience::Teens),
            _ => Err(format!("invalid audience: '{s}'")),
        }
    }
}

impl TryFrom<String> for Audience {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Output language the model is asked to write in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Language {
    #[default]
    English,
    Portuguese,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Portuguese,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Portuguese",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "english" => Ok(Language::English),
            "portuguese" => Ok(Language::Portuguese),
            "spanish" => Ok(Language::Spanish),
            "french" => Ok(Language::French),
            "german" => Ok(Language::German),
            _ => Err(format!("invalid language: '{s}'")),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One content-generation submission.
///
/// Built fresh for every request and consumed by the prompt builder.
/// Only `topic` is required when deserializing; every other field falls back
/// to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub include_cta: bool,
    #[serde(default)]
    pub include_hashtags: bool,
    /// Free-text SEO keywords; empty means "no mandatory keywords".
    #[serde(default)]
    pub keywords: String,
}

impl GenerationRequest {
    /// Create a request for `topic` with every selection at its default.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Whether the topic carries any non-whitespace text.
    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }

    /// Keywords exactly as entered, or `None` when the field is empty.
    pub fn keywords(&self) -> Option<&str> {
        (!self.keywords.is_empty()).then_some(self.keywords.as_str())
    }
}

/// Simple statistics over a generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    /// Whitespace-separated tokens.
    pub words: usize,
    /// Unicode scalar values.
    pub characters: usize,
    /// `\n`-separated segments; an empty text still has one line.
    pub lines: usize,
}

/// The outcome of a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub topic: String,
    pub text: String,
    pub stats: ContentStats,
    /// Model that produced the text.
    pub model: String,
    /// Suggested plain-text file name derived from the topic.
    pub file_name: String,
    pub generated_at: DateTime<Utc>,
}
