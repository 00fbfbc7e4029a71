//! State for the introduction form.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use crate::services::{Big5, GenerationOptions};
use crate::ui::mvi::UiState;

/// Default cap on selected tags.
pub const DEFAULT_MAX_TAGS: usize = 5;

/// Default lifetime of the tag-limit warning.
pub const DEFAULT_WARNING_DURATION: Duration = Duration::from_secs(3);

pub const MBTI_TYPES: [&str; 16] = [
    "ISTJ", "ISFJ", "INFJ", "INTJ", "ISTP", "ISFP", "INFP", "INTP", "ESTP", "ESFP", "ENFP", "ENTP",
    "ESTJ", "ESFJ", "ENFJ", "ENTJ",
];

/// Tags offered for manual selection.
pub const AVAILABLE_TAGS: [&str; 15] = [
    "긍정적", "독창적", "무계획", "열정적", "포용적", "창의적", "감성적", "예술가", "활발함",
    "리더십", "배려심", "성실함", "도전적", "신중함", "낙천적",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Nickname,
    Age,
    Mbti,
    Description,
    Tags,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Nickname => "nickname",
            Self::Age => "age",
            Self::Mbti => "MBTI",
            Self::Description => "introduction",
            Self::Tags => "tags",
        };
        f.write_str(label)
    }
}

/// Inline error attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your {0}")]
    Required(FormField),

    #[error("Please enter a valid age")]
    InvalidAge,

    #[error("Unknown MBTI type '{0}'")]
    UnknownMbti(String),

    #[error("Select at least one tag")]
    NoTags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Success,
    Info,
    Error,
}

/// Transient, dismissible message shown below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: NoticeSeverity::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: NoticeSeverity::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: NoticeSeverity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntroFormState {
    pub name: String,
    pub nickname: String,
    /// Raw text as typed; parsed on validation.
    pub age: String,
    pub mbti: String,
    pub description: String,
    pub big5: Big5,
    /// Chosen photo as a `data:` URI; empty when there is none.
    pub profile_image: String,
    pub selected_tags: Vec<String>,
    pub auto_tags: Vec<String>,
    pub errors: BTreeMap<FormField, ValidationError>,
    pub notice: Option<Notice>,
    /// Tag-limit warning is visible until this instant.
    pub tag_warning_until: Option<Instant>,
    pub loading_tags: bool,
    pub generating_description: bool,
    pub max_tags: usize,
    pub warning_duration: Duration,
    pub options: GenerationOptions,
}

impl Default for IntroFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            nickname: String::new(),
            age: String::new(),
            mbti: String::new(),
            description: String::new(),
            big5: Big5::default(),
            profile_image: String::new(),
            selected_tags: Vec::new(),
            auto_tags: Vec::new(),
            errors: BTreeMap::new(),
            notice: None,
            tag_warning_until: None,
            loading_tags: false,
            generating_description: false,
            max_tags: DEFAULT_MAX_TAGS,
            warning_duration: DEFAULT_WARNING_DURATION,
            options: GenerationOptions {
                max_length: 500,
                language: "ko".to_string(),
            },
        }
    }
}

impl UiState for IntroFormState {}

impl IntroFormState {
    pub fn has_photo(&self) -> bool {
        !self.profile_image.is_empty()
    }

    pub fn tag_warning_visible(&self) -> bool {
        self.tag_warning_until.is_some()
    }

    pub fn has_any_tag(&self) -> bool {
        !self.selected_tags.is_empty() || !self.auto_tags.is_empty()
    }

    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Nickname => Some(&mut self.nickname),
            FormField::Age => Some(&mut self.age),
            FormField::Mbti => Some(&mut self.mbti),
            FormField::Description => Some(&mut self.description),
            FormField::Tags => None,
        }
    }

    /// Positive age, if the typed text is one.
    pub fn parsed_age(&self) -> Option<u32> {
        self.age.trim().parse::<u32>().ok().filter(|age| *age > 0)
    }

    /// Full check run on submit. Every failing field gets an entry.
    pub fn validate(&self) -> BTreeMap<FormField, ValidationError> {
        let mut errors = BTreeMap::new();

        for (field, value) in [
            (FormField::Name, &self.name),
            (FormField::Nickname, &self.nickname),
            (FormField::Description, &self.description),
        ] {
            if value.trim().is_empty() {
                errors.insert(field, ValidationError::Required(field));
            }
        }
        if self.parsed_age().is_none() {
            errors.insert(FormField::Age, ValidationError::InvalidAge);
        }
        if let Some(error) = mbti_error(&self.mbti) {
            errors.insert(FormField::Mbti, error);
        }
        if !self.has_any_tag() {
            errors.insert(FormField::Tags, ValidationError::NoTags);
        }

        errors
    }

    /// Minimum needed before asking for a generated description.
    /// Reports the first missing piece only.
    pub fn validate_for_description(&self) -> Result<(), (FormField, ValidationError)> {
        if self.name.trim().is_empty() {
            return Err((FormField::Name, ValidationError::Required(FormField::Name)));
        }
        if let Some(error) = mbti_error(&self.mbti) {
            return Err((FormField::Mbti, error));
        }
        if !self.has_any_tag() {
            return Err((FormField::Tags, ValidationError::NoTags));
        }
        Ok(())
    }
}

fn mbti_error(mbti: &str) -> Option<ValidationError> {
    let mbti = mbti.trim();
    if mbti.is_empty() {
        return Some(ValidationError::Required(FormField::Mbti));
    }
    let upper = mbti.to_ascii_uppercase();
    if !MBTI_TYPES.contains(&upper.as_str()) {
        return Some(ValidationError::UnknownMbti(mbti.to_string()));
    }
    None
}

/// Whether `tag` is one of the manually selectable tags.
pub fn is_available_tag(tag: &str) -> bool {
    AVAILABLE_TAGS.contains(&tag)
}

/// Encode an uploaded image as a `data:` URI, typed by file extension.
pub fn photo_data_uri(file_name: &str, image: &[u8]) -> String {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(image))
}

/// Prefix `tag` with `#` unless it already has one.
pub fn hash_tag(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{}", tag)
    }
}

/// Selected tags followed by auto-detected tags that are not already
/// selected (compared with and without `#`), the latter `#`-prefixed.
pub fn merged_tags(selected: &[String], auto: &[String]) -> Vec<String> {
    let already_selected = |auto_tag: &String| {
        selected.iter().any(|tag| {
            tag == auto_tag || *tag == format!("#{}", auto_tag) || *auto_tag == format!("#{}", tag)
        })
    };

    selected
        .iter()
        .cloned()
        .chain(
            auto.iter()
                .filter(|t| !already_selected(t))
                .map(|t| hash_tag(t)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn merged_tags_dedupes_with_and_without_hash() {
        let selected = strings(&["#smile", "calm"]);
        let auto = strings(&["smile", "#calm", "outdoor"]);
        assert_eq!(
            merged_tags(&selected, &auto),
            strings(&["#smile", "calm", "#outdoor"])
        );
    }

    #[test]
    fn photo_data_uri_uses_extension_mime() {
        assert_eq!(photo_data_uri("me.PNG", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(photo_data_uri("me.jpeg", b""), "data:image/jpeg;base64,");
        assert!(photo_data_uri("photo", b"x").starts_with("data:application/octet-stream;"));
    }

    #[test]
    fn available_tags_are_exact_matches() {
        assert!(is_available_tag("창의적"));
        assert!(!is_available_tag("#창의적"));
        assert!(!is_available_tag("unknown"));
    }

    #[test]
    fn hash_tag_is_idempotent() {
        assert_eq!(hash_tag("sunny"), "#sunny");
        assert_eq!(hash_tag("#sunny"), "#sunny");
    }

    #[test]
    fn age_must_be_positive_number() {
        let mut state = IntroFormState::default();
        for bad in ["", "0", "-3", "abc"] {
            state.age = bad.to_string();
            assert_eq!(state.parsed_age(), None, "{bad:?} should be rejected");
        }
        state.age = " 27 ".to_string();
        assert_eq!(state.parsed_age(), Some(27));
    }

    #[test]
    fn mbti_is_case_insensitive_but_must_exist() {
        assert_eq!(mbti_error("enfp"), None);
        assert_eq!(
            mbti_error("XXXX"),
            Some(ValidationError::UnknownMbti("XXXX".to_string()))
        );
        assert_eq!(
            mbti_error(" "),
            Some(ValidationError::Required(FormField::Mbti))
        );
    }

    #[test]
    fn description_check_reports_first_missing_piece() {
        let mut state = IntroFormState::default();
        assert_eq!(
            state.validate_for_description().unwrap_err().0,
            FormField::Name
        );
        state.name = "Mina".to_string();
        assert_eq!(
            state.validate_for_description().unwrap_err().0,
            FormField::Mbti
        );
        state.mbti = "INFP".to_string();
        assert_eq!(
            state.validate_for_description().unwrap_err().0,
            FormField::Tags
        );
        state.auto_tags.push("smile".to_string());
        assert!(state.validate_for_description().is_ok());
    }
}
