use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PROFILE_FILE: &str = "profile.json";

static LOADED: LazyLock<Result<Profile, ContentError>> = LazyLock::new(Profile::load);
static EMPTY: LazyLock<Profile> = LazyLock::new(Profile::default);

/// The embedded profile, parsed on first use and cached with its outcome.
/// Start-up calls this to refuse a broken content file.
pub fn profile() -> Result<&'static Profile, ContentError> {
    LOADED.as_ref().map_err(Clone::clone)
}

/// What components render. Falls back to an empty profile only on a build
/// that skipped the [`profile`] check at start-up.
pub static PROFILE: LazyLock<&'static Profile> = LazyLock::new(|| {
    profile().unwrap_or_else(|e| {
        log::error!("falling back to empty profile: {e}");
        &*EMPTY
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content file {file}: {reason}")]
    ParseError { file: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    #[default]
    Code,
    Mobile,
    Bolt,
    Monitor,
    TrendUp,
    Document,
    Chart,
    Phone,
    Mail,
    Location,
    Twitter,
    Instagram,
    Linkedin,
    Github,
}

impl Icon {
    pub const ALL: [Icon; 14] = [
        Icon::Code,
        Icon::Mobile,
        Icon::Bolt,
        Icon::Monitor,
        Icon::TrendUp,
        Icon::Document,
        Icon::Chart,
        Icon::Phone,
        Icon::Mail,
        Icon::Location,
        Icon::Twitter,
        Icon::Instagram,
        Icon::Linkedin,
        Icon::Github,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Identity {
    pub name: String,
    pub brand: String,
    pub brand_accent: String,
    pub role: String,
    pub tagline: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Service {
    pub title: String,
    pub blurb: String,
    pub icon: Icon,
}

/// One row of the experience or education timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResumeEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Skill {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Language {
    pub name: String,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

impl Language {
    pub fn width_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    pub identity: Identity,
    pub about: Vec<String>,
    pub services: Vec<Service>,
    pub experience: Vec<ResumeEntry>,
    pub education: Vec<ResumeEntry>,
    pub skills: Vec<Skill>,
    pub contact: Contact,
    pub socials: Vec<SocialLink>,
    pub languages: Vec<Language>,
    pub interests: Vec<String>,
}

impl Profile {
    pub fn load() -> Result<Self, ContentError> {
        Self::load_file(PROFILE_FILE)
    }

    pub fn load_file(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        Self::parse(name, &file.data)
    }

    pub fn parse(name: &str, data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::ParseError {
            file: name.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .contact
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_is_well_formed() {
        let profile = Profile::load().expect("embedded profile should parse");
        assert!(!profile.identity.name.is_empty());
        assert_eq!(profile.services.len(), 3);
        assert!(!profile.experience.is_empty());
        assert!(!profile.education.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(profile
            .languages
            .iter()
            .all(|l| l.level <= 100 && !l.name.is_empty()));
    }

    #[test]
    fn test_profile_is_parsed_once() {
        let first = profile().expect("embedded profile should parse");
        let second = profile().expect("embedded profile should parse");
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(*PROFILE, first));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            Profile::load_file("nope.json"),
            Err(ContentError::NotFound("nope.json".to_string()))
        );
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Profile::parse("broken.json", b"{\"identity\": 4}").unwrap_err();
        match err {
            ContentError::ParseError { file, .. } => assert_eq!(file, "broken.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entry_description_is_optional() {
        let entry: ResumeEntry = serde_json::from_str(
            r#"{"title": "Software Developer", "organization": "City Hall", "period": "Present"}"#,
        )
        .unwrap();
        assert_eq!(entry.description, None);
    }

    #[test]
    fn test_contact_uris() {
        let mut profile = Profile::default();
        profile.contact.email = "me@example.com".to_string();
        profile.contact.phone = "0970 914 3842".to_string();
        assert_eq!(profile.mailto(), "mailto:me@example.com");
        assert_eq!(profile.tel(), "tel:09709143842");
    }

    #[test]
    fn test_language_width_clamped() {
        let lang = Language {
            name: "English".to_string(),
            level: 140,
        };
        assert_eq!(lang.width_style(), "width: 100%");
    }
}
