//! Section identifiers.
//!
//! The portfolio is a single document made of four sections laid out
//! top-to-bottom in a fixed order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DisplayError;

/// One of the named content blocks of the portfolio, in document order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections, top to bottom.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Position in document order.
    pub fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Projects => 2,
            SectionId::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Marker used to address the section (`home`, `about`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Capitalized label for navigation entries.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SectionId::Home => "⌂",
            SectionId::About => "ℹ",
            SectionId::Projects => "▣",
            SectionId::Contact => "✉",
        }
    }

    /// Address fragment for this section, e.g. `#projects`.
    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Next section in document order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in document order, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = DisplayError;

    /// Accepts the bare marker or a fragment (`projects`, `#projects`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DisplayError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order() {
        let indices: Vec<usize> = SectionId::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(SectionId::Home < SectionId::Contact);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn test_parse_accepts_fragment_and_case() {
        assert_eq!("projects".parse::<SectionId>().ok(), Some(SectionId::Projects));
        assert_eq!("#About".parse::<SectionId>().ok(), Some(SectionId::About));
        assert!("blog".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_fragment() {
        assert_eq!(SectionId::Contact.fragment(), "#contact");
    }

    #[test]
    fn test_cycling() {
        assert_eq!(SectionId::Contact.next(), SectionId::Home);
        assert_eq!(SectionId::Home.previous(), SectionId::Contact);
        assert_eq!(SectionId::About.next(), SectionId::Projects);
    }
}
