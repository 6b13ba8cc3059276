//! Portfolio owner profile.
//!
//! Everything displayed in the sections comes from here. Values are opaque
//! to the rest of the crate; defaults are placeholders meant to be replaced
//! through the `[profile]` table of the configuration file.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Email,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

impl SocialLink {
    pub fn new(kind: SocialKind, href: impl Into<String>) -> Self {
        Self {
            kind,
            href: href.into(),
        }
    }

    /// Web links open in a new window, `mailto:`/`tel:` links do not.
    pub fn opens_externally(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub whatsapp: Option<String>,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            email: "hello@example.com".to_string(),
            phone: None,
            location: Some("Bengaluru, Karnataka".to_string()),
            whatsapp: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: ContactDetails,
    pub socials: Vec<SocialLink>,
    /// Resume download link, shown in the about section.
    pub resume: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            role: "Frontend Developer".to_string(),
            tagline: "I build fast, friendly interfaces.".to_string(),
            about: vec![
                "I enjoy turning rough ideas into polished, responsive products.".to_string(),
                "Outside of work I tinker with side projects and open source.".to_string(),
            ],
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Rust".to_string(),
                "CSS".to_string(),
            ],
            projects: vec![
                Project {
                    title: "Portfolio".to_string(),
                    description: "This site: a single-page portfolio with scroll tracking."
                        .to_string(),
                    tech: vec!["Rust".to_string(), "ratatui".to_string()],
                    link: None,
                },
                Project {
                    title: "Student Data Manager".to_string(),
                    description: "CRUD application for managing student records.".to_string(),
                    tech: vec!["Java".to_string(), "Spring Boot".to_string()],
                    link: None,
                },
            ],
            contact: ContactDetails::default(),
            socials: vec![
                SocialLink::new(SocialKind::Github, "https://github.com/your-handle"),
                SocialLink::new(SocialKind::Linkedin, "https://www.linkedin.com/in/your-handle"),
                SocialLink::new(SocialKind::Email, "mailto:hello@example.com"),
            ],
            resume: None,
        }
    }
}

impl Profile {
    /// Initial used when no avatar is available.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Drawer footer, e.g. `© 2026 Your Name`.
    pub fn copyright_line(&self) -> String {
        format!("© {} {}", Local::now().year(), self.name)
    }

    /// Address that receives contact form submissions.
    pub fn recipient(&self) -> &str {
        &self.contact.email
    }
}
