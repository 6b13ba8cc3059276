//! # folio-core
//!
//! Core library for the folio terminal portfolio.
//!
//! This crate provides the shared functionality used by both `folio-tui` and `folio-cli`.
//! It holds every decision the portfolio makes, independently of how it is drawn.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio_core::prelude::*;
//!
//! let mut registry = SectionRegistry::new();
//! registry.register(SectionId::Home, 0);
//! registry.register(SectionId::About, 800);
//!
//! let mut tracker = SectionTracker::new();
//! tracker.recompute(750, &registry);
//! assert_eq!(tracker.active(), SectionId::About);
//! ```
//!
//! ## Architecture (4-Layer)
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           API Layer                 │  Form relay HTTP client, payload model
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  Sections, tracker, navigation, contact form
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  Configuration persistence
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Validation, text wrapping
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: Form relay client and payload
//! - [`core`]: Section tracking, navigation visibility, profile, services
//! - [`contact`]: Contact form validation and submission guard
//! - [`storage`]: Configuration file
//! - [`utils`]: Shared utilities
//! - [`display`]: Plain-text section rendering
//! - [`error`]: Hierarchical error system with troubleshooting hints

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_core::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Sections and state
    pub use crate::core::history::FragmentHistory;
    pub use crate::core::navigation::{
        NavPresentation, NavigationController, Scroller, Selection, ViewportClass,
    };
    pub use crate::core::profile::Profile;
    pub use crate::core::registry::SectionRegistry;
    pub use crate::core::section::SectionId;
    pub use crate::core::tracker::SectionTracker;

    // Contact
    pub use crate::api::client::RelayClient;
    pub use crate::api::models::ContactPayload;
    pub use crate::contact::{ContactController, ContactForm, FormField, Notice, NoticeSeverity};
    pub use crate::core::services::traits::Relay;

    // Storage
    pub use crate::storage::config::Config;
}

/// Business logic layer - sections, tracking, navigation and services.
pub mod core;

/// Contact form, validation and submission lifecycle.
pub mod contact;

/// Storage layer - configuration persistence.
pub mod storage;

/// Utilities layer - shared helpers.
pub mod utils;

/// API layer - form relay HTTP client and payload.
pub mod api;

/// Display layer - plain-text rendering of sections.
pub mod display;

/// Error handling - hierarchical error system.
///
/// - Domain-specific error variants (API, Contact, Config, ...)
/// - Severity levels (High, Medium, Low)
/// - Troubleshooting hints for common issues
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
