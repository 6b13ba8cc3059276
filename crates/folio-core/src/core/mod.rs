//! Core layer - portfolio state and decision logic.
//!
//! Everything here is renderer-agnostic: the presentation layer feeds in
//! measurements, widths and scroll offsets and draws whatever state comes out.

pub mod history;
pub mod navigation;
pub mod profile;
pub mod registry;
pub mod section;
pub mod services;
pub mod tracker;
