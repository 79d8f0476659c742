//! Storybook domain layer.
//!
//! Pure functions and types for the two-stage story pipeline: story element
//! validation, prompt templates, scene prompt extraction, illustration
//! records and placeholder images. Nothing in this crate performs I/O.

pub mod error;
pub mod illustration;
pub mod placeholder;
pub mod scene;
pub mod story;
