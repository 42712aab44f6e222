//! Shared StoryPath types and logic.
//!
//! Everything here compiles for both the browser bundle and native targets so
//! the behaviour of the editors and the preview can be tested without a DOM.

pub mod api;
pub mod config;
pub mod content;
pub mod forms;
pub mod model;
pub mod mutation;
pub mod ordering;
pub mod preview;
pub mod qr;
pub mod route;
pub mod sequence;
