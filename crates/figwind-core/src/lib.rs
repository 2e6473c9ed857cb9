//! Core types, scene graph decoding, and errors for figwind.
//!
//! This crate provides the foundational types used across the other figwind crates:
//! - The [`SceneNode`] sum type describing a design-tool node tree
//! - Fail-soft decoding of that tree from JSON
//! - Value types (colors, fills, line heights, layout enumerations)
//! - Error types

pub mod errors;
pub mod scene;
pub mod types;

pub use errors::*;
pub use scene::*;
pub use types::*;
