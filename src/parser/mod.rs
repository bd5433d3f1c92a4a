//! Annotation parser: turns one comment into at most one document.

pub mod annotation;
pub mod classify;
pub mod sample;

pub use classify::classify;
