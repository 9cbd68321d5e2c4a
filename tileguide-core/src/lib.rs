//! Tileguide core library — content model and the embedded guide.
//!
//! - [`types`] — step, screenshot, prerequisite and page text records
//! - [`content`] — the guide literal, via [`content::guide`]

pub mod content;
pub mod types;

pub use content::guide;
pub use types::{Guide, Hero, PageMeta, PrerequisiteItem, ProcedureStep, Screenshot, Section};
