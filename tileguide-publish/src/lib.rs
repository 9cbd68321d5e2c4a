//! # tileguide-publish
//!
//! Hash-gated atomic writer for the rendered guide page, plus a unified diff
//! against what is already on disk.
//!
//! Call [`publish_guide`] to render and write the page, or [`diff_guide`] to
//! preview what a publish would change.

pub mod diff;
pub mod error;
pub mod writer;

pub use diff::{diff_guide, diff_page, PageDiff};
pub use error::PublishError;
pub use writer::{publish_guide, write_page, WriteResult};
