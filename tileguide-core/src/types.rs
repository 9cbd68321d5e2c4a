//! Content model for the tile guide page.
//!
//! Every type here borrows `'static` string literals and has no optional
//! fields: a step without a screenshot simply does not compile.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A single entry of the prerequisites checklist.
///
/// Items are expected to be unique (they double as display keys) but this is
/// not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PrerequisiteItem(pub &'static str);

impl PrerequisiteItem {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PrerequisiteItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<&'static str> for PrerequisiteItem {
    fn from(s: &'static str) -> Self {
        Self(s)
    }
}

// ---------------------------------------------------------------------------
// Step records
// ---------------------------------------------------------------------------

/// Reference to a static image resource shown under a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    /// Site-relative path of the image, e.g. `/screenshots/01-launchpad-designer.svg`.
    pub path: &'static str,
    /// Alternative text; also used verbatim as the caption.
    pub alt_text: &'static str,
}

impl Screenshot {
    /// Display width every screenshot is laid out at.
    pub const WIDTH: u32 = 960;
    /// Display height every screenshot is laid out at.
    pub const HEIGHT: u32 = 540;
}

/// One stage of the documented procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcedureStep {
    pub title: &'static str,
    pub description: &'static str,
    /// Tips shown top-to-bottom. May be empty.
    pub highlights: &'static [&'static str],
    pub screenshot: Screenshot,
}

impl ProcedureStep {
    /// Badge text for the step at zero-based `index`.
    pub fn badge(index: usize) -> String {
        format!("Step {}", index + 1)
    }
}

// ---------------------------------------------------------------------------
// Page text
// ---------------------------------------------------------------------------

/// Document head metadata handed to the hosting shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

/// Header block at the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub lede: &'static str,
}

/// A heading followed by a paragraph of static prose.
///
/// Used for the procedure overview and for each validation tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Complete page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guide {
    pub meta: PageMeta,
    pub hero: Hero,
    pub prerequisites: &'static [PrerequisiteItem],
    pub overview: Section,
    pub steps: &'static [ProcedureStep],
    pub validation_tips: &'static [Section],
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
