//! Template context — serializable rendering payload built from a [`Guide`].

use serde::{Deserialize, Serialize};

use tileguide_core::types::{Guide, ProcedureStep, Screenshot, Section};

use crate::error::RenderError;

/// Flat rendering payload consumed by `page.html` and its partials.
///
/// Built once per render; every collection keeps the order of the guide it
/// came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    pub meta: MetaCtx,
    pub hero: HeroCtx,
    pub prerequisites: Vec<String>,
    pub overview: SectionCtx,
    pub steps: Vec<StepCtx>,
    pub validation_tips: Vec<SectionCtx>,
}

/// Document head metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroCtx {
    pub eyebrow: String,
    pub heading: String,
    pub lede: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCtx {
    pub heading: String,
    pub body: String,
}

/// One step card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepCtx {
    /// 1-based position in the procedure.
    pub number: usize,
    /// `"Step {number}"`.
    pub badge: String,
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub screenshot: ScreenshotCtx,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotCtx {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    /// Only the first screenshot on the page loads eagerly.
    pub priority: bool,
}

impl From<&Section> for SectionCtx {
    fn from(section: &Section) -> Self {
        SectionCtx {
            heading: section.heading.to_string(),
            body: section.body.to_string(),
        }
    }
}

impl StepCtx {
    fn from_step(index: usize, step: &ProcedureStep) -> Self {
        StepCtx {
            number: index + 1,
            badge: ProcedureStep::badge(index),
            title: step.title.to_string(),
            description: step.description.to_string(),
            highlights: step.highlights.iter().map(|h| h.to_string()).collect(),
            screenshot: ScreenshotCtx {
                src: step.screenshot.path.to_string(),
                alt: step.screenshot.alt_text.to_string(),
                width: Screenshot::WIDTH,
                height: Screenshot::HEIGHT,
                priority: index == 0,
            },
        }
    }
}

impl PageContext {
    /// Build a [`PageContext`] from a [`Guide`].
    pub fn from_guide(guide: &Guide) -> Self {
        PageContext {
            meta: MetaCtx {
                title: guide.meta.title.to_string(),
                description: guide.meta.description.to_string(),
            },
            hero: HeroCtx {
                eyebrow: guide.hero.eyebrow.to_string(),
                heading: guide.hero.heading.to_string(),
                lede: guide.hero.lede.to_string(),
            },
            prerequisites: guide
                .prerequisites
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            overview: SectionCtx::from(&guide.overview),
            steps: guide
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| StepCtx::from_step(i, step))
                .collect(),
            validation_tips: guide.validation_tips.iter().map(SectionCtx::from).collect(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileguide_core::guide;

    #[test]
    fn context_fields_populated() {
        let ctx = PageContext::from_guide(guide());
        assert_eq!(ctx.meta.title, "SAP Fiori Tile to T-Code Guide");
        assert_eq!(ctx.prerequisites.len(), 4);
        assert_eq!(ctx.steps.len(), 6);
        assert_eq!(ctx.validation_tips.len(), 3);
        assert_eq!(ctx.overview.heading, "Procedure Overview");
    }

    #[test]
    fn steps_are_numbered_from_one() {
        let ctx = PageContext::from_guide(guide());
        let numbers: Vec<_> = ctx.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ctx.steps[5].badge, "Step 6");
    }

    #[test]
    fn only_first_screenshot_has_priority() {
        let ctx = PageContext::from_guide(guide());
        let flags: Vec<_> = ctx.steps.iter().map(|s| s.screenshot.priority).collect();
        assert_eq!(flags, vec![true, false, false, false, false, false]);
    }

    #[test]
    fn screenshot_alt_is_copied_verbatim() {
        let ctx = PageContext::from_guide(guide());
        for (step, source) in ctx.steps.iter().zip(guide().steps) {
            assert_eq!(step.screenshot.alt, source.screenshot.alt_text);
            assert_eq!(step.screenshot.src, source.screenshot.path);
            assert_eq!((step.screenshot.width, step.screenshot.height), (960, 540));
        }
    }

    #[test]
    fn to_tera_context_succeeds() {
        let ctx = PageContext::from_guide(guide());
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        assert!(tera_ctx.contains_key("steps"));
    }
}
