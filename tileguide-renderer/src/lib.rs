//! # tileguide-renderer
//!
//! Tera-based engine that turns the guide content into a single HTML page.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tileguide_renderer::Renderer;
//!
//! fn print_page() {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(html) = renderer.render(tileguide_core::guide()) {
//!             println!("{html}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::PageContext;
pub use engine::{escape_text, Renderer, PAGE_TEMPLATE};
pub use error::RenderError;
