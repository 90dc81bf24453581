//! Landing Generator Library
//!
//! Composes the home page and writes the site.
//!
//! # Modules
//!
//! - [`layout`] - Layout tree shared by all renderers
//! - [`content`] - Fixed page copy
//! - [`sections`] - Section renderers
//! - [`page`] - Home page composition
//! - [`template`] - Document templates with variable interpolation
//! - [`html`] - HTML document generation
//! - [`assets`] - Static asset copying
//! - [`build`] - Build orchestration

pub mod assets;
pub mod build;
pub mod content;
pub mod html;
pub mod layout;
pub mod page;
pub mod sections;
pub mod template;

pub use assets::StaticAssets;
pub use build::{BuildStats, Builder, render_home};
pub use html::HtmlGenerator;
pub use layout::{Element, Node};
pub use page::{HomePage, Section, SectionKind};
pub use sections::RenderContext;
pub use template::{Template, TemplateContext, TemplateRegistry};
