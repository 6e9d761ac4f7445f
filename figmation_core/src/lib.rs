//! `figmation_core` is the core library for figmation. It turns the local
//! variables of a Figma design file into a stylesheet of CSS custom
//! properties, grouped by category, so that the tokens defined in the design
//! tool stay mirrored in code.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Figma REST API (or any VariableSource)
//!   → Normalizer (first known scope tag, default-mode value, visibility)
//!   → Grouper (category from the folder path, or from the scope family)
//!   → Formatter (scope prefix + path → `--name`, scope unit → value)
//!   → Emitter (`:root { ... }` with one comment header per category)
//!   → StylesheetSink (file on disk)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `figmation.toml` and the
//!   `FIGMA_ACCESS_TOKEN` / `FIGMA_FILE_ID` environment variables.
//! - [`source`]: The [`VariableSource`] seam and the [`FigmaClient`] REST
//!   implementation.
//! - [`sink`]: The [`StylesheetSink`] seam and the [`FileSink`]
//!   implementation.
//!
//! ## Key Types
//!
//! - [`VariableScope`]: The closed set of Figma variable scopes, with their
//!   CSS prefix, category family and unit.
//! - [`RawCollection`] / [`RawVariable`]: Variables as returned by the API.
//! - [`NormalizedVariable`]: A variable with a single resolved scope and
//!   value.
//! - [`VariableGroup`]: Variables sharing a category.
//!
//! ## Quick Start
//!
//! ```rust
//! use figmation_core::DEFAULT_MODE;
//! use figmation_core::NormalizedVariable;
//! use figmation_core::VariableScope;
//! use figmation_core::generate_css;
//!
//! let variables = vec![
//! 	NormalizedVariable::new("1", "Colors/Primary", VariableScope::AllFills, "#FF0000"),
//! 	NormalizedVariable::new("2", "Typography/Size/Large", VariableScope::FontSize, "24"),
//! ];
//!
//! let css = generate_css(&variables, DEFAULT_MODE);
//! assert!(css.contains("  --color-primary: #FF0000;"));
//! assert!(css.contains("  --font-size-large: 24px;"));
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use format::*;
pub use grouping::*;
pub use scope::*;
pub use sink::*;
pub use source::*;
pub use variable::*;

pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
mod format;
mod grouping;
mod scope;
pub mod sink;
pub mod source;
mod variable;

#[cfg(test)]
mod __fixtures;
