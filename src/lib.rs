//! Function outline extraction for JavaScript and TypeScript.
//!
//! [`outline::extract_outline`] is the core: source text in, an ordered list
//! of function-like declarations out. [`files`] adds project scanning and
//! batch extraction on top, [`render`] formats outlines for terminals.

pub mod error;
pub mod files;
pub mod outline;
pub mod render;

pub use error::{OutlineError, Result};
pub use files::{collect_sources, outline_file, outline_files, FileOutline};
pub use outline::{extract_outline, parse, Category, Dialect, OutlineEntry};
