//! Text filters and type-link resolution for schema documentation
//! rendering.
//!
//! A rendering template calls these helpers while emitting
//! documentation pages for a schema-description language: the text
//! filters reformat raw comment text into paragraph markup, and
//! [`LinkResolver`] computes the hyperlink from a type reference to
//! the page and anchor where that type is documented. Every function
//! here is pure, synchronous, and total over string inputs; a bad
//! input yields a wrong link or an empty paragraph, never an error.
//!
//! The schema parser that produces type names, the template engine,
//! and the CLI that orchestrates rendering live outside this crate.

mod config;
mod error;
mod imports;
mod links;
mod package;
mod text;
mod types;

pub use config::{Config, PAGE_ROOT_ENV};
pub use error::Error;
pub use imports::collect;
pub use links::LinkResolver;
pub use package::{UNKNOWN_PACKAGE, common_package};
pub use text::{collapse_line_breaks, html_paragraphs, para_paragraphs, wrap_paragraphs};
pub use types::{FileDescriptor, TypeRef};
