//! Fluent HTML construction with deferred, sink-based rendering
//!
//! This crate provides chainable builders for HTML fragments — elements,
//! void elements, tables, and selects. Building mutates plain values;
//! nothing is emitted until the terminal render walks the finished tree
//! depth-first and feeds primitive instructions (open tag, attribute, text,
//! close tag) into a [`RenderSink`]. The built-in [`HtmlRenderer`] sink
//! produces HTML strings; host frameworks plug in their own sink to target
//! native render trees instead.
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     E[Element] --> R[Renderable]
//!     V[VoidElement] --> R
//!     T[TableBuilder] --> R
//!     TC[CollectionTableBuilder] --> R
//!     S[SelectBuilder] --> R
//!     SC[CollectionSelectBuilder] --> R
//!     R --> K[RenderSink]
//!     K --> H[HtmlRenderer]
//! ```
//!
//! # Example
//!
//! ```rust
//! use grappelli_html::{Renderable, div, span};
//!
//! let card = div()
//!     .class("card")
//!     .child(span().class("title").text("Hello"));
//! assert_eq!(
//!     card.to_html(),
//!     "<div class=\"card\"><span class=\"title\">Hello</span></div>"
//! );
//! ```
//!
//! Collection-driven builders project rows and options from data:
//!
//! ```rust
//! use grappelli_html::{Renderable, select_for};
//!
//! let menu = select_for(vec!["Espresso", "Latte"])
//!     .name("drink")
//!     .placeholder("Pick one")
//!     .value(|d: &&str| d.to_lowercase());
//! assert!(menu.to_html().starts_with("<select name=\"drink\"><option value=\"\">Pick one</option>"));
//! ```
//!
//! Escaping happens in the sink: text content and attribute values are
//! escaped, [`Element::raw`] output is not. Raw markup is the caller's
//! responsibility.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod attrs;
pub mod element;
pub mod error;
pub mod render;
pub mod select;
pub mod sink;
pub mod table;

pub use element::*;
pub use error::{BuilderError, Result};
pub use render::{HtmlRenderer, render_to_string};
pub use select::{CollectionSelectBuilder, SelectBuilder, SelectOption, select, select_for};
pub use sink::{RenderSink, Renderable, Sequence};
pub use table::{CellValue, CollectionTableBuilder, TableBuilder, table, table_for};
