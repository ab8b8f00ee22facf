//! # Grappelli
//!
//! Fluent server-side HTML construction for Rust.
//!
//! Grappelli lets callers describe HTML fragments through chainable builders
//! (elements, void elements, tables, selects) and render them either to an
//! HTML string or into any host rendering engine implementing the
//! [`RenderSink`] emission contract.
//!
//! This facade re-exports the builder crate; depend on `grappelli-html`
//! directly if you prefer the narrower surface.
//!
//! ## Example
//!
//! ```rust
//! use grappelli::{Renderable, div, span};
//!
//! let card = div()
//!     .class("card")
//!     .child(span().class("title").text("Hello"));
//! assert_eq!(
//!     card.to_html(),
//!     "<div class=\"card\"><span class=\"title\">Hello</span></div>"
//! );
//! ```

pub use grappelli_html::*;

/// The builder crate, re-exported as a module.
pub use grappelli_html as html;
