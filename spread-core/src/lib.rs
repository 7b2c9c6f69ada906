//! The [`spread`][1] marker tokenizer.
//!
//! A template source declares placeholders with marker tokens:
//!
//! ```html
//! <a href="{?link.href}">{link.label}</a>
//! ```
//!
//! [`Marker::parse`] collects one [`Marker`] per distinct name, in the order the names first
//! appear. A marker carries its literal token, the dotted path into the data map, and two
//! [`Selector`]s used by the tree adapter to locate the token in attribute values and text
//! nodes.
//!
//! [`Tokenizer`] splits a run of text into static content and marker tokens, which is how a
//! text node gets isolated into one node per token.
//!
//! This crate has no dependency so it can be shared with the [`spread-macros`][2] derive.
//!
//! [1]: <https://docs.rs/spread>
//! [2]: <https://docs.rs/spread-macros>
mod span;
mod marker;
mod tokenizer;

pub use span::Span;
pub use marker::{Marker, Selector};
pub use tokenizer::{Tokenizer, Token};
