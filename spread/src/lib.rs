//! Declarative HTML templates.
//!
//! A template is plain HTML with marker tokens, `{name}` for a required value and `{?name}`
//! for an optional one. Dotted names such as `{user.name}` walk into nested data.
//!
//! ```
//! use spread::{Data, Fragment};
//!
//! let item = Fragment::parse("<li>{label}</li>");
//! let list = Fragment::parse("<ul class=\"{?class}\">{items}</ul>");
//!
//! let items = item.map([[("label", "One")], [("label", "Two")]]);
//! let html = list
//!     .bind(Data::from([("items", items)]))
//!     .serialize(None)
//!     .unwrap();
//!
//! assert_eq!(html, "<ul><li>One</li><li>Two</li></ul>");
//! ```
//!
//! A [`Fragment`] is parsed once and used as a prototype, [`Fragment::bind`] returns a bound
//! copy and [`Fragment::render`] returns a substituted copy.
//!
//! Use a [`Loader`] to read template files once, and `#[derive(Data)]` to bind a struct.
mod error;
mod value;
mod write;
mod fragment;
mod config;
mod loader;

pub mod dom;

pub use error::{Error, Position, Result};
pub use value::{Data, Value};
pub use write::{Writer, Escape, IoWriter};
pub use fragment::{Fragment, Entries};
pub use config::{Config, Reload};
pub use loader::Loader;

pub use spread_core::{Marker, Selector};
pub use spread_macros::Data;
