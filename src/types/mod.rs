//! Core domain types for pcfg.
//!
//! - `Document` - header fields plus tagged forms
//! - `Form` / `Case` - a tag and its weighted expansions
//! - `Expansion` - literal, concatenation or tag reference

mod document;
mod expansion;

pub use document::{Case, Document, Form, HeaderField, DEFAULT_ENCODING};
pub use expansion::Expansion;
