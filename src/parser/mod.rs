//! Parser for `.pcfg` grammar files.
//!
//! # File Structure
//!
//! A file has:
//! - A header of `!field: value` lines (e.g. `!root: greeting`)
//! - Form declarations, `tag:` followed by case lines indented by two
//!   spaces, or `tag: case` with a single inline case
//!
//! A case is an optional weight followed by a bare literal, a `"quoted
//! literal"`, a `$tag` reference or a `[concatenation of $parts]`. A `#`
//! starts a comment anywhere outside a quoted literal.
//!
//! ```text
//! !name: Greetings
//! !root: greeting
//!
//! greeting: [hello $name]
//! name:
//!   2 Alice
//!   Bob      # weight 1
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use pcfg::parser::read;
//!
//! let doc = read("names.pcfg")?;
//! for form in doc.forms() {
//!     println!("{}: {} cases", form.tag, form.cases.len());
//! }
//! ```

mod case;
mod document;
mod expression;
mod forms;
mod header;
pub mod name;

pub use case::{read_form_case, DEFAULT_WEIGHT};
pub use document::{read, read_lines, read_str};
pub use expression::read_form_expression;
pub use name::is_name;
