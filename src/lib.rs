//! # stringcase
//!
//! A library and CLI tool for converting identifier-like strings between case styles.
//!
//! Input may be mixed case and separated by spaces, hyphens, underscores or dots. It is
//! converted into one of:
//! - **camelCase** / **PascalCase**: boundaries expressed through capitalization only.
//! - **snake_case** / **SCREAMING_SNAKE_CASE**
//! - **kebab-case** / **SCREAMING-KEBAB-CASE**
//! - words joined by any single-character delimiter, optionally upper-cased.
//!
//! Every conversion is a total, pure function: empty or unusual input produces a
//! best-effort (possibly empty) string, never an error. Classification is by
//! upper/lower/digit/other only; there is no locale-aware casing.
//!
//! ## Usage
//!
//! ```rust
//! use stringcase::{to_camel_case, to_kebab_case, to_snake_case};
//!
//! assert_eq!(to_snake_case("JSONData"), "json_data");
//! assert_eq!(to_kebab_case("v2Beta3"), "v-2-beta-3");
//! assert_eq!(to_camel_case("TEST_CASE"), "testCase");
//! ```
//!
//! Known acronyms can be pre-split through an explicit table so that their capitals
//! survive the camel/pascal conversion:
//!
//! ```rust
//! use stringcase::{Acronyms, CamelBuilder};
//!
//! let mut acronyms = Acronyms::new();
//! acronyms.register("APIKey", "API Key");
//!
//! let pascal = CamelBuilder::pascal().with_acronyms(&acronyms);
//! assert_eq!(pascal.build("APIKey"), "APIKey");
//! assert_eq!(CamelBuilder::pascal().build("APIKey"), "Apikey");
//! ```

pub mod acronyms;
pub mod camel;
pub mod case;
pub mod cli;
pub mod config;
pub mod delimited;
pub mod pipeline;
pub mod scanner;

pub use acronyms::Acronyms;
pub use camel::{to_camel_case, to_pascal_case, CamelBuilder};
pub use case::{Case, Casing, Converter};
pub use delimited::{
    to_delimited_case, to_kebab_case, to_screaming_delimited_case, to_screaming_kebab_case,
    to_screaming_snake_case, to_snake_case, to_snake_case_with_ignore, DelimitedBuilder,
};
