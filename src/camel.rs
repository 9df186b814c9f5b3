//! camelCase and PascalCase conversion.
//!
//! Word boundaries are expressed through capitalization only: separators are
//! dropped and the letter after them is upper-cased.

use crate::acronyms::Acronyms;
use crate::scanner::{is_separator, CharClass, Scanner};

/// Builder for camelCase / PascalCase output
#[derive(Debug, Clone, Copy)]
pub struct CamelBuilder<'a> {
    capitalize_first: bool,
    acronyms: Option<&'a Acronyms>,
}

impl<'a> CamelBuilder<'a> {
    /// `capitalize_first` selects PascalCase (`true`) or camelCase (`false`)
    pub fn new(capitalize_first: bool) -> Self {
        CamelBuilder {
            capitalize_first,
            acronyms: None,
        }
    }

    pub fn camel() -> Self {
        Self::new(false)
    }

    pub fn pascal() -> Self {
        Self::new(true)
    }

    /// Consult an acronym table before scanning
    pub fn with_acronyms(mut self, acronyms: &'a Acronyms) -> Self {
        self.acronyms = Some(acronyms);
        self
    }

    pub fn build(&self, input: &str) -> String {
        let input = input.trim();
        let substitution = self.acronyms.and_then(|table| table.get(input));
        if let Some(replacement) = substitution {
            tracing::debug!(input, replacement, "applied acronym substitution");
        }
        let source = substitution.unwrap_or(input);

        let mut result = String::with_capacity(source.len());
        let mut capitalize_next = self.capitalize_first;

        for pos in Scanner::new(source) {
            match pos.class {
                CharClass::Upper | CharClass::Lower => {
                    if capitalize_next {
                        result.extend(pos.ch.to_uppercase());
                    } else if pos.is_first() {
                        result.extend(pos.ch.to_lowercase());
                    } else if pos.class == CharClass::Upper
                        && pos.prev_class() == Some(CharClass::Upper)
                        && substitution.is_none()
                    {
                        // Collapse uppercase runs: "JSON" -> "Json"
                        result.extend(pos.ch.to_lowercase());
                    } else {
                        result.push(pos.ch);
                    }
                    capitalize_next = false;
                }
                CharClass::Digit => {
                    result.push(pos.ch);
                    capitalize_next = true;
                }
                CharClass::Other => {
                    capitalize_next = is_separator(pos.ch);
                }
            }
        }

        tracing::trace!(input, output = %result, "camel conversion");
        result
    }
}

fn process_builder(capitalize_first: bool) -> CamelBuilder<'static> {
    let builder = CamelBuilder::new(capitalize_first);
    match Acronyms::global() {
        Some(table) => builder.with_acronyms(table),
        None => builder,
    }
}

/// Convert a string to camelCase, using the process acronym table if installed
pub fn to_camel_case(s: &str) -> String {
    process_builder(false).build(s)
}

/// Convert a string to PascalCase, using the process acronym table if installed
pub fn to_pascal_case(s: &str) -> String {
    process_builder(true).build(s)
}
