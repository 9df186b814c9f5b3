//! Delimiter-separated conversions: snake_case, kebab-case and custom delimiters.

use crate::scanner::{is_separator, CharClass, Position, Scanner};

/// Builder for delimiter-separated output
#[derive(Debug, Clone, Copy)]
pub struct DelimitedBuilder<'a> {
    delimiter: char,
    ignore: &'a str,
    screaming: bool,
}

impl<'a> DelimitedBuilder<'a> {
    pub fn new(delimiter: char) -> Self {
        DelimitedBuilder {
            delimiter,
            ignore: "",
            screaming: false,
        }
    }

    /// Characters that pass through verbatim and suppress delimiter insertion
    /// right after them
    pub fn ignore(mut self, ignore: &'a str) -> Self {
        self.ignore = ignore;
        self
    }

    /// Upper-case every letter instead of lower-casing it
    pub fn screaming(mut self, screaming: bool) -> Self {
        self.screaming = screaming;
        self
    }

    pub fn build(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len() + input.len() / 4);

        for pos in Scanner::new(input) {
            if pos.boundary_ahead() && !self.follows_ignored(&pos) {
                if pos.starts_word_in_acronym_run() {
                    result.push(self.delimiter);
                }
                self.push_recased(&mut result, &pos);
                if matches!(pos.class, CharClass::Lower | CharClass::Digit)
                    || pos.next_class() == Some(CharClass::Digit)
                {
                    result.push(self.delimiter);
                }
                continue;
            }

            if is_separator(pos.ch) && !self.ignore.contains(pos.ch) {
                result.push(self.delimiter);
            } else {
                self.push_recased(&mut result, &pos);
            }
        }

        tracing::trace!(
            input,
            output = %result,
            delimiter = %self.delimiter,
            "delimited conversion"
        );
        result
    }

    fn follows_ignored(&self, pos: &Position) -> bool {
        pos.prev.is_some_and(|prev| self.ignore.contains(prev))
    }

    fn push_recased(&self, result: &mut String, pos: &Position) {
        match pos.class {
            CharClass::Upper if !self.screaming => result.extend(pos.ch.to_lowercase()),
            CharClass::Lower if self.screaming => result.extend(pos.ch.to_uppercase()),
            _ => result.push(pos.ch),
        }
    }
}

/// Convert a string to snake_case
pub fn to_snake_case(s: &str) -> String {
    to_delimited_case(s, '_')
}

/// Convert a string to snake_case, leaving the characters in `ignore` untouched
pub fn to_snake_case_with_ignore(s: &str, ignore: &str) -> String {
    to_screaming_delimited_case(s, '_', ignore, false)
}

/// Convert a string to SCREAMING_SNAKE_CASE
pub fn to_screaming_snake_case(s: &str) -> String {
    to_screaming_delimited_case(s, '_', "", true)
}

/// Convert a string to kebab-case
pub fn to_kebab_case(s: &str) -> String {
    to_delimited_case(s, '-')
}

/// Convert a string to SCREAMING-KEBAB-CASE
pub fn to_screaming_kebab_case(s: &str) -> String {
    to_screaming_delimited_case(s, '-', "", true)
}

/// Convert a string to lower case words joined by `delimiter`
pub fn to_delimited_case(s: &str, delimiter: char) -> String {
    to_screaming_delimited_case(s, delimiter, "", false)
}

/// Convert a string to words joined by `delimiter`, with an ignore set and
/// optional upper-casing
pub fn to_screaming_delimited_case(
    s: &str,
    delimiter: char,
    ignore: &str,
    screaming: bool,
) -> String {
    DelimitedBuilder::new(delimiter)
        .ignore(ignore)
        .screaming(screaming)
        .build(s)
}
