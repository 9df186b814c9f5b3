//! Named case styles and a configured converter that dispatches to the builders.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::acronyms::Acronyms;
use crate::camel::{self, CamelBuilder};
use crate::delimited::{self, DelimitedBuilder};

/// Target case style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Case {
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// snake_case
    Snake,
    /// SCREAMING_SNAKE_CASE
    ScreamingSnake,
    /// kebab-case
    Kebab,
    /// SCREAMING-KEBAB-CASE
    ScreamingKebab,
    /// lower case words joined by a custom delimiter
    Delimited,
    /// upper case words joined by a custom delimiter
    ScreamingDelimited,
}

impl Case {
    pub const ALL: [Case; 8] = [
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::ScreamingSnake,
        Case::Kebab,
        Case::ScreamingKebab,
        Case::Delimited,
        Case::ScreamingDelimited,
    ];

    /// Name used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::ScreamingSnake => "screaming-snake",
            Case::Kebab => "kebab",
            Case::ScreamingKebab => "screaming-kebab",
            Case::Delimited => "delimited",
            Case::ScreamingDelimited => "screaming-delimited",
        }
    }

    /// Whether this case emits a delimiter between words
    pub fn is_delimited(self) -> bool {
        !matches!(self, Case::Camel | Case::Pascal)
    }

    /// Convert with default settings: process acronym table, `_` for the custom
    /// delimiter styles and no ignore set
    pub fn convert(self, s: &str) -> String {
        match self {
            Case::Camel => camel::to_camel_case(s),
            Case::Pascal => camel::to_pascal_case(s),
            Case::Snake => delimited::to_snake_case(s),
            Case::ScreamingSnake => delimited::to_screaming_snake_case(s),
            Case::Kebab => delimited::to_kebab_case(s),
            Case::ScreamingKebab => delimited::to_screaming_kebab_case(s),
            Case::Delimited => delimited::to_delimited_case(s, '_'),
            Case::ScreamingDelimited => delimited::to_screaming_delimited_case(s, '_', "", true),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully configured conversion: target case, delimiter, ignore set and
/// acronym table, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    pub case: Case,
    /// Delimiter for [`Case::Delimited`] and [`Case::ScreamingDelimited`]
    pub delimiter: char,
    /// Characters exempted from delimiter insertion (delimited cases only)
    pub ignore: String,
    /// Substitutions applied before camel/pascal conversion
    pub acronyms: Acronyms,
}

impl Converter {
    pub fn new(case: Case) -> Self {
        Converter {
            case,
            delimiter: '_',
            ignore: String::new(),
            acronyms: Acronyms::default(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_ignore(mut self, ignore: impl Into<String>) -> Self {
        self.ignore = ignore.into();
        self
    }

    pub fn with_acronyms(mut self, acronyms: Acronyms) -> Self {
        self.acronyms = acronyms;
        self
    }

    pub fn convert(&self, s: &str) -> String {
        match self.case {
            Case::Camel => CamelBuilder::camel().with_acronyms(&self.acronyms).build(s),
            Case::Pascal => CamelBuilder::pascal().with_acronyms(&self.acronyms).build(s),
            Case::Snake => self.delimited('_', false).build(s),
            Case::ScreamingSnake => self.delimited('_', true).build(s),
            Case::Kebab => self.delimited('-', false).build(s),
            Case::ScreamingKebab => self.delimited('-', true).build(s),
            Case::Delimited => self.delimited(self.delimiter, false).build(s),
            Case::ScreamingDelimited => self.delimited(self.delimiter, true).build(s),
        }
    }

    fn delimited(&self, delimiter: char, screaming: bool) -> DelimitedBuilder<'_> {
        DelimitedBuilder::new(delimiter)
            .ignore(&self.ignore)
            .screaming(screaming)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(Case::Snake)
    }
}

/// Case conversion methods on string slices
pub trait Casing {
    fn to_case(&self, case: Case) -> String;

    fn to_camel_case(&self) -> String {
        self.to_case(Case::Camel)
    }

    fn to_pascal_case(&self) -> String {
        self.to_case(Case::Pascal)
    }

    fn to_snake_case(&self) -> String {
        self.to_case(Case::Snake)
    }

    fn to_kebab_case(&self) -> String {
        self.to_case(Case::Kebab)
    }
}

impl<T: AsRef<str> + ?Sized> Casing for T {
    fn to_case(&self, case: Case) -> String {
        case.convert(self.as_ref())
    }
}
