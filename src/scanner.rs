//! Boundary scanner shared by every case conversion.
//!
//! The scanner walks the trimmed input one code point at a time and exposes,
//! for each position, the character class of the current character together
//! with its immediate neighbours. Builders decide what to emit from that.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Character class used for word boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

impl CharClass {
    /// Classify a single character by its general category: Lu, Ll and Nd.
    ///
    /// Letter-like numbers (`Ⅻ`), superscripts (`²`) and fractions (`½`) are
    /// `Other`, as are titlecase and modifier letters.
    pub fn of(c: char) -> Self {
        match c.general_category() {
            GeneralCategory::UppercaseLetter => CharClass::Upper,
            GeneralCategory::LowercaseLetter => CharClass::Lower,
            GeneralCategory::DecimalNumber => CharClass::Digit,
            _ => CharClass::Other,
        }
    }
}

/// Check if a character is one of the explicit word separators
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '_' | '.')
}

/// Check if a word boundary falls between two adjacent classes
pub fn is_boundary(current: CharClass, next: CharClass) -> bool {
    use CharClass::*;

    matches!(
        (current, next),
        (Upper, Lower | Digit) | (Lower, Upper | Digit) | (Digit, Upper | Lower)
    )
}

/// A single scanned character and its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index in code points, counted after trimming
    pub index: usize,
    pub ch: char,
    pub class: CharClass,
    pub prev: Option<char>,
    pub next: Option<char>,
}

impl Position {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn prev_class(&self) -> Option<CharClass> {
        self.prev.map(CharClass::of)
    }

    pub fn next_class(&self) -> Option<CharClass> {
        self.next.map(CharClass::of)
    }

    /// Whether a boundary exists between this character and the next one
    pub fn boundary_ahead(&self) -> bool {
        self.next_class()
            .map(|next| is_boundary(self.class, next))
            .unwrap_or(false)
    }

    /// Last capital of an uppercase run that is followed by a lowercase letter.
    ///
    /// In `JSONData` this is the `D`: it belongs to the word `Data`, not to the
    /// acronym before it.
    pub fn starts_word_in_acronym_run(&self) -> bool {
        self.class == CharClass::Upper
            && self.prev_class() == Some(CharClass::Upper)
            && self.next_class() == Some(CharClass::Lower)
    }
}

/// Scanner over the trimmed code points of an input string
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    cursor: usize,
}

impl Scanner {
    /// Create a new scanner; leading and trailing whitespace is dropped
    pub fn new(input: &str) -> Self {
        Scanner {
            chars: input.trim().chars().collect(),
            cursor: 0,
        }
    }

    /// Number of code points left to scan
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

impl Iterator for Scanner {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let index = self.cursor;
        let ch = *self.chars.get(index)?;
        self.cursor += 1;

        Some(Position {
            index,
            ch,
            class: CharClass::of(ch),
            prev: index.checked_sub(1).map(|i| self.chars[i]),
            next: self.chars.get(index + 1).copied(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Scanner {}
