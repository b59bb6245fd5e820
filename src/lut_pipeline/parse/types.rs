//! Parsed LUT data types

use std::fmt;

use crate::lut_pipeline::common::error::RecordError;

/// A normalized LUT entry, each component is `raw / max_value`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTriple {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ColorTriple {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

/// Renders the entry as one element of a C brace-initializer list.
impl fmt::Display for ColorTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t{{ .red = {:.6}, .green = {:.6}, .blue = {:.6} }},",
            self.red, self.green, self.blue
        )
    }
}

/// LUT entries in input file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSequence {
    entries: Vec<ColorTriple>,
}

impl ColorSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, triple: ColorTriple) {
        self.entries.push(triple);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorTriple> {
        self.entries.get(index)
    }

    /// Entries whose index is `offset` plus a multiple of `stride`, paired with that index.
    pub fn strided(&self, offset: usize, stride: usize) -> impl Iterator<Item = (usize, &ColorTriple)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .skip(offset)
            .step_by(stride.max(1))
    }

    pub(crate) fn into_entries(self) -> Vec<ColorTriple> {
        self.entries
    }
}

impl From<Vec<ColorTriple>> for ColorSequence {
    fn from(entries: Vec<ColorTriple>) -> Self {
        Self { entries }
    }
}

impl FromIterator<ColorTriple> for ColorSequence {
    fn from_iter<I: IntoIterator<Item = ColorTriple>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// An input line that was dropped while parsing
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// 1-based line number in the input
    pub line_number: usize,
    /// The line with surrounding whitespace removed
    pub content: String,
    pub reason: RecordError,
}

/// Output of a LUT reader
#[derive(Debug, Clone, Default)]
pub struct ParsedLut {
    pub sequence: ColorSequence,
    pub skipped: Vec<SkippedRecord>,
}
