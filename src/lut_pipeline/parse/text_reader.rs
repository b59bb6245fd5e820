//! Reader for plain-text LUTs holding one `r g b` integer triple per line.
//!
//! Lines that do not hold exactly three numeric values are reported with a
//! warning and skipped. The remaining entries keep their file order.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::lut_pipeline::common::config::ConversionConfig;
use crate::lut_pipeline::common::error::{RecordError, Result};
use crate::lut_pipeline::parse::reader::LutReader;
use crate::lut_pipeline::parse::types::{ColorSequence, ColorTriple, ParsedLut, SkippedRecord};

/// Number of whitespace-separated values in a record.
const FIELDS_PER_RECORD: usize = 3;

pub struct TextLutReader;

impl LutReader for TextLutReader {
    /// Parses every line of `input` into a normalized [`ColorTriple`].
    ///
    /// Malformed lines never fail the read, including lines that are not valid
    /// UTF-8. Only an I/O error while pulling lines from `input` is returned as `Err`.
    fn read_lut(&self, input: &mut dyn BufRead, config: &ConversionConfig) -> Result<ParsedLut> {
        let mut sequence = ColorSequence::new();
        let mut skipped = Vec::new();

        for (index, bytes) in input.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line = String::from_utf8_lossy(&bytes);
            match parse_record(&line, config.max_value) {
                Ok(triple) => sequence.push(triple),
                Err(reason) => {
                    let content = line.trim().to_string();
                    warn!("Skipping invalid line {}: '{}' ({})", index + 1, content, reason);
                    skipped.push(SkippedRecord {
                        line_number: index + 1,
                        content,
                        reason,
                    });
                }
            }
        }

        debug!("Parsed {} entries, skipped {} lines", sequence.len(), skipped.len());

        Ok(ParsedLut { sequence, skipped })
    }
}

/// Parses one `r g b` line and divides each value by `max_value`.
///
/// The token count is checked before any value is parsed, so a short line
/// always reports `TokenCount` even if it also holds garbage.
pub fn parse_record(line: &str, max_value: f64) -> std::result::Result<ColorTriple, RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != FIELDS_PER_RECORD {
        return Err(RecordError::TokenCount(tokens.len()));
    }

    let mut values = [0.0f64; FIELDS_PER_RECORD];
    for (value, token) in values.iter_mut().zip(&tokens) {
        let parsed = token.parse::<f64>().map_err(|_| RecordError::NotNumeric {
            token: token.to_string(),
        })?;
        // f64 parsing also accepts nan and inf spellings
        if !parsed.is_finite() {
            return Err(RecordError::NonFinite {
                token: token.to_string(),
            });
        }
        *value = parsed;
    }

    Ok(ColorTriple::new(
        values[0] / max_value,
        values[1] / max_value,
        values[2] / max_value,
    ))
}
