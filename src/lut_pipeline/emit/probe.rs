//! Column dump for inspecting a parsed LUT before it is reshaped.
//!
//! Prints every sequence entry whose index is `offset + n * side²`. That is the
//! column at a fixed `(j, k)` across the `i` axis of the cube.

use std::io::Write;

use crate::lut_pipeline::common::error::{LutError, Result};
use crate::lut_pipeline::parse::types::ColorSequence;

/// Writes `<index> <record>` lines for the column starting at `offset`.
pub fn write_probe(sequence: &ColorSequence, offset: usize, side: usize, output: &mut dyn Write) -> Result<usize> {
    let stride = side.checked_mul(side).filter(|&s| s > 0).ok_or(LutError::InvalidSide(side))?;
    if offset >= stride {
        return Err(LutError::InvalidProbeOffset { offset, limit: stride });
    }

    let mut written = 0;
    for (index, triple) in sequence.strided(offset, stride) {
        writeln!(output, "{} {}", index, triple)?;
        written += 1;
    }
    output.flush()?;

    Ok(written)
}
