use tracing::{info, instrument, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::lut_pipeline::{
    common::{ConversionConfig, LutError, MissingInputPolicy, Result},
    cuboid::Cuboid,
    emit::{BraceInitializerWriter, LutWriter, write_probe},
    parse::{LutReader, ParsedLut, TextLutReader},
};

/// Counts gathered over one conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Entries accepted by the reader
    pub records: usize,
    /// Lines rejected by the reader
    pub skipped: usize,
    /// Records written by the writer
    pub emitted: usize,
}

pub struct LutConversionPipeline<R: LutReader, W: LutWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl LutConversionPipeline<TextLutReader, BraceInitializerWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: TextLutReader,
            writer: BraceInitializerWriter,
            config,
        }
    }
}

impl<R: LutReader, W: LutWriter> LutConversionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_config(&self) -> Result<()> {
        if self.config.side == 0 {
            return Err(LutError::InvalidSide(self.config.side));
        }

        if !self.config.max_value.is_finite() || self.config.max_value <= 0.0 {
            return Err(LutError::InvalidMaxValue(self.config.max_value));
        }

        Ok(())
    }

    #[instrument(skip(self, input, output), fields(traversal = %self.config.traversal))]
    pub fn convert(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<ConversionSummary> {
        self.validate_config()?;

        let parsed = {
            let _span = tracing::info_span!("parse_lut").entered();
            self.reader.read_lut(input, &self.config)?
        };

        self.convert_parsed(parsed, output)
    }

    fn build_cube(&self, parsed: ParsedLut) -> Result<(Cuboid, usize, usize)> {
        let records = parsed.sequence.len();
        let skipped = parsed.skipped.len();

        let _span = tracing::info_span!("build_cube", side = self.config.side, records).entered();
        let cube = Cuboid::from_sequence(parsed.sequence, self.config.side)?;

        Ok((cube, records, skipped))
    }

    fn emit(&self, cube: &Cuboid, records: usize, skipped: usize, output: &mut dyn Write) -> Result<ConversionSummary> {
        let emitted = {
            let _span = tracing::info_span!("emit_lut").entered();
            self.writer.write_lut(cube, output, &self.config)?
        };

        info!(records, skipped, emitted, "Conversion complete");
        Ok(ConversionSummary {
            records,
            skipped,
            emitted,
        })
    }

    fn convert_parsed(&self, parsed: ParsedLut, output: &mut dyn Write) -> Result<ConversionSummary> {
        info!("Starting LUT conversion");
        let (cube, records, skipped) = self.build_cube(parsed)?;
        self.emit(&cube, records, skipped, output)
    }

    /// Reads and parses the LUT file at `input_path`.
    ///
    /// An unopenable file is an error unless the config's missing-input policy
    /// is `Empty`, in which case an empty LUT is returned after a warning.
    pub fn read_file<P: AsRef<Path>>(&self, input_path: P) -> Result<ParsedLut> {
        self.read_file_with_policy(input_path.as_ref(), self.config.missing_input)
    }

    fn read_file_with_policy(&self, input_path: &Path, policy: MissingInputPolicy) -> Result<ParsedLut> {
        let file = {
            let _span = tracing::info_span!("open_input_file").entered();
            File::open(input_path)
        };

        match file {
            Ok(file) => self.reader.read_lut(&mut BufReader::new(file), &self.config),
            Err(e) => match policy {
                MissingInputPolicy::Fail => Err(LutError::InputReadError(format!(
                    "{}: {}",
                    input_path.display(),
                    e
                ))),
                MissingInputPolicy::Empty => {
                    warn!("File '{}' could not be opened ({}), continuing with no entries", input_path.display(), e);
                    Ok(ParsedLut::default())
                }
            },
        }
    }

    #[instrument(skip(self, input_path, output))]
    pub fn convert_file<P: AsRef<Path>>(&self, input_path: P, output: &mut dyn Write) -> Result<ConversionSummary> {
        let input_path = input_path.as_ref();
        self.validate_config()?;

        info!(input = %input_path.display(), "Converting file");

        let parsed = {
            let _span = tracing::info_span!("parse_lut").entered();
            self.read_file(input_path)?
        };

        self.convert_parsed(parsed, output)
    }

    /// Converts `input_path` and writes the records to a newly created file at `output_path`.
    ///
    /// The output file is only created once the cube has been built.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_to_path<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ConversionSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();
        self.validate_config()?;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let parsed = {
            let _span = tracing::info_span!("parse_lut").entered();
            self.read_file(input_path)?
        };

        let (cube, records, skipped) = self.build_cube(parsed)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            let file = File::create(output_path).map_err(|e| {
                LutError::IoError(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", output_path.display(), e),
                ))
            })?;
            BufWriter::new(file)
        };

        self.emit(&cube, records, skipped, &mut output_file)
    }

    /// Dumps the `(j, k)` column at `offset` instead of converting the whole cube.
    ///
    /// The input must be readable regardless of the missing-input policy.
    #[instrument(skip(self, input_path, output))]
    pub fn probe_file<P: AsRef<Path>>(&self, input_path: P, offset: usize, output: &mut dyn Write) -> Result<usize> {
        self.validate_config()?;
        let parsed = self.read_file_with_policy(input_path.as_ref(), MissingInputPolicy::Fail)?;
        write_probe(&parsed.sequence, offset, self.config.side, output)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
