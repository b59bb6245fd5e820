use std::io::BufRead;

use crate::lut_pipeline::common::config::ConversionConfig;
use crate::lut_pipeline::common::error::Result;
use crate::lut_pipeline::parse::types::ParsedLut;

pub trait LutReader {
    fn read_lut(&self, input: &mut dyn BufRead, config: &ConversionConfig) -> Result<ParsedLut>;
}
