#[cfg(test)]
mod tests {
    use std::io::{BufRead, Cursor, Write};
    use crate::lut_pipeline::common::{ConversionConfig, LutError, MissingInputPolicy, Result, Traversal};
    use crate::lut_pipeline::cuboid::Cuboid;
    use crate::lut_pipeline::parse::{ColorSequence, ColorTriple, LutReader, ParsedLut};
    use crate::lut_pipeline::emit::LutWriter;
    use crate::lut_pipeline::conversions::{ConversionSummary, LutConversionPipeline};

    struct MockReader {
        should_fail: bool,
        mock_data: Option<ParsedLut>,
    }

    impl LutReader for MockReader {
        fn read_lut(&self, _input: &mut dyn BufRead, config: &ConversionConfig) -> Result<ParsedLut> {
            if self.should_fail {
                return Err(LutError::IoError(std::io::Error::other("Mock read error")));
            }
            Ok(self.mock_data.clone().unwrap_or_else(|| ParsedLut {
                sequence: (0..config.side.pow(3)).map(|_| ColorTriple::new(0.0, 0.0, 0.0)).collect(),
                skipped: Vec::new(),
            }))
        }
    }

    struct MockWriter {
        should_fail: bool,
        written_sides: std::sync::Arc<std::sync::Mutex<Vec<usize>>>,
    }

    impl LutWriter for MockWriter {
        fn write_lut(&self, cube: &Cuboid, _output: &mut dyn Write, _config: &ConversionConfig) -> Result<usize> {
            if self.should_fail {
                return Err(LutError::IoError(std::io::Error::other("Mock write error")));
            }
            self.written_sides.lock().unwrap().push(cube.side());
            Ok(cube.len())
        }
    }

    fn lut_text(lines: &[&str]) -> String {
        lines.iter().map(|line| format!("{}\n", line)).collect()
    }

    fn run(text: &str, config: ConversionConfig) -> (Result<ConversionSummary>, String) {
        let pipeline = LutConversionPipeline::new(config);
        let mut output = Vec::<u8>::new();
        let result = pipeline.convert(&mut Cursor::new(text.as_bytes()), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_successful_conversion() {
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: false, mock_data: None };
        let writer = MockWriter { should_fail: false, written_sides: written.clone() };

        let pipeline = LutConversionPipeline::with_custom(reader, writer, ConversionConfig::default());

        let mut output = Cursor::new(Vec::<u8>::new());
        let summary = pipeline.convert(&mut Cursor::new(b"unused".as_slice()), &mut output).unwrap();

        assert_eq!(summary, ConversionSummary { records: 4913, skipped: 0, emitted: 4913 });
        assert_eq!(*written.lock().unwrap(), vec![17]);
    }

    #[test]
    fn test_reader_failure() {
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: true, mock_data: None };
        let writer = MockWriter { should_fail: false, written_sides: written.clone() };

        let pipeline = LutConversionPipeline::with_custom(reader, writer, ConversionConfig::default());

        let mut output = Cursor::new(Vec::<u8>::new());
        let result = pipeline.convert(&mut Cursor::new(b"unused".as_slice()), &mut output);

        assert!(matches!(result.unwrap_err(), LutError::IoError(_)));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_writer_failure() {
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: false, mock_data: None };
        let writer = MockWriter { should_fail: true, written_sides: written };

        let pipeline = LutConversionPipeline::with_custom(reader, writer, ConversionConfig::default());

        let mut output = Cursor::new(Vec::<u8>::new());
        let result = pipeline.convert(&mut Cursor::new(b"unused".as_slice()), &mut output);

        assert!(matches!(result.unwrap_err(), LutError::IoError(_)));
    }

    #[test]
    fn test_short_sequence_never_reaches_writer() {
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let reader = MockReader {
            should_fail: false,
            mock_data: Some(ParsedLut {
                sequence: ColorSequence::from(vec![ColorTriple::new(0.0, 0.0, 0.0); 100]),
                skipped: Vec::new(),
            }),
        };
        let writer = MockWriter { should_fail: false, written_sides: written.clone() };

        let pipeline = LutConversionPipeline::with_custom(reader, writer, ConversionConfig::default());

        let mut output = Cursor::new(Vec::<u8>::new());
        let result = pipeline.convert(&mut Cursor::new(b"unused".as_slice()), &mut output);

        assert!(matches!(result.unwrap_err(), LutError::InsufficientData { expected: 4913, actual: 100 }));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let (result, _) = run("", ConversionConfig::builder().max_value(0.0).build());
        assert!(matches!(result.unwrap_err(), LutError::InvalidMaxValue(_)));

        let (result, _) = run("", ConversionConfig::builder().max_value(f64::NAN).build());
        assert!(matches!(result.unwrap_err(), LutError::InvalidMaxValue(_)));

        let (result, _) = run("", ConversionConfig::builder().side(0).build());
        assert!(matches!(result.unwrap_err(), LutError::InvalidSide(0)));
    }

    #[test]
    fn test_all_black_lut() {
        let text = lut_text(&vec!["0 0 0"; 4913]);
        let (result, output) = run(&text, ConversionConfig::default());

        assert_eq!(result.unwrap().emitted, 4913);
        assert_eq!(output.lines().count(), 4913);
        assert!(output
            .lines()
            .all(|line| line == "\t{ .red = 0.000000, .green = 0.000000, .blue = 0.000000 },"));
    }

    #[test]
    fn test_first_rgb_record() {
        let mut lines = vec!["4095 2048 0"];
        lines.extend(vec!["0 0 0"; 4912]);
        let (result, output) = run(&lut_text(&lines), ConversionConfig::default());

        assert!(result.is_ok());
        assert_eq!(
            output.lines().next().unwrap(),
            "\t{ .red = 1.000000, .green = 0.500122, .blue = 0.000000 },"
        );
    }

    #[test]
    fn test_bgr_conversion_reorders_records() {
        // Entry at flat index 1 is cube[0][0][1]; BGR emits it at loop position (1, 0, 0).
        let mut lines = vec!["0 0 0", "4095 4095 4095"];
        lines.extend(vec!["0 0 0"; 4911]);
        let config = ConversionConfig::builder().traversal(Traversal::Bgr).build();
        let (result, output) = run(&lut_text(&lines), config);

        assert_eq!(result.unwrap().emitted, 4913);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "\t{ .red = 0.000000, .green = 0.000000, .blue = 0.000000 },");
        assert_eq!(lines[289], "\t{ .red = 1.000000, .green = 1.000000, .blue = 1.000000 },");
    }

    #[test]
    fn test_malformed_line_skipped() {
        let mut lines = vec!["0 0 0"; 2000];
        lines.push("1 2");
        lines.extend(vec!["0 0 0"; 2913]);
        let (result, output) = run(&lut_text(&lines), ConversionConfig::default());

        assert_eq!(result.unwrap(), ConversionSummary { records: 4913, skipped: 1, emitted: 4913 });
        assert_eq!(output.lines().count(), 4913);
    }

    #[test]
    fn test_malformed_line_causes_insufficient_data() {
        let mut lines = vec!["0 0 0"; 2000];
        lines.push("1 2");
        lines.extend(vec!["0 0 0"; 2912]);
        let (result, output) = run(&lut_text(&lines), ConversionConfig::default());

        assert!(matches!(result.unwrap_err(), LutError::InsufficientData { expected: 4913, actual: 4912 }));
        assert!(output.is_empty());
    }

    #[test]
    fn test_missing_file_fails_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let pipeline = LutConversionPipeline::new(ConversionConfig::default());

        let err = pipeline.convert_file(&path, &mut Vec::<u8>::new()).unwrap_err();
        match err {
            LutError::InputReadError(message) => assert!(message.contains("absent.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_with_empty_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let config = ConversionConfig::builder().missing_input(MissingInputPolicy::Empty).build();
        let pipeline = LutConversionPipeline::new(config);

        let parsed = pipeline.read_file(&path).unwrap();
        assert!(parsed.sequence.is_empty());

        let err = pipeline.convert_file(&path, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, LutError::InsufficientData { expected: 4913, actual: 0 }));
    }

    #[test]
    fn test_convert_file_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lut.txt");
        let output = dir.path().join("lut.h");
        std::fs::write(&input, lut_text(&vec!["4095 0 4095"; 27])).unwrap();

        let config = ConversionConfig::builder().side(3).build();
        let pipeline = LutConversionPipeline::new(config);
        let summary = pipeline.convert_file_to_path(&input, &output).unwrap();

        assert_eq!(summary.emitted, 27);
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 27);
        assert!(text.ends_with("\t{ .red = 1.000000, .green = 0.000000, .blue = 1.000000 },\n"));
    }

    #[test]
    fn test_failed_conversion_creates_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lut.txt");
        let output = dir.path().join("lut.h");
        std::fs::write(&input, lut_text(&["0 0 0"; 5])).unwrap();

        let pipeline = LutConversionPipeline::new(ConversionConfig::default());
        assert!(pipeline.convert_file_to_path(&input, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_probe_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lut.txt");
        std::fs::write(&input, lut_text(&vec!["0 0 0"; 4913])).unwrap();

        let pipeline = LutConversionPipeline::new(ConversionConfig::default());
        let mut output = Vec::<u8>::new();
        let written = pipeline.probe_file(&input, 16, &mut output).unwrap();

        assert_eq!(written, 17);
        let text = String::from_utf8(output).unwrap();
        assert!(text.lines().next().unwrap().starts_with("16 \t{ .red"));
        assert!(text.lines().last().unwrap().starts_with("4640 "));
    }

    #[test]
    fn test_column_dump_requires_readable_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let config = ConversionConfig::builder().missing_input(MissingInputPolicy::Empty).build();
        let pipeline = LutConversionPipeline::new(config);

        let mut output = Vec::<u8>::new();
        let err = pipeline.probe_file(&path, 0, &mut output).unwrap_err();

        assert!(matches!(err, LutError::InputReadError(ref message) if message.contains("absent.txt")));
        assert!(output.is_empty());
    }
}
