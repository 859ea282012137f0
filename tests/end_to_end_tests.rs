// tests/end_to_end_tests.rs
//
// End-to-end tests for the command-line driver: files on disk in, files on disk out.

use std::fs;
use std::path::Path;

use sparse_matrix::cli::interactive;
use sparse_matrix::cli::{handle_apply, handle_inspect, ApplyArgs, CliError, InspectArgs};
use sparse_matrix::config::MatrixConfig;
use sparse_matrix::core::FileStorage;
use sparse_matrix::{Error, MatrixCodec, Operation};

#[cfg(test)]
mod end_to_end_tests {
    use super::*;

    const A: &str = "rows=3\ncols=3\n(0, 0, 1)\n(1, 2, 4)\n(2, 1, -2)\n";
    const B: &str = "rows=3\ncols=3\n(0, 0, 2)\n(1, 2, -4)\n(2, 0, 5)\n";

    fn write_inputs(dir: &Path) {
        fs::write(dir.join("a.txt"), A).unwrap();
        fs::write(dir.join("b.txt"), B).unwrap();
    }

    fn test_config(dir: &Path) -> MatrixConfig {
        MatrixConfig {
            input_dir: dir.display().to_string(),
            output_dir: dir.join("results").display().to_string(),
            ..MatrixConfig::default()
        }
    }

    #[test]
    fn test_apply_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());

        let args = ApplyArgs {
            operation: Operation::Add,
            lhs: dir.path().join("a.txt"),
            rhs: dir.path().join("b.txt"),
            output: None,
        };
        let mut out = Vec::new();
        let nnz = handle_apply(&args, &test_config(dir.path()), &FileStorage, &mut out).unwrap();

        // (1, 2) cancels out
        assert_eq!(nnz, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "rows=3\ncols=3\n(0, 0, 3)\n(2, 0, 5)\n(2, 1, -2)\n"
        );
    }

    #[test]
    fn test_apply_to_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        let output = dir.path().join("nested/out/product.txt");

        let args = ApplyArgs {
            operation: Operation::Multiply,
            lhs: dir.path().join("a.txt"),
            rhs: dir.path().join("b.txt"),
            output: Some(output.clone()),
        };
        let mut out = Vec::new();
        handle_apply(&args, &test_config(dir.path()), &FileStorage, &mut out).unwrap();
        assert!(out.is_empty());

        // A * B: row 0 -> (0,0)=2; row 1 -> 4 * row 2 of B = (1,0)=20; row 2 -> -2 * row 1 of B = (2,2)=8
        let product = MatrixCodec::parse(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(product.nnz(), 3);
        assert_eq!(product.get(0, 0), 2);
        assert_eq!(product.get(1, 0), 20);
        assert_eq!(product.get(2, 2), 8);
    }

    #[test]
    fn test_apply_propagates_errors() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        fs::write(dir.path().join("wide.txt"), "rows=1\ncols=5\n(0, 4, 1)\n").unwrap();
        fs::write(dir.path().join("broken.txt"), "rows=2\ncols=2\n(0, 0, x)\n").unwrap();
        let config = test_config(dir.path());

        let mismatch = ApplyArgs {
            operation: Operation::Subtract,
            lhs: dir.path().join("a.txt"),
            rhs: dir.path().join("wide.txt"),
            output: None,
        };
        let err = handle_apply(&mismatch, &config, &FileStorage, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Matrix(Error::DimensionMismatch { .. })));
        assert_eq!(err.exit_code(), 1);

        let broken = ApplyArgs {
            operation: Operation::Add,
            lhs: dir.path().join("broken.txt"),
            rhs: dir.path().join("a.txt"),
            output: None,
        };
        let err = handle_apply(&broken, &config, &FileStorage, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Matrix(Error::Format { line: 3, .. })));
        assert_eq!(err.exit_code(), 2);

        let missing = ApplyArgs {
            operation: Operation::Add,
            lhs: dir.path().join("missing.txt"),
            rhs: dir.path().join("a.txt"),
            output: None,
        };
        let err = handle_apply(&missing, &config, &FileStorage, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Matrix(Error::Io { .. })));
    }

    #[test]
    fn test_inspect_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());

        let mut args = InspectArgs {
            file: dir.path().join("a.txt"),
            json: false,
            entries: true,
        };
        let mut out = Vec::new();
        handle_inspect(&args, &FileStorage, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Dimension: 3 x 3"), "{}", text);
        assert!(text.contains("Non-zero entries: 3"), "{}", text);
        assert!(text.contains("1 2 4"), "{}", text);

        args.json = true;
        args.entries = false;
        let mut out = Vec::new();
        handle_inspect(&args, &FileStorage, &mut out).unwrap();
        let stats: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(stats["rows"], 3);
        assert_eq!(stats["nnz"], 3);
    }

    #[test]
    fn test_interactive_session() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        let config = test_config(dir.path());
        let output = dir.path().join("out/diff.txt");

        // Blank directory answer -> config.input_dir; pick b then a; subtract
        let answers = format!("\n2\n1\n2\n{}\n", output.display());
        let mut input = answers.as_bytes();
        let mut transcript = Vec::new();

        let written = interactive::run(&mut input, &mut transcript, &FileStorage, &config, None).unwrap();
        assert_eq!(written, output);

        let transcript = String::from_utf8(transcript).unwrap();
        assert!(transcript.contains("1: a.txt"), "{}", transcript);
        assert!(transcript.contains("2: b.txt"), "{}", transcript);
        assert!(transcript.contains("3. Multiply Matrices"), "{}", transcript);

        let diff = MatrixCodec::parse(&fs::read_to_string(&output).unwrap()).unwrap();
        // B - A
        assert_eq!(diff.get(0, 0), 1);
        assert_eq!(diff.get(1, 2), -8);
        assert_eq!(diff.get(2, 0), 5);
        assert_eq!(diff.get(2, 1), 2);
        assert_eq!(diff.nnz(), 4);
    }

    #[test]
    fn test_interactive_default_output_path() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        let config = test_config(dir.path());

        let mut input = "1\n1\n3\n\n".as_bytes();
        let written = interactive::run(
            &mut input,
            &mut Vec::new(),
            &FileStorage,
            &config,
            Some(dir.path()),
        )
        .unwrap();

        assert!(written.starts_with(dir.path().join("results")));
        assert!(written.is_file());
    }

    #[test]
    fn test_interactive_invalid_choices() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        let config = test_config(dir.path());

        let mut input = "9\n".as_bytes();
        let err = interactive::run(&mut input, &mut Vec::new(), &FileStorage, &config, Some(dir.path()))
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidSelection(_)));

        let mut input = "1\n2\n4\n".as_bytes();
        let err = interactive::run(&mut input, &mut Vec::new(), &FileStorage, &config, Some(dir.path()))
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidSelection(_)));

        let mut input = "1\n".as_bytes();
        let err = interactive::run(&mut input, &mut Vec::new(), &FileStorage, &config, Some(dir.path()))
            .unwrap_err();
        assert!(matches!(err, CliError::EndOfInput));

        let empty = tempfile::tempdir().unwrap();
        let err = interactive::run(&mut "".as_bytes(), &mut Vec::new(), &FileStorage, &config, Some(empty.path()))
            .unwrap_err();
        assert!(matches!(err, CliError::NoMatrixFiles(_)));
    }
}
