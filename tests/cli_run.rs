//! End-to-end runs through the command line layer.

use std::path::Path;

use clap::Parser;
use paraphrase::ParaphraseError;
use paraphrase::cli::{Args, execute};
use rstest::rstest;
use tempfile::TempDir;

fn run(argv: &[&str]) -> paraphrase::Result<std::path::PathBuf> {
    let argv = std::iter::once("paraphrase-graph").chain(argv.iter().copied());
    execute(&Args::try_parse_from(argv).expect("arguments should parse"))
}

fn write_input(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

#[rstest]
#[case(&[], "sentences_prp.graphml")]
#[case(&["-e"], "sentences_we_prp.graphml")]
#[case(&["-m", "automaton"], "sentences_fsa.graphml")]
#[case(&["--end-points", "--mode", "automaton"], "sentences_we_fsa.graphml")]
fn output_file_naming(#[case] flags: &[&str], #[case] expected: &str) {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "sentences.txt", "a b c\na b d\n");
    let out = dir.path().join("out");
    let out_str = out.to_string_lossy().into_owned();

    let mut argv = vec!["-q", "-o", out_str.as_str()];
    argv.extend_from_slice(flags);
    argv.push(input.as_str());

    let written = run(&argv).unwrap();
    assert_eq!(written, out.join(expected));
    assert!(written.is_file());
}

#[test]
fn output_defaults_to_input_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "in.txt", "x y\nz y\n");

    let written = run(&["-q", input.as_str()]).unwrap();
    assert_eq!(written.parent().unwrap(), dir.path().canonicalize().unwrap());

    let xml = std::fs::read_to_string(&written).unwrap();
    assert_eq!(xml.matches("<node id=").count(), 3);
    assert_eq!(xml.matches("<edge id=").count(), 2);
}

#[test]
fn end_points_use_configured_tokens() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "in.txt", "a b\nc b\n");
    let config = write_input(
        dir.path(),
        "config.yaml",
        "START_TOKEN: BEGIN\nEND_TOKEN: FINISH\nCOLOR_GENERAL: \"#111111\"\n\
         COLOR_START: \"#222222\"\nCOLOR_END: \"#333333\"\nCHARACTER_WIDTH: 10\n",
    );

    let written = run(&["-q", "-e", "-c", config.as_str(), input.as_str()]).unwrap();
    let xml = std::fs::read_to_string(written).unwrap();

    // BEGIN, a, b, FINISH, c
    assert_eq!(xml.matches("<node id=").count(), 5);
    assert!(xml.contains(">BEGIN</y:NodeLabel>"));
    assert!(xml.contains("lineColor=\"#000000\">FINISH</y:NodeLabel>"));
    assert!(xml.contains("<y:Fill color=\"#222222\" transparent=\"false\"/>"));
    assert!(xml.contains("width=\"66.0\""));
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");
    let out = dir.path().to_string_lossy().into_owned();

    let err = run(&["-q", "-o", out.as_str(), missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, ParaphraseError::InputNotFound { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn missing_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "in.txt", "a\n");
    let config = dir.path().join("missing.yaml");

    let err = run(&["-q", "-c", config.to_str().unwrap(), input.as_str()]).unwrap_err();
    assert!(matches!(err, ParaphraseError::ConfigNotFound { .. }));
}
