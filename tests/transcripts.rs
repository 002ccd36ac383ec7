use std::fs;

use polcalc::{
    Calculator,
    shell::{Session, format::Formatter, script::run_script},
};
use walkdir::WalkDir;

/// Marks where a transcript line's input ends and its expected output begins.
const SEPARATOR: &str = " => ";

#[test]
fn transcripts_replay() {
    let session = Session::new(Calculator::builtin(), Formatter::new(false));
    let mut count = 0;

    for entry in WalkDir::new("tests/transcripts").into_iter()
                                                  .filter_map(Result::ok)
                                                  .filter(|e| {
                                                      e.path()
                                                       .extension()
                                                       .is_some_and(|ext| ext == "txt")
                                                  })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (input, expected)) in parse_transcript(&content).into_iter().enumerate() {
            count += 1;
            let mut out = Vec::new();
            run_script(&session, input.as_bytes(), &mut out).unwrap();
            let actual = String::from_utf8(out).unwrap();

            assert_eq!(actual.trim_end_matches('\n'),
                       expected,
                       "line {} in {:?}: '{}'",
                       i + 1,
                       path,
                       input);
        }
    }

    assert!(count > 0, "No transcripts found in tests/transcripts");
}

/// Collects `input => expected` pairs, skipping blank lines and `#` comments.
fn parse_transcript(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once(SEPARATOR))
           .map(|(input, expected)| (input.to_string(), expected.to_string()))
           .collect()
}
