//! Append-only answer ledger guarding against duplicate submissions
//!
//! One file per (year, day, part) under `{results_dir}/{year}/Day{DD} Part{N}.txt`,
//! one previously seen answer per line. Embedded newlines are stored as `\r`
//! so a multi-line answer stays on one line.

use aoc_solver::Part;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Stand-in for `\n` inside a stored answer
pub const NEWLINE_PLACEHOLDER: char = '\r';

pub struct ResultLedger {
    results_dir: PathBuf,
}

impl ResultLedger {
    pub fn new(results_dir: PathBuf) -> Self {
        Self { results_dir }
    }

    /// Ledger file for one part of one day
    pub fn ledger_path(&self, year: u16, day: u8, part: Part) -> PathBuf {
        self.results_dir
            .join(year.to_string())
            .join(format!("Day{:02} Part{}.txt", day, part.number()))
    }

    /// Record an answer for a part; see [`check_and_record`]
    pub fn record(&self, year: u16, day: u8, part: Part, answer: &str) -> io::Result<bool> {
        check_and_record(&self.ledger_path(year, day, part), answer)
    }
}

/// Encode an answer as a single ledger line
pub fn normalize(text: &str) -> String {
    text.replace('\n', &NEWLINE_PLACEHOLDER.to_string())
}

/// Append `text` to the ledger at `path` unless it is already there
///
/// Returns `true` when this is the first time the text is recorded. Blank
/// text is vacuously unique and never written. A missing ledger file counts
/// as empty; parent directories are created on first append.
///
/// The whole file is rescanned on every call.
pub fn check_and_record(path: &Path, text: &str) -> io::Result<bool> {
    if text.trim().is_empty() {
        return Ok(true);
    }

    let line = normalize(text);
    let previous = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    // Split on '\n' only: `lines()` would also eat a trailing '\r'
    if previous.split('\n').any(|existing| existing == line) {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_ledger_path_format() {
        let ledger = ResultLedger::new(PathBuf::from("results"));
        assert_eq!(
            ledger.ledger_path(2022, 7, Part::Two),
            PathBuf::from("results").join("2022").join("Day07 Part2.txt")
        );
    }

    #[test]
    fn test_first_record_unique_then_repeated() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("Day01 Part1.txt");

        assert!(check_and_record(&path, "24000").unwrap());
        assert!(!check_and_record(&path, "24000").unwrap());
        assert!(check_and_record(&path, "45000").unwrap());
        assert!(!check_and_record(&path, "24000").unwrap());

        assert_eq!(fs::read_to_string(&path).unwrap(), "24000\n45000\n");
    }

    #[test]
    fn test_blank_never_touches_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Day01 Part1.txt");

        assert!(check_and_record(&path, "").unwrap());
        assert!(check_and_record(&path, "  \n\t").unwrap());
        assert!(!path.exists());

        fs::write(&path, "1\n").unwrap();
        assert!(check_and_record(&path, "").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n");
    }

    #[test]
    fn test_multiline_answer_stored_on_one_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Day10 Part2.txt");

        assert!(check_and_record(&path, "a\nb").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\rb\n");
        assert!(!check_and_record(&path, "a\nb").unwrap());
    }

    #[test]
    fn test_trailing_newline_answer_detected_as_repeat() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Day10 Part2.txt");

        assert!(check_and_record(&path, "###\n#.#\n").unwrap());
        assert!(!check_and_record(&path, "###\n#.#\n").unwrap());
        // Without the trailing newline it is a different answer
        assert!(check_and_record(&path, "###\n#.#").unwrap());
    }

    #[test]
    fn test_record_uses_part_specific_files() {
        let temp = TempDir::new().unwrap();
        let ledger = ResultLedger::new(temp.path().to_path_buf());

        assert!(ledger.record(2022, 1, Part::One, "42").unwrap());
        assert!(ledger.record(2022, 1, Part::Two, "42").unwrap());
        assert!(!ledger.record(2022, 1, Part::One, "42").unwrap());
        assert!(ledger.ledger_path(2022, 1, Part::One).exists());
        assert!(ledger.ledger_path(2022, 1, Part::Two).exists());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Any non-blank answer is unique once, then a repeat
        #[test]
        fn prop_unique_then_duplicate(text in "[ -~\n]{0,40}") {
            prop_assume!(!text.trim().is_empty());
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("ledger.txt");

            prop_assert!(check_and_record(&path, &text).unwrap());
            prop_assert!(!check_and_record(&path, &text).unwrap());
        }

        /// Blank answers never create or change the ledger
        #[test]
        fn prop_blank_is_noop(text in "[ \t\n]{0,10}") {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("ledger.txt");

            prop_assert!(check_and_record(&path, &text).unwrap());
            prop_assert!(check_and_record(&path, &text).unwrap());
            prop_assert!(!path.exists());
        }

        /// Distinct answers are all recorded
        #[test]
        fn prop_distinct_answers_all_unique(
            answers in prop::collection::btree_set("[0-9]{1,8}", 1..10),
        ) {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("ledger.txt");

            for answer in &answers {
                prop_assert!(check_and_record(&path, answer).unwrap());
            }
            let stored = fs::read_to_string(&path).unwrap();
            prop_assert_eq!(stored.lines().count(), answers.len());
        }
    }
}
