//! Configuration resolution from CLI args and environment

use crate::cli::Args;
use crate::error::CliError;
use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Environment variable holding the adventofcode.com session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Resolved runtime configuration
pub struct Config {
    pub year: u16,
    pub start_day: u8,
    pub end_day: u8,
    /// Sample input name, only valid for a single day
    pub sample: Option<String>,
    pub display_output: bool,
    /// Base directory holding `input/` and `results/`
    pub root: PathBuf,
    /// Session key (zeroized on drop)
    pub session: Option<Zeroizing<String>>,
    pub list: bool,
}

impl Config {
    /// Build config from CLI args
    ///
    /// `today` drives the default year/day; `env` looks up environment variables.
    pub fn from_args(
        args: Args,
        today: NaiveDate,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let (default_year, default_day) = latest_puzzle(today);
        let year = args.year.unwrap_or(default_year);
        let end_day = args.day.unwrap_or(default_day);
        let start_day = if args.only {
            end_day
        } else {
            args.from.unwrap_or(1)
        };

        if start_day > end_day {
            return Err(CliError::Config(format!(
                "Empty day range {}..={}",
                start_day, end_day
            )));
        }
        if args.sample.is_some() && start_day != end_day {
            return Err(CliError::Config(
                "--sample needs a single day; add --only".to_string(),
            ));
        }

        let session = env(SESSION_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Zeroizing::new);

        Ok(Config {
            year,
            start_day,
            end_day,
            sample: args.sample,
            display_output: !args.quiet,
            root: expand_tilde(&args.root),
            session,
            list: args.list,
        })
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.join("input")
    }

    pub fn results_dir(&self) -> PathBuf {
        self.root.join("results")
    }
}

/// Most recent (year, day) with a puzzle as of `today`
fn latest_puzzle(today: NaiveDate) -> (u16, u8) {
    let year = today.year() as u16;
    if today.month() == 12 {
        (year, today.day().min(25) as u8)
    } else {
        (year - 1, 25)
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(argv: &[&str], today: NaiveDate) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap();
        Config::from_args(args, today, |_| None)
    }

    #[test]
    fn test_defaults_in_december() {
        let cfg = config(&[], date(2022, 12, 7)).unwrap();
        assert_eq!((cfg.year, cfg.start_day, cfg.end_day), (2022, 1, 7));
        assert!(cfg.display_output);
        assert!(cfg.session.is_none());

        let cfg = config(&[], date(2022, 12, 31)).unwrap();
        assert_eq!(cfg.end_day, 25);
    }

    #[test]
    fn test_defaults_outside_december() {
        let cfg = config(&[], date(2023, 6, 1)).unwrap();
        assert_eq!((cfg.year, cfg.start_day, cfg.end_day), (2022, 1, 25));
    }

    #[test]
    fn test_single_day_and_range() {
        let cfg = config(&["--year", "2022", "--day", "7", "--only"], date(2023, 1, 1)).unwrap();
        assert_eq!((cfg.year, cfg.start_day, cfg.end_day), (2022, 7, 7));

        let cfg = config(&["--day", "9", "--from", "3"], date(2023, 1, 1)).unwrap();
        assert_eq!((cfg.start_day, cfg.end_day), (3, 9));

        assert!(config(&["--day", "2", "--from", "3"], date(2023, 1, 1)).is_err());
    }

    #[test]
    fn test_sample_requires_single_day() {
        assert!(config(&["--day", "7", "--sample", "a.txt"], date(2023, 1, 1)).is_err());

        let cfg = config(&["--day", "7", "--only", "--sample", "a.txt"], date(2023, 1, 1)).unwrap();
        assert_eq!(cfg.sample.as_deref(), Some("a.txt"));
    }

    #[test]
    fn test_session_from_env() {
        let args = Args::try_parse_from(["aoc", "--quiet"]).unwrap();
        let cfg = Config::from_args(args, date(2022, 12, 1), |key| {
            (key == SESSION_ENV).then(|| " abc123\n".to_string())
        })
        .unwrap();
        assert_eq!(cfg.session.as_deref().map(String::as_str), Some("abc123"));
        assert!(!cfg.display_output);

        let args = Args::try_parse_from(["aoc"]).unwrap();
        let cfg = Config::from_args(args, date(2022, 12, 1), |_| Some(String::new())).unwrap();
        assert!(cfg.session.is_none());
    }

    #[test]
    fn test_dirs_under_root() {
        let cfg = config(&["--root", "/tmp/aoc"], date(2022, 12, 1)).unwrap();
        assert_eq!(cfg.input_dir(), PathBuf::from("/tmp/aoc/input"));
        assert_eq!(cfg.results_dir(), PathBuf::from("/tmp/aoc/results"));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs")), PathBuf::from("/abs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }

    #[test]
    fn test_only_conflicts_with_from() {
        let result = Args::try_parse_from(["aoc", "--only", "--from", "2"]);
        assert!(result.is_err());
    }
}
