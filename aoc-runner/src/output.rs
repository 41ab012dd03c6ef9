//! Report rendering for day results

use crate::runner::DayReport;
use aoc_solver::Part;
use std::io::{self, Write};
use std::time::Duration;

/// Marker appended to an answer the ledger has seen before
pub const REPEATED_MARKER: &str = "REPEATED RESPONSE";

/// Writes the human-readable run report
pub struct ReportFormatter<W> {
    out: W,
}

impl<W: Write> ReportFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_title(&mut self, year: u16) -> io::Result<()> {
        writeln!(self.out, "Advent of Code {}", year)
    }

    /// Separator and `Day N:` line, written before the day runs so solver
    /// output lands inside the day's block
    pub fn print_day_header(&mut self, day: u8) -> io::Result<()> {
        writeln!(self.out, "{}", "*".repeat(60))?;
        writeln!(self.out, "Day {}:", day)?;
        self.out.flush()
    }

    /// Answers first, then the three timing lines
    pub fn print_day(&mut self, report: &DayReport) -> io::Result<()> {
        for part in Part::ALL {
            let outcome = report.result.part(part);
            match &outcome.answer {
                Some(answer) if outcome.unique => {
                    writeln!(self.out, "Part {}: > {} <", part, answer)?
                }
                Some(answer) => writeln!(
                    self.out,
                    "Part {}: > {} < {}",
                    part, answer, REPEATED_MARKER
                )?,
                None => writeln!(self.out, "Part {}: (no answer)", part)?,
            }
        }

        if let Some(failure) = &report.failure {
            writeln!(
                self.out,
                "!!! failed while {}: {}",
                failure.stage, failure.error
            )?;
        }

        writeln!(
            self.out,
            "--- Prep:   {} ms",
            format_millis(report.result.preparation)
        )?;
        writeln!(
            self.out,
            "--- Part 1: {} ms",
            format_millis(report.result.part1.duration)
        )?;
        writeln!(
            self.out,
            "--- Part 2: {} ms",
            format_millis(report.result.part2.duration)
        )
    }

    pub fn print_total(&mut self, total: Duration) -> io::Result<()> {
        writeln!(self.out, "{}", "*".repeat(60))?;
        writeln!(self.out, "Total runtime: {} ms", format_millis(Some(total)))
    }
}

/// Fractional milliseconds, right-aligned to 12 columns with thousands separators
///
/// `None` (interval never measured) renders as `-`.
pub fn format_millis(duration: Option<Duration>) -> String {
    match duration {
        Some(d) => format!("{:>12}", group_thousands(d.as_nanos() as f64 / 1e6)),
        None => format!("{:>12}", "-"),
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int.len() + int.len() / 3 + frac.len() + 1);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push('.');
    grouped.push_str(frac);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DayError;
    use crate::runner::{DayFailure, DayResult, DayStage, PartOutcome};
    use aoc_solver::{SolveError, SolverError};

    fn render(report: &DayReport) -> String {
        let mut buf = Vec::new();
        let mut formatter = ReportFormatter::new(&mut buf);
        formatter.print_day_header(report.day).unwrap();
        formatter.print_day(report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(Some(Duration::from_nanos(0))), "        0.00");
        assert_eq!(format_millis(Some(Duration::from_micros(1_234))), "        1.23");
        assert_eq!(
            format_millis(Some(Duration::from_millis(1_234_567))),
            "1,234,567.00"
        );
        assert_eq!(format_millis(Some(Duration::from_nanos(999_999))), "        1.00");
        assert_eq!(format_millis(None), "           -");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.5), "0.50");
        assert_eq!(group_thousands(999.994), "999.99");
        assert_eq!(group_thousands(1000.0), "1,000.00");
        assert_eq!(group_thousands(123456.789), "123,456.79");
    }

    #[test]
    fn test_complete_day() {
        let report = DayReport {
            day: 7,
            result: DayResult {
                preparation: Some(Duration::from_micros(120)),
                part1: PartOutcome {
                    answer: Some("95437".into()),
                    duration: Some(Duration::from_micros(30)),
                    unique: true,
                },
                part2: PartOutcome {
                    answer: Some("24933642".into()),
                    duration: Some(Duration::from_micros(10)),
                    unique: false,
                },
            },
            failure: None,
        };

        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Day 7:");
        assert_eq!(lines[2], "Part 1: > 95437 <");
        assert_eq!(lines[3], "Part 2: > 24933642 < REPEATED RESPONSE");
        assert_eq!(lines[4], "--- Prep:           0.12 ms");
        assert_eq!(lines[5], "--- Part 1:         0.03 ms");
        assert_eq!(lines[6], "--- Part 2:         0.01 ms");
    }

    #[test]
    fn test_failed_day_shows_absent_parts() {
        let report = DayReport {
            day: 2,
            result: DayResult {
                preparation: Some(Duration::from_micros(5)),
                ..Default::default()
            },
            failure: Some(DayFailure {
                stage: DayStage::RunningPart1,
                error: DayError::Solver(SolverError::SolveError(SolveError::Failed(
                    "boom".into(),
                ))),
            }),
        };

        let text = render(&report);
        assert!(text.contains("Part 1: (no answer)"));
        assert!(text.contains("Part 2: (no answer)"));
        assert!(text.contains("!!! failed while running part 1: Solve error: Solve failed: boom"));
        assert!(text.contains("--- Part 1:            - ms"));
    }

    #[test]
    fn test_total_line() {
        let mut buf = Vec::new();
        ReportFormatter::new(&mut buf)
            .print_total(Duration::from_millis(1500))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("Total runtime:     1,500.00 ms\n"));
    }
}
