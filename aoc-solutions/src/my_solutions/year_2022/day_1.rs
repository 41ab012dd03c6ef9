use anyhow::anyhow;
use aoc_solver::{OutputSink, ParseError, SolveError, Solver};
use aoc_solver_macros::AutoRegisterSolver;

/// Calorie Counting: elves' snacks separated by blank lines
#[derive(AutoRegisterSolver)]
#[aoc(year = 2022, day = 1)]
pub struct Day01 {
    /// Calories carried per elf, largest first
    totals: Vec<u64>,
}

impl Solver for Day01 {
    fn new(input: &str, _out: OutputSink) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no elves in input".to_string()));
        }

        let mut totals = input
            .trim()
            .split("\n\n")
            .enumerate()
            .map(|(elf, group)| {
                group
                    .lines()
                    .map(|line| {
                        line.trim()
                            .parse::<u64>()
                            .map_err(|e| anyhow!("(elf {}) {:?}: {}", elf + 1, line, e))
                    })
                    .sum::<Result<u64, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        totals.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { totals })
    }

    fn part1(&mut self) -> Result<String, SolveError> {
        Ok(self.totals[0].to_string())
    }

    fn part2(&mut self) -> Result<String, SolveError> {
        Ok(self.totals.iter().take(3).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[test]
    fn test_example() {
        let mut solver = Day01::new(EXAMPLE, OutputSink::null()).unwrap();
        assert_eq!(solver.part1().unwrap(), "24000");
        assert_eq!(solver.part2().unwrap(), "45000");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            Day01::new("100\nabc\n", OutputSink::null()),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Day01::new("\n", OutputSink::null()),
            Err(ParseError::MissingData(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_part1_is_largest_group(
            groups in prop::collection::vec(prop::collection::vec(1u64..100_000, 1..6), 1..20),
        ) {
            let input = groups
                .iter()
                .map(|g| g.iter().map(u64::to_string).collect::<Vec<_>>().join("\n"))
                .collect::<Vec<_>>()
                .join("\n\n");
            let mut sums: Vec<u64> = groups.iter().map(|g| g.iter().sum()).collect();
            sums.sort_unstable_by(|a, b| b.cmp(a));

            let mut solver = Day01::new(&input, OutputSink::null()).unwrap();
            prop_assert_eq!(solver.part1().unwrap(), sums[0].to_string());
            prop_assert_eq!(
                solver.part2().unwrap(),
                sums.iter().take(3).sum::<u64>().to_string()
            );
        }
    }
}
