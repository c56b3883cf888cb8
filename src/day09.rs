// Copyright (c) 2023 Bastiaan Marinus van de Weerd


fn input_histories_from_str(s: &str) -> impl Iterator<Item = Vec<i64>> + '_ {
	parsing::histories_from_str(s).map(|r| r.unwrap())
}

fn input_histories() -> impl Iterator<Item = Vec<i64>> {
	input_histories_from_str(include_str!("day09.txt"))
}


/// Sums the last values of the successive difference sequences, down to the
/// first all-zero sequence.
fn extrapolated(mut values: Vec<i64>) -> i64 {
	let mut sum = 0;
	while values.iter().any(|&value| value != 0) {
		sum += *values.last().unwrap();
		values = values.windows(2).map(|w| w[1] - w[0]).collect();
	}
	sum
}


fn part1_impl(input_histories: impl Iterator<Item = Vec<i64>>) -> i64 {
	input_histories.map(extrapolated).sum()
}

pub(crate) fn part1() -> i64 {
	part1_impl(input_histories())
}


fn part2_impl(input_histories: impl Iterator<Item = Vec<i64>>) -> i64 {
	input_histories
		.map(|mut values| {
			values.reverse();
			extrapolated(values)
		})
		.sum()
}

pub(crate) fn part2() -> i64 {
	part2_impl(input_histories())
}


mod parsing {
	use {std::num::ParseIntError, either::Either};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum HistoriesError {
		Empty,
		Value { line: usize, value: usize, source: ParseIntError },
	}

	pub(super) fn histories_from_str(s: &str)
	-> impl Iterator<Item = Result<Vec<i64>, HistoriesError>> + '_ {
		use std::iter::once;
		if s.is_empty() { return Either::Left(once(Err(HistoriesError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.split_ascii_whitespace()
				.enumerate()
				.map(|(v, value)| value.parse()
					.map_err(|e| HistoriesError::Value {
						line: l + 1, value: v + 1, source: e }))
				.collect()))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		0 3 6 9 12 15
		1 3 6 10 15 21
		10 13 16 21 30 45
	" };

	#[test_case::test_case(&[0, 3, 6, 9, 12, 15] => 18; "constant differences")]
	#[test_case::test_case(&[1, 3, 6, 10, 15, 21] => 28; "second differences")]
	#[test_case::test_case(&[10, 13, 16, 21, 30, 45] => 68; "third differences")]
	fn extrapolated(values: &[i64]) -> i64 {
		super::extrapolated(values.to_vec())
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_histories_from_str(INPUT)), 114);
		assert_eq!(super::part1(), 114);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_histories_from_str(INPUT)), 2);
		assert_eq!(super::part2(), 2);
	}
}
