// Copyright (c) 2023 Bastiaan Marinus van de Weerd


fn input_calibration_values_from_str(s: &str) -> impl Iterator<Item = u64> + '_ {
	parsing::calibration_values_from_str(s).map(|r| r.unwrap())
}

fn input_calibration_values() -> impl Iterator<Item = u64> {
	input_calibration_values_from_str(include_str!("day01.txt"))
}


fn part1_impl(input_calibration_values: impl Iterator<Item = u64>) -> u64 {
	input_calibration_values.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_calibration_values())
}


mod parsing {
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CalibrationValuesError {
		Empty,
	}

	/// First & last digit of the line combined into a two-digit value;
	/// a single digit serves as both, and a digit-less line is worth zero.
	fn calibration_value_from_line(line: &str) -> u64 {
		let mut digits = line.bytes()
			.filter_map(|b| b.is_ascii_digit().then(|| (b - b'0') as u64));
		match digits.next() {
			Some(first) => first * 10 + digits.last().unwrap_or(first),
			None => 0,
		}
	}

	pub(super) fn calibration_values_from_str(s: &str)
	-> impl Iterator<Item = Result<u64, CalibrationValuesError>> + '_ {
		use {std::iter::once, itertools::Either};
		if s.is_empty() { return Either::Left(once(Err(CalibrationValuesError::Empty))) }
		Either::Right(s.lines().map(|line| Ok(calibration_value_from_line(line))))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1abc2
		pqr3stu8vwx
		a1b2c3d4e5f
		treb7uchet
	" };
	assert_eq!(part1_impl(input_calibration_values_from_str(INPUT)), 142);
	assert_eq!(part1(), 142);
}
