// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Race {
	time: u64,
	distance: u64,
}

impl Race {
	/// Holding the button for `t` ms makes the boat travel `t * (time - t)`
	/// mm, so the winning hold times lie strictly between the roots of
	/// `-t^2 + time*t - distance`. Counting whole numbers strictly between
	/// the roots also keeps integer roots out, which merely tie the record.
	fn num_ways_to_beat(&self) -> u64 {
		let (time, distance) = (self.time as f64, self.distance as f64);
		let delta = (time * time - 4.0 * distance).sqrt();
		let lower = (time - delta) / 2.0;
		let upper = (time + delta) / 2.0;
		(upper.ceil() - lower.floor()) as u64 - 1
	}
}


fn input_races_from_str(s: &str) -> Vec<Race> {
	parsing::races_from_str(s).unwrap()
}

fn input_races() -> Vec<Race> {
	input_races_from_str(include_str!("day06.txt"))
}


fn part1_impl(input_races: Vec<Race>) -> u64 {
	input_races.iter().map(Race::num_ways_to_beat).product()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_races())
}


fn kerned(values: impl Iterator<Item = u64>) -> u64 {
	values.fold(0, |acc, value| {
		let mut shift = 10;
		while shift <= value { shift *= 10 }
		acc * shift + value
	})
}

fn part2_impl(input_races: Vec<Race>) -> u64 {
	let race = Race {
		time: kerned(input_races.iter().map(|race| race.time)),
		distance: kerned(input_races.iter().map(|race| race.distance)),
	};
	race.num_ways_to_beat()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_races())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Race;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RacesError {
		MissingLine { line: usize },
		Format { line: usize },
		Time { race: usize, source: ParseIntError },
		Distance { race: usize, source: ParseIntError },
		Counts { times: usize, distances: usize },
	}

	pub(super) fn races_from_str(s: &str) -> Result<Vec<Race>, RacesError> {
		use RacesError::*;

		let mut lines = s.lines();
		let mut numbers_line = |l: usize, prefix, err: fn(usize, ParseIntError) -> RacesError|
			lines.next()
				.ok_or(MissingLine { line: l })?
				.strip_prefix(prefix)
				.ok_or(Format { line: l })?
				.split_ascii_whitespace()
				.enumerate()
				.map(|(n, number)| number.parse().map_err(|e| err(n + 1, e)))
				.collect::<Result<Vec<u64>, _>>();

		let times = numbers_line(1, "Time:", |race, source| Time { race, source })?;
		let distances = numbers_line(2, "Distance:", |race, source| Distance { race, source })?;

		if times.len() != distances.len() {
			return Err(Counts { times: times.len(), distances: distances.len() })
		}

		Ok(times.into_iter()
			.zip(distances)
			.map(|(time, distance)| Race { time, distance })
			.collect())
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Time:      7  15   30
		Distance:  9  40  200
	" };

	#[test_case::test_case(7, 9 => 4; "short race")]
	#[test_case::test_case(15, 40 => 8; "middle race")]
	#[test_case::test_case(30, 200 => 9; "long race with integer roots")]
	fn num_ways_to_beat(time: u64, distance: u64) -> u64 {
		Race { time, distance }.num_ways_to_beat()
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_races_from_str(INPUT)), 288);
		assert_eq!(super::part1(), 288);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_races_from_str(INPUT)), 71503);
		assert_eq!(super::part2(), 71503);
	}
}
