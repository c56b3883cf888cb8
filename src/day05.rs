// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Mapping {
	destination: u64,
	source: u64,
	len: u64,
}

impl Mapping {
	fn map(&self, number: u64) -> Option<u64> {
		(self.source..self.source + self.len).contains(&number)
			.then(|| self.destination + (number - self.source))
	}
}

#[cfg_attr(test, derive(Debug))]
struct Almanac {
	seeds: Vec<u64>,
	/// One set of mappings per section, chained in file order.
	mappings: Vec<Vec<Mapping>>,
}

impl Almanac {
	fn location(&self, seed: u64) -> u64 {
		self.mappings.iter().fold(seed, |number, mappings| mappings.iter()
			.find_map(|mapping| mapping.map(number))
			.unwrap_or(number))
	}
}


fn input_almanac_from_str(s: &str) -> Almanac {
	s.parse().unwrap()
}

fn input_almanac() -> Almanac {
	input_almanac_from_str(include_str!("day05.txt"))
}


fn part1_impl(input_almanac: Almanac) -> u64 {
	input_almanac.seeds.iter()
		.map(|&seed| input_almanac.location(seed))
		.min()
		.unwrap()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_almanac())
}


fn part2_impl(input_almanac: Almanac) -> u64 {
	use {
		itertools::Itertools as _,
		rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _},
	};

	let seed_ranges = input_almanac.seeds.iter()
		.tuples()
		.map(|(&start, &len)| start..start + len)
		.collect::<Vec<_>>();
	seed_ranges.into_par_iter()
		.flat_map(|seed_range| seed_range)
		.map(|seed| input_almanac.location(seed))
		.min()
		.unwrap()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_almanac())
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, itertools::Itertools as _};
	use super::{Mapping, Almanac};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MappingError {
		Format { found: usize },
		Destination(ParseIntError),
		Source(ParseIntError),
		Len(ParseIntError),
	}

	impl FromStr for Mapping {
		type Err = MappingError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use MappingError::*;
			let mut numbers = s.split_ascii_whitespace();
			let (destination, source, len) = numbers.next_tuple()
				.ok_or_else(|| Format { found: s.split_ascii_whitespace().count() })?;
			let rest = numbers.count();
			if rest > 0 { return Err(Format { found: 3 + rest }) }
			Ok(Mapping {
				destination: destination.parse().map_err(Destination)?,
				source: source.parse().map_err(Source)?,
				len: len.parse().map_err(Len)?,
			})
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum AlmanacError {
		Empty,
		SeedsFormat,
		Seed { seed: usize, source: ParseIntError },
		MapHeader { map: usize },
		Mapping { map: usize, mapping: usize, source: MappingError },
	}

	fn is_map_header(line: &str) -> bool {
		line.strip_suffix(" map:")
			.map_or(false, |categories| matches!(
				categories.splitn(3, '-').collect_tuple(),
				Some((from, "to", to)) if !from.is_empty() && !to.is_empty()))
	}

	impl FromStr for Almanac {
		type Err = AlmanacError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut sections = s.split("\n\n");

			let seeds = sections.next().filter(|s| !s.is_empty())
				.ok_or(AlmanacError::Empty)?
				.strip_prefix("seeds:").ok_or(AlmanacError::SeedsFormat)?
				.split_ascii_whitespace()
				.enumerate()
				.map(|(n, seed)| seed.parse()
					.map_err(|e| AlmanacError::Seed { seed: n + 1, source: e }))
				.collect::<Result<_, _>>()?;

			let mappings = sections
				.enumerate()
				.map(|(m, section)| {
					let mut lines = section.lines();
					if !lines.next().map_or(false, is_map_header) {
						return Err(AlmanacError::MapHeader { map: m + 1 })
					}
					lines
						.enumerate()
						.map(|(l, line)| line.parse()
							.map_err(|e| AlmanacError::Mapping {
								map: m + 1, mapping: l + 1, source: e }))
						.collect()
				})
				.collect::<Result<_, _>>()?;

			Ok(Almanac { seeds, mappings })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		seeds: 79 14 55 13

		seed-to-soil map:
		50 98 2
		52 50 48

		soil-to-fertilizer map:
		0 15 37
		37 52 2
		39 0 15

		fertilizer-to-water map:
		49 53 8
		0 11 42
		42 0 7
		57 7 4

		water-to-light map:
		88 18 7
		18 25 70

		light-to-temperature map:
		45 77 23
		81 45 19
		68 64 13

		temperature-to-humidity map:
		0 69 1
		1 0 69

		humidity-to-location map:
		60 56 37
		56 93 4
	" };

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_almanac_from_str(INPUT)), 35);
		assert_eq!(super::part1(), 35);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_almanac_from_str(INPUT)), 46);
		assert_eq!(super::part2(), 46);
	}
}
