// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
#[derive(Default)]
struct Cubes {
	red: u64,
	green: u64,
	blue: u64,
}

#[cfg_attr(test, derive(Debug))]
struct Game {
	id: u64,
	draws: Vec<Cubes>,
}

const BAG: Cubes = Cubes { red: 12, green: 13, blue: 14 };

impl Cubes {
	fn fits_in(&self, bag: &Cubes) -> bool {
		self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
	}
}


fn input_games_from_str(s: &str) -> impl Iterator<Item = Game> + '_ {
	parsing::games_from_str(s).map(|r| r.unwrap())
}

fn input_games() -> impl Iterator<Item = Game> {
	input_games_from_str(include_str!("day02.txt"))
}


fn part1_impl(input_games: impl Iterator<Item = Game>) -> u64 {
	input_games
		.filter(|game| game.draws.iter().all(|draw| draw.fits_in(&BAG)))
		.map(|game| game.id)
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_games())
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, itertools::Either};
	use super::{Cubes, Game};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CubesError {
		Format,
		Count(ParseIntError),
		Color { found: String },
		DuplicateColor { found: String },
	}

	impl FromStr for Cubes {
		type Err = CubesError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use CubesError::*;
			let mut cubes = Cubes::default();
			for part in s.split(", ") {
				let (count, color) = part.split_once(' ').ok_or(Format)?;
				let count = count.parse().map_err(Count)?;
				let count_for_color = match color {
					"red" => &mut cubes.red,
					"green" => &mut cubes.green,
					"blue" => &mut cubes.blue,
					found => return Err(Color { found: found.to_owned() }),
				};
				if *count_for_color > 0 {
					return Err(DuplicateColor { found: color.to_owned() })
				}
				*count_for_color = count;
			}
			Ok(cubes)
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GameError {
		Format,
		Id(ParseIntError),
		Draw { draw: usize, source: CubesError },
	}

	impl FromStr for Game {
		type Err = GameError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.strip_prefix("Game ").ok_or(GameError::Format)?;
			let (id, draws) = s.split_once(": ").ok_or(GameError::Format)?;
			let id = id.parse().map_err(GameError::Id)?;
			let draws = draws.split("; ")
				.enumerate()
				.map(|(d, draw)| draw.parse()
					.map_err(|e| GameError::Draw { draw: d + 1, source: e }))
				.collect::<Result<_, _>>()?;
			Ok(Game { id, draws })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GamesError {
		Empty,
		Game { line: usize, source: GameError },
	}

	pub(super) fn games_from_str(s: &str)
	-> impl Iterator<Item = Result<Game, GamesError>> + '_ {
		use std::iter::once;
		if s.is_empty() { return Either::Left(once(Err(GamesError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| GamesError::Game { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
		Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
		Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
		Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
		Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
	" };
	assert_eq!(part1_impl(input_games_from_str(INPUT)), 8);
	assert_eq!(part1(), 8);
}
