// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Card {
	winning: Vec<u8>,
	have: Vec<u8>,
}

impl Card {
	fn num_matches(&self) -> usize {
		self.have.iter().filter(|&n| self.winning.contains(n)).count()
	}
}


fn input_cards_from_str(s: &str) -> impl Iterator<Item = Card> + '_ {
	parsing::cards_from_str(s).map(|r| r.unwrap())
}

fn input_cards() -> impl Iterator<Item = Card> {
	input_cards_from_str(include_str!("day04.txt"))
}


fn part1_impl(input_cards: impl Iterator<Item = Card>) -> u64 {
	input_cards
		.map(|card| match card.num_matches() {
			0 => 0,
			num_matches => 1 << (num_matches - 1),
		})
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_cards())
}


fn part2_impl(input_cards: impl Iterator<Item = Card>) -> u64 {
	let num_matches = input_cards.map(|card| card.num_matches()).collect::<Vec<_>>();
	let mut num_copies = vec![1; num_matches.len()];
	for (i, &num_matches) in num_matches.iter().enumerate() {
		let len = num_copies.len();
		let (of_card, won) = num_copies[i..(i + num_matches + 1).min(len)]
			.split_first_mut().unwrap();
		for of_won_card in won { *of_won_card += *of_card }
	}
	num_copies.into_iter().sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_cards())
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, itertools::Either};
	use super::Card;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CardError {
		Format,
		Id(ParseIntError),
		Number { number: usize, source: ParseIntError },
	}

	fn numbers_from_str(s: &str, number_offset: usize) -> Result<Vec<u8>, CardError> {
		s.split_ascii_whitespace()
			.enumerate()
			.map(|(n, number)| number.parse()
				.map_err(|e| CardError::Number { number: number_offset + n + 1, source: e }))
			.collect()
	}

	impl FromStr for Card {
		type Err = CardError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.strip_prefix("Card").ok_or(CardError::Format)?;
			let (id, numbers) = s.split_once(':').ok_or(CardError::Format)?;
			id.trim_start().parse::<u64>().map_err(CardError::Id)?;
			let (winning, have) = numbers.split_once('|').ok_or(CardError::Format)?;
			let winning = numbers_from_str(winning, 0)?;
			let have = numbers_from_str(have, winning.len())?;
			Ok(Card { winning, have })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CardsError {
		Empty,
		Card { line: usize, source: CardError },
	}

	pub(super) fn cards_from_str(s: &str)
	-> impl Iterator<Item = Result<Card, CardsError>> + '_ {
		use std::iter::once;
		if s.is_empty() { return Either::Left(once(Err(CardsError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| CardsError::Card { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
		Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
		Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
		Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
		Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
		Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
	" };

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_cards_from_str(INPUT)), 13);
		assert_eq!(super::part1(), 13);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_cards_from_str(INPUT)), 30);
		assert_eq!(super::part2(), 30);
	}
}
