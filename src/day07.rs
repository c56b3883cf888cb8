// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
enum Card {
	Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten,
	Jack, Queen, King, Ace,
}

impl Card {
	/// With `JOKERS`, jacks are jokers and rank below everything else.
	fn strength<const JOKERS: bool>(self) -> u8 {
		match self {
			Card::Jack if JOKERS => 0,
			card => card as u8 + 1,
		}
	}
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(test, derive(Debug))]
enum HandType {
	HighCard,
	OnePair,
	TwoPair,
	ThreeOfAKind,
	FullHouse,
	FourOfAKind,
	FiveOfAKind,
}

struct Hand([Card; 5]);

impl Hand {
	fn hand_type<const JOKERS: bool>(&self) -> HandType {
		let mut counts = [0_u8; 13];
		let mut num_jokers = 0;
		for &card in &self.0 {
			if JOKERS && card == Card::Jack { num_jokers += 1 }
			else { counts[card as usize] += 1 }
		}

		let mut counts = counts.into_iter().filter(|&c| c > 0).collect::<Vec<_>>();
		counts.sort_unstable_by(|left, right| right.cmp(left));

		// Jokers always join the largest group.
		let largest = counts.first().copied().unwrap_or(0) + num_jokers;
		let second = counts.get(1).copied().unwrap_or(0);
		match (largest, second) {
			(5, _) => HandType::FiveOfAKind,
			(4, _) => HandType::FourOfAKind,
			(3, 2) => HandType::FullHouse,
			(3, _) => HandType::ThreeOfAKind,
			(2, 2) => HandType::TwoPair,
			(2, _) => HandType::OnePair,
			_ => HandType::HighCard,
		}
	}

	fn strengths<const JOKERS: bool>(&self) -> [u8; 5] {
		self.0.map(|card| card.strength::<JOKERS>())
	}
}

struct Bid {
	hand: Hand,
	amount: u64,
}


fn input_bids_from_str(s: &str) -> impl Iterator<Item = Bid> + '_ {
	parsing::bids_from_str(s).map(|r| r.unwrap())
}

fn input_bids() -> impl Iterator<Item = Bid> {
	input_bids_from_str(include_str!("day07.txt"))
}


fn part1and2_impl<const JOKERS: bool>(input_bids: impl Iterator<Item = Bid>) -> u64 {
	use itertools::Itertools as _;
	input_bids
		.sorted_by_cached_key(|bid|
			(bid.hand.hand_type::<JOKERS>(), bid.hand.strengths::<JOKERS>()))
		.enumerate()
		.map(|(i, bid)| (i as u64 + 1) * bid.amount)
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1and2_impl::<false>(input_bids())
}

pub(crate) fn part2() -> u64 {
	part1and2_impl::<true>(input_bids())
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, itertools::Either};
	use super::{Card, Hand, Bid};

	impl TryFrom<char> for Card {
		type Error = ();
		fn try_from(value: char) -> Result<Self, Self::Error> {
			use Card::*;
			match value {
				'2' => Ok(Two),
				'3' => Ok(Three),
				'4' => Ok(Four),
				'5' => Ok(Five),
				'6' => Ok(Six),
				'7' => Ok(Seven),
				'8' => Ok(Eight),
				'9' => Ok(Nine),
				'T' => Ok(Ten),
				'J' => Ok(Jack),
				'Q' => Ok(Queen),
				'K' => Ok(King),
				'A' => Ok(Ace),
				_ => Err(()),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum HandError {
		Len(usize),
		Card { column: usize, found: char },
	}

	impl FromStr for Hand {
		type Err = HandError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut cards = [Card::Two; 5];
			let mut len = 0;
			for (c, chr) in s.chars().enumerate() {
				if c >= 5 { return Err(HandError::Len(s.chars().count())) }
				cards[c] = chr.try_into()
					.map_err(|_| HandError::Card { column: c + 1, found: chr })?;
				len = c + 1;
			}
			if len < 5 { return Err(HandError::Len(len)) }
			Ok(Hand(cards))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum BidError {
		NoSpace,
		Hand(HandError),
		Amount(ParseIntError),
	}

	impl FromStr for Bid {
		type Err = BidError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (hand, amount) = s.split_once(' ').ok_or(BidError::NoSpace)?;
			let hand = hand.parse().map_err(BidError::Hand)?;
			let amount = amount.parse().map_err(BidError::Amount)?;
			Ok(Bid { hand, amount })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum BidsError {
		Empty,
		Bid { line: usize, source: BidError },
	}

	pub(super) fn bids_from_str(s: &str)
	-> impl Iterator<Item = Result<Bid, BidsError>> + '_ {
		use std::iter::once;
		if s.is_empty() { return Either::Left(once(Err(BidsError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| BidsError::Bid { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		32T3K 765
		T55J5 684
		KK677 28
		KTJJT 220
		QQQJA 483
	" };

	#[test]
	fn hand_types() {
		use HandType::*;
		for (hand, without_jokers, with_jokers) in [
			("32T3K", OnePair, OnePair),
			("KK677", TwoPair, TwoPair),
			("T55J5", ThreeOfAKind, FourOfAKind),
			("QQQJA", ThreeOfAKind, FourOfAKind),
			("KTJJT", TwoPair, FourOfAKind),
			("JJJJJ", FiveOfAKind, FiveOfAKind),
			("J2345", HighCard, OnePair),
		] {
			let hand = hand.parse::<Hand>().unwrap();
			assert_eq!(hand.hand_type::<false>(), without_jokers);
			assert_eq!(hand.hand_type::<true>(), with_jokers);
		}
	}

	#[test]
	fn part1() {
		assert_eq!(part1and2_impl::<false>(input_bids_from_str(INPUT)), 6440);
		assert_eq!(super::part1(), 6440);
	}

	#[test]
	fn part2() {
		assert_eq!(part1and2_impl::<true>(input_bids_from_str(INPUT)), 5905);
		assert_eq!(super::part2(), 5905);
	}
}
