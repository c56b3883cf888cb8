// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Inst {
	Left,
	Right,
}

type Label = [u8; 3];

struct Map {
	insts: Vec<Inst>,
	nodes: std::collections::HashMap<Label, [Label; 2]>,
}

impl Map {
	fn num_steps(&self, from: Label, is_end: impl Fn(&Label) -> bool) -> usize {
		let mut node = from;
		for (step, inst) in self.insts.iter().cycle().enumerate() {
			node = self.nodes[&node][match inst { Inst::Left => 0, Inst::Right => 1 }];
			if is_end(&node) { return step + 1 }
		}
		unreachable!()
	}
}

fn gcd(mut a: usize, mut b: usize) -> usize {
	while b != 0 { (a, b) = (b, a % b) }
	a
}


fn input_map_from_str(s: &str) -> Map {
	s.parse().unwrap()
}

fn input_map() -> Map {
	input_map_from_str(include_str!("day08.txt"))
}


fn part1_impl(input_map: Map) -> usize {
	input_map.num_steps(*b"AAA", |label| label == b"ZZZ")
}

pub(crate) fn part1() -> usize {
	part1_impl(input_map())
}


/// Every ghost’s path settles into a cycle through its end node, so the
/// first simultaneous arrival is the LCM of the individual step counts.
fn part2_impl(input_map: Map) -> usize {
	input_map.nodes.keys()
		.filter(|label| label[2] == b'A')
		.map(|&label| input_map.num_steps(label, |label| label[2] == b'Z'))
		.fold(1, |lcm, steps| lcm / gcd(lcm, steps) * steps)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_map())
}


mod parsing {
	use std::str::FromStr;
	use super::{Inst, Label, Map};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MapError {
		Empty,
		Inst { column: usize, found: char },
		NoBlank,
		Node { line: usize, source: NodeError },
		UnknownNode { line: usize, found: String },
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum NodeError {
		Format,
		Label { label: usize, found: String },
	}

	fn label_from_str(s: &str, label: usize) -> Result<Label, NodeError> {
		let err = || NodeError::Label { label, found: s.to_owned() };
		if !s.bytes().all(|b| b.is_ascii_alphanumeric()) { return Err(err()) }
		s.as_bytes().try_into().map_err(|_| err())
	}

	fn node_from_str(s: &str) -> Result<(Label, [Label; 2]), NodeError> {
		let (label, targets) = s.split_once(" = ").ok_or(NodeError::Format)?;
		let label = label_from_str(label, 1)?;
		let (left, right) = targets
			.strip_prefix('(')
			.and_then(|t| t.strip_suffix(')'))
			.and_then(|t| t.split_once(", "))
			.ok_or(NodeError::Format)?;
		Ok((label, [label_from_str(left, 2)?, label_from_str(right, 3)?]))
	}

	impl FromStr for Map {
		type Err = MapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut lines = s.lines().enumerate();

			let insts = lines.next().filter(|(_, line)| !line.is_empty())
				.ok_or(MapError::Empty)?.1
				.chars()
				.enumerate()
				.map(|(c, chr)| match chr {
					'L' => Ok(Inst::Left),
					'R' => Ok(Inst::Right),
					found => Err(MapError::Inst { column: c + 1, found }),
				})
				.collect::<Result<_, _>>()?;

			if !matches!(lines.next(), Some((_, ""))) { return Err(MapError::NoBlank) }

			let lines_nodes = lines
				.map(|(l, line)| node_from_str(line)
					.map(|node| (l, node))
					.map_err(|e| MapError::Node { line: l + 1, source: e }))
				.collect::<Result<Vec<_>, _>>()?;

			let nodes = lines_nodes.iter()
				.map(|&(_, node)| node)
				.collect::<std::collections::HashMap<_, _>>();

			for &(l, (_, targets)) in &lines_nodes {
				for target in targets {
					if !nodes.contains_key(&target) {
						return Err(MapError::UnknownNode {
							line: l + 1,
							found: String::from_utf8_lossy(&target).into_owned(),
						})
					}
				}
			}

			Ok(Map { insts, nodes })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			RL

			AAA = (BBB, CCC)
			BBB = (DDD, EEE)
			CCC = (ZZZ, GGG)
			DDD = (DDD, DDD)
			EEE = (EEE, EEE)
			GGG = (GGG, GGG)
			ZZZ = (ZZZ, ZZZ)
		" },
		indoc::indoc! { "
			LLR

			AAA = (BBB, BBB)
			BBB = (AAA, ZZZ)
			ZZZ = (ZZZ, ZZZ)
		" },
		indoc::indoc! { "
			LR

			11A = (11B, XXX)
			11B = (XXX, 11Z)
			11Z = (11B, XXX)
			22A = (22B, XXX)
			22B = (22C, 22C)
			22C = (22Z, 22Z)
			22Z = (22B, 22B)
			XXX = (XXX, XXX)
		" },
	];

	#[test_case::test_case(0 => 2; "straight through")]
	#[test_case::test_case(1 => 6; "instructions repeat")]
	fn part1_impl(input: usize) -> usize {
		super::part1_impl(input_map_from_str(INPUTS[input]))
	}

	#[test]
	fn part1() {
		assert_eq!(super::part1(), 2);
	}

	#[test]
	fn part2_impl() {
		assert_eq!(super::part2_impl(input_map_from_str(INPUTS[2])), 6);
	}

	#[test]
	fn part2() {
		assert_eq!(super::part2(), 2);
	}
}
