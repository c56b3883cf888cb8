// Copyright (c) 2023 Bastiaan Marinus van de Weerd


struct Schematic {
	bytes: Vec<u8>,
	width: usize,
}

impl Schematic {
	fn byte_xy(&self, x: usize, y: usize) -> u8 {
		self.bytes[y * self.width + x]
	}

	fn height(&self) -> usize {
		self.bytes.len() / self.width
	}
}

fn is_symbol(b: u8) -> bool {
	b != b'.' && !b.is_ascii_digit()
}


fn input_schematic_from_str(s: &str) -> Schematic {
	s.parse().unwrap()
}

fn input_schematic() -> Schematic {
	input_schematic_from_str(include_str!("day03.txt"))
}


fn part1_impl(input_schematic: Schematic) -> u64 {
	use itertools::iproduct;

	let (width, height) = (input_schematic.width, input_schematic.height());
	let mut sum = 0;
	for y in 0..height {
		let mut x = 0;
		while x < width {
			if !input_schematic.byte_xy(x, y).is_ascii_digit() { x += 1; continue }

			let x_end = (x..width)
				.find(|&xx| !input_schematic.byte_xy(xx, y).is_ascii_digit())
				.unwrap_or(width);
			let number = (x..x_end).fold(0,
				|acc, xx| 10 * acc + (input_schematic.byte_xy(xx, y) - b'0') as u64);

			// Digit bytes are never symbols, so the ring may include
			// the digits’ own cells.
			let ring = iproduct!(
				y.saturating_sub(1)..(y + 2).min(height),
				x.saturating_sub(1)..(x_end + 1).min(width));
			if ring.into_iter().any(|(yy, xx)| is_symbol(input_schematic.byte_xy(xx, yy))) {
				sum += number
			}

			x = x_end;
		}
	}

	sum
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_schematic())
}


mod parsing {
	use std::str::FromStr;
	use super::Schematic;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SchematicError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for Schematic {
		type Err = SchematicError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { return Err(SchematicError::Empty) }

			let mut bytes = vec![];
			let mut width = None;

			for (l, line) in s.lines().enumerate() {
				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_graphic() {
						return Err(SchematicError::InvalidByte {
							line: l + 1, column: c + 1, found: b })
					}
					bytes.push(b);
				}

				match width {
					None if line.is_empty() => return Err(SchematicError::Empty),
					None => width = Some(line.len()),
					Some(len) => if line.len() != len {
						return Err(SchematicError::LineLen {
							line: l + 1, len, found: line.len() })
					}
				}
			}

			Ok(Schematic { bytes, width: width.unwrap() })
		}
	}
}


#[cfg(LOGGING)]
impl std::fmt::Display for Schematic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		for y in 0..self.height() {
			for x in 0..self.width {
				f.write_char(self.byte_xy(x, y) as char)?;
			}
			if y < self.height() - 1 { f.write_char('\n')? }
		}
		Ok(())
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		467..114..
		...*......
		..35..633.
		......#...
		617*......
		.....+.58.
		..592.....
		......755.
		...$.*....
		.664.598..
	" };
	assert_eq!(part1_impl(input_schematic_from_str(INPUT)), 4361);
	assert_eq!(part1(), 4361);
}
