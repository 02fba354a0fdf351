use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::position::Position;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid is empty")]
    Empty,
    #[error("Row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Rectangular, row-major grid addressed by [`Position`].
///
/// Reads outside the grid return `None` through [`Grid::get`]; indexing
/// outside the grid panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Builds a grid from text, one row per line, converting every byte.
    pub fn parse_with<E>(
        input: &str,
        mut convert: impl FnMut(u8) -> Result<T, E>,
    ) -> Result<Self, E>
    where
        E: From<GridError>,
    {
        let mut data = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0;
        for (row, line) in input.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                break;
            }
            match width {
                None => width = Some(line.len()),
                Some(expected) if expected != line.len() => {
                    return Err(GridError::Ragged {
                        row,
                        found: line.len(),
                        expected,
                    }
                    .into());
                }
                Some(_) => {}
            }
            for byte in line.bytes() {
                data.push(convert(byte)?);
            }
            height += 1;
        }
        let width = width.ok_or(GridError::Empty)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.offset(pos).is_some()
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        if let Ok(row) = usize::try_from(pos.row)
            && let Ok(col) = usize::try_from(pos.col)
            && row < self.height
            && col < self.width
        {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    fn index_to_pos(&self, index: usize) -> Position {
        // Grid dimensions come from text that fits in memory, so they fit in i64.
        Position::new((index / self.width) as i64, (index % self.width) as i64)
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.offset(pos).map(|ix| &self.data[ix])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.offset(pos).map(|ix| &mut self.data[ix])
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.data.len()).map(|ix| self.index_to_pos(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(ix, value)| (self.index_to_pos(ix), value))
    }

    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Position> {
        self.data
            .iter()
            .position(|value| predicate(value))
            .map(|ix| self.index_to_pos(ix))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            data: self.data.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl Grid<u8> {
    /// Builds a byte grid, keeping every character as-is.
    pub fn parse_bytes(input: &str) -> Result<Self, GridError> {
        Self::parse_with(input, Ok)
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, index: Position) -> &Self::Output {
        match self.offset(index) {
            Some(ix) => &self.data[ix],
            None => panic!("Position {index:?} is outside the grid"),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        match self.offset(index) {
            Some(ix) => &mut self.data[ix],
            None => panic!("Tried to modify {index:?} outside the grid"),
        }
    }
}

impl Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.width) {
            for &byte in row {
                write!(f, "{}", byte as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
        ab.\n\
        .cd\
    ";

    #[test]
    fn test_parse_bytes() {
        let grid = Grid::parse_bytes(EXAMPLE).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[Position::new(1, 2)], b'd');
        assert_eq!(grid.find(|&b| b == b'c'), Some(Position::new(1, 1)));
        assert_eq!(grid.to_string(), "ab.\n.cd\n");
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::parse_bytes(EXAMPLE).unwrap();
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert!(grid.contains(Position::new(1, 0)));
        assert_eq!(grid.positions().count(), 6);
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn test_index_out_of_bounds() {
        let grid = Grid::new(2, 2, 0_u8);
        let _ = grid[Position::new(2, 2)];
    }

    #[test]
    fn test_ragged() {
        let result = Grid::parse_bytes("abc\nde\n");
        assert_eq!(
            result,
            Err(GridError::Ragged {
                row: 1,
                found: 2,
                expected: 3
            })
        );
        assert_eq!(Grid::parse_bytes(""), Err(GridError::Empty));
    }
}
