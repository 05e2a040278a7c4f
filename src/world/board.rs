use std::hash::{Hash, Hasher};

use metrohash::MetroHash64;

use crate::{error::ConfigError, pos, Cell, Pos, World};

/// Fixed-size toroidal board, cells stored row-major in one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// creates a board with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        let len = width
            .checked_mul(height)
            .ok_or(ConfigError::DimensionTooLarge {
                axis: "area",
                value: width.saturating_mul(height),
            })?;
        let cells = vec![Cell::Dead; len];
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn index(&self, pos: Pos) -> usize {
        let Pos { x, y } = pos.wrap(self.width as i32, self.height as i32);
        y as usize * self.width + x as usize
    }
}

fn check_dimension(axis: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroDimension { axis });
    }
    if i32::try_from(value).is_err() {
        return Err(ConfigError::DimensionTooLarge { axis, value });
    }
    Ok(())
}

impl World for Board {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    fn actives(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(index, _)| pos!((index % self.width) as i32, (index / self.width) as i32))
            .collect()
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = MetroHash64::default();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.cells.copy_from_slice(&other.cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dead() {
        let board = Board::new(8, 4).unwrap();
        assert!(board.actives().is_empty());
        assert_eq!(board.get(pos!(3, 2)), Cell::Dead);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 32),
            Err(ConfigError::ZeroDimension { axis: "width" })
        );
        assert_eq!(
            Board::new(64, 0),
            Err(ConfigError::ZeroDimension { axis: "height" })
        );
    }

    #[test]
    fn rejects_oversized_dimensions() {
        let too_wide = i32::MAX as usize + 1;
        assert!(matches!(
            Board::new(too_wide, 1),
            Err(ConfigError::DimensionTooLarge { axis: "width", .. })
        ));
    }

    #[test]
    fn access_wraps_around_edges() {
        let mut board = Board::new(64, 32).unwrap();
        board.set(pos!(-1, -1), Cell::Alive);
        assert_eq!(board.get(pos!(63, 31)), Cell::Alive);
        assert_eq!(board.actives(), vec![pos!(63, 31)]);

        board.set(pos!(64 * 3 + 5, -32 * 2 + 7), Cell::Alive);
        assert_eq!(board.get(pos!(5, 7)), Cell::Alive);
    }

    #[test]
    fn access_is_periodic() {
        let mut board = Board::new(5, 3).unwrap();
        board.set(pos!(1, 2), Cell::Alive);
        board.set(pos!(4, 0), Cell::Alive);
        for x in -6..6 {
            for y in -6..6 {
                let expected = board.get(pos!(x, y).wrap(5, 3));
                for k in -2..=2 {
                    for m in -2..=2 {
                        assert_eq!(board.get(pos!(x + k * 5, y + m * 3)), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn actives_are_row_major() {
        let mut board = Board::new(4, 4).unwrap();
        board.set(pos!(3, 0), Cell::Alive);
        board.set(pos!(0, 2), Cell::Alive);
        board.set(pos!(1, 0), Cell::Alive);
        assert_eq!(board.actives(), vec![pos!(1, 0), pos!(3, 0), pos!(0, 2)]);
    }

    #[test]
    fn fingerprint_tracks_contents() {
        let mut board = Board::new(6, 6).unwrap();
        let empty = board.fingerprint();
        board.set(pos!(2, 2), Cell::Alive);
        assert_ne!(board.fingerprint(), empty);

        let mut other = Board::new(6, 6).unwrap();
        other.copy_from(&board);
        assert_eq!(other.fingerprint(), board.fingerprint());
        assert_eq!(other, board);
    }
}
