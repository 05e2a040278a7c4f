use std::{fs, path::Path};

use clap::ValueEnum;

use crate::{error::PatternError, pos, Cell, Pos, World};

/// Seed patterns, each a fixed set of offsets from an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    RPentomino,
    Square,
    Blinker,
    Glider,
}

impl Pattern {
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Pattern::RPentomino => &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
            Pattern::Square => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    pub fn place<W: World>(self, world: &mut W, anchor: Pos) {
        let cells = self.offsets().iter().map(|&(x, y)| pos!(x, y));
        place_cells(world, anchor, cells);
    }
}

/// sets every cell alive at `anchor + offset`, wrapping past the edges.
pub fn place_cells<W: World>(world: &mut W, anchor: Pos, offsets: impl IntoIterator<Item = Pos>) {
    let anchor = anchor.wrap(world.width() as i32, world.height() as i32);
    for offset in offsets {
        world.set(anchor + offset, Cell::Alive);
    }
}

/// reads a plain text pattern where `#` marks a live cell.
pub fn deserialize(str: &str) -> Vec<Pos> {
    let mut result = vec![];
    let mut pos = pos!(0, 0);
    for c in str.chars() {
        match c {
            '#' => {
                result.push(pos);
                pos.x += 1
            }
            '\n' => pos = pos!(0, pos.y + 1),
            '\r' => (),
            _ => pos.x += 1,
        }
    }
    result
}

pub fn load(path: &Path) -> Result<Vec<Pos>, PatternError> {
    let content = fs::read_to_string(path).map_err(|source| PatternError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cells = deserialize(&content);
    if cells.is_empty() {
        return Err(PatternError::Empty(path.to_path_buf()));
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn places_exact_offsets() {
        let mut board = Board::new(64, 32).unwrap();
        Pattern::RPentomino.place(&mut board, pos!(32, 16));
        assert_eq!(
            board.actives(),
            vec![pos!(33, 16), pos!(34, 16), pos!(32, 17), pos!(33, 17), pos!(33, 18)]
        );
    }

    #[test]
    fn placement_wraps_near_edges() {
        let mut board = Board::new(64, 32).unwrap();
        Pattern::Blinker.place(&mut board, pos!(63, 30));
        assert_eq!(board.actives(), vec![pos!(63, 0), pos!(63, 30), pos!(63, 31)]);
    }

    #[test]
    fn placement_at_extreme_anchors() {
        let mut board = Board::new(64, 32).unwrap();
        Pattern::Square.place(&mut board, pos!(i32::MAX, 16));
        assert_eq!(
            board.actives(),
            vec![pos!(0, 16), pos!(63, 16), pos!(0, 17), pos!(63, 17)]
        );

        let mut board = Board::new(64, 32).unwrap();
        Pattern::Blinker.place(&mut board, pos!(5, i32::MAX));
        assert_eq!(board.actives(), vec![pos!(5, 0), pos!(5, 1), pos!(5, 31)]);
    }

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(
            Pattern::from_str("r-pentomino", false),
            Ok(Pattern::RPentomino)
        );
        assert_eq!(Pattern::from_str("glider", false), Ok(Pattern::Glider));
        assert!(Pattern::from_str("toad", false).is_err());
    }

    #[test]
    fn deserializes_hashes() {
        let cells = deserialize(".#.\r\n..#\r\n###\n");
        assert_eq!(
            cells,
            vec![pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]
        );
        let glider: Vec<_> = Pattern::Glider
            .offsets()
            .iter()
            .map(|&(x, y)| pos!(x, y))
            .collect();
        assert_eq!(cells, glider);
    }

    #[test]
    fn missing_file_is_reported() {
        let error = load(Path::new("/nonexistent/pattern.txt")).unwrap_err();
        assert!(matches!(error, PatternError::Read { .. }));
    }

    #[test]
    fn loads_pattern_file() {
        let path = std::env::temp_dir().join(format!("torgol-pattern-{}.txt", std::process::id()));
        fs::write(&path, "##\n##\n").unwrap();
        let cells = load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(cells, vec![pos!(0, 0), pos!(1, 0), pos!(0, 1), pos!(1, 1)]);
    }

    #[test]
    fn empty_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("torgol-empty-{}.txt", std::process::id()));
        fs::write(&path, "...\n...\n").unwrap();
        let error = load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(error, PatternError::Empty(_)));
    }
}
