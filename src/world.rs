use crate::Pos;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// Read and write surface of a board.
///
/// Every position is wrapped onto the board before use, so no access can fall out of bounds and
/// opposite edges behave as neighbors.
pub trait World: Clone + Send + 'static {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, pos: Pos) -> Cell;
    fn set(&mut self, pos: Pos, cell: Cell);
    /// live cells, row by row.
    fn actives(&self) -> Vec<Pos>;
    /// hash of the cell contents, equal boards share a fingerprint.
    fn fingerprint(&self) -> u64;
    /// replaces every cell with the ones of `other`, which has the same dimensions.
    fn copy_from(&mut self, other: &Self);
}

pub use board::Board;
mod board;
