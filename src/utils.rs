use std::ops::Add;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// maps the position onto a `width` x `height` torus.
    ///
    /// euclidean remainder keeps negative coordinates on the board, `-1` lands on the last column.
    pub fn wrap(self, width: i32, height: i32) -> Self {
        pos!(self.x.rem_euclid(width), self.y.rem_euclid(height))
    }

    /// the 8 positions surrounding this one, not wrapped.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| pos!(dx, dy)))
            .filter(|offset| *offset != pos!(0, 0))
            .map(move |offset| self + offset)
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}
