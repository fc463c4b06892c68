//! Compass algebra over the eight neighbours of a grid cell
//!
//! Compass points are ordered clockwise starting at `Top = 0`. Rotation and
//! angular distance are only defined on compass points; the aggregate
//! directions (`Center`, `Vertical`, ...) exist as classification results and
//! axis selectors and are kept in a separate type so they cannot be rotated.

use std::fmt;

use crate::io::error::{Result, TileError};

/// One of the eight compass points around a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compass {
    /// Row above, same column
    Top = 0,
    /// Row above, column to the right
    TopRight = 1,
    /// Same row, column to the right
    Right = 2,
    /// Row below, column to the right
    BottomRight = 3,
    /// Row below, same column
    Bottom = 4,
    /// Row below, column to the left
    BottomLeft = 5,
    /// Same row, column to the left
    Left = 6,
    /// Row above, column to the left
    TopLeft = 7,
}

impl Compass {
    /// All compass points in clockwise order from `Top`
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    /// Position on the clockwise ring, in `0..8`
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Compass point at a ring position, wrapping modulo 8
    pub const fn from_index(index: u8) -> Self {
        match index % 8 {
            0 => Self::Top,
            1 => Self::TopRight,
            2 => Self::Right,
            3 => Self::BottomRight,
            4 => Self::Bottom,
            5 => Self::BottomLeft,
            6 => Self::Left,
            _ => Self::TopLeft,
        }
    }

    /// Move `steps` positions clockwise (negative steps turn counterclockwise)
    pub const fn rotate(self, steps: i32) -> Self {
        Self::from_index((self as i32 + steps).rem_euclid(8) as u8)
    }

    /// The next compass point clockwise
    pub const fn clockwise(self) -> Self {
        self.rotate(1)
    }

    /// The next compass point counterclockwise
    pub const fn counterclockwise(self) -> Self {
        self.rotate(-1)
    }

    /// The compass point half a turn away
    pub const fn opposite(self) -> Self {
        self.rotate(4)
    }

    /// Signed shortest rotation from `self` to `to`, clockwise positive
    ///
    /// The result lies in `-4..=4`; a half turn keeps the sign of the raw
    /// difference so that `a.angular_distance(b) == -b.angular_distance(a)`.
    pub const fn angular_distance(self, to: Self) -> i32 {
        let steps = to as i32 - self as i32;
        if steps > 4 {
            steps - 8
        } else if steps < -4 {
            steps + 8
        } else {
            steps
        }
    }

    /// Whether this is one of the four corner directions
    pub const fn is_diagonal(self) -> bool {
        self as u8 % 2 == 1
    }

    /// Whether this is one of the four side directions
    pub const fn is_orthogonal(self) -> bool {
        !self.is_diagonal()
    }

    /// Grid displacement as `[row, col]`, rows growing downwards
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Top => [-1, 0],
            Self::TopRight => [-1, 1],
            Self::Right => [0, 1],
            Self::BottomRight => [1, 1],
            Self::Bottom => [1, 0],
            Self::BottomLeft => [1, -1],
            Self::Left => [0, -1],
            Self::TopLeft => [-1, -1],
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::TopRight => "top-right",
            Self::Right => "right",
            Self::BottomRight => "bottom-right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-left",
            Self::Left => "left",
            Self::TopLeft => "top-left",
        };
        f.write_str(name)
    }
}

/// One of the four orthogonal neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Neighbour above
    Top,
    /// Neighbour to the right
    Right,
    /// Neighbour below
    Bottom,
    /// Neighbour to the left
    Left,
}

impl Side {
    /// Sides in clockwise order from `Top`
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The matching compass point
    pub const fn compass(self) -> Compass {
        match self {
            Self::Top => Compass::Top,
            Self::Right => Compass::Right,
            Self::Bottom => Compass::Bottom,
            Self::Left => Compass::Left,
        }
    }

    /// Two-bit code used by texture indices: Top 0, Right 1, Bottom 2, Left 3
    pub const fn code(self) -> u8 {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Inverse of [`Side::code`], reading only the low two bits
    pub const fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }
}

impl TryFrom<Compass> for Side {
    type Error = TileError;

    fn try_from(direction: Compass) -> Result<Self> {
        match direction {
            Compass::Top => Ok(Self::Top),
            Compass::Right => Ok(Self::Right),
            Compass::Bottom => Ok(Self::Bottom),
            Compass::Left => Ok(Self::Left),
            other => Err(TileError::InvalidDirectionOperand {
                direction: other.into(),
                operation: "side conversion",
            }),
        }
    }
}

/// One of the four diagonal neighbours; each owns a quadrant of a tile texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Upper right quadrant
    TopRight,
    /// Lower right quadrant
    BottomRight,
    /// Lower left quadrant
    BottomLeft,
    /// Upper left quadrant
    TopLeft,
}

impl Corner {
    /// Corners in clockwise order from `TopRight`
    pub const ALL: [Self; 4] = [
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::TopLeft,
    ];

    /// The matching compass point
    pub const fn compass(self) -> Compass {
        match self {
            Self::TopRight => Compass::TopRight,
            Self::BottomRight => Compass::BottomRight,
            Self::BottomLeft => Compass::BottomLeft,
            Self::TopLeft => Compass::TopLeft,
        }
    }

    /// Side one step counterclockwise of this corner
    pub const fn counterclockwise_side(self) -> Side {
        match self {
            Self::TopRight => Side::Top,
            Self::BottomRight => Side::Right,
            Self::BottomLeft => Side::Bottom,
            Self::TopLeft => Side::Left,
        }
    }

    /// Side one step clockwise of this corner
    pub const fn clockwise_side(self) -> Side {
        match self {
            Self::TopRight => Side::Right,
            Self::BottomRight => Side::Bottom,
            Self::BottomLeft => Side::Left,
            Self::TopLeft => Side::Top,
        }
    }

    /// Two-bit code used by texture indices: TopRight 0 through TopLeft 3
    pub const fn code(self) -> u8 {
        match self {
            Self::TopRight => 0,
            Self::BottomRight => 1,
            Self::BottomLeft => 2,
            Self::TopLeft => 3,
        }
    }

    /// Inverse of [`Corner::code`], reading only the low two bits
    pub const fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0 => Self::TopRight,
            1 => Self::BottomRight,
            2 => Self::BottomLeft,
            _ => Self::TopLeft,
        }
    }
}

impl TryFrom<Compass> for Corner {
    type Error = TileError;

    fn try_from(direction: Compass) -> Result<Self> {
        match direction {
            Compass::TopRight => Ok(Self::TopRight),
            Compass::BottomRight => Ok(Self::BottomRight),
            Compass::BottomLeft => Ok(Self::BottomLeft),
            Compass::TopLeft => Ok(Self::TopLeft),
            other => Err(TileError::InvalidDirectionOperand {
                direction: other.into(),
                operation: "corner conversion",
            }),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.compass().fmt(f)
    }
}

/// Named groups of directions that are not themselves compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    /// The cell itself
    Center,
    /// Along the vertical axis
    Vertical,
    /// Along the horizontal axis
    Horizontal,
    /// The four sides
    Orthogonal,
    /// The four corners
    Diagonal,
}

/// The two screen axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Top to bottom
    Vertical,
    /// Left to right
    Horizontal,
}

impl Axis {
    /// The aggregate naming this axis
    pub const fn aggregate(self) -> Aggregate {
        match self {
            Self::Vertical => Aggregate::Vertical,
            Self::Horizontal => Aggregate::Horizontal,
        }
    }
}

/// Either a compass point or an aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A single neighbour
    Compass(Compass),
    /// A group of neighbours or the cell itself
    Aggregate(Aggregate),
}

impl Direction {
    /// Shorthand for `Direction::Aggregate(Aggregate::Center)`
    pub const CENTER: Self = Self::Aggregate(Aggregate::Center);

    /// Project onto one axis
    ///
    /// On the vertical axis the result is `Top`, `Bottom`, or the `Vertical`
    /// aggregate for directions with no vertical component (`Left`, `Right`,
    /// `Center`, and `Vertical` itself). The horizontal axis mirrors this with
    /// `Left`, `Right` and `Horizontal`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirectionOperand` for the other axis aggregate and for
    /// the `Orthogonal` and `Diagonal` sets.
    pub fn project(self, axis: Axis) -> Result<Self> {
        let neutral = Self::Aggregate(axis.aggregate());
        match (self, axis) {
            (Self::Compass(point), Axis::Vertical) => Ok(match point {
                Compass::TopLeft | Compass::Top | Compass::TopRight => Compass::Top.into(),
                Compass::BottomLeft | Compass::Bottom | Compass::BottomRight => {
                    Compass::Bottom.into()
                }
                Compass::Left | Compass::Right => neutral,
            }),
            (Self::Compass(point), Axis::Horizontal) => Ok(match point {
                Compass::TopLeft | Compass::Left | Compass::BottomLeft => Compass::Left.into(),
                Compass::TopRight | Compass::Right | Compass::BottomRight => {
                    Compass::Right.into()
                }
                Compass::Top | Compass::Bottom => neutral,
            }),
            (Self::Aggregate(Aggregate::Center), _) => Ok(neutral),
            (Self::Aggregate(aggregate), _) if aggregate == axis.aggregate() => Ok(neutral),
            (Self::Aggregate(_), _) => Err(TileError::InvalidDirectionOperand {
                direction: self,
                operation: "axis projection",
            }),
        }
    }

    /// Grid displacement as `[row, col]`, assembled from both axis projections
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirectionOperand` for aggregates other than `Center`.
    pub fn offset(self) -> Result<[i32; 2]> {
        let row = match self.project(Axis::Vertical)? {
            Self::Compass(Compass::Top) => -1,
            Self::Compass(Compass::Bottom) => 1,
            _ => 0,
        };
        let col = match self.project(Axis::Horizontal)? {
            Self::Compass(Compass::Left) => -1,
            Self::Compass(Compass::Right) => 1,
            _ => 0,
        };
        Ok([row, col])
    }

    /// Direction in which `to` lies as seen from `from`, both as `[row, col]`
    ///
    /// Only the signs of the differences matter, so distant positions map to
    /// the nearest of the eight compass points. Equal positions give `Center`.
    pub fn between(from: [i32; 2], to: [i32; 2]) -> Self {
        let delta = [to[0].cmp(&from[0]) as i32, to[1].cmp(&from[1]) as i32];
        Compass::ALL
            .into_iter()
            .find(|point| point.offset() == delta)
            .map_or(Self::CENTER, Self::Compass)
    }

    /// The compass point, if this is one
    pub const fn compass(self) -> Option<Compass> {
        match self {
            Self::Compass(point) => Some(point),
            Self::Aggregate(_) => None,
        }
    }
}

impl From<Compass> for Direction {
    fn from(point: Compass) -> Self {
        Self::Compass(point)
    }
}

impl From<Aggregate> for Direction {
    fn from(aggregate: Aggregate) -> Self {
        Self::Aggregate(aggregate)
    }
}

impl TryFrom<Direction> for Compass {
    type Error = TileError;

    fn try_from(direction: Direction) -> Result<Self> {
        direction
            .compass()
            .ok_or(TileError::InvalidDirectionOperand {
                direction,
                operation: "compass conversion",
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compass(point) => point.fmt(f),
            Self::Aggregate(aggregate) => write!(f, "{aggregate:?}"),
        }
    }
}
