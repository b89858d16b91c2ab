//! Pointer-to-square translation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Square;

/// Maps a pointer position to the board square under it.
pub trait SquareLocator {
    /// `None` when the position is off the board.
    fn locate(&self, x: f32, y: f32) -> Option<Square>;
}

impl<F> SquareLocator for F
where
    F: Fn(f32, f32) -> Option<Square>,
{
    fn locate(&self, x: f32, y: f32) -> Option<Square> {
        self(x, y)
    }
}

/// Which side is drawn at the bottom of the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Row 8 at the top, the a-file on the left
    #[default]
    WhiteBottom,
    /// Row 1 at the top, the h-file on the left
    BlackBottom,
}

/// A square grid of fixed-size cells; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelGrid {
    pub origin_x: f32,
    pub origin_y: f32,
    pub square_size: f32,
    pub orientation: Orientation,
}

impl PixelGrid {
    #[must_use]
    pub fn new(square_size: f32, orientation: Orientation) -> Self {
        PixelGrid {
            origin_x: 0.0,
            origin_y: 0.0,
            square_size,
            orientation,
        }
    }

    /// (column, row) cell indices from the top-left corner.
    fn cell(&self, square: Square) -> (f32, f32) {
        let column = f32::from(square.column());
        let row = f32::from(square.row());
        match self.orientation {
            Orientation::WhiteBottom => (column - 1.0, 8.0 - row),
            Orientation::BlackBottom => (8.0 - column, row - 1.0),
        }
    }

    /// Top-left pixel of `square`.
    #[must_use]
    pub fn square_origin(&self, square: Square) -> (f32, f32) {
        let (cx, cy) = self.cell(square);
        (
            self.origin_x + cx * self.square_size,
            self.origin_y + cy * self.square_size,
        )
    }

    /// Center pixel of `square`.
    #[must_use]
    pub fn square_center(&self, square: Square) -> (f32, f32) {
        let (x, y) = self.square_origin(square);
        let half = self.square_size / 2.0;
        (x + half, y + half)
    }
}

impl SquareLocator for PixelGrid {
    fn locate(&self, x: f32, y: f32) -> Option<Square> {
        if self.square_size.is_nan() || self.square_size <= 0.0 {
            return None;
        }
        let cx = (x - self.origin_x) / self.square_size;
        let cy = (y - self.origin_y) / self.square_size;
        if !(0.0..8.0).contains(&cx) || !(0.0..8.0).contains(&cy) {
            return None;
        }
        let (cx, cy) = (cx.floor() as i32, cy.floor() as i32);
        match self.orientation {
            Orientation::WhiteBottom => Square::new(8 - cy, cx + 1),
            Orientation::BlackBottom => Square::new(cy + 1, 8 - cx),
        }
    }
}
