use macroquad::math::{vec2, Vec2};

use crate::error::GridError;

/// Fixed shape of a grid: cell counts per axis and the world size of one cell.
///
/// Everything that maps between grid indices and world space lives here, so
/// a cell factory can use it before the grid itself exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    width: i32,
    height: i32,
    cell_size: f32,
}

impl GridLayout {
    /// Validate and create a layout. Zero-sized axes are allowed.
    pub fn new(width: i32, height: i32, cell_size: f32) -> Result<Self, GridError> {
        if width < 0 || height < 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        Ok(GridLayout {
            width,
            height,
            cell_size,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// World position of the lower corner of cell (x, y).
    ///
    /// Not bounds-checked: grid lines are drawn to `x = width` and `y = height`.
    pub fn position(&self, x: i32, y: i32) -> Vec2 {
        vec2(x as f32, y as f32) * self.cell_size
    }

    /// World position of the middle of cell (x, y)
    pub fn cell_center(&self, x: i32, y: i32) -> Vec2 {
        self.position(x, y) + Vec2::splat(self.cell_size) * 0.5
    }

    /// Grid coordinates containing a world position.
    ///
    /// Floors toward negative infinity, so (-0.5, 0.0) lands in cell (-1, 0).
    /// Quotients within a few ULPs of an integer snap to it, so
    /// `xy(position(x, y)) == (x, y)` for any cell size. Non-finite input
    /// saturates; use [`GridLayout::checked_xy`] to reject it.
    pub fn xy(&self, world: Vec2) -> (i32, i32) {
        (
            cell_coord(world.x / self.cell_size),
            cell_coord(world.y / self.cell_size),
        )
    }

    /// [`GridLayout::xy`] that fails on NaN or infinite coordinates.
    pub fn checked_xy(&self, world: Vec2) -> Result<(i32, i32), GridError> {
        if !world.is_finite() {
            return Err(GridError::NonFinitePosition {
                x: world.x,
                y: world.y,
            });
        }
        Ok(self.xy(world))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Storage index of cell (x, y), x-major.
    pub fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((x as usize) * (self.height as usize) + y as usize)
    }

    /// Inverse of [`GridLayout::index`]. Only valid for `index < cell_count()`.
    pub(crate) fn coords(&self, index: usize) -> (i32, i32) {
        let height = self.height as usize;
        ((index / height) as i32, (index % height) as i32)
    }
}

/// Floor, with values a few ULPs short of an integer rounded up to it.
fn cell_coord(q: f32) -> i32 {
    let nearest = q.round();
    if (q - nearest).abs() <= SNAP_ULPS * f32::EPSILON * q.abs().max(1.0) {
        nearest as i32
    } else {
        q.floor() as i32
    }
}

const SNAP_ULPS: f32 = 4.0;
