//! Uniform acceleration grid for minimum-distance rejection.
//!
//! [`Grid`] buckets accepted samples by [`GridCell`] so that the Poisson disk
//! sampler can test a candidate against nearby samples only. Each cell holds at
//! most one sample; inserting into an occupied cell replaces its content.
//!
//! Grids of up to [`MAX_DENSE_CELLS`] cells are a flat array. Larger grids keep
//! only their occupied cells in a map, with the same lookup behaviour.
use std::collections::HashMap;

use crate::point::Point;

/// Number of cells scanned on each side of the query cell.
///
/// Tied to `cell_size = min_distance / sqrt(2)`: five cells span more than
/// `3 * min_distance`, which covers every sample that can conflict.
pub const NEIGHBORHOOD_RADIUS: i32 = 5;

/// Largest cell count stored as a dense array.
pub const MAX_DENSE_CELLS: usize = 1 << 22;

// Cell coordinates are i32; axes are capped so every cell stays addressable.
const MAX_AXIS_CELLS: usize = i32::MAX as usize;

/// Integer cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    /// Cell containing `p`, truncating toward zero.
    #[inline]
    pub fn from_point(p: Point, cell_size: f32) -> Self {
        Self {
            x: (p.x / cell_size) as i32,
            y: (p.y / cell_size) as i32,
        }
    }
}

#[derive(Clone, Debug)]
enum Cells {
    Dense(Vec<Option<Point>>),
    Sparse(HashMap<GridCell, Point>),
}

/// `width x height` grid of optional samples.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Cells,
}

impl Grid {
    /// Creates an empty grid, switching to sparse storage above [`MAX_DENSE_CELLS`].
    ///
    /// Each axis is capped at `i32::MAX` cells.
    pub fn new(width: usize, height: usize, cell_size: f32) -> Self {
        let width = width.min(MAX_AXIS_CELLS);
        let height = height.min(MAX_AXIS_CELLS);
        match width.checked_mul(height) {
            Some(len) if len <= MAX_DENSE_CELLS => Self {
                width,
                height,
                cell_size,
                cells: Cells::Dense(vec![None; len]),
            },
            _ => Self::sparse(width, height, cell_size),
        }
    }

    /// Creates an empty grid that only stores occupied cells.
    pub fn sparse(width: usize, height: usize, cell_size: f32) -> Self {
        Self {
            width: width.min(MAX_AXIS_CELLS),
            height: height.min(MAX_AXIS_CELLS),
            cell_size,
            cells: Cells::Sparse(HashMap::new()),
        }
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self.cells, Cells::Sparse(_))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        match &self.cells {
            Cells::Dense(cells) => cells.iter().filter(|c| c.is_some()).count(),
            Cells::Sparse(cells) => cells.len(),
        }
    }

    #[inline]
    fn contains_cell(&self, cell: GridCell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Sample stored in `cell`, if any.
    pub fn get(&self, cell: GridCell) -> Option<Point> {
        if !self.contains_cell(cell) {
            return None;
        }
        match &self.cells {
            Cells::Dense(cells) => cells[cell.y as usize * self.width + cell.x as usize],
            Cells::Sparse(cells) => cells.get(&cell).copied(),
        }
    }

    /// Stores `p` in its cell, replacing any previous occupant.
    ///
    /// A coordinate of exactly 1.0 maps one past the last cell when
    /// `1 / cell_size` is integral; such points are clamped into the last row
    /// or column. Nothing is stored in a zero-sized grid.
    pub fn insert(&mut self, p: Point) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let cell = GridCell::from_point(p, self.cell_size);
        let cell = GridCell {
            x: cell.x.clamp(0, self.width as i32 - 1),
            y: cell.y.clamp(0, self.height as i32 - 1),
        };
        match &mut self.cells {
            Cells::Dense(cells) => {
                cells[cell.y as usize * self.width + cell.x as usize] = Some(p);
            }
            Cells::Sparse(cells) => {
                cells.insert(cell, p);
            }
        }
    }

    /// True iff a stored sample within the scan window lies closer than `min_distance` to `p`.
    ///
    /// Cells outside the grid are skipped, so queries near the border only see
    /// the part of the window that overlaps the grid.
    pub fn is_in_neighborhood(&self, p: Point, min_distance: f32, cell_size: f32) -> bool {
        let center = GridCell::from_point(p, cell_size);
        let xs = center.x.saturating_sub(NEIGHBORHOOD_RADIUS)
            ..=center.x.saturating_add(NEIGHBORHOOD_RADIUS);

        for x in xs {
            let ys = center.y.saturating_sub(NEIGHBORHOOD_RADIUS)
                ..=center.y.saturating_add(NEIGHBORHOOD_RADIUS);
            for y in ys {
                if let Some(existing) = self.get(GridCell { x, y }) {
                    if existing.distance(p) < min_distance {
                        return true;
                    }
                }
            }
        }

        false
    }
}
