use crate::life::GRID_SIZE;

/// Edge length of one cell in world units.
pub const CELL_SIZE: f32 = 20.0;
/// Width of the grid-line band, as a fraction of a cell.
pub const BORDER_THICKNESS: f32 = 0.05;
/// Multiplier applied per scroll notch.
pub const ZOOM_RATE: f32 = 1.2;
/// Zooming out past this aliases the cell borders away, so it is refused.
pub const MIN_ZOOM: f32 = 0.7;

/// A screen pixel resolved to a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHit {
    pub row: usize,
    pub col: usize,
    pub border: bool,
}

/// Pan/zoom view state plus the pixel -> world -> cell projection.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f32,
    pub pan_y: f32,
    pub zoom: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Inverse of the zoom-about-center projection: pixel coordinates in
    /// the fixed-resolution buffer to world coordinates.
    pub fn screen_to_world(&self, px: f32, py: f32, screen: (f32, f32)) -> (f32, f32) {
        let wx = self.pan_x + (px - screen.0 / 2.0 + 0.5) / self.zoom;
        let wy = self.pan_y + (py - screen.1 / 2.0 + 0.5) / self.zoom;
        (wx, wy)
    }

    /// Continuous grid coordinates; x maps to column, y to row. Cell
    /// (row, col) covers [col, col + 1) x [row, row + 1).
    pub fn grid_coords(wx: f32, wy: f32) -> (f32, f32) {
        let gx = wx / CELL_SIZE + GRID_SIZE as f32 / 2.0;
        let gy = wy / CELL_SIZE + GRID_SIZE as f32 / 2.0;
        (gx, gy)
    }

    /// Resolves a world point to a cell, or `None` outside the grid.
    /// `border` marks points within `BORDER_THICKNESS` of any cell edge.
    pub fn sample(&self, wx: f32, wy: f32) -> Option<CellHit> {
        let (gx, gy) = Self::grid_coords(wx, wy);
        if gx < 0.0 || gx >= GRID_SIZE as f32 || gy < 0.0 || gy >= GRID_SIZE as f32 {
            return None;
        }

        let col = gx as usize;
        let row = gy as usize;
        let fx = gx - col as f32;
        let fy = gy - row as f32;
        let border = fx < BORDER_THICKNESS
            || fx > 1.0 - BORDER_THICKNESS
            || fy < BORDER_THICKNESS
            || fy > 1.0 - BORDER_THICKNESS;

        Some(CellHit { row, col, border })
    }

    /// Scroll zoom anchored at the cursor: the pan correction keeps the
    /// world point under the cursor in place. A result below `MIN_ZOOM`
    /// leaves the camera untouched.
    pub fn zoom_at(&mut self, cursor: (f32, f32), screen: (f32, f32), delta: f32) {
        let target = if delta > 0.0 {
            self.zoom * ZOOM_RATE
        } else if delta < 0.0 {
            self.zoom / ZOOM_RATE
        } else {
            return;
        };

        if target < MIN_ZOOM {
            return;
        }

        self.pan_x += (cursor.0 - screen.0 / 2.0) * (1.0 / self.zoom - 1.0 / target);
        self.pan_y += (cursor.1 - screen.1 / 2.0) * (1.0 / self.zoom - 1.0 / target);
        self.zoom = target;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
