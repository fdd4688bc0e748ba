// viewport.rs - Canvas geometry: pixel <-> cell mapping for drawing and input

/// Maps a `width` x `height` canvas onto a `rows` x `cols` board.
/// All positions are relative to the canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    rows: usize,
    cols: usize,
}

impl Viewport {
    pub fn new(width: f32, height: f32, rows: usize, cols: usize) -> Self {
        Self {
            width,
            height,
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width and height of one cell.
    pub fn cell_size(&self) -> (f32, f32) {
        (self.width / self.cols as f32, self.height / self.rows as f32)
    }

    /// Top-left corner of cell `(x, y)`.
    pub fn cell_origin(&self, x: usize, y: usize) -> (f32, f32) {
        let (w, h) = self.cell_size();
        (x as f32 * w, y as f32 * h)
    }

    /// Cell under the pixel `(px, py)`, or `None` if the pixel is off the grid.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
            return None;
        }
        let (w, h) = self.cell_size();
        let x = (px / w).floor() as usize;
        let y = (py / h).floor() as usize;
        (x < self.cols && y < self.rows).then_some((x, y))
    }

    /// Interior grid-overlay lines: `(vertical x positions, horizontal y positions)`.
    pub fn grid_lines(&self) -> (Vec<f32>, Vec<f32>) {
        let (w, h) = self.cell_size();
        let vertical = (1..self.cols).map(|x| x as f32 * w).collect();
        let horizontal = (1..self.rows).map(|y| y as f32 * h).collect();
        (vertical, horizontal)
    }
}
