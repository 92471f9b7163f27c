//! The map-drawing collaborator boundary.

use renderer::CellRect;

/// Drawing surface the pipeline renders into.
///
/// The real widget lives outside this workspace; it only needs to replace
/// the full set of colored rectangles or clear them.
pub trait MapSurface {
    /// Replace all displayed rectangles with `rects`.
    fn replace_cells(&mut self, rects: Vec<CellRect>);

    /// Remove every displayed rectangle.
    fn clear(&mut self);
}

/// Surface that keeps the last committed rectangles in memory.
///
/// Backs the CLI summary output and the pipeline tests.
#[derive(Debug, Default)]
pub struct CollectSurface {
    cells: Vec<CellRect>,
}

impl CollectSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[CellRect] {
        &self.cells
    }
}

impl MapSurface for CollectSurface {
    fn replace_cells(&mut self, rects: Vec<CellRect>) {
        self.cells = rects;
    }

    fn clear(&mut self) {
        self.cells.clear();
    }
}
