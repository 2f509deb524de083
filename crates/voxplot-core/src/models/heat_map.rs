use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatMapCell {
    pub x: u32,
    pub z: u32,
    /// Nominally `[0, 1]`; not validated here.
    pub intensity: f64,
}

impl HeatMapCell {
    pub fn new(x: u32, z: u32, intensity: f64) -> Self {
        Self { x, z, intensity }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatMapData {
    pub cells: Vec<HeatMapCell>,
}

impl HeatMapData {
    pub fn new(cells: Vec<HeatMapCell>) -> Self {
        Self { cells }
    }

    pub fn push_cell(&mut self, cell: HeatMapCell) {
        self.cells.push(cell);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn grid(&self) -> GridDimensions {
        GridDimensions::for_count(self.cells.len())
    }
}

/// Near-square grid that holds `count` cells in sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
}

impl GridDimensions {
    /// `width = ceil(sqrt(count))`, `height = ceil(count / width)`.
    pub fn for_count(count: usize) -> Self {
        if count == 0 {
            return Self {
                width: 0,
                height: 0,
            };
        }
        let mut width = (count as f64).sqrt().ceil() as usize;
        // Guard against float rounding on large counts.
        while width * width < count {
            width += 1;
        }
        while width > 1 && (width - 1) * (width - 1) >= count {
            width -= 1;
        }
        let height = count.div_ceil(width);
        Self { width, height }
    }

    pub fn capacity(&self) -> usize {
        self.width * self.height
    }

    /// Column-major slot for the `index`-th cell: `(column, row)`.
    pub fn slot(&self, index: usize) -> Option<(usize, usize)> {
        if self.height == 0 || index >= self.capacity() {
            return None;
        }
        Some((index / self.height, index % self.height))
    }
}
