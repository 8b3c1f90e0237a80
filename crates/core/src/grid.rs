//! Grid model: one cell per table entry, plus the fixed pixel geometry.

use alloc::vec::Vec;

use crate::algebra::{BasisElement, MultiplicationTable, Product, Sign, BASIS, DIM};
use crate::error::ConfigError;

/// A table entry placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub element: BasisElement,
    pub sign: Sign,
}

impl Cell {
    pub fn product(&self) -> Product {
        Product {
            element: self.element,
            sign: self.sign,
        }
    }

    /// The two factors, `row_factor * col_factor`.
    pub fn factors(&self) -> (BasisElement, BasisElement) {
        (BASIS[self.row], BASIS[self.col])
    }
}

/// Flatten the table into cells, row-major.
pub fn build_cells(table: &MultiplicationTable) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(DIM * DIM);
    for (row, entries) in table.iter().enumerate() {
        for (col, p) in entries.iter().enumerate() {
            cells.push(Cell {
                row,
                col,
                element: p.element,
                sign: p.sign,
            });
        }
    }
    cells
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 10.0,
            bottom: 10.0,
            left: 10.0,
        }
    }
}

/// Drawing surface size and margins. Missing fields fall back to defaults
/// when deserialized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GridConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            margins: Margins::default(),
        }
    }
}

impl GridConfig {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    fn check(&self) -> Result<(), ConfigError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("margins.top", self.margins.top),
            ("margins.right", self.margins.right),
            ("margins.bottom", self.margins.bottom),
            ("margins.left", self.margins.left),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        let (width, height) = (self.plot_width(), self.plot_height());
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::EmptyPlot { width, height });
        }
        Ok(())
    }
}

/// Linear map from a domain interval onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// An axis-aligned rectangle in plot-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pixel geometry of the grid. Built once; never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    config: GridConfig,
    x: LinearScale,
    y: LinearScale,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::build(GridConfig::default())
    }
}

impl Geometry {
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self::build(config))
    }

    fn build(config: GridConfig) -> Self {
        let n = DIM as f64;
        Self {
            config,
            x: LinearScale::new((0.0, n), (0.0, config.plot_width())),
            y: LinearScale::new((0.0, n), (0.0, config.plot_height())),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn x_position(&self, col: usize) -> f64 {
        self.x.apply(col as f64)
    }

    pub fn y_position(&self, row: usize) -> f64 {
        self.y.apply(row as f64)
    }

    pub fn cell_width(&self) -> f64 {
        self.config.plot_width() / DIM as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.config.plot_height() / DIM as f64
    }

    /// Translation of the plot area inside the surface.
    pub fn origin(&self) -> (f64, f64) {
        (self.config.margins.left, self.config.margins.top)
    }

    pub fn surface_size(&self) -> (f64, f64) {
        (self.config.width, self.config.height)
    }

    pub fn rect_for(&self, cell: &Cell) -> Rect {
        Rect {
            x: self.x_position(cell.col),
            y: self.y_position(cell.row),
            width: self.cell_width(),
            height: self.cell_height(),
        }
    }
}
