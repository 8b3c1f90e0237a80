use alloc::string::String;

use crate::algebra::{BasisElement, Product};

/// A defect in the authored multiplication table.
///
/// Coordinates are `(row, col)` indices into the basis order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("identity row: table[0][{col}] is {found}, expected +{expected}")]
    IdentityRow {
        col: usize,
        found: Product,
        expected: BasisElement,
    },
    #[error("identity column: table[{row}][0] is {found}, expected +{expected}")]
    IdentityColumn {
        row: usize,
        found: Product,
        expected: BasisElement,
    },
    #[error("row {row} is not closed: {element} repeats at column {col}")]
    RowRepeats {
        row: usize,
        col: usize,
        element: BasisElement,
    },
    #[error("column {col} is not closed: {element} repeats at row {row}")]
    ColumnRepeats {
        row: usize,
        col: usize,
        element: BasisElement,
    },
    #[error("table[{row}][{col}] is {found} but table[{col}][{row}] is {mirrored}")]
    Asymmetric {
        row: usize,
        col: usize,
        found: BasisElement,
        mirrored: BasisElement,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown basis element: {0:?}")]
    Element(String),
    #[error("unknown sign: {0:?} (expected +, -, +ve or -ve)")]
    Sign(String),
    #[error("unknown encoding mode: {0:?} (expected element or sign)")]
    Mode(String),
    #[error("unknown theme: {0:?} (expected dark or light)")]
    Theme(String),
    #[error("invalid color: {0:?} (expected #rrggbb)")]
    Color(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("plot area is empty: {width}x{height} after margins")]
    EmptyPlot { width: f64, height: f64 },
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },
}
