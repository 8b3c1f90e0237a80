//! The 16 basis elements of the algebra and their authored multiplication table.
//!
//! `TABLE[i][j]` is the product of `BASIS[i]` (row) and `BASIS[j]` (column).
//! The entries are data, not derived at runtime; [`validate`] checks the
//! invariants the rest of the crate relies on.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::{ParseError, TableError};

/// Number of basis elements (rows and columns of the table).
pub const DIM: usize = 16;

/// Prefix used by legends to mark a basis element (`α23`, `α0123`).
pub const LEGEND_PREFIX: char = 'α';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BasisElement {
    #[cfg_attr(feature = "serde", serde(rename = "p"))]
    P,
    #[cfg_attr(feature = "serde", serde(rename = "23"))]
    E23,
    #[cfg_attr(feature = "serde", serde(rename = "31"))]
    E31,
    #[cfg_attr(feature = "serde", serde(rename = "12"))]
    E12,
    #[cfg_attr(feature = "serde", serde(rename = "0"))]
    E0,
    #[cfg_attr(feature = "serde", serde(rename = "023"))]
    E023,
    #[cfg_attr(feature = "serde", serde(rename = "031"))]
    E031,
    #[cfg_attr(feature = "serde", serde(rename = "012"))]
    E012,
    #[cfg_attr(feature = "serde", serde(rename = "123"))]
    E123,
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    E1,
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    E2,
    #[cfg_attr(feature = "serde", serde(rename = "3"))]
    E3,
    #[cfg_attr(feature = "serde", serde(rename = "0123"))]
    E0123,
    #[cfg_attr(feature = "serde", serde(rename = "01"))]
    E01,
    #[cfg_attr(feature = "serde", serde(rename = "02"))]
    E02,
    #[cfg_attr(feature = "serde", serde(rename = "03"))]
    E03,
}

use BasisElement::*;

/// Table order. Row `i` / column `j` of [`TABLE`] is `BASIS[i]` / `BASIS[j]`.
pub const BASIS: [BasisElement; DIM] = [
    P, E23, E31, E12, E0, E023, E031, E012, E123, E1, E2, E3, E0123, E01, E02, E03,
];

impl BasisElement {
    /// Position in [`BASIS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        BASIS.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            P => "p",
            E23 => "23",
            E31 => "31",
            E12 => "12",
            E0 => "0",
            E023 => "023",
            E031 => "031",
            E012 => "012",
            E123 => "123",
            E1 => "1",
            E2 => "2",
            E3 => "3",
            E0123 => "0123",
            E01 => "01",
            E02 => "02",
            E03 => "03",
        }
    }

    /// Number of indices in the label; `p` is grade 0.
    pub fn grade(self) -> usize {
        match self {
            P => 0,
            other => other.label().len(),
        }
    }

    pub fn all() -> &'static [BasisElement] {
        &BASIS
    }
}

impl fmt::Display for BasisElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BasisElement {
    type Err = ParseError;

    /// Accepts the bare label (`"023"`) or the legend form (`"α023"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix(LEGEND_PREFIX).unwrap_or(trimmed);
        BASIS
            .iter()
            .copied()
            .find(|e| e.label() == bare)
            .ok_or_else(|| ParseError::Element(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "+ve"))]
    Positive,
    #[cfg_attr(feature = "serde", serde(rename = "-ve"))]
    Negative,
}

impl Sign {
    pub fn label(self) -> &'static str {
        match self {
            Sign::Positive => "+ve",
            Sign::Negative => "-ve",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }

    pub fn all() -> &'static [Sign] {
        &[Sign::Positive, Sign::Negative]
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sign {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "+ve" | "positive" | "pos" => Ok(Sign::Positive),
            "-" | "-ve" | "negative" | "neg" => Ok(Sign::Negative),
            _ => Err(ParseError::Sign(s.to_string())),
        }
    }
}

/// One table entry: the resulting basis element and its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub element: BasisElement,
    pub sign: Sign,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.symbol(), self.element)
    }
}

pub type MultiplicationTable = [[Product; DIM]; DIM];

const fn pos(element: BasisElement) -> Product {
    Product {
        element,
        sign: Sign::Positive,
    }
}

const fn neg(element: BasisElement) -> Product {
    Product {
        element,
        sign: Sign::Negative,
    }
}

#[rustfmt::skip]
pub const TABLE: MultiplicationTable = [
    // p
    [
        pos(P), pos(E23), pos(E31), pos(E12),
        pos(E0), pos(E023), pos(E031), pos(E012),
        pos(E123), pos(E1), pos(E2), pos(E3),
        pos(E0123), pos(E01), pos(E02), pos(E03),
    ],
    // 23
    [
        pos(E23), neg(P), pos(E12), neg(E31),
        pos(E023), neg(E0), pos(E012), neg(E031),
        neg(E1), pos(E123), pos(E3), neg(E2),
        neg(E01), pos(E0123), pos(E03), neg(E02),
    ],
    // 31
    [
        pos(E31), neg(E12), neg(P), pos(E23),
        pos(E031), neg(E012), neg(E0), pos(E023),
        neg(E2), neg(E3), pos(E123), pos(E1),
        neg(E02), neg(E03), pos(E0123), pos(E01),
    ],
    // 12
    [
        pos(E12), pos(E31), neg(E23), neg(P),
        pos(E012), pos(E031), neg(E023), neg(E0),
        neg(E3), pos(E2), neg(E1), pos(E123),
        neg(E03), pos(E02), neg(E01), pos(E0123),
    ],
    // 0
    [
        pos(E0), pos(E023), pos(E031), pos(E012),
        pos(P), pos(E23), pos(E31), pos(E12),
        pos(E0123), pos(E01), pos(E02), pos(E03),
        pos(E123), pos(E1), pos(E2), pos(E3),
    ],
    // 023
    [
        pos(E023), neg(E0), pos(E012), neg(E031),
        pos(E23), neg(P), pos(E12), neg(E31),
        neg(E01), pos(E0123), pos(E03), neg(E02),
        neg(E1), pos(E123), pos(E3), neg(E2),
    ],
    // 031
    [
        pos(E031), neg(E012), neg(E0), pos(E023),
        pos(E31), neg(E12), neg(P), pos(E23),
        neg(E02), neg(E03), pos(E0123), pos(E01),
        neg(E2), neg(E3), pos(E123), pos(E1),
    ],
    // 012
    [
        pos(E012), pos(E031), neg(E023), neg(E0),
        pos(E12), pos(E31), neg(E23), neg(P),
        neg(E03), pos(E02), neg(E01), pos(E0123),
        neg(E3), pos(E2), neg(E1), pos(E123),
    ],
    // 123
    [
        pos(E123), neg(E1), neg(E2), neg(E3),
        neg(E0123), pos(E01), pos(E02), pos(E03),
        pos(P), neg(E23), neg(E31), neg(E12),
        neg(E0), pos(E023), pos(E031), pos(E012),
    ],
    // 1
    [
        pos(E1), pos(E123), pos(E3), neg(E2),
        neg(E01), neg(E0123), neg(E03), pos(E02),
        neg(E23), neg(P), pos(E12), neg(E31),
        pos(E023), pos(E0), neg(E012), pos(E031),
    ],
    // 2
    [
        pos(E2), neg(E3), pos(E123), pos(E1),
        neg(E02), pos(E03), neg(E0123), neg(E01),
        neg(E31), neg(E12), neg(P), pos(E23),
        pos(E031), pos(E012), pos(E0), neg(E023),
    ],
    // 3
    [
        pos(E3), pos(E2), neg(E1), pos(E123),
        neg(E03), neg(E02), pos(E01), neg(E0123),
        neg(E12), pos(E31), neg(E23), neg(P),
        pos(E012), neg(E031), pos(E023), pos(E0),
    ],
    // 0123
    [
        pos(E0123), neg(E01), neg(E02), neg(E03),
        neg(E123), pos(E1), pos(E2), pos(E3),
        pos(E0), neg(E023), neg(E031), neg(E012),
        neg(P), pos(E23), pos(E31), pos(E12),
    ],
    // 01
    [
        pos(E01), pos(E0123), pos(E03), neg(E02),
        neg(E1), neg(E123), neg(E3), pos(E2),
        neg(E023), neg(E0), pos(E012), neg(E031),
        pos(E23), pos(P), neg(E12), pos(E31),
    ],
    // 02
    [
        pos(E02), neg(E03), pos(E0123), pos(E01),
        neg(E2), pos(E3), neg(E123), neg(E1),
        neg(E031), neg(E012), neg(E0), pos(E023),
        pos(E31), pos(E12), pos(P), neg(E23),
    ],
    // 03
    [
        pos(E03), pos(E02), neg(E01), pos(E0123),
        neg(E3), neg(E2), pos(E1), neg(E123),
        neg(E012), pos(E031), neg(E023), neg(E0),
        pos(E12), neg(E31), pos(E23), pos(P),
    ],
];

/// Product of two basis elements, looked up in [`TABLE`].
pub fn product(row: BasisElement, col: BasisElement) -> Product {
    TABLE[row.index()][col.index()]
}

/// Check the invariants consumers of a table rely on:
/// `p` is a two-sided identity with positive sign, every row and column
/// contains each basis element exactly once, and swapping the factors never
/// changes the result element.
pub fn validate(table: &MultiplicationTable) -> Result<(), TableError> {
    for (i, &expected) in BASIS.iter().enumerate() {
        let found = table[0][i];
        if found != pos(expected) {
            return Err(TableError::IdentityRow {
                col: i,
                found,
                expected,
            });
        }
        let found = table[i][0];
        if found != pos(expected) {
            return Err(TableError::IdentityColumn {
                row: i,
                found,
                expected,
            });
        }
    }

    for row in 0..DIM {
        let mut seen = [false; DIM];
        for col in 0..DIM {
            let element = table[row][col].element;
            if core::mem::replace(&mut seen[element.index()], true) {
                return Err(TableError::RowRepeats { row, col, element });
            }
        }
    }

    for col in 0..DIM {
        let mut seen = [false; DIM];
        for row in 0..DIM {
            let element = table[row][col].element;
            if core::mem::replace(&mut seen[element.index()], true) {
                return Err(TableError::ColumnRepeats { row, col, element });
            }
        }
    }

    // Only signs may differ between `a*b` and `b*a`.
    for row in 0..DIM {
        for col in row + 1..DIM {
            let (found, mirrored) = (table[row][col].element, table[col][row].element);
            if found != mirrored {
                return Err(TableError::Asymmetric {
                    row,
                    col,
                    found,
                    mirrored,
                });
            }
        }
    }

    Ok(())
}

/// The compiled-in table, after [`validate`]. Call once at startup.
pub fn validated_table() -> Result<&'static MultiplicationTable, TableError> {
    validate(&TABLE)?;
    Ok(&TABLE)
}
