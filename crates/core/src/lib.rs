// Tests always link std so they can use its collections and macros.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Cayley table of a 4-dimensional geometric algebra, rendered as a colored
//! 16×16 grid whose color encoding toggles between result element and result
//! sign.
//!
//! The crate is surface-agnostic: anything that can draw a filled rectangle
//! implements [`render::DrawingSurface`]. [`svg::SvgSurface`] is bundled for
//! headless use; the browser canvas surface lives in `cayley_web`.

extern crate alloc;

pub mod algebra;
pub mod error;
pub mod grid;
pub mod palette;
pub mod render;
pub mod svg;
pub mod theme;
pub mod toggle;

pub use algebra::{BasisElement, MultiplicationTable, Product, Sign, BASIS, DIM, TABLE};
pub use error::{ConfigError, ParseError, TableError};
pub use grid::{build_cells, Cell, Geometry, GridConfig, Rect};
pub use palette::{color_by_element, color_by_sign, Color};
pub use render::{color_for, DrawingSurface, EncodingMode, Renderer};
pub use theme::{PreferenceStore, Theme, ThemeState};
pub use toggle::{ClickRelay, ClickSource, EncodingToggle};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
