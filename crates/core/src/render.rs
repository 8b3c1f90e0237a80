//! Binds grid cells to rectangles on a drawing surface.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::ParseError;
use crate::grid::{Cell, Geometry, Rect};
use crate::palette::{color_by_element, color_by_sign, Color};

/// Which attribute of a cell decides its fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EncodingMode {
    #[default]
    ByElement,
    BySign,
}

impl EncodingMode {
    pub fn toggled(self) -> Self {
        match self {
            EncodingMode::ByElement => EncodingMode::BySign,
            EncodingMode::BySign => EncodingMode::ByElement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EncodingMode::ByElement => "element",
            EncodingMode::BySign => "sign",
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EncodingMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "element" | "by_element" | "byelement" => Ok(EncodingMode::ByElement),
            "sign" | "by_sign" | "bysign" => Ok(EncodingMode::BySign),
            _ => Err(ParseError::Mode(s.to_string())),
        }
    }
}

/// The fill a cell gets under `mode`. Every color decision goes through here.
pub fn color_for(cell: &Cell, mode: EncodingMode) -> Color {
    match mode {
        EncodingMode::ByElement => color_by_element(cell.element),
        EncodingMode::BySign => color_by_sign(cell.sign),
    }
}

/// Something that can hold filled rectangles and change their fill later.
///
/// Rectangles are in plot-area coordinates; the surface applies
/// [`Geometry::origin`] itself.
pub trait DrawingSurface {
    type Handle: Copy;

    fn create_rect(&mut self, rect: Rect, fill: Color) -> Self::Handle;

    fn set_fill(&mut self, handle: Self::Handle, fill: Color);
}

pub struct Renderer<S: DrawingSurface> {
    surface: S,
    geometry: Geometry,
    cells: Vec<(Cell, S::Handle)>,
}

impl<S: DrawingSurface> Renderer<S> {
    /// Paint every cell once and keep the handles for later recolors.
    pub fn render_initial(
        mut surface: S,
        geometry: Geometry,
        cells: Vec<Cell>,
        mode: EncodingMode,
    ) -> Self {
        let held = cells
            .into_iter()
            .map(|cell| {
                let handle = surface.create_rect(geometry.rect_for(&cell), color_for(&cell, mode));
                (cell, handle)
            })
            .collect::<Vec<_>>();
        tracing::debug!(cells = held.len(), %mode, "initial render");
        Self {
            surface,
            geometry,
            cells: held,
        }
    }

    /// Re-fill every existing rectangle. Geometry is left alone.
    pub fn recolor_all(&mut self, mode: EncodingMode) {
        for (cell, handle) in &self.cells {
            self.surface.set_fill(*handle, color_for(cell, mode));
        }
        tracing::debug!(cells = self.cells.len(), %mode, "recolored");
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().map(|(c, _)| c)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells
            .iter()
            .map(|(c, _)| c)
            .find(|c| c.row == row && c.col == col)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::algebra::{BasisElement, Sign, TABLE};
    use crate::grid::build_cells;

    /// Records every draw call.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) rects: Vec<(Rect, Color)>,
        pub(crate) fills: usize,
    }

    impl DrawingSurface for RecordingSurface {
        type Handle = usize;

        fn create_rect(&mut self, rect: Rect, fill: Color) -> usize {
            self.rects.push((rect, fill));
            self.rects.len() - 1
        }

        fn set_fill(&mut self, handle: usize, fill: Color) {
            self.rects[handle].1 = fill;
            self.fills += 1;
        }
    }

    impl RecordingSurface {
        pub(crate) fn fill_at(&self, row: usize, col: usize) -> Color {
            self.rects[row * crate::DIM + col].1
        }
    }

    fn render(mode: EncodingMode) -> Renderer<RecordingSurface> {
        Renderer::render_initial(
            RecordingSurface::default(),
            Geometry::default(),
            build_cells(&TABLE),
            mode,
        )
    }

    #[test]
    fn color_for_dispatches_on_mode() {
        let cell = build_cells(&TABLE)[8 * 16 + 4];
        assert_eq!(
            color_for(&cell, EncodingMode::ByElement),
            color_by_element(BasisElement::E0123)
        );
        assert_eq!(
            color_for(&cell, EncodingMode::BySign),
            color_by_sign(Sign::Negative)
        );
    }

    #[test]
    fn initial_render_places_every_cell() {
        let r = render(EncodingMode::ByElement);
        let s = r.surface();
        assert_eq!(s.rects.len(), 256);
        assert_eq!(r.cells().count(), 256);
        assert_eq!(s.fills, 0);

        let g = Geometry::default();
        let (rect, fill) = s.rects[16];
        assert_eq!(rect, g.rect_for(r.cell(1, 0).expect("cell exists")));
        assert_eq!(fill, color_by_element(BasisElement::E23));
    }

    #[test]
    fn recolor_keeps_geometry() {
        let mut r = render(EncodingMode::ByElement);
        let before: Vec<Rect> = r.surface().rects.iter().map(|(rect, _)| *rect).collect();

        r.recolor_all(EncodingMode::BySign);

        let s = r.surface();
        assert_eq!(s.fills, 256);
        assert_eq!(s.rects.len(), 256);
        for (i, (rect, _)) in s.rects.iter().enumerate() {
            assert_eq!(*rect, before[i]);
        }
        assert_eq!(s.fill_at(1, 0), color_by_sign(Sign::Positive));
        assert_eq!(s.fill_at(8, 4), color_by_sign(Sign::Negative));
    }

    #[test]
    fn mode_parsing_and_toggle() {
        assert_eq!("sign".parse::<EncodingMode>(), Ok(EncodingMode::BySign));
        assert_eq!("Element".parse::<EncodingMode>(), Ok(EncodingMode::ByElement));
        assert!("colour".parse::<EncodingMode>().is_err());
        assert_eq!(EncodingMode::default(), EncodingMode::ByElement);
        assert_eq!(EncodingMode::ByElement.toggled().toggled(), EncodingMode::ByElement);
    }
}
