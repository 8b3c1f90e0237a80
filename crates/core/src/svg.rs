//! Headless drawing surface that serializes to a standalone SVG document.

use core::fmt::Write as _;

use alloc::string::String;
use alloc::vec::Vec;

use crate::grid::{Geometry, Rect};
use crate::palette::Color;
use crate::render::DrawingSurface;

#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    origin: (f64, f64),
    background: Option<Color>,
    rects: Vec<(Rect, Color)>,
}

impl SvgSurface {
    pub fn new(geometry: &Geometry) -> Self {
        let (width, height) = geometry.surface_size();
        Self {
            width,
            height,
            origin: geometry.origin(),
            background: None,
            rects: Vec::new(),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn rects(&self) -> &[(Rect, Color)] {
        &self.rects
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(96 + self.rects.len() * 96);
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut out);
        out
    }

    fn write_svg(&self, out: &mut String) -> core::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        )?;
        if let Some(bg) = self.background {
            writeln!(
                out,
                r#"  <rect class="background" width="100%" height="100%" fill="{bg}"/>"#
            )?;
        }
        writeln!(
            out,
            r#"  <g transform="translate({},{})">"#,
            self.origin.0, self.origin.1
        )?;
        for (r, fill) in &self.rects {
            writeln!(
                out,
                r#"    <rect class="cell" x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="{fill}"/>"#,
                r.x, r.y, r.width, r.height
            )?;
        }
        writeln!(out, "  </g>")?;
        writeln!(out, "</svg>")
    }
}

impl DrawingSurface for SvgSurface {
    type Handle = usize;

    fn create_rect(&mut self, rect: Rect, fill: Color) -> usize {
        self.rects.push((rect, fill));
        self.rects.len() - 1
    }

    fn set_fill(&mut self, handle: usize, fill: Color) {
        if let Some((_, f)) = self.rects.get_mut(handle) {
            *f = fill;
        }
    }
}
