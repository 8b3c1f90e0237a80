use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use cayley::grid::{Geometry, Rect};
use cayley::{ClickSource, Color, DrawingSurface};

/// Draws grid cells onto a 2D canvas. A canvas keeps no per-shape objects,
/// so each rectangle is remembered and repainted when its fill changes.
pub(super) struct CanvasSurface {
    ctx: web_sys::CanvasRenderingContext2d,
    origin: (f64, f64),
    rects: Vec<Rect>,
}

impl CanvasSurface {
    pub(super) fn new(
        canvas: &web_sys::HtmlCanvasElement,
        geometry: &Geometry,
    ) -> Result<Self, String> {
        let (w, h) = geometry.surface_size();
        canvas.set_width(w.ceil() as u32);
        canvas.set_height(h.ceil() as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "canvas: get_context threw".to_string())?
            .ok_or("canvas: missing 2d context".to_string())?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| "canvas: context is not 2d".to_string())?;

        ctx.clear_rect(0.0, 0.0, w, h);
        Ok(Self {
            ctx,
            origin: geometry.origin(),
            rects: Vec::with_capacity(cayley::DIM * cayley::DIM),
        })
    }

    #[allow(deprecated)]
    fn paint(&self, rect: &Rect, fill: Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&fill.to_string()));
        self.ctx.fill_rect(
            self.origin.0 + rect.x,
            self.origin.1 + rect.y,
            rect.width,
            rect.height,
        );
    }
}

impl DrawingSurface for CanvasSurface {
    type Handle = usize;

    fn create_rect(&mut self, rect: Rect, fill: Color) -> usize {
        self.paint(&rect, fill);
        self.rects.push(rect);
        self.rects.len() - 1
    }

    fn set_fill(&mut self, handle: usize, fill: Color) {
        if let Some(rect) = self.rects.get(handle) {
            self.paint(rect, fill);
        }
    }
}

/// Forwards DOM `click` events on the canvas to the registered handler.
pub(super) struct CanvasClickSource {
    target: web_sys::HtmlCanvasElement,
}

impl CanvasClickSource {
    pub(super) fn new(target: web_sys::HtmlCanvasElement) -> Self {
        Self { target }
    }
}

impl ClickSource for CanvasClickSource {
    fn on_activate(&mut self, mut handler: Box<dyn FnMut()>) {
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::MouseEvent| {
            handler();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        match self
            .target
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        {
            // The canvas lives as long as the page.
            Ok(()) => cb.forget(),
            Err(_) => web_sys::console::error_1(&"canvas: failed to attach click listener".into()),
        }
    }
}
