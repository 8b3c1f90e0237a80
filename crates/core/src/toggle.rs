//! Encoding toggle: owns the active [`EncodingMode`] and recolors on every
//! activation.
//!
//! Everything here runs on one thread. The click handler shares the
//! controller through `Rc<RefCell<_>>` and keeps the borrow for the whole
//! recolor, so a second activation cannot interleave with the first.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::grid::{Cell, Geometry};
use crate::palette::Color;
use crate::render::{color_for, DrawingSurface, EncodingMode, Renderer};

/// A source of activation events (a click on the grid background).
pub trait ClickSource {
    fn on_activate(&mut self, handler: Box<dyn FnMut()>);
}

type Observer = Box<dyn FnMut(EncodingMode)>;

pub struct EncodingToggle<S: DrawingSurface> {
    mode: EncodingMode,
    renderer: Renderer<S>,
    observers: Vec<Observer>,
}

impl<S: DrawingSurface> EncodingToggle<S> {
    /// Initial paint in the default mode.
    pub fn mount(surface: S, geometry: Geometry, cells: Vec<Cell>) -> Self {
        let mode = EncodingMode::default();
        Self {
            mode,
            renderer: Renderer::render_initial(surface, geometry, cells, mode),
            observers: Vec::new(),
        }
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    /// Current fill of the cell at `(row, col)`.
    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        self.renderer.cell(row, col).map(|c| color_for(c, self.mode))
    }

    /// Called with the new mode after each recolor has finished.
    ///
    /// Observers run while the controller is mutably borrowed; they must not
    /// reach back into it.
    pub fn subscribe(&mut self, observer: impl FnMut(EncodingMode) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Flip the mode and recolor every cell before returning.
    pub fn toggle(&mut self) -> EncodingMode {
        self.mode = self.mode.toggled();
        self.renderer.recolor_all(self.mode);
        for observer in &mut self.observers {
            observer(self.mode);
        }
        self.mode
    }
}

impl<S: DrawingSurface + 'static> EncodingToggle<S> {
    /// Route activations from `source` into [`EncodingToggle::toggle`].
    ///
    /// The handler holds a weak reference; once the controller is dropped,
    /// activations are ignored.
    pub fn bind(this: &Rc<RefCell<Self>>, source: &mut impl ClickSource) {
        let weak = Rc::downgrade(this);
        source.on_activate(Box::new(move || {
            if let Some(toggle) = weak.upgrade() {
                toggle.borrow_mut().toggle();
            }
        }));
    }
}

/// In-process click source: [`ClickRelay::fire`] stands in for a user click.
#[derive(Default)]
pub struct ClickRelay {
    handlers: Vec<Box<dyn FnMut()>>,
}

impl ClickRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&mut self) {
        for handler in &mut self.handlers {
            handler();
        }
    }
}

impl ClickSource for ClickRelay {
    fn on_activate(&mut self, handler: Box<dyn FnMut()>) {
        self.handlers.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{BasisElement, Sign, TABLE};
    use crate::grid::build_cells;
    use crate::palette::{color_by_element, color_by_sign};
    use crate::render::tests::RecordingSurface;
    use std::cell::Cell as StdCell;

    fn mounted() -> Rc<RefCell<EncodingToggle<RecordingSurface>>> {
        Rc::new(RefCell::new(EncodingToggle::mount(
            RecordingSurface::default(),
            Geometry::default(),
            build_cells(&TABLE),
        )))
    }

    fn snapshot(t: &EncodingToggle<RecordingSurface>) -> Vec<Color> {
        t.renderer().surface().rects.iter().map(|(_, c)| *c).collect()
    }

    #[test]
    fn starts_by_element() {
        let t = mounted();
        let t = t.borrow();
        assert_eq!(t.mode(), EncodingMode::ByElement);
        assert_eq!(t.color_at(1, 0), Some(color_by_element(BasisElement::E23)));
        assert_eq!(
            t.renderer().surface().fill_at(1, 0),
            color_by_element(BasisElement::E23)
        );
    }

    #[test]
    fn click_switches_to_sign() {
        let t = mounted();
        let mut relay = ClickRelay::new();
        EncodingToggle::bind(&t, &mut relay);

        relay.fire();

        let t = t.borrow();
        assert_eq!(t.mode(), EncodingMode::BySign);
        let s = t.renderer().surface();
        assert_eq!(s.fill_at(1, 0), color_by_sign(Sign::Positive));
        assert_eq!(s.fill_at(8, 4), color_by_sign(Sign::Negative));
        assert_eq!(s.fills, 256);
    }

    #[test]
    fn row_8_col_4_follows_mode() {
        let t = mounted();
        assert_eq!(
            t.borrow().color_at(8, 4),
            Some(color_by_element(BasisElement::E0123))
        );
        t.borrow_mut().toggle();
        assert_eq!(t.borrow().color_at(8, 4), Some(color_by_sign(Sign::Negative)));
    }

    #[test]
    fn two_clicks_restore_every_cell() {
        let t = mounted();
        let before = snapshot(&t.borrow());

        let mut relay = ClickRelay::new();
        EncodingToggle::bind(&t, &mut relay);
        relay.fire();
        assert_ne!(snapshot(&t.borrow()), before);
        relay.fire();

        let t = t.borrow();
        assert_eq!(t.mode(), EncodingMode::ByElement);
        assert_eq!(snapshot(&t), before);
        assert_eq!(t.renderer().surface().fills, 512);
    }

    #[test]
    fn observers_see_each_new_mode() {
        let t = mounted();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            t.borrow_mut().subscribe(move |m| seen.borrow_mut().push(m));
        }
        t.borrow_mut().toggle();
        t.borrow_mut().toggle();
        assert_eq!(
            *seen.borrow(),
            vec![EncodingMode::BySign, EncodingMode::ByElement]
        );
    }

    #[test]
    fn dropped_controller_ignores_clicks() {
        let calls = Rc::new(StdCell::new(0));
        let mut relay = ClickRelay::new();
        {
            let t = mounted();
            let calls = calls.clone();
            t.borrow_mut().subscribe(move |_| calls.set(calls.get() + 1));
            EncodingToggle::bind(&t, &mut relay);
            relay.fire();
        }
        relay.fire();
        assert_eq!(calls.get(), 1);
    }
}
