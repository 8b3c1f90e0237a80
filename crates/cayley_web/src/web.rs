use std::cell::RefCell;
use std::rc::Rc;

use cayley::algebra::validated_table;
use cayley::grid::{build_cells, Geometry};
use cayley::theme::{ChangeOrigin, ThemeChange, ThemeState};
use cayley::{EncodingMode, EncodingToggle, Theme};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

mod canvas;
mod shell;
mod storage;

use canvas::{CanvasClickSource, CanvasSurface};
use shell::{Legend, Topbar};
use storage::LocalStore;

type Grid = Rc<RefCell<EncodingToggle<CanvasSurface>>>;

thread_local! {
    // The mounted grid. Click handlers only hold weak references to it.
    static GRID: RefCell<Option<Grid>> = const { RefCell::new(None) };
}

pub fn start() {
    storage::clear_transition_on_animation_end();
    mount_to_body(|| view! { <App /> });
}

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn log_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

fn commit_theme(change: &ThemeChange) {
    storage::apply_theme_to_document(change);
    if let Err(e) = change.commit(&mut LocalStore) {
        log_error(&format!("theme: {e}"));
    }
}

/// Build the grid on `canvas`, paint it, and hook up the click toggle.
fn mount_grid(
    canvas: web_sys::HtmlCanvasElement,
    set_mode: WriteSignal<EncodingMode>,
) -> Result<(), String> {
    let table = validated_table().map_err(|e| format!("table: {e}"))?;
    let geometry = Geometry::default();
    let surface = CanvasSurface::new(&canvas, &geometry)?;

    let grid: Grid = Rc::new(RefCell::new(EncodingToggle::mount(
        surface,
        geometry,
        build_cells(table),
    )));
    grid.borrow_mut().subscribe(move |mode| {
        set_mode.set(mode);
        log(&format!("encoding: {mode}"));
    });
    EncodingToggle::bind(&grid, &mut CanvasClickSource::new(canvas));

    GRID.with(|g| *g.borrow_mut() = Some(grid));
    Ok(())
}

#[component]
fn App() -> impl IntoView {
    let (initial, startup) = ThemeState::initialize(&LocalStore);
    commit_theme(&startup);
    let theme_state = StoredValue::new(initial);

    let (theme, set_theme) = signal(initial.current());
    let (mode, set_mode) = signal(EncodingMode::default());
    let (status, set_status) = signal(String::new());

    let select_theme = Callback::new(move |t: Theme| {
        let mut change = None;
        theme_state.update_value(|s| change = Some(s.apply(t, ChangeOrigin::User)));
        if let Some(change) = change {
            commit_theme(&change);
            set_theme.set(change.theme);
        }
    });

    storage::on_storage_change(move |key, value| {
        let mut change = None;
        theme_state.update_value(|s| change = s.on_storage_event(key.as_deref(), value.as_deref()));
        if let Some(change) = change {
            commit_theme(&change);
            set_theme.set(change.theme);
        }
    });

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    Effect::new(move |mounted: Option<bool>| {
        if mounted == Some(true) {
            return true;
        }
        let Some(canvas) = canvas_ref.get() else {
            return false;
        };
        match mount_grid(canvas, set_mode) {
            Ok(()) => set_status.set("256 cells".to_string()),
            Err(e) => {
                log_error(&e);
                set_status.set(format!("render failed: {e}"));
            }
        }
        true
    });

    view! {
        <div class="app">
            <Topbar theme=theme status=status select_theme=select_theme />
            <main class="content">
                <div id="chart">
                    <canvas
                        node_ref=canvas_ref
                        class="cayley-grid"
                        title="Click to switch encoding"
                    ></canvas>
                </div>
                <Legend mode=mode />
            </main>
        </div>
    }
}
