//! Browser shell: wires DOM events into the grid state machine and redraws
//! the canvas after every state change.
//!
//! All interaction logic lives in [`crate::grid`]; this module only
//! translates `MouseEvent`/`WheelEvent`/`KeyboardEvent` into state-machine
//! calls and pushes frames plus the stats line back out to the DOM.

mod fetch;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, WheelEvent};

use crate::grid::GridState;
use crate::render::backend::{RenderBackend, RenderParams};
use crate::render::canvas::CanvasRenderer;

pub(crate) struct SharedState {
    grid: GridState,
    renderer: CanvasRenderer,
    canvas: HtmlCanvasElement,
    /// Optional `#stats` element that receives the aggregate summary line.
    stats_panel: Option<HtmlElement>,
    endpoint: String,
}

impl SharedState {
    fn redraw(&mut self) {
        let params = RenderParams {
            store: &self.grid.store,
            columns: &self.grid.columns,
            viewport: &self.grid.viewport,
            selection: self.grid.selection.as_ref(),
            edit_target: self.grid.edit_target,
        };
        if self.renderer.render(&params).is_err() {
            return;
        }
        if let (Some(panel), Some(stats)) = (self.stats_panel.as_ref(), self.grid.stats.as_ref()) {
            panel.set_text_content(Some(&stats.summary()));
        }
    }
}

/// The main grid view exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    state: Rc<RefCell<SharedState>>,
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    wheel_closure: Option<Closure<dyn FnMut(WheelEvent)>>,
    #[allow(dead_code)]
    key_closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    #[allow(dead_code)]
    resize_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl GridView {
    /// Create a new grid view on `canvas`, paging rows in from `endpoint`.
    ///
    /// Event handlers (selection drag, column resize, wheel scroll, typing)
    /// are wired automatically; the first data page is requested before the
    /// constructor returns.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, endpoint: String) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let renderer = CanvasRenderer::new(canvas.clone())?;
        let mut grid = GridState::new();
        grid.resize(canvas.width() as f32, canvas.height() as f32);

        let stats_panel: Option<HtmlElement> = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("stats"))
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        let state = Rc::new(RefCell::new(SharedState {
            grid,
            renderer,
            canvas: canvas.clone(),
            stats_panel,
            endpoint,
        }));

        let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        // Mouse down
        {
            let state = state.clone();
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = event_coords(&canvas_ref, &event);
                Self::internal_mouse_down(&state, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse move (drag + hover feedback)
        {
            let state = state.clone();
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = event_coords(&canvas_ref, &event);
                Self::internal_mouse_move(&state, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse up
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                Self::internal_mouse_up(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Wheel: scroll the viewport and page more rows in as needed
        let wheel_closure = {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
                event.prevent_default();
                Self::internal_wheel(&state, event.delta_x(), event.delta_y());
            }) as Box<dyn FnMut(WheelEvent)>);
            canvas
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
                .ok();
            Some(closure)
        };

        // Keyboard handler on document (typing + arrow navigation)
        let key_closure = {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if Self::internal_key_down(&state, &event.key()) {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);

            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        )
                        .ok();
                }
            }
            Some(closure)
        };

        // Window resize keeps the canvas filling the page above the stats panel
        let resize_closure = {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                Self::internal_resize(&state);
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(window) = web_sys::window() {
                window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                    .ok();
            }
            Some(closure)
        };

        Self::internal_resize(&state);
        let first_page = state.borrow_mut().grid.next_page_request();
        if let Some(request) = first_page {
            fetch::spawn_page_fetch(state.clone(), request);
        }

        Ok(GridView {
            state,
            closures,
            wheel_closure,
            key_closure,
            resize_closure,
        })
    }

    /// Force a full redraw.
    pub fn redraw(&self) {
        self.state.borrow_mut().redraw();
    }

    /// Current aggregate over the selected range, as a JS object, or
    /// `undefined` when no range has been finalized yet.
    pub fn stats(&self) -> JsValue {
        match self.state.borrow().grid.stats.as_ref() {
            Some(stats) => serde_wasm_bindgen::to_value(stats).unwrap_or(JsValue::UNDEFINED),
            None => JsValue::UNDEFINED,
        }
    }

    fn internal_mouse_down(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let mut s = state.borrow_mut();
        s.grid.pointer_down(x, y);
        s.redraw();
    }

    fn internal_mouse_move(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let mut s = state.borrow_mut();
        let hint = s.grid.pointer_move(x, y);
        let _ = s.canvas.style().set_property("cursor", hint.css());
        if s.grid.mode != crate::types::InteractionMode::Idle {
            s.redraw();
        }
    }

    fn internal_mouse_up(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        s.grid.pointer_up();
        s.redraw();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn internal_wheel(state: &Rc<RefCell<SharedState>>, delta_x: f64, delta_y: f64) {
        let request = {
            let mut s = state.borrow_mut();
            let request = s.grid.wheel(delta_x as f32, delta_y as f32);
            s.redraw();
            request
        };
        if let Some(request) = request {
            fetch::spawn_page_fetch(state.clone(), request);
        }
    }

    fn internal_key_down(state: &Rc<RefCell<SharedState>>, key: &str) -> bool {
        let mut s = state.borrow_mut();
        let handled = s.grid.key_down(key);
        if handled {
            s.redraw();
        }
        handled
    }

    /// Fit the canvas to the window, leaving room for the stats panel.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn internal_resize(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);

        let mut s = state.borrow_mut();
        let stats_height = s
            .stats_panel
            .as_ref()
            .map_or(0.0, |panel| f64::from(panel.offset_height()));
        let width = width.max(1.0) as u32;
        let height = (height - stats_height).max(1.0) as u32;

        if s.renderer.resize(width, height).is_err() {
            return;
        }
        s.grid.resize(width as f32, height as f32);
        s.redraw();
    }
}

#[allow(clippy::cast_possible_truncation)]
fn event_coords(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x = event.client_x() as f32 - rect.left() as f32;
    let y = event.client_y() as f32 - rect.top() as f32;
    (x, y)
}
