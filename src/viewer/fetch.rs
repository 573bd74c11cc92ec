//! Paged record fetching.
//!
//! Pages are requested as `{endpoint}/{PAGE_SIZE}/{page}` and arrive as a
//! JSON array of record strings. A failed fetch is logged and dropped; the
//! page counter is never rolled back, so that page is simply skipped.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Response;

use crate::error::{GridError, Result};
use crate::grid::{PageRequest, PAGE_SIZE};

use super::SharedState;

/// Fire off a page fetch and merge the records when they arrive.
pub(crate) fn spawn_page_fetch(state: Rc<RefCell<SharedState>>, request: PageRequest) {
    let endpoint = state.borrow().endpoint.clone();
    spawn_local(async move {
        match fetch_page(&endpoint, request).await {
            Ok(records) => {
                let mut s = state.borrow_mut();
                s.grid.merge_page(request, &records);
                s.redraw();
            }
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "page {} fetch failed: {err}",
                    request.page
                )));
            }
        }
    });
}

async fn fetch_page(endpoint: &str, request: PageRequest) -> Result<Vec<String>> {
    let url = format!("{endpoint}/{PAGE_SIZE}/{}", request.page);

    let window = web_sys::window().ok_or(GridError::Fetch("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| GridError::Fetch("fetch did not yield a Response".into()))?;
    if !response.ok() {
        return Err(GridError::Fetch(format!(
            "{url} returned HTTP {}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or(GridError::Fetch("response body is not text".into()))?;
    serde_json::from_str(&body).map_err(|e| GridError::Fetch(e.to_string()))
}

fn js_error(value: JsValue) -> GridError {
    GridError::Fetch(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}
