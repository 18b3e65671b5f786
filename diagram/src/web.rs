//! wasm-bindgen surface for the host page.
//!
//! Every method returns the non-render actions as a JSON array string; the
//! host applies them to the DOM (fragment, slider, preset buttons, calculator
//! panel). Scenes are painted here and never cross the boundary.
//!
//! Errors surface to JS as thrown `Error`s: a missing window or document, an
//! unknown page fragment, rejected calculator input, or a failed JSON encode.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::engine::Engine;
use crate::page::Page;
use crate::trig::evaluate;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger already installed");
    }
}

#[wasm_bindgen]
pub struct TrigApp {
    engine: Engine,
}

#[wasm_bindgen]
#[allow(clippy::missing_errors_doc)]
impl TrigApp {
    /// Bind to the canvases with the given element ids. Either may be missing
    /// from the document.
    #[wasm_bindgen(constructor)]
    pub fn new(triangle_id: &str, circle_id: &str) -> Result<TrigApp, JsValue> {
        let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
        let document = window.document().ok_or_else(|| js_error("no document"))?;
        let find = |id: &str| match document.get_element_by_id(id)?.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => Some(canvas),
            Err(el) => {
                log::warn!("#{id} is a <{}>, not a canvas", el.tag_name().to_lowercase());
                None
            }
        };
        let (triangle, circle) = (find(triangle_id), find(circle_id));
        log::info!(
            "trig app bound (triangle canvas: {}, circle canvas: {})",
            triangle.is_some(),
            circle.is_some()
        );
        Ok(Self { engine: Engine::new(triangle, circle, window.device_pixel_ratio()) })
    }

    /// Initial load with `location.hash`.
    pub fn load(&mut self, fragment: &str) -> Result<String, JsValue> {
        to_json(&self.engine.load(fragment))
    }

    pub fn navigate(&mut self, fragment: &str) -> Result<String, JsValue> {
        let page: Page = fragment.parse().map_err(|e| js_error(&format!("{e}")))?;
        to_json(&self.engine.navigate(page))
    }

    pub fn set_slider(&mut self, angle: f64) -> Result<String, JsValue> {
        to_json(&self.engine.set_slider(angle))
    }

    pub fn select_preset(&mut self, angle: f64) -> Result<String, JsValue> {
        to_json(&self.engine.select_preset(angle))
    }

    pub fn calculate(&mut self, input: &str) -> Result<String, JsValue> {
        let actions = self.engine.calculate(input).map_err(|e| js_error(&format!("{e}")))?;
        to_json(&actions)
    }

    /// Call from the window `resize` listener.
    pub fn resize(&mut self) -> Result<String, JsValue> {
        to_json(&self.engine.resize())
    }

    /// Sine, cosine and tangent of `angle` as a JSON object.
    pub fn evaluate(&self, angle: f64) -> Result<String, JsValue> {
        to_json(&self.engine.core.config.evaluator().evaluate(angle))
    }
}

/// Default-precision evaluation without an app instance.
#[wasm_bindgen(js_name = evaluateAngle)]
#[allow(clippy::missing_errors_doc)]
pub fn evaluate_angle(angle: f64) -> Result<String, JsValue> {
    to_json(&evaluate(angle))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(&format!("serialization failed: {e}")))
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}
