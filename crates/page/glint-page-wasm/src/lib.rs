use js_sys::{Function, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use glint_motion_core::Config;
use glint_page_core::{ChatLauncher, PageEngine, PageInputs};

#[wasm_bindgen]
pub struct GlintPage {
    core: PageEngine,
    /// Dotted path to the chat widget handle on the JS global, e.g.
    /// "$zoho.salesiq.floatwindow". Resolved fresh on every open request so
    /// a widget script that loads late is picked up.
    chat_global: Option<String>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// A chat handle resolved from the JS global object. Calls the handle's
/// `visible("show")` method, matching the floating-window API of the hosted
/// widget scripts this targets.
struct JsChatHandle {
    target: JsValue,
}

impl ChatLauncher for JsChatHandle {
    fn show_floating_window(&mut self) {
        let visible = match Reflect::get(&self.target, &JsValue::from_str("visible")) {
            Ok(v) => v,
            Err(_) => return,
        };
        if let Some(f) = visible.dyn_ref::<Function>() {
            let _ = f.call1(&self.target, &JsValue::from_str("show"));
        }
    }
}

/// Walk a dotted path from the JS global; None when any link is missing.
fn resolve_chat_handle(path: &str) -> Option<JsChatHandle> {
    let mut target: JsValue = js_sys::global().into();
    for segment in path.split('.') {
        target = Reflect::get(&target, &JsValue::from_str(segment)).ok()?;
        if jsvalue_is_undefined_or_null(&target) {
            return None;
        }
    }
    Some(JsChatHandle { target })
}

#[wasm_bindgen]
impl GlintPage {
    /// Create a page engine. Pass a JSON motion config or undefined/null for
    /// defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GlintPage, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(GlintPage {
            core: PageEngine::new(cfg),
            chat_global: None,
        })
    }

    /// Configure where the optional chat widget hangs off the JS global.
    /// Open-chat requests are silent no-ops until the handle exists.
    #[wasm_bindgen(js_name = set_chat_global)]
    pub fn set_chat_global(&mut self, path: Option<String>) {
        self.chat_global = path;
    }

    /// Step the page by dt seconds. `inputs` is a JSON PageInputs object or
    /// undefined/null for an empty frame. Returns the PageFrame for this tick.
    pub fn step(&mut self, dt: f32, inputs: JsValue) -> Result<JsValue, JsError> {
        let inputs: PageInputs = if jsvalue_is_undefined_or_null(&inputs) {
            PageInputs::default()
        } else {
            swb::from_value(inputs).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };

        let mut chat = self
            .chat_global
            .as_deref()
            .and_then(resolve_chat_handle);
        let frame = self
            .core
            .step(dt, inputs, chat.as_mut().map(|c| c as &mut dyn ChatLauncher));
        swb::to_value(&frame).map_err(|e| JsError::new(&format!("frame error: {e}")))
    }

    /// Register an animated counter on the underlying motion engine.
    #[wasm_bindgen(js_name = add_counter)]
    pub fn add_counter(&mut self, spec: JsValue, path: String) -> Result<u32, JsError> {
        let spec = swb::from_value(spec)
            .map_err(|e| JsError::new(&format!("counter spec error: {e}")))?;
        Ok(self.core.motion.add_counter(spec, &path).0)
    }

    /// Register a reveal set on the underlying motion engine.
    #[wasm_bindgen(js_name = add_reveal_set)]
    pub fn add_reveal_set(&mut self, config: JsValue, paths: JsValue) -> Result<u32, JsError> {
        let cfg = if jsvalue_is_undefined_or_null(&config) {
            Default::default()
        } else {
            swb::from_value(config)
                .map_err(|e| JsError::new(&format!("reveal config error: {e}")))?
        };
        let paths: Vec<String> =
            swb::from_value(paths).map_err(|e| JsError::new(&format!("reveal paths error: {e}")))?;
        Ok(self.core.motion.add_reveal_set(cfg, paths).0)
    }

    /// True while a modal holds the page scroll lock; adapters mirror this
    /// onto the document's overflow style.
    #[wasm_bindgen(js_name = is_scroll_locked)]
    pub fn is_scroll_locked(&self) -> bool {
        self.core.is_scroll_locked()
    }

    /// Active modal as a JSON value, or undefined when none is open.
    #[wasm_bindgen(js_name = active_modal)]
    pub fn active_modal(&self) -> Result<JsValue, JsError> {
        match self.core.active_modal() {
            Some(kind) => {
                swb::to_value(&kind).map_err(|e| JsError::new(&format!("modal error: {e}")))
            }
            None => Ok(JsValue::UNDEFINED),
        }
    }
}
