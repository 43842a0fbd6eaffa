use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use glint_motion_core::{
    Config, CounterId, CounterSpec, Engine, Inputs, Layer, RevealConfig, RevealSetId,
    TargetResolver,
};

#[wasm_bindgen]
pub struct GlintMotion {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

struct JsResolver {
    f: Function,
}

impl TargetResolver for JsResolver {
    fn resolve(&mut self, path: &str) -> Option<String> {
        // Call JS resolver(path) - expect string key; allow number fallback -> string
        let arg = JsValue::from_str(path);
        match self.f.call1(&JsValue::UNDEFINED, &arg) {
            Ok(val) => {
                if val.is_undefined() || val.is_null() {
                    return None;
                }
                if let Some(s) = val.as_string() {
                    return Some(s);
                }
                if let Some(n) = val.as_f64() {
                    return Some(if n.fract() == 0.0 {
                        format!("{}", n as i64)
                    } else {
                        format!("{}", n)
                    });
                }
                swb::from_value::<String>(val).ok()
            }
            Err(_) => None,
        }
    }
}

#[wasm_bindgen]
impl GlintMotion {
    /// Create a new engine instance. Pass a JSON config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new GlintMotion({ initial_counters: 32 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GlintMotion, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(GlintMotion {
            core: Engine::new(cfg),
        })
    }

    /// Register an animated counter. `spec` is a JSON CounterSpec; `path` is
    /// the canonical output path. Returns a CounterId (u32).
    #[wasm_bindgen(js_name = add_counter)]
    pub fn add_counter(&mut self, spec: JsValue, path: String) -> Result<u32, JsError> {
        let spec: CounterSpec =
            swb::from_value(spec).map_err(|e| JsError::new(&format!("counter spec error: {e}")))?;
        let id = self.core.add_counter(spec, &path);
        Ok(id.0)
    }

    /// Register a reveal set. `config` is a JSON RevealConfig (or
    /// undefined/null for defaults); `paths` is an array of canonical paths,
    /// one tracked element per entry. Returns a RevealSetId (u32).
    #[wasm_bindgen(js_name = add_reveal_set)]
    pub fn add_reveal_set(&mut self, config: JsValue, paths: JsValue) -> Result<u32, JsError> {
        let cfg: RevealConfig = if jsvalue_is_undefined_or_null(&config) {
            RevealConfig::default()
        } else {
            swb::from_value(config)
                .map_err(|e| JsError::new(&format!("reveal config error: {e}")))?
        };
        let paths: Vec<String> =
            swb::from_value(paths).map_err(|e| JsError::new(&format!("reveal paths error: {e}")))?;
        let id = self.core.add_reveal_set(cfg, paths);
        Ok(id.0)
    }

    /// Register a parallax layer set from a JSON array of { factor, path }.
    /// Returns a LayerSetId (u32).
    #[wasm_bindgen(js_name = add_layer_set)]
    pub fn add_layer_set(&mut self, layers: JsValue) -> Result<u32, JsError> {
        let layers: Vec<Layer> =
            swb::from_value(layers).map_err(|e| JsError::new(&format!("layer set error: {e}")))?;
        Ok(self.core.add_layer_set(layers).0)
    }

    /// One-time binding: `resolver` is a JS function (canonicalPath) ->
    /// hostHandle | undefined. Unresolved paths keep their canonical name.
    pub fn prebind(&mut self, resolver: Function) {
        let mut r = JsResolver { f: resolver };
        self.core.prebind(&mut r);
    }

    /// Step the engine by dt seconds. `inputs` is a JSON Inputs object or
    /// undefined/null for an empty frame. Returns the Outputs for this tick.
    pub fn update(&mut self, dt: f32, inputs: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs) {
            Inputs::default()
        } else {
            swb::from_value(inputs).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let outputs = self.core.update(dt, inputs);
        swb::to_value(outputs).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Current rendered string of a counter, for initial paints.
    #[wasm_bindgen(js_name = counter_render)]
    pub fn counter_render(&self, id: u32) -> Option<String> {
        self.core.counter_render(CounterId(id))
    }

    /// Current visibility flag of a reveal element.
    #[wasm_bindgen(js_name = reveal_visible)]
    pub fn reveal_visible(&self, set: u32, index: u32) -> Option<bool> {
        self.core.reveal_visible(RevealSetId(set), index as usize)
    }
}
