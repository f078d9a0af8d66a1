use super::charts::{tick_text, tooltip_text, ChartSpec};
use js_sys::{Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// JS binding for the global `Chart` class of the Chart.js UMD bundle
#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

type JsCallback = Closure<dyn Fn(JsValue) -> JsValue>;

/// A live chart together with the Rust callbacks it calls into.
/// Dropping it destroys the Chart.js instance.
pub struct MountedChart {
    chart: Chart,
    _tick_callback: Option<JsCallback>,
    _tooltip_callback: Option<JsCallback>,
}

impl Drop for MountedChart {
    fn drop(&mut self) {
        self.chart.destroy();
    }
}

/// Charts currently drawn, keyed by canvas id
#[derive(Default)]
pub struct ChartRegistry {
    charts: HashMap<&'static str, MountedChart>,
}

impl ChartRegistry {
    /// Draw `spec`, destroying any chart already on the same canvas
    pub fn render(&mut self, spec: &ChartSpec) -> Result<(), JsValue> {
        // Chart.js refuses to reuse a canvas that still has a chart attached
        self.charts.remove(spec.canvas_id);
        let mounted = mount_chart(spec)?;
        self.charts.insert(spec.canvas_id, mounted);
        Ok(())
    }
}

/// Create a Chart.js instance on the canvas named by `spec.canvas_id`
pub fn mount_chart(spec: &ChartSpec) -> Result<MountedChart, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("Document not available"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(spec.canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("{} element not found", spec.canvas_id)))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("{} is not a canvas", spec.canvas_id)))?;

    let config = spec
        .config
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let tick_callback = if spec.currency_ticks {
        let callback: JsCallback = Closure::wrap(Box::new(|value: JsValue| {
            JsValue::from_str(&tick_text(value.as_f64()))
        }) as Box<dyn Fn(JsValue) -> JsValue>);
        let ticks = object_at(&config, &["options", "scales", "y", "ticks"])?;
        Reflect::set(
            &ticks,
            &JsValue::from_str("callback"),
            callback.as_ref().unchecked_ref(),
        )?;
        Some(callback)
    } else {
        None
    };

    let tooltip_callback = match &spec.tooltip_labels {
        Some(labels) => {
            let labels = labels.clone();
            let callback: JsCallback = Closure::wrap(Box::new(move |context: JsValue| {
                let index = Reflect::get(&context, &JsValue::from_str("dataIndex"))
                    .ok()
                    .and_then(|index| index.as_f64());
                match tooltip_text(&labels, index) {
                    Some(text) => JsValue::from_str(text),
                    None => JsValue::UNDEFINED,
                }
            }) as Box<dyn Fn(JsValue) -> JsValue>);
            let callbacks = object_at(&config, &["options", "plugins", "tooltip", "callbacks"])?;
            Reflect::set(
                &callbacks,
                &JsValue::from_str("label"),
                callback.as_ref().unchecked_ref(),
            )?;
            Some(callback)
        }
        None => None,
    };

    let chart = Chart::new(&canvas, &config)?;
    log::debug!("Chart mounted on #{}", spec.canvas_id);

    Ok(MountedChart {
        chart,
        _tick_callback: tick_callback,
        _tooltip_callback: tooltip_callback,
    })
}

/// Walk `path` from `root`, creating empty objects where keys are missing
fn object_at(root: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    let mut current = root.clone();
    for key in path {
        let key = JsValue::from_str(key);
        let next = Reflect::get(&current, &key)?;
        current = if next.is_object() {
            next
        } else {
            let created: JsValue = Object::new().into();
            Reflect::set(&current, &key, &created)?;
            created
        };
    }
    Ok(current)
}
