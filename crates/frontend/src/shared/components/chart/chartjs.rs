//! Chart.js backed [`ChartSurface`]
//!
//! Expects the Chart.js UMD bundle to be loaded by `index.html`, which exposes
//! the global `Chart` constructor.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use super::{BarChartSpec, ChartSurface};
use crate::shared::config::ChartStyle;
use crate::shared::error::ChartError;

#[wasm_bindgen]
extern "C" {
    /// JS binding for the global Chart.js `Chart` class
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

pub struct ChartJsSurface {
    style: ChartStyle,
}

impl ChartJsSurface {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    fn canvas(&self) -> Option<HtmlCanvasElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(&self.style.canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }
}

impl ChartSurface for ChartJsSurface {
    type Handle = Chart;

    fn create(&mut self, spec: &BarChartSpec) -> Result<Chart, ChartError> {
        let canvas = self
            .canvas()
            .ok_or_else(|| ChartError::MissingCanvas(self.style.canvas_id.clone()))?;

        let config = ChartJsConfig::bar(spec, &self.style);
        let config = serde_wasm_bindgen::to_value(&config)
            .map_err(|e| ChartError::Library(e.to_string()))?;

        Chart::new(&canvas, &config).map_err(|e| ChartError::Library(format!("{e:?}")))
    }

    fn destroy(&mut self, handle: Chart) {
        handle.destroy();
    }

    fn set_visible(&mut self, visible: bool) {
        let Some(canvas) = self.canvas() else {
            log::warn!("chart canvas `{}` not found", self.style.canvas_id);
            return;
        };
        let display = if visible { "block" } else { "none" };
        if let Err(e) = canvas.style().set_property("display", display) {
            log::warn!("failed to toggle chart canvas: {:?}", e);
        }
    }
}

// ============================================================================
// Chart.js configuration object
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartJsData,
    pub options: ChartJsOptions,
}

#[derive(Debug, Serialize)]
pub struct ChartJsData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartJsDataset>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Serialize)]
pub struct ChartJsOptions {
    pub scales: ChartJsScales,
}

#[derive(Debug, Serialize)]
pub struct ChartJsScales {
    pub y: ChartJsAxis,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsAxis {
    pub begin_at_zero: bool,
}

impl ChartJsConfig {
    /// Vertical bar chart, one dataset, zero-based y axis
    pub fn bar(spec: &BarChartSpec, style: &ChartStyle) -> Self {
        Self {
            chart_type: "bar",
            data: ChartJsData {
                labels: spec.labels.clone(),
                datasets: vec![ChartJsDataset {
                    label: spec.series_label.clone(),
                    data: spec.values.clone(),
                    background_color: style.background_color.clone(),
                    border_color: style.border_color.clone(),
                    border_width: style.border_width,
                }],
            },
            options: ChartJsOptions {
                scales: ChartJsScales {
                    y: ChartJsAxis { begin_at_zero: true },
                },
            },
        }
    }
}
