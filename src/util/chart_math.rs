//! Aggregation and layout for the per-model accuracy chart.
//!
//! Results are grouped by model in first-seen order; a model's accuracy is
//! the share of its results whose review passed. Layout maps those
//! percentages onto a fixed-size SVG viewBox.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use crate::net::types::TestResult;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 300.0;
pub const CHART_PADDING: f64 = 32.0;
const BAR_GAP_RATIO: f64 = 0.25;

/// Accuracy summary for one model.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelAccuracy {
    pub model: String,
    pub passed: usize,
    pub total: usize,
}

impl ModelAccuracy {
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 * 100.0 / self.total as f64
    }
}

pub fn model_accuracy(results: &[TestResult]) -> Vec<ModelAccuracy> {
    let mut rows: Vec<ModelAccuracy> = Vec::new();
    for result in results {
        let idx = match rows.iter().position(|r| r.model == result.model) {
            Some(idx) => idx,
            None => {
                rows.push(ModelAccuracy { model: result.model.clone(), passed: 0, total: 0 });
                rows.len() - 1
            }
        };
        rows[idx].total += 1;
        if result.passed() {
            rows[idx].passed += 1;
        }
    }
    rows
}

/// One bar in viewBox coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub percent: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[allow(clippy::cast_precision_loss)]
pub fn layout_bars(rows: &[ModelAccuracy]) -> Vec<BarRect> {
    if rows.is_empty() {
        return Vec::new();
    }
    let plot_width = CHART_WIDTH - 2.0 * CHART_PADDING;
    let plot_height = CHART_HEIGHT - 2.0 * CHART_PADDING;
    let slot = plot_width / rows.len() as f64;
    let gap = slot * BAR_GAP_RATIO;
    let baseline = CHART_HEIGHT - CHART_PADDING;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let percent = row.percent().clamp(0.0, 100.0);
            let height = plot_height * percent / 100.0;
            BarRect {
                label: row.model.clone(),
                percent,
                x: CHART_PADDING + slot * i as f64 + gap / 2.0,
                y: baseline - height,
                width: slot - gap,
                height,
            }
        })
        .collect()
}
