//! SVG bar chart of per-model accuracy.

use leptos::prelude::*;

use crate::net::types::TestResult;
use crate::util::chart_math::{CHART_HEIGHT, CHART_PADDING, CHART_WIDTH, layout_bars, model_accuracy};

#[component]
pub fn ResultsChart(results: Vec<TestResult>) -> impl IntoView {
    let bars = layout_bars(&model_accuracy(&results));
    if bars.is_empty() {
        return view! { <p class="results-chart__empty">"No results available"</p> }.into_any();
    }

    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let baseline = coord(CHART_HEIGHT - CHART_PADDING);
    let left = coord(CHART_PADDING);
    let top = coord(CHART_PADDING);
    let axis_end = coord(CHART_WIDTH - CHART_PADDING);

    view! {
        <figure class="results-chart">
            <svg class="results-chart__svg" viewBox=view_box role="img" aria-label="Accuracy (%) by model">
                <line class="results-chart__axis" x1=left.clone() y1=baseline.clone() x2=axis_end y2=baseline.clone()/>
                <line class="results-chart__axis" x1=left.clone() y1=top x2=left y2=baseline/>
                {bars
                    .into_iter()
                    .map(|bar| {
                        let center = coord(bar.x + bar.width / 2.0);
                        let value_y = coord((bar.y - 6.0).max(CHART_PADDING / 2.0));
                        let label_y = coord(CHART_HEIGHT - CHART_PADDING + 18.0);
                        view! {
                            <g class="results-chart__bar">
                                <rect
                                    x=coord(bar.x)
                                    y=coord(bar.y)
                                    width=coord(bar.width)
                                    height=coord(bar.height)
                                ></rect>
                                <text class="results-chart__value" x=center.clone() y=value_y text-anchor="middle">
                                    {format!("{:.0}%", bar.percent)}
                                </text>
                                <text class="results-chart__label" x=center y=label_y text-anchor="middle">
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <figcaption class="results-chart__legend">"Accuracy (%)"</figcaption>
        </figure>
    }
    .into_any()
}

fn coord(value: f64) -> String {
    format!("{value:.1}")
}
