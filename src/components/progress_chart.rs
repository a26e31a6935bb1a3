//! Progress Chart Component
//!
//! Pending/done donut rendered as inline SVG.

use leptos::prelude::*;

use crate::chart::{donut_slices, ChartEntry, DonutGeometry};
use crate::store::{use_app_store, AppStateStoreFields};

const PENDING_COLOR: &str = "#4CAF50";
const DONE_COLOR: &str = "#1B5E20";

#[component]
pub fn ProgressChart() -> impl IntoView {
    let store = use_app_store();
    let geometry = DonutGeometry::default();

    let slices = move || {
        let summary = store.tasks().read().summary();
        let entries = [
            ChartEntry { label: "Pending", value: summary.pending, color: PENDING_COLOR },
            ChartEntry { label: "Done", value: summary.completed, color: DONE_COLOR },
        ];
        donut_slices(&entries, &geometry)
    };

    view! {
        <svg width="200" height="200" viewBox="0 0 200 200" class="progress-chart">
            {move || slices().into_iter().map(|slice| view! {
                <path d=slice.path fill=slice.color />
            }).collect_view()}
        </svg>
        <ul class="list-inline text-center mb-0">
            {[("Pending", PENDING_COLOR), ("Done", DONE_COLOR)].into_iter().map(|(label, color)| view! {
                <li class="list-inline-item small">
                    <span
                        class="d-inline-block me-1"
                        style=format!("width: 10px; height: 10px; background-color: {};", color)
                    ></span>
                    {label}
                </li>
            }).collect_view()}
        </ul>
    }
}
