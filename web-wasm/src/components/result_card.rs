//! 解析結果カードコンポーネント

use leptos::prelude::*;
use water_wise_common::WaterFootprintRecord;

#[component]
pub fn ResultCard(record: WaterFootprintRecord) -> impl IntoView {
    let quantity = format!("{} {}", record.formatted_consumption(), record.unit);

    view! {
        <div class="card result-card">
            <div class="card-header">
                <h2 class="result-title">"💧 Water Footprint Analysis"</h2>
            </div>
            <div class="result-grid">
                <div class="result-main">
                    <h3>{record.name.clone()}</h3>
                    <span class="badge">{quantity}</span>
                </div>
                <div class="fun-fact">
                    <h4>"💡 Did you know?"</h4>
                    <p class="text-muted">{record.fun_fact.clone()}</p>
                </div>
            </div>
        </div>
    }
}
