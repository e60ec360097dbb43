// Mapper to convert domain charts to Plotly figure JSON
use crate::domain::chart::ChartSpec;
use crate::domain::layout::LayoutNode;
use serde_json::{Value, json};

pub fn layout_to_figures(layout: &LayoutNode) -> Vec<Value> {
    layout.charts().into_iter().map(chart_to_figure).collect()
}

pub fn chart_to_figure(spec: &ChartSpec) -> Value {
    json!({
        "data": [{
            "x": spec.x,
            "y": spec.y,
            "type": spec.kind.as_str(),
            "name": spec.name,
        }],
        "layout": {
            "title": spec.name,
        }
    })
}
