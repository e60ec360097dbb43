// HTML page templates and rendering helpers
use crate::domain::strategy::{Hyperparameter, ModelInfo};
use std::collections::HashMap;
use std::fmt::Write;

pub const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
pub const DXLIB_TEMPLATE: &str = include_str!("../../templates/dxlib.html");
pub const STRATEGIES_TEMPLATE: &str = include_str!("../../templates/strategies.html");

/// Replace `${name}` placeholders in a page template. Handler and template
/// must agree on key names exactly; unknown placeholders are left as-is.
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn model_cards_fragment(models: &[ModelInfo]) -> String {
    let mut html = String::new();
    for model in models {
        let _ = writeln!(
            html,
            "<div class=\"model-card\" id=\"{}\"><h3>{}</h3><p>{}</p></div>",
            escape_html(&model.id),
            escape_html(&model.name),
            escape_html(&model.description),
        );
    }
    html
}

pub fn hyperparameters_fragment(hyperparameters: &[Hyperparameter]) -> String {
    let mut html = String::from("<ul class=\"hyperparameters\">\n");
    for parameter in hyperparameters {
        let _ = writeln!(
            html,
            "<li>{} = {}</li>",
            escape_html(&parameter.name),
            parameter.value,
        );
    }
    html.push_str("</ul>\n");
    html
}

pub fn table_fragment(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table class=\"data-table\">\n<thead><tr>");
    for column in columns {
        let _ = write!(html, "<th>{}</th>", escape_html(column));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape_html(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let mut vars = HashMap::new();
        vars.insert("title".to_string(), "Delphos".to_string());
        vars.insert("lang".to_string(), "pt".to_string());

        let rendered = render_template("<html lang=\"${lang}\"><h1>${title}</h1>", &vars);

        assert_eq!(rendered, "<html lang=\"pt\"><h1>Delphos</h1>");
    }

    #[test]
    fn test_unknown_placeholders_are_left_alone() {
        let rendered = render_template("<p>${unset}</p>", &HashMap::new());
        assert_eq!(rendered, "<p>${unset}</p>");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"A & B\"</b>"),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_model_cards_carry_the_model_ids() {
        let models = vec![ModelInfo::new(
            "model1".to_string(),
            "Model 1".to_string(),
            "Alpha Predictor".to_string(),
        )];
        let html = model_cards_fragment(&models);
        assert!(html.contains("id=\"model1\""));
        assert!(html.contains("Alpha Predictor"));
    }

    #[test]
    fn test_table_fragment_renders_headers_and_cells() {
        let columns = vec!["Strategy".to_string(), "Return".to_string()];
        let rows = vec![vec!["Long-Short".to_string(), "5%".to_string()]];
        let html = table_fragment(&columns, &rows);
        assert!(html.contains("<th>Strategy</th>"));
        assert!(html.contains("<td>5%</td>"));
    }
}
