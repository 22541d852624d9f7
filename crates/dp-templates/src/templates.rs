//! Layout and marker style templates

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Value};

use crate::TemplateError;

/// Name of the template used when nothing else is selected
pub const DEFAULT_TEMPLATE: &str = "basic";

const SERIF: &str = "Times New Roman, serif";

/// A named style preset
#[derive(Debug, Clone, Serialize)]
pub struct StyleTemplate {
    pub name: &'static str,
    pub description: &'static str,
    /// Layout properties merged over the figure layout
    pub layout: Value,
    /// Marker properties merged over the trace marker
    pub marker_settings: Value,
}

static TEMPLATES: Lazy<IndexMap<&'static str, StyleTemplate>> = Lazy::new(|| {
    [basic(), formal()]
        .into_iter()
        .map(|template| (template.name, template))
        .collect()
});

fn basic() -> StyleTemplate {
    StyleTemplate {
        name: "basic",
        description: "Host theme with the color bar title on the right",
        layout: json!({}),
        marker_settings: json!({
            "colorbar": {"title": {"side": "right"}},
        }),
    }
}

fn formal() -> StyleTemplate {
    let axis = |tick_font: bool| {
        let mut axis = json!({
            "showline": true,
            "linecolor": "black",
            "linewidth": 4,
            "ticks": "outside",
            "mirror": true,
        });
        if tick_font {
            axis["tickfont"] = json!({"size": 18});
            axis["title"] = json!({"font": {"size": 20}});
        }
        axis
    };

    StyleTemplate {
        name: "formal",
        description: "Publication style: serif fonts, boxed axes, outside ticks",
        layout: json!({
            "font": {"family": SERIF, "size": 10},
            "xaxis": axis(true),
            "xaxis2": axis(false),
            "yaxis": axis(true),
            "hoverlabel": {
                "bgcolor": "rgba(0, 0, 0, 0.05)",
                "font": {"size": 14, "family": SERIF},
            },
            "margin": {"l": 60, "r": 0, "t": 25, "b": 60},
        }),
        marker_settings: json!({
            "colorbar": {
                "title": {"side": "right", "font": {"size": 20}},
                "tickfont": {"size": 18, "family": SERIF},
            },
        }),
    }
}

/// Look up a template by name
pub fn get(name: &str) -> Result<&'static StyleTemplate, TemplateError> {
    TEMPLATES
        .get(name)
        .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))
}

/// Template names in display order
pub fn names() -> Vec<&'static str> {
    TEMPLATES.keys().copied().collect()
}
