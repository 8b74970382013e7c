pub mod report;

use serde::Serialize;

use crate::render::Container;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Fragment,
    Html,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fragment" | "frag" | "markup" => Some(Self::Fragment),
            "html" | "htm" | "page" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    None
}

/// A rendered view: the container's markup plus the data behind it.
#[derive(Clone, Debug, Serialize)]
pub struct View {
    pub title: String,
    pub container_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub markup: String,
    pub data: serde_json::Value,
}

impl View {
    pub fn from_container<T: Serialize>(title: &str, container: &Container, data: &T) -> Self {
        Self {
            title: title.to_string(),
            container_id: container.id.to_string(),
            message: None,
            markup: container.inner_html().to_string(),
            data: serde_json::to_value(data).unwrap_or(serde_json::Value::Null),
        }
    }

    /// A view that is only a status line, such as the contact form message.
    pub fn message<T: Serialize>(title: &str, container_id: &str, message: &str, data: &T) -> Self {
        Self {
            title: title.to_string(),
            container_id: container_id.to_string(),
            message: Some(message.to_string()),
            markup: format!(
                r#"<p class="form-message">{}</p>"#,
                crate::render::escape_html(message)
            ),
            data: serde_json::to_value(data).unwrap_or(serde_json::Value::Null),
        }
    }
}

pub fn render_fragment(view: &View) -> Vec<u8> {
    let mut out = view.markup.clone();
    out.push('\n');
    out.into_bytes()
}

pub fn render_json(view: &View) -> Vec<u8> {
    let mut out = serde_json::to_vec_pretty(view).unwrap_or_else(|_| b"{}".to_vec());
    out.push(b'\n');
    out
}

pub fn render_html(view: &View) -> Vec<u8> {
    report::render_html(view)
}

pub fn render(view: &View, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Fragment => render_fragment(view),
        OutputFormat::Html => render_html(view),
        OutputFormat::Json => render_json(view),
    }
}
