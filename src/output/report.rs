use super::View;
use crate::render::escape_html;

fn json_for_script_tag(value: &str) -> String {
    value.replace("</", "<\\/")
}

/// Wraps the view's fragment in a standalone document, with the view data
/// embedded as JSON for scripts that want to re-render client-side.
pub fn render_html(view: &View) -> Vec<u8> {
    let json = serde_json::to_string(&view.data).unwrap_or_else(|_| "null".to_string());
    let json = json_for_script_tag(&json);
    let title = escape_html(&view.title);
    let container_id = escape_html(&view.container_id);
    let markup = &view.markup;

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>{title}</title>
</head>
<body>
  <script type="application/json" id="view-data">{json}</script>
  <main>
    <h1 id="section-title">{title}</h1>
    <section id="{container_id}">
{markup}
    </section>
  </main>
</body>
</html>
"#
    );
    html.into_bytes()
}
