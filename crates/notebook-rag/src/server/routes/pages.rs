//! HTML pages

use axum::response::Html;

const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");
const ADMIN_PLACEHOLDER: &str = "{{ is_admin }}";

/// Render the single-page UI, with or without admin controls
pub fn render_index(is_admin: bool) -> String {
    INDEX_TEMPLATE.replace(ADMIN_PLACEHOLDER, if is_admin { "true" } else { "false" })
}

/// GET / - Reader view
pub async fn index() -> Html<String> {
    Html(render_index(false))
}

/// GET /admin - Admin view with delete controls
pub async fn admin() -> Html<String> {
    Html(render_index(true))
}
