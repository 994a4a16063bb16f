use axum::response::Html;

use crate::view;

pub async fn index() -> Html<String> {
    Html(view::render_index())
}
