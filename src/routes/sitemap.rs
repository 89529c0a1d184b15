use axum::response::Html;

/// Every route served by the API, as (method, path).
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/user"),
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/users"),
    ("GET", "/users/favourites"),
    ("POST", "/favourite/planet/{id}"),
    ("POST", "/favourite/people/{id}"),
    ("DELETE", "/favourite/planet/{id}"),
    ("DELETE", "/favourite/peoples/{id_character}"),
    ("GET", "/health"),
    ("GET", "/docs"),
];

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML list of endpoints", content_type = "text/html", body = String)
    ),
    tag = "Health"
)]
pub async fn sitemap() -> Html<String> {
    Html(render_sitemap())
}

// Parameterless GET routes are rendered as links.
fn render_sitemap() -> String {
    let items: String = ENDPOINTS
        .iter()
        .map(|(method, path)| {
            if *method == "GET" && !path.contains('{') {
                format!("<li>{method} <a href=\"{path}\">{path}</a></li>")
            } else {
                format!("<li>{method} {path}</li>")
            }
        })
        .collect();

    format!(
        "<div style=\"text-align: center;\"><h1>Star Wars API</h1>\
         <p>Available endpoints:</p><ul style=\"text-align: left;\">{items}</ul></div>"
    )
}
