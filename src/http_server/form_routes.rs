//! Form echo page
//!
//! Renders the decoded fields of a submitted form back as HTML. GET reads
//! the query string; other methods read the body as urlencoded pairs
//! whatever its declared content type.

use axum::{
    body::Bytes,
    http::{Method, Uri},
    response::Html,
    routing::get,
    Router,
};
use url::form_urlencoded;

pub fn form_routes() -> Router {
    Router::new().route(
        "/form",
        get(echo_handler)
            .post(echo_handler)
            .put(echo_handler)
            .patch(echo_handler)
            .delete(echo_handler),
    )
}

async fn echo_handler(method: Method, uri: Uri, body: Bytes) -> Html<String> {
    let raw: &[u8] = if method == Method::GET {
        uri.query().unwrap_or_default().as_bytes()
    } else {
        &body
    };

    Html(render_echo_page(method.as_str(), &decode_fields(raw)))
}

/// Decode `a=1&b=2` pairs; a key without `=` gets an empty value
pub fn decode_fields(raw: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(raw)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

/// Render the echo page for the given method and fields
pub fn render_echo_page(method: &str, fields: &[(String, String)]) -> String {
    let items: String = fields
        .iter()
        .map(|(name, value)| format!("<li>{}: {}</li>", escape_html(name), escape_html(value)))
        .collect();

    format!(
        "<!DOCTYPE html><html><body>\
         <button onclick=\"window.history.back()\">&larr; Back</button>\
         <p>Success! The server got your form.</p>\
         <p>Method: {}</p><p>Fields:</p><ul>{}</ul>\
         </body></html>",
        escape_html(&method.to_ascii_lowercase()),
        items
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
