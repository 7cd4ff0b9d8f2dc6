use axum::extract::Request;
use axum::http::header::LINK;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

/// Flow screens the client walks through, in declared order.
pub const FLOW_ROUTES: [&str; 8] = [
    "/welcome",
    "/capture",
    "/processing",
    "/results",
    "/dish-detail",
    "/translate",
    "/filters",
    "/share",
];

pub fn link_header_value() -> String {
    FLOW_ROUTES
        .iter()
        .map(|route| format!("<{}>; rel=prefetch", route))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Best-effort hint layer: only successful responses carry the hint, and a
/// header that fails to build is dropped silently; the wrapped response
/// passes through untouched either way.
pub async fn link_hints(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    if response.status().is_success() {
        if let Ok(value) = HeaderValue::from_str(&link_header_value()) {
            response.headers_mut().append(LINK, value);
        }
    }
    response
}
