//! Storefront page workload.
//!
//! Serves the catalog page at `/`. The view state (category, search,
//! open product, gallery angle, sidebar, alert) is decoded from the query
//! string, so every click on the page is a plain navigation to the next
//! state.
//!
//! The shell is sent first, then each section as it is written out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Once;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use vitrine_commerce::catalog::Catalog;
use vitrine_commerce::config::StoreConfig;
use vitrine_render::{PageQuery, Storefront, PAGE_PATH};

static TRACING: Once = Once::new();
static REQUEST_SEQ: AtomicU64 = AtomicU64::new(0);

/// Storefront page handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    init_tracing();
    let started = Instant::now();
    let request_id = generate_request_id();
    let path_with_query = req.path_with_query().unwrap_or_default();

    let query_string = match route(req.method() == Method::Get, &path_with_query) {
        Route::Page { query } => query,
        other => {
            tracing::info!(
                request_id = %request_id,
                path = %path_with_query,
                status = other.status(),
                "request rejected"
            );
            respond_status(response_out, other.status(), &request_id);
            return;
        }
    };

    let catalog = Catalog::builtin();
    let config = StoreConfig::default();
    let storefront = Storefront::new(&catalog, &config);
    let state = PageQuery::from_query_string(query_string)
        .into_state(config.display.sidebar_breakpoint_px);

    // Render before committing the status so failures can still be a 500.
    let sections = match storefront.render_sections(&state) {
        Ok(sections) => sections,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "failed to render page");
            respond_status(response_out, 500, &request_id);
            return;
        }
    };
    let shell = storefront.create_shell(&state);

    let response = OutgoingResponse::new(build_headers(&response_headers(true, &request_id)));
    if response.set_status_code(200).is_err() {
        tracing::warn!(request_id = %request_id, "failed to set status code");
    }

    let mut body = response.take_body();
    response_out.set(response);

    // Send shell first
    if let Err(e) = body.send(shell.render_opening().into_bytes()).await {
        tracing::warn!(request_id = %request_id, error = %e, "failed to send shell");
        return;
    }

    for section in sections.into_iter().filter(|s| !s.is_empty()) {
        let mut chunk = section.html.into_bytes();
        chunk.push(b'\n');
        if let Err(e) = body.send(chunk).await {
            tracing::warn!(request_id = %request_id, section = section.name, error = %e, "failed to send section");
            return;
        }
    }

    if let Err(e) = body.send(shell.render_closing().into_bytes()).await {
        tracing::warn!(request_id = %request_id, error = %e, "failed to send closing");
        return;
    }

    tracing::info!(
        request_id = %request_id,
        path = %path_with_query,
        status = 200,
        category = %state.active_category,
        searching = state.listing_query().is_searching(),
        detail_open = state.detail_open(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );
}

/// Log to stderr, which Spin captures per component.
fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn respond_status(response_out: ResponseOutparam, status: u16, request_id: &str) {
    let response = OutgoingResponse::new(build_headers(&response_headers(false, request_id)));
    if response.set_status_code(status).is_err() {
        tracing::warn!(request_id = %request_id, status, "failed to set status code");
    }
    response_out.set(response);
}

/// What to do with a request, decided from its method and target alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    /// Render the page for this raw query string.
    Page { query: &'a str },
    MethodNotAllowed,
    NotFound,
}

impl Route<'_> {
    fn status(&self) -> u16 {
        match self {
            Route::Page { .. } => 200,
            Route::MethodNotAllowed => 405,
            Route::NotFound => 404,
        }
    }
}

fn route(is_get: bool, path_with_query: &str) -> Route<'_> {
    if !is_get {
        return Route::MethodNotAllowed;
    }
    let (path, query) = split_path_query(path_with_query);
    if path != PAGE_PATH {
        return Route::NotFound;
    }
    Route::Page { query }
}

/// Every response carries `x-request-id`; only the page has a body type.
fn response_headers(html: bool, request_id: &str) -> Vec<(String, Vec<u8>)> {
    let mut headers = Vec::with_capacity(2);
    if html {
        headers.push(("content-type".to_owned(), b"text/html; charset=utf-8".to_vec()));
    }
    headers.push(("x-request-id".to_owned(), request_id.as_bytes().to_vec()));
    headers
}

fn build_headers(header_list: &[(String, Vec<u8>)]) -> Fields {
    Fields::from_list(header_list).unwrap_or_else(|e| {
        tracing::warn!(error = ?e, "invalid response headers, sending none");
        Fields::new()
    })
}

/// Split `/path?query` into the path and the raw query (without `?`).
fn split_path_query(path_with_query: &str) -> (&str, &str) {
    match path_with_query.split_once('?') {
        Some((path, query)) => (if path.is_empty() { PAGE_PATH } else { path }, query),
        None if path_with_query.is_empty() => (PAGE_PATH, ""),
        None => (path_with_query, ""),
    }
}

/// Time-based id with a per-instance sequence number.
fn generate_request_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seq = REQUEST_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{:x}-{:04x}", nanos, seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_query() {
        assert_eq!(split_path_query("/?cat=xiaomi&q=poco"), ("/", "cat=xiaomi&q=poco"));
        assert_eq!(split_path_query("/"), ("/", ""));
        assert_eq!(split_path_query(""), ("/", ""));
        assert_eq!(split_path_query("?menu=1"), ("/", "menu=1"));
        assert_eq!(split_path_query("/favicon.ico"), ("/favicon.ico", ""));
    }

    #[test]
    fn test_route_page() {
        assert_eq!(
            route(true, "/?cat=xiaomi&menu=1"),
            Route::Page { query: "cat=xiaomi&menu=1" }
        );
        assert_eq!(route(true, ""), Route::Page { query: "" });
        assert_eq!(route(true, "/").status(), 200);
    }

    #[test]
    fn test_route_rejects_other_methods() {
        assert_eq!(route(false, "/"), Route::MethodNotAllowed);
        // Method is checked before the path.
        assert_eq!(route(false, "/favicon.ico").status(), 405);
    }

    #[test]
    fn test_route_unknown_path() {
        assert_eq!(route(true, "/favicon.ico"), Route::NotFound);
        assert_eq!(route(true, "/products?cat=xiaomi").status(), 404);
    }

    #[test]
    fn test_response_headers() {
        let page = response_headers(true, "abc-0001");
        assert_eq!(
            page,
            vec![
                ("content-type".to_owned(), b"text/html; charset=utf-8".to_vec()),
                ("x-request-id".to_owned(), b"abc-0001".to_vec()),
            ]
        );

        let status_only = response_headers(false, "abc-0002");
        assert_eq!(status_only, vec![("x-request-id".to_owned(), b"abc-0002".to_vec())]);
    }

    #[test]
    fn test_request_ids_are_distinct() {
        assert_ne!(generate_request_id(), generate_request_id());
    }
}
