use std::sync::Arc;

use tiny_http::{Header, Request, Response, Server};

use super::{route, AppState};

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

const CORS_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

pub fn bind(addr: &str) -> Result<Server, ServeError> {
    Server::http(addr).map_err(|e| ServeError::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    })
}

/// Answer requests one at a time until the listener shuts down.
pub fn run(state: Arc<AppState>, server: Server) {
    for request in server.incoming_requests() {
        handle(&state, request);
    }
}

/// Bind and serve; blocks for the life of the process.
pub fn serve(state: Arc<AppState>, addr: &str) -> Result<(), ServeError> {
    let server = bind(addr)?;
    tracing::info!(addr, "listening");
    run(state, server);
    Ok(())
}

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn handle(state: &AppState, request: Request) {
    let method = request.method().clone();
    let url = request.url().to_string();
    let routed = route(state, &method, &url);
    tracing::debug!(%method, url = %url, status = routed.status, "request");

    let has_body = routed.body.is_some();
    let body = routed.body.map(|v| v.to_string()).unwrap_or_default();
    let mut response = Response::from_string(body).with_status_code(routed.status);
    let content_type = has_body.then_some(("Content-Type", "application/json"));
    for (name, value) in CORS_HEADERS.iter().copied().chain(content_type) {
        if let Some(h) = header(name, value) {
            response.add_header(h);
        }
    }
    if let Err(e) = request.respond(response) {
        tracing::warn!(url = %url, error = %e, "failed to send response");
    }
}
