//! JSON HTTP API over the shared vocabulary.
//!
//! [`route`] maps a method and path to a status and body without touching
//! the network; [`server`] drives it from a `tiny_http` listener.

mod server;
mod types;

pub use server::{bind, run, serve, ServeError};
pub use types::{
    format_timestamp, ErrorResponse, HaikuResponse, ScrapeResponse, StatsResponse, WordRecord,
    WordsResponse,
};

use serde::Serialize;
use tiny_http::Method;

use crate::harvest::{read_vocab, write_vocab, HarvestWorker, SharedVocabulary};

/// Everything a request handler needs.
pub struct AppState {
    pub vocab: SharedVocabulary,
    pub worker: HarvestWorker,
}

/// A routed response: status code plus optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl ApiResponse {
    fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                status,
                body: Some(value),
            },
            Err(e) => Self::error(500, &format!("serialization failed: {e}")),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        let body = ErrorResponse {
            error: message.to_string(),
        };
        Self {
            status,
            body: serde_json::to_value(&body).ok(),
        }
    }

    fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }
}

// (path, allowed method)
const ROUTES: &[(&str, Method)] = &[
    ("/api/words", Method::Get),
    ("/api/haiku", Method::Get),
    ("/api/scrape", Method::Post),
    ("/api/stats", Method::Get),
];

/// Dispatch one request. The query string is ignored.
pub fn route(state: &AppState, method: &Method, url: &str) -> ApiResponse {
    let path = url.split('?').next().unwrap_or(url);

    if *method == Method::Options {
        return ApiResponse::no_content();
    }
    let Some((_, allowed)) = ROUTES.iter().find(|(p, _)| *p == path) else {
        return ApiResponse::error(404, "not found");
    };
    if method != allowed {
        return ApiResponse::error(405, "method not allowed");
    }

    match path {
        "/api/words" => words(state),
        "/api/haiku" => haiku(state),
        "/api/scrape" => scrape(state),
        _ => stats(state),
    }
}

fn words(state: &AppState) -> ApiResponse {
    let vocab = read_vocab(&state.vocab);
    let words: Vec<WordRecord> = vocab.entries().into_iter().map(WordRecord::from).collect();
    let body = WordsResponse {
        total: words.len(),
        used: vocab.used_count(),
        words,
    };
    ApiResponse::json(200, &body)
}

fn haiku(state: &AppState) -> ApiResponse {
    let haiku = {
        let mut vocab = write_vocab(&state.vocab);
        ku_core::generate(&mut vocab, &mut rand::rng())
    };
    ApiResponse::json(200, &HaikuResponse::from(haiku))
}

fn scrape(state: &AppState) -> ApiResponse {
    let run = state.worker.submit();
    tracing::info!(run, "harvest requested");
    ApiResponse::json(200, &ScrapeResponse::started())
}

fn stats(state: &AppState) -> ApiResponse {
    let stats = read_vocab(&state.vocab).stats();
    ApiResponse::json(200, &StatsResponse::from(stats))
}
