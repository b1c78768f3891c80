//! The JSONP tile endpoint.
//!
//! Serves `GET /verb-import-game` for the crowdsourcing platform:
//! `action=desc` returns the game descriptor, `action=tiles&num=N` returns a
//! batch of tiles, `action=log_action` reports reviewer decisions back.
//! Every reply is wrapped in the caller's `callback` parameter, content type
//! `text/javascript`.
//!
//! `tiny_http::recv` blocks, so the accept loop runs in `spawn_blocking` and
//! bridges to the async collaborators with `Handle::block_on`.

use std::collections::HashMap;

use lex_core::source::{ExclusionLog, ExistenceIndex};
use lex_infer::Conjugator;
use serde_json::json;

use crate::builder::TileBuilder;
use crate::error::TileError;
use crate::model::GameDescriptor;

/// Tiles handed out per request at most, whatever `num` asks for.
pub const DEFAULT_MAX_TILES: usize = 50;

const GAME_PATH: &str = "/verb-import-game";

/// The embedded HTTP server around a [`TileBuilder`].
#[derive(Debug)]
pub struct TileServer<X, C, L> {
    builder: TileBuilder<X, C, L>,
    descriptor: GameDescriptor,
    max_tiles: usize,
}

struct Reply {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl Reply {
    fn jsonp(callback: &str, body: &serde_json::Value) -> Self {
        Self {
            status: 200,
            content_type: "text/javascript",
            body: format!("{callback}({body})"),
        }
    }

    fn bad_request(body: &str) -> Self {
        Self {
            status: 400,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "text/plain",
            body: "not found".to_string(),
        }
    }
}

impl<X, C, L> TileServer<X, C, L>
where
    X: ExistenceIndex + Send + 'static,
    C: Conjugator + Send + 'static,
    L: ExclusionLog + Send + 'static,
{
    pub fn new(builder: TileBuilder<X, C, L>, max_tiles: usize) -> Self {
        Self {
            builder,
            descriptor: GameDescriptor::default(),
            max_tiles,
        }
    }

    /// Bind `port` and serve until the process is stopped.
    ///
    /// # Errors
    ///
    /// [`TileError::Bind`] when the port is unavailable, [`TileError`] from
    /// the builder's collaborators when a request cannot be answered.
    pub async fn serve(self, port: u16) -> Result<(), TileError> {
        let server = tiny_http::Server::http(("0.0.0.0", port))
            .map_err(|error| TileError::Bind(error.to_string()))?;
        tracing::info!(port, "tile server listening");

        let handle = tokio::runtime::Handle::current();
        tokio::task::spawn_blocking(move || self.accept_loop(&server, &handle))
            .await
            .map_err(|error| TileError::Serve(error.to_string()))?
    }

    fn accept_loop(
        mut self,
        server: &tiny_http::Server,
        handle: &tokio::runtime::Handle,
    ) -> Result<(), TileError> {
        loop {
            let request = server
                .recv()
                .map_err(|error| TileError::Serve(error.to_string()))?;
            let reply = handle.block_on(self.reply_for(request.url()))?;

            let response = tiny_http::Response::from_string(reply.body)
                .with_status_code(reply.status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", reply.content_type).unwrap(),
                );
            if let Err(error) = request.respond(response) {
                tracing::warn!(%error, "failed to send response");
            }
        }
    }

    async fn reply_for(&mut self, url: &str) -> Result<Reply, TileError> {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        if path != GAME_PATH {
            return Ok(Reply::not_found());
        }
        let params = parse_query(query);
        let Some(callback) = params.get("callback") else {
            return Ok(Reply::bad_request("callback required"));
        };

        match params.get("action").map(String::as_str) {
            Some("desc") => Ok(Reply::jsonp(
                callback,
                &serde_json::to_value(&self.descriptor)
                    .unwrap_or_else(|_| json!({})),
            )),
            Some("tiles") => {
                let requested = params
                    .get("num")
                    .and_then(|num| num.parse::<usize>().ok())
                    .unwrap_or(0);
                let mut tiles = Vec::new();
                for _ in 0..requested.min(self.max_tiles) {
                    match self.builder.next_tile().await? {
                        Some(tile) => tiles.push(tile),
                        None => break,
                    }
                }
                tracing::debug!(
                    served = tiles.len(),
                    pending = self.builder.pending(),
                    "served tile batch"
                );
                Ok(Reply::jsonp(callback, &json!({ "tiles": tiles })))
            }
            Some("log_action") => {
                if params.get("decision").map(String::as_str) == Some("no") {
                    if let Some(verb) = params
                        .get("tile")
                        .and_then(|tile| tile.split('-').nth(1))
                        .filter(|verb| !verb.is_empty())
                    {
                        self.builder.reject_reviewed(verb)?;
                    }
                }
                Ok(Reply::jsonp(callback, &json!({})))
            }
            _ => Ok(Reply::bad_request("action not supported")),
        }
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter_map(|(key, value)| {
            let value = urlencoding::decode(value).ok()?;
            Some((key.to_string(), value.into_owned()))
        })
        .collect()
}
