//! # luis-botmock
//!
//! Botmock API client. Fetches the assets a LUIS export needs and assembles
//! them into a [`luis_core::Project`].
//!
//! Progress is reported through an optional unbounded channel of
//! [`FetchEvent`]s; failures are always returned as [`BotmockError`].

mod error;
mod http;

pub use error::BotmockError;

use std::fmt;
use std::time::Duration;

use luis_config::BotmockConfig;
use luis_core::{Intent, Project, Variable};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tokio::sync::mpsc::UnboundedSender;

use crate::http::check_response;

// ── Types ──────────────────────────────────────────────────────────

/// One Botmock resource fetched during an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Project,
    Intents,
    Variables,
    Board,
}

impl Asset {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Intents => "intents",
            Self::Variables => "variables",
            Self::Board => "board",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress notification emitted while fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    AssetFetched { asset: Asset },
    Failed { asset: Asset, message: String },
}

/// Project metadata; the rest of the payload is ignored.
#[derive(Debug, Deserialize)]
struct ProjectMeta {
    name: String,
    #[serde(default)]
    platform: String,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one Botmock project.
#[derive(Debug, Clone)]
pub struct BotmockClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    team_id: String,
    project_id: String,
    board_id: Option<String>,
}

impl BotmockClient {
    /// Create a client for the project named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BotmockError::NotConfigured`] if the token, team id, or
    /// project id is missing, and [`BotmockError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(config: &BotmockConfig) -> Result<Self, BotmockError> {
        config.require()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("botmock-luis/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.trim().to_string(),
            team_id: config.team_id.trim().to_string(),
            project_id: config.project_id.trim().to_string(),
            board_id: config.board().map(str::to_string),
        })
    }

    /// Fetch the project, its intents and variables, and the board if one is
    /// configured. Requests run concurrently; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns [`BotmockError`] if any request fails, Botmock returns a
    /// non-success status, or a body cannot be decoded.
    pub async fn fetch(
        &self,
        events: Option<&UnboundedSender<FetchEvent>>,
    ) -> Result<Project, BotmockError> {
        let (meta, intents, variables, ()) = tokio::try_join!(
            self.get_asset::<ProjectMeta>(Asset::Project, events),
            self.get_asset::<Vec<Intent>>(Asset::Intents, events),
            self.get_asset::<Vec<Variable>>(Asset::Variables, events),
            self.fetch_board(events),
        )?;

        Ok(Project {
            name: meta.name,
            platform: meta.platform,
            intents,
            variables,
        })
    }

    async fn fetch_board(
        &self,
        events: Option<&UnboundedSender<FetchEvent>>,
    ) -> Result<(), BotmockError> {
        if self.board_id.is_some() {
            self.get_asset::<IgnoredAny>(Asset::Board, events).await?;
        }
        Ok(())
    }

    async fn get_asset<T: DeserializeOwned>(
        &self,
        asset: Asset,
        events: Option<&UnboundedSender<FetchEvent>>,
    ) -> Result<T, BotmockError> {
        let result = self.request::<T>(asset).await;
        let event = match &result {
            Ok(_) => FetchEvent::AssetFetched { asset },
            Err(e) => FetchEvent::Failed {
                asset,
                message: e.to_string(),
            },
        };
        if let Some(tx) = events {
            // Receiver may already be gone; progress is best-effort.
            let _ = tx.send(event);
        }
        result
    }

    async fn request<T: DeserializeOwned>(&self, asset: Asset) -> Result<T, BotmockError> {
        let url = self.asset_url(asset);
        tracing::debug!(%asset, %url, "fetching botmock asset");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = check_response(resp).await?.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| BotmockError::Parse { asset, source })
    }

    fn asset_url(&self, asset: Asset) -> String {
        let project = format!(
            "{}/teams/{}/projects/{}",
            self.base_url,
            urlencoding::encode(&self.team_id),
            urlencoding::encode(&self.project_id),
        );
        match asset {
            Asset::Project => project,
            Asset::Intents => format!("{project}/intents"),
            Asset::Variables => format!("{project}/variables"),
            Asset::Board => format!(
                "{project}/boards/{}",
                urlencoding::encode(self.board_id.as_deref().unwrap_or_default())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::time::Duration;
    use tokio::sync::mpsc;

    const TOKEN: &str = "test-token";

    const PROJECT_BODY: &str = r#"{ "id": "p1", "name": "Demo", "platform": "generic", "type": "chat" }"#;

    const INTENTS_BODY: &str = r#"[
        {
            "id": "i1",
            "name": "book_flight",
            "utterances": [
                { "text": "book a %flight%", "variables": [ { "id": "v1", "name": "%flight%", "start_index": "7" } ] }
            ]
        },
        { "id": "i2", "name": "goodbye", "utterances": [] }
    ]"#;

    const VARIABLES_BODY: &str = r#"[ { "id": "v1", "name": "flight", "default_value": "" } ]"#;

    /// Serve canned JSON by path on a random local port. Requests without the
    /// expected bearer token get 401; unknown paths get 404.
    fn serve(routes: Vec<(String, u16, &'static str)>) -> String {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let routes: HashMap<String, (u16, &'static str)> = routes
            .into_iter()
            .map(|(path, status, body)| (path, (status, body)))
            .collect();

        std::thread::spawn(move || {
            while let Ok(Some(request)) = server.recv_timeout(Duration::from_secs(5)) {
                let authorized = request.headers().iter().any(|h| {
                    h.field.equiv("Authorization") && h.value.as_str() == format!("Bearer {TOKEN}")
                });
                let (status, body) = if authorized {
                    routes
                        .get(request.url())
                        .copied()
                        .unwrap_or((404, r#"{"error":"not found"}"#))
                } else {
                    (401, r#"{"error":"unauthorized"}"#)
                };
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        format!("http://127.0.0.1:{port}/api")
    }

    fn routes() -> Vec<(String, u16, &'static str)> {
        vec![
            ("/api/teams/t1/projects/p1".into(), 200, PROJECT_BODY),
            ("/api/teams/t1/projects/p1/intents".into(), 200, INTENTS_BODY),
            ("/api/teams/t1/projects/p1/variables".into(), 200, VARIABLES_BODY),
            ("/api/teams/t1/projects/p1/boards/b1".into(), 200, r#"{ "messages": [] }"#),
        ]
    }

    fn config(base_url: String) -> BotmockConfig {
        BotmockConfig {
            token: TOKEN.into(),
            team_id: "t1".into(),
            project_id: "p1".into(),
            board_id: String::new(),
            base_url,
            timeout_secs: 5,
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<FetchEvent>) -> Vec<FetchEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn new_requires_credentials() {
        let err = BotmockClient::new(&BotmockConfig::default()).unwrap_err();
        assert!(matches!(err, BotmockError::NotConfigured(_)));
    }

    #[test]
    fn asset_urls_follow_botmock_layout() {
        let mut cfg = config("https://app.botmock.com/api/".into());
        cfg.board_id = "b 1".into();
        let client = BotmockClient::new(&cfg).unwrap();
        assert_eq!(
            client.asset_url(Asset::Project),
            "https://app.botmock.com/api/teams/t1/projects/p1"
        );
        assert_eq!(
            client.asset_url(Asset::Intents),
            "https://app.botmock.com/api/teams/t1/projects/p1/intents"
        );
        assert_eq!(
            client.asset_url(Asset::Board),
            "https://app.botmock.com/api/teams/t1/projects/p1/boards/b%201"
        );
    }

    #[tokio::test]
    async fn fetch_assembles_project_and_reports_progress() {
        let client = BotmockClient::new(&config(serve(routes()))).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let project = client.fetch(Some(&tx)).await.unwrap();
        assert_eq!(project.name, "Demo");
        assert_eq!(project.platform, "generic");
        assert_eq!(project.intents.len(), 2);
        assert_eq!(project.intents[0].utterances[0].variables[0].start_index, "7");
        assert_eq!(project.variables[0].name, "flight");

        let mut fetched: Vec<_> = drain(&mut rx)
            .into_iter()
            .map(|e| match e {
                FetchEvent::AssetFetched { asset } => asset.as_str(),
                FetchEvent::Failed { asset, .. } => panic!("unexpected failure for {asset}"),
            })
            .collect();
        fetched.sort_unstable();
        assert_eq!(fetched, ["intents", "project", "variables"]);
    }

    #[tokio::test]
    async fn fetch_includes_board_when_configured() {
        let mut cfg = config(serve(routes()));
        cfg.board_id = "b1".into();
        let client = BotmockClient::new(&cfg).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        client.fetch(Some(&tx)).await.unwrap();
        let events = drain(&mut rx);
        assert!(events.contains(&FetchEvent::AssetFetched {
            asset: Asset::Board
        }));
    }

    #[tokio::test]
    async fn fetch_without_listener() {
        let client = BotmockClient::new(&config(serve(routes()))).unwrap();
        let project = client.fetch(None).await.unwrap();
        assert_eq!(project.intents[1].name, "goodbye");
    }

    #[tokio::test]
    async fn bad_token_is_unauthorized() {
        let mut cfg = config(serve(routes()));
        cfg.token = "wrong".into();
        let client = BotmockClient::new(&cfg).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let err = client.fetch(Some(&tx)).await.unwrap_err();
        assert!(matches!(err, BotmockError::Unauthorized { status: 401 }));
        assert!(
            drain(&mut rx)
                .iter()
                .any(|e| matches!(e, FetchEvent::Failed { .. }))
        );
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let mut cfg = config(serve(routes()));
        cfg.project_id = "nope".into();
        let client = BotmockClient::new(&cfg).unwrap();
        let err = client.fetch(None).await.unwrap_err();
        assert!(matches!(err, BotmockError::NotFound { .. }));
    }

    #[tokio::test]
    async fn malformed_intents_are_a_parse_error() {
        let mut routes = routes();
        routes[1].2 = r#"[ { "name": "no_utterances_field" } ]"#;
        let client = BotmockClient::new(&config(serve(routes))).unwrap();
        let err = client.fetch(None).await.unwrap_err();
        assert!(matches!(
            err,
            BotmockError::Parse {
                asset: Asset::Intents,
                ..
            }
        ));
    }
}
