//! Typed HTTP client for the TaDevOpsit API
//!
//! One method per endpoint, each returning the parsed entity.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use tadevopsit_server::models::{ProgressEntry, ProgressUpdate, Quote, Tool};

/// Default API base, matching a locally running `tadevopsit serve`
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api";

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// `GET /health` body
#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// API client bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .with_context(|| format!("Failed to connect to API at {}", self.base))?;
        handle_response(response).await
    }

    async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .put(self.url(path))
            .send()
            .await
            .with_context(|| format!("Failed to connect to API at {}", self.base))?;
        handle_response(response).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }

    pub async fn list_progress(&self) -> Result<Vec<ProgressEntry>> {
        self.get("/progress").await.context("Failed to fetch progress")
    }

    pub async fn update_progress(&self, day: i32, update: &ProgressUpdate) -> Result<ProgressEntry> {
        let response = self
            .http
            .put(self.url(&format!("/progress/{}", day)))
            .json(update)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API at {}", self.base))?;
        handle_response(response)
            .await
            .context("Failed to update progress")
    }

    pub async fn list_quotes(&self) -> Result<Vec<Quote>> {
        self.get("/quotes").await.context("Failed to fetch quotes")
    }

    /// `None` when the server has no quotes (204)
    pub async fn random_quote(&self) -> Result<Option<Quote>> {
        let response = self
            .http
            .get(self.url("/quotes/random"))
            .send()
            .await
            .with_context(|| format!("Failed to connect to API at {}", self.base))?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        handle_response(response)
            .await
            .map(Some)
            .context("Failed to fetch random quote")
    }

    pub async fn favorite_quote(&self, id: i32) -> Result<Quote> {
        self.put(&format!("/quotes/{}/favorite", id))
            .await
            .context("Failed to favorite quote")
    }

    pub async fn list_tools(&self) -> Result<Vec<Tool>> {
        self.get("/voting").await.context("Failed to fetch tools")
    }

    pub async fn vote_tool(&self, id: i32) -> Result<Tool> {
        self.put(&format!("/voting/{}/vote", id))
            .await
            .context("Failed to vote for tool")
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.context("Failed to parse response")
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(anyhow!(error_message(status, &error_text)))
    }
}

/// `"<status>: <server error>"`, falling back to the raw body
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_resp) => format!("{}: {}", status, error_resp.error),
        Err(_) => format!("{}: {}", status, body),
    }
}
