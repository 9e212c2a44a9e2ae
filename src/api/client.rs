//! HTTP client for the decision backend
//!
//! Thin typed wrapper over `reqwest`. Every call follows the same shape:
//! send, check the status, decode. A non-2xx answer becomes an
//! `Error::ApiStatus` carrying the code and canonical reason text; the
//! backend's error bodies are not assumed to have any structure.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

use super::types::{
    ApprovalDecision, ApprovalRequest, ApprovalStatus, ChatMessage, DecisionSummary,
    NewChatMessage, WhitePaper, WhitePaperSection,
};

/// Typed client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct DecisionClient {
    http: reqwest::Client,
    base_url: String,
}

impl DecisionClient {
    /// Build a client with the given request timeout. The base URL is
    /// stored without a trailing slash so path joins stay predictable.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::api_request(base_url, e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, project_id: &str, suffix: &str) -> String {
        format!("{}/api/decisions/{}/{}", self.base_url, project_id, suffix)
    }

    // ─────────────────────────────────────────────────────────────
    // Request Plumbing
    // ─────────────────────────────────────────────────────────────

    async fn get_json<T: DeserializeOwned>(&self, operation: &'static str, url: &str) -> Result<T> {
        debug!(%url, operation, "GET");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::api_request(url, e.to_string()))?;
        Self::decode(operation, resp).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T> {
        debug!(%url, operation, method = %method, "request");
        let mut req = self.http.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| Error::api_request(url, e.to_string()))?;
        Self::decode(operation, resp).await
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        resp: reqwest::Response,
    ) -> Result<T> {
        if !resp.status().is_success() {
            return Err(Error::api_status(operation, resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| Error::ApiDecode {
                operation,
                message: e.to_string(),
            })
    }

    // ─────────────────────────────────────────────────────────────
    // Decision Summary
    // ─────────────────────────────────────────────────────────────

    pub async fn fetch_summary(&self, project_id: &str) -> Result<DecisionSummary> {
        let url = self.url(project_id, "summary");
        self.get_json("fetch decision summary", &url).await
    }

    pub async fn update_summary(
        &self,
        project_id: &str,
        summary: &DecisionSummary,
    ) -> Result<DecisionSummary> {
        let url = self.url(project_id, "summary");
        self.send_json(
            "update decision summary",
            reqwest::Method::PUT,
            &url,
            Some(summary),
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────────

    pub async fn fetch_chat(&self, project_id: &str) -> Result<Vec<ChatMessage>> {
        let url = self.url(project_id, "chat");
        self.get_json("fetch chat messages", &url).await
    }

    pub async fn send_chat_message(
        &self,
        project_id: &str,
        message: &NewChatMessage,
    ) -> Result<ChatMessage> {
        let url = self.url(project_id, "chat");
        self.send_json(
            "send chat message",
            reqwest::Method::POST,
            &url,
            Some(message),
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────
    // White Paper
    // ─────────────────────────────────────────────────────────────

    pub async fn fetch_white_paper(&self, project_id: &str) -> Result<WhitePaper> {
        let url = self.url(project_id, "white-paper");
        self.get_json("fetch white paper", &url).await
    }

    pub async fn update_section(
        &self,
        project_id: &str,
        section_id: &str,
        content: &str,
    ) -> Result<WhitePaperSection> {
        let url = self.url(project_id, &format!("white-paper/sections/{}", section_id));
        let body = serde_json::json!({ "content": content });
        self.send_json(
            "update white paper section",
            reqwest::Method::PUT,
            &url,
            Some(&body),
        )
        .await
    }

    pub async fn generate_white_paper(&self, project_id: &str) -> Result<WhitePaper> {
        let url = self.url(project_id, "white-paper/generate");
        self.send_json::<(), _>("generate white paper", reqwest::Method::POST, &url, None)
            .await
    }

    pub async fn save_draft(&self, project_id: &str, paper: &WhitePaper) -> Result<WhitePaper> {
        let url = self.url(project_id, "white-paper/draft");
        self.send_json(
            "save white paper draft",
            reqwest::Method::PUT,
            &url,
            Some(paper),
        )
        .await
    }

    /// Export the white paper as PDF bytes. The only non-JSON endpoint.
    pub async fn export_pdf(&self, project_id: &str) -> Result<Vec<u8>> {
        let url = self.url(project_id, "white-paper/export/pdf");
        debug!(%url, "POST export pdf");
        let resp = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| Error::api_request(&url, e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Error::api_status("export white paper", resp.status()));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Error::ApiDecode {
                operation: "export white paper",
                message: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }

    // ─────────────────────────────────────────────────────────────
    // Approval
    // ─────────────────────────────────────────────────────────────

    pub async fn submit_for_approval(
        &self,
        request: &ApprovalRequest,
    ) -> Result<ApprovalDecision> {
        let url = self.url(&request.project_id, "approval");
        self.send_json(
            "submit for approval",
            reqwest::Method::POST,
            &url,
            Some(request),
        )
        .await
    }

    pub async fn fetch_approval_status(&self, project_id: &str) -> Result<ApprovalStatus> {
        let url = self.url(project_id, "approval/status");
        self.get_json("fetch approval status", &url).await
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DecisionClient::new("http://localhost:3005/", 30).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3005");
        assert_eq!(
            client.url("proj-001", "summary"),
            "http://localhost:3005/api/decisions/proj-001/summary"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_request_error() {
        // Port 1 refuses connections immediately
        let client = DecisionClient::new("http://127.0.0.1:1", 2).unwrap();
        let err = client.fetch_summary("proj-001").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApiRequestFailed);
    }

    #[tokio::test]
    async fn test_write_endpoints_surface_request_errors() {
        let client = DecisionClient::new("http://127.0.0.1:1", 2).unwrap();

        let summary = DecisionSummary::default();
        let err = client.update_summary("p1", &summary).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApiRequestFailed);

        let err = client.update_section("p1", "s1", "revised").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApiRequestFailed);

        let paper = WhitePaper::default();
        let err = client.save_draft("p1", &paper).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApiRequestFailed);
    }

    #[test]
    fn test_nested_section_url() {
        let client = DecisionClient::new("http://localhost:3005", 30).unwrap();
        assert_eq!(
            client.url("p1", &format!("white-paper/sections/{}", "s2")),
            "http://localhost:3005/api/decisions/p1/white-paper/sections/s2"
        );
    }
}
