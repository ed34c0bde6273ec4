// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Twotoo REST API client.
//!
//! Thin bindings over the backend endpoints. Every call carries the user's
//! bearer token and returns transport DTOs; mapping to domain models happens
//! in the repository layer.

use reqwest::multipart::{Form, Part};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;
use crate::data::dto::{ChallengeDetailDto, ChallengeDto, CommitDto, HomeViewDto, NotificationDto};
use crate::domain::models::{
    ApproveChallengeRequest, CheerRequest, CommitRequest, CreateChallengeRequest, StingRequest,
};
use crate::error::AppError;

/// Twotoo API client.
#[derive(Clone)]
pub struct TwotooClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl TwotooClient {
    /// Create a client for the backend named in `config`.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    // ─── Challenges ──────────────────────────────────────────────────────────

    pub async fn create_challenge(
        &self,
        request: &CreateChallengeRequest,
    ) -> Result<ChallengeDto, AppError> {
        self.post_json("/challenge", request).await
    }

    pub async fn get_all_challenges(&self) -> Result<Vec<ChallengeDto>, AppError> {
        self.get_json("/challenge").await
    }

    pub async fn get_challenge(&self, challenge_no: u64) -> Result<ChallengeDetailDto, AppError> {
        self.get_json(&format!("/challenge/{}", challenge_no)).await
    }

    /// Delete a challenge. The backend answers with the deleted number.
    pub async fn delete_challenge(&self, challenge_no: u64) -> Result<u64, AppError> {
        let response = self
            .http
            .delete(self.url(&format!("/challenge/{}", challenge_no)))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    pub async fn approve_challenge(
        &self,
        challenge_no: u64,
        request: &ApproveChallengeRequest,
    ) -> Result<ChallengeDto, AppError> {
        self.post_json(&format!("/challenge/{}/approve", challenge_no), request)
            .await
    }

    pub async fn finish_challenge(&self, challenge_no: u64) -> Result<ChallengeDto, AppError> {
        self.post_json(
            &format!("/challenge/{}/finish", challenge_no),
            &serde_json::json!({}),
        )
        .await
    }

    // ─── Commits ─────────────────────────────────────────────────────────────

    /// Upload a commit as a multipart form (`text`, `challengeNo`, `img`).
    pub async fn create_commit(&self, request: &CommitRequest) -> Result<CommitDto, AppError> {
        let image = Part::bytes(request.image.bytes.clone())
            .file_name(request.image.file_name.clone())
            .mime_str(&request.image.mime_type)
            .map_err(|e| AppError::BadRequest(format!("Invalid image type: {}", e)))?;

        let form = Form::new()
            .text("text", request.text.clone())
            .text("challengeNo", request.challenge_no.to_string())
            .part("img", image);

        let response = self
            .http
            .post(self.url("/commit"))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    pub async fn get_commit(&self, commit_no: u64) -> Result<CommitDto, AppError> {
        self.get_json(&format!("/commit/{}", commit_no)).await
    }

    pub async fn cheer(
        &self,
        commit_no: u64,
        request: &CheerRequest,
    ) -> Result<CommitDto, AppError> {
        self.post_json(&format!("/commit/{}/cheer", commit_no), request)
            .await
    }

    // ─── Notifications & views ───────────────────────────────────────────────

    pub async fn sting(&self, request: &StingRequest) -> Result<NotificationDto, AppError> {
        self.post_json("/notification/sting", request).await
    }

    pub async fn get_home_view(&self) -> Result<HomeViewDto, AppError> {
        self.get_json("/view/home").await
    }

    // ─── Plumbing ────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Generic POST request with JSON body and JSON response.
    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                tracing::warn!("Twotoo API rejected the access token (401)");
            }
            return Err(AppError::from_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("JSON parse error: {}", e)))
    }
}
