// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Commit (daily proof) model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A daily proof-of-completion submitted by one partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub commit_no: u64,
    /// Author, when the backend reports it
    pub user_no: Option<u64>,
    pub text: String,
    /// URL of the proof photo
    pub image_url: String,
    /// Calendar day the commit was created
    pub created_date: NaiveDate,
    /// Cheer left by the other partner
    pub cheer_text: Option<String>,
}

impl Commit {
    /// Whether a non-blank cheer is attached.
    pub fn has_cheer(&self) -> bool {
        self.cheer_text
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }

    pub fn summary(&self) -> CommitSummary {
        CommitSummary {
            commit_no: self.commit_no,
            text: self.text.clone(),
            image_url: self.image_url.clone(),
            cheer_text: self.cheer_text.clone(),
        }
    }
}

/// The part of a commit shown in a history timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct CommitSummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub commit_no: u64,
    pub text: String,
    pub image_url: String,
    pub cheer_text: Option<String>,
}

/// Proof photo attached to a new commit.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// A new commit to upload.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CommitRequest {
    pub challenge_no: u64,
    #[validate(length(min = 1, max = 100))]
    pub text: String,
    pub image: ImagePayload,
}

/// Cheer text for a partner's commit.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheerRequest {
    #[validate(length(min = 1, max = 100))]
    pub text: String,
}

impl CheerRequest {
    /// Build a request from user input, trimming surrounding whitespace.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
        }
    }
}
