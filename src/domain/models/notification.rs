// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Sting (poke) notifications.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A sting delivered to the partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub notification_no: u64,
    pub receiver_no: u64,
    pub message: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}

/// Request body for stinging the partner.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct StingRequest {
    #[validate(length(min = 1, max = 100))]
    pub message: String,
}
