// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! User model.

use serde::{Deserialize, Serialize};

/// A Twotoo user as seen from a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-side user number
    pub user_no: u64,
    /// Display nickname
    pub nickname: String,
    /// User number of the paired partner, once matched
    pub partner_no: Option<u64>,
}

/// Nicknames of both partners, from the signed-in user's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nicknames {
    pub mine: String,
    pub partner: String,
}

impl Nicknames {
    /// The same pair seen from the partner's side.
    pub fn swapped(&self) -> Self {
        Self {
            mine: self.partner.clone(),
            partner: self.mine.clone(),
        }
    }
}
