// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Home screen snapshot.

use serde::{Deserialize, Serialize};

use super::{Challenge, Commit};

/// Where the pair stands when no challenge is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeforeChallengeState {
    /// No challenge yet
    Empty,
    /// I sent a challenge and wait for the partner
    Request,
    /// The partner sent a challenge I can approve
    Response,
    /// The last challenge just ended
    Termination,
}

/// Everything the home screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    /// Running challenge, if any
    pub ongoing: Option<Challenge>,
    /// State shown when `ongoing` is `None`
    pub before_state: BeforeChallengeState,
    /// My commit for today
    pub my_commit: Option<Commit>,
    /// Partner's commit for today
    pub partner_commit: Option<Commit>,
    /// Total commits I made in the running challenge
    pub my_commit_count: u32,
    /// Total commits the partner made in the running challenge
    pub partner_commit_count: u32,
    /// Ordinal of the running challenge for this pair
    pub challenge_count: u32,
    /// Stings I may still send today
    pub sting_count: u32,
}
