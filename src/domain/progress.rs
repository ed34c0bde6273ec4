// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Progress, D-day, and home-screen phase rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::models::{Challenge, Commit, HomeView};

/// Progress both partners need to reach for the flowers to bloom.
pub const BLOOM_THRESHOLD: f32 = 0.8;

/// Both partners bloom when each reached [`BLOOM_THRESHOLD`].
pub fn is_both_bloom(my_progress: f32, partner_progress: f32) -> bool {
    my_progress >= BLOOM_THRESHOLD && partner_progress >= BLOOM_THRESHOLD
}

/// Fraction of challenge days covered by `commit_days`, clamped to `[0, 1]`.
pub fn progress(commit_days: u32, total_days: u32) -> f32 {
    if total_days == 0 {
        return 0.0;
    }
    (commit_days as f32 / total_days as f32).clamp(0.0, 1.0)
}

/// Progress of one partner from their commit list.
///
/// Only distinct days inside the challenge span count.
pub fn progress_from_commits(challenge: &Challenge, commits: &[Commit]) -> f32 {
    let days: HashSet<NaiveDate> = commits
        .iter()
        .map(|c| c.created_date)
        .filter(|d| challenge.contains(*d))
        .collect();
    progress(days.len() as u32, challenge.total_days())
}

/// Whole days left until the end date; 0 once finished or past.
pub fn d_day(end_date: NaiveDate, is_finished: bool, today: NaiveDate) -> u32 {
    if is_finished {
        return 0;
    }
    let days = (end_date - today).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Which partners committed today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthType {
    AuthNothing,
    AuthOnlyMe,
    AuthOnlyPartner,
    AuthBoth,
}

impl AuthType {
    pub fn from_commits(mine: bool, partner: bool) -> Self {
        match (mine, partner) {
            (true, true) => AuthType::AuthBoth,
            (true, false) => AuthType::AuthOnlyMe,
            (false, true) => AuthType::AuthOnlyPartner,
            (false, false) => AuthType::AuthNothing,
        }
    }
}

/// Phase of a running challenge on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengePhase {
    /// Waiting for at least one partner's proof today
    Auth,
    /// Both committed today; time to cheer
    Cheer,
    /// Finished, or the end date has passed
    Complete,
}

/// Phase of `view`'s running challenge, `None` when nothing is running.
pub fn challenge_phase(view: &HomeView, today: NaiveDate) -> Option<ChallengePhase> {
    let challenge = view.ongoing.as_ref()?;
    if challenge.is_over(today) {
        return Some(ChallengePhase::Complete);
    }
    match auth_type(view, today) {
        AuthType::AuthBoth => Some(ChallengePhase::Cheer),
        _ => Some(ChallengePhase::Auth),
    }
}

/// Who committed today, ignoring commits from other days.
pub fn auth_type(view: &HomeView, today: NaiveDate) -> AuthType {
    let committed_today =
        |commit: &Option<Commit>| commit.as_ref().is_some_and(|c| c.created_date == today);
    AuthType::from_commits(
        committed_today(&view.my_commit),
        committed_today(&view.partner_commit),
    )
}

/// Progress of both partners in `view`'s running challenge.
pub fn home_progress(view: &HomeView) -> (f32, f32) {
    match &view.ongoing {
        Some(challenge) => {
            let total = challenge.total_days();
            (
                progress(view.my_commit_count, total),
                progress(view.partner_commit_count, total),
            )
        }
        None => (0.0, 0.0),
    }
}
