// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Challenge history timeline.
//!
//! Merges the two partners' commit streams into one slot per calendar day
//! of the challenge's active range, newest day first. Days nobody committed
//! on still get a slot with both sides empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::domain::models::{ChallengeDetail, Commit, CommitSummary};
use crate::time_utils::days_newest_first;

/// One calendar day of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct DaySlot {
    /// Serialized as `YYYY-MM-DD`
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub mine: Option<CommitSummary>,
    pub partner: Option<CommitSummary>,
}

impl DaySlot {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            mine: None,
            partner: None,
        }
    }

    /// Neither partner committed on this day.
    pub fn is_empty(&self) -> bool {
        self.mine.is_none() && self.partner.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.mine.is_some() && self.partner.is_some()
    }
}

/// Inputs of a reconciliation, borrowed from an already-fetched detail.
#[derive(Debug, Clone, Copy)]
pub struct HistoryInput<'a> {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_finished: bool,
    pub my_commits: &'a [Commit],
    pub partner_commits: &'a [Commit],
}

impl<'a> From<&'a ChallengeDetail> for HistoryInput<'a> {
    fn from(detail: &'a ChallengeDetail) -> Self {
        Self {
            start_date: detail.challenge.start_date,
            end_date: detail.challenge.end_date,
            is_finished: detail.challenge.is_finished,
            my_commits: &detail.my_commits,
            partner_commits: &detail.partner_commits,
        }
    }
}

/// Build the timeline for `input`, newest day first.
///
/// The active range runs from `start_date` to `end_date` when the challenge
/// is finished, otherwise to `today`. Commits are matched to days by their
/// creation date; the first commit of a side on a given day wins. Commits
/// outside the range are ignored. An active range ending before
/// `start_date` yields no slots.
pub fn reconcile(input: HistoryInput<'_>, today: NaiveDate) -> Vec<DaySlot> {
    let range_end = if input.is_finished {
        input.end_date
    } else {
        today
    };

    let mine = index_by_day(input.my_commits);
    let partner = index_by_day(input.partner_commits);

    days_newest_first(input.start_date, range_end)
        .into_iter()
        .map(|date| {
            let mut slot = DaySlot::empty(date);
            slot.mine = mine.get(&date).map(|c| c.summary());
            slot.partner = partner.get(&date).map(|c| c.summary());
            slot
        })
        .collect()
}

/// Reconcile a fetched challenge detail.
pub fn reconcile_detail(detail: &ChallengeDetail, today: NaiveDate) -> Vec<DaySlot> {
    reconcile(HistoryInput::from(detail), today)
}

fn index_by_day(commits: &[Commit]) -> HashMap<NaiveDate, &Commit> {
    let mut by_day = HashMap::with_capacity(commits.len());
    for commit in commits {
        by_day.entry(commit.created_date).or_insert(commit);
    }
    by_day
}

/// Find a commit in the timeline by number, my side first.
///
/// Returns the day it was made, the summary, and whether it is mine.
pub fn find_commit(slots: &[DaySlot], commit_no: u64) -> Option<(NaiveDate, &CommitSummary, bool)> {
    let on_side = |mine: bool| {
        slots.iter().find_map(|s| {
            let side = if mine { &s.mine } else { &s.partner };
            side.as_ref()
                .filter(|c| c.commit_no == commit_no)
                .map(|c| (s.date, c, mine))
        })
    };
    on_side(true).or_else(|| on_side(false))
}
