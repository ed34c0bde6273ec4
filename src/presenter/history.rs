// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! History screen: challenge header, day-by-day timeline, commit detail.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::VecDeque;

use crate::domain::history::{find_commit, reconcile_detail, DaySlot};
use crate::domain::models::{
    Challenge, ChallengeDetail, CommitRequest, CommitSummary, ImagePayload, Nicknames,
};
use crate::domain::progress::{d_day, progress_from_commits};
use crate::domain::repository::{ChallengeRepository, CommitRepository};

/// Header of the history screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeInfo {
    pub challenge_no: u64,
    pub d_day: u32,
    pub name: String,
    pub description: String,
    pub my_progress: f32,
    pub partner_progress: f32,
}

/// A commit opened from the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitDetail {
    pub commit: CommitSummary,
    pub date: NaiveDate,
    /// `mine` is the commit's author
    pub nicknames: Nicknames,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryState {
    pub info: ChallengeInfo,
    pub slots: Vec<DaySlot>,
    pub nicknames: Nicknames,
    pub selected: Option<CommitDetail>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEvent {
    DetailLoaded {
        detail: ChallengeDetail,
        today: NaiveDate,
    },
    LoadFailed(String),
    CommitSelected(u64),
    CommitCreated,
    CommitFailed(String),
    QuitSucceeded,
    QuitFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HistoryToast {
    LoadFail,
    CommitSuccess,
    CommitFail,
    QuitFail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HistoryEffect {
    Toast(HistoryToast),
    /// Fetch the challenge again
    Reload(u64),
    NavigateBack,
}

/// Pure state transition of the history screen.
pub fn reduce(state: HistoryState, event: HistoryEvent) -> (HistoryState, Vec<HistoryEffect>) {
    match event {
        HistoryEvent::DetailLoaded { detail, today } => {
            let state = HistoryState {
                info: challenge_info(&detail, today),
                slots: reconcile_detail(&detail, today),
                nicknames: detail.nicknames(),
                selected: None,
            };
            (state, vec![])
        }
        HistoryEvent::LoadFailed(_) => (state, vec![HistoryEffect::Toast(HistoryToast::LoadFail)]),
        HistoryEvent::CommitSelected(commit_no) => {
            let selected = find_commit(&state.slots, commit_no).map(|(date, commit, is_mine)| {
                CommitDetail {
                    commit: commit.clone(),
                    date,
                    nicknames: if is_mine {
                        state.nicknames.clone()
                    } else {
                        state.nicknames.swapped()
                    },
                }
            });
            match selected {
                Some(detail) => (
                    HistoryState {
                        selected: Some(detail),
                        ..state
                    },
                    vec![],
                ),
                None => (state, vec![]),
            }
        }
        HistoryEvent::CommitCreated => {
            let reload = HistoryEffect::Reload(state.info.challenge_no);
            (
                state,
                vec![HistoryEffect::Toast(HistoryToast::CommitSuccess), reload],
            )
        }
        HistoryEvent::CommitFailed(_) => {
            (state, vec![HistoryEffect::Toast(HistoryToast::CommitFail)])
        }
        HistoryEvent::QuitSucceeded => (state, vec![HistoryEffect::NavigateBack]),
        HistoryEvent::QuitFailed(_) => (state, vec![HistoryEffect::Toast(HistoryToast::QuitFail)]),
    }
}

fn challenge_info(detail: &ChallengeDetail, today: NaiveDate) -> ChallengeInfo {
    let challenge: &Challenge = &detail.challenge;
    ChallengeInfo {
        challenge_no: challenge.challenge_no,
        d_day: d_day(challenge.end_date, challenge.is_finished, today),
        name: challenge.name.clone(),
        description: challenge.description.clone(),
        my_progress: progress_from_commits(challenge, &detail.my_commits),
        partner_progress: progress_from_commits(challenge, &detail.partner_commits),
    }
}

/// Drives [`reduce`] with repository calls.
pub struct HistoryViewModel<R> {
    repo: R,
    state: HistoryState,
}

impl<R> HistoryViewModel<R>
where
    R: ChallengeRepository + CommitRepository,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: HistoryState::default(),
        }
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Fetch a challenge and rebuild the timeline.
    pub async fn load(&mut self, challenge_no: u64, today: NaiveDate) -> Vec<HistoryEffect> {
        let event = self.fetch(challenge_no, today).await;
        self.run(event, today).await
    }

    /// Open the detail of a commit shown in the timeline.
    ///
    /// Unknown commit numbers leave the state untouched.
    pub async fn select_commit(&mut self, commit_no: u64, today: NaiveDate) -> Vec<HistoryEffect> {
        self.run(HistoryEvent::CommitSelected(commit_no), today).await
    }

    /// Upload today's proof for the current challenge.
    pub async fn submit_commit(
        &mut self,
        text: &str,
        image: ImagePayload,
        today: NaiveDate,
    ) -> Vec<HistoryEffect> {
        let request = CommitRequest {
            challenge_no: self.state.info.challenge_no,
            text: text.to_string(),
            image,
        };
        let event = match self.repo.create_commit(&request).await {
            Ok(_) => HistoryEvent::CommitCreated,
            Err(e) => {
                tracing::warn!(error = %e, challenge_no = request.challenge_no, "Commit failed");
                HistoryEvent::CommitFailed(e.to_string())
            }
        };
        self.run(event, today).await
    }

    pub async fn quit(&mut self, today: NaiveDate) -> Vec<HistoryEffect> {
        let challenge_no = self.state.info.challenge_no;
        let event = match self.repo.quit_challenge(challenge_no).await {
            Ok(_) => HistoryEvent::QuitSucceeded,
            Err(e) => {
                tracing::warn!(error = %e, challenge_no, "Quitting challenge failed");
                HistoryEvent::QuitFailed(e.to_string())
            }
        };
        self.run(event, today).await
    }

    async fn fetch(&self, challenge_no: u64, today: NaiveDate) -> HistoryEvent {
        match self.repo.get_challenge_detail(challenge_no).await {
            Ok(detail) => HistoryEvent::DetailLoaded { detail, today },
            Err(e) => {
                tracing::error!(error = %e, challenge_no, "Loading challenge failed");
                HistoryEvent::LoadFailed(e.to_string())
            }
        }
    }

    /// Apply `event`, follow reload requests, and return the UI effects.
    async fn run(&mut self, event: HistoryEvent, today: NaiveDate) -> Vec<HistoryEffect> {
        let mut pending = VecDeque::from([event]);
        let mut effects = Vec::new();

        while let Some(event) = pending.pop_front() {
            let (state, emitted) = reduce(std::mem::take(&mut self.state), event);
            self.state = state;
            for effect in emitted {
                match effect {
                    HistoryEffect::Reload(challenge_no) => {
                        pending.push_back(self.fetch(challenge_no, today).await)
                    }
                    other => effects.push(other),
                }
            }
        }
        effects
    }
}
