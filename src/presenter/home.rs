// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Home screen: today's proofs, stings, cheers, and the completion dialog.
//!
//! Requests to the backend are effects too ([`HomeEffect::Run`]); the view
//! model executes them and feeds the outcome back as an event.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::VecDeque;

use crate::domain::models::{
    BeforeChallengeState, CheerRequest, CommitRequest, HomeView, ImagePayload, StingRequest,
};
use crate::domain::progress::{
    auth_type, challenge_phase, home_progress, is_both_bloom, AuthType, ChallengePhase,
};
use crate::domain::repository::{
    ChallengeRepository, CommitRepository, NotificationRepository, ViewRepository,
};

/// Content submitted from one of the home bottom sheets.
#[derive(Debug, Clone, PartialEq)]
pub enum BottomSheetData {
    /// Today's proof
    Authenticate { text: String, image: ImagePayload },
    /// A sting for the partner
    Shot { text: String },
    /// A cheer for the partner's commit
    Cheer { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HomeDialog {
    Cheer,
    Bloom,
    DoNotBloom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HomeToast {
    LoadHomeFail,
    CommitSuccess,
    CommitFail,
    ShotSuccess,
    ShotFail,
    ShotInvalid,
    CheerSuccess,
    CheerFail,
    FinishFail,
}

/// Backend call requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeCommand {
    LoadHome,
    Commit(CommitRequest),
    Sting(StingRequest),
    Cheer { commit_no: u64, request: CheerRequest },
    Finish(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum HomeEffect {
    Toast(HomeToast),
    OpenDialog(HomeDialog),
    DismissBottomSheet,
    NavigateToHistory(u64),
    NavigateToCreateChallenge(BeforeChallengeState),
    Run(HomeCommand),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub view: Option<HomeView>,
    pub phase: Option<ChallengePhase>,
    pub auth: Option<AuthType>,
    pub my_progress: f32,
    pub partner_progress: f32,
    /// Plays the sting wiggle animation
    pub shot_interaction: bool,
    pub cheer_dialog_seen: bool,
    pub complete_dialog_seen: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HomeEvent {
    Loaded { view: HomeView, today: NaiveDate },
    LoadFailed(String),
    Submit(BottomSheetData),
    CommitSucceeded,
    CommitFailed(String),
    ShotSucceeded,
    ShotFailed(String),
    CheerSucceeded,
    CheerFailed(String),
    CompleteButtonClicked,
    ChallengeFinished,
    FinishFailed(String),
    CheerDialogDismissed,
    CompleteDialogConfirmed,
    WiggleAnimationEnded,
    HistoryClicked,
}

/// Pure state transition of the home screen.
pub fn reduce(state: HomeState, event: HomeEvent) -> (HomeState, Vec<HomeEffect>) {
    use HomeEffect::*;

    match event {
        HomeEvent::Loaded { view, today } => on_loaded(state, view, today),
        HomeEvent::LoadFailed(_) => (state, vec![Toast(HomeToast::LoadHomeFail)]),
        HomeEvent::Submit(data) => on_submit(state, data),
        HomeEvent::CommitSucceeded => (
            HomeState {
                shot_interaction: true,
                ..state
            },
            vec![
                DismissBottomSheet,
                Toast(HomeToast::CommitSuccess),
                Run(HomeCommand::LoadHome),
            ],
        ),
        HomeEvent::CommitFailed(_) => (
            state,
            vec![DismissBottomSheet, Toast(HomeToast::CommitFail)],
        ),
        HomeEvent::ShotSucceeded => (
            state,
            vec![
                DismissBottomSheet,
                Toast(HomeToast::ShotSuccess),
                Run(HomeCommand::LoadHome),
            ],
        ),
        HomeEvent::ShotFailed(_) => (state, vec![Toast(HomeToast::ShotFail)]),
        HomeEvent::CheerSucceeded => (
            HomeState {
                cheer_dialog_seen: false,
                ..state
            },
            vec![Toast(HomeToast::CheerSuccess), Run(HomeCommand::LoadHome)],
        ),
        HomeEvent::CheerFailed(_) => (
            HomeState {
                cheer_dialog_seen: true,
                ..state
            },
            vec![DismissBottomSheet, Toast(HomeToast::CheerFail)],
        ),
        HomeEvent::CompleteButtonClicked => {
            let challenge_no = state
                .view
                .as_ref()
                .and_then(|v| v.ongoing.as_ref())
                .map(|c| c.challenge_no);
            match challenge_no {
                Some(no) => (state, vec![Run(HomeCommand::Finish(no))]),
                None => (state, vec![]),
            }
        }
        HomeEvent::ChallengeFinished => (
            HomeState {
                complete_dialog_seen: false,
                ..state
            },
            vec![NavigateToCreateChallenge(BeforeChallengeState::Termination)],
        ),
        HomeEvent::FinishFailed(_) => (state, vec![Toast(HomeToast::FinishFail)]),
        HomeEvent::CheerDialogDismissed => (
            HomeState {
                cheer_dialog_seen: true,
                ..state
            },
            vec![],
        ),
        HomeEvent::CompleteDialogConfirmed => (
            HomeState {
                complete_dialog_seen: true,
                ..state
            },
            vec![],
        ),
        HomeEvent::WiggleAnimationEnded => (
            HomeState {
                shot_interaction: false,
                ..state
            },
            vec![],
        ),
        HomeEvent::HistoryClicked => {
            let effects = state
                .view
                .as_ref()
                .and_then(|v| v.ongoing.as_ref())
                .map(|c| vec![NavigateToHistory(c.challenge_no)])
                .unwrap_or_default();
            (state, effects)
        }
    }
}

fn on_loaded(state: HomeState, view: HomeView, today: NaiveDate) -> (HomeState, Vec<HomeEffect>) {
    let previous_phase = state.phase;
    let phase = challenge_phase(&view, today);
    let (my_progress, partner_progress) = home_progress(&view);
    let mut effects = Vec::new();
    let mut cheer_dialog_seen = state.cheer_dialog_seen;

    match phase {
        Some(ChallengePhase::Cheer) => {
            // The cheer I left lives on the partner's commit
            let already_cheered = view.partner_commit.as_ref().is_some_and(|c| c.has_cheer());
            if previous_phase == Some(ChallengePhase::Auth) {
                effects.push(HomeEffect::DismissBottomSheet);
                effects.push(HomeEffect::OpenDialog(HomeDialog::Cheer));
            } else if !cheer_dialog_seen && !already_cheered {
                effects.push(HomeEffect::OpenDialog(HomeDialog::Cheer));
            }
        }
        Some(ChallengePhase::Complete) => {
            if !state.complete_dialog_seen {
                let dialog = if is_both_bloom(my_progress, partner_progress) {
                    HomeDialog::Bloom
                } else {
                    HomeDialog::DoNotBloom
                };
                effects.push(HomeEffect::OpenDialog(dialog));
            }
        }
        Some(ChallengePhase::Auth) => cheer_dialog_seen = false,
        None => {}
    }

    let auth = view.ongoing.as_ref().map(|_| auth_type(&view, today));
    let state = HomeState {
        view: Some(view),
        phase,
        auth,
        my_progress,
        partner_progress,
        cheer_dialog_seen,
        ..state
    };
    (state, effects)
}

fn on_submit(state: HomeState, data: BottomSheetData) -> (HomeState, Vec<HomeEffect>) {
    use HomeEffect::*;

    let ongoing = state
        .view
        .as_ref()
        .and_then(|v| v.ongoing.as_ref())
        .map(|c| c.challenge_no);
    let Some(challenge_no) = ongoing else {
        return (state, vec![DismissBottomSheet]);
    };

    let effects = match data {
        BottomSheetData::Authenticate { text, image } => {
            let request = CommitRequest {
                challenge_no,
                text,
                image,
            };
            vec![Run(HomeCommand::Commit(request))]
        }
        BottomSheetData::Shot { text } => {
            let remaining = state.view.as_ref().map_or(0, |v| v.sting_count);
            if remaining == 0 {
                vec![DismissBottomSheet, Toast(HomeToast::ShotInvalid)]
            } else {
                vec![Run(HomeCommand::Sting(StingRequest { message: text }))]
            }
        }
        BottomSheetData::Cheer { text } => {
            let partner_commit = state
                .view
                .as_ref()
                .and_then(|v| v.partner_commit.as_ref())
                .map(|c| c.commit_no);
            match partner_commit {
                Some(commit_no) if !text.trim().is_empty() => vec![Run(HomeCommand::Cheer {
                    commit_no,
                    request: CheerRequest::new(&text),
                })],
                _ => vec![DismissBottomSheet, Toast(HomeToast::CheerFail)],
            }
        }
    };
    (state, effects)
}

/// Drives [`reduce`] with repository calls.
pub struct HomeViewModel<R> {
    repo: R,
    state: HomeState,
}

impl<R> HomeViewModel<R>
where
    R: ChallengeRepository + CommitRepository + NotificationRepository + ViewRepository,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: HomeState::default(),
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub async fn load(&mut self, today: NaiveDate) -> Vec<HomeEffect> {
        let event = self.execute(HomeCommand::LoadHome, today).await;
        self.dispatch(event, today).await
    }

    /// Apply `event`, run every requested backend call, and return the UI effects.
    pub async fn dispatch(&mut self, event: HomeEvent, today: NaiveDate) -> Vec<HomeEffect> {
        let mut pending = VecDeque::from([event]);
        let mut effects = Vec::new();

        while let Some(event) = pending.pop_front() {
            let (state, emitted) = reduce(std::mem::take(&mut self.state), event);
            self.state = state;
            for effect in emitted {
                match effect {
                    HomeEffect::Run(command) => {
                        pending.push_back(self.execute(command, today).await)
                    }
                    other => effects.push(other),
                }
            }
        }
        effects
    }

    async fn execute(&self, command: HomeCommand, today: NaiveDate) -> HomeEvent {
        match command {
            HomeCommand::LoadHome => match self.repo.get_home_view().await {
                Ok(view) => HomeEvent::Loaded { view, today },
                Err(e) => {
                    tracing::error!(error = %e, "Loading home failed");
                    HomeEvent::LoadFailed(e.to_string())
                }
            },
            HomeCommand::Commit(request) => match self.repo.create_commit(&request).await {
                Ok(_) => HomeEvent::CommitSucceeded,
                Err(e) => {
                    tracing::warn!(error = %e, "Commit failed");
                    HomeEvent::CommitFailed(e.to_string())
                }
            },
            HomeCommand::Sting(request) => match self.repo.sting(&request).await {
                Ok(_) => HomeEvent::ShotSucceeded,
                Err(e) => {
                    tracing::warn!(error = %e, "Sting failed");
                    HomeEvent::ShotFailed(e.to_string())
                }
            },
            HomeCommand::Cheer { commit_no, request } => {
                match self.repo.cheer(commit_no, &request).await {
                    Ok(_) => HomeEvent::CheerSucceeded,
                    Err(e) => {
                        tracing::warn!(error = %e, commit_no, "Cheer failed");
                        HomeEvent::CheerFailed(e.to_string())
                    }
                }
            }
            HomeCommand::Finish(challenge_no) => {
                match self.repo.finish_challenge(challenge_no).await {
                    Ok(_) => HomeEvent::ChallengeFinished,
                    Err(e) => {
                        tracing::warn!(error = %e, challenge_no, "Finishing challenge failed");
                        HomeEvent::FinishFailed(e.to_string())
                    }
                }
            }
        }
    }
}
