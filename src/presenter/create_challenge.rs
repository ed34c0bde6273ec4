// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Challenge creation wizard.
//!
//! Step 1 picks the name and dates, step 2 the description, step 3 the
//! flower. Approving a partner's request jumps straight to step 3 with the
//! pending challenge prefilled.

use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use crate::domain::models::{
    ApproveChallengeRequest, BeforeChallengeState, Challenge, CreateChallengeRequest,
};
use crate::domain::repository::ChallengeRepository;
use crate::time_utils::format_date;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallengeState {
    pub current_step: u8,
    pub name: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub flower: Option<String>,
    /// Set when the user backs out of the wizard
    pub is_back: bool,
    /// Challenge being approved, when answering a partner's request
    pub pending_challenge_no: Option<u64>,
}

impl Default for CreateChallengeState {
    fn default() -> Self {
        Self {
            current_step: FIRST_STEP,
            name: String::new(),
            description: String::new(),
            start_date: None,
            end_date: None,
            flower: None,
            is_back: false,
            pending_challenge_no: None,
        }
    }
}

impl CreateChallengeState {
    /// `"YYYY-MM-DD ~ YYYY-MM-DD"` once both dates are set.
    pub fn period_label(&self) -> Option<String> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(format!("{} ~ {}", format_date(start), format_date(end))),
            _ => None,
        }
    }

    fn to_request(&self) -> Option<CreateChallengeRequest> {
        Some(CreateChallengeRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            start_date: self.start_date?,
            end_date: self.end_date?,
            user1_flower: self.flower.clone()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateChallengeEvent {
    Init {
        before: BeforeChallengeState,
        pending: Option<Challenge>,
    },
    BackPressed,
    StepMoved(i8),
    NameAndPeriodEntered {
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    DescriptionEntered(String),
    FlowerSelected(String),
    CreateClicked,
    Created,
    CreateFailed(String),
    ApproveClicked,
    Approved,
    ApproveFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreateChallengeToast {
    InvalidInput,
    CreateFail,
    ApproveFail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateChallengeEffect {
    Toast(CreateChallengeToast),
    NavigateToSuccess,
    NavigateToHome,
    Create(CreateChallengeRequest),
    Approve {
        challenge_no: u64,
        request: ApproveChallengeRequest,
    },
}

/// Pure state transition of the creation wizard.
pub fn reduce(
    state: CreateChallengeState,
    event: CreateChallengeEvent,
) -> (CreateChallengeState, Vec<CreateChallengeEffect>) {
    use CreateChallengeEffect::*;

    match event {
        CreateChallengeEvent::Init { before, pending } => {
            let state = match (before, pending) {
                (BeforeChallengeState::Empty | BeforeChallengeState::Termination, _) | (_, None) => {
                    CreateChallengeState::default()
                }
                (_, Some(challenge)) => CreateChallengeState {
                    current_step: LAST_STEP,
                    name: challenge.name,
                    description: challenge.description,
                    start_date: Some(challenge.start_date),
                    end_date: Some(challenge.end_date),
                    pending_challenge_no: Some(challenge.challenge_no),
                    ..CreateChallengeState::default()
                },
            };
            (state, vec![])
        }
        CreateChallengeEvent::BackPressed => (
            CreateChallengeState {
                is_back: true,
                ..state
            },
            vec![],
        ),
        CreateChallengeEvent::StepMoved(delta) => {
            let step = (state.current_step as i16 + delta as i16)
                .clamp(FIRST_STEP as i16, LAST_STEP as i16) as u8;
            (
                CreateChallengeState {
                    current_step: step,
                    ..state
                },
                vec![],
            )
        }
        CreateChallengeEvent::NameAndPeriodEntered {
            name,
            start_date,
            end_date,
        } => {
            if name.trim().is_empty() || end_date < start_date {
                return (state, vec![Toast(CreateChallengeToast::InvalidInput)]);
            }
            (
                CreateChallengeState {
                    current_step: 2,
                    name,
                    start_date: Some(start_date),
                    end_date: Some(end_date),
                    ..state
                },
                vec![],
            )
        }
        CreateChallengeEvent::DescriptionEntered(description) => (
            CreateChallengeState {
                current_step: LAST_STEP,
                description,
                ..state
            },
            vec![],
        ),
        CreateChallengeEvent::FlowerSelected(flower) => (
            CreateChallengeState {
                flower: Some(flower),
                ..state
            },
            vec![],
        ),
        CreateChallengeEvent::CreateClicked => {
            match state.to_request().filter(|r| r.validate().is_ok()) {
                Some(request) => (state, vec![Create(request)]),
                None => (state, vec![Toast(CreateChallengeToast::InvalidInput)]),
            }
        }
        CreateChallengeEvent::Created => (state, vec![NavigateToSuccess]),
        CreateChallengeEvent::CreateFailed(_) => {
            (state, vec![Toast(CreateChallengeToast::CreateFail)])
        }
        CreateChallengeEvent::ApproveClicked => {
            let effect = match (state.pending_challenge_no, state.flower.clone()) {
                (Some(challenge_no), Some(flower)) => Approve {
                    challenge_no,
                    request: ApproveChallengeRequest {
                        user2_flower: flower,
                    },
                },
                _ => Toast(CreateChallengeToast::InvalidInput),
            };
            (state, vec![effect])
        }
        CreateChallengeEvent::Approved => (state, vec![NavigateToHome]),
        CreateChallengeEvent::ApproveFailed(_) => {
            (state, vec![Toast(CreateChallengeToast::ApproveFail)])
        }
    }
}

/// Drives [`reduce`] with repository calls.
pub struct CreateChallengeViewModel<R> {
    repo: R,
    state: CreateChallengeState,
}

impl<R: ChallengeRepository> CreateChallengeViewModel<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: CreateChallengeState::default(),
        }
    }

    pub fn state(&self) -> &CreateChallengeState {
        &self.state
    }

    /// Apply `event`, perform any create/approve call, and return the UI effects.
    pub async fn dispatch(&mut self, event: CreateChallengeEvent) -> Vec<CreateChallengeEffect> {
        let mut pending = vec![event];
        let mut effects = Vec::new();

        while let Some(event) = pending.pop() {
            let (state, emitted) = reduce(std::mem::take(&mut self.state), event);
            self.state = state;
            for effect in emitted {
                match effect {
                    CreateChallengeEffect::Create(request) => {
                        let outcome = match self.repo.create_challenge(&request).await {
                            Ok(_) => CreateChallengeEvent::Created,
                            Err(e) => {
                                tracing::warn!(error = %e, "Creating challenge failed");
                                CreateChallengeEvent::CreateFailed(e.to_string())
                            }
                        };
                        pending.push(outcome);
                    }
                    CreateChallengeEffect::Approve {
                        challenge_no,
                        request,
                    } => {
                        let outcome =
                            match self.repo.approve_challenge(challenge_no, &request).await {
                                Ok(_) => CreateChallengeEvent::Approved,
                                Err(e) => {
                                    tracing::warn!(error = %e, challenge_no, "Approving challenge failed");
                                    CreateChallengeEvent::ApproveFailed(e.to_string())
                                }
                            };
                        pending.push(outcome);
                    }
                    other => effects.push(other),
                }
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    fn filled() -> CreateChallengeState {
        CreateChallengeState {
            current_step: LAST_STEP,
            name: "Read".to_string(),
            description: "10 pages".to_string(),
            start_date: Some(date("2023-05-01")),
            end_date: Some(date("2023-05-22")),
            flower: Some("ROSE".to_string()),
            ..CreateChallengeState::default()
        }
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let (state, _) = reduce(CreateChallengeState::default(), CreateChallengeEvent::StepMoved(-1));
        assert_eq!(state.current_step, FIRST_STEP);

        let (state, _) = reduce(state, CreateChallengeEvent::StepMoved(5));
        assert_eq!(state.current_step, LAST_STEP);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let (state, effects) = reduce(
            CreateChallengeState::default(),
            CreateChallengeEvent::NameAndPeriodEntered {
                name: "  ".to_string(),
                start_date: date("2023-05-01"),
                end_date: date("2023-05-22"),
            },
        );
        assert_eq!(state.current_step, FIRST_STEP);
        assert_eq!(
            effects,
            vec![CreateChallengeEffect::Toast(CreateChallengeToast::InvalidInput)]
        );
    }

    #[test]
    fn test_period_label() {
        assert_eq!(
            filled().period_label().as_deref(),
            Some("2023-05-01 ~ 2023-05-22")
        );
        assert_eq!(CreateChallengeState::default().period_label(), None);
    }

    #[test]
    fn test_create_clicked_emits_request() {
        let (_, effects) = reduce(filled(), CreateChallengeEvent::CreateClicked);
        match effects.as_slice() {
            [CreateChallengeEffect::Create(request)] => {
                assert_eq!(request.name, "Read");
                assert_eq!(request.user1_flower, "ROSE");
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn test_create_without_flower_is_invalid() {
        let state = CreateChallengeState {
            flower: None,
            ..filled()
        };
        let (_, effects) = reduce(state, CreateChallengeEvent::CreateClicked);
        assert_eq!(
            effects,
            vec![CreateChallengeEffect::Toast(CreateChallengeToast::InvalidInput)]
        );
    }
}
