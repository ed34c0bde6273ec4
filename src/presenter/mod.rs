// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Screen state machines.
//!
//! Each screen has a pure `reduce(state, event) -> (state, effects)` and a
//! view model that runs it against the repositories.

pub mod create_challenge;
pub mod history;
pub mod home;

pub use create_challenge::{CreateChallengeViewModel, CreateChallengeState};
pub use history::{HistoryState, HistoryViewModel};
pub use home::{HomeState, HomeViewModel};
