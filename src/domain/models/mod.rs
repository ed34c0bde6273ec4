// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Domain models shared by the data and presenter layers.

pub mod challenge;
pub mod commit;
pub mod home;
pub mod notification;
pub mod user;

pub use challenge::{ApproveChallengeRequest, Challenge, ChallengeDetail, CreateChallengeRequest};
pub use commit::{CheerRequest, Commit, CommitRequest, CommitSummary, ImagePayload};
pub use home::{BeforeChallengeState, HomeView};
pub use notification::{Notification, StingRequest};
pub use user::{Nicknames, User};
