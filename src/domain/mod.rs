// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Domain layer: models, repository traits, and the pure rules built on them.

pub mod history;
pub mod models;
pub mod progress;
pub mod repository;

pub use history::{reconcile, reconcile_detail, DaySlot, HistoryInput};
pub use repository::{ChallengeRepository, CommitRepository, NotificationRepository, ViewRepository};
