// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Repository seams between the presenters and the remote backend.
//!
//! View models are generic over these traits so tests can swap the HTTP
//! implementation for an in-memory one.

use std::future::Future;

use crate::domain::models::{
    ApproveChallengeRequest, Challenge, ChallengeDetail, CheerRequest, Commit, CommitRequest,
    CreateChallengeRequest, HomeView, Notification, StingRequest,
};
use crate::error::Result;

pub trait ChallengeRepository {
    fn create_challenge(
        &self,
        request: &CreateChallengeRequest,
    ) -> impl Future<Output = Result<Challenge>> + Send;

    fn get_all_challenges(&self) -> impl Future<Output = Result<Vec<Challenge>>> + Send;

    fn get_challenge_detail(
        &self,
        challenge_no: u64,
    ) -> impl Future<Output = Result<ChallengeDetail>> + Send;

    /// Leave (delete) a challenge; returns the deleted challenge number.
    fn quit_challenge(&self, challenge_no: u64) -> impl Future<Output = Result<u64>> + Send;

    fn approve_challenge(
        &self,
        challenge_no: u64,
        request: &ApproveChallengeRequest,
    ) -> impl Future<Output = Result<Challenge>> + Send;

    fn finish_challenge(&self, challenge_no: u64)
        -> impl Future<Output = Result<Challenge>> + Send;
}

pub trait CommitRepository {
    fn create_commit(&self, request: &CommitRequest) -> impl Future<Output = Result<Commit>> + Send;

    fn get_commit(&self, commit_no: u64) -> impl Future<Output = Result<Commit>> + Send;

    fn cheer(
        &self,
        commit_no: u64,
        request: &CheerRequest,
    ) -> impl Future<Output = Result<Commit>> + Send;
}

pub trait NotificationRepository {
    fn sting(&self, request: &StingRequest) -> impl Future<Output = Result<Notification>> + Send;
}

pub trait ViewRepository {
    fn get_home_view(&self) -> impl Future<Output = Result<HomeView>> + Send;
}
