// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Repository implementations backed by the REST client.

use validator::Validate;

use crate::data::client::TwotooClient;
use crate::domain::models::{
    ApproveChallengeRequest, Challenge, ChallengeDetail, CheerRequest, Commit, CommitRequest,
    CreateChallengeRequest, HomeView, Notification, StingRequest,
};
use crate::domain::repository::{
    ChallengeRepository, CommitRepository, NotificationRepository, ViewRepository,
};
use crate::error::Result;

/// All repositories over one shared HTTP client.
///
/// Requests are validated before anything goes over the wire.
#[derive(Clone)]
pub struct RemoteRepository {
    client: TwotooClient,
}

impl RemoteRepository {
    pub fn new(client: TwotooClient) -> Self {
        Self { client }
    }
}

impl ChallengeRepository for RemoteRepository {
    async fn create_challenge(&self, request: &CreateChallengeRequest) -> Result<Challenge> {
        request.validate()?;
        let challenge: Challenge = self.client.create_challenge(request).await?.try_into()?;
        tracing::info!(name = %request.name, "Challenge created");
        Ok(challenge)
    }

    async fn get_all_challenges(&self) -> Result<Vec<Challenge>> {
        self.client
            .get_all_challenges()
            .await?
            .into_iter()
            .map(Challenge::try_from)
            .collect()
    }

    async fn get_challenge_detail(&self, challenge_no: u64) -> Result<ChallengeDetail> {
        let detail: ChallengeDetail = self.client.get_challenge(challenge_no).await?.try_into()?;
        tracing::debug!(
            challenge_no,
            my_commits = detail.my_commits.len(),
            partner_commits = detail.partner_commits.len(),
            "Fetched challenge detail"
        );
        Ok(detail)
    }

    async fn quit_challenge(&self, challenge_no: u64) -> Result<u64> {
        let deleted = self.client.delete_challenge(challenge_no).await?;
        tracing::info!(challenge_no, "Challenge quit");
        Ok(deleted)
    }

    async fn approve_challenge(
        &self,
        challenge_no: u64,
        request: &ApproveChallengeRequest,
    ) -> Result<Challenge> {
        request.validate()?;
        let challenge: Challenge = self
            .client
            .approve_challenge(challenge_no, request)
            .await?
            .try_into()?;
        tracing::info!(challenge_no, "Challenge approved");
        Ok(challenge)
    }

    async fn finish_challenge(&self, challenge_no: u64) -> Result<Challenge> {
        let challenge: Challenge = self.client.finish_challenge(challenge_no).await?.try_into()?;
        tracing::info!(challenge_no, "Challenge finished");
        Ok(challenge)
    }
}

impl CommitRepository for RemoteRepository {
    async fn create_commit(&self, request: &CommitRequest) -> Result<Commit> {
        request.validate()?;
        let commit: Commit = self.client.create_commit(request).await?.try_into()?;
        tracing::info!(
            challenge_no = request.challenge_no,
            commit_no = commit.commit_no,
            "Commit uploaded"
        );
        Ok(commit)
    }

    async fn get_commit(&self, commit_no: u64) -> Result<Commit> {
        self.client.get_commit(commit_no).await?.try_into()
    }

    async fn cheer(&self, commit_no: u64, request: &CheerRequest) -> Result<Commit> {
        request.validate()?;
        let commit: Commit = self.client.cheer(commit_no, request).await?.try_into()?;
        tracing::info!(commit_no, "Cheer sent");
        Ok(commit)
    }
}

impl NotificationRepository for RemoteRepository {
    async fn sting(&self, request: &StingRequest) -> Result<Notification> {
        request.validate()?;
        let notification: Notification = self.client.sting(request).await?.into();
        tracing::info!(receiver_no = notification.receiver_no, "Sting sent");
        Ok(notification)
    }
}

impl ViewRepository for RemoteRepository {
    async fn get_home_view(&self) -> Result<HomeView> {
        self.client.get_home_view().await?.try_into()
    }
}
