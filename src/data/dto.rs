// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Transport DTOs of the Twotoo REST API and their mapping to domain models.
//!
//! Dates arrive as ISO-8601 strings; they are parsed here so the domain only
//! ever sees calendar days.

use serde::Deserialize;

use crate::domain::models::{
    BeforeChallengeState, Challenge, ChallengeDetail, Commit, HomeView, Notification, User,
};
use crate::error::AppError;
use crate::time_utils::parse_calendar_date;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_no: u64,
    #[serde(default)]
    pub nickname: String,
    pub partner_no: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDto {
    pub challenge_no: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub is_finished: bool,
    pub user1: UserDto,
    pub user2: UserDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitDto {
    pub commit_no: u64,
    pub user_no: Option<u64>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub photo_url: String,
    pub partner_comment: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetailDto {
    pub challenge: ChallengeDto,
    #[serde(default)]
    pub my_commits: Vec<CommitDto>,
    #[serde(default)]
    pub partner_commits: Vec<CommitDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub notification_no: u64,
    pub receiver_no: u64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeViewDto {
    pub on_going_challenge: Option<ChallengeDto>,
    pub before_challenge_state: Option<BeforeChallengeState>,
    pub my_commit: Option<CommitDto>,
    pub partner_commit: Option<CommitDto>,
    #[serde(default)]
    pub my_commit_count: u32,
    #[serde(default)]
    pub partner_commit_count: u32,
    #[serde(default)]
    pub challenge_count: u32,
    #[serde(default)]
    pub sting_count: u32,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            user_no: dto.user_no,
            nickname: dto.nickname,
            partner_no: dto.partner_no,
        }
    }
}

impl TryFrom<ChallengeDto> for Challenge {
    type Error = AppError;

    fn try_from(dto: ChallengeDto) -> Result<Self, Self::Error> {
        Ok(Self {
            challenge_no: dto.challenge_no,
            name: dto.name,
            description: dto.description,
            start_date: parse_calendar_date(&dto.start_date)?,
            end_date: parse_calendar_date(&dto.end_date)?,
            is_finished: dto.is_finished,
            user1: dto.user1.into(),
            user2: dto.user2.into(),
        })
    }
}

impl TryFrom<CommitDto> for Commit {
    type Error = AppError;

    fn try_from(dto: CommitDto) -> Result<Self, Self::Error> {
        Ok(Self {
            commit_no: dto.commit_no,
            user_no: dto.user_no,
            text: dto.text,
            image_url: dto.photo_url,
            created_date: parse_calendar_date(&dto.created_at)?,
            cheer_text: dto.partner_comment.filter(|c| !c.trim().is_empty()),
        })
    }
}

impl TryFrom<ChallengeDetailDto> for ChallengeDetail {
    type Error = AppError;

    fn try_from(dto: ChallengeDetailDto) -> Result<Self, Self::Error> {
        Ok(Self {
            challenge: dto.challenge.try_into()?,
            my_commits: commits(dto.my_commits)?,
            partner_commits: commits(dto.partner_commits)?,
        })
    }
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Self {
            notification_no: dto.notification_no,
            receiver_no: dto.receiver_no,
            message: dto.message,
            created_at: dto.created_at,
        }
    }
}

impl TryFrom<HomeViewDto> for HomeView {
    type Error = AppError;

    fn try_from(dto: HomeViewDto) -> Result<Self, Self::Error> {
        Ok(Self {
            ongoing: dto.on_going_challenge.map(Challenge::try_from).transpose()?,
            before_state: dto
                .before_challenge_state
                .unwrap_or(BeforeChallengeState::Empty),
            my_commit: dto.my_commit.map(Commit::try_from).transpose()?,
            partner_commit: dto.partner_commit.map(Commit::try_from).transpose()?,
            my_commit_count: dto.my_commit_count,
            partner_commit_count: dto.partner_commit_count,
            challenge_count: dto.challenge_count,
            sting_count: dto.sting_count,
        })
    }
}

fn commits(dtos: Vec<CommitDto>) -> Result<Vec<Commit>, AppError> {
    dtos.into_iter().map(Commit::try_from).collect()
}
