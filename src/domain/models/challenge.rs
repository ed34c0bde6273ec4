// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Challenge model and its date-range rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{Commit, Nicknames, User};
use crate::time_utils::inclusive_day_count;

/// A challenge shared by two partners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub challenge_no: u64,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Set when the partners finished the challenge (possibly early)
    pub is_finished: bool,
    pub user1: User,
    pub user2: User,
}

impl Challenge {
    /// Finished explicitly, or implicitly once the end date has passed.
    pub fn is_over(&self, today: NaiveDate) -> bool {
        self.is_finished || self.end_date < today
    }

    /// Number of calendar days between start and end, inclusive.
    pub fn total_days(&self) -> u32 {
        inclusive_day_count(self.start_date, self.end_date)
    }

    /// Whether `date` lies inside `[start_date, end_date]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Nicknames from the point of view of `my_user_no`.
    ///
    /// `user1` is taken as the signed-in user unless `my_user_no` matches `user2`.
    pub fn nicknames_for(&self, my_user_no: Option<u64>) -> Nicknames {
        let nicknames = Nicknames {
            mine: self.user1.nickname.clone(),
            partner: self.user2.nickname.clone(),
        };
        match my_user_no {
            Some(no) if no == self.user2.user_no => nicknames.swapped(),
            _ => nicknames,
        }
    }
}

/// A challenge together with both partners' commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetail {
    pub challenge: Challenge,
    pub my_commits: Vec<Commit>,
    pub partner_commits: Vec<Commit>,
}

impl ChallengeDetail {
    /// User number of the signed-in user, if any of their commits carries it.
    pub fn my_user_no(&self) -> Option<u64> {
        self.my_commits.iter().find_map(|c| c.user_no)
    }

    pub fn nicknames(&self) -> Nicknames {
        self.challenge.nicknames_for(self.my_user_no())
    }
}

/// Request body for creating a challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period", skip_on_field_errors = false))]
pub struct CreateChallengeRequest {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    #[validate(length(max = 200))]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Flower picked by the creator
    #[validate(length(min = 1))]
    pub user1_flower: String,
}

/// The period must not end before it starts.
fn validate_period(request: &CreateChallengeRequest) -> Result<(), ValidationError> {
    if request.end_date < request.start_date {
        return Err(ValidationError::new("period_reversed")
            .with_message("end date precedes start date".into()));
    }
    Ok(())
}

/// Request body for approving a partner's challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApproveChallengeRequest {
    /// Flower picked by the approving partner
    #[validate(length(min = 1))]
    pub user2_flower: String,
}
