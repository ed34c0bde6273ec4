// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Twotoo: a two-person habit challenge client.
//!
//! Two partners run a challenge over a date range and each uploads one
//! photo proof per day. This crate talks to the Twotoo REST backend and
//! holds the rules the screens are built on: the day-by-day history
//! timeline, progress and bloom status, and the home screen phases.

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod presenter;
pub mod time_utils;

use config::Config;
use data::{RemoteRepository, TwotooClient};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub repository: RemoteRepository,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let client = TwotooClient::new(&config)?;
        Ok(Self {
            config,
            repository: RemoteRepository::new(client),
        })
    }
}
