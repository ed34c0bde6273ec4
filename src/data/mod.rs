// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Data layer: REST client, transport DTOs, repository implementations.

pub mod client;
pub mod dto;
pub mod repository;

pub use client::TwotooClient;
pub use repository::RemoteRepository;
