//! Resumate client core — typed async client for the Resumate backend.
//!
//! The crate is organized around two stateful coordinators (`connections`,
//! `resumes`) plus the profile-data coordinator (`data`), all sharing a
//! single HTTP transport (`backend`). Host integration happens through the
//! seams in `auth` (bearer tokens) and `shell` (navigation, download sink).
//! `ResumateClient::init` wires everything together and runs the automatic
//! initial fetches; cloning the client hands every consumer the same state.

pub mod auth;
pub mod backend;
pub mod client;
pub mod config;
pub mod connections;
pub mod data;
pub mod errors;
pub mod resumes;
pub mod shell;


pub use client::ResumateClient;
pub use config::Config;
pub use connections::{ConnectionState, Platform, PlatformStatus};
pub use errors::{retry_with_backoff, ApiError, ErrorCode};
pub use resumes::models::{
    Eligibility, FocusArea, GenerateOptions, PageFormat, RegenerateOptions, Resume, ResumeStatus,
    ResumeStyle,
};
