//! Profile data coordinator — owns the processed-data summary and mediates
//! the sequential per-platform ingestion flow plus the raw-data refresh
//! trigger.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::warn;

use crate::backend::BackendClient;
use crate::connections::Platform;
use crate::errors::ApiError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSummary {
    pub repositories: u32,
    pub languages: u32,
    pub followers: u32,
    pub public_repos: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedinSummary {
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
}

/// Processed-data summary per platform, as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSummary {
    pub github: Option<GithubSummary>,
    pub linkedin: Option<LinkedinSummary>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub summary: Option<DataSummary>,
    /// True while the sequential process-data flow is running.
    pub processing: bool,
    /// True while a raw-data refresh is in flight.
    pub refreshing: bool,
    pub last_error: Option<String>,
}

#[derive(Clone)]
pub struct ProfileDataCoordinator {
    backend: Arc<BackendClient>,
    state: Arc<RwLock<DataState>>,
}

impl ProfileDataCoordinator {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            backend,
            state: Arc::new(RwLock::new(DataState::default())),
        }
    }

    /// Detached snapshot of the current state.
    pub fn snapshot(&self) -> DataState {
        self.state.read().clone()
    }

    /// Refreshes the summary. Failures are logged only — this is a
    /// background refresh, the previous summary stays in place.
    pub async fn fetch_summary(&self) {
        match self.backend.get_json::<DataSummary>("/api/data/summary").await {
            Ok(summary) => self.state.write().summary = Some(summary),
            Err(e) => warn!("Failed to fetch data summary: {e}"),
        }
    }

    /// Triggers ingestion for each platform in the order given — GitHub
    /// before LinkedIn in the combined flow. The first failure aborts the
    /// remainder and is surfaced as `"<Platform>: <message>"`; on success
    /// the summary is refreshed.
    pub async fn process(&self, platforms: &[Platform]) {
        {
            let mut s = self.state.write();
            s.processing = true;
            s.last_error = None;
        }

        let mut failure = None;
        for platform in platforms {
            if let Err(e) = self.backend.post_unit(&platform.process_path()).await {
                failure = Some(match &e {
                    ApiError::Api { .. } => format!(
                        "{}: {}",
                        platform.label(),
                        e.surface_message("Failed to process data")
                    ),
                    _ => e.surface_message("Failed to process data"),
                });
                break;
            }
        }

        let failed = failure.is_some();
        {
            let mut s = self.state.write();
            s.last_error = failure;
            s.processing = false;
        }
        if !failed {
            self.fetch_summary().await;
        }
    }

    /// Asks the backend to re-pull raw profile data, then refreshes the
    /// summary. Failures are logged only.
    pub async fn refresh_raw_data(&self) {
        self.state.write().refreshing = true;

        let result = self.backend.post_unit("/api/data/fetch").await;

        self.state.write().refreshing = false;
        match result {
            Ok(_) => self.fetch_summary().await,
            Err(e) => warn!("Failed to refresh raw data: {e}"),
        }
    }
}
