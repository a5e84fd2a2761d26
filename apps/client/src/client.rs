//! The facade wiring the coordinators to one shared backend transport.
//!
//! There is exactly one store per `init`: cloning the client (or any
//! coordinator handle) hands out views of the same state, so two UI regions
//! can never disagree after an action in one. Teardown is dropping the last
//! clone — no background tasks are spawned.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::auth::TokenProvider;
use crate::backend::BackendClient;
use crate::config::Config;
use crate::connections::ConnectionCoordinator;
use crate::data::ProfileDataCoordinator;
use crate::resumes::ResumeCoordinator;
use crate::shell::{DownloadSink, Navigator};

#[derive(Clone)]
pub struct ResumateClient {
    pub connections: ConnectionCoordinator,
    pub resumes: ResumeCoordinator,
    pub data: ProfileDataCoordinator,
}

impl ResumateClient {
    /// Constructs the shared store and runs the automatic initial fetches:
    /// connection status, entry-URL callback inspection, resume list, and
    /// the data summary.
    pub async fn init(
        config: &Config,
        tokens: Arc<dyn TokenProvider>,
        navigator: Arc<dyn Navigator>,
        sink: Arc<dyn DownloadSink>,
    ) -> Result<Self> {
        let backend = Arc::new(BackendClient::new(config, tokens)?);
        info!("Resumate client targeting {}", config.api_url);

        let client = Self {
            connections: ConnectionCoordinator::new(backend.clone(), navigator.clone()),
            resumes: ResumeCoordinator::new(backend.clone(), sink),
            data: ProfileDataCoordinator::new(backend),
        };

        client.connections.fetch_status().await;
        client
            .connections
            .handle_callback(&navigator.current_url())
            .await;
        client.resumes.fetch_resumes().await;
        client.data.fetch_summary().await;
        info!("Resumate client initialized");

        Ok(client)
    }
}
