//! Connection state coordinator — owns the GitHub/LinkedIn link status and
//! mediates OAuth initiation, disconnect, refresh, and redirect-callback
//! recovery.
//!
//! The coordinator is a cheap `Clone` handle over one shared store; every
//! consumer observes the same state. Mutation happens only through the named
//! actions here — snapshots are detached clones.

pub mod callback;

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use tracing::warn;

use crate::backend::BackendClient;
use crate::shell::Navigator;

use self::callback::{strip_callback_params, CallbackOutcome};

/// One of the two external account providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Github,
    Linkedin,
}

impl Platform {
    /// Human-readable label used in surfaced error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Github => "GitHub",
            Platform::Linkedin => "LinkedIn",
        }
    }

    /// Key this platform uses in API paths and callback query parameters.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
        }
    }

    fn connect_path(&self) -> String {
        format!("/api/{}/connect", self.key())
    }

    fn disconnect_path(&self) -> String {
        format!("/api/{}/disconnect", self.key())
    }

    pub(crate) fn process_path(&self) -> String {
        format!("/api/data/{}/process", self.key())
    }
}

/// Link status of a single platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformStatus {
    pub connected: bool,
    /// Platform-side username/id. Set only while `connected` is true.
    pub identifier: Option<String>,
    /// True while a connect/disconnect targeting this platform is in flight.
    pub pending: bool,
    /// Message from the most recent failed operation on this platform.
    pub last_error: Option<String>,
}

/// Snapshot of both platforms plus the startup flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionState {
    pub github: PlatformStatus,
    pub linkedin: PlatformStatus,
    /// True until the first status fetch completes (success or failure).
    pub initializing: bool,
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self {
            github: PlatformStatus::default(),
            linkedin: PlatformStatus::default(),
            initializing: true,
        }
    }
}

impl ConnectionState {
    pub fn platform(&self, platform: Platform) -> &PlatformStatus {
        match platform {
            Platform::Github => &self.github,
            Platform::Linkedin => &self.linkedin,
        }
    }

    fn platform_mut(&mut self, platform: Platform) -> &mut PlatformStatus {
        match platform {
            Platform::Github => &mut self.github,
            Platform::Linkedin => &mut self.linkedin,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionsResponse {
    #[serde(default)]
    github_connected: bool,
    github_username: Option<String>,
    #[serde(default)]
    linkedin_connected: bool,
    linkedin_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectResponse {
    auth_url: String,
}

/// Resolves `pending = false` when dropped, so error paths and dropped
/// in-flight futures never leave a platform stuck pending. The success
/// redirect path disarms it: once navigation is triggered, no further state
/// mutation is allowed until reload.
struct PendingGuard {
    state: Arc<RwLock<ConnectionState>>,
    platform: Platform,
    armed: bool,
}

impl PendingGuard {
    fn arm(state: &Arc<RwLock<ConnectionState>>, platform: Platform) -> Self {
        {
            let mut s = state.write();
            let p = s.platform_mut(platform);
            p.pending = true;
            p.last_error = None;
        }
        Self {
            state: state.clone(),
            platform,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if self.armed {
            self.state.write().platform_mut(self.platform).pending = false;
        }
    }
}

#[derive(Clone)]
pub struct ConnectionCoordinator {
    backend: Arc<BackendClient>,
    navigator: Arc<dyn Navigator>,
    state: Arc<RwLock<ConnectionState>>,
}

impl ConnectionCoordinator {
    /// Constructs the coordinator in its initial state. The automatic first
    /// status fetch and entry-URL callback inspection happen in
    /// `ResumateClient::init`.
    pub fn new(backend: Arc<BackendClient>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            backend,
            navigator,
            state: Arc::new(RwLock::new(ConnectionState::default())),
        }
    }

    /// Detached snapshot of the current state.
    pub fn snapshot(&self) -> ConnectionState {
        self.state.read().clone()
    }

    /// Refreshes the aggregate connection status. Failures are logged only:
    /// this runs as a background refresh and must not flash an error banner.
    pub async fn fetch_status(&self) {
        let result = self
            .backend
            .get_json::<ConnectionsResponse>("/api/auth/connections")
            .await;

        let mut s = self.state.write();
        match result {
            Ok(data) => {
                s.github.connected = data.github_connected;
                s.github.identifier = data
                    .github_connected
                    .then_some(data.github_username)
                    .flatten();
                s.github.last_error = None;

                s.linkedin.connected = data.linkedin_connected;
                s.linkedin.identifier = data
                    .linkedin_connected
                    .then_some(data.linkedin_id)
                    .flatten();
                s.linkedin.last_error = None;
            }
            Err(e) => {
                warn!("Failed to fetch connection status: {e}");
            }
        }
        s.initializing = false;
    }

    /// Manual re-sync alias for consumers.
    pub async fn refresh(&self) {
        self.fetch_status().await;
    }

    /// Initiates the OAuth flow for `platform`. On success the navigator is
    /// pointed at the authorization URL — a full page redirect, so `pending`
    /// deliberately stays true until reload. Failures land in `last_error`.
    pub async fn connect(&self, platform: Platform) {
        let guard = PendingGuard::arm(&self.state, platform);

        match self
            .backend
            .post_empty::<ConnectResponse>(&platform.connect_path())
            .await
        {
            Ok(data) => {
                guard.disarm();
                self.navigator.navigate(&data.auth_url);
            }
            Err(e) => {
                let fallback = format!("Failed to initiate {} connection", platform.label());
                let message = e.surface_message(&fallback);
                self.state.write().platform_mut(platform).last_error = Some(message);
                drop(guard);
            }
        }
    }

    /// Revokes the platform link. On success the platform's status is fully
    /// reset; on failure `connected` is left unchanged and `last_error` set.
    pub async fn disconnect(&self, platform: Platform) {
        let guard = PendingGuard::arm(&self.state, platform);

        match self.backend.post_unit(&platform.disconnect_path()).await {
            Ok(_) => {
                guard.disarm();
                *self.state.write().platform_mut(platform) = PlatformStatus::default();
            }
            Err(e) => {
                let fallback = format!("Failed to disconnect {}", platform.label());
                let message = e.surface_message(&fallback);
                self.state.write().platform_mut(platform).last_error = Some(message);
                drop(guard);
            }
        }
    }

    /// Unsets `last_error` for the platform. No network call.
    pub fn clear_error(&self, platform: Platform) {
        self.state.write().platform_mut(platform).last_error = None;
    }

    /// Inspects `url` for OAuth callback parameters
    /// (`?github=connected|error`, `?linkedin=connected|error`). Recognized
    /// parameters are stripped from the URL without a history entry; each
    /// `connected` triggers a status fetch, each `error` records a fixed
    /// connection-failed message.
    pub async fn handle_callback(&self, url: &str) {
        let params = callback::parse_callback(url);
        if params.is_empty() {
            return;
        }

        self.navigator.replace_url(&strip_callback_params(url));

        for platform in [Platform::Github, Platform::Linkedin] {
            match params.outcome(platform) {
                Some(CallbackOutcome::Connected) => self.fetch_status().await,
                Some(CallbackOutcome::Error) => {
                    self.state.write().platform_mut(platform).last_error =
                        Some(format!("{} connection failed", platform.label()));
                }
                None => {}
            }
        }
    }
}
