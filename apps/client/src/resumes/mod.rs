//! Resume collection coordinator — owns the ordered resume list and
//! mediates fetch, delete (optimistic local removal), regenerate, download,
//! generation, detail fetch, and the eligibility check.
//!
//! Operations the UI shows a result for (`delete_resume`,
//! `regenerate_resume`, `download_resume`, `generate_resume`,
//! `fetch_resume`) return `Result<_, String>` where the `Err` carries the
//! user-facing message: the server-provided text when present, otherwise a
//! per-operation fallback. `fetch_resumes` surfaces through the
//! coordinator-level `error` field instead, and `check_eligibility` never
//! fails by contract.

pub mod filename;
pub mod models;

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::backend::BackendClient;
use crate::shell::DownloadSink;

use self::filename::filename_from_disposition;
use self::models::{
    Eligibility, GenerateOptions, PageFormat, RegenerateOptions, Resume, ResumeDetail,
    ResumeEnvelope, ResumeListResponse, ResumeStatus, ResumeTemplate,
};

/// Snapshot of the resume collection. Backend order is preserved; entries
/// only ever enter through `fetch_resumes`.
#[derive(Debug, Clone)]
pub struct ResumeState {
    pub resumes: Vec<Resume>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ResumeState {
    fn default() -> Self {
        Self {
            resumes: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

#[derive(Clone)]
pub struct ResumeCoordinator {
    backend: Arc<BackendClient>,
    sink: Arc<dyn DownloadSink>,
    state: Arc<RwLock<ResumeState>>,
}

impl ResumeCoordinator {
    pub fn new(backend: Arc<BackendClient>, sink: Arc<dyn DownloadSink>) -> Self {
        Self {
            backend,
            sink,
            state: Arc::new(RwLock::new(ResumeState::default())),
        }
    }

    /// Detached snapshot of the current state.
    pub fn snapshot(&self) -> ResumeState {
        self.state.read().clone()
    }

    /// Replaces the whole collection from the backend. Success clears the
    /// coordinator-level error; failure sets it and leaves the collection
    /// untouched.
    pub async fn fetch_resumes(&self) {
        self.state.write().loading = true;

        let result = self
            .backend
            .get_json::<ResumeListResponse>("/api/resume")
            .await;

        let mut s = self.state.write();
        match result {
            Ok(data) => {
                s.resumes = data.resumes;
                s.error = None;
            }
            Err(e) => {
                s.error = Some(e.surface_message("Failed to fetch resumes"));
            }
        }
        s.loading = false;
    }

    /// Deletes by id and removes the matching entry locally — no re-fetch.
    /// User confirmation is the caller's responsibility.
    pub async fn delete_resume(&self, id: &str) -> Result<(), String> {
        self.backend
            .delete(&format!("/api/resume/{id}"))
            .await
            .map_err(|e| e.surface_message("Failed to delete resume"))?;

        self.state.write().resumes.retain(|r| r.id != id);
        Ok(())
    }

    /// Requests regeneration. On success the matching entry's status is
    /// patched to `completed` in place and the updated payload returned.
    pub async fn regenerate_resume(
        &self,
        id: &str,
        options: RegenerateOptions,
    ) -> Result<Resume, String> {
        let envelope: ResumeEnvelope = self
            .backend
            .post_json(&format!("/api/resume/{id}/regenerate"), &options)
            .await
            .map_err(|e| e.surface_message("Failed to regenerate resume"))?;

        let mut s = self.state.write();
        if let Some(entry) = s.resumes.iter_mut().find(|r| r.id == id) {
            entry.status = ResumeStatus::Completed;
        }
        Ok(envelope.resume)
    }

    /// Retrieves the rendered PDF and hands it to the download sink under
    /// the filename the `content-disposition` header names (default
    /// `resume.pdf`).
    pub async fn download_resume(
        &self,
        id: &str,
        template: ResumeTemplate,
        format: PageFormat,
    ) -> Result<(), String> {
        let path = format!(
            "/api/resume/{id}/download?template={}&format={}",
            template.as_str(),
            format.as_str()
        );
        let (bytes, disposition) = self
            .backend
            .get_bytes(&path)
            .await
            .map_err(|e| e.surface_message("Failed to download resume"))?;

        let name = filename_from_disposition(disposition.as_deref());
        debug!("Downloading resume {id} as {name} ({} bytes)", bytes.len());

        self.sink
            .save(&name, bytes)
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Creates a new resume. The collection is deliberately not touched:
    /// entries only enter via `fetch_resumes`.
    pub async fn generate_resume(&self, options: GenerateOptions) -> Result<Resume, String> {
        let envelope: ResumeEnvelope = self
            .backend
            .post_json("/api/resume/generate", &options)
            .await
            .map_err(|e| e.surface_message("Failed to generate resume"))?;
        Ok(envelope.resume)
    }

    /// Typed preview payload of a single resume.
    pub async fn fetch_resume(&self, id: &str) -> Result<ResumeDetail, String> {
        self.backend
            .get_json(&format!("/api/resume/{id}"))
            .await
            .map_err(|e| e.surface_message("Failed to fetch resume"))
    }

    /// Generation eligibility. This operation has no error path: any
    /// failure is folded into a conservative `can_generate = false` result
    /// carrying the failure text as `reason`.
    pub async fn check_eligibility(&self) -> Eligibility {
        match self
            .backend
            .get_json::<Eligibility>("/api/resume/check/eligibility")
            .await
        {
            Ok(eligibility) => eligibility,
            Err(e) => Eligibility::ineligible(e.surface_message("Failed to check eligibility")),
        }
    }
}
