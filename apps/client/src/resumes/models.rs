//! Wire types for the resume endpoints. Field names follow the backend's
//! camelCase JSON; option enums serialize to the exact selector strings the
//! backend accepts, so free-form strings never cross the API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a generated resume. `generating → completed` is the
/// normal path; `generating → failed` is only ever observed via refetch.
/// Both end states are terminal on this side — only a backend regeneration
/// moves out of `failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    Generating,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeOrigin {
    Ai,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub status: ResumeStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "generatedBy")]
    pub origin: ResumeOrigin,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResumeListResponse {
    pub resumes: Vec<Resume>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResumeEnvelope {
    pub resume: Resume,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation option selectors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStyle {
    #[default]
    Professional,
    Modern,
    Creative,
    Technical,
}

impl ResumeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStyle::Professional => "professional",
            ResumeStyle::Modern => "modern",
            ResumeStyle::Creative => "creative",
            ResumeStyle::Technical => "technical",
        }
    }
}

/// Download templates reuse the style selector set.
pub type ResumeTemplate = ResumeStyle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusArea {
    #[default]
    #[serde(rename = "full-stack development")]
    FullStack,
    #[serde(rename = "frontend development")]
    Frontend,
    #[serde(rename = "backend development")]
    Backend,
    #[serde(rename = "devops engineering")]
    Devops,
    #[serde(rename = "data science")]
    DataScience,
    #[serde(rename = "mobile development")]
    Mobile,
}

impl FocusArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::FullStack => "full-stack development",
            FocusArea::Frontend => "frontend development",
            FocusArea::Backend => "backend development",
            FocusArea::Devops => "devops engineering",
            FocusArea::DataScience => "data science",
            FocusArea::Mobile => "mobile development",
        }
    }
}

/// Page format for the rendered PDF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

impl PageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageFormat::A4 => "A4",
            PageFormat::Letter => "Letter",
        }
    }
}

/// Body of `POST /api/resume/:id/regenerate`. Omitted fields are defaulted
/// by the backend.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ResumeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_area: Option<FocusArea>,
}

/// Body of `POST /api/resume/generate`. Both selectors are required here.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    pub style: ResumeStyle,
    pub focus_area: FocusArea,
}

// ────────────────────────────────────────────────────────────────────────────
// Eligibility
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequirements {
    pub has_git_hub: bool,
    pub has_linked_in: bool,
    pub has_profile_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub can_generate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub requirements: EligibilityRequirements,
}

impl Eligibility {
    /// Conservative default returned when the eligibility check itself
    /// fails: never eligible, the failure carried as `reason`.
    pub(crate) fn ineligible(reason: String) -> Self {
        Self {
            can_generate: false,
            reason: Some(reason),
            requirements: EligibilityRequirements::default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume detail (preview payload)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub degree: String,
    pub field: Option<String>,
    pub school: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub personal_info: Option<PersonalInfo>,
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub projects: Vec<ProjectItem>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
}

/// Typed render payload of `GET /api/resume/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeDetail {
    pub content: Option<ResumeContent>,
}
