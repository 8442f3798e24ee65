//! Intake-bot resources: applicants and the four application channels
//! (admissions, campus tours, foundation year, academy courses).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::catalog::CatalogRef;
use super::client;
use super::error::ApiResult;
use super::page::{Page, fetch_page};

/// Telegram applicant captured by the intake bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: String,
    #[serde(default)]
    pub telegram_user_id: i64,
    #[serde(default)]
    pub telegram_chat_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub region_details: Option<CatalogRef>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Applicant {
    /// Name, falling back to the Telegram username, then the numeric id.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        if !self.username.is_empty() {
            return self.username.clone();
        }
        format!("ID: {}", self.telegram_user_id)
    }
}

/// Name for an optional applicant; "-" when the nested record is absent.
pub fn applicant_name(applicant: Option<&Applicant>) -> String {
    applicant
        .map(Applicant::full_name)
        .unwrap_or_else(|| "-".to_string())
}

/// Review state shared by all application channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    Submitted,
    InProgress,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "Yangi",
            ApplicationStatus::Submitted => "Yuborilgan",
            ApplicationStatus::InProgress => "Ko'rib chiqilmoqda",
            ApplicationStatus::Approved => "Tasdiqlangan",
            ApplicationStatus::Rejected => "Rad etilgan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionApplication {
    pub id: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub applicant_details: Option<Applicant>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub direction_details: Option<CatalogRef>,
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub track_details: Option<CatalogRef>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub answers: Map<String, Value>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusTourRequest {
    pub id: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub applicant_details: Option<Applicant>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub answers: Map<String, Value>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationRequest {
    pub id: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub applicant_details: Option<Applicant>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub answers: Map<String, Value>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademyRequest {
    pub id: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub applicant_details: Option<Applicant>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub subject_details: Option<CatalogRef>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub answers: Map<String, Value>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// The four intake channels, keyed by their route/path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ApplicationKind {
    #[display("admissions")]
    Admissions,
    #[display("campus")]
    Campus,
    #[display("foundation")]
    Foundation,
    #[display("academy")]
    Academy,
}

impl ApplicationKind {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "admissions" => Some(ApplicationKind::Admissions),
            "campus" => Some(ApplicationKind::Campus),
            "foundation" => Some(ApplicationKind::Foundation),
            "academy" => Some(ApplicationKind::Academy),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ApplicationKind::Admissions => "Qabul 2026",
            ApplicationKind::Campus => "Campus Tour",
            ApplicationKind::Foundation => "Foundation Year",
            ApplicationKind::Academy => "Polito Academy",
        }
    }

    fn collection_path(&self) -> &'static str {
        match self {
            ApplicationKind::Admissions => "/api/v1/intake/applications/admissions/",
            ApplicationKind::Campus => "/api/v1/intake/applications/campus-tour/",
            ApplicationKind::Foundation => "/api/v1/intake/applications/foundation/",
            ApplicationKind::Academy => "/api/v1/intake/applications/academy/",
        }
    }
}

/// One application of any channel, for the shared detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationRecord {
    Admission(AdmissionApplication),
    Campus(CampusTourRequest),
    Foundation(FoundationRequest),
    Academy(AcademyRequest),
}

impl ApplicationRecord {
    pub fn status(&self) -> ApplicationStatus {
        match self {
            ApplicationRecord::Admission(a) => a.status,
            ApplicationRecord::Campus(a) => a.status,
            ApplicationRecord::Foundation(a) => a.status,
            ApplicationRecord::Academy(a) => a.status,
        }
    }

    pub fn applicant(&self) -> Option<&Applicant> {
        match self {
            ApplicationRecord::Admission(a) => a.applicant_details.as_ref(),
            ApplicationRecord::Campus(a) => a.applicant_details.as_ref(),
            ApplicationRecord::Foundation(a) => a.applicant_details.as_ref(),
            ApplicationRecord::Academy(a) => a.applicant_details.as_ref(),
        }
    }

    pub fn answers(&self) -> &Map<String, Value> {
        match self {
            ApplicationRecord::Admission(a) => &a.answers,
            ApplicationRecord::Campus(a) => &a.answers,
            ApplicationRecord::Foundation(a) => &a.answers,
            ApplicationRecord::Academy(a) => &a.answers,
        }
    }

    pub fn submitted_at(&self) -> Option<&str> {
        match self {
            ApplicationRecord::Admission(a) => a.submitted_at.as_deref(),
            ApplicationRecord::Campus(a) => a.submitted_at.as_deref(),
            ApplicationRecord::Foundation(a) => a.submitted_at.as_deref(),
            ApplicationRecord::Academy(a) => a.submitted_at.as_deref(),
        }
    }

    pub fn created_at(&self) -> &str {
        match self {
            ApplicationRecord::Admission(a) => &a.created_at,
            ApplicationRecord::Campus(a) => &a.created_at,
            ApplicationRecord::Foundation(a) => &a.created_at,
            ApplicationRecord::Academy(a) => &a.created_at,
        }
    }
}

pub async fn list_admissions() -> ApiResult<Page<AdmissionApplication>> {
    fetch_page(ApplicationKind::Admissions.collection_path()).await
}

pub async fn list_campus_tours() -> ApiResult<Page<CampusTourRequest>> {
    fetch_page(ApplicationKind::Campus.collection_path()).await
}

pub async fn list_foundation() -> ApiResult<Page<FoundationRequest>> {
    fetch_page(ApplicationKind::Foundation.collection_path()).await
}

pub async fn list_academy() -> ApiResult<Page<AcademyRequest>> {
    fetch_page(ApplicationKind::Academy.collection_path()).await
}

/// Fetch one application of the given channel for the detail page.
pub async fn get_application(kind: ApplicationKind, id: &str) -> ApiResult<ApplicationRecord> {
    let path = format!("{}{}/", kind.collection_path(), id);
    match kind {
        ApplicationKind::Admissions => client::get(&path).await.map(ApplicationRecord::Admission),
        ApplicationKind::Campus => client::get(&path).await.map(ApplicationRecord::Campus),
        ApplicationKind::Foundation => client::get(&path).await.map(ApplicationRecord::Foundation),
        ApplicationKind::Academy => client::get(&path).await.map(ApplicationRecord::Academy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_values() {
        let status: ApplicationStatus = serde_json::from_value(json!("in_progress")).unwrap();
        assert_eq!(status, ApplicationStatus::InProgress);
        assert_eq!(status.label(), "Ko'rib chiqilmoqda");
        assert_eq!(
            serde_json::to_value(ApplicationStatus::New).unwrap(),
            json!("new")
        );
    }

    #[test]
    fn test_applicant_name_fallback_chain() {
        let mut applicant: Applicant = serde_json::from_value(json!({
            "id": "a1",
            "telegram_user_id": 900123,
            "first_name": "Jasur",
            "last_name": "Rahimov",
            "username": "jasur_r"
        }))
        .unwrap();
        assert_eq!(applicant.full_name(), "Jasur Rahimov");

        applicant.first_name.clear();
        applicant.last_name.clear();
        assert_eq!(applicant.full_name(), "jasur_r");

        applicant.username.clear();
        assert_eq!(applicant.full_name(), "ID: 900123");

        assert_eq!(applicant_name(None), "-");
    }

    #[test]
    fn test_admission_deserializes_with_nested_details() {
        let application: AdmissionApplication = serde_json::from_value(json!({
            "id": "app-1",
            "applicant": "a1",
            "applicant_details": { "id": "a1", "first_name": "Nodira" },
            "direction": "d1",
            "direction_details": { "id": "d1", "name_uz": "Kompyuter injiniringi" },
            "status": "submitted",
            "submitted_at": "2026-01-15T09:30:00+05:00"
        }))
        .unwrap();
        assert_eq!(application.status, ApplicationStatus::Submitted);
        assert_eq!(
            application.direction_details.unwrap().display_name(),
            "Kompyuter injiniringi"
        );
        assert!(application.answers.is_empty());
    }

    #[test]
    fn test_kind_segments_round_trip() {
        for kind in [
            ApplicationKind::Admissions,
            ApplicationKind::Campus,
            ApplicationKind::Foundation,
            ApplicationKind::Academy,
        ] {
            assert_eq!(ApplicationKind::from_segment(&kind.to_string()), Some(kind));
        }
        assert_eq!(ApplicationKind::from_segment("unknown"), None);
    }
}
