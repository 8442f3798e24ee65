//! Alumni-bot resources: survey responses, students, and program
//! enrollment totals.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::catalog::CatalogRef;
use super::client;
use super::error::ApiResult;
use super::page::{Page, fetch_page};

const SURVEYS_PATH: &str = "/api/v1/alumni/surveys/";
const STUDENTS_PATH: &str = "/api/v1/alumni/students/";
const ENROLLMENTS_PATH: &str = "/api/v1/alumni/enrollments/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    Unspecified,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Erkak",
            Gender::Female => "Ayol",
            Gender::Other => "Boshqa",
            Gender::Unspecified => "Ko'rsatilmagan",
        }
    }
}

/// Student contacted by the alumni bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    #[serde(default)]
    pub student_external_id: String,
    #[serde(default)]
    pub roster: String,
    #[serde(default)]
    pub telegram_user_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub region_details: Option<CatalogRef>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        if !self.username.is_empty() {
            return self.username.clone();
        }
        self.student_external_id.clone()
    }
}

/// One alumni survey submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: String,
    #[serde(default)]
    pub student: String,
    #[serde(default)]
    pub student_details: Option<Student>,
    #[serde(default)]
    pub roster: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub program_details: Option<CatalogRef>,
    #[serde(default)]
    pub course_year: i64,
    #[serde(default)]
    pub survey_campaign: String,
    #[serde(default)]
    pub employment_status: String,
    #[serde(default)]
    pub employment_company: String,
    #[serde(default)]
    pub employment_role: String,
    #[serde(default)]
    pub suggestions: String,
    #[serde(default)]
    pub consents: Map<String, Value>,
    #[serde(default)]
    pub answers: Map<String, Value>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Slim program reference nested inside enrollment rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentProgram {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Aggregated student totals per program and course year; the denominator
/// of the coverage report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramEnrollment {
    pub id: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub program_details: Option<EnrollmentProgram>,
    #[serde(default)]
    pub course_year: i64,
    #[serde(default)]
    pub student_count: i64,
    #[serde(default)]
    pub responded_count: Option<i64>,
    #[serde(default)]
    pub coverage_percent: Option<f64>,
    #[serde(default)]
    pub academic_year: String,
    #[serde(default)]
    pub campaign: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// Create/update payload for enrollment rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrollmentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub course_year: i64,
    pub student_count: i64,
    pub academic_year: String,
    pub notes: String,
    pub is_active: bool,
}

pub async fn list_surveys() -> ApiResult<Page<SurveyResponse>> {
    fetch_page(SURVEYS_PATH).await
}

pub async fn get_survey(id: &str) -> ApiResult<SurveyResponse> {
    client::get(&format!("{SURVEYS_PATH}{id}/")).await
}

pub async fn list_students() -> ApiResult<Page<Student>> {
    fetch_page(STUDENTS_PATH).await
}

pub async fn list_enrollments() -> ApiResult<Page<ProgramEnrollment>> {
    fetch_page(ENROLLMENTS_PATH).await
}

pub async fn create_enrollment(draft: &EnrollmentDraft) -> ApiResult<ProgramEnrollment> {
    client::post(ENROLLMENTS_PATH, draft).await
}

pub async fn update_enrollment(id: &str, draft: &EnrollmentDraft) -> ApiResult<ProgramEnrollment> {
    client::patch(&format!("{ENROLLMENTS_PATH}{id}/"), draft).await
}

pub async fn delete_enrollment(id: &str) -> ApiResult<()> {
    client::delete(&format!("{ENROLLMENTS_PATH}{id}/")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gender_defaults_and_labels() {
        let student: Student = serde_json::from_value(json!({
            "id": "s1",
            "first_name": "Malika",
            "last_name": "Yusupova"
        }))
        .unwrap();
        assert_eq!(student.gender, Gender::Unspecified);
        assert_eq!(student.gender.label(), "Ko'rsatilmagan");
        assert_eq!(student.full_name(), "Malika Yusupova");

        let gender: Gender = serde_json::from_value(json!("female")).unwrap();
        assert_eq!(gender.label(), "Ayol");
    }

    #[test]
    fn test_student_name_falls_back_to_external_id() {
        let student: Student = serde_json::from_value(json!({
            "id": "s2",
            "student_external_id": "TTPU-2019-0042"
        }))
        .unwrap();
        assert_eq!(student.full_name(), "TTPU-2019-0042");
    }

    #[test]
    fn test_survey_response_deserializes() {
        let survey: SurveyResponse = serde_json::from_value(json!({
            "id": "sv1",
            "student": "s1",
            "program_details": { "id": "p1", "name_uz": "Mexanika" },
            "course_year": 5,
            "employment_status": "employed",
            "is_complete": true,
            "answers": { "q1": "yes" }
        }))
        .unwrap();
        assert!(survey.is_complete);
        assert_eq!(survey.course_year, 5);
        assert_eq!(survey.answers.len(), 1);
    }

    #[test]
    fn test_enrollment_defaults() {
        let enrollment: ProgramEnrollment = serde_json::from_value(json!({
            "id": "e1",
            "program": "p1",
            "course_year": 2,
            "student_count": 120,
            "academic_year": "2025/2026"
        }))
        .unwrap();
        assert!(enrollment.is_active);
        assert_eq!(enrollment.responded_count, None);
    }

    #[test]
    fn test_enrollment_draft_serializes_flat() {
        let draft = EnrollmentDraft {
            program: Some("p1".to_string()),
            course_year: 3,
            student_count: 90,
            academic_year: "2025/2026".to_string(),
            notes: String::new(),
            is_active: true,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["program"], json!("p1"));
        assert_eq!(body["course_year"], json!(3));
    }
}
