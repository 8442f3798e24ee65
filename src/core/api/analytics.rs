//! Survey coverage analytics.
//!
//! The backend aggregates; this module only shapes the query window and
//! decodes the rows. The default window mirrors the bot campaigns: two
//! years back, a bit over one year forward.

use chrono::{Duration, Utc};
use serde::Deserialize;

use super::client;
use super::error::ApiResult;
use super::page::with_query;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseYearCoverage {
    pub course_year: i64,
    pub total: i64,
    pub responded: i64,
    pub coverage_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgramYearCoverage {
    pub program_id: String,
    pub program_name: String,
    pub course_year: i64,
    pub total: i64,
    pub responded: i64,
    pub coverage_percent: f64,
}

/// Whole-campaign totals plus the per-year and per-program breakdowns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnrollmentOverview {
    pub total_students: i64,
    pub total_responded: i64,
    pub coverage_percent: f64,
    #[serde(default)]
    pub by_year: Vec<CourseYearCoverage>,
    #[serde(default)]
    pub by_program: Vec<ProgramYearCoverage>,
}

/// Academic years with survey data, newest first.
pub async fn academic_years() -> ApiResult<Vec<String>> {
    client::get("/api/v1/analytics/alumni/academic-years").await
}

pub async fn enrollment_overview(academic_year: Option<&str>) -> ApiResult<EnrollmentOverview> {
    let path = coverage_path("/api/v1/analytics/alumni/enrollments-overview", academic_year);
    client::get(&path).await
}

fn coverage_path(base: &str, academic_year: Option<&str>) -> String {
    let from = (Utc::now() - Duration::days(730)).to_rfc3339();
    let to = (Utc::now() + Duration::days(400)).to_rfc3339();
    match academic_year {
        Some(year) => with_query(base, &[("from", &from), ("to", &to), ("academic_year", year)]),
        None => with_query(base, &[("from", &from), ("to", &to)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overview_deserializes() {
        let overview: EnrollmentOverview = serde_json::from_value(json!({
            "total_students": 1200,
            "total_responded": 960,
            "coverage_percent": 80.0,
            "by_year": [
                { "course_year": 1, "total": 300, "responded": 270, "coverage_percent": 90.0 }
            ],
            "by_program": [
                {
                    "program_id": "p1",
                    "program_name": "Mechanical Engineering",
                    "course_year": 1,
                    "total": 150,
                    "responded": 120,
                    "coverage_percent": 80.0
                }
            ]
        }))
        .unwrap();
        assert_eq!(overview.by_year.len(), 1);
        assert_eq!(overview.by_program[0].responded, 120);
    }

    #[test]
    fn test_overview_breakdowns_default_to_empty() {
        let overview: EnrollmentOverview = serde_json::from_value(json!({
            "total_students": 0,
            "total_responded": 0,
            "coverage_percent": 0.0
        }))
        .unwrap();
        assert!(overview.by_year.is_empty());
        assert!(overview.by_program.is_empty());
    }

    #[test]
    fn test_coverage_path_includes_window() {
        let path = coverage_path("/api/v1/analytics/alumni/enrollments-overview", None);
        assert!(path.contains("from="));
        assert!(path.contains("to="));
        assert!(!path.contains("academic_year"));

        let path = coverage_path(
            "/api/v1/analytics/alumni/enrollments-overview",
            Some("2025/2026"),
        );
        assert!(path.contains("academic_year=2025%2F2026"));
    }
}
