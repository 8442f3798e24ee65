//! Dashboard pages, one module per route.

pub mod academy;
pub mod admissions;
pub mod analytics;
pub mod application_detail;
pub mod campus;
pub mod catalog;
pub mod coverage;
pub mod enrollments;
pub mod foundation;
pub mod home;
pub mod login;
pub mod not_found;
pub mod students;
pub mod survey_detail;
pub mod surveys;

pub use academy::AcademyPage;
pub use admissions::AdmissionsPage;
pub use analytics::AnalyticsPage;
pub use application_detail::ApplicationDetailPage;
pub use campus::CampusToursPage;
pub use catalog::CatalogPage;
pub use coverage::CoveragePage;
pub use enrollments::EnrollmentsPage;
pub use foundation::FoundationPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use students::StudentsPage;
pub use survey_detail::SurveyDetailPage;
pub use surveys::SurveysPage;
