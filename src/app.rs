//! Root application component: shell, contexts, and client-side routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::ui::layout::DashboardShell;
use crate::ui::pages::{
    AcademyPage, AdmissionsPage, AnalyticsPage, ApplicationDetailPage, CampusToursPage,
    CatalogPage, CoveragePage, EnrollmentsPage, FoundationPage, HomePage, LoginPage, NotFoundPage,
    StudentsPage, SurveyDetailPage, SurveysPage,
};
use crate::ui::session::provide_session_context;
use crate::ui::theme::provide_theme_context;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="uz">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let _theme = provide_theme_context();
    let _session = provide_session_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ttpu-crm-dashboard.css"/>
        <Title text="TTPU CRM Dashboard"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("applications"), StaticSegment("admissions"))
                        view=AdmissionsPage
                    />
                    <Route
                        path=(StaticSegment("applications"), StaticSegment("campus"))
                        view=CampusToursPage
                    />
                    <Route
                        path=(StaticSegment("applications"), StaticSegment("foundation"))
                        view=FoundationPage
                    />
                    <Route
                        path=(StaticSegment("applications"), StaticSegment("academy"))
                        view=AcademyPage
                    />
                    <Route
                        path=(StaticSegment("applications"), ParamSegment("kind"), ParamSegment("id"))
                        view=ApplicationDetailPage
                    />
                    <Route path=StaticSegment("surveys") view=SurveysPage/>
                    <Route
                        path=(StaticSegment("surveys"), ParamSegment("id"))
                        view=SurveyDetailPage
                    />
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route path=StaticSegment("enrollments") view=EnrollmentsPage/>
                    <Route path=StaticSegment("catalog") view=CatalogPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route
                        path=(StaticSegment("analytics"), StaticSegment("coverage"))
                        view=CoveragePage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
