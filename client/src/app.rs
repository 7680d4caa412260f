//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::net::types::UnitKey;
use crate::pages::assignments::finance::FinanceDashboardPage;
use crate::pages::assignments::management::ManagementDashboardPage;
use crate::pages::assignments::marketing::MarketingDashboardPage;
use crate::pages::assignments::operations::OperationsDashboardPage;
use crate::pages::business_unit::BusinessUnitPage;
use crate::pages::executive_summary::ExecutiveSummaryPage;
use crate::pages::frameworks::FrameworksPage;
use crate::pages::story::StoryPage;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared UI state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="app" href="/app.css" />
        <Title text="Ford Strategy Dashboard" />

        <Router>
            <div class="shell">
                <NavBar />
                <main class="shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=ExecutiveSummaryPage />
                        <Route
                            path=StaticSegment("blue")
                            view=|| view! { <BusinessUnitPage unit=UnitKey::Blue /> }
                        />
                        <Route
                            path=StaticSegment("model-e")
                            view=|| view! { <BusinessUnitPage unit=UnitKey::ModelE /> }
                        />
                        <Route
                            path=StaticSegment("pro")
                            view=|| view! { <BusinessUnitPage unit=UnitKey::Pro /> }
                        />
                        <Route path=StaticSegment("frameworks") view=FrameworksPage />
                        <Route path=StaticSegment("story") view=StoryPage />
                        <Route
                            path=(StaticSegment("assignments"), StaticSegment("finance"))
                            view=FinanceDashboardPage
                        />
                        <Route
                            path=(StaticSegment("assignments"), StaticSegment("marketing"))
                            view=MarketingDashboardPage
                        />
                        <Route
                            path=(StaticSegment("assignments"), StaticSegment("management"))
                            view=ManagementDashboardPage
                        />
                        <Route
                            path=(StaticSegment("assignments"), StaticSegment("operations"))
                            view=OperationsDashboardPage
                        />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
