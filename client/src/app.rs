//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::notice_stack::NoticeStack;
use crate::components::require_auth::RequireAuth;
use crate::net::config::ApiConfig;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
    user_form::UserFormPage,
};
use crate::state::notices::NoticesState;
use crate::state::session::Session;
use crate::util::paths;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, API location, and notice stack to every page, and
/// wraps the dashboard and user form routes in `RequireAuth`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Session::browser());
    provide_context(ApiConfig::from_build_env());
    provide_context(RwSignal::new(NoticesState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/userdesk.css"/>
        <Title text="User Desk"/>

        <Router>
            <NoticeStack/>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=paths::DASHBOARD/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("users"), StaticSegment("create"))
                        view=|| view! { <RequireAuth><UserFormPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("users"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <RequireAuth><UserFormPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
