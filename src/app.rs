//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::{ApiConfig, LOGIN_PATH};
use crate::net::api::HttpAuthApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{Session, SessionManager};
use crate::state::storage::LocalStorageTokenStore;

/// The session manager as wired in the browser.
pub type AppSession = SessionManager<HttpAuthApi, LocalStorageTokenStore>;

/// Session handle injected into every page that needs auth.
///
/// `manager` performs transitions; `state` mirrors its latest snapshot so
/// views re-render when the session changes.
#[derive(Clone)]
pub struct SessionContext {
    pub manager: AppSession,
    pub state: RwSignal<Session>,
}

impl SessionContext {
    /// Build the process-wide session and mirror it into a signal.
    fn install() -> Self {
        let config = ApiConfig::from_build_env();
        let store = LocalStorageTokenStore::new(config.token_key.clone());
        let manager = SessionManager::new(HttpAuthApi::new(config), store);
        let state = RwSignal::new(manager.snapshot());

        let subscription = manager.subscribe(move |s| state.set(s.clone()));
        let owner = manager.clone();
        on_cleanup(move || owner.unsubscribe(subscription));

        Self { manager, state }
    }
}

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
/// Provides the session context, starts token verification in the browser,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::install();
    provide_context(session.clone());

    #[cfg(feature = "hydrate")]
    {
        let manager = session.manager.clone();
        leptos::task::spawn_local(async move {
            manager.initialize().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/rating-console.css"/>
        <Title text="Credit Risk Rating Platform"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <Redirect
                                path=LOGIN_PATH
                                options=NavigateOptions {
                                    replace: true,
                                    ..NavigateOptions::default()
                                }
                            />
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
