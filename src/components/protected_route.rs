//! Wrapper that only renders its children for a signed-in user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::app::SessionContext;
use crate::util::guard::{RouteView, route_view};

/// Guarded route body.
///
/// Shows a spinner until the stored token has been checked, then either the
/// children or a history-replacing redirect to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    move || match route_view(&session.state.get(), || children()) {
        RouteView::Loading => view! {
            <div class="guard-loading">
                <div class="loading-spinner"></div>
            </div>
        }
        .into_any(),
        RouteView::Redirect { to, replace } => view! {
            <Redirect
                path=to
                options=NavigateOptions {
                    replace,
                    ..NavigateOptions::default()
                }
            />
        }
        .into_any(),
        RouteView::Content(content) => content,
    }
}
