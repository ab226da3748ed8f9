//! Route-guard decision for pages that require a signed-in user.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::LOGIN_PATH;
use crate::state::session::Session;

/// What a guarded route should show for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteView<C> {
    /// Verification still in flight; show a spinner, decide nothing yet.
    Loading,
    /// Leave for `to`. With `replace`, the guarded entry is dropped from
    /// history so "back" cannot return to it.
    Redirect { to: &'static str, replace: bool },
    /// Signed in; show the protected content.
    Content(C),
}

/// Decide how a guarded route renders. `content` is only built when the
/// session holds a verified user.
pub fn route_view<C>(session: &Session, content: impl FnOnce() -> C) -> RouteView<C> {
    if session.loading {
        RouteView::Loading
    } else if session.user.is_none() {
        RouteView::Redirect {
            to: LOGIN_PATH,
            replace: true,
        }
    } else {
        RouteView::Content(content())
    }
}
