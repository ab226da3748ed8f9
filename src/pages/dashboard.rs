//! Dashboard shell: header, tab navigation, user menu, and tab bodies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `ProtectedRoute`. Tab bodies are static placeholders; the
//! only side effect the shell performs is signing out.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::net::types::User;
use crate::state::dashboard::{DashboardState, DashboardTab, ShellEffect, UserMenuAction};
use crate::util::auth::{install_unauth_redirect, logout_and_redirect};
use crate::util::click_outside::install_click_outside;

/// Shown in the header before the user record is known.
const FALLBACK_USERNAME: &str = "ratingmanager";

fn display_username(user: Option<&User>) -> String {
    user.map_or_else(|| FALLBACK_USERNAME.to_owned(), |u| u.username.clone())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let SessionContext { manager, state } = expect_context::<SessionContext>();
    let navigate = use_navigate();

    // Also covers logout while the page is mounted.
    install_unauth_redirect(state, navigate.clone());

    let ui = RwSignal::new(DashboardState::default());
    let menu_region = NodeRef::<Div>::new();
    install_click_outside(
        menu_region,
        Signal::derive(move || ui.get().user_menu_open),
        move || ui.update(DashboardState::close_user_menu),
    );

    // Menu selections are queued here and executed by the effect below.
    let pending = RwSignal::new(None::<ShellEffect>);
    Effect::new(move || {
        if pending.get() == Some(ShellEffect::Logout) {
            pending.set(None);
            logout_and_redirect(&manager, &navigate);
        }
    });

    let username = move || display_username(state.get().user.as_ref());

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div class="header-content">
                    <h1 class="platform-title">"Credit Risk Rating Platform"</h1>
                    <div class="brand-logo">
                        <div class="tiger-icon">"🐅"</div>
                        <span class="brand-text">"Maybank"</span>
                    </div>
                </div>
            </header>

            <nav class="dashboard-nav">
                <div class="nav-tabs">
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="nav-tab"
                                    data-tab=tab.id()
                                    class:active=move || ui.get().is_active(tab)
                                    on:click=move |_| ui.update(|s| s.select_tab(tab))
                                >
                                    <span class="tab-icon">{tab.icon()}</span>
                                    <span class="tab-label">{tab.label()}</span>
                                    {tab.has_submenu().then(|| view! { <span class="dropdown-arrow">"▼"</span> })}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="nav-user-info">
                    <div class="notification">
                        <span class="notification-icon">"✉️"</span>
                        <span class="notification-count">"0"</span>
                    </div>
                    <div class="user-profile-container" node_ref=menu_region>
                        <div class="user-profile" on:click=move |_| ui.update(DashboardState::toggle_user_menu)>
                            <span class="user-icon">"👤"</span>
                            <span class="username">{username}</span>
                            <span class="dropdown-arrow">"▼"</span>
                        </div>
                        <Show when=move || ui.get().user_menu_open>
                            <div class="user-dropdown">
                                {UserMenuAction::ALL
                                    .into_iter()
                                    .map(|action| {
                                        let is_logout = action == UserMenuAction::Logout;
                                        let item_class = if is_logout { "dropdown-item logout-item" } else { "dropdown-item" };
                                        view! {
                                            {is_logout.then(|| view! { <div class="dropdown-divider"></div> })}
                                            <div
                                                class=item_class
                                                on:click=move |_| {
                                                    if let Some(effect) = ui.try_update(|s| s.choose(action)).flatten() {
                                                        pending.set(Some(effect));
                                                    }
                                                }
                                            >
                                                <span class="dropdown-icon">{action.icon()}</span>
                                                <span>{action.label()}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </Show>
                    </div>
                </div>
            </nav>

            <main class="dashboard-main">{move || tab_content(ui.get().active_tab)}</main>
        </div>
    }
}

/// Static placeholder body for `tab`.
fn tab_content(tab: DashboardTab) -> AnyView {
    match tab {
        DashboardTab::Worklist => view! {
            <div class="tab-content">
                <h2>"Worklist"</h2>
                <p>"Manage your credit risk rating tasks and assignments."</p>
                <div class="content-placeholder">
                    <div class="card">
                        <h3>"Pending Reviews"</h3>
                        <p>"5 items pending review"</p>
                    </div>
                    <div class="card">
                        <h3>"Completed Today"</h3>
                        <p>"12 items completed"</p>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        DashboardTab::Search => view! {
            <div class="tab-content">
                <h2>"Search"</h2>
                <p>"Search for credit risk ratings and related information."</p>
                <div class="search-box">
                    <input type="text" placeholder="Enter search terms..."/>
                    <button>"Search"</button>
                </div>
            </div>
        }
        .into_any(),
        DashboardTab::CreateRating => view! {
            <div class="tab-content">
                <h2>"Create Rating"</h2>
                <p>"Create new credit risk ratings for clients."</p>
                <div class="form-placeholder">
                    <div class="form-group">
                        <label>"Client Name"</label>
                        <input type="text" placeholder="Enter client name"/>
                    </div>
                    <div class="form-group">
                        <label>"Risk Category"</label>
                        <select>
                            <option>"Low Risk"</option>
                            <option>"Medium Risk"</option>
                            <option>"High Risk"</option>
                        </select>
                    </div>
                    <button class="create-button">"Create Rating"</button>
                </div>
            </div>
        }
        .into_any(),
        DashboardTab::Batch => view! {
            <div class="tab-content">
                <h2>"Batch Processing"</h2>
                <p>"Process multiple credit risk ratings in batches."</p>
                <div class="batch-actions">
                    <button>"Upload Batch File"</button>
                    <button>"Process Pending Batches"</button>
                </div>
            </div>
        }
        .into_any(),
        DashboardTab::Report => view! {
            <div class="tab-content">
                <h2>"Reports"</h2>
                <p>"Generate and view various reports."</p>
                <div class="report-options">
                    <div class="report-card">
                        <h3>"Monthly Summary"</h3>
                        <p>"Generate monthly credit risk summary"</p>
                    </div>
                    <div class="report-card">
                        <h3>"Client Portfolio"</h3>
                        <p>"View client portfolio analysis"</p>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        DashboardTab::Administration => view! {
            <div class="tab-content">
                <h2>"Administration"</h2>
                <p>"Manage system settings and user permissions."</p>
                <div class="admin-sections">
                    <div class="admin-card">
                        <h3>"User Management"</h3>
                        <p>"Manage users and permissions"</p>
                    </div>
                    <div class="admin-card">
                        <h3>"System Settings"</h3>
                        <p>"Configure system parameters"</p>
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}
