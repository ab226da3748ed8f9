//! Dashboard chrome state (active tab, user menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session model so the
//! shell can evolve independently of authentication.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Top-level sections of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Worklist,
    Search,
    CreateRating,
    Batch,
    Report,
    Administration,
}

impl DashboardTab {
    /// Navigation order.
    pub const ALL: [Self; 6] = [
        Self::Worklist,
        Self::Search,
        Self::CreateRating,
        Self::Batch,
        Self::Report,
        Self::Administration,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Worklist => "worklist",
            Self::Search => "search",
            Self::CreateRating => "create-rating",
            Self::Batch => "batch",
            Self::Report => "report",
            Self::Administration => "administration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Worklist => "Worklist",
            Self::Search => "Search",
            Self::CreateRating => "Create Rating",
            Self::Batch => "Batch",
            Self::Report => "Report",
            Self::Administration => "Administration",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Worklist => "🏠",
            Self::Search => "🔍",
            Self::CreateRating => "📄",
            Self::Batch => "📚",
            Self::Report => "🖨️",
            Self::Administration => "⚙️",
        }
    }

    /// Tabs rendered with a dropdown caret.
    pub fn has_submenu(self) -> bool {
        matches!(self, Self::Report | Self::Administration)
    }
}

/// Entries of the user menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMenuAction {
    Profile,
    Settings,
    Logout,
}

impl UserMenuAction {
    pub const ALL: [Self; 3] = [Self::Profile, Self::Settings, Self::Logout];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Logout => "Logout",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Profile => "👤",
            Self::Settings => "⚙️",
            Self::Logout => "🚪",
        }
    }
}

/// What the page must do after a menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEffect {
    /// End the session and leave for the login route.
    Logout,
}

/// Dashboard UI state: exactly one active tab plus the user menu flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub user_menu_open: bool,
}

impl DashboardState {
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    pub fn is_active(&self, tab: DashboardTab) -> bool {
        self.active_tab == tab
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    /// Also used for pointer presses outside the menu region.
    pub fn close_user_menu(&mut self) {
        self.user_menu_open = false;
    }

    /// Handle a menu entry. Profile and Settings are placeholders and keep
    /// the menu open.
    pub fn choose(&mut self, action: UserMenuAction) -> Option<ShellEffect> {
        match action {
            UserMenuAction::Logout => {
                self.close_user_menu();
                Some(ShellEffect::Logout)
            }
            UserMenuAction::Profile | UserMenuAction::Settings => None,
        }
    }
}
