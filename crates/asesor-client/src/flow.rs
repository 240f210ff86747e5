use crate::types::Workspace;

/// Navigation state of a client front-end: login, workspace selection, chat.
///
/// Transitions consume the current state and return the next one, so there
/// is no global mutable view state; a front-end owns exactly one `View` and
/// threads it through these calls. Transitions that do not apply to the
/// current state return it unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Login,
    Workspaces,
    Chat { workspace: Workspace },
}

impl View {
    /// Initial view: straight to workspace selection when a session already
    /// exists, otherwise login.
    pub fn start(has_session: bool) -> Self {
        if has_session {
            Self::Workspaces
        } else {
            Self::Login
        }
    }

    pub fn login_succeeded(self) -> Self {
        match self {
            Self::Login => Self::Workspaces,
            other => other,
        }
    }

    pub fn workspace_selected(self, workspace: Workspace) -> Self {
        match self {
            Self::Workspaces => Self::Chat { workspace },
            other => other,
        }
    }

    /// Back from chat to the workspace list.
    pub fn back(self) -> Self {
        match self {
            Self::Chat { .. } => Self::Workspaces,
            other => other,
        }
    }

    /// Logging out always lands on the login view.
    pub fn logout(self) -> Self {
        Self::Login
    }

    /// The active workspace, when chatting.
    pub fn workspace(&self) -> Option<&Workspace> {
        match self {
            Self::Chat { workspace } => Some(workspace),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace(name: &str) -> Workspace {
        Workspace {
            id: format!("ws_{name}"),
            public_id: None,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_start_without_session() {
        assert_eq!(View::start(false), View::Login);
    }

    #[test]
    fn test_start_with_session_skips_login() {
        assert_eq!(View::start(true), View::Workspaces);
    }

    #[test]
    fn test_full_flow() {
        let view = View::start(false)
            .login_succeeded()
            .workspace_selected(workspace("civil"));

        assert_eq!(view.workspace().unwrap().name, "civil");

        let view = view.back();
        assert_eq!(view, View::Workspaces);

        assert_eq!(view.logout(), View::Login);
    }

    #[test]
    fn test_invalid_transitions_are_identity() {
        // Selecting a workspace is only meaningful from the list view
        let view = View::Login.workspace_selected(workspace("x"));
        assert_eq!(view, View::Login);

        let view = View::Workspaces.back();
        assert_eq!(view, View::Workspaces);

        let view = View::Workspaces.login_succeeded();
        assert_eq!(view, View::Workspaces);
    }

    #[test]
    fn test_logout_from_chat() {
        let view = View::Workspaces.workspace_selected(workspace("penal"));
        assert_eq!(view.logout(), View::Login);
    }
}
