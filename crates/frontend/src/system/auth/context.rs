use contracts::system::auth::CurrentUserContext;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<CurrentUserContext>,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState {
        user: storage::get_current_user(),
    });

    provide_context(auth_state.read_only());

    children()
}

/// Hook to access auth state; outside an `AuthProvider` nobody is signed in
pub fn use_auth() -> ReadSignal<AuthState> {
    use_context::<ReadSignal<AuthState>>().unwrap_or_else(|| signal(AuthState::default()).0)
}

