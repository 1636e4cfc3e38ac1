use crate::{
    components::layout::LoadingSpinner,
    router::{Dashboard, LOGIN_PATH},
    state::session::{use_session, GateState},
    utils::navigation::redirect,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let is_authenticated = create_memo(move |_| state.get().is_authenticated());
    let is_loading = create_memo(move |_| state.get().is_loading());
    create_effect(move |_| {
        if let Some(target) = auth_redirect(&state.get()) {
            redirect(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn auth_redirect(state: &GateState) -> Option<&'static str> {
    match state {
        GateState::Unauthenticated => Some(LOGIN_PATH),
        _ => None,
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Renders only for the role whose landing screen is `dashboard`; anyone else
/// is sent to their own dashboard.
#[component]
pub fn RequireDashboard(dashboard: Dashboard, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let is_loading = create_memo(move |_| state.get().is_loading());
    let allowed = create_memo(move |_| {
        state
            .get()
            .session()
            .map(|session| session.dashboard() == dashboard)
            .unwrap_or(false)
    });
    create_effect(move |_| {
        if let Some(target) = dashboard_redirect(&state.get(), dashboard) {
            redirect(target);
        }
    });
    view! {
        <Show
            when=move || allowed.get() && !is_loading.get()
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn dashboard_redirect(state: &GateState, expected: Dashboard) -> Option<&'static str> {
    match state {
        GateState::Loading => None,
        GateState::Unauthenticated => Some(LOGIN_PATH),
        GateState::Authenticated(session) => {
            let own = session.dashboard();
            (own != expected).then(|| own.path())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::{client_user, trainer_user};

    fn signed_in(user: crate::api::UserProfile) -> GateState {
        let roles = user.roles();
        GateState::Authenticated(Session {
            token: None,
            user,
            roles,
        })
    }

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn only_unauthenticated_state_redirects_to_login() {
        assert_eq!(auth_redirect(&GateState::Loading), None);
        assert_eq!(auth_redirect(&GateState::Unauthenticated), Some("/login"));
        assert_eq!(auth_redirect(&signed_in(client_user())), None);
    }

    #[test]
    fn wrong_role_is_sent_to_its_own_dashboard() {
        let trainer = signed_in(trainer_user());
        assert_eq!(dashboard_redirect(&trainer, Dashboard::Trainer), None);
        assert_eq!(
            dashboard_redirect(&trainer, Dashboard::Client),
            Some("/entrenador")
        );
        assert_eq!(
            dashboard_redirect(&signed_in(client_user()), Dashboard::Nutritionist),
            Some("/menu")
        );
        assert_eq!(dashboard_redirect(&GateState::Loading, Dashboard::Client), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAuth, RequireDashboard};
    use crate::router::Dashboard;
    use crate::state::session::GateState;
    use crate::test_support::helpers::{client_user, provide_session, provide_signed_in, trainer_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_signed_in(client_user());
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_session(GateState::Unauthenticated);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_session(GateState::Loading);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_dashboard_renders_for_matching_role() {
        let html = render_to_string(move || {
            provide_signed_in(trainer_user());
            view! {
                <RequireDashboard dashboard=Dashboard::Trainer>
                    {|| view! { <div>"trainer-only"</div> }}
                </RequireDashboard>
            }
        });
        assert!(html.contains("trainer-only"));
    }

    #[test]
    fn require_dashboard_hides_children_for_other_roles() {
        let html = render_to_string(move || {
            provide_signed_in(client_user());
            view! {
                <RequireDashboard dashboard=Dashboard::Trainer>
                    {|| view! { <div>"trainer-only"</div> }}
                </RequireDashboard>
            }
        });
        assert!(!html.contains("trainer-only"));
    }
}
