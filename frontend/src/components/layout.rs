use crate::{
    router::{Dashboard, LOGIN_PATH},
    state::session::{logout, use_session},
    utils::navigation::redirect,
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

fn nav_links(dashboard: Dashboard) -> &'static [(&'static str, &'static str)] {
    match dashboard {
        Dashboard::Client => &[
            ("/menu", "Inicio"),
            ("/clases", "Clases"),
            ("/reservas", "Mis reservas"),
            ("/informes", "Mis informes"),
        ],
        Dashboard::Trainer => &[("/entrenador", "Clientes")],
        Dashboard::Nutritionist => &[("/nutricionista", "Clientes")],
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let dashboard = create_memo(move |_| state.get().session().map(|s| s.dashboard()));
    let greeting = move || {
        state
            .get()
            .session()
            .map(|s| s.user.nombre.clone())
            .filter(|name| !name.is_empty())
            .map(|name| format!("Hola, {}", name))
            .unwrap_or_default()
    };
    let on_logout = move |_| {
        logout(&session);
        redirect(LOGIN_PATH);
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-4">
                        <h1 class="text-xl font-semibold text-fg">"GymApp"</h1>
                        <span class="text-sm text-fg-muted">{greeting}</span>
                    </div>
                    <nav class="flex space-x-2">
                        {move || {
                            dashboard
                                .get()
                                .map(|d| {
                                    nav_links(d)
                                        .iter()
                                        .map(|(href, label)| {
                                            view! { <a href=*href class=NAV_LINK_CLASS>{*label}</a> }
                                        })
                                        .collect_view()
                                })
                                .unwrap_or_else(|| ().into_view())
                        }}
                        <button on:click=on_logout class=NAV_LINK_CLASS>
                            "Cerrar sesión"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
