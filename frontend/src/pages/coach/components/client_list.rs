use leptos::*;

use crate::api::UserProfile;
use crate::components::empty_state::EmptyState;

#[component]
pub fn ClientSearch(query: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            type="search"
            class="w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm"
            placeholder="Buscar cliente por nombre o apellidos"
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn ClientList(
    #[prop(into)] clients: Signal<Vec<UserProfile>>,
    on_select: Callback<UserProfile>,
) -> impl IntoView {
    view! {
        {move || {
            let clients = clients.get();
            if clients.is_empty() {
                return view! { <EmptyState title="No se encontraron clientes."/> }.into_view();
            }
            view! {
                <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                    {clients
                        .into_iter()
                        .map(|client| {
                            let name = client.full_name();
                            let email = client.email.clone().unwrap_or_default();
                            view! {
                                <li>
                                    <button
                                        class="w-full text-left px-4 py-3 hover:bg-surface-muted"
                                        on:click=move |_| on_select.call(client.clone())
                                    >
                                        <p class="font-medium text-fg">{name}</p>
                                        <p class="text-sm text-fg-muted">{email}</p>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_view()
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::client_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_client_names() {
        let html = render_to_string(move || {
            let clients = Signal::derive(|| vec![client_user()]);
            view! { <ClientList clients=clients on_select=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Ana Ruiz"));
        assert!(html.contains("user7@gym.test"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_to_string(move || {
            let clients = Signal::derive(Vec::<UserProfile>::new);
            view! { <ClientList clients=clients on_select=Callback::new(|_| {})/> }
        });
        assert!(html.contains("No se encontraron clientes."));
    }
}
