use leptos::*;

use super::utils::{can_confirm, StaffKind};
use crate::{
    api::{ApiClient, EntityId},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    router::Dashboard,
    state::session::use_session,
    utils::navigation::redirect,
};

#[component]
pub fn StaffPickerPanel(kind: StaffKind) -> impl IntoView {
    let session = use_session();
    let api = session.authorized(&use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let selected = create_rw_signal(None::<EntityId>);

    let staff = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { kind.fetch(&api).await }
        },
    );
    let error = Signal::derive(move || staff.get().and_then(Result::err));
    let confirm_enabled = Signal::derive(move || {
        staff
            .get()
            .and_then(Result::ok)
            .map(|list| can_confirm(selected.get(), &list))
            .unwrap_or(false)
    });

    let on_confirm = move |_| {
        if let Some(id) = selected.get_untracked() {
            log::info!("{:?} {} selected", kind, id);
            redirect(Dashboard::Client.path());
        }
    };

    view! {
        <Layout>
            <div class="space-y-4 px-4 max-w-2xl">
                <h2 class="text-2xl font-bold text-fg">{kind.title()}</h2>
                <InlineErrorMessage error=error/>
                <Transition fallback=|| view! { <LoadingSpinner/> }>
                    {move || staff.get().and_then(Result::ok).map(|list| {
                        if list.is_empty() {
                            return view! { <EmptyState title=kind.empty_message()/> }.into_view();
                        }
                        view! {
                            <ul class="space-y-2">
                                {list
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.id;
                                        let class = move || {
                                            if selected.get() == Some(id) {
                                                "w-full text-left rounded-lg border-2 border-action-primary-bg bg-surface-muted px-4 py-3"
                                            } else {
                                                "w-full text-left rounded-lg border border-border bg-surface-elevated px-4 py-3"
                                            }
                                        };
                                        view! {
                                            <li>
                                                <button class=class on:click=move |_| selected.set(Some(id))>
                                                    {user.full_name()}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    })}
                </Transition>
                <div class="flex gap-3">
                    <button
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || !confirm_enabled.get()
                        on:click=on_confirm
                    >
                        {"Confirmar Selección"}
                    </button>
                    <a href="/menu" class="inline-flex items-center px-4 py-2 text-sm rounded-md">
                        {"Volver al Menú"}
                    </a>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{client_user, provide_signed_in};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_starts_disabled() {
        let html = render_to_string(move || {
            provide_signed_in(client_user());
            view! { <StaffPickerPanel kind=StaffKind::Trainer/> }
        });
        assert!(html.contains("Selecciona tu entrenador"));
        assert!(html.contains("Confirmar Selección"));
        assert!(html.contains("disabled"));
    }
}
