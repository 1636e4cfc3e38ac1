use crate::{
    api::UserProfile,
    components::{common::MenuTile, layout::Layout},
    state::session::use_session,
};
use leptos::*;

/// "62.5 kg · 168 cm" style summary; missing measurements are skipped.
pub fn profile_summary(user: &UserProfile) -> Option<String> {
    let parts: Vec<String> = [
        user.peso.map(|peso| format!("{} kg", peso)),
        user.altura.map(|altura| format!("{} cm", altura)),
        user.masa_muscular
            .filter(|masa| *masa > 0.0)
            .map(|masa| format!("{} kg de masa muscular", masa)),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}

#[component]
pub fn ClientMenuPanel() -> impl IntoView {
    let session = use_session();
    let user = session.current().map(|s| s.user);
    let name = user
        .as_ref()
        .map(|u| u.full_name())
        .unwrap_or_default();
    let summary = user.as_ref().and_then(profile_summary);

    view! {
        <Layout>
            <div class="space-y-6 px-4">
                <div>
                    <h2 class="text-2xl font-bold text-fg">{format!("Bienvenido, {}", name)}</h2>
                    {summary.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
                </div>
                <div class="grid gap-4 sm:grid-cols-2">
                    <MenuTile href="/clases" title="Clases dirigidas" description="Consulta el calendario y reserva tu plaza."/>
                    <MenuTile href="/reservas" title="Mis reservas" description="Revisa el estado de tus reservas."/>
                    <MenuTile href="/informes" title="Mis informes" description="Informes de tu entrenador y nutricionista."/>
                    <MenuTile href="/elegir-entrenador" title="Elegir entrenador" description="Encuentra a tu entrenador personal."/>
                    <MenuTile href="/elegir-nutricionista" title="Elegir nutricionista" description="Encuentra a tu nutricionista."/>
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
    fn menu_greets_user_and_links_screens() {
        let html = render_to_string(move || {
            provide_signed_in(client_user());
            view! { <ClientMenuPanel/> }
        });
        assert!(html.contains("Bienvenido, Ana Ruiz"));
        for href in ["/clases", "/reservas", "/informes", "/elegir-entrenador", "/elegir-nutricionista"] {
            assert!(html.contains(&format!("href=\"{}\"", href)), "{href}");
        }
    }
}
