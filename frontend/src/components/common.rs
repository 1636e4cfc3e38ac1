use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm",
            ButtonVariant::Secondary => "border border-border bg-surface-elevated text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Big tappable entry on the dashboards.
#[component]
pub fn MenuTile(
    #[prop(into)] href: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="block rounded-2xl border border-border bg-surface-elevated p-6 shadow-sm hover:border-action-primary-bg"
        >
            <h3 class="text-lg font-semibold text-fg">{title}</h3>
            <p class="mt-1 text-sm text-fg-muted">{description}</p>
        </a>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_button_shows_spinner_and_is_disabled() {
        let html = render_to_string(move || {
            view! { <Button loading=true>"Reservar"</Button> }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("disabled"));
        assert!(html.contains("Reservar"));
    }

    #[test]
    fn menu_tile_links_to_target() {
        let html = render_to_string(move || {
            view! { <MenuTile href="/clases" title="Clases" description="Reserva tu plaza"/> }
        });
        assert!(html.contains("href=\"/clases\""));
        assert!(html.contains("Reserva tu plaza"));
    }
}
