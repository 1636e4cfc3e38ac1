use leptos::*;

use crate::{
    api::{ApiClient, Report},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    state::session::use_session,
    utils::time::format_date,
};

/// Newest first; undated reports sink to the end.
pub fn sort_reports(reports: &mut [Report]) {
    reports.sort_by(|a, b| b.fecha.cmp(&a.fecha).then(b.id.cmp(&a.id)));
}

fn sender_name(report: &Report) -> String {
    report
        .enviado_por
        .as_ref()
        .map(|u| u.full_name())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Desconocido".to_string())
}

#[component]
fn ReportCard(report: Report) -> impl IntoView {
    let fecha = report
        .fecha
        .map(format_date)
        .unwrap_or_else(|| "Sin fecha".to_string());
    view! {
        <li class="rounded-xl border border-border bg-surface-elevated p-4 space-y-1">
            <div class="flex items-center justify-between">
                <p class="font-semibold text-fg">{format!("Enviado por: {}", sender_name(&report))}</p>
                <span class="text-xs text-fg-muted">{fecha}</span>
            </div>
            <p class="text-sm text-fg">{report.mensaje.clone()}</p>
            {report.peso.map(|peso| view! { <p class="text-sm text-fg-muted">{format!("Peso: {} kg", peso)}</p> })}
            {report.masa_muscular.filter(|masa| *masa > 0.0).map(|masa| view! {
                <p class="text-sm text-fg-muted">{format!("Masa Muscular: {} %", masa)}</p>
            })}
        </li>
    }
}

#[component]
pub fn ReportsPanel() -> impl IntoView {
    let session = use_session();
    let api = session.authorized(&use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let user_id = session.current().map(|s| s.user.id);

    let reports = create_resource(
        move || user_id,
        move |user_id| {
            let api = api.clone();
            async move {
                match user_id {
                    Some(id) => api.list_reports_for_user(id).await.map(|mut reports| {
                        sort_reports(&mut reports);
                        reports
                    }),
                    None => Ok(Vec::new()),
                }
            }
        },
    );
    let error = Signal::derive(move || reports.get().and_then(Result::err));

    view! {
        <Layout>
            <div class="space-y-4 px-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">{"Mis informes"}</h2>
                    <a href="/menu" class="text-sm text-fg-muted">{"Volver al Menú"}</a>
                </div>
                <InlineErrorMessage error=error/>
                <Transition fallback=|| view! { <LoadingSpinner/> }>
                    {move || reports.get().and_then(Result::ok).map(|items| {
                        if items.is_empty() {
                            view! {
                                <EmptyState
                                    title="Todavía no tienes informes."
                                    description="Tu entrenador o nutricionista te los enviará aquí."
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <ul class="space-y-3">
                                    {items
                                        .into_iter()
                                        .map(|report| view! { <ReportCard report=report/> })
                                        .collect_view()}
                                </ul>
                            }
                            .into_view()
                        }
                    })}
                </Transition>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::trainer_user;
    use chrono::NaiveDate;

    fn report(id: i64, day: Option<u32>) -> Report {
        Report {
            id,
            usuario: None,
            enviado_por: Some(trainer_user()),
            mensaje: "Sube la carga".into(),
            fecha: day.and_then(|d| NaiveDate::from_ymd_opt(2025, 4, d)),
            peso: Some(70.0),
            masa_muscular: None,
        }
    }

    #[test]
    fn newest_reports_come_first() {
        let mut reports = vec![report(1, Some(1)), report(2, None), report(3, Some(5))];
        sort_reports(&mut reports);
        let ids: Vec<_> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn sender_falls_back_when_unknown() {
        let mut r = report(1, None);
        assert_eq!(sender_name(&r), "Ana Ruiz");
        r.enviado_por = None;
        assert_eq!(sender_name(&r), "Desconocido");
    }
}
