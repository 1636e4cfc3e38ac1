use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::RoleFlags,
    components::guard::{RequireAuth, RequireDashboard},
    pages::{
        classes::ClassesPage,
        coach::{NutritionistDashboardPage, TrainerDashboardPage},
        home::HomePage,
        login::LoginPage,
        menu::ClientMenuPage,
        reports::ReportsPage,
        reservations::ReservationsPage,
        signup::SignUpPage,
        staff::{ChooseNutritionistPage, ChooseTrainerPage},
    },
    state::session::SessionProvider,
};

pub const LOGIN_PATH: &str = "/login";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/menu",
    "/entrenador",
    "/nutricionista",
    "/clases",
    "/reservas",
    "/informes",
    "/elegir-entrenador",
    "/elegir-nutricionista",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/menu",
    "/entrenador",
    "/nutricionista",
    "/clases",
    "/reservas",
    "/informes",
    "/elegir-entrenador",
    "/elegir-nutricionista",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/signup"];

/// Landing screen for a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dashboard {
    Client,
    Trainer,
    Nutritionist,
}

impl Dashboard {
    /// Trainer wins when both flags are set.
    pub fn for_roles(roles: RoleFlags) -> Self {
        if roles.is_trainer {
            Dashboard::Trainer
        } else if roles.is_nutritionist {
            Dashboard::Nutritionist
        } else {
            Dashboard::Client
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Dashboard::Client => "/menu",
            Dashboard::Trainer => "/entrenador",
            Dashboard::Nutritionist => "/nutricionista",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Dashboard::Client => "Menú principal",
            Dashboard::Trainer => "Panel del entrenador",
            Dashboard::Nutritionist => "Panel del nutricionista",
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="GymApp"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignUpPage/>
                    <Route path="/menu" view=ProtectedClientMenu/>
                    <Route path="/entrenador" view=ProtectedTrainerDashboard/>
                    <Route path="/nutricionista" view=ProtectedNutritionistDashboard/>
                    <Route path="/clases" view=ProtectedClasses/>
                    <Route path="/reservas" view=ProtectedReservations/>
                    <Route path="/informes" view=ProtectedReports/>
                    <Route path="/elegir-entrenador" view=ProtectedChooseTrainer/>
                    <Route path="/elegir-nutricionista" view=ProtectedChooseNutritionist/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedClientMenu() -> impl IntoView {
    view! { <RequireDashboard dashboard=Dashboard::Client><ClientMenuPage/></RequireDashboard> }
}

#[component]
fn ProtectedTrainerDashboard() -> impl IntoView {
    view! { <RequireDashboard dashboard=Dashboard::Trainer><TrainerDashboardPage/></RequireDashboard> }
}

#[component]
fn ProtectedNutritionistDashboard() -> impl IntoView {
    view! {
        <RequireDashboard dashboard=Dashboard::Nutritionist>
            <NutritionistDashboardPage/>
        </RequireDashboard>
    }
}

#[component]
fn ProtectedClasses() -> impl IntoView {
    view! { <RequireAuth><ClassesPage/></RequireAuth> }
}

#[component]
fn ProtectedReservations() -> impl IntoView {
    view! { <RequireAuth><ReservationsPage/></RequireAuth> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireAuth><ReportsPage/></RequireAuth> }
}

#[component]
fn ProtectedChooseTrainer() -> impl IntoView {
    view! { <RequireAuth><ChooseTrainerPage/></RequireAuth> }
}

#[component]
fn ProtectedChooseNutritionist() -> impl IntoView {
    view! { <RequireAuth><ChooseNutritionistPage/></RequireAuth> }
}
