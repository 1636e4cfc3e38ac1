mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting GymApp frontend (wasm)");

    // Runtime config loads from ./config.json without blocking the first render.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
    });

    router::mount_app();
}
