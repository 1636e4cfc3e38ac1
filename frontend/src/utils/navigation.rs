/// Full-page navigation, as after login and logout.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = web_sys::window() {
            if let Err(err) = win.location().set_href(path) {
                log::error!("navigation to {} failed: {:?}", path, err);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("redirect to {} skipped outside the browser", path);
}
