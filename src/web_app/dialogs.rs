// web_app/dialogs.rs - Blocking browser dialogs
//
// In the hydrated client these are `window.alert` / `window.confirm`.
// During server rendering no user is there to answer, so alerts are logged
// and confirmations are refused.

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        /// Show a blocking alert
        pub fn alert(message: &str) {
            let shown = leptos::web_sys::window()
                .map(|window| window.alert_with_message(message).is_ok())
                .unwrap_or(false);
            if !shown {
                tracing::warn!("Could not show alert: {}", message);
            }
        }

        /// Ask for confirmation; `false` when the dialog cannot be shown
        pub fn confirm(message: &str) -> bool {
            leptos::web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
    } else {
        /// Show a blocking alert
        pub fn alert(message: &str) {
            tracing::info!("alert: {}", message);
        }

        /// Ask for confirmation; `false` when the dialog cannot be shown
        pub fn confirm(message: &str) -> bool {
            tracing::info!("confirm refused outside the browser: {}", message);
            false
        }
    }
}
