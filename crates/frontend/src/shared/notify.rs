//! Blocking notices shown to the user.

/// Show a blocking browser alert. No-op outside a browser window.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
