pub mod storage;
pub mod style;
pub mod theme;

use chrono::{Datelike, Local};
use gloo_console::error as console_error;

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Open an external URL in a new browsing context, isolated from this one.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
    {
        console_error!(format!("Failed to open {url}: {err:?}"));
    }
}
