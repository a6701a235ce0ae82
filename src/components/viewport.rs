use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

const VIEWPORT_DEFAULT: &str = "width=device-width, initial-scale=1.0";
const VIEWPORT_NO_ZOOM: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=0";

fn set_viewport(content: &str) {
    let viewport = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name=viewport]").ok().flatten());
    if let Some(viewport) = viewport {
        let _ = viewport.set_attribute("content", content);
    }
}

/// iOS zooms into focused inputs on narrow screens; pin the scale while typing.
pub fn on_input_focus(_: FocusEvent) {
    let narrow = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map_or(false, |width| width < config::MOBILE_BREAKPOINT_PX);
    if narrow {
        set_viewport(VIEWPORT_NO_ZOOM);
    }
}

pub fn on_input_blur(_: FocusEvent) {
    set_viewport(VIEWPORT_DEFAULT);
}

/// Scrolls back to the top shortly after the device is rotated.
#[hook]
pub fn use_orientation_reset() {
    use_event_with_window("orientationchange", move |_: Event| {
        Timeout::new(config::ORIENTATION_RESET_DELAY_MS, || {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
        .forget();
    });
}
