use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::analytics::track_event;
use crate::config;
use crate::Route;

const SECTIONS: &[(&str, &str)] = &[
    ("beranda", "Beranda"),
    ("tentang", "Tentang"),
    ("produk", "Produk"),
    ("kontak", "Kontak"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavAppearance {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Remembers the previous scroll offset to tell scrolling down from up.
#[derive(Default)]
pub struct NavScroll {
    last_top: f64,
}

impl NavScroll {
    pub fn update(&mut self, top: f64) -> NavAppearance {
        let hidden = top > self.last_top && top > config::NAV_HIDE_AFTER_PX;
        self.last_top = top;
        NavAppearance {
            scrolled: top > config::NAV_SCROLLED_AFTER_PX,
            hidden,
        }
    }
}

/// Where to scroll so the target clears the fixed navbar.
pub fn anchor_offset(target_top: f64, nav_height: f64) -> f64 {
    target_top - nav_height - config::ANCHOR_EXTRA_OFFSET_PX
}

/// Smoothly scrolls to the element with `id`. Returns false when it isn't on this page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };

    let nav_height = document
        .get_element_by_id("navbar")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0);

    let mut options = ScrollToOptions::new();
    options
        .top(anchor_offset(f64::from(target.offset_top()), nav_height))
        .behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[function_component]
pub fn Nav() -> Html {
    let menu_open = use_state(|| false);
    let appearance = use_state_eq(NavAppearance::default);
    let tracker = use_mut_ref(NavScroll::default);
    let nav_ref = use_node_ref();

    {
        let appearance = appearance.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let top = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or_default();
                    appearance.set(tracker.borrow_mut().update(top));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Clicking anywhere outside the toggle and menu closes the menu
    {
        let menu_open = menu_open.clone();
        use_click_away(nav_ref.clone(), move |_: Event| {
            menu_open.set(false);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let nav_style = if appearance.hidden {
        "transform: translateY(-100%);"
    } else {
        "transform: translateY(0);"
    };

    html! {
        <nav id="navbar" class={classes!("navbar", appearance.scrolled.then(|| "scrolled"))} style={nav_style}>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        background: transparent;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .navbar.scrolled {
                        background: rgba(255, 255, 255, 0.96);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }
                    .nav-container {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }
                    .nav-logo {
                        font-weight: 700;
                        color: #2d5a27;
                        text-decoration: none;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #2d5a27;
                        text-decoration: none;
                    }
                    .nav-toggle {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .nav-toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #2d5a27;
                    }
                    @media (max-width: 768px) {
                        .nav-toggle {
                            display: block;
                        }
                        .nav-menu {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem 1.5rem;
                            background: #fff;
                        }
                        .nav-menu.active {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav-container" ref={nav_ref}>
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Cirebon Smart Farm"}
                </Link<Route>>

                <button
                    id="nav-toggle"
                    class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for SECTIONS.iter().map(|&(id, label)| {
                        let close_menu = close_menu.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            close_menu.emit(e.clone());
                            // Off the home page the plain href takes over
                            if scroll_to_section(id) {
                                e.prevent_default();
                            }
                        });
                        html! {
                            <a href={format!("/#{}", id)} class="nav-link" onclick={onclick}>{label}</a>
                        }
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <a
                        href="/#kontak"
                        class="nav-link cta-button"
                        onclick={
                            let close_menu = close_menu.clone();
                            Callback::from(move |e: MouseEvent| {
                                close_menu.emit(e.clone());
                                track_event("CTA", "click", "Pesan Sekarang");
                                if scroll_to_section("kontak") {
                                    e.prevent_default();
                                }
                            })
                        }
                    >
                        {"Pesan Sekarang"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_class_after_threshold() {
        let mut scroll = NavScroll::default();
        assert!(!scroll.update(50.0).scrolled);
        assert!(scroll.update(51.0).scrolled);
    }

    #[test]
    fn hides_only_when_scrolling_down_past_hide_point() {
        let mut scroll = NavScroll::default();
        assert!(!scroll.update(80.0).hidden);
        assert!(scroll.update(150.0).hidden);
        // scrolling back up shows it again
        assert!(!scroll.update(140.0).hidden);
        assert!(scroll.update(400.0).hidden);
        assert!(!scroll.update(400.0).hidden);
    }

    #[test]
    fn anchor_clears_navbar() {
        assert_eq!(anchor_offset(1000.0, 72.0), 908.0);
    }
}
