use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::analytics::track_event;
use crate::components::nav::scroll_to_section;
use crate::config;
use crate::content::Slide;
use crate::slider::{Navigation, Slider, SwipeTracker};

type SharedSlider = Rc<RefCell<Option<Slider<Interval>>>>;

/// Ticks `next()` every autoplay period. Holds only a weak reference so the
/// slider owning this interval is not kept alive by it.
fn autoplay(slider: &SharedSlider, active: UseStateSetter<usize>) -> Interval {
    let weak = Rc::downgrade(slider);
    Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
        let Some(slider) = weak.upgrade() else {
            return;
        };
        if let Some(deck) = slider.borrow_mut().as_mut() {
            active.set(deck.next());
        };
    })
}

/// Vertical shift of the hero for a page scrolled by `scroll_top`. Past the
/// first screen the hero keeps its last offset.
pub fn parallax_offset(scroll_top: f64, inner_height: f64) -> Option<f64> {
    (scroll_top < inner_height).then(|| scroll_top * config::PARALLAX_RATE)
}

/// Lets one call through per window; calls inside the window are dropped.
#[derive(Default)]
pub struct Throttle {
    open_at_ms: f64,
}

impl Throttle {
    pub fn ready(&mut self, now_ms: f64, limit_ms: f64) -> bool {
        if now_ms < self.open_at_ms {
            return false;
        }
        self.open_at_ms = now_ms + limit_ms;
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<Slide>,
}

#[function_component]
pub fn HeroSlider(props: &HeroSliderProps) -> Html {
    if props.slides.is_empty() {
        debug!("No hero slides, skipping slider");
        return html! {};
    }

    html! { <SlideDeck slides={props.slides.clone()} /> }
}

#[function_component]
fn SlideDeck(props: &HeroSliderProps) -> Html {
    let len = props.slides.len();
    let slider: SharedSlider = use_mut_ref(move || Slider::new(len));
    let swipe = use_mut_ref(SwipeTracker::default);
    // Re-render trigger only; the slider decides which slide is active
    let active = use_state(|| 0usize);
    let section_ref = use_node_ref();

    // Autoplay starts once mounted and is dropped on unmount
    {
        let slider = slider.clone();
        let active = active.setter();
        use_effect_with_deps(
            move |_| {
                let handle = autoplay(&slider, active);
                if let Some(deck) = slider.borrow_mut().as_mut() {
                    deck.start_autoplay(handle);
                }
                move || {
                    if let Some(deck) = slider.borrow_mut().as_mut() {
                        deck.stop_autoplay();
                    }
                }
            },
            (),
        );
    }

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let mut throttle = Throttle::default();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if !throttle.ready(js_sys::Date::now(), config::PARALLAX_THROTTLE_MS) {
                        return;
                    }
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let top = window.scroll_y().unwrap_or_default();
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or_default();
                    let (Some(offset), Some(hero)) =
                        (parallax_offset(top, height), section_ref.cast::<HtmlElement>())
                    else {
                        return;
                    };
                    let _ = hero
                        .style()
                        .set_property("transform", &format!("translateY({}px)", offset));
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

    let navigate = {
        let slider = slider.clone();
        let active = active.setter();
        Callback::from(move |nav: Navigation| {
            let mut slot = slider.borrow_mut();
            if let Some(deck) = slot.as_mut() {
                let index = deck.navigate(nav, || autoplay(&slider, active.clone()));
                active.set(index);
            }
        })
    };

    let on_mouse_enter = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(deck) = slider.borrow_mut().as_mut() {
                deck.stop_autoplay();
            }
        })
    };

    let on_mouse_leave = {
        let slider = slider.clone();
        let active = active.setter();
        Callback::from(move |_: MouseEvent| {
            let handle = autoplay(&slider, active.clone());
            if let Some(deck) = slider.borrow_mut().as_mut() {
                deck.start_autoplay(handle);
            }
        })
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().begin(f64::from(touch.client_x()));
            }
        })
    };

    let on_touch_end = {
        let navigate = navigate.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.changed_touches().get(0) else {
                return;
            };
            let nav = swipe.borrow_mut().end(f64::from(touch.client_x()));
            if let Some(nav) = nav {
                navigate.emit(nav);
            }
        })
    };

    let on_prev = navigate.reform(|_: MouseEvent| Navigation::Prev);
    let on_next = navigate.reform(|_: MouseEvent| Navigation::Next);

    let shown: Vec<bool> = match slider.borrow().as_ref() {
        Some(deck) => (0..deck.len()).map(|i| deck.is_active(i)).collect(),
        None => Vec::new(),
    };
    let is_active = |i: usize| shown.get(i).copied().unwrap_or(false);

    html! {
        <section
            ref={section_ref}
            class="hero-slider"
            id="beranda"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <style>
                {r#"
                    .hero-slider {
                        position: relative;
                        height: 90vh;
                        overflow: hidden;
                    }
                    .hero-slider .slide {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        opacity: 0;
                        transition: opacity 0.8s ease-in-out;
                    }
                    .hero-slider .slide.active {
                        opacity: 1;
                        z-index: 1;
                    }
                    .slide-content {
                        position: absolute;
                        bottom: 20%;
                        left: 8%;
                        max-width: 600px;
                        color: #fff;
                        text-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);
                    }
                    .slider-controls button {
                        position: absolute;
                        top: 50%;
                        z-index: 2;
                        background: rgba(45, 90, 39, 0.6);
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        cursor: pointer;
                    }
                    .slider-controls .prev-btn { left: 2rem; }
                    .slider-controls .next-btn { right: 2rem; }
                    .slider-indicators {
                        position: absolute;
                        bottom: 2rem;
                        width: 100%;
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        z-index: 2;
                    }
                    .indicator {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: 2px solid #fff;
                        background: transparent;
                        cursor: pointer;
                    }
                    .indicator.active {
                        background: #fff;
                    }
                "#}
            </style>
            { for props.slides.iter().enumerate().map(|(i, slide)| {
                let cta_target = slide.cta_target;
                let cta_label = slide.cta_label;
                let on_cta = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    track_event("CTA", "click", cta_label);
                    scroll_to_section(cta_target);
                });
                html! {
                    <div
                        key={i}
                        class={classes!("slide", is_active(i).then(|| "active"))}
                        style={format!("background-image: url('{}');", slide.image)}
                    >
                        <div class="slide-content">
                            <h1>{slide.title}</h1>
                            <p>{slide.subtitle}</p>
                            <a href={format!("#{}", cta_target)} class="cta-button" onclick={on_cta}>
                                {cta_label}
                            </a>
                        </div>
                    </div>
                }
            }) }
            <div class="slider-controls">
                <button class="prev-btn" aria-label="Sebelumnya" onclick={on_prev}>{"‹"}</button>
                <button class="next-btn" aria-label="Berikutnya" onclick={on_next}>{"›"}</button>
            </div>
            <div class="slider-indicators">
                { for (0..shown.len()).map(|i| {
                    let onclick = navigate.reform(move |_: MouseEvent| Navigation::Goto(i));
                    html! {
                        <button
                            key={i}
                            class={classes!("indicator", is_active(i).then(|| "active"))}
                            onclick={onclick}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_stops_at_the_viewport_height() {
        assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
        assert_eq!(parallax_offset(200.0, 800.0), Some(-100.0));
        assert_eq!(parallax_offset(799.0, 800.0), Some(-399.5));
        assert_eq!(parallax_offset(800.0, 800.0), None);
        assert_eq!(parallax_offset(1_500.0, 800.0), None);
    }

    #[test]
    fn throttle_drops_calls_inside_the_window() {
        let mut throttle = Throttle::default();
        assert!(throttle.ready(1_000.0, 16.0));
        assert!(!throttle.ready(1_010.0, 16.0));
        assert!(throttle.ready(1_016.0, 16.0));
        assert!(!throttle.ready(1_020.0, 16.0));
    }
}
