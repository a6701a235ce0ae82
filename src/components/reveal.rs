use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use js_sys::Array;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::counter::CounterAnimation;

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Flips to true the first time `node` scrolls into view. Stays true afterwards.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut teardown: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_visible = visible.clone();
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    on_visible.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );

                    let mut init = IntersectionObserverInit::new();
                    init.threshold(&JsValue::from_f64(REVEAL_THRESHOLD))
                        .root_margin(REVEAL_ROOT_MARGIN);

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            teardown = Some((observer, callback));
                        }
                        Err(_) => {
                            // Old browsers: just show the content
                            debug!("IntersectionObserver unavailable, revealing immediately");
                            visible.set(true);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// One of the `animate-*` classes from the page stylesheet.
    #[prop_or(AttrValue::Static("animate-fade-in"))]
    pub animation: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!(props.animation.to_string(), props.class.clone(), visible.then(|| "animate-in"))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

/// Counts up to `target` once visible.
#[function_component]
pub fn StatCounter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let shown = use_state_eq(|| 0u32);

    {
        let shown = shown.clone();
        let target = props.target;
        use_effect_with_deps(
            move |visible: &bool| {
                let alive = Rc::new(Cell::new(true));
                if *visible {
                    let alive = alive.clone();
                    spawn_local(async move {
                        let mut counter = CounterAnimation::new(target);
                        loop {
                            TimeoutFuture::new(config::COUNTER_TICK_MS).await;
                            if !alive.get() {
                                break;
                            }
                            shown.set(counter.tick());
                            if counter.is_done() {
                                break;
                            }
                        }
                    });
                }
                move || alive.set(false)
            },
            visible,
        );
    }

    html! {
        <div ref={node} class={classes!("stat-item", "animate-counter", visible.then(|| "animate-in"))}>
            <span class="stat-number">{format!("{}{}", *shown, props.suffix)}</span>
            <span class="stat-label">{props.label.to_string()}</span>
        </div>
    }
}
