use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config;
use crate::content::GalleryImage;

/// Hides an image that failed to load.
pub fn hide_broken_image(e: Event) {
    if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
        warn!("Image failed to load: {}", img.src());
        let _ = img.style().set_property("display", "none");
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductGalleryProps {
    pub images: &'static [GalleryImage],
}

/// Main image plus thumbnails. Each gallery tracks its own active thumbnail.
#[function_component]
pub fn ProductGallery(props: &ProductGalleryProps) -> Html {
    let active = use_state(|| 0usize);
    let pressed = use_state(|| false);
    let pulse = use_mut_ref(|| None::<Timeout>);

    let Some(main) = props.images.get(*active) else {
        return html! {};
    };

    let thumbnails = props.images.iter().enumerate().map(|(i, image)| {
        let onclick = {
            let active = active.clone();
            let pressed = pressed.clone();
            let pulse = pulse.clone();
            Callback::from(move |_: MouseEvent| {
                active.set(i);
                pressed.set(true);
                let pressed = pressed.clone();
                // Replacing the handle cancels a pulse still in flight
                *pulse.borrow_mut() = Some(Timeout::new(config::GALLERY_PULSE_MS, move || {
                    pressed.set(false);
                }));
            })
        };
        html! {
            <img
                key={i}
                class={classes!("thumbnail", (*active == i).then(|| "active"))}
                src={image.src}
                alt={image.alt}
                loading="lazy"
                onerror={Callback::from(hide_broken_image)}
                onclick={onclick}
            />
        }
    });

    let transform = if *pressed {
        "transform: scale(0.95);"
    } else {
        "transform: scale(1);"
    };

    html! {
        <div class="product-gallery">
            <div class="main-image">
                <img
                    src={main.src}
                    alt={main.alt}
                    style={transform}
                    onerror={Callback::from(hide_broken_image)}
                />
            </div>
            <div class="thumbnails">
                { for thumbnails }
            </div>
        </div>
    }
}
