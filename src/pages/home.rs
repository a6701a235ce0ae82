use yew::prelude::*;

use crate::analytics::track_event;
use crate::components::contact_form::ContactForm;
use crate::components::gallery::{hide_broken_image, ProductGallery};
use crate::components::hero_slider::HeroSlider;
use crate::components::nav::scroll_to_section;
use crate::components::reveal::{Reveal, StatCounter};
use crate::content::{PRODUCTS, SLIDES, STATS};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_consult = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        track_event("CTA", "click", "Konsultasi Gratis");
        scroll_to_section("kontak");
    });

    html! {
        <div class="home">
            <style>
                {r#"
                    .home section {
                        padding: 5rem 1.5rem;
                    }
                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .animate-fade-in,
                    .animate-slide-up,
                    .animate-scale,
                    .animate-counter {
                        opacity: 0;
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .animate-slide-up { transform: translateY(40px); }
                    .animate-scale { transform: scale(0.9); }
                    .animate-in {
                        opacity: 1;
                        transform: none;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        text-align: center;
                    }
                    .stat-number {
                        display: block;
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #2d5a27;
                    }
                    .product-section {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .main-image img {
                        width: 100%;
                        border-radius: 12px;
                        transition: transform 0.15s ease;
                    }
                    .thumbnails {
                        display: flex;
                        gap: 0.5rem;
                        margin-top: 0.5rem;
                    }
                    .thumbnail {
                        width: 72px;
                        height: 72px;
                        object-fit: cover;
                        border-radius: 8px;
                        opacity: 0.6;
                        cursor: pointer;
                    }
                    .thumbnail.active {
                        opacity: 1;
                        outline: 2px solid #4a7c59;
                    }
                    @media (max-width: 768px) {
                        .product-section {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <HeroSlider slides={SLIDES.to_vec()} />

            <section id="tentang">
                <div class="section-inner">
                    <Reveal animation="animate-slide-up">
                        <h2>{"Tentang Kami"}</h2>
                        <p>
                            {"Cirebon Smart Farm adalah kebun hidroponik modern yang memadukan greenhouse, sensor nutrisi, dan tenaga petani muda lokal. Kami menanam sayuran daun yang bersih, segar, dan konsisten sepanjang tahun."}
                        </p>
                        <img
                            src="/assets/about-greenhouse.jpg"
                            alt="Greenhouse Cirebon Smart Farm"
                            loading="lazy"
                            onerror={Callback::from(hide_broken_image)}
                        />
                    </Reveal>
                    <div class="stats-grid">
                        { for STATS.iter().map(|stat| html! {
                            <StatCounter target={stat.target} suffix={stat.suffix} label={stat.label} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="produk">
                <div class="section-inner">
                    <Reveal animation="animate-fade-in">
                        <h2>{"Produk Kami"}</h2>
                    </Reveal>
                    { for PRODUCTS.iter().map(|product| html! {
                        <Reveal animation="animate-scale" class="product-section">
                            <ProductGallery images={product.images} />
                            <div class="product-info">
                                <h3>{product.name}</h3>
                                <p>{product.description}</p>
                                <a href="#kontak" class="btn-primary" onclick={on_consult.clone()}>
                                    {"Konsultasi Gratis"}
                                </a>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="kontak">
                <div class="section-inner">
                    <Reveal animation="animate-fade-in">
                        <h2>{"Hubungi Kami"}</h2>
                        <p>{"Punya pertanyaan atau ingin memesan? Kirim pesan dan tim kami akan segera membalas."}</p>
                    </Reveal>
                    <ContactForm />
                </div>
            </section>
        </div>
    }
}
