use yew::prelude::*;

use crate::components::faq::FaqList;
use crate::components::reveal::Reveal;
use crate::content::FAQ;

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    html! {
        <div class="faq-page">
            <style>
                {r#"
                    .faq-page {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 8rem 1.5rem 4rem;
                    }
                    .faq-item {
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        padding: 1.25rem 0;
                        background: none;
                        border: none;
                        font-size: 1.1rem;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }
                    .faq-item.active .faq-answer {
                        max-height: 400px;
                    }
                "#}
            </style>
            <Reveal animation="animate-fade-in">
                <h1>{"Pertanyaan yang Sering Diajukan"}</h1>
                <p>{"Semua yang perlu Anda ketahui tentang sayuran dan pelatihan hidroponik kami"}</p>
            </Reveal>
            <FaqList entries={FAQ} />
        </div>
    }
}
