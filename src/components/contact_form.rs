use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::viewport::{on_input_blur, on_input_focus};
use crate::contact::submission::{handoff_plan, FormValues, HandoffStep, Submission, SubmissionPhase};
use crate::contact::validation::{Field, FieldErrors};
use crate::content::CONTACT_SUBJECTS;

const BORDER_INVALID: &str = "border-color: #ef4444;";
const BORDER_VALID: &str = "border-color: #e5e7eb;";

/// Element id scoped to one form instance. An empty prefix keeps the bare id.
fn scoped_id(prefix: &str, id: &str) -> String {
    if prefix.is_empty() {
        id.to_string()
    } else {
        format!("{prefix}-{id}")
    }
}

fn event_value(e: &Event) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn event_checked(e: &Event) -> bool {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}

/// Plays the post-validation steps in order. Stops early once the form is gone.
fn run_handoff(
    plan: Vec<(u32, HandoffStep)>,
    submission: Rc<RefCell<Submission>>,
    phase: UseStateSetter<SubmissionPhase>,
    mounted: Rc<RefCell<bool>>,
) {
    spawn_local(async move {
        for (delay_ms, step) in plan {
            TimeoutFuture::new(delay_ms).await;
            if !*mounted.borrow() {
                debug!("Contact form unmounted, dropping pending submission steps");
                return;
            }
            match step {
                HandoffStep::RevealSuccess => {
                    let mut submission = submission.borrow_mut();
                    submission.finish();
                    phase.set(submission.phase());
                    info!("Contact form submitted");
                }
                HandoffStep::OpenMailClient(uri) => {
                    gloo_console::log!("Opening mail client for contact handoff");
                    if let Some(window) = web_sys::window() {
                        if let Err(err) = window.location().set_href(&uri) {
                            warn!("Could not open mail client: {:?}", err);
                        }
                    }
                }
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Prepended to every element id so several forms can share a page.
    #[prop_or_default]
    pub id_prefix: AttrValue,
}

#[function_component]
pub fn ContactForm(props: &ContactFormProps) -> Html {
    let values = use_mut_ref(FormValues::default);
    let submission = use_mut_ref(Submission::default);
    let phase = use_state(|| SubmissionPhase::Idle);
    let errors = use_state(FieldErrors::default);
    let mounted = use_mut_ref(|| true);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *mounted.borrow_mut() = false;
                }
            },
            (),
        );
    }

    // Typing into a field clears its error until the next blur
    let on_text = |field: Option<Field>, set: fn(&mut FormValues, String)| {
        let values = values.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            set(&mut values.borrow_mut(), event_value(&e));
            if let Some(field) = field {
                let mut next = (*errors).clone();
                if next.input(field) {
                    errors.set(next);
                }
            }
        })
    };

    let on_check = |field: Option<Field>, set: fn(&mut FormValues, bool)| {
        let values = values.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            set(&mut values.borrow_mut(), event_checked(&e));
            if let Some(field) = field {
                let mut next = (*errors).clone();
                if next.input(field) {
                    errors.set(next);
                }
            }
        })
    };

    let on_blur = |field: Field| {
        let values = values.clone();
        let errors = errors.clone();
        Callback::from(move |e: FocusEvent| {
            on_input_blur(e);
            let mut next = (*errors).clone();
            next.blur(field, &values.borrow().value_of(field));
            errors.set(next);
        })
    };

    let on_submit = {
        let values = values.clone();
        let submission = submission.clone();
        let phase = phase.clone();
        let errors = errors.clone();
        let mounted = mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (outcomes, draft) = {
                let mut state = submission.borrow_mut();
                let result = state.begin(&values.borrow(), &Local::now());
                phase.set(state.phase());
                result
            };
            if outcomes.is_empty() {
                // already submitting
                return;
            }

            let mut shown = FieldErrors::default();
            shown.submit(&outcomes);
            if !shown.is_empty() {
                debug!("Contact form has {} invalid field(s)", shown.len());
            }
            errors.set(shown);

            if let Some(draft) = draft {
                run_handoff(
                    handoff_plan(&draft),
                    submission.clone(),
                    phase.setter(),
                    mounted.clone(),
                );
            }
        })
    };

    let prefix: &str = &props.id_prefix;
    let id = |bare: &str| scoped_id(prefix, bare);

    let border = |field: Field| {
        if errors.message(field).is_some() {
            BORDER_INVALID
        } else {
            BORDER_VALID
        }
    };
    let error_text = |field: Field| {
        html! {
            <span class="error-message" id={id(&field.error_id())}>
                {errors.message(field).unwrap_or_default()}
            </span>
        }
    };

    let busy = *phase == SubmissionPhase::Submitting;
    let succeeded = *phase == SubmissionPhase::Succeeded;

    html! {
        <div class="contact-form-container">
            <style>
                {r#"
                    .contact-form .form-group {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        padding: 0.75rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                        font-size: 1rem;
                    }
                    .contact-form .checkbox-group {
                        flex-direction: row;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .error-message {
                        color: #ef4444;
                        font-size: 0.85rem;
                        min-height: 1em;
                    }
                    .submit-btn {
                        background: #2d5a27;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem 2rem;
                        cursor: pointer;
                    }
                    .submit-btn:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    .spinner {
                        display: inline-block;
                        width: 14px;
                        height: 14px;
                        border: 2px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .form-success {
                        text-align: center;
                        padding: 2rem;
                    }
                "#}
            </style>
            <form
                id={id("contactForm")}
                class="contact-form"
                novalidate={true}
                onsubmit={on_submit}
                style={if succeeded { "display: none;" } else { "" }}
            >
                <div class="form-group">
                    <label for={id("name")}>{"Nama Lengkap *"}</label>
                    <input
                        type="text"
                        id={id("name")}
                        name="name"
                        style={border(Field::Name)}
                        oninput={on_text(Some(Field::Name), |v, s| v.name = s).reform(Event::from)}
                        onfocus={Callback::from(on_input_focus)}
                        onblur={on_blur(Field::Name)}
                    />
                    { error_text(Field::Name) }
                </div>
                <div class="form-group">
                    <label for={id("email")}>{"Email *"}</label>
                    <input
                        type="email"
                        id={id("email")}
                        name="email"
                        style={border(Field::Email)}
                        oninput={on_text(Some(Field::Email), |v, s| v.email = s).reform(Event::from)}
                        onfocus={Callback::from(on_input_focus)}
                        onblur={on_blur(Field::Email)}
                    />
                    { error_text(Field::Email) }
                </div>
                <div class="form-group">
                    <label for={id("phone")}>{"Telepon"}</label>
                    <input
                        type="tel"
                        id={id("phone")}
                        name="phone"
                        oninput={on_text(None, |v, s| v.phone = s).reform(Event::from)}
                        onfocus={Callback::from(on_input_focus)}
                        onblur={Callback::from(on_input_blur)}
                    />
                </div>
                <div class="form-group">
                    <label for={id("company")}>{"Perusahaan"}</label>
                    <input
                        type="text"
                        id={id("company")}
                        name="company"
                        oninput={on_text(None, |v, s| v.company = s).reform(Event::from)}
                        onfocus={Callback::from(on_input_focus)}
                        onblur={Callback::from(on_input_blur)}
                    />
                </div>
                <div class="form-group">
                    <label for={id("subject")}>{"Subjek *"}</label>
                    <select
                        id={id("subject")}
                        name="subject"
                        style={border(Field::Subject)}
                        onchange={on_text(Some(Field::Subject), |v, s| v.subject = s)}
                        onfocus={Callback::from(on_input_focus)}
                        onblur={on_blur(Field::Subject)}
                    >
                        <option value="" selected={true}>{"Pilih subjek"}</option>
                        { for CONTACT_SUBJECTS.iter().map(|subject| html! {
                            <option value={*subject}>{*subject}</option>
                        }) }
                    </select>
                    { error_text(Field::Subject) }
                </div>
                <div class="form-group">
                    <label for={id("message")}>{"Pesan *"}</label>
                    <textarea
                        id={id("message")}
                        name="message"
                        rows="5"
                        style={border(Field::Message)}
                        oninput={on_text(Some(Field::Message), |v, s| v.message = s).reform(Event::from)}
                        onfocus={Callback::from(on_input_focus)}
                        onblur={on_blur(Field::Message)}
                    />
                    { error_text(Field::Message) }
                </div>
                <div class="form-group checkbox-group">
                    <input
                        type="checkbox"
                        id={id("newsletter")}
                        name="newsletter"
                        onchange={on_check(None, |v, c| v.newsletter = c)}
                    />
                    <label for={id("newsletter")}>{"Kirimi saya kabar terbaru dan promo"}</label>
                </div>
                <div class="form-group checkbox-group">
                    <input
                        type="checkbox"
                        id={id("privacy")}
                        name="privacy"
                        style={border(Field::Privacy)}
                        onchange={on_check(Some(Field::Privacy), |v, c| v.privacy = c)}
                        onblur={on_blur(Field::Privacy)}
                    />
                    <label for={id("privacy")}>{"Saya menyetujui kebijakan privasi *"}</label>
                </div>
                { error_text(Field::Privacy) }
                <button type="submit" class="submit-btn" disabled={busy}>
                    if busy {
                        <span class="spinner"></span>{" Mengirim..."}
                    } else {
                        {"Kirim Pesan"}
                    }
                </button>
            </form>
            <div id={id("formSuccess")} class="form-success" style={if succeeded { "display: block;" } else { "display: none;" }}>
                <h3>{"Terima kasih!"}</h3>
                <p>{"Pesan Anda telah kami terima. Aplikasi email Anda akan terbuka untuk mengirim salinannya."}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_keeps_page_ids() {
        assert_eq!(scoped_id("", "name"), "name");
        assert_eq!(scoped_id("", &Field::Name.error_id()), "nameError");
    }

    #[test]
    fn prefixed_forms_do_not_share_ids() {
        let ids = |prefix: &str| -> Vec<String> {
            Field::ALL
                .iter()
                .flat_map(|field| [field.id().to_string(), field.error_id()])
                .map(|bare| scoped_id(prefix, &bare))
                .collect()
        };
        let first = ids("");
        let second = ids("footer");
        assert!(second.iter().all(|id| !first.contains(id)));
        assert!(second.contains(&"footer-emailError".to_string()));
    }
}
