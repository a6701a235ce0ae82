use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;

/// Opening one item closes the rest; clicking the open item closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question.to_string()}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.to_string()}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_: ()| open.set(toggle_open(*open, i)))
                };
                html! {
                    <FaqItem
                        key={i}
                        question={entry.question}
                        answer={entry.answer}
                        is_open={*open == Some(i)}
                        on_toggle={on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_open() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_open(open, 0), Some(0));
        assert_eq!(toggle_open(Some(0), 0), None);
    }
}
