use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{FaqEntry, FAQ, FAQ_STAGGER};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    let blocks = FAQ_STAGGER.blocks(FAQ.iter());
    let instructions = sequence(&blocks, state);

    html! {
        <section id="faq" class="section-padding light-section" ref={node}>
            <div class="container-custom">
                <Reveal instruction={RevealInstruction::for_state(state, 0.0)} class={classes!("section-header")}>
                    <h2 class="heading-lg">{"Frequently Asked Questions"}</h2>
                </Reveal>
                <div class="faq-list">
                    {
                        for blocks.iter().zip(instructions).map(|(block, instruction)| html! {
                            <Reveal key={block.order_index} instruction={instruction}>
                                <FaqItem entry={block.payload} />
                            </Reveal>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
