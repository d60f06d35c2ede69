use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{HOW_IT_WORKS, HOW_IT_WORKS_STAGGER};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    let blocks = HOW_IT_WORKS_STAGGER.blocks(HOW_IT_WORKS.iter());
    let instructions = sequence(&blocks, state);

    html! {
        <section id="how-it-works" class="section-padding light-section" ref={node}>
            <div class="container-custom">
                <Reveal instruction={RevealInstruction::for_state(state, 0.0)} class={classes!("section-header")}>
                    <h2 class="heading-lg">{"How it works"}</h2>
                    <p class="body-lg">{"Four steps from first call to launch day."}</p>
                </Reveal>
                <div class="grid-4">
                    {
                        for blocks.iter().zip(instructions).map(|(block, instruction)| {
                            let step = block.payload;
                            html! {
                                <Reveal key={block.order_index} instruction={instruction}>
                                    <div class="step-number">{step.number}</div>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </Reveal>
                            }
                        })
                    }
                </div>
            </div>
        </section>
    }
}
