use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{WHY_US, WHY_US_STAGGER};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    let blocks = WHY_US_STAGGER.blocks(WHY_US.iter());
    let instructions = sequence(&blocks, state);

    html! {
        <section id="why-us" class="section-padding muted-section" ref={node}>
            <div class="container-custom">
                <Reveal instruction={RevealInstruction::for_state(state, 0.0)} class={classes!("section-header")}>
                    <h2 class="heading-lg gradient-text">{"Why founders pick us"}</h2>
                    <p class="body-lg">{"A small senior team that treats your product like its own."}</p>
                </Reveal>
                <div class="grid-4">
                    {
                        for blocks.iter().zip(instructions).map(|(block, instruction)| {
                            let feature = block.payload;
                            html! {
                                <Reveal key={block.order_index} instruction={instruction}>
                                    <div class="feature-tile">
                                        <div class="feature-icon">{feature.icon}</div>
                                        <h3>{feature.title}</h3>
                                        <p>{feature.description}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                    }
                </div>
            </div>
        </section>
    }
}
