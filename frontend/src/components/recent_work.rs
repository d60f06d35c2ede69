use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::asset_url;
use crate::content::{RECENT_WORK, RECENT_WORK_STAGGER};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

#[function_component(RecentWork)]
pub fn recent_work() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    let blocks = RECENT_WORK_STAGGER.blocks(RECENT_WORK.iter());
    let instructions = sequence(&blocks, state);

    html! {
        <section id="recent-work" class="section-padding light-section" ref={node}>
            <div class="container-custom">
                <Reveal instruction={RevealInstruction::for_state(state, 0.0)} class={classes!("section-header")}>
                    <h2 class="heading-lg">{"Recently shipped"}</h2>
                </Reveal>
                <div class="recent-strip">
                    {
                        for blocks.iter().zip(instructions).map(|(block, instruction)| html! {
                            <Reveal key={block.order_index} instruction={instruction} class={classes!("recent-item")}>
                                <img src={asset_url(block.payload.image)} alt={block.payload.title} loading="lazy" />
                                <p>{block.payload.title}</p>
                            </Reveal>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
