use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::asset_url;
use crate::content::{portfolio_blocks, PortfolioItem, PORTFOLIO_SUBTITLE, PORTFOLIO_TITLE};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

#[derive(Properties, PartialEq)]
struct PortfolioCardProps {
    item: &'static PortfolioItem,
    instruction: RevealInstruction,
}

#[function_component(PortfolioCard)]
fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let item = props.item;

    html! {
        <Reveal instruction={props.instruction} class={classes!("glow-box", "portfolio-card")}>
            <div class="card-body">
                <div class="portfolio-image">
                    <img src={asset_url(item.image)} alt={item.title} loading="lazy" />
                </div>
                <div class="card-text">
                    <h3 class="gradient-text">{item.title}</h3>
                    <p>{item.description}</p>
                    <div class="chips">
                        { for item.categories.iter().map(|category| html! {
                            <span class="chip">{*category}</span>
                        }) }
                    </div>
                    <div class="card-services">{item.services}</div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    let blocks = portfolio_blocks();
    let instructions = sequence(&blocks, state);

    html! {
        <section id="portfolio" class="section-padding light-section" ref={node}>
            <div class="container-custom">
                <Reveal instruction={RevealInstruction::for_state(state, 0.0)} class={classes!("section-header")}>
                    <h2 class="heading-lg gradient-text">{PORTFOLIO_TITLE}</h2>
                    <p class="body-lg">{PORTFOLIO_SUBTITLE}</p>
                </Reveal>

                <div class="grid-3">
                    {
                        for blocks.iter().zip(instructions).map(|(block, instruction)| html! {
                            <PortfolioCard
                                key={block.order_index}
                                item={block.payload}
                                instruction={instruction}
                            />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
