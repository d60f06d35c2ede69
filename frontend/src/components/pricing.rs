use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{PricingTier, CONTACT_EMAIL, PRICING, PRICING_STAGGER};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    tier: &'static PricingTier,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = props.tier;

    html! {
        <div class={classes!("pricing-card", tier.highlighted.then_some("highlighted"))}>
            {
                if tier.highlighted {
                    html! { <span class="pricing-badge">{"Most popular"}</span> }
                } else {
                    html! {}
                }
            }
            <h3>{tier.name}</h3>
            <p>{tier.summary}</p>
            <div>
                <span class="pricing-price">{tier.price}</span>
                <span class="pricing-cadence">{tier.cadence}</span>
            </div>
            <ul class="pricing-features">
                { for tier.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
            </ul>
            <a href={format!("mailto:{}?subject={}", CONTACT_EMAIL, tier.name)} class="nav-cta">
                {tier.cta}
            </a>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    let blocks = PRICING_STAGGER.blocks(PRICING.iter());
    let instructions = sequence(&blocks, state);

    html! {
        <section id="pricing" class="section-padding muted-section" ref={node}>
            <div class="container-custom">
                <Reveal instruction={RevealInstruction::for_state(state, 0.0)} class={classes!("section-header")}>
                    <h2 class="heading-lg gradient-text">{"Simple, transparent pricing"}</h2>
                    <p class="body-lg">{"Fixed prices for fixed scopes. No hourly surprises."}</p>
                </Reveal>
                <div class="grid-3">
                    {
                        for blocks.iter().zip(instructions).map(|(block, instruction)| html! {
                            <Reveal key={block.order_index} instruction={instruction}>
                                <PricingCard tier={block.payload} />
                            </Reveal>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
