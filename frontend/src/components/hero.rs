use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{HERO_STAGGER, HERO_SUBTITLE, HERO_TITLE};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    // Title, copy, buttons.
    let ladder = sequence(&HERO_STAGGER.blocks(0..3), state);
    let step = |index: usize| ladder.get(index).copied().unwrap_or(RevealInstruction::HIDDEN);

    html! {
        <header id="hero" class="hero" ref={node}>
            <div class="container-custom">
                <Reveal instruction={step(0)} duration={0.8}>
                    <h1 class="heading-xl">{HERO_TITLE}</h1>
                </Reveal>
                <Reveal instruction={step(1)} duration={0.8}>
                    <p class="body-lg">{HERO_SUBTITLE}</p>
                </Reveal>
                <Reveal instruction={step(2)} duration={0.8}>
                    <div class="hero-cta-group">
                        <a href="#pricing" class="btn-primary">{"Book a call"}</a>
                        <a href="#portfolio" class="btn-secondary">{"See our work"}</a>
                    </div>
                </Reveal>
            </div>
        </header>
    }
}
