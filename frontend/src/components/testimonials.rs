use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::asset_url;
use crate::content::{Testimonial, TESTIMONIALS, TESTIMONIALS_STAGGER, TESTIMONIALS_SUBTITLE, TESTIMONIALS_TITLE};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: &'static Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;

    html! {
        <div class="glow-box testimonial-card">
            <div class="card-body">
                <div class="testimonial-author">
                    <img src={asset_url(t.image)} alt={t.name} loading="lazy" />
                    <div>
                        <h4>{t.name}</h4>
                        <p>{format!("{} @ {}", t.role, t.company)}</p>
                    </div>
                </div>
                <p>{t.content}</p>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    let blocks = TESTIMONIALS_STAGGER.blocks(TESTIMONIALS.iter());
    let instructions = sequence(&blocks, state);

    html! {
        <section id="testimonials" class="section-padding muted-section" ref={node}>
            <div class="container-custom">
                <Reveal instruction={RevealInstruction::for_state(state, 0.0)} class={classes!("section-header")}>
                    <h2 class="heading-lg gradient-text">{TESTIMONIALS_TITLE}</h2>
                    <p class="body-lg">{TESTIMONIALS_SUBTITLE}</p>
                </Reveal>

                <div class="grid-3">
                    {
                        for blocks.iter().zip(instructions).map(|(block, instruction)| html! {
                            <Reveal key={block.order_index} instruction={instruction}>
                                <TestimonialCard testimonial={block.payload} />
                            </Reveal>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
