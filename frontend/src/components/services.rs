use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::asset_url;
use crate::content::{services_blocks, ServiceItem};
use crate::hooks::use_reveal;
use crate::reveal::{sequence, RevealInstruction};

const SERVICE_DURATION: f64 = 0.5;

/// Classes for one image of a card's fanned stack.
///
/// Hovering lifts the front image the most, nudges the middle one and leaves
/// the back one where it is.
pub fn stack_classes(index: usize, hovered: bool) -> Classes {
    let (position, lifts) = match index {
        0 => ("stack-front", true),
        1 => ("stack-middle", true),
        _ => ("stack-back", false),
    };
    classes!("stack-image", position, (hovered && lifts).then_some("lifted"))
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static ServiceItem,
    instruction: RevealInstruction,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let is_hovered = use_state(|| false);
    let service = props.service;

    let on_enter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let on_leave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    html! {
        <Reveal instruction={props.instruction} duration={SERVICE_DURATION}>
            <div class="service-card" onmouseenter={on_enter} onmouseleave={on_leave}>
                <div class="service-stack">
                    {
                        for service.images.iter().enumerate().map(|(index, image)| html! {
                            <div class={stack_classes(index, *is_hovered)}>
                                <img
                                    src={asset_url(image)}
                                    alt={format!("{} example {}", service.title, index + 1)}
                                    loading="lazy"
                                />
                            </div>
                        })
                    }
                </div>
                <h3>{service.title}</h3>
            </div>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let node = use_node_ref();
    let state = use_reveal(&node);

    let blocks = services_blocks();
    let instructions = sequence(&blocks, state);

    html! {
        <section id="services" class="section-padding muted-section" ref={node}>
            <div class="container-custom">
                <Reveal
                    instruction={RevealInstruction::for_state(state, 0.0)}
                    duration={SERVICE_DURATION}
                    class={classes!("section-header")}
                >
                    <h2 class="heading-lg">{"What we do"}</h2>
                </Reveal>

                <div class="grid-3">
                    {
                        for blocks.iter().zip(instructions).map(|(block, instruction)| html! {
                            <ServiceCard
                                key={block.order_index}
                                service={block.payload}
                                instruction={instruction}
                            />
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_stack_has_no_lift() {
        for index in 0..3 {
            assert!(!stack_classes(index, false).contains("lifted"));
        }
    }

    #[test]
    fn hover_lifts_front_and_middle_only() {
        assert_eq!(stack_classes(0, true).to_string(), "stack-image stack-front lifted");
        assert_eq!(stack_classes(1, true).to_string(), "stack-image stack-middle lifted");
        assert_eq!(stack_classes(2, true).to_string(), "stack-image stack-back");
    }
}
