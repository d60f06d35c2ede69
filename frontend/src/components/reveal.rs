use yew::prelude::*;

use crate::reveal::RevealInstruction;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub instruction: RevealInstruction,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

pub fn reveal_classes(instruction: RevealInstruction, extra: Classes) -> Classes {
    classes!("reveal", instruction.visible.then_some("revealed"), extra)
}

/// Fades and slides its children into place once `instruction` turns visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div
            class={reveal_classes(props.instruction, props.class.clone())}
            style={props.instruction.transition_style(props.duration)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealState;

    #[test]
    fn hidden_blocks_only_carry_the_base_class() {
        let classes = reveal_classes(RevealInstruction::HIDDEN, classes!("card"));
        assert_eq!(classes.to_string(), "reveal card");
    }

    #[test]
    fn visible_blocks_are_marked_revealed() {
        let shown = RevealInstruction::for_state(RevealState::Revealed, 0.4);
        let classes = reveal_classes(shown, Classes::new());
        assert_eq!(classes.to_string(), "reveal revealed");
    }
}
