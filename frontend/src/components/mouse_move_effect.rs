use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn glow_style(x: i32, y: i32) -> String {
    format!("left: {}px; top: {}px;", x, y)
}

/// Soft glow that trails the cursor across the page.
#[function_component(MouseMoveEffect)]
pub fn mouse_move_effect() -> Html {
    let position = use_state_eq(|| (0, 0));

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set((e.client_x(), e.client_y()));
        });
    }

    let (x, y) = *position;

    html! {
        <div class="mouse-glow" style={glow_style(x, y)} aria-hidden="true"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_is_positioned_at_the_cursor() {
        assert_eq!(glow_style(120, 48), "left: 120px; top: 48px;");
    }
}
