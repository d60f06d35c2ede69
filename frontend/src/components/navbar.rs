use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{BRAND, NAV_LINKS};

const SCROLLED_AFTER_PX: f64 = 50.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_AFTER_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo gradient-text">{BRAND}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_LINKS.iter().map(|link| html! {
                            <a href={link.anchor} class="nav-link" onclick={close_menu.clone()}>
                                {link.label}
                            </a>
                        })
                    }
                    <a href="#pricing" class="nav-cta" onclick={close_menu.clone()}>
                        {"Book a call"}
                    </a>
                </div>
            </div>
        </nav>
    }
}
