use yew::prelude::*;

use crate::config::background_url;
use crate::hooks::use_asset_ready;

/// Fixed full-screen backdrop that fades in once its image has loaded.
#[function_component(Background)]
pub fn background() -> Html {
    let url = background_url();
    let state = use_asset_ready(url.clone());

    html! {
        <div
            class={classes!("site-background", state.opacity_class())}
            style={format!("background-image: url({});", url)}
        ></div>
    }
}
