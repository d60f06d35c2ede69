use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::content::{BRAND, CONTACT_EMAIL, FOOTER_BLURB, FOOTER_COLUMNS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="container-custom">
                <div class="footer-grid">
                    <div>
                        <h4 class="gradient-text">{BRAND}</h4>
                        <p>{FOOTER_BLURB}</p>
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    </div>
                    {
                        for FOOTER_COLUMNS.iter().map(|column| html! {
                            <div>
                                <h4>{column.heading}</h4>
                                <ul>
                                    { for column.links.iter().map(|link| html! {
                                        <li><a href={link.anchor}>{link.label}</a></li>
                                    }) }
                                </ul>
                            </div>
                        })
                    }
                </div>
                <div class="footer-bottom">
                    {format!("© {} {}. All rights reserved.", year, BRAND)}
                </div>
            </div>
        </footer>
    }
}
