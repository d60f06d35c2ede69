use yew::prelude::*;

use crate::components::{
    background::Background,
    faq::Faq,
    footer::Footer,
    hero::Hero,
    how_it_works::HowItWorks,
    mouse_move_effect::MouseMoveEffect,
    navbar::Navbar,
    portfolio::Portfolio,
    pricing::Pricing,
    recent_work::RecentWork,
    services::Services,
    testimonials::Testimonials,
    why_us::WhyUs,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site-root">
            <Background />
            <div class="site-content">
                <MouseMoveEffect />
                <Navbar />
                <main>
                    <Hero />
                    <RecentWork />
                    <WhyUs />
                    <HowItWorks />
                    <Services />
                    <Portfolio />
                    <Testimonials />
                    <Pricing />
                    <Faq />
                </main>
                <Footer />
            </div>
        </div>
    }
}
