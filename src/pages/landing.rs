use yew::prelude::*;

use crate::components::cursor_trail::CursorTrail;
use crate::pages::{
    footer::Footer,
    hero::Hero,
    learn_by_doing::LearnByDoing,
    logo_belt::LogoBelt,
    trust_strip::TrustStrip,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing-page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .landing-page {
                        position: relative;
                        overflow-x: hidden;
                    }
                "#}
            </style>
            <CursorTrail />
            <Hero />
            <TrustStrip />
            <LearnByDoing />
            <LogoBelt />
            <Footer />
        </main>
    }
}
