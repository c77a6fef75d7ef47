use yew::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod trail {
    pub mod point;
    pub mod frame;
    pub mod renderer;
    pub mod canvas;
    #[cfg(test)]
    mod tests;
}
mod components {
    pub mod cursor_trail;
    pub mod in_view;
    pub mod count_up;
    pub mod magnetic_button;
    pub mod carousel;
}
mod pages {
    pub mod landing;
    pub mod hero;
    pub mod trust_strip;
    pub mod learn_by_doing;
    pub mod logo_belt;
    pub mod footer;
}

use pages::landing::Landing;

/// Scroll offset (px) past which the header switches to its compact look.
const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

const NAV_ITEMS: [&str; 5] = ["Courses", "About", "Mentorship", "Pricing", "Contact"];

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > HEADER_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                if let Err(err) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    log::warn!("header scroll listener not attached: {:?}", err);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 24px 0;
                        transition: all 0.3s;
                    }
                    .top-nav.scrolled {
                        padding: 12px 0;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(16px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 16px;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        -webkit-background-clip: text;
                        color: transparent;
                        animation: navSlide 0.5s ease-out both;
                    }
                    .nav-links {
                        display: flex;
                        gap: 32px;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-links li {
                        cursor: pointer;
                        transition: color 0.2s;
                        animation: navDrop 0.4s ease-out both;
                    }
                    .nav-links li:hover { color: #60a5fa; }
                    @keyframes navSlide {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes navDrop {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">{"The PlacedSchool"}</div>
                <nav>
                    <ul class="nav-links">
                        { for NAV_ITEMS.iter().enumerate().map(|(i, item)| html! {
                            <li style={format!("animation-delay: {:.1}s;", 0.2 + 0.1 * i as f64)}>{*item}</li>
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Header />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
