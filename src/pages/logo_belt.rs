use yew::prelude::*;

use crate::components::in_view::use_in_view;

const COMPANIES: [&str; 12] = [
    "Google",
    "Microsoft",
    "Amazon",
    "Apple",
    "Meta",
    "Netflix",
    "Spotify",
    "Airbnb",
    "Uber",
    "Twitter",
    "Adobe",
    "Salesforce",
];

#[function_component(LogoBelt)]
pub fn logo_belt() -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), 0.2, false);

    html! {
        <section ref={section_ref} class="logo-belt">
            <style>
                {r#"
                    .logo-belt {
                        padding: 64px 0;
                        background: linear-gradient(to bottom, #111827, #3b82f6);
                    }
                    .logo-belt-heading {
                        text-align: center;
                        margin-bottom: 32px;
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s, transform 0.6s;
                    }
                    .logo-belt-heading.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .logo-belt-heading h2 {
                        font-size: 1.875rem;
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .logo-belt-heading p { color: #f3f4f6; }
                    .logo-track-window { overflow: hidden; }
                    .logo-track {
                        display: flex;
                        gap: 48px;
                        padding: 32px 0;
                        width: max-content;
                        animation: beltScroll 30s linear infinite;
                    }
                    @keyframes beltScroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-1920px); }
                    }
                    .logo-chip {
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 12rem;
                        height: 5rem;
                        border-radius: 16px;
                        background: #e5e7eb;
                        color: #374151;
                        font-size: 1.25rem;
                        font-weight: 700;
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .logo-chip:hover {
                        transform: scale(1.05);
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        box-shadow: 0 10px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
                    }
                "#}
            </style>
            <div class={classes!("logo-belt-heading", visible.then(|| "visible"))}>
                <h2>{"Trusted by Leading Companies"}</h2>
                <p>{"Our graduates work at top companies worldwide"}</p>
            </div>
            <div class="logo-track-window">
                // Listed twice so the loop restarts without a visible jump.
                <div class="logo-track">
                    { for COMPANIES.iter().chain(COMPANIES.iter()).enumerate().map(|(i, company)| html! {
                        <div key={i} class="logo-chip">{*company}</div>
                    }) }
                </div>
            </div>
        </section>
    }
}
