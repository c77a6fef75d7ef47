use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::magnetic_button::MagneticButton;

/// Scroll offset after which the "scroll down" arrow is hidden.
const SCROLL_CUE_LIMIT: f64 = 100.0;

// Fixed layout for the floating background bubbles:
// (size px, left %, top %, drift seconds).
const BUBBLES: [(u32, u32, u32, u32); 12] = [
    (220, 8, 12, 14),
    (90, 22, 64, 11),
    (310, 41, 5, 18),
    (140, 57, 72, 12),
    (260, 73, 28, 16),
    (70, 88, 80, 10),
    (180, 15, 40, 19),
    (120, 33, 88, 13),
    (200, 64, 50, 15),
    (60, 80, 8, 11),
    (280, 92, 55, 17),
    (110, 48, 35, 12),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let show_scroll_cue = scroll_y <= SCROLL_CUE_LIMIT;

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #000, #111827);
                    }
                    .hero-bubble {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(59, 130, 246, 0.1);
                        animation: bubbleDrift ease-in-out infinite;
                    }
                    @keyframes bubbleDrift {
                        0%, 100% { opacity: 0.1; transform: scale(1) translate(0, 0); }
                        50% { opacity: 0.3; transform: scale(1.2) translate(12px, -12px); }
                    }
                    .hero-content {
                        z-index: 10;
                        text-align: center;
                        padding: 0 16px;
                    }
                    .hero-title {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        margin-bottom: 24px;
                        background: linear-gradient(to right, #c084fc, #3b82f6, #4f46e5);
                        -webkit-background-clip: text;
                        color: transparent;
                        animation: riseIn 0.8s ease-out both;
                    }
                    .hero-subtitle {
                        font-size: 1.4rem;
                        color: #dbeafe;
                        max-width: 48rem;
                        margin: 0 auto 40px;
                        animation: riseIn 0.8s ease-out 0.2s both;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 24px;
                        justify-content: center;
                        animation: riseIn 0.8s ease-out 0.4s both;
                    }
                    .scroll-cue {
                        position: absolute;
                        bottom: 40px;
                        left: 50%;
                        color: #60a5fa;
                        animation: cueBounce 1.5s ease-in-out infinite;
                    }
                    @keyframes cueBounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="hero-bubbles">
                { for BUBBLES.iter().map(|(size, left, top, secs)| html! {
                    <div
                        class="hero-bubble"
                        style={format!(
                            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; animation-duration: {secs}s;"
                        )}
                    />
                }) }
            </div>
            <div class="hero-content">
                <h1 class="hero-title">{"Elevate Your Career Skills"}</h1>
                <p class="hero-subtitle">
                    {"Master in-demand skills with expert mentors and hands-on projects that get you placed in your dream role."}
                </p>
                <div class="hero-cta-group">
                    <MagneticButton label="GET STARTED" primary={true} />
                    <MagneticButton label="EXPLORE COURSES" />
                </div>
            </div>
            if show_scroll_cue {
                <div class="scroll-cue">
                    <svg width="40" height="40" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path
                            d="M12 5V19M12 19L5 12M12 19L19 12"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        />
                    </svg>
                </div>
            }
        </section>
    }
}
