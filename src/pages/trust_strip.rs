use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::in_view::use_in_view;

struct Stat {
    value: i64,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: 15, suffix: "K+", label: "Students Enrolled" },
    Stat { value: 95, suffix: "%", label: "Placement Rate" },
    Stat { value: 200, suffix: "+", label: "Industry Partners" },
    Stat { value: 50, suffix: "+", label: "Expert Mentors" },
];

#[function_component(TrustStrip)]
pub fn trust_strip() -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), 0.3, false);

    html! {
        <section ref={section_ref} class="trust-strip">
            <style>
                {r#"
                    .trust-strip {
                        padding: 64px 16px;
                        background: linear-gradient(to right, #111827, #312e81);
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 32px;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .stat {
                        position: relative;
                        text-align: center;
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s, transform 0.6s;
                    }
                    .stats-grid.visible .stat {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .stat-value {
                        font-size: 3rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #c084fc, #3b82f6);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .stat-suffix {
                        display: inline-block;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .stat-suffix:hover {
                        transform: scale(1.2) rotate(10deg);
                    }
                    .stat-label {
                        color: #9ca3af;
                        margin-top: 8px;
                    }
                    .stat-tooltip {
                        position: absolute;
                        top: -48px;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 12rem;
                        padding: 8px 16px;
                        border-radius: 8px;
                        background: rgba(30, 58, 138, 0.9);
                        color: #fff;
                        font-size: 0.875rem;
                        opacity: 0;
                        transition: opacity 0.3s;
                        pointer-events: none;
                    }
                    .stat:hover .stat-tooltip {
                        opacity: 1;
                    }
                "#}
            </style>
            <div class={classes!("stats-grid", visible.then(|| "visible"))}>
                { for STATS.iter().enumerate().map(|(i, stat)| html! {
                    <div class="stat" style={format!("transition-delay: {:.1}s;", i as f64 * 0.2)}>
                        <div class="stat-value">
                            <CountUp end={stat.value} duration={2.0} />
                            <span class="stat-suffix">{stat.suffix}</span>
                        </div>
                        <p class="stat-label">{stat.label}</p>
                        <div class="stat-tooltip">{"...and growing fast 🚀"}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
