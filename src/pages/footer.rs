use chrono::Datelike;
use yew::prelude::*;

struct LinkColumn {
    title: &'static str,
    links: [&'static str; 6],
}

const COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        title: "Courses",
        links: [
            "AI & Machine Learning",
            "Web Development",
            "Data Science",
            "UX/UI Design",
            "Digital Marketing",
            "Product Management",
        ],
    },
    LinkColumn {
        title: "Resources",
        links: ["Blog", "Tutorials", "Webinars", "Podcast", "Community", "Success Stories"],
    },
    LinkColumn {
        title: "Company",
        links: ["About Us", "Careers", "Press", "Partners", "Contact", "Privacy Policy"],
    },
];

fn social_icon(network: &str) -> Html {
    match network {
        "twitter" => html! {
            <path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"></path>
        },
        "facebook" => html! {
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>
        },
        "instagram" => html! {
            <>
                <rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect>
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                <line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line>
            </>
        },
        "linkedin" => html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                <rect x="2" y="9" width="4" height="12"></rect>
                <circle cx="4" cy="4" r="2"></circle>
            </>
        },
        _ => html! {},
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    let back_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #111827;
                        color: #fff;
                        padding: 64px 16px 32px;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 32px;
                        max-width: 1200px;
                        margin: 0 auto 48px;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #c084fc, #3b82f6);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .footer-tagline { color: #9ca3af; }
                    .footer-socials { display: flex; gap: 16px; }
                    .footer-social {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        background: #1f2937;
                        color: #9ca3af;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .footer-social:hover {
                        background: #2563eb;
                        color: #fff;
                        transform: scale(1.1) translateY(-3px);
                    }
                    .footer-column ul { list-style: none; padding: 0; }
                    .footer-column li { margin-bottom: 8px; transition: transform 0.2s; }
                    .footer-column li:hover { transform: translateX(5px); }
                    .footer-column a, .footer-legal a { color: #9ca3af; text-decoration: none; }
                    .footer-column a:hover, .footer-legal a:hover { color: #60a5fa; }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding-top: 32px;
                        border-top: 1px solid #1f2937;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 16px;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .footer-legal { display: flex; gap: 24px; }
                    .back-to-top {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        cursor: pointer;
                        transition: transform 0.2s, color 0.2s;
                    }
                    .back-to-top:hover { color: #60a5fa; transform: translateY(-5px); }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{"The PlacedSchool"}</h3>
                    <p class="footer-tagline">{"Elevate your career with in-demand skills and expert mentorship."}</p>
                    <div class="footer-socials">
                        { for ["twitter", "facebook", "instagram", "linkedin"].iter().map(|network| html! {
                            <a href="#" class="footer-social" aria-label={*network}>
                                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                                    stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    { social_icon(network) }
                                </svg>
                            </a>
                        }) }
                    </div>
                </div>
                { for COLUMNS.iter().map(|column| html! {
                    <div class="footer-column">
                        <h4>{column.title}</h4>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li><a href="#">{*link}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} Placed. All rights reserved.", year)}</p>
                <div class="footer-legal">
                    <a href="#">{"Terms"}</a>
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Cookies"}</a>
                </div>
                <button class="back-to-top" onclick={back_to_top}>
                    <span>{"Back to top "}</span>
                    <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                        stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M12 19V5M5 12l7-7 7 7" />
                    </svg>
                </button>
            </div>
        </footer>
    }
}
