use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::carousel::{self, CardPose, AUTO_ADVANCE_MS};
use crate::components::in_view::use_in_view;

#[derive(Clone, Copy, PartialEq)]
enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Status {
    Live,
    Upcoming,
    Completed,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Live => "LIVE",
            Status::Upcoming => "UPCOMING",
            Status::Completed => "COMPLETED",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Status::Live => "status-live",
            Status::Upcoming => "status-upcoming",
            Status::Completed => "status-completed",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Project {
    title: &'static str,
    category: &'static str,
    image: &'static str,
    difficulty: Difficulty,
    status: Status,
}

const PROJECTS: [Project; 6] = [
    Project {
        title: "AI-Powered Chatbot",
        category: "Machine Learning",
        image: "/assets/python.png",
        difficulty: Difficulty::Intermediate,
        status: Status::Live,
    },
    Project {
        title: "E-commerce Platform",
        category: "Web Development",
        image: "/assets/react.png",
        difficulty: Difficulty::Advanced,
        status: Status::Live,
    },
    Project {
        title: "Data Visualization Dashboard",
        category: "Data Science",
        image: "/assets/javascript.png",
        difficulty: Difficulty::Intermediate,
        status: Status::Upcoming,
    },
    Project {
        title: "Mobile App Redesign",
        category: "UX/UI Design",
        image: "/assets/css.png",
        difficulty: Difficulty::Beginner,
        status: Status::Completed,
    },
    Project {
        title: "Social Media Campaign",
        category: "Digital Marketing",
        image: "/assets/nodejs.png",
        difficulty: Difficulty::Beginner,
        status: Status::Live,
    },
    Project {
        title: "Product Launch Strategy",
        category: "Product Management",
        image: "/assets/html.png",
        difficulty: Difficulty::Advanced,
        status: Status::Upcoming,
    },
];

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <div class="project-card">
            <div class="project-image" style={format!("background-image: url({});", project.image)} />
            <div class="project-overlay" />
            <div class={classes!("project-status", project.status.class())}>{project.status.label()}</div>
            <div class="project-content">
                <div class="project-category">{project.category}</div>
                <h3>{project.title}</h3>
                <div class="project-footer">
                    <span class="project-difficulty">{project.difficulty.label()}</span>
                    <button class="project-view">{"View Project"}</button>
                </div>
            </div>
        </div>
    }
}

#[function_component(LearnByDoing)]
pub fn learn_by_doing() -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), 0.2, false);
    let active = use_state(|| 0usize);
    let drag_start = use_mut_ref(|| None::<f64>);
    let len = PROJECTS.len();

    {
        let active = active.clone();
        use_interval(
            move || active.set(carousel::next(*active, len)),
            AUTO_ADVANCE_MS,
        );
    }

    let onmousedown = {
        let drag_start = drag_start.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            *drag_start.borrow_mut() = Some(e.client_x() as f64);
        })
    };

    let end_drag = {
        let drag_start = drag_start.clone();
        let active = active.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(start) = drag_start.borrow_mut().take() {
                let offset = e.client_x() as f64 - start;
                active.set(carousel::after_drag(*active, len, offset));
            }
        })
    };

    html! {
        <section ref={section_ref} class={classes!("learn-by-doing", visible.then(|| "visible"))}>
            <style>
                {r#"
                    .learn-by-doing {
                        padding: 80px 16px;
                        color: #fff;
                        background: linear-gradient(to bottom, #111827, #312e81, #000);
                    }
                    .learn-by-doing .section-heading,
                    .learn-by-doing .carousel {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s, transform 0.6s;
                    }
                    .learn-by-doing.visible .section-heading,
                    .learn-by-doing.visible .carousel {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 64px;
                    }
                    .section-heading h2 {
                        font-size: 2.25rem;
                        background: linear-gradient(to right, #c084fc, #3b82f6);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .section-heading p {
                        font-size: 1.25rem;
                        color: #bfdbfe;
                    }
                    .carousel {
                        position: relative;
                        height: 500px;
                        overflow: hidden;
                        user-select: none;
                        cursor: grab;
                    }
                    .carousel-card {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: min(28rem, 90vw);
                        margin: -160px 0 0 min(-14rem, -45vw);
                        transition: transform 0.5s, opacity 0.5s;
                    }
                    .project-card {
                        position: relative;
                        height: 320px;
                        border-radius: 12px;
                        overflow: hidden;
                        transition: transform 0.3s;
                    }
                    .project-card:hover {
                        transform: scale(1.03) rotateY(5deg) rotateX(-5deg);
                    }
                    .project-image, .project-overlay {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                    }
                    .project-overlay {
                        background: linear-gradient(to top, rgba(0,0,0,0.8), rgba(0,0,0,0.4), transparent);
                    }
                    .project-status {
                        position: absolute;
                        top: 16px;
                        right: 16px;
                        padding: 4px 12px;
                        border-radius: 999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        transform: scale(0);
                        transition: transform 0.2s;
                    }
                    .project-card:hover .project-status { transform: scale(1); }
                    .status-live { background: #22c55e; }
                    .status-upcoming { background: #eab308; color: #000; }
                    .status-completed { background: #3b82f6; }
                    .project-content {
                        position: absolute;
                        bottom: 0;
                        width: 100%;
                        padding: 24px;
                        box-sizing: border-box;
                    }
                    .project-category { color: #93c5fd; font-size: 0.875rem; }
                    .project-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .project-difficulty { color: #d1d5db; font-size: 0.75rem; }
                    .project-view {
                        padding: 4px 16px;
                        border: none;
                        border-radius: 999px;
                        background: #fff;
                        color: #1e3a8a;
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.3s, transform 0.3s;
                    }
                    .project-card:hover .project-view { opacity: 1; transform: translateY(0); }
                    .carousel-dots {
                        position: absolute;
                        bottom: 16px;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 8px;
                    }
                    .carousel-dot {
                        width: 12px;
                        height: 12px;
                        border: none;
                        border-radius: 50%;
                        background: #6b7280;
                        cursor: pointer;
                    }
                    .carousel-dot.active { background: #3b82f6; }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"Learn by Doing"}</h2>
                <p>{"Build real-world projects that showcase your skills to potential employers"}</p>
            </div>
            <div
                class="carousel"
                {onmousedown}
                onmouseup={end_drag.clone()}
                onmouseleave={end_drag}
            >
                { for PROJECTS.iter().enumerate().map(|(index, project)| {
                    let pose = CardPose::for_card(index, *active, len);
                    html! {
                        <div key={index} class="carousel-card" style={pose.to_style()}>
                            <ProjectCard project={project.clone()} />
                        </div>
                    }
                }) }
                <div class="carousel-dots">
                    { for (0..len).map(|index| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        html! {
                            <button
                                key={index}
                                class={classes!("carousel-dot", (index == *active).then(|| "active"))}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
