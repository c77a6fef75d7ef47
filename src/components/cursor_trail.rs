use yew::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config;
use crate::trail::canvas::MountedTrail;

/// Full-viewport canvas that paints a fading trail behind the mouse.
/// Purely decorative: it never takes pointer events.
#[function_component(CursorTrail)]
pub fn cursor_trail() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |_| {
            let mounted = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|canvas| MountedTrail::mount(canvas, config::trail_config()));

            let mounted = match mounted {
                Some(Ok(trail)) => Some(trail),
                Some(Err(err)) => {
                    log::debug!("cursor trail disabled: {}", err);
                    None
                }
                None => None,
            };

            move || drop(mounted)
        }, ());
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="cursor-trail"
            style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 50;"
        />
    }
}
