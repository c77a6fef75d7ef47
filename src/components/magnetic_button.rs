use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::Element;

const PULL: f64 = 0.3;
const CLICK_GLYPH: &str = "🚀";

/// How far the button leans toward the pointer, given the pointer position
/// and the button's bounding box.
pub fn magnetic_offset(
    client: (f64, f64),
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let (x, y) = client;
    ((x - (left + width / 2.0)) * PULL, (y - (top + height / 2.0)) * PULL)
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub label: AttrValue,
    #[prop_or(false)]
    pub primary: bool,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let button_ref = use_node_ref();
    let offset = use_state(|| (0.0, 0.0));
    let hovered = use_state(|| false);
    let clicked = use_state(|| false);

    let onmousemove = {
        let button_ref = button_ref.clone();
        let offset = offset.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = button_ref.cast::<Element>() {
                let rect = el.get_bounding_client_rect();
                offset.set(magnetic_offset(
                    (e.client_x() as f64, e.client_y() as f64),
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            offset.set((0.0, 0.0));
        })
    };

    let onclick = {
        let clicked = clicked.clone();
        Callback::from(move |_: MouseEvent| {
            clicked.set(true);
            let clicked = clicked.clone();
            Timeout::new(600, move || clicked.set(false)).forget();
        })
    };

    let (x, y) = *offset;
    let label = if *clicked { AttrValue::from(CLICK_GLYPH) } else { props.label.clone() };

    html! {
        <div
            ref={button_ref}
            class="magnetic"
            style={format!("transform: translate({x}px, {y}px);")}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
            {onclick}
        >
            <div class={classes!(
                "magnetic-button",
                if props.primary { "primary" } else { "secondary" },
                (*hovered).then(|| "hovered"),
            )}>
                <span class={classes!("magnetic-label", (*clicked).then(|| "pop"))}>{label}</span>
            </div>
            if *hovered {
                <div class={classes!("magnetic-pulse", props.primary.then(|| "primary"))}></div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::magnetic_offset;

    #[test]
    fn centred_pointer_has_no_pull() {
        assert_eq!(magnetic_offset((150.0, 45.0), 100.0, 20.0, 100.0, 50.0), (0.0, 0.0));
    }

    #[test]
    fn pulls_toward_the_pointer() {
        let (x, y) = magnetic_offset((200.0, 20.0), 100.0, 20.0, 100.0, 50.0);
        assert!((x - 15.0).abs() < 1e-9);
        assert!((y + 7.5).abs() < 1e-9);
    }
}
