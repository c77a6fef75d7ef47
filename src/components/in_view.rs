use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Share of an element's height that lies inside the viewport.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

fn measure(node: &NodeRef, amount: f64) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    let fraction = visible_fraction(rect.top(), rect.height(), viewport_height);
    fraction > 0.0 && fraction >= amount
}

/// Whether at least `amount` of the node is on screen. With `once` the
/// first `true` sticks.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64, once: bool) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let seen = std::rc::Rc::new(std::cell::Cell::new(false));

            let check = {
                let in_view = in_view.clone();
                let seen = seen.clone();
                Closure::wrap(Box::new(move || {
                    if once && seen.get() {
                        return;
                    }
                    let visible = measure(&node, amount);
                    if visible {
                        seen.set(true);
                    }
                    in_view.set(visible);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref());
                // Sections already on screen at load never see a scroll event.
                let _ = check.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL);
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", check.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::visible_fraction;

    #[test]
    fn fully_inside() {
        assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
    }

    #[test]
    fn partly_below_the_fold() {
        assert_eq!(visible_fraction(700.0, 200.0, 800.0), 0.5);
    }

    #[test]
    fn partly_scrolled_past() {
        assert_eq!(visible_fraction(-150.0, 200.0, 800.0), 0.25);
    }

    #[test]
    fn off_screen_or_empty() {
        assert_eq!(visible_fraction(900.0, 200.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-400.0, 200.0, 800.0), 0.0);
        assert_eq!(visible_fraction(10.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn taller_than_viewport() {
        assert_eq!(visible_fraction(-100.0, 1000.0, 800.0), 0.8);
    }
}
