use std::fmt;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::frame::FrameScheduler;
use super::point::{Segment, TrailConfig};
use super::renderer::{DrawSurface, TrailOverlay};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    NoWindow,
    NoContext,
    WrongContext,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NoWindow => write!(f, "no browser window"),
            SurfaceError::NoContext => write!(f, "canvas has no 2d context"),
            SurfaceError::WrongContext => write!(f, "2d context has an unexpected type"),
        }
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::WrongContext)?;
        Ok(Self { canvas, context })
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke(&mut self, segment: &Segment) {
        let (x0, y0) = segment.from;
        let (x1, y1) = segment.to;
        let ctx = &self.context;

        ctx.begin_path();
        ctx.move_to(x0, y0);
        ctx.line_to(x1, y1);

        let gradient = ctx.create_linear_gradient(x0, y0, x1, y1);
        if gradient.add_color_stop(0.0, &segment.head.to_css()).is_err()
            || gradient.add_color_stop(1.0, &segment.tail.to_css()).is_err()
        {
            return;
        }

        ctx.set_stroke_style(&gradient);
        ctx.set_line_width(segment.width);
        ctx.set_line_cap("round");
        ctx.stroke();
    }
}

/// `requestAnimationFrame` as a [`FrameScheduler`].
pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<i32> {
        // Frees itself once called. A cancelled frame leaks its closure,
        // which only happens once per unmount.
        let callback = Closure::once_into_js(callback);
        self.window
            .request_animation_frame(callback.unchecked_ref())
            .ok()
    }

    fn cancel(&self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}

/// A window event listener that is removed when dropped.
pub struct WindowListener<T: ?Sized> {
    window: Window,
    event: &'static str,
    callback: Closure<T>,
}

impl<T: ?Sized> WindowListener<T> {
    pub fn attach(window: &Window, event: &'static str, callback: Closure<T>) -> Option<Self> {
        match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                window: window.clone(),
                event,
                callback,
            }),
            Err(err) => {
                log::warn!("failed to listen for {event}: {err:?}");
                None
            }
        }
    }
}

impl<T: ?Sized> Drop for WindowListener<T> {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn viewport_size(window: &Window) -> (u32, u32) {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0)
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

/// Everything the overlay holds on to while mounted. Dropping it stops the
/// frame loop and detaches both listeners.
pub struct MountedTrail {
    _resize: Option<WindowListener<dyn FnMut()>>,
    _pointer: Option<WindowListener<dyn FnMut(MouseEvent)>>,
    overlay: Rc<TrailOverlay<CanvasSurface, RafScheduler>>,
}

impl MountedTrail {
    pub fn mount(canvas: HtmlCanvasElement, config: TrailConfig) -> Result<Self, SurfaceError> {
        let window = window().ok_or(SurfaceError::NoWindow)?;
        let surface = CanvasSurface::acquire(canvas)?;
        let overlay = Rc::new(TrailOverlay::mount(
            surface,
            RafScheduler::new(window.clone()),
            config,
        ));

        let (width, height) = viewport_size(&window);
        overlay.resize(width, height);

        let resize = {
            let overlay = overlay.clone();
            let win = window.clone();
            Closure::wrap(Box::new(move || {
                let (width, height) = viewport_size(&win);
                overlay.resize(width, height);
            }) as Box<dyn FnMut()>)
        };

        let pointer = {
            let overlay = overlay.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                overlay.pointer_moved(e.client_x() as f64, e.client_y() as f64);
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        log::debug!("cursor trail mounted at {width}x{height}");
        Ok(Self {
            _resize: WindowListener::attach(&window, "resize", resize),
            _pointer: WindowListener::attach(&window, "mousemove", pointer),
            overlay,
        })
    }
}

impl Drop for MountedTrail {
    fn drop(&mut self) {
        self.overlay.unmount();
        log::debug!("cursor trail unmounted");
    }
}
