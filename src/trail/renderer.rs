use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use super::frame::{FrameLoop, FrameScheduler};
use super::point::{Segment, TrailBuffer, TrailConfig};

/// Where the trail gets painted.
pub trait DrawSurface {
    fn resize(&mut self, width: u32, height: u32);
    fn size(&self) -> (u32, u32);
    fn clear(&mut self);
    fn stroke(&mut self, segment: &Segment);
}

/// The trail buffer bound to a surface.
pub struct TrailRenderer<S: DrawSurface> {
    surface: S,
    buffer: TrailBuffer,
}

impl<S: DrawSurface> TrailRenderer<S> {
    pub fn new(surface: S, config: TrailConfig) -> Self {
        Self {
            surface,
            buffer: TrailBuffer::new(config),
        }
    }

    pub fn buffer(&self) -> &TrailBuffer {
        &self.buffer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.buffer.pointer_moved(x, y) {
            log::trace!("trail point at ({x}, {y}), {} buffered", self.buffer.len());
        }
    }

    /// Only the surface changes; buffered points are left alone.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.surface.size() != (width, height) {
            log::debug!("resizing trail surface to {width}x{height}");
        }
        self.surface.resize(width, height);
    }

    /// Clears, ages and evicts, then strokes what is left.
    pub fn frame(&mut self) {
        self.surface.clear();
        for segment in self.buffer.tick() {
            self.surface.stroke(&segment);
        }
    }

    #[cfg(test)]
    pub(crate) fn buffer_mut(&mut self) -> &mut TrailBuffer {
        &mut self.buffer
    }
}

/// A mounted trail: the renderer plus the frame loop repainting it.
///
/// Dropping it (or calling [`TrailOverlay::unmount`]) cancels the pending
/// frame; input delivered afterwards is ignored.
pub struct TrailOverlay<S: DrawSurface + 'static, F: FrameScheduler + 'static> {
    renderer: Rc<RefCell<TrailRenderer<S>>>,
    frames: FrameLoop<F>,
}

impl<S: DrawSurface + 'static, F: FrameScheduler + 'static> TrailOverlay<S, F> {
    pub fn mount(surface: S, scheduler: F, config: TrailConfig) -> Self {
        let renderer = Rc::new(RefCell::new(TrailRenderer::new(surface, config)));
        let painter = renderer.clone();
        let frames = FrameLoop::start(scheduler, move || {
            painter.borrow_mut().frame();
            ControlFlow::Continue(())
        });
        Self { renderer, frames }
    }

    pub fn renderer(&self) -> &Rc<RefCell<TrailRenderer<S>>> {
        &self.renderer
    }

    pub fn is_mounted(&self) -> bool {
        self.frames.is_running()
    }

    pub fn pointer_moved(&self, x: f64, y: f64) {
        if self.is_mounted() {
            self.renderer.borrow_mut().pointer_moved(x, y);
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        if self.is_mounted() {
            self.renderer.borrow_mut().resize(width, height);
        }
    }

    pub fn unmount(&self) {
        self.frames.stop();
    }
}
