use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

/// Something that can run a callback on the next display frame.
pub trait FrameScheduler {
    type Handle;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

struct LoopState<F: FrameScheduler> {
    scheduler: F,
    pending: RefCell<Option<F::Handle>>,
    running: Cell<bool>,
    step: RefCell<Box<dyn FnMut() -> ControlFlow<()>>>,
}

/// Runs a step once per frame until stopped, dropped, or the step breaks.
pub struct FrameLoop<F: FrameScheduler + 'static> {
    state: Rc<LoopState<F>>,
}

impl<F: FrameScheduler + 'static> FrameLoop<F> {
    pub fn start(scheduler: F, step: impl FnMut() -> ControlFlow<()> + 'static) -> Self {
        let state = Rc::new(LoopState {
            scheduler,
            pending: RefCell::new(None),
            running: Cell::new(true),
            step: RefCell::new(Box::new(step)),
        });
        arm(&state);
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        let pending = self.state.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.state.scheduler.cancel(handle);
        }
    }
}

impl<F: FrameScheduler + 'static> Drop for FrameLoop<F> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm<F: FrameScheduler + 'static>(state: &Rc<LoopState<F>>) {
    let weak: Weak<LoopState<F>> = Rc::downgrade(state);
    let handle = state.scheduler.request(Box::new(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.pending.borrow_mut().take();
        if !state.running.get() {
            return;
        }

        let flow = {
            let mut step = state.step.borrow_mut();
            (*step)()
        };
        match flow {
            ControlFlow::Continue(()) if state.running.get() => arm(&state),
            _ => state.running.set(false),
        }
    }));

    match handle {
        Some(handle) => *state.pending.borrow_mut() = Some(handle),
        None => {
            log::debug!("frame scheduler refused a request, stopping loop");
            state.running.set(false);
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::FrameScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Queue = Vec<(u32, Box<dyn FnOnce()>)>;

    /// Test scheduler: frames only run when the test fires them.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
        next_id: Rc<Cell<u32>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Runs every callback queued so far. Returns how many ran.
        pub fn fire(&self) -> usize {
            let due: Queue = self.queue.borrow_mut().drain(..).collect();
            let count = due.len();
            for (_, callback) in due {
                callback();
            }
            count
        }

        pub fn fire_n(&self, frames: usize) {
            for _ in 0..frames {
                self.fire();
            }
        }
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = u32;

        fn request(&self, callback: Box<dyn FnOnce()>) -> Option<u32> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            Some(id)
        }

        fn cancel(&self, handle: u32) {
            self.queue.borrow_mut().retain(|(id, _)| *id != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use test_log::test;

    #[test]
    fn runs_one_step_per_frame() {
        let scheduler = ManualScheduler::default();
        let steps = Rc::new(Cell::new(0));
        let counter = steps.clone();
        let frames = FrameLoop::start(scheduler.clone(), move || {
            counter.set(counter.get() + 1);
            ControlFlow::Continue(())
        });

        assert_eq!(steps.get(), 0);
        scheduler.fire_n(3);
        assert_eq!(steps.get(), 3);
        assert_eq!(scheduler.pending(), 1);
        assert!(frames.is_running());
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let scheduler = ManualScheduler::default();
        let steps = Rc::new(Cell::new(0));
        let counter = steps.clone();
        let frames = FrameLoop::start(scheduler.clone(), move || {
            counter.set(counter.get() + 1);
            ControlFlow::Continue(())
        });

        scheduler.fire();
        frames.stop();
        assert_eq!(scheduler.pending(), 0);
        scheduler.fire_n(5);
        assert_eq!(steps.get(), 1);
        assert!(!frames.is_running());
    }

    #[test]
    fn dropping_the_loop_cancels_it() {
        let scheduler = ManualScheduler::default();
        let frames = FrameLoop::start(scheduler.clone(), || ControlFlow::Continue(()));
        assert_eq!(scheduler.pending(), 1);
        drop(frames);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn break_ends_the_loop() {
        let scheduler = ManualScheduler::default();
        let steps = Rc::new(Cell::new(0));
        let counter = steps.clone();
        let frames = FrameLoop::start(scheduler.clone(), move || {
            counter.set(counter.get() + 1);
            if counter.get() == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        scheduler.fire_n(4);
        assert_eq!(steps.get(), 2);
        assert_eq!(scheduler.pending(), 0);
        assert!(!frames.is_running());
    }
}
