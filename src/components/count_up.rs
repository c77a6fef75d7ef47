use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use yew::prelude::*;

use crate::components::in_view::use_in_view;
use crate::trail::canvas::RafScheduler;
use crate::trail::frame::FrameLoop;

/// Timestamp-driven linear count from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUpClock {
    start: i64,
    end: i64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CountUpClock {
    pub fn new(start: i64, end: i64, duration_secs: f64) -> Self {
        Self {
            start,
            end,
            duration_ms: duration_secs * 1000.0,
            started_at: None,
        }
    }

    /// Value to display at `now_ms` and whether the count has finished.
    /// The first call fixes the start time.
    pub fn sample(&mut self, now_ms: f64) -> (i64, bool) {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - started_at) / self.duration_ms).clamp(0.0, 1.0)
        };
        let value = (progress * (self.end - self.start) as f64 + self.start as f64).floor() as i64;
        (value, progress >= 1.0)
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub end: i64,
    #[prop_or(2.0)]
    pub duration: f64,
    #[prop_or(0)]
    pub start: i64,
}

#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let node = use_node_ref();
    let count = use_state_eq(|| props.start);
    let in_view = use_in_view(node.clone(), 0.5, true);

    {
        let count = count.clone();
        let (start, end, duration) = (props.start, props.end, props.duration);
        use_effect_with_deps(move |in_view| {
            let frames = match (*in_view, web_sys::window()) {
                (true, Some(window)) => {
                    let clock = Rc::new(RefCell::new(CountUpClock::new(start, end, duration)));
                    Some(FrameLoop::start(RafScheduler::new(window), move || {
                        let (value, done) = clock.borrow_mut().sample(now_ms());
                        count.set(value);
                        if done {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(())
                        }
                    }))
                }
                _ => None,
            };
            move || drop(frames)
        }, in_view);
    }

    html! {
        <span ref={node} class="count-up">{ *count }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::CountUpClock;

    #[test]
    fn counts_linearly_and_floors() {
        let mut clock = CountUpClock::new(0, 95, 2.0);
        assert_eq!(clock.sample(1000.0), (0, false));
        assert_eq!(clock.sample(1500.0), (23, false)); // 23.75
        assert_eq!(clock.sample(2000.0), (47, false)); // 47.5
        assert_eq!(clock.sample(3000.0), (95, true));
    }

    #[test]
    fn clamps_past_the_end() {
        let mut clock = CountUpClock::new(10, 20, 1.0);
        clock.sample(0.0);
        assert_eq!(clock.sample(5000.0), (20, true));
    }

    #[test]
    fn counts_down_too() {
        let mut clock = CountUpClock::new(50, 0, 1.0);
        clock.sample(0.0);
        assert_eq!(clock.sample(500.0), (25, false));
        assert_eq!(clock.sample(1000.0), (0, true));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut clock = CountUpClock::new(0, 200, 0.0);
        assert_eq!(clock.sample(42.0), (200, true));
    }
}
