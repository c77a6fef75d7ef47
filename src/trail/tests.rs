use super::frame::manual::ManualScheduler;
use super::point::{Segment, TrailBuffer, TrailConfig, TrailPoint};
use super::renderer::{DrawSurface, TrailOverlay, TrailRenderer};
use test_log::test;

#[derive(Debug, Default)]
struct RecordingSurface {
    size: (u32, u32),
    clears: usize,
    strokes: Vec<Segment>,
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.strokes.clear();
    }

    fn stroke(&mut self, segment: &Segment) {
        self.strokes.push(segment.clone());
    }
}

fn point(x: f64, age: u32) -> TrailPoint {
    TrailPoint {
        x,
        y: 0.0,
        age,
        width: 6.0,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn short_moves_are_not_recorded() {
    let mut buffer = TrailBuffer::default();
    assert!(!buffer.pointer_moved(3.0, 4.0)); // exactly 5
    assert!(!buffer.pointer_moved(5.0, 5.0));
    assert!(buffer.is_empty());
}

#[test]
fn long_move_records_one_point_with_clamped_width() {
    let mut buffer = TrailBuffer::default();
    assert!(buffer.pointer_moved(10.0, 0.0));
    assert_eq!(buffer.points(), &[TrailPoint::new(10.0, 0.0, 3.0)]);

    assert!(buffer.pointer_moved(110.0, 0.0));
    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.points()[1].width, 10.0);
}

#[test]
fn distance_is_measured_from_last_sample_not_last_point() {
    let mut buffer = TrailBuffer::default();
    buffer.pointer_moved(4.0, 0.0);
    buffer.pointer_moved(8.0, 0.0);
    // 8 away from the origin, but only 4 from the previous sample.
    assert!(buffer.is_empty());

    assert!(buffer.pointer_moved(14.0, 0.0));
    assert!(approx(buffer.points()[0].width, 1.8));
}

#[test]
fn points_age_once_per_tick() {
    let mut buffer = TrailBuffer::default();
    buffer.pointer_moved(10.0, 0.0);
    for _ in 0..7 {
        buffer.tick();
    }
    buffer.pointer_moved(30.0, 0.0);
    for _ in 0..3 {
        buffer.tick();
    }

    let ages: Vec<u32> = buffer.points().iter().map(|p| p.age).collect();
    assert_eq!(ages, vec![10, 3]);
}

#[test]
fn stale_points_never_survive_a_tick() {
    let mut buffer = TrailBuffer::default();
    let lifetime = buffer.config().lifetime;
    buffer.pointer_moved(10.0, 0.0);
    for _ in 0..lifetime * 2 {
        buffer.tick();
        assert!(buffer.points().iter().all(|p| p.age < lifetime));
    }
}

#[test]
fn single_point_is_gone_after_fifty_ticks() {
    let mut buffer = TrailBuffer::default();
    buffer.pointer_moved(10.0, 0.0);
    assert_eq!(buffer.points()[0].width, 3.0);

    for _ in 0..49 {
        buffer.tick();
    }
    assert_eq!(buffer.len(), 1);
    buffer.tick();
    assert!(buffer.is_empty());
}

#[test]
fn eviction_does_not_skip_the_following_point() {
    let mut buffer = TrailBuffer::default();
    buffer.push_point(point(0.0, 10));
    buffer.push_point(point(50.0, 51));
    buffer.push_point(point(100.0, 20));

    let segments = buffer.tick();

    let ages: Vec<u32> = buffer.points().iter().map(|p| p.age).collect();
    assert_eq!(ages, vec![11, 21]);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].from, (0.0, 0.0));
    assert_eq!(segments[0].to, (100.0, 0.0));
}

#[test]
fn opacity_and_width_taper_to_zero() {
    let buffer = TrailBuffer::default();
    assert!(approx(buffer.taper(0), 1.0));
    assert!(approx(buffer.taper(25), 0.5));
    assert!(approx(buffer.taper(40), 0.2));
    assert_eq!(buffer.taper(50), 0.0);

    let mut buffer = TrailBuffer::default();
    buffer.push_point(point(0.0, 24));
    buffer.push_point(point(10.0, 0));
    let segments = buffer.tick();

    let segment = &segments[0];
    assert!(approx(segment.opacity, 0.5));
    assert!(approx(segment.width, 3.0));
    assert!(approx(segment.head.a, 0.4));
    assert!(approx(segment.tail.a, 0.25));
    assert_eq!((segment.tail.r, segment.tail.g, segment.tail.b), (200, 225, 255));
}

#[test]
fn frame_clears_then_strokes_between_neighbours() {
    let mut renderer = TrailRenderer::new(RecordingSurface::default(), TrailConfig::default());
    renderer.pointer_moved(10.0, 0.0);
    renderer.pointer_moved(20.0, 0.0);
    renderer.pointer_moved(30.0, 0.0);

    renderer.frame();

    let surface = renderer.surface();
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.strokes.len(), 2);
    assert_eq!(surface.strokes[0].from, (10.0, 0.0));
    assert_eq!(surface.strokes[1].to, (30.0, 0.0));
}

#[test]
fn resizing_twice_leaves_points_alone() {
    let mut renderer = TrailRenderer::new(RecordingSurface::default(), TrailConfig::default());
    renderer.pointer_moved(10.0, 0.0);
    renderer.buffer_mut().push_point(point(40.0, 7));
    let before = renderer.buffer().points().to_vec();

    renderer.resize(800, 600);
    renderer.resize(800, 600);

    assert_eq!(renderer.surface().size(), (800, 600));
    assert_eq!(renderer.buffer().points(), before.as_slice());
}

#[test]
fn overlay_repaints_on_every_scheduled_frame() {
    let scheduler = ManualScheduler::default();
    let overlay = TrailOverlay::mount(
        RecordingSurface::default(),
        scheduler.clone(),
        TrailConfig::default(),
    );

    overlay.pointer_moved(10.0, 0.0);
    scheduler.fire_n(10);

    let renderer = overlay.renderer().borrow();
    assert_eq!(renderer.surface().clears, 10);
    assert_eq!(renderer.buffer().points()[0].age, 10);
}

#[test]
fn nothing_changes_after_unmount() {
    let scheduler = ManualScheduler::default();
    let overlay = TrailOverlay::mount(
        RecordingSurface::default(),
        scheduler.clone(),
        TrailConfig::default(),
    );
    overlay.pointer_moved(10.0, 0.0);
    scheduler.fire();

    overlay.unmount();
    assert_eq!(scheduler.pending(), 0);

    overlay.pointer_moved(100.0, 100.0);
    overlay.resize(1024, 768);
    scheduler.fire_n(3);

    let renderer = overlay.renderer().borrow();
    assert_eq!(renderer.buffer().len(), 1);
    assert_eq!(renderer.buffer().points()[0].age, 1);
    assert_eq!(renderer.surface().clears, 1);
    assert_eq!(renderer.surface().size(), (0, 0));
}

#[test]
fn separate_overlays_do_not_share_points() {
    let scheduler = ManualScheduler::default();
    let first = TrailOverlay::mount(
        RecordingSurface::default(),
        scheduler.clone(),
        TrailConfig::default(),
    );
    let second = TrailOverlay::mount(
        RecordingSurface::default(),
        scheduler.clone(),
        TrailConfig::default(),
    );

    first.pointer_moved(10.0, 0.0);
    scheduler.fire();

    assert_eq!(first.renderer().borrow().buffer().len(), 1);
    assert!(second.renderer().borrow().buffer().is_empty());
}

#[test]
fn custom_config_changes_gating_and_lifetime() {
    let config = TrailConfig {
        min_distance: 20.0,
        lifetime: 3,
        ..TrailConfig::default()
    };
    let mut buffer = TrailBuffer::new(config);
    assert!(!buffer.pointer_moved(15.0, 0.0));
    assert!(buffer.pointer_moved(40.0, 0.0));

    buffer.tick();
    buffer.tick();
    assert_eq!(buffer.len(), 1);
    buffer.tick();
    assert!(buffer.is_empty());
}
