use serde::Deserialize;

/// An RGB colour with a straight alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "full_alpha")]
    pub a: f64,
}

fn full_alpha() -> f64 {
    1.0
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with its alpha multiplied by `factor`.
    pub fn fade(self, factor: f64) -> Self {
        Self { a: self.a * factor, ..self }
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Tunables for the pointer trail. Every field can be overridden from the
/// page's `trail-config` block; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Pointer travel (px) a move has to exceed before a point is recorded.
    pub min_distance: f64,
    /// Frame ticks a point lives for. It is evicted on the tick its age
    /// reaches this value, which is also where opacity and width hit zero.
    pub lifetime: u32,
    pub width_factor: f64,
    pub max_width: f64,
    pub head_color: Rgba,
    pub tail_color: Rgba,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            lifetime: 50,
            width_factor: 0.3,
            max_width: 10.0,
            head_color: Rgba::new(255, 255, 255, 0.8),
            tail_color: Rgba::new(200, 225, 255, 0.5),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub age: u32,
    pub width: f64,
}

impl TrailPoint {
    pub fn new(x: f64, y: f64, width: f64) -> Self {
        Self { x, y, age: 0, width }
    }
}

/// A line from one trail point to the next, ready to be stroked.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
    pub width: f64,
    pub head: Rgba,
    pub tail: Rgba,
}

/// Recent pointer samples, oldest first.
#[derive(Debug)]
pub struct TrailBuffer {
    config: TrailConfig,
    points: Vec<TrailPoint>,
    last_pointer: (f64, f64),
}

impl TrailBuffer {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            points: Vec::new(),
            last_pointer: (0.0, 0.0),
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Feeds a pointer sample. Returns true when a point was recorded.
    ///
    /// Distance is always measured from the previous pointer sample, not
    /// from the last recorded point.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        let (last_x, last_y) = self.last_pointer;
        self.last_pointer = (x, y);

        let distance = (x - last_x).hypot(y - last_y);
        if distance <= self.config.min_distance {
            return false;
        }

        let width = (distance * self.config.width_factor).min(self.config.max_width);
        self.points.push(TrailPoint::new(x, y, width));
        true
    }

    /// Ages every point by one tick and drops the stale ones.
    pub fn age(&mut self) {
        let lifetime = self.config.lifetime;
        self.points.retain_mut(|point| {
            point.age = point.age.saturating_add(1);
            point.age < lifetime
        });
    }

    /// Remaining strength of a point in `0.0..=1.0`, used for both opacity
    /// and stroke width.
    pub fn taper(&self, age: u32) -> f64 {
        if self.config.lifetime == 0 {
            return 0.0;
        }
        (1.0 - age as f64 / self.config.lifetime as f64).max(0.0)
    }

    /// Segments joining each point to its successor, in insertion order.
    pub fn segments(&self) -> Vec<Segment> {
        self.points
            .windows(2)
            .map(|pair| {
                let (point, next) = (pair[0], pair[1]);
                let opacity = self.taper(point.age);
                Segment {
                    from: (point.x, point.y),
                    to: (next.x, next.y),
                    opacity,
                    width: point.width * opacity,
                    head: self.config.head_color.fade(opacity),
                    tail: self.config.tail_color.fade(opacity),
                }
            })
            .collect()
    }

    /// One frame: age and evict everything first, then describe what to draw.
    pub fn tick(&mut self) -> Vec<Segment> {
        self.age();
        self.segments()
    }

    #[cfg(test)]
    pub(crate) fn push_point(&mut self, point: TrailPoint) {
        self.points.push(point);
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(TrailConfig::default())
    }
}
