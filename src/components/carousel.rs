/// Horizontal gap between neighbouring cards, in px.
pub const CARD_SPACING: f64 = 250.0;
/// Drag distance (px) that flips to the neighbouring card.
pub const SWIPE_THRESHOLD: f64 = 100.0;
pub const AUTO_ADVANCE_MS: u32 = 3000;

/// Steps between `index` and `active` going whichever way round is shorter.
pub fn circular_distance(index: usize, active: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let direct = index.abs_diff(active) % len;
    direct.min(len - direct)
}

pub fn next(active: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (active + 1) % len
    }
}

pub fn previous(active: usize, len: usize) -> usize {
    if active == 0 {
        len.saturating_sub(1)
    } else {
        active - 1
    }
}

/// Active card after a drag released `offset_x` px from where it started.
pub fn after_drag(active: usize, len: usize, offset_x: f64) -> usize {
    if offset_x > SWIPE_THRESHOLD {
        previous(active, len)
    } else if offset_x < -SWIPE_THRESHOLD {
        next(active, len)
    } else {
        active
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardPose {
    pub x: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: usize,
}

impl CardPose {
    pub fn for_card(index: usize, active: usize, len: usize) -> Self {
        let distance = circular_distance(index, active, len);
        let offset = distance as f64 * CARD_SPACING;
        let x = if index == active {
            0.0
        } else if index > active {
            offset
        } else {
            -offset
        };
        Self {
            x,
            scale: 1.0 - distance as f64 * 0.15,
            opacity: 1.0 - distance as f64 * 0.2,
            z_index: len - distance,
        }
    }

    pub fn to_style(&self) -> String {
        format!(
            "transform: translateX({}px) scale({}); opacity: {}; z-index: {};",
            self.x, self.scale, self.opacity, self.z_index
        )
    }
}
