use crate::effects::Rng64;

use super::easing::ease_out_cubic;

/// Hard stop for the scatter even if some characters are still falling.
pub const TOTAL_DURATION_MS: f64 = 2600.0;
/// How far below the viewport characters fall.
const FALL_BELOW_PX: f64 = 260.0;
const MAX_DRIFT_PX: f64 = 120.0;
const MAX_SPIN_DEG: f64 = 220.0;
const MAX_JITTER_MS: f64 = 220.0;
const STAGGER_MS: f64 = 4.0;
const BASE_DURATION_MS: f64 = 1800.0;
const DURATION_JITTER_MS: f64 = 400.0;

/// One terminal character falling off the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterChar {
    pub ch: char,
    pub left: f64,
    pub top: f64,
    pub target_y: f64,
    pub x_offset: f64,
    pub rotation: f64,
    pub delay: f64,
    pub duration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub dx: f64,
    pub dy: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl Pose {
    pub fn css_transform(&self) -> String {
        format!("translate({:.2}px, {:.2}px) rotate({:.2}deg)", self.dx, self.dy, self.rotation)
    }
}

impl ScatterChar {
    pub fn new(ch: char, left: f64, top: f64, index: usize, viewport_height: f64, rng: &mut Rng64) -> Self {
        Self {
            ch,
            left,
            top,
            target_y: viewport_height + FALL_BELOW_PX,
            x_offset: (rng.next_f64_01() - 0.5) * MAX_DRIFT_PX,
            rotation: (rng.next_f64_01() - 0.5) * MAX_SPIN_DEG,
            delay: rng.next_f64_01() * MAX_JITTER_MS + (index as f64) * STAGGER_MS,
            duration: BASE_DURATION_MS + rng.next_f64_01() * DURATION_JITTER_MS,
        }
    }

    pub fn progress(&self, elapsed: f64) -> f64 {
        ((elapsed - self.delay).max(0.0) / self.duration).min(1.0)
    }

    pub fn pose(&self, elapsed: f64) -> Pose {
        let eased = ease_out_cubic(self.progress(elapsed));
        Pose {
            dx: self.x_offset * eased,
            dy: (self.target_y - self.top) * eased,
            rotation: self.rotation * eased,
            opacity: 1.0 - eased,
        }
    }
}

pub fn is_finished(chars: &[ScatterChar], elapsed: f64) -> bool {
    elapsed >= TOTAL_DURATION_MS || chars.iter().all(|c| c.progress(elapsed) >= 1.0)
}
