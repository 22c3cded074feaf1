use std::collections::VecDeque;

/// Fraction of the remaining distance the cursor covers each frame.
pub const INERTIA: f64 = 0.15;

const TRAIL_FADE_SPEED: f64 = 0.01;
const MAX_TRAIL_LENGTH: usize = 100;
const MAX_TRAIL_DISTANCE: f64 = 150.0;
/// Idle time per point sucked back into the head.
const RETRACT_INTERVAL_MS: f64 = 300.0;
pub const TRAIL_MAX_WIDTH: f64 = 8.0;

const RIPPLE_MAX_RADIUS: f64 = 120.0;
const RIPPLE_MIN_ALPHA: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Inertia {
    pub x: f64,
    pub y: f64,
}

impl Inertia {
    pub fn follow(&mut self, target: (f64, f64)) {
        self.x += (target.0 - self.x) * INERTIA;
        self.y += (target.1 - self.y) * INERTIA;
    }

    pub fn snap(&mut self, target: (f64, f64)) {
        self.x = target.0;
        self.y = target.1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub age: f64,
    pub dist_to_prev: f64,
}

/// The comet tail that follows the pointer in the cosmos theme.
#[derive(Debug, Default)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    total_distance: f64,
    last_move_ms: f64,
}

impl Trail {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    fn drop_tail(&mut self) {
        let removed = self.points.get(1).map(|p| p.dist_to_prev).unwrap_or(0.0);
        self.total_distance -= removed;
        self.points.pop_front();
    }

    pub fn update(&mut self, pointer: (f64, f64), moving: bool, now_ms: f64) {
        if moving {
            self.last_move_ms = now_ms;
        }

        match self.points.back() {
            Some(prev) => {
                let dist = (pointer.0 - prev.x).hypot(pointer.1 - prev.y);
                if dist > 0.0 {
                    self.points.push_back(TrailPoint { x: pointer.0, y: pointer.1, age: 1.0, dist_to_prev: dist });
                    self.total_distance += dist;
                }
            }
            None => {
                self.points.push_back(TrailPoint { x: pointer.0, y: pointer.1, age: 1.0, dist_to_prev: 0.0 });
            }
        }

        while self.total_distance > MAX_TRAIL_DISTANCE && self.points.len() > 1 {
            self.drop_tail();
        }
        while self.points.len() > MAX_TRAIL_LENGTH {
            self.drop_tail();
        }

        let len = self.points.len() as f64;
        for (i, point) in self.points.iter_mut().enumerate() {
            let multiplier = if moving { 1.0 } else { 1.0 + ((i as f64) / len) * 1.5 };
            point.age -= TRAIL_FADE_SPEED * multiplier;
        }

        if !moving && self.points.len() > 1 {
            let idle = now_ms - self.last_move_ms;
            let by_time = (idle / RETRACT_INTERVAL_MS).floor().max(0.0) as usize;
            let to_remove = by_time.min(self.points.len() / 5);
            for _ in 0..to_remove {
                if self.points.len() > 1 {
                    self.drop_tail();
                }
            }
        }

        while self.points.front().is_some_and(|p| p.age <= 0.0) {
            self.drop_tail();
        }

        if let Some(head) = self.points.back_mut() {
            if head.x == pointer.0 && head.y == pointer.1 {
                head.age = 1.0;
            }
        }
    }

    /// Segments from head to tail with their mean age, skipping faded ones.
    pub fn segments(&self) -> Vec<(TrailPoint, TrailPoint, f64)> {
        let points: Vec<&TrailPoint> = self.points.iter().collect();
        points
            .windows(2)
            .rev()
            .map(|pair| (*pair[1], *pair[0], (pair[0].age + pair[1].age) / 2.0))
            .filter(|(_, _, age)| *age > 0.0)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
    pub growth: f64,
    pub click: bool,
}

impl Ripple {
    pub fn decay(&self) -> f64 {
        if self.click { 0.94 } else { 0.96 }
    }

    pub fn line_width(&self) -> f64 {
        if self.click { 1.2 } else { 0.8 }
    }
}

/// Rings spreading on the water in the underwater theme.
#[derive(Debug, Default)]
pub struct Ripples {
    waves: Vec<Ripple>,
}

impl Ripples {
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    /// A click below the water line. Returns whether a ripple was added.
    pub fn splash(&mut self, at: (f64, f64), surface_y: f64) -> bool {
        if at.1 <= surface_y {
            return false;
        }
        self.waves.push(Ripple { x: at.0, y: at.1, radius: 6.0, alpha: 0.45, growth: 3.2, click: true });
        true
    }

    /// A wake behind the moving cursor, scaled by pointer speed.
    pub fn wake(&mut self, at: (f64, f64), delta: (f64, f64), surface_y: f64) -> bool {
        let speed = delta.0.hypot(delta.1);
        if speed <= 0.5 || at.1 <= surface_y {
            return false;
        }
        let intensity = (speed / 15.0).clamp(0.05, 0.35);
        self.waves.push(Ripple {
            x: at.0,
            y: at.1,
            radius: 2.0 + intensity * 4.0,
            alpha: intensity,
            growth: 0.6 + intensity,
            click: false,
        });
        true
    }

    /// Grows and fades every ripple, returning the ones to draw.
    pub fn step(&mut self, surface_y: f64) -> Vec<Ripple> {
        for wave in self.waves.iter_mut() {
            wave.radius += wave.growth;
            wave.alpha *= wave.decay();
        }
        self.waves.retain(|w| w.alpha > RIPPLE_MIN_ALPHA && w.radius < RIPPLE_MAX_RADIUS);
        self.waves
            .iter()
            .filter(|w| w.y > surface_y)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inertia_closes_fifteen_percent() {
        let mut cursor = Inertia::default();
        cursor.follow((100.0, 200.0));
        assert_eq!((cursor.x, cursor.y), (15.0, 30.0));
        cursor.snap((5.0, 6.0));
        assert_eq!((cursor.x, cursor.y), (5.0, 6.0));
    }

    #[test]
    fn test_trail_grows_while_moving() {
        let mut trail = Trail::default();
        for i in 0..10 {
            trail.update((i as f64 * 10.0, 0.0), true, i as f64 * 16.0);
        }
        assert_eq!(trail.len(), 10);
        assert_eq!(trail.total_distance(), 90.0);
        assert_eq!(trail.segments().len(), 9);
    }

    #[test]
    fn test_trail_is_capped_by_distance() {
        let mut trail = Trail::default();
        for i in 0..40 {
            trail.update((i as f64 * 10.0, 0.0), true, 0.0);
        }
        assert!(trail.total_distance() <= MAX_TRAIL_DISTANCE);
        assert_eq!(trail.len(), 16);
    }

    #[test]
    fn test_trail_is_capped_by_length() {
        let mut trail = Trail::default();
        for i in 0..150 {
            trail.update((i as f64 * 0.5, 0.0), true, 0.0);
        }
        // the oldest point may fade out on the same frame it would be pruned
        assert!((MAX_TRAIL_LENGTH - 1..=MAX_TRAIL_LENGTH).contains(&trail.len()));
    }

    #[test]
    fn test_idle_trail_retracts_to_head() {
        let mut trail = Trail::default();
        for i in 0..15 {
            trail.update((i as f64 * 10.0, 0.0), true, 0.0);
        }
        let mut now = 0.0;
        while trail.len() > 1 && now < 10_000.0 {
            now += 16.0;
            trail.update((140.0, 0.0), false, now);
        }
        assert_eq!(trail.len(), 1);
        assert!(trail.segments().is_empty());
        // the head stays fresh under a resting pointer
        assert_eq!(trail.points().next().map(|p| p.age), Some(1.0));
    }

    #[test]
    fn test_segments_run_head_to_tail() {
        let mut trail = Trail::default();
        trail.update((0.0, 0.0), true, 0.0);
        trail.update((10.0, 0.0), true, 16.0);
        trail.update((20.0, 0.0), true, 32.0);
        let segments = trail.segments();
        assert_eq!(segments[0].0.x, 20.0);
        assert_eq!(segments[1].1.x, 0.0);
        assert!(segments[0].2 > segments[1].2);
    }

    #[test]
    fn test_ripples_only_below_surface() {
        let mut ripples = Ripples::default();
        assert!(!ripples.splash((10.0, 100.0), 300.0));
        assert!(ripples.splash((10.0, 400.0), 300.0));
        assert!(!ripples.wake((10.0, 200.0), (10.0, 0.0), 300.0));
        assert!(!ripples.wake((10.0, 400.0), (0.3, 0.3), 300.0));
        assert!(ripples.wake((10.0, 400.0), (30.0, 40.0), 300.0));
        assert_eq!(ripples.len(), 2);
    }

    #[test]
    fn test_wake_intensity_is_clamped() {
        let mut ripples = Ripples::default();
        ripples.wake((0.0, 10.0), (300.0, 0.0), 0.0);
        let wave = ripples.step(0.0)[0];
        assert_eq!(wave.alpha, 0.35 * 0.96);
        assert!((wave.radius - 4.35).abs() < 1e-9);
    }

    #[test]
    fn test_ripples_fade_out() {
        let mut ripples = Ripples::default();
        ripples.splash((0.0, 10.0), 0.0);
        let mut frames = 0;
        while !ripples.is_empty() {
            ripples.step(0.0);
            frames += 1;
            assert!(frames < 100);
        }
        // radius limit hits before the alpha threshold for clicks
        assert_eq!(frames, 36);
    }

    #[test]
    fn test_ripples_above_surface_are_kept_but_hidden() {
        let mut ripples = Ripples::default();
        ripples.splash((0.0, 400.0), 300.0);
        assert!(ripples.step(500.0).is_empty());
        assert_eq!(ripples.len(), 1);
    }
}
