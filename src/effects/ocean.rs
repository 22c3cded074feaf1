use crate::effects::Rng64;

use super::easing::{ lerp, smoothstep, Rgb };

pub const FISH_COLORS: [&str; 4] = ["#7FB5B5", "#FF9BAA", "#fffadd", "#A2A2D0"];
pub const BRANCH_PALETTE: [&str; 3] = ["#FF7F50", "#FFB07C", "#F28C6B"];
const SEAWEED_COLOR: &str = "#2ECC71";
const SOFT_CORAL_COLOR: &str = "#F4B6C2";

const SURFACE: Rgb = Rgb(116, 204, 244);
const MID: Rgb = Rgb(43, 103, 119);
const ABYSS: Rgb = Rgb(1, 22, 39);

/// Resting water line as a fraction of the viewport height.
pub const SURFACE_BASE: f64 = 0.45;
/// How far the water line travels over the whole scroll, in viewport heights.
pub const PARALLAX: f64 = 1.6;
pub const TIME_STEP: f64 = 0.02;
const WAVE_STEP_PX: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fish {
    /// Depth below the surface in parallax units.
    pub depth: f64,
    pub x: f64,
    pub speed: f64,
    pub dir: f64,
    pub size: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y_offset: f64,
    pub speed: f64,
    pub size: f64,
    pub wing_freq: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoralKind {
    Branch { branches: u32 },
    Seaweed { blades: u32 },
    Soft { petals: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coral {
    pub x: f64,
    pub kind: CoralKind,
    pub size: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SandGrain {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SandPatch {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Where things sit on screen for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub height: f64,
    pub parallax: f64,
    pub surface_y: f64,
    pub sky_offset: f64,
    pub bottom_t: f64,
    pub bottom_y: f64,
}

impl Layout {
    pub fn new(progress: f64, height: f64) -> Self {
        let parallax = height * PARALLAX;
        let bottom_t = smoothstep(0.75, 1.0, progress);
        Self {
            height,
            parallax,
            surface_y: water_surface_y(progress, height),
            sky_offset: -progress * parallax,
            bottom_t,
            bottom_y: lerp(height + 200.0, height - 100.0, bottom_t),
        }
    }

    pub fn shows_birds(&self) -> bool {
        self.surface_y > -200.0
    }

    pub fn shows_sea_bed(&self) -> bool {
        self.bottom_t > 0.01 && self.bottom_y < self.height + 50.0
    }

    pub fn fish_floor(&self) -> f64 {
        self.bottom_y - 30.0
    }
}

pub fn water_surface_y(progress: f64, height: f64) -> f64 {
    height * SURFACE_BASE - progress * height * PARALLAX
}

pub fn water_color(progress: f64) -> Rgb {
    if progress < 0.5 {
        SURFACE.lerp(MID, progress * 2.0)
    } else {
        MID.lerp(ABYSS, (progress - 0.5) * 2.0)
    }
}

/// Points along the animated water line, one every 10 px.
pub fn surface_points(width: f64, surface_y: f64, time: f64) -> Vec<(f64, f64)> {
    (0..=width.max(0.0) as usize)
        .step_by(WAVE_STEP_PX)
        .map(|x| {
            let x = x as f64;
            (x, surface_y + (x * 0.006 + time).sin() * 12.0)
        })
        .collect()
}

pub fn clouds(width: f64, mobile: bool) -> Vec<Cloud> {
    let count = if mobile { 3 } else { 10 };
    (0..count)
        .map(|i| Cloud {
            x: width * (0.08 + (i as f64) * (0.9 / (count as f64))),
            y: 50.0 + ((i % 3) as f64) * 20.0,
            size: 18.0 + ((i % 5) as f64),
        })
        .collect()
}

/// Wing tip lift for a bird at `time`.
pub fn wing_lift(bird: &Bird, time: f64) -> f64 {
    (time * 8.0 * bird.wing_freq).sin() * bird.size
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FishSprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub dir: f64,
    pub color: &'static str,
}

#[derive(Debug, Default)]
pub struct OceanScene {
    pub fish: Vec<Fish>,
    pub birds: Vec<Bird>,
    pub corals: Vec<Coral>,
    pub sand_grains: Vec<SandGrain>,
    pub sand_patches: Vec<SandPatch>,
    pub time: f64,
}

fn pick<T: Copy>(rng: &mut Rng64, items: &[T]) -> T {
    items[rng.index(items.len())]
}

/// `base + rand * spread`
fn spread(rng: &mut Rng64, base: f64, spread: f64) -> f64 {
    base + rng.next_f64_01() * spread
}

impl OceanScene {
    pub fn generate(width: f64, mobile: bool, rng: &mut Rng64) -> Self {
        let fish_count = if mobile { 8 } else { 12 };
        let fish = (0..fish_count)
            .map(|_| Fish {
                depth: spread(rng, 0.2, 1.2),
                x: spread(rng, 0.0, width),
                speed: spread(rng, 0.4, 0.8),
                dir: if rng.chance(0.5) { 1.0 } else { -1.0 },
                size: if mobile { spread(rng, 12.0, 20.0) } else { spread(rng, 15.0, 25.0) },
                color: pick(rng, &FISH_COLORS),
            })
            .collect();

        let bird_count = if mobile { 2 } else { 4 };
        let birds = (0..bird_count)
            .map(|_| Bird {
                x: spread(rng, 0.0, width),
                y_offset: spread(rng, 60.0, 120.0),
                speed: spread(rng, 0.5, 1.5),
                size: if mobile { spread(rng, 6.0, 6.0) } else { spread(rng, 8.0, 8.0) },
                wing_freq: spread(rng, 0.08, 0.15),
            })
            .collect();

        let coral_count = if mobile {
            ((width / 140.0).floor() as usize).max(8)
        } else {
            ((width / 70.0).floor() as usize).max(16)
        };
        let corals = (0..coral_count)
            .map(|i| {
                let slot = i % 4;
                let (kind, color) = match slot {
                    0 | 1 => {
                        let branches = if mobile {
                            rng.range_u32(2..4)
                        } else {
                            rng.range_u32(3..5)
                        };
                        (CoralKind::Branch { branches }, pick(rng, &BRANCH_PALETTE))
                    }
                    2 => {
                        let blades = if mobile {
                            rng.range_u32(1..3)
                        } else {
                            rng.range_u32(2..4)
                        };
                        (CoralKind::Seaweed { blades }, SEAWEED_COLOR)
                    }
                    _ => {
                        let petals = if mobile {
                            rng.range_u32(3..5)
                        } else {
                            rng.range_u32(5..8)
                        };
                        (CoralKind::Soft { petals }, SOFT_CORAL_COLOR)
                    }
                };
                Coral {
                    x: (width / (coral_count as f64)) * (i as f64) + spread(rng, -15.0, 30.0),
                    kind,
                    size: if mobile { spread(rng, 12.0, 15.0) } else { spread(rng, 16.0, 18.0) },
                    color,
                }
            })
            .collect();

        let grain_count = if mobile { 45 } else { 90 };
        let sand_grains = (0..grain_count)
            .map(|_| SandGrain {
                x: spread(rng, 0.0, width),
                y: spread(rng, 6.0, 90.0),
                size: if mobile { spread(rng, 0.6, 1.2) } else { spread(rng, 0.8, 1.6) },
                opacity: if mobile { spread(rng, 0.05, 0.25) } else { spread(rng, 0.08, 0.35) },
            })
            .collect();

        let patch_count = if mobile { 5 } else { 10 };
        let sand_patches = (0..patch_count)
            .map(|_| SandPatch {
                x: spread(rng, 0.0, width),
                y: spread(rng, 20.0, 70.0),
                radius: if mobile { spread(rng, 15.0, 25.0) } else { spread(rng, 25.0, 35.0) },
                opacity: if mobile { spread(rng, 0.03, 0.06) } else { spread(rng, 0.05, 0.08) },
            })
            .collect();

        Self { fish, birds, corals, sand_grains, sand_patches, time: 0.0 }
    }

    /// Moves the birds that are in view and returns their screen positions.
    pub fn fly_birds(&mut self, width: f64, layout: &Layout) -> Vec<(Bird, f64)> {
        if !layout.shows_birds() {
            return Vec::new();
        }
        self.birds
            .iter_mut()
            .map(|bird| {
                bird.x += bird.speed;
                if bird.x > width + 50.0 {
                    bird.x = -50.0;
                }
                (*bird, layout.surface_y - bird.y_offset)
            })
            .collect()
    }

    /// Moves the fish that are on screen and returns where to draw them.
    pub fn swim_fish(&mut self, width: f64, layout: &Layout) -> Vec<FishSprite> {
        let floor = layout.fish_floor();
        let time = self.time;
        let mut sprites = Vec::new();
        for fish in self.fish.iter_mut() {
            let screen_y = (layout.surface_y + fish.depth * layout.parallax).min(floor);
            if screen_y <= -50.0 || screen_y >= floor + 50.0 {
                continue;
            }
            fish.x += fish.speed * fish.dir;
            let margin = fish.size * 2.0;
            if fish.dir > 0.0 && fish.x > width + margin {
                fish.x = -margin;
            } else if fish.dir < 0.0 && fish.x < -margin {
                fish.x = width + margin;
            }
            let wobble = (time * 2.0 + fish.x * 0.01).sin() * 8.0;
            sprites.push(FishSprite {
                x: fish.x,
                y: screen_y + wobble,
                size: fish.size,
                dir: fish.dir,
                color: fish.color,
            });
        }
        sprites
    }

    pub fn advance_time(&mut self) {
        self.time += TIME_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> Rng64 {
        Rng64::new(42)
    }

    #[test]
    fn test_scene_counts_depend_on_device() {
        let desktop = OceanScene::generate(1400.0, false, &mut rng());
        assert_eq!(desktop.fish.len(), 12);
        assert_eq!(desktop.birds.len(), 4);
        assert_eq!(desktop.corals.len(), 20);
        assert_eq!(desktop.sand_grains.len(), 90);
        assert_eq!(desktop.sand_patches.len(), 10);

        let mobile = OceanScene::generate(390.0, true, &mut rng());
        assert_eq!(mobile.fish.len(), 8);
        assert_eq!(mobile.birds.len(), 2);
        assert_eq!(mobile.corals.len(), 8);
        assert_eq!(mobile.sand_grains.len(), 45);
        assert_eq!(mobile.sand_patches.len(), 5);
    }

    #[test]
    fn test_coral_kinds_cycle() {
        let scene = OceanScene::generate(1400.0, false, &mut rng());
        for (i, coral) in scene.corals.iter().enumerate() {
            match (i % 4, coral.kind) {
                (0 | 1, CoralKind::Branch { branches }) => {
                    assert!((3..5).contains(&branches));
                    assert!(BRANCH_PALETTE.contains(&coral.color));
                }
                (2, CoralKind::Seaweed { blades }) => assert!((2..4).contains(&blades)),
                (3, CoralKind::Soft { petals }) => assert!((5..8).contains(&petals)),
                other => panic!("unexpected coral at {}: {:?}", i, other),
            }
        }
    }

    #[test]
    fn test_layout_at_top_and_bottom() {
        let top = Layout::new(0.0, 1000.0);
        assert_eq!(top.surface_y, 450.0);
        assert_eq!(top.bottom_y, 1200.0);
        assert!(top.shows_birds());
        assert!(!top.shows_sea_bed());

        let bottom = Layout::new(1.0, 1000.0);
        assert_eq!(bottom.surface_y, -1150.0);
        assert_eq!(bottom.bottom_y, 900.0);
        assert!(!bottom.shows_birds());
        assert!(bottom.shows_sea_bed());
    }

    #[test]
    fn test_water_darkens_with_depth() {
        assert_eq!(water_color(0.0), SURFACE);
        assert_eq!(water_color(0.5), MID);
        assert_eq!(water_color(1.0), ABYSS);
    }

    #[test]
    fn test_surface_points_span_width() {
        let points = surface_points(100.0, 300.0, 0.0);
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], (0.0, 300.0));
        assert_eq!(points[10].0, 100.0);
        assert!(points.iter().all(|(_, y)| (288.0..=312.0).contains(y)));
    }

    #[test]
    fn test_birds_wrap_around() {
        let mut scene = OceanScene::default();
        scene.birds.push(Bird { x: 849.5, y_offset: 100.0, speed: 1.0, size: 8.0, wing_freq: 0.1 });
        let layout = Layout::new(0.0, 1000.0);

        let drawn = scene.fly_birds(800.0, &layout);
        assert_eq!(drawn[0].0.x, -50.0);
        assert_eq!(drawn[0].1, 350.0);
    }

    #[test]
    fn test_fish_stay_above_sea_bed_and_wrap() {
        let mut scene = OceanScene::default();
        scene.fish.push(Fish { depth: 0.5, x: 10.0, speed: 1.0, dir: -1.0, size: 10.0, color: "#fff" });
        scene.fish.push(Fish { depth: 5.0, x: 100.0, speed: 1.0, dir: 1.0, size: 10.0, color: "#fff" });
        let layout = Layout::new(0.0, 1000.0);

        let sprites = scene.swim_fish(800.0, &layout);
        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites[0].x, 9.0);
        // the deep fish is clamped to just above the bed
        assert!(sprites[1].y <= layout.fish_floor() + 8.0);

        scene.fish[0].x = -19.5;
        let sprites = scene.swim_fish(800.0, &layout);
        assert_eq!(sprites[0].x, 820.0);
    }

    #[test]
    fn test_off_screen_fish_do_not_move() {
        let mut scene = OceanScene::default();
        scene.fish.push(Fish { depth: 0.2, x: 300.0, speed: 1.0, dir: 1.0, size: 10.0, color: "#fff" });
        // surface scrolled far above the viewport
        let layout = Layout::new(0.9, 1000.0);
        assert!(scene.swim_fish(800.0, &layout).is_empty());
        assert_eq!(scene.fish[0].x, 300.0);
    }

    #[test]
    fn test_clouds_per_device() {
        assert_eq!(clouds(1000.0, false).len(), 10);
        let mobile = clouds(300.0, true);
        assert_eq!(mobile.len(), 3);
        assert_eq!(mobile[0], Cloud { x: 24.0, y: 50.0, size: 18.0 });
    }
}
