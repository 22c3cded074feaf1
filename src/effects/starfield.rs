use crate::effects::Rng64;

pub const STAR_COUNT: usize = 400;
pub const UNIVERSE_DEPTH: f64 = 4000.0;
/// Half-width of the tunnel the stars are scattered in.
pub const SPREAD: f64 = 2000.0;
pub const FOV: f64 = 800.0;
const NEAR_PLANE: f64 = 10.0;
/// Camera travel per pixel scrolled.
const CAMERA_SPEED: f64 = 0.5;
const MOUSE_PARALLAX: f64 = 0.5;
const MAX_SCALE: f64 = 20.0;
const SCREEN_MARGIN: f64 = 50.0;
const FOG_DISTANCE: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub z: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Camera {
    pub fn new(scroll_y: f64, mouse: (f64, f64), center: (f64, f64)) -> Self {
        Self {
            z: scroll_y * CAMERA_SPEED,
            offset_x: (mouse.0 - center.0) * MOUSE_PARALLAX,
            offset_y: (mouse.1 - center.1) * MOUSE_PARALLAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedStar {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Brings a camera-relative depth back into `(NEAR_PLANE, UNIVERSE_DEPTH]`
/// so the tunnel never runs out of stars.
pub fn wrap_depth(mut dz: f64) -> f64 {
    if dz < NEAR_PLANE {
        dz += ((NEAR_PLANE - dz) / UNIVERSE_DEPTH).ceil() * UNIVERSE_DEPTH;
    }
    if dz > UNIVERSE_DEPTH {
        dz -= ((dz - UNIVERSE_DEPTH) / UNIVERSE_DEPTH).ceil() * UNIVERSE_DEPTH;
    }
    dz
}

#[derive(Debug, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(rng: &mut Rng64) -> Self {
        let mut stars: Vec<Star> = (0..STAR_COUNT)
            .map(|_| Star {
                x: (rng.next_f64_01() - 0.5) * SPREAD * 2.0,
                y: (rng.next_f64_01() - 0.5) * SPREAD * 2.0,
                z: rng.next_f64_01() * UNIVERSE_DEPTH,
                size: rng.next_f64_01() * 2.0 + 1.0,
            })
            .collect();
        stars.sort_by(|a, b| b.z.total_cmp(&a.z));
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn project_all<'a>(
        &'a self,
        camera: Camera,
        width: f64,
        height: f64
    ) -> impl Iterator<Item = (&'a Star, ProjectedStar)> + 'a {
        self.stars
            .iter()
            .filter_map(move |star| project(star, camera, width, height).map(|p| (star, p)))
    }
}

/// Perspective-projects a star, or `None` when it should not be drawn.
pub fn project(star: &Star, camera: Camera, width: f64, height: f64) -> Option<ProjectedStar> {
    let dz = wrap_depth(star.z - camera.z);
    let scale = FOV / dz;
    let x = width / 2.0 + (star.x - camera.offset_x) * scale;
    let y = height / 2.0 + (star.y - camera.offset_y) * scale;

    let off_screen =
        x < -SCREEN_MARGIN ||
        x > width + SCREEN_MARGIN ||
        y < -SCREEN_MARGIN ||
        y > height + SCREEN_MARGIN;
    if scale > MAX_SCALE || off_screen {
        return None;
    }

    Some(ProjectedStar {
        x,
        y,
        scale,
        opacity: ((UNIVERSE_DEPTH - dz) / FOG_DISTANCE).min(1.0),
    })
}
