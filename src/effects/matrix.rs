use crate::effects::Rng64;

pub const GLYPHS: [char; 2] = ['0', '1'];
pub const FONT_SIZE: f64 = 20.0;
pub const LINE_HEIGHT: f64 = FONT_SIZE * 1.2;
/// Minimum time between drawn frames, roughly 22 fps.
pub const FRAME_INTERVAL_MS: f64 = 45.0;
/// Chance per frame that a drop past the bottom edge starts over.
const RESET_CHANCE: f64 = 0.025;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

/// Falling columns of binary digits.
#[derive(Debug, Default)]
pub struct MatrixRain {
    /// Row index of the head of each column.
    drops: Vec<u32>,
    last_frame: Option<f64>,
    needs_full_clear: bool,
}

impl MatrixRain {
    pub fn new() -> Self {
        Self { drops: Vec::new(), last_frame: None, needs_full_clear: true }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn resize(&mut self, width: f64, height: f64, rng: &mut Rng64) {
        let columns = (width / FONT_SIZE).floor().max(0.0) as usize;
        let rows = (height / LINE_HEIGHT).max(0.0);
        while self.drops.len() < columns {
            self.drops.push((rng.next_f64_01() * rows).floor() as u32);
        }
        self.drops.truncate(columns);
    }

    /// Throttles drawing to `FRAME_INTERVAL_MS`.
    pub fn is_due(&mut self, timestamp: f64) -> bool {
        if let Some(last) = self.last_frame {
            if timestamp - last < FRAME_INTERVAL_MS {
                return false;
            }
        }
        self.last_frame = Some(timestamp);
        true
    }

    /// True once, for the first frame after the effect starts.
    pub fn take_full_clear(&mut self) -> bool {
        std::mem::take(&mut self.needs_full_clear)
    }

    pub fn step(&mut self, height: f64, rng: &mut Rng64) -> Vec<Glyph> {
        let mut glyphs = Vec::with_capacity(self.drops.len());
        for (i, drop) in self.drops.iter_mut().enumerate() {
            let ch = GLYPHS[rng.index(GLYPHS.len())];
            let y = (*drop as f64) * LINE_HEIGHT;
            glyphs.push(Glyph { ch, x: (i as f64) * FONT_SIZE + FONT_SIZE / 2.0, y });

            if y > height && rng.next_f64_01() < RESET_CHANCE {
                *drop = 0;
            }
            *drop += 1;
        }
        glyphs
    }
}
