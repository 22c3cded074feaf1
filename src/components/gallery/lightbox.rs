/// Horizontal travel a swipe needs before it turns the page.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    None,
    Forward,
}

impl Direction {
    /// Where the incoming photo slides in from, as a CSS offset.
    pub fn enter_offset(self) -> &'static str {
        match self {
            Direction::Forward => "translateX(1000px) scale(0.8)",
            Direction::Back => "translateX(-1000px) scale(0.8)",
            Direction::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Prev,
}

impl LightboxAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxAction::Close),
            "ArrowLeft" => Some(LightboxAction::Prev),
            "ArrowRight" => Some(LightboxAction::Next),
            _ => None,
        }
    }

    pub fn from_swipe(start_x: f64, end_x: f64) -> Option<Self> {
        let diff = start_x - end_x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            None
        } else if diff > 0.0 {
            Some(LightboxAction::Next)
        } else {
            Some(LightboxAction::Prev)
        }
    }
}

/// Which photo the full-screen viewer shows, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    count: usize,
    selected: Option<usize>,
    /// Bumped on every page turn so the slide animation restarts.
    page: u64,
    direction: Direction,
}

impl Lightbox {
    pub fn new(count: usize) -> Self {
        Self { count, selected: None, page: 0, direction: Direction::None }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Open(index) => self.open(index),
            LightboxAction::Close => self.close(),
            LightboxAction::Next => self.paginate(Direction::Forward),
            LightboxAction::Prev => self.paginate(Direction::Back),
        }
    }

    pub fn open(&mut self, index: usize) {
        if index < self.count {
            self.selected = Some(index);
            self.direction = Direction::None;
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn paginate(&mut self, direction: Direction) {
        let Some(current) = self.selected else {
            return;
        };
        let next = match direction {
            Direction::Forward => (current + 1) % self.count,
            Direction::Back => (current + self.count - 1) % self.count,
            Direction::None => current,
        };
        self.selected = Some(next);
        self.direction = direction;
        self.page = self.page.wrapping_add(1);
    }

    pub fn counter(&self) -> Option<String> {
        self.selected.map(|i| format!("{} / {}", i + 1, self.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_on_clicked_photo() {
        let mut lightbox = Lightbox::new(4);
        assert!(!lightbox.is_open());
        lightbox.apply(LightboxAction::Open(2));
        assert_eq!(lightbox.selected(), Some(2));
        assert_eq!(lightbox.counter().as_deref(), Some("3 / 4"));
    }

    #[test]
    fn test_cycles_modulo_count() {
        let mut lightbox = Lightbox::new(4);
        lightbox.open(3);
        lightbox.apply(LightboxAction::Next);
        assert_eq!(lightbox.selected(), Some(0));
        assert_eq!(lightbox.direction(), Direction::Forward);

        lightbox.apply(LightboxAction::Prev);
        lightbox.apply(LightboxAction::Prev);
        assert_eq!(lightbox.selected(), Some(2));
        assert_eq!(lightbox.direction(), Direction::Back);
        assert_eq!(lightbox.page(), 3);
    }

    #[test]
    fn test_paging_a_closed_viewer_is_ignored() {
        let mut lightbox = Lightbox::new(4);
        lightbox.apply(LightboxAction::Next);
        assert_eq!(lightbox.selected(), None);
        assert_eq!(lightbox.page(), 0);
    }

    #[test]
    fn test_out_of_range_open_is_ignored() {
        let mut lightbox = Lightbox::new(4);
        lightbox.open(4);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_keys() {
        assert_eq!(LightboxAction::from_key("Escape"), Some(LightboxAction::Close));
        assert_eq!(LightboxAction::from_key("ArrowLeft"), Some(LightboxAction::Prev));
        assert_eq!(LightboxAction::from_key("ArrowRight"), Some(LightboxAction::Next));
        assert_eq!(LightboxAction::from_key("Enter"), None);
    }

    #[test]
    fn test_swipes() {
        assert_eq!(LightboxAction::from_swipe(300.0, 200.0), Some(LightboxAction::Next));
        assert_eq!(LightboxAction::from_swipe(200.0, 300.0), Some(LightboxAction::Prev));
        assert_eq!(LightboxAction::from_swipe(200.0, 250.0), None);
    }
}
