use crate::effects::easing::Rgb;
use crate::effects::ocean::{ water_color, Layout };
use crate::effects::starfield::Camera;
use crate::utils::dom::scroll_progress;

const VIEWPORT: f64 = 900.0;
const PAGE: f64 = 3600.0;

#[test]
fn test_diving_from_surface_to_sea_bed() {
    let top = Layout::new(scroll_progress(0.0, PAGE, VIEWPORT), VIEWPORT);
    assert!(top.shows_birds());
    assert!(!top.shows_sea_bed());
    assert_eq!(water_color(0.0), Rgb(116, 204, 244));

    let bottom_progress = scroll_progress(PAGE, PAGE, VIEWPORT);
    let bottom = Layout::new(bottom_progress, VIEWPORT);
    assert_eq!(bottom_progress, 1.0);
    assert!(!bottom.shows_birds());
    assert!(bottom.shows_sea_bed());
    assert_eq!(bottom.bottom_y, VIEWPORT - 100.0);
    assert_eq!(water_color(bottom_progress), Rgb(1, 22, 39));
}

#[test]
fn test_overscroll_does_not_push_past_sea_bed() {
    let bounced = scroll_progress(PAGE + 400.0, PAGE, VIEWPORT);
    assert_eq!(Layout::new(bounced, VIEWPORT), Layout::new(1.0, VIEWPORT));
}

#[test]
fn test_camera_flies_forward_with_scroll() {
    let center = (640.0, 360.0);
    let near = Camera::new(0.0, center, center);
    let far = Camera::new(2000.0, center, center);
    assert_eq!(near.z, 0.0);
    assert_eq!(far.z, 1000.0);
    assert_eq!((far.offset_x, far.offset_y), (0.0, 0.0));
}
