mod lightbox;
mod photos;

pub use lightbox::{ Direction, Lightbox, LightboxAction };
pub use photos::PhotosSection;
