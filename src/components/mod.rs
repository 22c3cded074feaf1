pub mod backgrounds;
mod cursor;
mod footer;
pub mod gallery;
pub mod header;
pub mod main;
pub mod preloader;
mod scroll_to_top;

pub use backgrounds::ThemeBackground;
pub use cursor::CustomCursor;
pub use footer::Footer;
pub use gallery::PhotosSection;
pub use header::Header;
pub use main::{ HeroSection, HintText, SocialButtons };
pub use preloader::TerminalPreloader;
pub use scroll_to_top::ScrollToTop;
