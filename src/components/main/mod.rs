mod hero;
mod hint;
mod social;

pub use hero::HeroSection;
pub use hint::HintText;
pub use social::SocialButtons;
