use lazy_static::lazy_static;
use serde::{ Deserialize, Serialize };

use crate::i18n::Text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub telegram: String,
    pub vk: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub caption: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub contacts: Contacts,
    pub links: Links,
    pub photos: Vec<Photo>,
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contacts: Contacts { phone: String::new(), email: String::new() },
            links: Links { telegram: String::new(), vk: String::new(), github: String::new() },
            photos: Vec::new(),
        }
    }
}

lazy_static! {
    static ref SITE: SiteConfig = SiteConfig::parse(include_str!("../../assets/site.json")).unwrap_or_else(
        |e| {
            log::error!("Embedded site config is malformed: {}", e);
            SiteConfig::default()
        }
    );
}

pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::parse(include_str!("../../assets/site.json")).unwrap();
        assert_eq!(config.photos.len(), 4);
        assert_eq!(config.photos[1].caption, Text::Photo2);
        assert!(config.links.telegram.starts_with("https://"));
        assert_eq!(site(), &config);
    }

    #[test]
    fn test_unknown_caption_is_rejected() {
        let raw = r#"{
            "contacts": { "phone": "1", "email": "a@b" },
            "links": { "telegram": "t", "vk": "v", "github": "g" },
            "photos": [{ "src": "/x.jpg", "caption": "photo9" }]
        }"#;
        assert!(SiteConfig::parse(raw).is_err());
    }
}
