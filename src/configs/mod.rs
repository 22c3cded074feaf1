pub mod site;

pub use site::{ site, Contacts, Links, Photo, SiteConfig };
