//! Configuration module - site-wide metadata

mod site;

pub use site::SiteMetadata;
