//! Configuration module

mod site;

pub use site::ContactConfig;
pub use site::ListingsConfig;
pub use site::OrganizationConfig;
pub use site::SiteConfig;
