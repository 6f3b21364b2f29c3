pub mod pages;
pub mod preferences;

#[cfg(feature = "hydrate")]
pub mod behaviors;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod scheduler;
#[cfg(feature = "hydrate")]
pub mod transport;

pub use pages::{LandingPage, NotFoundPage};
