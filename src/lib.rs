pub mod app;
pub mod behaviors;
pub mod config;
pub mod error;
pub mod pages;

pub use app::{App, Route};
pub use behaviors::PageBehaviors;
pub use config::BehaviorConfig;
pub use error::BehaviorError;
