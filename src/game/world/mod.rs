// World layout

pub mod platforms;

pub use platforms::{PlatformField, DEFAULT_LAYOUT};
