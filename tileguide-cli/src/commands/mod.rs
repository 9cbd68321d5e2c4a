pub mod diff;
pub mod outline;
pub mod render;
