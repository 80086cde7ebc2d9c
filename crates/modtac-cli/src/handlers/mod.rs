pub mod gallery;
pub mod grid;
pub mod layout;
pub mod motion;
pub mod telemetry;
