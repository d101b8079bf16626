pub mod assets;
pub mod board;
pub mod config;
pub mod display;
pub mod effects;
pub mod error;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod types;
