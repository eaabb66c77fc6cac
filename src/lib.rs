pub mod axis;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod point;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
