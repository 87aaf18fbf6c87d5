pub mod catalog;
pub mod constants;
pub mod shared_wheel_game;
