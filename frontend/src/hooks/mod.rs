pub mod use_spin_sound;
pub mod use_wheel;

pub use use_spin_sound::*;
pub use use_wheel::*;
