// Wheel timing. SPIN_DURATION_MS must match the CSS transition on the wheel.
pub const SPIN_DURATION_MS: u32 = 3000;
pub const MIN_SPIN_DEGREES: u64 = 1440; // 4 full rotations
pub const SPIN_OFFSET_DEGREES: u64 = 360;
pub const FULL_TURN_DEGREES: u64 = 360;

pub const SIPS_RATING_DIVISOR: f64 = 4.0;
pub const MAX_SIPS: u32 = 3;

pub const SPIN_SOUND_PATH: &str = "/spin-sound.mp3";

pub const TITLE: &str = "Ugly Shoe Spinner";
pub const COPYRIGHT: &str = "© 2024 Mummi, Mutsi & Son Oy Ab Group. All rights reserved.";
pub const SPIN_BUTTON_LABEL: &str = "SPIN THE WHEEL OF UGLY!";
pub const SPINNING_LABEL: &str = "Spinning...";
pub const RATING_UNIT: &str = "lintta-aste";
