//! Small side utilities that ship with the game binary.

pub mod gear;
pub mod cipher;

pub use gear::{gear_pattern, run_gear_session, Gear, GearAnimator, GearError, DEFAULT_SHIFT_DELAY};
pub use cipher::{CaesarCodec, CodecError, DEFAULT_SHIFT};
