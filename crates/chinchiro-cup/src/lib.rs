//! The dice cup: one timed, animated throw at a time.
//!
//! A `DiceCup` shakes for a fixed number of frames, handing each
//! intermediate throw to the caller for display, then settles on a final
//! triplet and classifies it. A throw requested while the cup is already
//! shaking is ignored.

pub mod config;
pub mod cup;

pub use config::{CupConfig, FRAME_INTERVAL, ROLL_DURATION};
pub use cup::{DiceCup, Round};
