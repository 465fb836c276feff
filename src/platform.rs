//! Thin wrappers over timing and randomness so the game loop does not reach for them directly.

use std::time::Duration;

use rand::rngs::ThreadRng;

/// Sleeps precisely while the window has focus, coarsely otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

pub fn rng() -> ThreadRng {
    rand::rng()
}
