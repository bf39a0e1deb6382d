//! Maps the held movement keys to a yaw heading in radians.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::HeldKeys;

/// Resolve the heading for the current key combination, or `None` when no
/// movement key is down. Callers keep their previous heading on `None`:
/// the actor goes on facing the way it last moved.
///
/// Up/Down dominate and Left/Right refine them into diagonals:
/// Up+Left is forward-left (pi/4), Down alone is about-face (pi), and so
/// on. Heading 0 walks along +Z, matching the camera looking down -Z.
pub fn resolve(held: &HeldKeys) -> Option<f32> {
    use super::GameKey::{Down, Left, Right, Up};

    if held.is_held(Up) {
        if held.is_held(Left) {
            Some(FRAC_PI_4)
        } else if held.is_held(Right) {
            Some(-FRAC_PI_4)
        } else {
            Some(0.0)
        }
    } else if held.is_held(Down) {
        if held.is_held(Left) {
            Some(3.0 * FRAC_PI_4)
        } else if held.is_held(Right) {
            Some(-3.0 * FRAC_PI_4)
        } else {
            Some(PI)
        }
    } else if held.is_held(Left) {
        Some(FRAC_PI_2)
    } else if held.is_held(Right) {
        Some(-FRAC_PI_2)
    } else {
        None
    }
}
