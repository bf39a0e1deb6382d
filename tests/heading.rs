use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use stroll::controller::{heading, GameKey, HeldKeys};

fn held(keys: &[GameKey]) -> HeldKeys {
    let mut h = HeldKeys::default();
    for &k in keys {
        h.set(k, true);
    }
    h
}

#[test]
fn eight_directions_resolve_exactly() {
    use GameKey::*;
    let cases: &[(&[GameKey], f32)] = &[
        (&[Up], 0.0),
        (&[Up, Left], FRAC_PI_4),
        (&[Up, Right], -FRAC_PI_4),
        (&[Down], PI),
        (&[Down, Left], 3.0 * FRAC_PI_4),
        (&[Down, Right], -3.0 * FRAC_PI_4),
        (&[Left], FRAC_PI_2),
        (&[Right], -FRAC_PI_2),
    ];
    for (keys, expected) in cases {
        assert_eq!(
            heading::resolve(&held(keys)),
            Some(*expected),
            "keys {keys:?}"
        );
    }
}

#[test]
fn no_movement_key_resolves_to_none() {
    assert_eq!(heading::resolve(&HeldKeys::default()), None);
    // The jump key is not a movement key.
    assert_eq!(heading::resolve(&held(&[GameKey::Jump])), None);
}

#[test]
fn axis_priority_breaks_contradictory_input() {
    use GameKey::*;
    // Up wins over Down, Left wins over Right.
    assert_eq!(heading::resolve(&held(&[Up, Down])), Some(0.0));
    assert_eq!(heading::resolve(&held(&[Up, Left, Right])), Some(FRAC_PI_4));
    assert_eq!(heading::resolve(&held(&[Left, Right])), Some(FRAC_PI_2));
}
