#![cfg(test)]

use geom::Vec3;

mod properties;

pub(crate) fn assert_close(a: Vec3, b: Vec3) {
    assert!(a.is_close(b, 1e-4), "{} != {}", a, b);
}
