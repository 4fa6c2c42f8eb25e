use crate::{EulerAngles, Quaternion, RotationMatrix};

#[track_caller]
pub fn assert_matrix_near(actual: &RotationMatrix, expected: [[f64; 3]; 3], delta: f64) {
    for (i, row) in expected.iter().enumerate() {
        for (j, want) in row.iter().enumerate() {
            let got = actual.get(i, j);
            assert!(
                (got - want).abs() <= delta,
                "m{}{}: got {}, expected {} (delta {})\n{}",
                i + 1,
                j + 1,
                got,
                want,
                delta,
                actual
            );
        }
    }
}

/// Compares heading, pitch and bank individually, treating angles that
/// differ by a full turn as equal.
#[track_caller]
pub fn assert_euler_near(actual: &EulerAngles, heading: f64, pitch: f64, bank: f64, delta: f64) {
    let parts = [
        ("heading", actual.heading, heading),
        ("pitch", actual.pitch, pitch),
        ("bank", actual.bank, bank),
    ];
    for (name, got, want) in parts {
        let diff = crate::angle::shortest_difference(want, got);
        assert!(
            diff.abs() <= delta,
            "{}: got {}, expected {} (delta {}) in {}",
            name,
            got,
            want,
            delta,
            actual
        );
    }
}

#[track_caller]
pub fn assert_quaternion_near(actual: &Quaternion, w: f64, x: f64, y: f64, z: f64, delta: f64) {
    let parts = [
        ("w", actual.w, w),
        ("x", actual.x, x),
        ("y", actual.y, y),
        ("z", actual.z, z),
    ];
    for (name, got, want) in parts {
        assert!(
            (got - want).abs() <= delta,
            "{}: got {}, expected {} (delta {}) in {}",
            name,
            got,
            want,
            delta,
            actual
        );
    }
}
