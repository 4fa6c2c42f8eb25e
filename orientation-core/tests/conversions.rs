use approx::{abs_diff_eq, assert_abs_diff_eq};
use orientation_core::angle::{reduce_to_canonical_range, shortest_difference};
use orientation_core::test_helpers::{assert_matrix_near, assert_quaternion_near};
use orientation_core::{EulerAngles, Frame, Quaternion, RotationMatrix, Vector3};
use proptest::prelude::*;

prop_compose! {
    fn any_angles()(
        heading in -1000.0..1000.0f64,
        pitch in -1000.0..1000.0f64,
        bank in -1000.0..1000.0f64,
    ) -> EulerAngles {
        EulerAngles::new(heading, pitch, bank)
    }
}

// Quarter degrees are exact in binary, so sums and reductions stay exact.
fn quarter_degrees(limit: i32) -> impl Strategy<Value = f64> {
    (-4 * limit..=4 * limit).prop_map(|quarters| f64::from(quarters) * 0.25)
}

prop_compose! {
    fn canonical_non_pole_angles()(
        heading in -179.9..180.0f64,
        pitch in -89.0..89.0f64,
        bank in -179.9..180.0f64,
    ) -> EulerAngles {
        EulerAngles::new(heading, pitch, bank)
    }
}

prop_compose! {
    fn unit_axis()(
        phi in 0.0..std::f64::consts::TAU,
        theta in 0.0..std::f64::consts::PI,
    ) -> Vector3 {
        Vector3::direction(
            libm::cos(phi) * libm::sin(theta),
            libm::sin(phi) * libm::sin(theta),
            libm::cos(theta),
        )
    }
}

prop_compose! {
    fn unit_quaternion()(angles in canonical_non_pole_angles()) -> Quaternion {
        angles.to_upright_quaternion()
    }
}

prop_compose! {
    fn general_matrix()(entries in prop::array::uniform9(-10.0..10.0f64)) -> RotationMatrix {
        RotationMatrix::from_rows([
            [entries[0], entries[1], entries[2]],
            [entries[3], entries[4], entries[5]],
            [entries[6], entries[7], entries[8]],
        ])
    }
}

fn angles_near(a: &EulerAngles, b: &EulerAngles, tolerance: f64) -> bool {
    shortest_difference(a.heading, b.heading).abs() <= tolerance
        && (a.pitch - b.pitch).abs() <= tolerance
        && shortest_difference(a.bank, b.bank).abs() <= tolerance
}

fn same_rotation(a: &Quaternion, b: &Quaternion, tolerance: f64) -> bool {
    abs_diff_eq!(*a, *b, epsilon = tolerance) || abs_diff_eq!(*a, -*b, epsilon = tolerance)
}

// `Quaternion::angle` goes through acos, which loses precision near zero.
fn rotation_angle(q: &Quaternion) -> f64 {
    2.0 * libm::atan2(libm::sqrt(q.x * q.x + q.y * q.y + q.z * q.z), q.w)
}

// --- Canonicalization properties ---

proptest! {
    #[test]
    fn canonize_is_idempotent(angles in any_angles()) {
        let once = angles.canonized();
        prop_assert_eq!(once.canonized(), once);
    }

    #[test]
    fn canonize_lands_in_canonical_range(angles in any_angles()) {
        let canonical = angles.canonized();
        prop_assert!(canonical.is_canonical(), "{} -> {}", angles, canonical);
    }

    #[test]
    fn canonize_ignores_full_turns(
        heading in quarter_degrees(180),
        pitch in quarter_degrees(90),
        bank in quarter_degrees(180),
        k in -5i32..=5,
    ) {
        let turns = 360.0 * f64::from(k);
        let base = EulerAngles::new(heading, pitch, bank).canonized();
        let shifted = EulerAngles::new(heading + turns, pitch, bank + turns).canonized();
        prop_assert_eq!(shifted, base);
    }

    #[test]
    fn canonize_folds_bank_into_heading_at_poles(
        heading in quarter_degrees(720),
        bank in quarter_degrees(720),
        k in -3i32..=3,
    ) {
        let turns = 360.0 * f64::from(k);

        let north = EulerAngles::new(heading, 90.0 + turns, bank).canonized();
        prop_assert_eq!(
            north,
            EulerAngles::new(reduce_to_canonical_range(heading + bank), 90.0, 0.0)
        );

        let south = EulerAngles::new(heading, -90.0 + turns, bank).canonized();
        prop_assert_eq!(
            south,
            EulerAngles::new(reduce_to_canonical_range(heading - bank), -90.0, 0.0)
        );
    }
}

// --- Conversion round trips ---

proptest! {
    #[test]
    fn matrix_round_trip_away_from_poles(angles in canonical_non_pole_angles()) {
        for frame in [Frame::Upright, Frame::Object] {
            let back = EulerAngles::from_matrix(&angles.to_matrix(frame), frame);
            prop_assert!(angles_near(&back, &angles, 1e-6), "{} -> {}", angles, back);
        }
    }

    #[test]
    fn quaternion_round_trip_away_from_poles(angles in canonical_non_pole_angles()) {
        for frame in [Frame::Upright, Frame::Object] {
            let back = EulerAngles::from_quaternion(&angles.to_quaternion(frame), frame);
            prop_assert!(angles_near(&back, &angles, 1e-6), "{} -> {}", angles, back);
        }
    }

    #[test]
    fn matrix_and_quaternion_paths_agree(angles in any_angles()) {
        for frame in [Frame::Upright, Frame::Object] {
            let direct = angles.to_quaternion(frame);
            let via_matrix = Quaternion::from_matrix(&angles.to_matrix(frame));
            prop_assert!(same_rotation(&direct, &via_matrix, 1e-9));
        }
    }

    #[test]
    fn canonical_angles_describe_the_same_rotation(angles in any_angles()) {
        let canonical = angles.canonized();
        // The fold at the poles is a naming convention, not a rotation identity.
        prop_assume!(!orientation_core::euler::is_exact_pole(canonical.pitch));

        let original = angles.to_upright_matrix();
        prop_assert!(original.max_difference(&canonical.to_upright_matrix()) < 1e-9);
    }
}

// --- Matrix properties ---

proptest! {
    #[test]
    fn rotation_keeps_unit_determinant(
        angles in canonical_non_pole_angles(),
        axis in unit_axis(),
        degrees in -360.0..360.0f64,
    ) {
        let mut m = angles.to_upright_matrix();
        m.rotate_about(&axis, degrees).unwrap();
        prop_assert!((m.determinant() - 1.0).abs() < 1e-9);

        m.orthogonalize().unwrap();
        prop_assert!((m.determinant() - 1.0).abs() < 1e-9);
        prop_assert!(m.is_rotation(1e-9));
    }

    #[test]
    fn scalar_multiple_scales_determinant_by_cube(m in general_matrix(), k in -5.0..5.0f64) {
        let det = m.determinant();
        let mut scaled = m;
        scaled.multiply_by_scalar(k);

        let expected = k * k * k * det;
        prop_assert!((scaled.determinant() - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }
}

// --- Slerp properties ---

proptest! {
    #[test]
    fn slerp_hits_endpoints(a in unit_quaternion(), b in unit_quaternion()) {
        prop_assert!(abs_diff_eq!(a.slerp(&b, 0.0), a, epsilon = 1e-9));
        prop_assert!(same_rotation(&a.slerp(&b, 1.0), &b, 1e-9));
    }

    #[test]
    fn slerp_returns_unit_quaternions(
        a in unit_quaternion(),
        b in unit_quaternion(),
        t in 0.0..=1.0f64,
    ) {
        prop_assert!((a.slerp(&b, t).magnitude() - 1.0).abs() < 1e-12);
    }
}

// --- Exponentiation ---

proptest! {
    #[test]
    fn exp_scales_rotation_angle(
        axis in unit_axis(),
        degrees in 0.5..170.0f64,
        t in 0.0..1.0f64,
    ) {
        let q = Quaternion::from_axis_angle(degrees.to_radians(), &axis);
        let powered = q.exp(t);

        prop_assert!((rotation_angle(&powered) - degrees.to_radians() * t).abs() < 1e-12);
        prop_assert!((powered.magnitude() - 1.0).abs() < 1e-12);
    }
}

// --- Concrete scenarios ---

#[test]
fn scenario_heading_reduced_by_full_turn() {
    assert_eq!(
        EulerAngles::new(380.0, 0.0, 0.0).canonized(),
        EulerAngles::new(20.0, 0.0, 0.0)
    );
}

#[test]
fn scenario_pitch_reflected_through_pole() {
    assert_eq!(
        EulerAngles::new(0.0, 135.0, 0.0).canonized(),
        EulerAngles::new(180.0, 45.0, 180.0)
    );
}

#[test]
fn scenario_gimbal_lock_folds_bank() {
    assert_eq!(
        EulerAngles::new(90.0, 90.0, 90.0).canonized(),
        EulerAngles::new(180.0, 90.0, 0.0)
    );
}

#[test]
fn scenario_zero_angles_give_identity() {
    let m = EulerAngles::default().to_upright_matrix();
    assert_eq!(m, RotationMatrix::identity());
    assert_matrix_near(
        &m,
        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        0.0,
    );
}

#[test]
fn scenario_axis_angle_quaternion() {
    let q = Quaternion::from_axis_angle(30f64.to_radians(), &Vector3::x_axis());
    assert_quaternion_near(&q, 0.966, 0.259, 0.0, 0.0, 1e-3);
    assert_eq!((q.y, q.z), (0.0, 0.0));
}

#[test]
fn scenario_slerp_halfway() {
    let x = Vector3::x_axis();
    let a = Quaternion::from_axis_angle(20f64.to_radians(), &x);
    let b = Quaternion::from_axis_angle(40f64.to_radians(), &x);
    let expected = Quaternion::from_axis_angle(30f64.to_radians(), &x);

    let mid = a.slerp(&b, 0.5);
    assert_abs_diff_eq!(mid, expected, epsilon = 1e-12);
    assert_quaternion_near(&mid, 0.966, 0.259, 0.0, 0.0, 1e-3);
}

#[test]
fn quaternion_and_matrix_rotate_points_alike() {
    let e = EulerAngles::new(-30.0, 30.0, 70.0);
    let q = e.to_upright_quaternion();
    let m = e.to_upright_matrix();

    let p = Vector3::direction(1.5, -2.0, 0.25);
    assert_abs_diff_eq!(q.rotate_vector(p), m.transform(p), epsilon = 1e-12);
}

#[test]
fn object_frame_undoes_upright_frame() {
    let e = EulerAngles::new(123.0, 33.5, -32.7);
    let there_and_back = e.to_upright_matrix() * e.to_object_matrix();
    assert!(there_and_back.max_difference(&RotationMatrix::identity()) < 1e-12);

    let q = e.to_upright_quaternion() * e.to_object_quaternion();
    assert_abs_diff_eq!(q, Quaternion::identity(), epsilon = 1e-12);
}

#[cfg(feature = "serde")]
mod serde_round_trip {
    use super::*;

    #[test]
    fn value_types_survive_json() {
        let e = EulerAngles::new(123.0, 33.5, -32.7);
        let q = e.to_upright_quaternion();
        let m = e.to_upright_matrix().with_translation([1.0, 2.0, 3.0]);

        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(serde_json::from_str::<EulerAngles>(&json).unwrap(), e);

        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(serde_json::from_str::<Quaternion>(&json).unwrap(), q);

        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<RotationMatrix>(&json).unwrap(), m);

        let json = serde_json::to_string(&Frame::Object).unwrap();
        assert_eq!(json, "\"Object\"");
        assert_eq!(serde_json::from_str::<Frame>(&json).unwrap(), Frame::Object);
    }
}
