//! Property sweeps over random vectors plus the documented edge values.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::f64::consts::{FRAC_PI_2, PI};
use threevector::constants::ETA_INFINITY;
use threevector::{Diagnostic, Vector3};

const SAMPLES: usize = 500;

fn random_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

fn assert_vectors_close(a: &Vector3, b: &Vector3, epsilon: f64) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = epsilon);
    assert_abs_diff_eq!(a.y, b.y, epsilon = epsilon);
    assert_abs_diff_eq!(a.z, b.z, epsilon = epsilon);
}

#[test]
fn test_set_mag_keeps_direction() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let mut v = random_vector(&mut rng);
        let m = rng.gen_range(0.1..1000.0);
        let direction = v.unit();
        assert!(v.set_mag(m).is_none());
        assert_relative_eq!(v.mag(), m, max_relative = 1e-12);
        assert_vectors_close(&v.unit(), &direction, 1e-14);
    }
}

#[test]
fn test_rotations_invert_and_preserve_magnitude() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let original = random_vector(&mut rng);
        let phi = rng.gen_range(-10.0..10.0);

        let mut v = original;
        v.rotate_z(-phi).rotate_z(phi);
        assert_vectors_close(&v, &original, 1e-12);

        for rotate in [Vector3::rotate_x, Vector3::rotate_y, Vector3::rotate_z] {
            let mut w = original;
            rotate(&mut w, phi);
            assert_relative_eq!(w.mag(), original.mag(), max_relative = 1e-13);
        }
    }
}

#[test]
fn test_rotate_matches_axis_rotations() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..SAMPLES {
        let original = random_vector(&mut rng);
        let phi = rng.gen_range(-PI..PI);

        let mut by_axis = original;
        by_axis.rotate(&Vector3::Z_HAT, phi);
        let mut by_z = original;
        by_z.rotate_z(phi);
        assert_vectors_close(&by_axis, &by_z, 1e-12);

        let mut by_axis = original;
        by_axis.rotate(&Vector3::X_HAT, phi);
        let mut by_x = original;
        by_x.rotate_x(phi);
        assert_vectors_close(&by_axis, &by_x, 1e-12);
    }
}

#[test]
fn test_rotate_uz_degenerate_axes() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);

        let mut up = v;
        up.rotate_uz(&Vector3::Z_HAT);
        assert_eq!(up, v);

        let mut down = v;
        down.rotate_uz(&Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(down, Vector3::new(-v.x, v.y, -v.z));
    }
}

#[test]
fn test_rotate_uz_carries_z_onto_target() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..SAMPLES {
        let target = random_vector(&mut rng).unit();
        let v = random_vector(&mut rng);

        let mut z = Vector3::Z_HAT;
        z.rotate_uz(&target);
        assert_vectors_close(&z, &target, 1e-14);

        // Angles between rotated vectors are preserved
        let mut rotated = v;
        rotated.rotate_uz(&target);
        assert_relative_eq!(rotated.mag(), v.mag(), max_relative = 1e-13);
        assert_abs_diff_eq!(rotated.dot(&target), v.z, epsilon = 1e-11);
    }
}

#[test]
fn test_delta_phi_range() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let dphi = a.delta_phi(&b);
        assert!(dphi > -PI && dphi <= PI, "delta_phi out of range: {}", dphi);
        assert_eq!(a.delta_phi(&a), 0.0);
        assert!(a.delta_r(&b) >= 0.0);
    }
}

#[rstest]
#[case(Vector3::new(0.0, 0.0, 0.0), 0.0)]
#[case(Vector3::new(0.0, 0.0, 5.0), ETA_INFINITY)]
#[case(Vector3::new(0.0, 0.0, -5.0), -ETA_INFINITY)]
#[case(Vector3::new(3.0, 4.0, 0.0), 0.0)]
fn test_pseudo_rapidity_edges(#[case] v: Vector3, #[case] expected: f64) {
    assert_eq!(v.pseudo_rapidity(), expected);
    assert_eq!(v.eta(), expected);
}

#[rstest]
#[case(0.0)]
#[case(0.5)]
#[case(-2.0)]
#[case(4.0)]
fn test_set_eta_then_eta(#[case] eta: f64) {
    let mut v = Vector3::new(1.0, -1.0, 0.25);
    assert!(v.set_eta(eta).is_none());
    assert_abs_diff_eq!(v.eta(), eta, epsilon = 1e-9);

    let mut w = Vector3::new(2.0, 1.0, -7.0);
    assert!(w.set_cyl_eta(eta).is_none());
    assert_abs_diff_eq!(w.eta(), eta, epsilon = 1e-9);
    assert_relative_eq!(w.perp(), 5f64.sqrt(), max_relative = 1e-14);
}

#[test]
fn test_angle_queries_on_self() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        assert_eq!(v.cos_theta(&v), 1.0);
        assert_eq!(v.cos2_theta(&v), 1.0);
        assert_eq!(v.how_near(&v), 0.0);
        assert_eq!(v.cos_theta(&Vector3::zeros()), 0.0);
        assert_eq!(Vector3::zeros().cos2_theta(&v), 1.0);
    }
}

#[test]
fn test_cos2_theta_near_zero_is_not_negative() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let mut w = v.orthogonal();
        w += v * rng.gen_range(-1e-9..1e-9);
        let c2 = v.cos2_theta(&w);
        assert!(c2 >= 0.0);
        assert!(c2 < 1e-15);
    }
}

#[rstest]
#[case(Vector3::new(1.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0), 1.0)]
#[case(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0), 0.0)]
#[case(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), 1.0)]
#[case(Vector3::new(2.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0), 0.0)]
fn test_how_near_cases(#[case] a: Vector3, #[case] b: Vector3, #[case] expected: f64) {
    assert_eq!(a.how_near(&b), expected);
}

#[test]
fn test_is_near_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(37);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = a + random_vector(&mut rng) * 1e-6;
        assert_eq!(a.is_near(&b, 1e-4), b.is_near(&a, 1e-4));
        assert!(a.is_near_default(&a));
    }
}

#[rstest]
#[case(-0.1)]
#[case(PI + 0.1)]
fn test_set_cyl_theta_out_of_range_still_computes(#[case] theta: f64) {
    let mut v = Vector3::new(3.0, 4.0, 1.0);
    assert_eq!(v.set_cyl_theta(theta), Some(Diagnostic::CylThetaOutOfRange));
    assert_relative_eq!(v.z, 5.0 / theta.tan(), max_relative = 1e-14);
    assert_relative_eq!(v.perp(), 5.0, max_relative = 1e-14);
}

#[test]
fn test_set_cyl_theta_quarter_turns() {
    let mut v = Vector3::new(0.0, 2.0, 9.0);
    assert!(v.set_cyl_theta(FRAC_PI_2).is_none());
    assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-15);
    assert_vectors_close(&v, &Vector3::new(0.0, 2.0, 0.0), 1e-15);
}

#[test]
fn test_division_by_zero_is_not_finite() {
    let mut rng = StdRng::seed_from_u64(41);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let (q, diagnostic) = v.div_checked(0.0);
        assert_eq!(diagnostic, Some(Diagnostic::DivideByZero));
        assert!(!q.x.is_finite() && !q.y.is_finite() && !q.z.is_finite());
    }
}

#[test]
fn test_bad_index_leaves_components() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v.get(5), 0.0);
    assert!(v.set_component(5, 8.0).is_err());
    assert_eq!([v.get(0), v.get(1), v.get(2)], [1.0, 2.0, 3.0]);
}

#[test]
fn test_text_round_trip() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..SAMPLES {
        let v = Vector3::new(
            rng.gen_range(-1e12..1e12),
            rng.gen::<f64>() * 1e-12,
            rng.gen_range(-1.0..1.0),
        );
        let parsed: Vector3 = v.to_string().parse().unwrap();
        assert_eq!(parsed, v);
    }
}
