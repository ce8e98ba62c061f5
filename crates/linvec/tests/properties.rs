//! Randomized checks of the algebraic identities vectors have to satisfy.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use linvec::{Vector, VectorError, DEFAULT_TOLERANCE};

const ITERATIONS: usize = 500;

fn random_vector(rng: &mut fastrand::Rng, dimension: usize) -> Vector {
    Vector::from_fn(dimension, |_| rng.f64() * 200.0 - 100.0).unwrap()
}

#[test]
fn construction_preserves_coordinates() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0001);
    for _ in 0..ITERATIONS {
        let len = rng.usize(1..10);
        let coords = (0..len).map(|_| rng.f64() * 10.0 - 5.0).collect::<Vec<_>>();
        let v = Vector::new(coords.iter().copied()).unwrap();
        assert_eq!(v.dimension(), len);
        assert_eq!(v.coordinates(), &coords[..]);
        assert_eq!(v.into_vec(), coords);
    }
}

#[test]
fn add_and_sub_are_inverse() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0002);
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let a = random_vector(&mut rng, dim);
        let b = random_vector(&mut rng, dim);
        let roundtrip = a.add(&b).unwrap().sub(&b).unwrap();
        assert_abs_diff_eq!(roundtrip, a, epsilon = 1e-12);

        let mut in_place = a.clone();
        in_place.add_in_place(&b).unwrap().sub_in_place(&b).unwrap();
        assert_abs_diff_eq!(in_place, a, epsilon = 1e-12);
    }
}

#[test]
fn dot_is_commutative() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0003);
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let a = random_vector(&mut rng, dim);
        let b = random_vector(&mut rng, dim);
        assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        assert_relative_eq!(a.dot(&a).unwrap(), a.magnitude_squared());
    }
}

#[test]
fn normalized_has_unit_magnitude() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0004);
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let v = random_vector(&mut rng, dim);
        let n = v.normalized().unwrap();
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert!(n.is_parallel_to_within(&v, DEFAULT_TOLERANCE).unwrap());
        assert_abs_diff_eq!(n.angle_to(&v).unwrap(), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn direction_survives_extreme_scales() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_000a);
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let v = random_vector(&mut rng, dim);
        let n = v.normalized().unwrap();
        for k in [1e250, -1e250, 1e-250] {
            let scaled = v.scale(k);
            assert_relative_eq!(scaled.magnitude(), v.magnitude() * k.abs(), max_relative = 1e-12);
            assert_abs_diff_eq!(scaled.normalized().unwrap(), n.scale(k.signum()), epsilon = 1e-12);
        }
    }
}

#[test]
fn cross_is_anticommutative_and_orthogonal() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0005);
    for _ in 0..ITERATIONS {
        let a = random_vector(&mut rng, 3);
        let b = random_vector(&mut rng, 3);
        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap();
        assert_eq!(ab, ba.scale(-1.0));

        let scale = a.magnitude() * b.magnitude() * ab.magnitude();
        assert_abs_diff_eq!(ab.dot(&a).unwrap() / scale, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ab.dot(&b).unwrap() / scale, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn cross_of_2d_vectors_matches_3d_embedding() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0006);
    for _ in 0..ITERATIONS {
        let a = random_vector(&mut rng, 2);
        let b = random_vector(&mut rng, 2);
        let a3 = Vector::new([a[0], a[1], 0.0]).unwrap();
        let b3 = Vector::new([b[0], b[1], 0.0]).unwrap();

        assert_eq!(a.cross(&b).unwrap(), a3.cross(&b3).unwrap());
        assert_eq!(a.cross(&b3).unwrap(), a3.cross(&b3).unwrap());
        assert_eq!(a3.cross(&b).unwrap(), a3.cross(&b3).unwrap());
    }
}

#[test]
fn projection_components_sum_to_vector() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0007);
    for _ in 0..ITERATIONS {
        let dim = rng.usize(2..8);
        let v = random_vector(&mut rng, dim);
        let basis = random_vector(&mut rng, dim);

        let parallel = v.component_parallel_to(&basis).unwrap();
        let orthogonal = v.component_orthogonal_to(&basis).unwrap();
        assert_abs_diff_eq!(parallel.add(&orthogonal).unwrap(), v, epsilon = 1e-9);
        assert!(parallel.is_parallel_to_within(&basis, 1e-9).unwrap());
        assert!(orthogonal.is_orthogonal_to_within(&basis, 1e-8).unwrap());
    }
}

#[test]
fn angle_is_symmetric_and_bounded() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0008);
    for _ in 0..ITERATIONS {
        let dim = rng.usize(1..8);
        let a = random_vector(&mut rng, dim);
        let b = random_vector(&mut rng, dim);
        let angle = a.angle_to(&b).unwrap();
        assert!((0.0..=std::f64::consts::PI).contains(&angle));
        assert_eq!(angle, b.angle_to(&a).unwrap());
        assert_relative_eq!(
            a.angle_to_degrees(&b).unwrap(),
            angle.to_degrees(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0009);
    for _ in 0..ITERATIONS {
        let left = rng.usize(1..8);
        let right = loop {
            let d = rng.usize(1..8);
            if d != left {
                break d;
            }
        };
        let a = random_vector(&mut rng, left);
        let b = random_vector(&mut rng, right);
        let expected = VectorError::DimensionMismatch { left, right };

        assert_eq!(a.add(&b).unwrap_err(), expected);
        assert_eq!(a.sub(&b).unwrap_err(), expected);
        assert_eq!(a.dot(&b).unwrap_err(), expected);
        assert_eq!(a.angle_to(&b).unwrap_err(), expected);
        assert_eq!(a.is_orthogonal_to(&b).unwrap_err(), expected);
        assert_eq!(a.is_parallel_to(&b).unwrap_err(), expected);
        assert_eq!(a.component_parallel_to(&b).unwrap_err(), expected);
    }
}
