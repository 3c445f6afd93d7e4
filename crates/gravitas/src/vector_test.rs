use approx::assert_relative_eq;

use crate::error::VectorError;
use crate::vector::Vector;

#[test]
fn test_zero_has_all_components_zero() {
    assert_eq!(Vector::<2>::zero().components(), [0.0, 0.0]);
    assert_eq!(Vector::<3>::zero().components(), [0.0, 0.0, 0.0]);
    assert_eq!(Vector::<4>::zero().components(), [0.0, 0.0, 0.0, 0.0]);
    assert_eq!(Vector::<3>::default(), Vector::zero());
}

#[test]
fn test_component_accessors() {
    let v2 = Vector::new([1.0, 2.0]);
    assert_eq!((v2.x(), v2.y()), (1.0, 2.0));

    let v3 = Vector::new([1.0, 2.0, 3.0]);
    assert_eq!((v3.x(), v3.y(), v3.z()), (1.0, 2.0, 3.0));

    let v4 = Vector::new([1.0, 2.0, 3.0, 4.0]);
    assert_eq!((v4.x(), v4.y(), v4.z(), v4.w()), (1.0, 2.0, 3.0, 4.0));
}

#[test]
fn test_dimension_constant() {
    assert_eq!(Vector::<2>::DIMENSION, 2);
    assert_eq!(Vector::<4>::DIMENSION, 4);
}

#[test]
fn test_scale_returns_new_vector() {
    let v = Vector::new([1.0, -2.0, 3.0]);
    let scaled = v.scale(2.0);

    assert_eq!(scaled, Vector::new([2.0, -4.0, 6.0]));
    // Receiver is untouched
    assert_eq!(v, Vector::new([1.0, -2.0, 3.0]));
    assert_eq!(v * 2.0, scaled);
}

#[test]
fn test_add_is_component_wise() {
    let a = Vector::new([1.0, 2.0]);
    let b = Vector::new([0.5, -4.0]);

    assert_eq!(a + b, Vector::new([1.5, -2.0]));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
}

#[test]
fn test_vector_to_points_from_self_to_other() {
    let from = Vector::new([1.0, 1.0]);
    let to = Vector::new([4.0, 5.0]);

    assert_eq!(from.vector_to(&to), Vector::new([3.0, 4.0]));
    assert_eq!(to.vector_to(&from), Vector::new([-3.0, -4.0]));
}

#[test]
fn test_distance_to() {
    let a = Vector::new([0.0, 0.0]);
    let b = Vector::new([3.0, 4.0]);

    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.distance_to(&a), 5.0);
}

#[test]
fn test_distance_uses_difference_of_components() {
    // A sum-of-components distance would report sqrt(8) here
    let p = Vector::new([1.0, 1.0]);
    assert_eq!(p.distance_to(&p), 0.0);
}

#[test]
fn test_magnitude() {
    assert_eq!(Vector::new([3.0, 4.0]).magnitude(), 5.0);
    assert_eq!(Vector::new([1.0, 1.0, 1.0, 1.0]).magnitude(), 2.0);
    assert_eq!(Vector::new([3.0, 4.0]).magnitude_squared(), 25.0);
}

#[test]
fn test_dot() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, -5.0, 6.0]);

    assert_eq!(a.dot(&b), 12.0);
}

#[test]
fn test_normalise_has_unit_magnitude() {
    for v in [
        Vector::new([3.0, 4.0, 0.0]),
        Vector::new([-1e-3, 2e-3, 5e-4]),
        Vector::new([1e6, -1e6, 42.0]),
    ] {
        assert_relative_eq!(v.normalise().magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_normalise_keeps_direction() {
    let n = Vector::new([0.0, -8.0]).normalise();
    assert_eq!(n, Vector::new([0.0, -1.0]));
}

#[test]
fn test_normalise_zero_is_not_finite() {
    let n = Vector::<3>::zero().normalise();
    assert!(!n.is_finite());
}

#[test]
fn test_try_normalise() {
    assert_eq!(
        Vector::<2>::zero().try_normalise(),
        Err(VectorError::ZeroMagnitude)
    );
    assert_eq!(
        Vector::new([0.0, 2.0]).try_normalise(),
        Ok(Vector::new([0.0, 1.0]))
    );
}

#[test]
fn test_try_from_slice() {
    let v = Vector::<3>::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
    assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
}

#[test]
fn test_try_from_slice_rejects_short_input() {
    let err = Vector::<3>::try_from(&[1.0, 2.0][..]).unwrap_err();
    assert_eq!(
        err,
        VectorError::DimensionMismatch {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_try_from_slice_does_not_truncate() {
    let err = Vector::<2>::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
    assert_eq!(
        err,
        VectorError::DimensionMismatch {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_component_out_of_range() {
    let v = Vector::new([1.0, 2.0]);

    assert_eq!(v.component(1), Ok(2.0));
    assert_eq!(
        v.component(2),
        Err(VectorError::InsufficientDimension {
            index: 2,
            dimension: 2
        })
    );
}

#[test]
fn test_error_messages() {
    let err = VectorError::DimensionMismatch {
        expected: 3,
        found: 2,
    };
    assert_eq!(
        err.to_string(),
        "dimension mismatch: expected 3 components, found 2"
    );
}

#[test]
fn test_sum_then_distance_equals_magnitude() {
    let a = Vector::new([1.5, -2.0, 0.25]);
    let b = Vector::new([-3.0, 0.5, 7.0]);

    assert_relative_eq!((a + b).distance_to(&a), b.magnitude(), epsilon = 1e-12);
}

#[test]
fn test_identity_scale() {
    let v = Vector::new([0.3, -1.7, 2.9, 4.1]);
    assert_eq!(v.scale(1.0).distance_to(&v), 0.0);
}

#[test]
fn test_displacement_consistency() {
    let a = Vector::new([2.0, -1.0, 0.5]);
    let b = Vector::new([-0.75, 3.0, 1.25]);

    assert_eq!(a.vector_to(&b), b + a.scale(-1.0));
    assert_eq!(a.vector_to(&b), b - a);
    assert_eq!(-a.vector_to(&b), b.vector_to(&a));
}

#[test]
fn test_display() {
    assert_eq!(Vector::new([1.0, 2.5]).to_string(), "(1, 2.5)");
}

#[test]
fn test_serializes_as_array() {
    let json = serde_json::to_string(&Vector::new([1.0, 2.0])).unwrap();
    assert_eq!(json, "[1.0,2.0]");

    let v: Vector<3> = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();
    assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
}

#[test]
fn test_deserialize_each_supported_dimension() {
    let v2: Vector<2> = serde_json::from_str("[1.0, 2.0]").unwrap();
    let v3: Vector<3> = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();
    let v4: Vector<4> = serde_json::from_str("[1.0, 2.0, 3.0, 4.0]").unwrap();

    assert_eq!(v2, Vector::new([1.0, 2.0]));
    assert_eq!(v3, Vector::new([1.0, 2.0, 3.0]));
    assert_eq!(v4, Vector::new([1.0, 2.0, 3.0, 4.0]));
}

#[test]
fn test_deserialize_rejects_wrong_length() {
    let long = serde_json::from_str::<Vector<2>>("[1.0, 2.0, 3.0]").unwrap_err();
    assert!(long.to_string().contains("dimension mismatch"), "{long}");

    let short = serde_json::from_str::<Vector<4>>("[1.0]").unwrap_err();
    assert!(short.to_string().contains("expected 4 components, found 1"), "{short}");
}
