use std::f32::consts::{FRAC_PI_2, PI};

use scene_ngin::{
    Matrix4, SquareMatrix, Vector3, Vector4,
    math::{
        identity, perspective_right_hand, rotation, rotation_around_x, rotation_around_y,
        rotation_around_z, scalar_multiply, scaling, translation, uniform_scaling,
    },
};

use crate::common::test_utils::{EPSILON, assert_mat4_near, assert_vec4_near};

mod common;

const ANGLES: [f32; 7] = [0.0, 0.3, -0.7, FRAC_PI_2, PI, 2.5, -4.0];

fn assert_affine(m: Matrix4<f32>) {
    assert_eq!([m.x.w, m.y.w, m.z.w, m.w.w], [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn identity_is_the_identity_matrix() {
    assert_eq!(identity(), Matrix4::identity());
}

#[test]
fn translation_moves_the_origin() {
    for &(tx, ty, tz) in &[(1.0, 2.0, 3.0), (-4.5, 0.0, 1e3), (0.25, -0.5, -7.0)] {
        let moved = translation(tx, ty, tz) * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(moved, Vector4::new(tx, ty, tz, 1.0));
    }
}

#[test]
fn translation_leaves_directions_alone() {
    let direction = Vector4::new(1.0, -2.0, 3.0, 0.0);
    assert_eq!(translation(5.0, 6.0, 7.0) * direction, direction);
}

#[test]
fn translation_offset_lives_in_fourth_column() {
    let m = translation(1.0, 2.0, 3.0);
    assert_eq!(m.w, Vector4::new(1.0, 2.0, 3.0, 1.0));
    assert_affine(m);
}

#[test]
fn scaling_is_diagonal() {
    let m = scaling(2.0, 3.0, 4.0);
    assert_eq!(m * Vector4::new(1.0, 1.0, 1.0, 1.0), Vector4::new(2.0, 3.0, 4.0, 1.0));
    assert_affine(m);
}

#[test]
fn uniform_scaling_matches_scaling() {
    for &s in &[0.0, 1.0, -2.0, 0.125, 1e4] {
        assert_eq!(uniform_scaling(s), scaling(s, s, s));
    }
}

#[test]
fn rotation_followed_by_its_inverse_is_identity() {
    let axes = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(-0.3, 2.0, 0.7),
    ];
    for axis in axes {
        for angle in ANGLES {
            let round_trip = rotation(angle, axis) * rotation(-angle, axis);
            assert_mat4_near(round_trip, identity(), EPSILON);
        }
    }
}

#[test]
fn axis_rotations_match_the_general_rotation() {
    for angle in ANGLES {
        assert_mat4_near(
            rotation_around_x(angle),
            rotation(angle, Vector3::new(1.0, 0.0, 0.0)),
            EPSILON,
        );
        assert_mat4_near(
            rotation_around_y(angle),
            rotation(angle, Vector3::new(0.0, 1.0, 0.0)),
            EPSILON,
        );
        assert_mat4_near(
            rotation_around_z(angle),
            rotation(angle, Vector3::new(0.0, 0.0, 1.0)),
            EPSILON,
        );
    }
}

#[test]
fn rotation_normalizes_its_axis() {
    for angle in ANGLES {
        assert_mat4_near(
            rotation(angle, Vector3::new(0.0, 0.0, 5.0)),
            rotation_around_z(angle),
            EPSILON,
        );
    }
}

#[test]
fn rotations_are_right_handed() {
    let y = Vector4::new(0.0, 1.0, 0.0, 0.0);
    let z = Vector4::new(0.0, 0.0, 1.0, 0.0);
    let x = Vector4::new(1.0, 0.0, 0.0, 0.0);

    assert_vec4_near(rotation_around_x(FRAC_PI_2) * y, z, EPSILON);
    assert_vec4_near(rotation_around_y(FRAC_PI_2) * z, x, EPSILON);
    assert_vec4_near(rotation_around_z(FRAC_PI_2) * x, y, EPSILON);
}

#[test]
fn rotations_are_affine() {
    assert_affine(rotation(1.0, Vector3::new(1.0, 2.0, 3.0)));
    assert_affine(rotation_around_x(1.0));
    assert_affine(rotation_around_y(1.0));
    assert_affine(rotation_around_z(1.0));
}

#[test]
fn zero_length_axis_gives_nan() {
    let m = rotation(0.5, Vector3::new(0.0, 0.0, 0.0));
    assert!(m.x.x.is_nan());
}

#[test]
fn perspective_matches_the_documented_layout() {
    let (fovy, aspect, near, far) = (1.2_f32, 1.5_f32, 0.5_f32, 50.0_f32);
    let m = perspective_right_hand(fovy, aspect, near, far);
    let ys = 1.0 / (fovy * 0.5).tan();
    let xs = ys / aspect;
    let zs = far / (near - far);

    assert_eq!(m.x, Vector4::new(xs, 0.0, 0.0, 0.0));
    assert_eq!(m.y, Vector4::new(0.0, ys, 0.0, 0.0));
    assert_eq!(m.z, Vector4::new(0.0, 0.0, zs, -1.0));
    assert_eq!(m.w, Vector4::new(0.0, 0.0, near * zs, 0.0));
}

#[test]
fn perspective_maps_near_plane_to_zero_depth() {
    let m = perspective_right_hand(FRAC_PI_2, 1.0, 1.0, 100.0);
    let zs = 100.0 / (1.0 - 100.0);

    let clip = m * Vector4::new(0.0, 0.0, -1.0, 1.0);
    assert_eq!(clip.w, 1.0);
    // -1 * zs from the third column plus near * zs from the fourth
    assert_eq!(clip.z, -zs + 1.0 * zs);
    assert_eq!(clip.z, 0.0);
}

#[test]
fn perspective_maps_far_plane_to_unit_depth() {
    let m = perspective_right_hand(FRAC_PI_2, 1.0, 1.0, 100.0);
    let clip = m * Vector4::new(0.0, 0.0, -100.0, 1.0);
    assert_eq!(clip.w, 100.0);
    assert!((clip.z / clip.w - 1.0).abs() < EPSILON);
}

#[test]
fn perspective_keeps_the_view_frustum_edges_on_the_clip_edges() {
    // fovy of 90 degrees: a point at 45 degrees up sits on the top clip plane
    let m = perspective_right_hand(FRAC_PI_2, 2.0, 0.1, 10.0);
    let clip = m * Vector4::new(0.0, 3.0, -3.0, 1.0);
    assert!((clip.y / clip.w - 1.0).abs() < EPSILON);

    // the horizontal extent is widened by the aspect ratio
    let clip = m * Vector4::new(6.0, 0.0, -3.0, 1.0);
    assert!((clip.x / clip.w - 1.0).abs() < EPSILON);
}

#[test]
fn scalar_multiply_scales_every_component() {
    let v = Vector4::new(1.0, -2.0, 3.5, 0.5);
    assert_eq!(scalar_multiply(v, 2.0), Vector4::new(2.0, -4.0, 7.0, 1.0));
    assert_eq!(scalar_multiply(v, 0.0), Vector4::new(0.0, 0.0, 0.0, 0.0));
}
