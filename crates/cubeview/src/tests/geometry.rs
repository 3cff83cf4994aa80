use std::collections::HashMap;

use cubemath::{Float, Matrix3, Vector3, assert_approx_eq};
use cubepuzzle::LogicalFace;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn turning(cube: &mut RubikCube, f: u8, depth: usize, angle: Float) {
    let slice = Slice::new(face(f), depth, true).canonicalize(cube.size());
    cube.set_partial_turn(Some(PartialTurn { slice, angle }));
}

/// Returns how many times each `(face, element)` of the cube state is drawn.
fn sticker_coverage(geometry: &Geometry) -> HashMap<(Face, usize), usize> {
    let mut seen = HashMap::new();
    for sub in SubFace::all() {
        for e in 0..geometry.element_count(sub) {
            if let Some(sticker) = geometry.sticker(sub, e) {
                *seen.entry(sticker).or_default() += 1;
            }
        }
    }
    seen
}

#[test]
fn test_default_orientation() {
    let cube = cube(3);
    assert_approx_eq!(cube.matrix().determinant(), 1.0);
    let logical = cube.logical_faces();
    assert_eq!(
        logical,
        LogicalFaces {
            front: face(0),
            left: face(5),
            up: face(3),
        },
    );
    assert_eq!(cube.logical_face(LogicalFace::Back), face(1));
    assert_eq!(cube.logical_face(LogicalFace::Right), face(4));
    assert_eq!(cube.logical_face(LogicalFace::Down), face(2));

    let visible: Vec<Face> = Face::ALL
        .into_iter()
        .filter(|&f| cube.z_order(SubFace::new(Block::Far, f)).is_some())
        .collect();
    assert_eq!(visible, vec![face(0), face(3), face(4)]);
}

#[test]
fn test_identity_orientation_normals() {
    let mut cube = cube(2);
    cube.set_matrix(Matrix3::IDENT);
    for f in Face::ALL {
        assert_approx_eq!(cube.face_normal(SubFace::new(Block::Far, f)), f.normal());
        // Blocks other than the far block are empty when nothing turns.
        for block in [Block::Turning, Block::Near] {
            let sub = SubFace::new(block, f);
            assert_eq!(cube.element_count(sub), 0);
            assert_eq!(cube.z_order(sub), None);
        }
    }
}

#[test]
fn test_orientation_stays_orthonormal() {
    let mut cube = cube(3);
    for i in 0..2000 {
        let t = i as Float;
        cube.rotate_view((t * 0.37).sin() * 0.2, (t * 0.11).cos() * 0.2);
        cube.rotate_view_smart((t * 0.53).cos() * 0.1, (t * 0.29).sin() * 0.1);
    }
    let m = *cube.matrix();
    assert_approx_eq!(m.determinant(), 1.0);
    let should_be_ident = m * m.transpose();
    assert!(cubemath::approx::abs_diff_eq!(should_be_ident, Matrix3::IDENT, epsilon = 1e-6));
}

#[test]
fn test_smart_rotation_axes() {
    let mut cube = cube(3);
    let down = cube.logical_face(LogicalFace::Down);
    let before = cube.geometry().face_normal(down);
    cube.rotate_view_smart(0.2, 0.05);
    assert_approx_eq!(cube.geometry().face_normal(down), before);

    let left = cube.logical_face(LogicalFace::Left);
    let before = cube.geometry().face_normal(left);
    cube.rotate_view_smart(0.01, -0.3);
    assert_approx_eq!(cube.geometry().face_normal(left), before);

    let m = *cube.matrix();
    cube.rotate_view_smart(0.0, 0.0);
    assert_eq!(*cube.matrix(), m);
}

#[test]
fn test_pick_element_centers() {
    for size in 1..=5 {
        let cube = cube(size);
        let geometry = cube.geometry();
        for f in Face::ALL {
            let sub = SubFace::new(Block::Far, f);
            if geometry.z_order(sub).is_none() {
                continue;
            }
            for e in 0..size * size {
                let center = geometry.element_vertex(sub, e, VertexRef::Center);
                let pick = cube.pick(center.x, center.y).unwrap();
                assert_eq!(pick.face, f);
                assert_eq!(pick.element_index(size), e);
            }
        }
    }
}

#[test]
fn test_pick_front_center() {
    let cube = cube(3);
    let front = cube.logical_face(LogicalFace::Front);
    let center = cube.element_vertex(SubFace::new(Block::Far, front), 4, VertexRef::Center);
    let expected = Pick {
        face: front,
        row: 1,
        col: 1,
    };
    assert_eq!(cube.pick(center.x, center.y), Some(expected));

    let viewport = Viewport::new(400.0, 300.0, 1.0);
    let pixel = viewport.project(center);
    assert_eq!(cube.pick_pixel(pixel.x, pixel.y, &viewport), Some(expected));
}

#[test]
fn test_pick_outside_cube() {
    let cube = cube(3);
    assert_eq!(cube.pick(1.9, 1.9), None);
    assert_eq!(cube.pick(-2.0, 0.0), None);
}

#[test]
fn test_hidden_near_block_for_outer_slice() {
    let mut cube = cube(3);
    turning(&mut cube, 0, 0, 0.3);
    for f in Face::ALL {
        let sub = SubFace::new(Block::Near, f);
        assert_eq!(cube.element_count(sub), 0);
        assert_eq!(cube.face_normal(sub), Vector3::new(0.0, 0.0, -1.0));
    }
}

#[test]
fn test_turning_normals_rotate_rigidly() {
    let mut cube = cube(4);
    cube.set_matrix(Matrix3::IDENT);
    let angle = 0.7;
    turning(&mut cube, 2, 1, angle);
    let rotation = Matrix3::from_axis_angle(face(2).normal(), angle);
    for f in Face::ALL {
        let sub = SubFace::new(Block::Turning, f);
        assert_approx_eq!(cube.face_normal(sub), rotation * f.normal());
    }
    // Untouched blocks keep their orientation.
    for f in Face::ALL {
        let sub = SubFace::new(Block::Near, f);
        assert_approx_eq!(cube.face_normal(sub), f.normal());
    }
    let n = |f: u8| cube.face_normal(SubFace::new(Block::Turning, face(f)));
    for a in [0, 1, 4, 5] {
        for b in [0, 1, 4, 5] {
            let expected = face(a).normal().dot(face(b).normal());
            assert_approx_eq!(n(a).dot(n(b)), expected);
        }
    }
}

#[test]
fn test_element_counts_mid_turn() {
    let size = 5;
    let mut cube = cube(size);
    turning(&mut cube, 4, 1, 0.2);
    let count = |block, f| cube.element_count(SubFace::new(block, face(f)));
    assert_eq!(count(Block::Near, 4), 25);
    assert_eq!(count(Block::Turning, 4), 1);
    assert_eq!(count(Block::Far, 4), 1);
    assert_eq!(count(Block::Far, 5), 25);
    assert_eq!(count(Block::Turning, 5), 1);
    assert_eq!(count(Block::Near, 5), 1);
    assert_eq!(count(Block::Near, 0), 5);
    assert_eq!(count(Block::Turning, 0), 5);
    assert_eq!(count(Block::Far, 0), 15);
}

#[test]
fn test_z_order_flips_with_turning_face() {
    let mut cube = cube(3);
    // Face 0 points toward the viewer in the default orientation.
    turning(&mut cube, 0, 0, 0.1);
    let visible = cube.geometry().visible_sub_faces();
    let far = visible.iter().position(|s| s.block == Block::Far);
    let turning_block = visible.iter().position(|s| s.block == Block::Turning);
    assert!(far < turning_block);

    // Face 1 points away, so its blocks are drawn nearest-last.
    turning(&mut cube, 1, 0, 0.1);
    let sub = SubFace::new(Block::Far, face(4));
    assert_eq!(cube.z_order(sub), Some(-4));
}

proptest! {
    #[test]
    fn proptest_every_sticker_drawn_once(
        size in 1_usize..=5,
        f in 0..6_u8,
        depth in any::<usize>(),
        angle in -1.5..1.5_f64,
    ) {
        let mut cube = cube(size);
        turning(&mut cube, f, depth % size, angle);
        let seen = sticker_coverage(cube.geometry());
        assert_eq!(seen.len(), 6 * size * size);
        assert!(seen.values().all(|&count| count == 1));
    }

    #[test]
    fn proptest_zero_angle_matches_rest(
        size in 1_usize..=5,
        f in 0..6_u8,
        depth in any::<usize>(),
    ) {
        let mut cube = cube(size);
        let rest = cube.geometry().clone();
        turning(&mut cube, f, depth % size, 0.0);
        let geometry = cube.geometry();
        for sub in SubFace::all() {
            for e in 0..geometry.element_count(sub) {
                let Some((face, element)) = geometry.sticker(sub, e) else {
                    continue;
                };
                let rest_sub = SubFace::new(Block::Far, face);
                for v in VertexRef::POLYGON.into_iter().chain([VertexRef::Center]) {
                    assert_approx_eq!(
                        geometry.element_vertex(sub, e, v),
                        rest.element_vertex(rest_sub, element, v),
                    );
                }
            }
        }
    }
}

#[test]
fn test_frame() {
    let mut cube = cube(3);
    let viewport = cube.viewport(400.0, 400.0);
    assert_eq!(viewport.scale(), 100.0);

    let frame = cube.frame(&viewport);
    assert_eq!(frame.facets.len(), 27);
    assert_eq!(frame.background.to_string(), "#000000");
    assert_eq!(frame.line_width, 2.0);
    for facet in &frame.facets {
        let FacetKind::Sticker { face, color, .. } = facet.kind else {
            panic!("unexpected inner surface at rest");
        };
        assert_eq!(color, cubepuzzle::Color::from(face));
        let Fill::RadialGradient { radius, inner, outer, .. } = facet.fill else {
            panic!("expected shiny stickers");
        };
        assert_approx_eq!(radius, 100.0 / 3.0 / 0.25);
        assert_eq!(inner, cube.prefs().style.face_color(color));
        assert_eq!(outer, cubeprefs::Rgb::BLACK);
    }

    let mut prefs = cube.prefs().clone();
    prefs.style.shininess = 0.0;
    cube.set_preferences(prefs).unwrap();
    turning(&mut cube, 0, 1, 0.3);
    let frame = cube.frame(&viewport);
    assert!(frame.facets.iter().all(|f| matches!(f.fill, Fill::Flat(_))));
    let inner = frame
        .facets
        .iter()
        .filter(|f| f.kind == FacetKind::InnerSurface)
        .collect::<Vec<_>>();
    assert!(!inner.is_empty());
    let inner_color = cube.prefs().style.inner_color;
    assert!(inner.iter().all(|f| f.fill == Fill::Flat(inner_color)));
}

#[test]
fn test_element_corners_follow_grid_axes() {
    let cube = cube(3);
    let f = face(0);
    let sub = SubFace::new(Block::Far, f);
    let corner = |v| cube.element_vertex(sub, 4, VertexRef::Corner(v));
    let left = cube.geometry().face_normal(f.left());
    let up = cube.geometry().face_normal(f.up());

    assert_approx_eq!(corner(1) - corner(0), up * (2.0 / 3.0));
    assert_approx_eq!(corner(2) - corner(0), left * (2.0 / 3.0));
    assert_approx_eq!(corner(3) - corner(0), (left + up) * (2.0 / 3.0));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "corner index 4 out of range")]
fn test_corner_index_out_of_range() {
    let cube = cube(3);
    cube.element_vertex(SubFace::new(Block::Far, face(0)), 0, VertexRef::Corner(4));
}
