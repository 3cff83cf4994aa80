use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_opposite_faces() {
    for f in Face::ALL {
        assert_eq!(f, f.opposite().opposite());
        assert_ne!(f, f.opposite());
        cubemath::assert_approx_eq!(f.normal(), -f.opposite().normal());
    }
}

#[test]
fn test_neighbors_are_perpendicular() {
    for f in Face::ALL {
        let neighbors = f.neighbors();
        for nb in neighbors {
            assert_eq!(f.normal().dot(nb.normal()), 0.0);
            assert!(nb.is_adjacent_to(f));
            assert!(!neighbors.contains(&f.opposite()));
        }
        // Consecutive neighbors share an edge; alternate ones are opposite.
        for i in 0..4 {
            assert_eq!(neighbors[i].opposite(), neighbors[(i + 2) % 4]);
            assert_eq!(f.next_neighbor(neighbors[i]), Some(neighbors[(i + 1) % 4]));
        }
    }
}

#[test]
fn test_cyclic_position() {
    assert_eq!(face(0).neighbors(), [face(4), face(2), face(5), face(3)]);
    assert_eq!(face(0).cyclic_position(face(5)), Some(2));
    assert_eq!(face(0).cyclic_position(face(1)), None);
    assert_eq!(face(0).next_neighbor(face(0)), None);
    assert_eq!(face(0).left(), face(5));
    assert_eq!(face(0).up(), face(2));
}

#[test]
fn test_face_out_of_range() {
    assert_eq!(Face::new(6), Err(CubeError::FaceOutOfRange(6)));
}

#[test]
fn test_parse_face_refs() {
    assert_eq!("3".parse::<FaceRef>(), Ok(FaceRef::Absolute(face(3))));
    assert_eq!("f".parse::<FaceRef>(), Ok(FaceRef::Logical(LogicalFace::Front)));
    assert_eq!("D".parse::<FaceRef>(), Ok(FaceRef::Logical(LogicalFace::Down)));
    assert_eq!("right".parse::<FaceRef>(), Ok(FaceRef::Logical(LogicalFace::Right)));
    assert_eq!("9".parse::<FaceRef>(), Err(CubeError::FaceOutOfRange(9)));
    assert_eq!(
        "z".parse::<FaceRef>(),
        Err(CubeError::UnknownFace("z".to_owned())),
    );
    assert_eq!(LogicalFace::Up.to_string(), "up");
    assert_eq!(LogicalFace::Left.opposite(), LogicalFace::Right);
}

#[test]
fn test_slice_canonicalization() {
    // Odd sizes keep the middle slice on the requested face.
    assert_eq!(slice(0, 1, true).canonicalize(3), slice(0, 1, true));
    assert_eq!(slice(0, 2, true).canonicalize(3), slice(1, 0, false));
    assert_eq!(slice(2, 2, false).canonicalize(4), slice(3, 1, true));
    assert_eq!(slice(2, 1, false).canonicalize(4), slice(2, 1, false));
    assert_eq!(slice(4, 0, true).canonicalize(1), slice(4, 0, true));
}

#[test]
fn test_slice_resolution() {
    let req = SliceRequest::new(LogicalFace::Front, 2, true);
    assert_eq!(req.resolve(3, |_| face(4)), Ok(slice(5, 0, false)));

    let req = SliceRequest::new(face(1), 3, true);
    assert_eq!(
        req.resolve(3, |_| unreachable!()),
        Err(CubeError::DepthOutOfRange { depth: 3, size: 3 }),
    );
}
