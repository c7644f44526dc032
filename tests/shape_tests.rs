//! Shape and spawn placement tests

use blockfall::core::{spawn_column, NextPiece, PieceGenerator, Randomizer, Shape};
use blockfall::types::PieceKind;

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    shape.cells().collect()
}

#[test]
fn test_every_piece_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(Shape::of(kind).cells().count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_t_rotation_sequence() {
    let t = Shape::of(PieceKind::T);
    // .#.
    // ###
    assert_eq!(cells(&t), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);

    // #.
    // ##
    // #.
    let r1 = t.rotated();
    assert_eq!((r1.width(), r1.height()), (2, 3));
    assert_eq!(cells(&r1), vec![(0, 0), (0, 1), (1, 1), (0, 2)]);

    // ###
    // .#.
    let r2 = r1.rotated();
    assert_eq!(cells(&r2), vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
}

#[test]
fn test_i_rotates_to_vertical() {
    let i = Shape::of(PieceKind::I).rotated();
    assert_eq!((i.width(), i.height()), (1, 4));
    assert_eq!(cells(&i), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let shape = Shape::of(kind);
        let back = shape.rotated().rotated().rotated().rotated();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Shape::from_rows(&[]).is_none());
    assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
    assert_eq!(Shape::from_rows(&[&[1, 1], &[1, 1]]), Some(Shape::of(PieceKind::O)));
}

#[test]
fn test_spawn_columns_are_centered() {
    assert_eq!(spawn_column(Shape::of(PieceKind::I).width()), 3);
    assert_eq!(spawn_column(Shape::of(PieceKind::O).width()), 4);
    assert_eq!(spawn_column(Shape::of(PieceKind::T).width()), 4);
}

#[test]
fn test_next_piece_carries_kind_color() {
    let next = NextPiece::new(PieceKind::S);
    assert_eq!(next.color, PieceKind::S.color());
    assert_eq!(next.shape, Shape::of(PieceKind::S));
}

#[test]
fn test_generator_is_deterministic_per_seed() {
    let draw = |seed| {
        let mut g = PieceGenerator::new(seed, Randomizer::Uniform);
        (0..32).map(|_| g.next_kind()).collect::<Vec<_>>()
    };
    assert_eq!(draw(99), draw(99));
    assert_ne!(draw(99), draw(100));
}

#[test]
fn test_seven_bag_deals_each_kind_once_per_bag() {
    let mut g = PieceGenerator::new(5, Randomizer::SevenBag);
    for _ in 0..3 {
        let mut bag: Vec<PieceKind> = (0..7).map(|_| g.next_kind()).collect();
        bag.sort_by_key(|k| k.as_str());
        let mut all = PieceKind::ALL.to_vec();
        all.sort_by_key(|k| k.as_str());
        assert_eq!(bag, all);
    }
}
