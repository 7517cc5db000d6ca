//! Piece tests - transform choreography against a live board

use pythominos::core::{Board, Piece, PlacementError};
use pythominos::types::PieceId;

fn piece(raw: u8) -> Piece {
    Piece::new(PieceId::new(raw).unwrap()).unwrap()
}

fn occupied(board: &Board) -> usize {
    board.cells().iter().filter(|cell| cell.is_some()).count()
}

#[test]
fn test_spawn_shapes() {
    // Every piece spawns at its pattern coordinates, unplaced.
    let bar = piece(1);
    assert_eq!(bar.cells(), &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    assert!(!bar.is_placed());

    let plus = piece(12);
    assert_eq!(plus.cells(), &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
}

#[test]
fn test_move_then_rotate() {
    let board = Board::new(12, 10);
    let mut bar = piece(1);

    bar.try_move(&board, 0, 2).unwrap();
    bar.try_rotate(&board).unwrap();
    // The bar pivots about its third cell into row 2.
    assert_eq!(bar.cells(), &[(2, 4), (2, 3), (2, 2), (2, 1), (2, 0)]);
}

#[test]
fn test_rejected_transform_changes_nothing() {
    let mut board = Board::new(12, 10);
    let mut blocker = piece(12);
    blocker.try_move(&board, 0, 3).unwrap();
    blocker.place(&mut board).unwrap();

    let mut bar = piece(1);
    let before = *bar.cells();
    let grid_before = board.clone();

    assert_eq!(bar.try_move(&board, 0, -1), Err(PlacementError::OutOfBounds));
    assert_eq!(bar.try_move(&board, 0, 4), Err(PlacementError::Occupied));
    assert_eq!(bar.cells(), &before);
    assert_eq!(board, grid_before);
}

#[test]
fn test_four_pieces_tile_a_four_by_five_board() {
    // The opening grand chelem roster {L, Y, P, W} exactly covers the
    // 4-column board. All transforms happen before any placement, then the
    // four pieces lock in turn.
    let mut board = Board::new(4, 5);

    let mut w = piece(11);
    w.try_rotate(&board).unwrap();
    w.try_rotate(&board).unwrap();

    let mut y = piece(3);
    y.try_move(&board, 1, 0).unwrap();

    let mut l = piece(2);
    l.try_move(&board, 0, 1).unwrap();
    l.try_move(&board, 0, 1).unwrap();
    l.try_mirror(&board).unwrap();

    let mut p = piece(6);
    p.try_mirror(&board).unwrap();
    p.try_rotate(&board).unwrap();
    p.try_move(&board, 1, 0).unwrap();
    p.try_move(&board, 1, 0).unwrap();
    p.try_move(&board, 1, 0).unwrap();
    p.try_move(&board, 0, 1).unwrap();

    for (count, pc) in [&mut w, &mut y, &mut l, &mut p].into_iter().enumerate() {
        pc.place(&mut board).unwrap();
        assert_eq!(occupied(&board), (count + 1) * 5);
    }

    assert!(board.is_full());
    assert_eq!(
        board.to_rows(),
        vec![
            vec![11, 11, 2, 2],
            vec![3, 11, 11, 2],
            vec![3, 3, 11, 2],
            vec![3, 6, 6, 2],
            vec![3, 6, 6, 6],
        ]
    );
}

#[test]
fn test_removed_piece_keeps_its_coordinates() {
    let mut board = Board::new(12, 10);
    let mut p = piece(7);
    p.try_move(&board, 2, 3).unwrap();
    p.place(&mut board).unwrap();

    let placed_at = *p.cells();
    p.remove(&mut board);
    assert_eq!(p.cells(), &placed_at);
    assert_eq!(occupied(&board), 0);

    // And it can go straight back down.
    p.place(&mut board).unwrap();
    assert_eq!(occupied(&board), 5);
}
