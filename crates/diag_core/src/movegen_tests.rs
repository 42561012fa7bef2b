use super::*;

fn black(kind: PieceKind) -> PieceCode {
    PieceCode::of(kind, Color::Black)
}

fn white(kind: PieceKind) -> PieceCode {
    PieceCode::of(kind, Color::White)
}

fn lone(file: u8, rank: u8, code: PieceCode) -> Board {
    let mut board = Board::empty();
    board.set(file, rank, code);
    board
}

fn s(file: u8, rank: u8) -> u8 {
    rank * 8 + file
}

#[test]
fn test_lone_rook_covers_rank_and_file() {
    let board = lone(3, 4, black(PieceKind::Rook));
    let mask = legal_destinations(&board, 3, 4);
    assert_eq!(mask.count(), 14);
    for to in mask.destinations() {
        assert!(file_of(to) == 3 || rank_of(to) == 4, "unexpected square {to}");
    }
}

#[test]
fn test_rook_stops_at_blockers() {
    let mut board = lone(0, 0, white(PieceKind::Rook));
    board.set(3, 0, black(PieceKind::Knight));
    board.set(0, 2, white(PieceKind::Pawn));

    let mask = legal_destinations(&board, 0, 0);
    // (1,0) (2,0) plus the capture on (3,0); (0,1) before the own pawn
    assert_eq!(mask.destinations(), vec![s(1, 0), s(2, 0), s(3, 0), s(0, 1)]);
    assert_eq!(mask.get(3, 0), -2);
}

#[test]
fn test_bishop_rays() {
    let board = lone(0, 0, black(PieceKind::Bishop));
    assert_eq!(legal_destinations(&board, 0, 0).count(), 7);

    let board = lone(3, 3, black(PieceKind::Bishop));
    let mask = legal_destinations(&board, 3, 3);
    assert_eq!(mask.count(), 13);
    assert!(mask.contains(s(0, 0)));
    assert!(mask.contains(s(7, 7)));
    assert!(mask.contains(s(0, 6)));
    assert!(mask.contains(s(6, 0)));
    assert!(!mask.contains(s(3, 4)));
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let board = lone(3, 3, white(PieceKind::Queen));
    let mask = legal_destinations(&board, 3, 3);
    assert_eq!(mask.count(), 27);
    // Every marked cell carries the queen's own code, never a doubled value.
    for row in mask.rows() {
        for &cell in row {
            assert!(cell == 0 || cell == -5);
        }
    }
}

#[test]
fn test_knight_offsets() {
    let board = lone(0, 0, black(PieceKind::Knight));
    assert_eq!(
        legal_destinations(&board, 0, 0).destinations(),
        vec![s(2, 1), s(1, 2)]
    );

    let mut board = lone(3, 3, black(PieceKind::Knight));
    assert_eq!(legal_destinations(&board, 3, 3).count(), 8);

    board.set(5, 4, black(PieceKind::Pawn));
    board.set(1, 2, white(PieceKind::Pawn));
    let mask = legal_destinations(&board, 3, 3);
    assert_eq!(mask.count(), 7);
    assert!(!mask.contains(s(5, 4)));
    assert!(mask.contains(s(1, 2)));
}

#[test]
fn test_king_never_moves() {
    let board = lone(4, 4, white(PieceKind::King));
    assert!(legal_destinations(&board, 4, 4).is_empty());
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::starting();
    assert!(legal_destinations(&board, 0, 0).is_empty());
}

#[test]
#[should_panic]
fn test_off_board_square_panics() {
    let board = Board::starting();
    legal_destinations(&board, 8, 0);
}

#[test]
fn test_pawn_direction_convention() {
    // Black (positive) pawns go up the ranks and step toward file 0.
    let board = lone(3, 3, black(PieceKind::Pawn));
    assert_eq!(
        legal_destinations(&board, 3, 3).destinations(),
        vec![s(2, 3), s(3, 4)]
    );

    // White (negative) pawns go down the ranks and step toward file 7.
    let board = lone(3, 3, white(PieceKind::Pawn));
    assert_eq!(
        legal_destinations(&board, 3, 3).destinations(),
        vec![s(3, 2), s(4, 3)]
    );
}

#[test]
fn test_pawn_captures_three_diagonals() {
    let mut board = lone(3, 3, black(PieceKind::Pawn));
    for (f, r) in [(2, 4), (2, 2), (4, 4), (4, 2)] {
        board.set(f, r, white(PieceKind::Knight));
    }
    let mask = legal_destinations(&board, 3, 3);
    assert!(mask.contains(s(2, 4)));
    assert!(mask.contains(s(2, 2)));
    assert!(mask.contains(s(4, 4)));
    assert!(!mask.contains(s(4, 2)));
    // forward and sideways pushes are still open
    assert_eq!(mask.count(), 5);
}

#[test]
fn test_pawn_does_not_capture_own_color_or_push_into_pieces() {
    let mut board = lone(3, 3, black(PieceKind::Pawn));
    board.set(2, 4, black(PieceKind::Rook));
    board.set(3, 4, white(PieceKind::Rook));
    board.set(2, 3, white(PieceKind::Rook));
    assert!(legal_destinations(&board, 3, 3).is_empty());
}

#[test]
fn test_pawn_double_steps_from_home() {
    let board = Board::starting();
    // black pawn on its home square (3, 0)
    assert_eq!(
        legal_destinations(&board, 3, 0).destinations(),
        vec![s(1, 0), s(2, 0), s(3, 1), s(3, 2)]
    );
    // white pawn on its home square (0, 3)
    assert_eq!(
        legal_destinations(&board, 0, 3).destinations(),
        vec![s(0, 1), s(0, 2), s(1, 3), s(2, 3)]
    );
}

#[test]
fn test_pawn_double_step_requires_single_step() {
    let mut board = lone(3, 0, black(PieceKind::Pawn));
    board.set(3, 2, white(PieceKind::Knight));
    let mask = legal_destinations(&board, 3, 0);
    assert!(mask.contains(s(3, 1)));
    assert!(!mask.contains(s(3, 2)));

    let mut board = lone(3, 0, black(PieceKind::Pawn));
    board.set(3, 1, black(PieceKind::Knight));
    let mask = legal_destinations(&board, 3, 0);
    assert!(!mask.contains(s(3, 1)));
    assert!(!mask.contains(s(3, 2)));
}

#[test]
fn test_pawn_sideways_double_step_requires_single_step() {
    // black pawn on (3, 0) steps sideways toward file 2, then file 1
    let mut board = lone(3, 0, black(PieceKind::Pawn));
    board.set(2, 0, black(PieceKind::Knight));
    let mask = legal_destinations(&board, 3, 0);
    assert!(!mask.contains(s(2, 0)));
    assert!(!mask.contains(s(1, 0)));
    assert!(mask.contains(s(3, 2)));

    let mut board = lone(3, 0, black(PieceKind::Pawn));
    board.set(1, 0, white(PieceKind::Rook));
    let mask = legal_destinations(&board, 3, 0);
    assert!(mask.contains(s(2, 0)));
    assert!(!mask.contains(s(1, 0)));

    // white pawn on (0, 3) steps sideways toward file 1, then file 2
    let mut board = lone(0, 3, white(PieceKind::Pawn));
    board.set(1, 3, white(PieceKind::Bishop));
    let mask = legal_destinations(&board, 0, 3);
    assert!(!mask.contains(s(1, 3)));
    assert!(!mask.contains(s(2, 3)));
}

#[test]
fn test_pawn_off_home_square_single_steps_only() {
    let board = lone(3, 1, black(PieceKind::Pawn));
    assert_eq!(legal_destinations(&board, 3, 1).count(), 2);
}

#[test]
fn test_crowded_start_pieces_are_stuck() {
    let board = Board::starting();
    // black queen and knights are boxed in by their own pieces
    assert!(legal_destinations(&board, 6, 1).is_empty());
    assert!(legal_destinations(&board, 6, 0).is_empty());
    assert!(legal_destinations(&board, 7, 1).is_empty());
}

#[test]
fn test_legal_destinations_is_idempotent() {
    let board = Board::starting();
    for from in 0..64u8 {
        assert_eq!(
            legal_destinations_from(&board, from),
            legal_destinations_from(&board, from)
        );
    }
}

#[test]
fn test_all_legal_moves_only_for_color() {
    let board = Board::starting();
    let moves = all_legal_moves(&board, Color::Black);
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(board.piece_at(mv.from).belongs_to(Color::Black));
        assert!(legal_destinations_from(&board, mv.from).contains(mv.to));
    }
    assert!(all_legal_moves(&Board::empty(), Color::White).is_empty());
}
