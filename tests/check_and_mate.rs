use pretty_assertions::assert_eq;

use chess_rules::board::Board;
use chess_rules::coord::Coord;
use chess_rules::piece::{Piece, PieceRank, Player};
use chess_rules::rules::attacks::{find_attacker, is_attacked_by_opponent, king_in_check};
use chess_rules::rules::checkmate::{resolve, MateStatus};
use chess_rules::rules::moves::{evaluate, AutoQueen, Mode, Move};

fn c(row: i16, col: i16) -> Coord {
    Coord::new(row, col)
}

fn put(board: &mut Board, row: i16, col: i16, rank: PieceRank, owner: Player) {
    board.set(c(row, col), Some(Piece::new(rank, owner)));
}

#[test]
fn rook_checks_along_a_clear_file() {
    let mut board = Board::empty();
    put(&mut board, 7, 4, PieceRank::King, Player::Two);
    put(&mut board, 0, 4, PieceRank::Rook, Player::One);
    assert!(king_in_check(&board, Player::Two, 0));

    // Any piece strictly between them lifts the check.
    put(&mut board, 3, 4, PieceRank::Pawn, Player::One);
    assert!(!king_in_check(&board, Player::Two, 0));
}

#[test]
fn attacker_threshold_distinguishes_double_check() {
    let mut board = Board::empty();
    put(&mut board, 7, 4, PieceRank::King, Player::Two);
    put(&mut board, 7, 0, PieceRank::Rook, Player::One);
    put(&mut board, 5, 2, PieceRank::Bishop, Player::One);

    assert!(king_in_check(&board, Player::Two, 0));
    // Two simultaneous attackers: threshold 1 is exceeded, 2 is not.
    assert!(king_in_check(&board, Player::Two, 1));
    assert!(!king_in_check(&board, Player::Two, 2));
}

#[test]
fn find_attacker_returns_first_in_row_major_order() {
    let mut board = Board::empty();
    put(&mut board, 7, 4, PieceRank::King, Player::Two);
    put(&mut board, 0, 4, PieceRank::Rook, Player::One);
    put(&mut board, 7, 0, PieceRank::Rook, Player::One);

    assert_eq!(find_attacker(&board, Player::Two, c(7, 4)), Some(c(0, 4)));
}

#[test]
fn pawn_attacks_diagonally_not_straight_ahead() {
    let mut board = Board::empty();
    put(&mut board, 4, 4, PieceRank::Pawn, Player::One);
    put(&mut board, 5, 5, PieceRank::Rook, Player::Two);
    put(&mut board, 5, 4, PieceRank::Rook, Player::Two);

    assert!(is_attacked_by_opponent(&board, Player::Two, c(5, 5)));
    // Straight ahead is a push, not an attack, and pushes cannot capture.
    assert!(!is_attacked_by_opponent(&board, Player::Two, c(5, 4)));
}

/// Two kings and a queen: the classic boxed-in back-rank mate from the
/// spec's end-to-end property.
fn back_rank_position() -> Board {
    let mut board = Board::empty();
    put(&mut board, 7, 7, PieceRank::King, Player::Two);
    put(&mut board, 5, 6, PieceRank::King, Player::One);
    put(&mut board, 7, 0, PieceRank::Queen, Player::One);
    board
}

#[test]
fn back_rank_mate_resolves_to_mate() {
    let board = back_rank_position();
    assert!(king_in_check(&board, Player::Two, 0));
    assert_eq!(resolve(&board, Player::Two), MateStatus::Mate);
}

#[test]
fn defender_able_to_capture_the_queen_averts_mate() {
    let mut board = back_rank_position();
    put(&mut board, 3, 0, PieceRank::Rook, Player::Two);
    assert!(king_in_check(&board, Player::Two, 0));
    assert_eq!(resolve(&board, Player::Two), MateStatus::NotMate);
}

#[test]
fn mate_resolution_leaves_the_board_untouched() {
    let board = back_rank_position();
    let snapshot = board.clone();
    let _ = resolve(&board, Player::Two);
    assert_eq!(board, snapshot);
}

#[test]
fn interposition_averts_a_back_rank_mate() {
    // Rook gives check along row 7; the king is walled in by its own pawns.
    let mut board = Board::empty();
    put(&mut board, 7, 7, PieceRank::King, Player::Two);
    put(&mut board, 6, 6, PieceRank::Pawn, Player::Two);
    put(&mut board, 6, 7, PieceRank::Pawn, Player::Two);
    put(&mut board, 7, 0, PieceRank::Rook, Player::One);
    put(&mut board, 0, 0, PieceRank::King, Player::One);

    assert!(king_in_check(&board, Player::Two, 0));
    assert_eq!(resolve(&board, Player::Two), MateStatus::Mate);

    // A rook that can drop onto the checking line saves the king.
    put(&mut board, 5, 3, PieceRank::Rook, Player::Two);
    assert_eq!(resolve(&board, Player::Two), MateStatus::NotMate);
}

#[test]
fn double_check_mates_even_when_one_attacker_is_capturable() {
    // Rook on (7,0) and bishop on (5,2) both check the king on (7,4); the
    // knight and pawn cover the remaining escape squares. PlayerTwo's rook
    // could capture the checking rook, but under double check only a king
    // move can answer, and there is none.
    let mut board = Board::empty();
    put(&mut board, 7, 4, PieceRank::King, Player::Two);
    put(&mut board, 0, 0, PieceRank::Rook, Player::Two);
    put(&mut board, 7, 0, PieceRank::Rook, Player::One);
    put(&mut board, 5, 2, PieceRank::Bishop, Player::One);
    put(&mut board, 4, 3, PieceRank::Knight, Player::One);
    put(&mut board, 5, 4, PieceRank::Pawn, Player::One);
    put(&mut board, 0, 7, PieceRank::King, Player::One);

    assert!(king_in_check(&board, Player::Two, 1));
    assert_eq!(resolve(&board, Player::Two), MateStatus::Mate);

    // Remove the bishop and the same position is a single check the rook
    // capture resolves.
    board.set(c(5, 2), None);
    assert!(king_in_check(&board, Player::Two, 0));
    assert!(!king_in_check(&board, Player::Two, 1));
    assert_eq!(resolve(&board, Player::Two), MateStatus::NotMate);
}

#[test]
fn missing_king_is_reported_as_indeterminate() {
    let mut board = Board::empty();
    put(&mut board, 7, 0, PieceRank::Queen, Player::One);
    assert_eq!(resolve(&board, Player::Two), MateStatus::Indeterminate);
}

#[test]
fn fools_mate_end_to_end() {
    let mut board = Board::standard();
    let script = [
        Move::new(c(1, 5), c(2, 5), Player::One),
        Move::new(c(6, 4), c(4, 4), Player::Two),
        Move::new(c(1, 6), c(3, 6), Player::One),
        Move::new(c(7, 3), c(3, 7), Player::Two),
    ];
    for mv in script {
        assert_eq!(evaluate(&mut board, mv, Mode::Play, &mut AutoQueen), Ok(true));
    }

    assert!(king_in_check(&board, Player::One, 0));
    assert_eq!(resolve(&board, Player::One), MateStatus::Mate);
}
