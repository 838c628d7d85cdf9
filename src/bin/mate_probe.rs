//! Runs the check/mate queries against a handful of named positions and
//! prints the verdicts. Non-interactive; mostly a smoke harness for the
//! engine.

use chess_rules::board::{Board, SavedGame};
use chess_rules::coord::Coord;
use chess_rules::piece::{Piece, PieceRank, Player};
use chess_rules::rules::attacks::king_in_check;
use chess_rules::rules::checkmate::{resolve, MateStatus};
use chess_rules::rules::moves::{evaluate, AutoQueen, Mode, Move};

const SCENARIOS: [&str; 3] = ["fools-mate", "back-rank", "back-rank-defended"];

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let (name, dump_json) = match args.len() {
        2 => (args[1].as_str(), false),
        3 if args[2] == "--json" => (args[1].as_str(), true),
        _ => {
            eprintln!(
                "Usage: mate_probe <scenario> [--json]\n\nAvailable scenarios:\n  - {}",
                SCENARIOS.join("\n  - ")
            );
            std::process::exit(2);
        }
    };

    let Some((board, defender)) = scenario(name) else {
        eprintln!(
            "Unknown scenario: {name}\n\nAvailable scenarios:\n  - {}",
            SCENARIOS.join("\n  - ")
        );
        std::process::exit(2);
    };

    print_board(&board);

    let in_check = king_in_check(&board, defender, 0);
    println!("defender: {defender:?}");
    println!("in check: {in_check}");
    if in_check {
        let status = resolve(&board, defender);
        println!("mate status: {status:?}");
        if status == MateStatus::Indeterminate {
            eprintln!("position is malformed; aborting");
            std::process::exit(1);
        }
    }

    if dump_json {
        let saved = SavedGame {
            turn: defender,
            board,
        };
        match serde_json::to_string_pretty(&saved) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize position: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Builds the named position and says whose king to examine.
fn scenario(name: &str) -> Option<(Board, Player)> {
    match name {
        "fools-mate" => Some((fools_mate(), Player::One)),
        "back-rank" => {
            let mut board = Board::empty();
            board.set(Coord::new(7, 7), Some(Piece::new(PieceRank::King, Player::Two)));
            board.set(Coord::new(5, 6), Some(Piece::new(PieceRank::King, Player::One)));
            board.set(Coord::new(7, 0), Some(Piece::new(PieceRank::Queen, Player::One)));
            Some((board, Player::Two))
        }
        "back-rank-defended" => {
            let (mut board, defender) = scenario("back-rank")?;
            board.set(Coord::new(3, 0), Some(Piece::new(PieceRank::Rook, Player::Two)));
            Some((board, defender))
        }
        _ => None,
    }
}

/// The quickest mate in chess, played out move by move from the standard
/// setup. PlayerOne's weakened king side loses to the queen on move two.
fn fools_mate() -> Board {
    let mut board = Board::standard();
    let script = [
        Move::new(Coord::new(1, 5), Coord::new(2, 5), Player::One),
        Move::new(Coord::new(6, 4), Coord::new(4, 4), Player::Two),
        Move::new(Coord::new(1, 6), Coord::new(3, 6), Player::One),
        Move::new(Coord::new(7, 3), Coord::new(3, 7), Player::Two),
    ];
    for mv in script {
        if let Err(e) = evaluate(&mut board, mv, Mode::Play, &mut AutoQueen) {
            eprintln!("Scripted move {mv:?} rejected: {e}");
            std::process::exit(1);
        }
    }
    board
}

fn print_board(board: &Board) {
    for row in (0..8).rev() {
        let mut line = format!("{} ", row);
        for col in 0..8 {
            match board.get(Coord::new(row, col)) {
                Some(piece) => {
                    let letter = match piece.rank {
                        PieceRank::Pawn => 'p',
                        PieceRank::Rook => 'R',
                        PieceRank::Knight => 'N',
                        PieceRank::Bishop => 'B',
                        PieceRank::Queen => 'Q',
                        PieceRank::King => 'K',
                    };
                    let owner = match piece.owner {
                        Player::One => '1',
                        Player::Two => '2',
                    };
                    line.push_str(&format!(" {letter}{owner}"));
                }
                None => line.push_str(" .."),
            }
        }
        println!("{line}");
    }
    println!("    0  1  2  3  4  5  6  7");
}
