//! Persistence tests - save files survive a full quit/reload cycle

use pythominos::core::Session;
use pythominos::persist::{load_game_file, save_game_file, SaveGame};
use pythominos::types::{EngineAction, GameMode, PieceId};

fn ids(raw: &[u8]) -> Vec<PieceId> {
    raw.iter().map(|&r| PieceId::new(r).unwrap()).collect()
}

#[test]
fn test_mid_run_save_restores_board_and_pieces() {
    let mut session = Session::grand_chelem(3, 6).unwrap();
    // Commit the first two pieces somewhere legal.
    session.apply(EngineAction::Place).unwrap();
    session.apply(EngineAction::SelectPiece(1)).unwrap();
    session.apply(EngineAction::Move(0, 2)).unwrap();
    session.apply(EngineAction::Place).unwrap();

    let restored = SaveGame::capture(&session).restore().unwrap();

    assert_eq!(restored.mode(), GameMode::GrandChelem);
    assert_eq!(restored.series(), 3);
    assert_eq!(restored.etape(), 6);
    assert_eq!(restored.roster(), session.roster());
    assert_eq!(restored.board().to_rows(), session.board().to_rows());
    for index in 0..session.piece_count() {
        let original = session.piece(index).unwrap();
        let reloaded = restored.piece(index).unwrap();
        assert_eq!(original.is_placed(), reloaded.is_placed());
        if original.is_placed() {
            let mut want = original.cells().to_vec();
            let mut got = reloaded.cells().to_vec();
            want.sort_unstable();
            got.sort_unstable();
            assert_eq!(want, got, "piece {}", original.id().get());
        }
    }
}

#[test]
fn test_restored_session_keeps_playing() {
    let mut session = Session::free_play(&ids(&[1, 2, 3])).unwrap();
    session.apply(EngineAction::Move(0, 9)).unwrap();
    session.apply(EngineAction::Place).unwrap();

    let mut restored = SaveGame::capture(&session).restore().unwrap();

    // The reloaded game accepts further actions against the same grid.
    restored.apply(EngineAction::SelectPiece(1)).unwrap();
    restored.apply(EngineAction::Move(2, 2)).unwrap();
    restored.apply(EngineAction::Place).unwrap();
    assert!(restored.piece(1).unwrap().is_placed());
    assert!(restored.board().contains_piece(PieceId::new(1).unwrap()));
    assert!(restored.board().contains_piece(PieceId::new(2).unwrap()));
}

#[test]
fn test_known_json_layout_loads() {
    // A file in the historical layout: free mode, the bar placed down the
    // left edge of a 3x5 board, one piece still in hand.
    let json = r#"{
        "mode_grand_chelem": false,
        "niveau_grand_chelem": 0,
        "pieces_selectionnees": [0, 4],
        "plateau": [
            [1, 0, 0],
            [1, 0, 0],
            [1, 0, 0],
            [1, 0, 0],
            [1, 0, 0]
        ],
        "etape": 2
    }"#;

    let save: SaveGame = serde_json::from_str(json).unwrap();
    let session = save.restore().unwrap();

    assert_eq!(session.mode(), GameMode::Free);
    assert_eq!(session.board().width(), 3);
    assert_eq!(session.board().height(), 5);
    let roster: Vec<u8> = session.roster().iter().map(|id| id.get()).collect();
    assert_eq!(roster, vec![1, 5]);
    assert!(session.piece(0).unwrap().is_placed());
    assert!(!session.piece(1).unwrap().is_placed());
}

#[test]
fn test_file_cycle_through_disk() {
    let mut session = Session::free_play(&ids(&[6, 7])).unwrap();
    session.apply(EngineAction::Move(3, 3)).unwrap();
    session.apply(EngineAction::Place).unwrap();

    let path = std::env::temp_dir().join("pythominos_cycle_test.json");
    save_game_file(&session, &path).unwrap();
    let restored = load_game_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(SaveGame::capture(&restored), SaveGame::capture(&session));
}

#[test]
fn test_corrupt_file_is_rejected() {
    let path = std::env::temp_dir().join("pythominos_corrupt_test.json");
    std::fs::write(&path, "{\"plateau\": oops").unwrap();
    assert!(load_game_file(&path).is_err());
    let _ = std::fs::remove_file(&path);
}
