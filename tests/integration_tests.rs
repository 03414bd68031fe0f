//! End-to-end tests: engine commits and full planner-driven sessions

use lavender_harvest::core::{
    has_any_valid_move, Board, BoardEngine, EngineConfig, EngineError, Session, SessionAction,
};
use lavender_harvest::engine::{apply_plan, plan_chain, PlanError};
use lavender_harvest::types::{ChainTier, HarvestRating, Pos, Tag};

/// 8x8 board whose only matches are a vertical run of zeros at the bottom of
/// column 2 and a vertical run of ones at the bottom of column 6.
fn scripted_board() -> Board {
    let mut rows: Vec<Vec<u8>> = (0..8)
        .map(|r| (0..8).map(|c| ((r + 2 * c) % 4) as u8).collect())
        .collect();
    for row in 5..8 {
        rows[row][2] = 0;
        rows[row][6] = 1;
    }
    Board::from_rows(&rows).unwrap()
}

#[test]
fn test_commit_removes_compacts_and_refills() {
    let mut engine = BoardEngine::new(EngineConfig::default()).unwrap();
    engine.load_board(scripted_board()).unwrap();
    let before = engine.board().clone();

    let mut sel = engine.begin_selection(Pos::new(5, 2)).unwrap();
    engine.extend_selection(&mut sel, Pos::new(6, 2)).unwrap();
    engine.extend_selection(&mut sel, Pos::new(7, 2)).unwrap();

    let outcome = engine.commit_selection(&sel).unwrap();
    assert_eq!(
        outcome.removed,
        vec![Pos::new(5, 2), Pos::new(6, 2), Pos::new(7, 2)]
    );
    assert_eq!(outcome.score_delta, 45);
    assert_eq!(outcome.tier, ChainTier::Connections);
    // Column 6 still holds a match, so no reshuffle is needed.
    assert!(!outcome.reshuffled);
    assert_eq!(
        outcome.refilled,
        vec![Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)]
    );

    let board = engine.board();
    assert_eq!(&outcome.board, board);
    for row in 0..5 {
        assert_eq!(
            board.tag(Pos::new(row + 3, 2)),
            before.tag(Pos::new(row, 2)),
            "row {} should have fallen by three",
            row
        );
    }
    for row in 0..3 {
        assert!(board.tag(Pos::new(row, 2)).is_some());
    }
    for pos in board.positions().filter(|p| p.col != 2) {
        assert_eq!(board.tag(pos), before.tag(pos));
    }
    assert!(board.is_full());
    assert!(has_any_valid_move(board));
}

#[test]
fn test_commit_traced_cells_not_whole_region() {
    let mut engine = BoardEngine::new(EngineConfig::default()).unwrap();
    engine.load_board(scripted_board()).unwrap();

    // (6, 1) also holds a zero and joins the region, but it is not traced.
    assert_eq!(engine.cell_at(6, 1), Ok(Some(Tag(0))));
    let mut sel = engine.begin_selection(Pos::new(5, 2)).unwrap();
    engine.extend_selection(&mut sel, Pos::new(6, 2)).unwrap();
    engine.extend_selection(&mut sel, Pos::new(7, 2)).unwrap();
    engine.commit_selection(&sel).unwrap();

    assert_eq!(engine.cell_at(6, 1), Ok(Some(Tag(0))));
}

#[test]
fn test_session_actions_drive_a_harvest() {
    let mut session = Session::new(EngineConfig::default()).unwrap();
    session.engine_mut().load_board(scripted_board()).unwrap();
    session.start();

    assert_eq!(session.apply_action(SessionAction::Press(Pos::new(7, 6))), Ok(None));
    assert_eq!(session.apply_action(SessionAction::Drag(Pos::new(6, 6))), Ok(None));
    // A wrong-coloured cell is refused but the drag continues.
    assert_eq!(
        session.apply_action(SessionAction::Drag(Pos::new(6, 7))),
        Err(EngineError::TagMismatch)
    );
    assert_eq!(session.apply_action(SessionAction::Drag(Pos::new(5, 6))), Ok(None));

    let outcome = session
        .apply_action(SessionAction::Release)
        .unwrap()
        .expect("three traced cells should harvest");
    assert_eq!(outcome.removed.len(), 3);
    assert_eq!(session.score(), 45);
    assert_eq!(session.moves(), 1);
    assert!(session.selection().is_empty());
}

#[test]
fn test_planner_plays_full_sessions() {
    for seed in 1..16 {
        let config = EngineConfig {
            seed,
            ..EngineConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        session.start();

        let mut expected_score = 0;
        while session.playable() {
            let outcome = apply_plan(&mut session).unwrap();
            expected_score += outcome.score_delta;

            let board = session.engine().board();
            assert!(board.is_full(), "seed {}", seed);
            assert!(has_any_valid_move(board), "seed {}", seed);
            assert!(plan_chain(board).is_some());

            session.tick(1_500);
        }

        assert!(session.game_over());
        assert_eq!(session.moves(), 40);
        assert_eq!(session.score(), expected_score);
        assert!(session.score() >= 40 * 45);
        assert_eq!(session.rating(), HarvestRating::Excellent);
        assert_eq!(apply_plan(&mut session), Err(PlanError::NotPlayable));
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let play = || {
        let mut session = Session::new(EngineConfig::default()).unwrap();
        session.start();
        let mut trace = Vec::new();
        for _ in 0..20 {
            let outcome = apply_plan(&mut session).unwrap();
            trace.push((outcome.removed, outcome.score_delta));
        }
        (trace, session.engine().board().clone())
    };
    assert_eq!(play(), play());
}
