use arrayvec::ArrayVec;
use log::debug;

use crate::core::region::all_matches;
use crate::core::{Board, BoardGenerator, CommitOutcome, EngineError, RandomSource, Session};
use crate::types::{Pos, MIN_MATCH_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    NotPlayable,
    NoMove,
    Rejected(EngineError),
}

impl PlanError {
    pub fn code(self) -> &'static str {
        match self {
            PlanError::NotPlayable => "not_playable",
            PlanError::NoMove => "no_move",
            PlanError::Rejected(err) => err.code(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlanError::NotPlayable => "game is not playable",
            PlanError::NoMove => "board has no traceable chain",
            PlanError::Rejected(_) => "session rejected the planned chain",
        }
    }
}

/// Simple path through `region` (a connected same-tag match) that visits as
/// many cells as the greedy walk reaches. Returns an empty path for regions
/// shorter than three cells.
pub fn trace_path(board: &Board, region: &[Pos]) -> Vec<Pos> {
    if region.len() < MIN_MATCH_LEN {
        return Vec::new();
    }

    let size = board.size();
    let mut member = vec![false; size * size];
    for p in region {
        member[p.row * size + p.col] = true;
    }
    let in_region = |p: &Pos| member[p.row * size + p.col];

    let region_neighbors = |p: Pos| -> ArrayVec<Pos, 4> {
        board.neighbors(p).into_iter().filter(|n| in_region(n)).collect()
    };

    // Any connected region of three or more has a cell with two region
    // neighbours; it becomes the middle of the opening three.
    let Some((pivot, around)) = region
        .iter()
        .map(|&p| (p, region_neighbors(p)))
        .find(|(_, ns)| ns.len() >= 2)
    else {
        return Vec::new();
    };

    let mut used = vec![false; size * size];
    let mut path = vec![around[0], pivot, around[1]];
    for p in &path {
        used[p.row * size + p.col] = true;
    }

    // Grow the tail, then the head, preferring the neighbour with the fewest
    // onward options.
    for _ in 0..2 {
        while let Some(&tail) = path.last() {
            let next = region_neighbors(tail)
                .into_iter()
                .filter(|n| !used[n.row * size + n.col])
                .min_by_key(|&n| {
                    region_neighbors(n)
                        .iter()
                        .filter(|m| !used[m.row * size + m.col])
                        .count()
                });
            match next {
                Some(n) => {
                    used[n.row * size + n.col] = true;
                    path.push(n);
                }
                None => break,
            }
        }
        path.reverse();
    }

    path
}

/// Longest traceable chain on `board`, if any match exists.
pub fn plan_chain(board: &Board) -> Option<Vec<Pos>> {
    all_matches(board)
        .iter()
        .map(|region| trace_path(board, region))
        .filter(|path| path.len() >= MIN_MATCH_LEN)
        .fold(None, |best: Option<Vec<Pos>>, path| match best {
            Some(b) if b.len() >= path.len() => Some(b),
            _ => Some(path),
        })
}

/// Trace the planned chain through `session` and harvest it.
pub fn apply_plan<R, G>(session: &mut Session<R, G>) -> Result<CommitOutcome, PlanError>
where
    R: RandomSource,
    G: BoardGenerator,
{
    if !session.playable() {
        return Err(PlanError::NotPlayable);
    }

    let path = plan_chain(session.engine().board()).ok_or(PlanError::NoMove)?;
    debug!("planned chain of {} cell(s) from {:?}", path.len(), path[0]);

    session.begin_selection(path[0]).map_err(PlanError::Rejected)?;
    for &pos in &path[1..] {
        session.drag_to(pos).map_err(PlanError::Rejected)?;
    }

    match session.release().map_err(PlanError::Rejected)? {
        Some(outcome) => Ok(outcome),
        None => Err(PlanError::Rejected(EngineError::SubThresholdCommit {
            len: path.len(),
        })),
    }
}
