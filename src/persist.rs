//! Persist module - save-file capture and restore
//!
//! A save is five JSON fields: the mode flag, the grand chelem series, the
//! selected piece indices, the grid rows, and the reveal count. Piece
//! coordinates are deliberately absent; on restore, placed pieces are
//! rebuilt from where their ids sit in the grid and everything else
//! respawns at its pattern position.
//!
//! Field names are frozen - existing save files must keep loading.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Session;
use crate::types::{GameMode, PieceId};

/// The on-disk save format
///
/// `pieces_selectionnees` holds zero-based piece indices (id - 1), in
/// selection order, matching the historical file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    pub mode_grand_chelem: bool,
    pub niveau_grand_chelem: usize,
    pub pieces_selectionnees: Vec<u8>,
    pub plateau: Vec<Vec<u8>>,
    pub etape: usize,
}

impl SaveGame {
    /// Snapshot the five persisted fields out of a session
    pub fn capture(session: &Session) -> Self {
        Self {
            mode_grand_chelem: session.mode() == GameMode::GrandChelem,
            niveau_grand_chelem: session.series(),
            pieces_selectionnees: session.roster().iter().map(|id| id.get() - 1).collect(),
            plateau: session.board().to_rows(),
            etape: session.etape(),
        }
    }

    /// Rebuild a session from the persisted fields
    pub fn restore(&self) -> Result<Session> {
        let ids = self
            .pieces_selectionnees
            .iter()
            .map(|&index| {
                index
                    .checked_add(1)
                    .and_then(PieceId::new)
                    .ok_or_else(|| anyhow!("save file holds piece index {} outside 0..=11", index))
            })
            .collect::<Result<Vec<_>>>()?;

        let mode = if self.mode_grand_chelem {
            GameMode::GrandChelem
        } else {
            GameMode::Free
        };

        Session::rehydrate(mode, self.niveau_grand_chelem, &ids, &self.plateau, self.etape)
            .map_err(|e| anyhow!("save file rejected: {}", e.message()))
    }
}

/// Serialize a session's save fields to a JSON file
pub fn save_game_file(session: &Session, path: &Path) -> Result<()> {
    let save = SaveGame::capture(session);
    let json = serde_json::to_string_pretty(&save).context("encoding save file")?;
    fs::write(path, json).with_context(|| format!("writing save file {}", path.display()))?;
    Ok(())
}

/// Load a session back from a JSON save file
pub fn load_game_file(path: &Path) -> Result<Session> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading save file {}", path.display()))?;
    let save: SaveGame =
        serde_json::from_str(&json).with_context(|| format!("parsing save file {}", path.display()))?;
    save.restore()
}
