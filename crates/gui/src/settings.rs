//! User settings loaded from `settings.json`
//!
//! Both fields are deliberate configuration points: the default promotion
//! piece (queen unless configured otherwise) and the initial board
//! orientation. A missing file means defaults; an unreadable one is logged
//! and ignored.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use shakmaty::Role;
use tracing::warn;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Piece a pawn promotes to; no under-promotion dialog is offered.
    pub promotion: PromotionChoice,
    /// Start with black at the bottom of the board.
    pub flip_board: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionChoice {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    pub fn role(self) -> Role {
        match self {
            PromotionChoice::Queen => Role::Queen,
            PromotionChoice::Rook => Role::Rook,
            PromotionChoice::Bishop => Role::Bishop,
            PromotionChoice::Knight => Role::Knight,
        }
    }
}

impl Settings {
    fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Settings from [`SETTINGS_FILE`] in the working directory, or defaults.
    pub fn load_or_default() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("ignoring {}: {err:#}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
