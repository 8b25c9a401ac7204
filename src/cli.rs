//! Command-line configuration.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::types::{BoardConfig, Preset};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
#[command(group(
    ArgGroup::new("board")
        .args(["beginner", "intermediate", "expert", "custom"])
        .multiple(false)
))]
pub struct Args {
    /// Beginner: 8 x 8 grid with 10 mines (default)
    #[arg(short, long)]
    pub beginner: bool,

    /// Intermediate: 16 x 16 grid with 40 mines
    #[arg(short, long)]
    pub intermediate: bool,

    /// Expert: 16 x 30 grid with 99 mines
    #[arg(short, long)]
    pub expert: bool,

    /// Custom board, e.g. 9x9x10
    #[arg(long, value_name = "ROWSxCOLSxMINES")]
    pub custom: Option<BoardConfig>,

    /// Fix the random seed instead of drawing one
    #[arg(long, env = "MINESWEEPER_SEED")]
    pub seed: Option<u64>,

    /// Write diagnostic logs to this file (filter with MINESWEEPER_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// The selected preset, if the board was not given with `--custom`.
    pub fn preset(&self) -> Option<Preset> {
        if self.custom.is_some() {
            None
        } else if self.expert {
            Some(Preset::Expert)
        } else if self.intermediate {
            Some(Preset::Intermediate)
        } else {
            Some(Preset::Beginner)
        }
    }

    pub fn board_config(&self) -> BoardConfig {
        match (self.custom, self.preset()) {
            (Some(config), _) => config,
            (None, Some(preset)) => preset.config(),
            (None, None) => BoardConfig::default(),
        }
    }
}
