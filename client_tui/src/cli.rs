use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use game_core::{BestOf, Config, Params};

/// Pong against a ball-tracking AI, in your terminal
#[derive(Debug, Parser)]
#[command(name = "pong", version)]
pub struct Args {
    /// Match format for the first match (3, 5 or 7); first to 5 if omitted
    #[arg(long, value_name = "N")]
    pub best_of: Option<u8>,

    /// Don't ring the terminal bell on bounces and points
    #[arg(long)]
    pub mute: bool,

    /// Where log output goes (RUST_LOG controls the level)
    #[arg(long, value_name = "PATH", default_value = "pong.log")]
    pub log_file: PathBuf,

    /// Frames per second
    #[arg(long, default_value_t = 1000 / Params::FRAME_MS)]
    pub fps: u64,
}

impl Args {
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::new();
        if let Some(games) = self.best_of {
            let best_of = BestOf::try_from(games).context("invalid --best-of")?;
            config = config.with_best_of(best_of);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn tick_ms(&self) -> u64 {
        1000 / self.fps.clamp(1, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["pong"]);
        assert!(!args.mute);
        assert_eq!(args.fps, 62);
        assert_eq!(args.tick_ms(), 16);
        assert_eq!(args.config().unwrap().win_score, 5);
    }

    #[test]
    fn test_best_of_flag() {
        let args = Args::parse_from(["pong", "--best-of", "3", "--mute"]);
        assert!(args.mute);
        assert_eq!(args.config().unwrap().win_score, 2);
    }

    #[test]
    fn test_unsupported_best_of_is_an_error() {
        let args = Args::parse_from(["pong", "--best-of", "4"]);
        assert!(args.config().is_err());
    }

    #[test]
    fn test_fps_is_clamped() {
        let args = Args::parse_from(["pong", "--fps", "0"]);
        assert_eq!(args.tick_ms(), 1000);
    }
}
