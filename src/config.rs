use std::path::PathBuf;

use anyhow::{bail, ensure, Result};
use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

use crate::board::Board;

#[derive(Parser, Debug)]
#[command(name = "wrapsnek")]
#[command(version, about = "Snake on a wrap-around board, in the terminal")]
pub struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = 32)]
    pub width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = 24)]
    pub height: u16,

    /// Terminal columns per cell
    #[arg(long, default_value_t = 2)]
    pub cell_size: u16,

    /// Ticks per second
    #[arg(long, default_value_t = 8)]
    pub speed: u32,

    /// Where to write the log
    #[arg(long, default_value = "wrapsnek.log")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub const MAX_SPEED: u32 = 1000;
/// Smallest board side. Anything narrower lets a single meal fill the board.
pub const MIN_SIDE: u16 = 3;

/// Startup settings. Fixed for the life of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub board: Board,
    pub ticks_per_second: u32,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        ensure!(
            cli.width >= MIN_SIDE && cli.height >= MIN_SIDE,
            "board must be at least {}x{} cells, got {}x{}",
            MIN_SIDE,
            MIN_SIDE,
            cli.width,
            cli.height
        );
        ensure!(cli.cell_size > 0, "cell size must be at least 1");
        if cli.width.checked_mul(cli.cell_size).is_none() {
            bail!(
                "board is too wide: {} cells of {} columns",
                cli.width,
                cli.cell_size
            );
        }
        ensure!(
            (1..=MAX_SPEED).contains(&cli.speed),
            "speed must be between 1 and {} ticks per second, got {}",
            MAX_SPEED,
            cli.speed
        );

        Ok(Config {
            board: Board::new(cli.width, cli.height, cli.cell_size),
            ticks_per_second: cli.speed,
            log_file: cli.log_file,
            log_level: cli.log_level.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wrapsnek").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_cli(parse(&[])).unwrap();

        assert_eq!(config.board, Board::new(32, 24, 2));
        assert_eq!(config.board.center().col, 16);
        assert_eq!(config.ticks_per_second, 8);
        assert_eq!(config.log_file, PathBuf::from("wrapsnek.log"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_custom_values() {
        let cli = parse(&[
            "--width",
            "10",
            "--height",
            "5",
            "--cell-size",
            "1",
            "--speed",
            "20",
            "--log-level",
            "trace",
        ]);
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.board, Board::new(10, 5, 1));
        assert_eq!(config.ticks_per_second, 20);
        assert_eq!(config.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_cli(parse(&["--width", "0"])).is_err());
        assert!(Config::from_cli(parse(&["--width", "1", "--height", "1"])).is_err());
        assert!(Config::from_cli(parse(&["--width", "2", "--height", "1"])).is_err());
        assert!(Config::from_cli(parse(&["--width", "40", "--height", "2"])).is_err());
        assert!(Config::from_cli(parse(&["--cell-size", "0"])).is_err());
        assert!(Config::from_cli(parse(&["--speed", "0"])).is_err());
        assert!(Config::from_cli(parse(&["--speed", "5000"])).is_err());
        assert!(Config::from_cli(parse(&["--width", "40000", "--cell-size", "2"])).is_err());
    }

    #[test]
    fn test_rejects_unparseable_input() {
        assert!(Cli::try_parse_from(["wrapsnek", "--width", "-3"]).is_err());
        assert!(Cli::try_parse_from(["wrapsnek", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_minimal_board_allowed() {
        let config = Config::from_cli(parse(&["--width", "3", "--height", "3"])).unwrap();
        assert_eq!(config.board.cell_count(), 9);
    }
}
