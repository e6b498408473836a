use std::fs::File;
use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::WriteLogger;

use wrapsnek::input::TerminalInput;
use wrapsnek::pacing::TickPacer;
use wrapsnek::render::{required_terminal_size, TerminalRenderer};
use wrapsnek::{Cli, Config, Simulation};

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    // Set up logging before anything else
    WriteLogger::init(
        config.log_level,
        simplelog::Config::default(),
        File::create(&config.log_file)
            .with_context(|| format!("creating log file {}", config.log_file.display()))?,
    )
    .context("initializing logger")?;

    info!(
        "Starting wrapsnek on a {}x{} board at {} ticks/s",
        config.board.width_cells, config.board.height_cells, config.ticks_per_second
    );

    let (needed_width, needed_height) = required_terminal_size(config.board);
    let (width, height) = terminal::size().context("reading terminal size")?;
    if width < needed_width || height < needed_height {
        bail!(
            "terminal is {}x{} but the board needs {}x{}",
            width,
            height,
            needed_width,
            needed_height
        );
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let mut renderer = TerminalRenderer::new(terminal, config.board);

    let mut simulation = Simulation::new(config.board, rand::thread_rng());
    let result = simulation.run(
        &mut TerminalInput,
        &mut renderer,
        &mut TickPacer::new(config.ticks_per_second),
    );

    // Cleanup terminal, even if the game loop failed
    if let Err(e) = restore_terminal(renderer.terminal_mut()) {
        error!("Error restoring terminal: {}", e);
    }

    result.context("running game loop")?;
    info!("Exiting wrapsnek");
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
