use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cache::open_cache;
use crate::config::Config;
use crate::error::LcdError;
use crate::filters::matches_input;
use crate::logging::init_logging;
use crate::matcher::{FsProbe, complete, match_at, match_word};
use crate::models::{Mode, Query, Selection};
use crate::selector::{SelectMode, TerminalSupport, select};
use crate::tui::TerminalMenu;

/// Exit status when several directories were printed instead of one
pub const EXIT_AMBIGUOUS: u8 = 3;
/// Exit status for not-found, I/O and configuration errors
pub const EXIT_FAILURE: u8 = 1;
/// Exit status when the user cancelled the menu
pub const EXIT_CANCELLED: u8 = 130;

#[derive(Parser)]
#[command(name = "lcd")]
#[command(version = "0.1.0")]
#[command(about = "Find a directory in the lcd path cache by its trailing segments", long_about = None)]
pub struct Cli {
    /// Directory name or trailing path segments to look for
    pub word: Option<String>,

    /// Print only the N-th match (1-based)
    #[arg(short = 'n', long, value_name = "N", conflicts_with_all = ["complete", "list"])]
    pub index: Option<NonZeroUsize>,

    /// Print next-segment completions for WORD
    #[arg(short, long, conflicts_with = "list")]
    pub complete: bool,

    /// Print every match, one per line
    #[arg(short, long)]
    pub list: bool,

    /// Never open the interactive menu
    #[arg(long)]
    pub no_menu: bool,

    /// Cache file to read (overrides LCD_CACHE and the config file)
    #[arg(long, value_name = "PATH")]
    pub cache: Option<PathBuf>,
}

impl Cli {
    fn query(&self, word: &str, menu: bool) -> Query {
        let mode = if self.complete {
            Mode::Complete
        } else if self.list {
            Mode::List
        } else if menu && !self.no_menu {
            Mode::Interactive
        } else {
            Mode::Match
        };

        let query = Query::new(word, mode);
        match self.index {
            Some(n) => query.with_index(n.get()),
            None => query,
        }
    }
}

/// What was printed on success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Ambiguous,
}

impl Outcome {
    pub fn exit_status(self) -> u8 {
        match self {
            Outcome::Done => 0,
            Outcome::Ambiguous => EXIT_AMBIGUOUS,
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let stdout = io::stdout();
    match execute(&cli, &mut stdout.lock()) {
        Ok(outcome) => ExitCode::from(outcome.exit_status()),
        Err(err) => {
            eprintln!("lcd: {:#}", err);
            ExitCode::from(exit_status_for(&err))
        }
    }
}

/// Map an error chain onto the documented exit statuses
pub fn exit_status_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<LcdError>() {
        Some(LcdError::Cancelled) => EXIT_CANCELLED,
        _ => EXIT_FAILURE,
    }
}

fn execute(cli: &Cli, out: &mut impl Write) -> Result<Outcome> {
    // Bare invocation prints nothing
    let Some(word) = cli.word.as_deref() else {
        return Ok(Outcome::Done);
    };

    let config = Config::load(cli.cache.clone())?;
    let query = cli.query(word, config.menu);
    debug!(?query, cache = %config.cache_path.display(), "dispatching query");

    let cache = open_cache(&config.cache_path)
        .with_context(|| format!("Failed to open cache: {}", config.cache_path.display()))?;

    if query.mode == Mode::Complete {
        let completions = complete(&query.word, cache, &FsProbe, config.completion)?;
        write_lines(out, &completions)?;
        return Ok(Outcome::Done);
    }

    if let Some(index) = query.index {
        let path = match_at(&query.word, index, cache, &FsProbe)?;
        write_lines(out, std::slice::from_ref(&path))?;
        return Ok(Outcome::Done);
    }

    let matches = match_word(&query.word, cache, &FsProbe)?;
    if query.mode == Mode::List {
        write_lines(out, matches.entries())?;
        return Ok(Outcome::Done);
    }

    let mode = match query.mode {
        Mode::Interactive => SelectMode::for_terminal(true, TerminalSupport::detect()),
        _ => SelectMode::List,
    };
    let selection = select(matches, mode, &mut TerminalMenu, matches_input)?;
    write_lines(out, selection.lines())?;

    Ok(match selection {
        Selection::Single(_) => Outcome::Done,
        Selection::Ambiguous(_) => Outcome::Ambiguous,
    })
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line).context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;
    Ok(())
}
