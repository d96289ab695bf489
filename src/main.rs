use std::process::ExitCode;

use anyhow::Result;

use rexword::config::Config;
use rexword::puzzle::schema::load_puzzle_file;
use rexword::session::{Mode, Session};
use rexword::validation::engine::{ClueStatus, ValidationReport};
use rexword::watch::{PuzzleWatcher, WatchEvent};

fn main() -> Result<ExitCode> {
    // Parse configuration before logger setup so --log-level applies
    let config = Config::from_args_and_env()?;
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    let mut session = Session::new(config.mode);
    let structure = load_puzzle_file(&config.file)?;

    match config.mode {
        Mode::Click => {
            let mut report = ValidationReport::new();
            session.replace_structure(Some(&structure), &mut report);
            session.validate(&mut report);
            print_report(&session, &report);

            Ok(if report.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Mode::Live => {
            // In live mode the rebuild itself validates; print the initial
            // signals, then re-validate on every file change.
            let mut report = ValidationReport::new();
            session.replace_structure(Some(&structure), &mut report);
            print_report(&session, &report);

            let watcher = PuzzleWatcher::new(&config.file)?;
            while let Some(event) = watcher.recv() {
                match event {
                    WatchEvent::StructureChanged(path) => {
                        log::info!("Puzzle file changed: {}", path.display());
                        // Skip this round if the file is mid-replacement
                        let structure = match load_puzzle_file(&config.file) {
                            Ok(structure) => structure,
                            Err(e) => {
                                log::warn!("Reload failed: {e:#}");
                                continue;
                            }
                        };
                        let mut report = ValidationReport::new();
                        session.replace_structure(Some(&structure), &mut report);
                        print_report(&session, &report);
                    }
                    WatchEvent::WatcherError(e) => return Err(e.into()),
                }
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Render one line per clue plus a summary
fn print_report(session: &Session, report: &ValidationReport) {
    let Some(puzzle) = session.puzzle() else {
        println!("no puzzle loaded");
        return;
    };

    for &(clue_id, status) in &report.statuses {
        let clue = &puzzle.clues[clue_id];
        let mark = match status {
            ClueStatus::Valid => "ok",
            ClueStatus::Invalid => "FAIL",
            ClueStatus::Neutral => "--",
        };
        println!("{mark:>4}  {}  /{}/", clue.placement, clue.pattern);
    }

    println!(
        "{} checkers: {} valid, {} invalid, {} pending",
        report.statuses.len(),
        report.count_of(ClueStatus::Valid),
        report.count_of(ClueStatus::Invalid),
        report.count_of(ClueStatus::Neutral),
    );
}
