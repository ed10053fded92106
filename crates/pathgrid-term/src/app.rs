//! The interactive loop: edit, search, watch.

use std::error::Error;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::{execute, terminal};
use log::debug;
use pathgrid_core::Grid;
use pathgrid_search::{Astar, Step};
use rand::RngExt;

use crate::config::Config;
use crate::editor::{Action, Editor};
use crate::input::{is_cancel, to_action};
use crate::palette::Palette;
use crate::screen::{Screen, TerminalGuard};

/// Run the front end until the user quits.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    debug!("starting: rows={} seed={seed}", config.rows);
    let mut editor = Editor::new(config, seed)?;
    let mut astar = Astar::new();

    let _guard = TerminalGuard::enter()?;
    let mut screen = Screen::new(io::stdout(), Palette::classic());

    loop {
        screen.draw(editor.grid())?;
        screen.status(editor.grid(), editor.status())?;

        let ev = event::read()?;
        if let Event::Resize(..) = ev {
            execute!(io::stdout(), terminal::Clear(terminal::ClearType::All))?;
            screen.invalidate();
            continue;
        }
        let Some(action) = to_action(&ev, editor.grid()) else {
            continue;
        };
        match action {
            Action::Quit => break,
            Action::Run if editor.ready() => {
                search(&mut editor, &mut astar, &mut screen, config.step_delay)?
            }
            other => editor.apply(other),
        }
    }
    Ok(())
}

/// Run one animated search. Barriers stay frozen until it ends; q or Esc
/// cancels it and every other event is dropped.
fn search(
    editor: &mut Editor,
    astar: &mut Astar,
    screen: &mut Screen<Stdout>,
    delay: Duration,
) -> io::Result<()> {
    let cancel = AtomicBool::new(false);
    let mut failure: Option<io::Error> = None;

    let progress = |_step: Step, grid: &Grid| {
        if failure.is_some() {
            return;
        }
        if let Err(e) = frame(screen, grid, &cancel, delay) {
            cancel.store(true, Ordering::Relaxed);
            failure = Some(e);
        }
    };
    let result = astar.run_marked(editor.grid_mut(), progress, &cancel);

    if let Some(e) = failure {
        return Err(e);
    }
    debug!("search finished: {:?}", astar.stats());
    editor.record(&result, astar.stats());
    Ok(())
}

/// Redraw after one search step, check for a cancel key, then pause.
fn frame(
    screen: &mut Screen<Stdout>,
    grid: &Grid,
    cancel: &AtomicBool,
    delay: Duration,
) -> io::Result<()> {
    screen.draw(grid)?;
    while event::poll(Duration::ZERO)? {
        if is_cancel(&event::read()?) {
            cancel.store(true, Ordering::Relaxed);
        }
    }
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    Ok(())
}
