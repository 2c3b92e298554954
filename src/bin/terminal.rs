use std::env;
use std::error::Error;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use lifegrid::{Cell, ControlEvent, Grid, RunState, Session, changed_cells};

/// Board animated when no dimensions are given on the command line
const DEMO_BOARD: &str = "\
..........
...##.....
....#.....
..........
..........
...##.....
..##......
.....#....
....#.....
..........
";

const DEFAULT_INTERVAL_MS: u64 = 1000;

struct Options {
    grid: Grid,
    interval: Duration,
}

fn parse_args() -> Result<Options, Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(Options {
            grid: DEMO_BOARD.parse()?,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }),
        [rows, columns] => Ok(Options {
            grid: Grid::random(rows.parse()?, columns.parse()?)?,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }),
        [rows, columns, interval] => Ok(Options {
            grid: Grid::random(rows.parse()?, columns.parse()?)?,
            interval: Duration::from_millis(interval.parse::<u64>()?.max(1)),
        }),
        _ => Err("usage: terminal [ROWS COLUMNS [INTERVAL_MS]]".into()),
    }
}

/// Puts the terminal into raw alternate-screen mode and restores it on
/// drop, so a panic or early return cannot leave the shell unusable.
struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, cursor::MoveTo(0, 0))?;
        Ok(Self { out })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Repaint the whole board
fn draw_full(out: &mut Stdout, grid: &Grid) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for row in 0..grid.rows() {
        let line: String = (0..grid.columns())
            .map(|column| grid.get(row, column).map_or('.', Cell::glyph))
            .collect();
        queue!(out, cursor::MoveTo(0, row as u16), Print(line))?;
    }
    Ok(())
}

/// Repaint only the cells that flipped between two generations
fn draw_changes(out: &mut Stdout, before: &Grid, after: &Grid) -> io::Result<()> {
    for (row, column, cell) in changed_cells(before, after) {
        queue!(
            out,
            cursor::MoveTo(column as u16, row as u16),
            Print(cell.glyph())
        )?;
    }
    Ok(())
}

/// Status line below the board, separated by one blank row
fn draw_status(out: &mut Stdout, session: &Session) -> io::Result<()> {
    let state = match session.run_state {
        RunState::Running => "running",
        RunState::Paused => "paused",
    };
    let line = format!(
        "gen {:>5}  pop {:>5}  {:<7}  q quit  space pause  r restart",
        session.generation,
        session.grid.count_alive(),
        state,
    );
    queue!(
        out,
        cursor::MoveTo(0, session.grid.rows() as u16 + 1),
        Clear(ClearType::CurrentLine),
        Print(line)
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = parse_args()?;
    let interval = options.interval;

    let mut session = Session::new(options.grid)
        .with_run_state(RunState::Running)
        .with_restart_on_death(true)
        .with_updates_per_second(1000.0 / interval.as_millis() as f32);

    let mut guard = TermGuard::new()?;

    draw_full(&mut guard.out, &session.grid)?;
    draw_status(&mut guard.out, &session)?;
    guard.out.flush()?;

    let mut last_tick = Instant::now();

    loop {
        let timeout = interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => {
                        session = session.handle(ControlEvent::PausePlay);
                        draw_status(&mut guard.out, &session)?;
                        guard.out.flush()?;
                    }
                    KeyCode::Char('r') => {
                        session = session.handle(ControlEvent::Restart);
                        draw_full(&mut guard.out, &session.grid)?;
                        draw_status(&mut guard.out, &session)?;
                        guard.out.flush()?;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        if last_tick.elapsed() >= interval {
            let delta = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();

            let before = session.grid.clone();
            session = session.tick(delta);
            draw_changes(&mut guard.out, &before, &session.grid)?;
            draw_status(&mut guard.out, &session)?;
            guard.out.flush()?;
        }
    }

    Ok(())
}
