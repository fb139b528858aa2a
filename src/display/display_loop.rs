//! Terminal preview loop: draws the camera as ASCII art with the winning
//! region outlined, and owns the quit key.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};

use super::ascii::{calculate_dimensions, AsciiFrame, CharSet};
use super::overlay::draw_region_box;
use super::raw_mode::ScreenGuard;
use super::status::Status;
use crate::camera::{Frame, FrameSource};
use crate::motion::Region;
use crate::shared::SharedState;

/// Preview settings.
#[derive(Debug, Clone, Copy)]
pub struct DisplaySettings {
    pub charset: CharSet,
    pub invert: bool,
    /// How long to wait for input between redraws (~30 FPS by default)
    pub frame_interval: Duration,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            charset: CharSet::default(),
            invert: false,
            frame_interval: Duration::from_millis(33),
        }
    }
}

/// True for the keys that end the session: `q`, `Esc`, `Ctrl+C`.
///
/// Raw mode swallows SIGINT, so Ctrl+C has to be recognised here.
pub fn is_quit_key(event: &KeyEvent) -> bool {
    if event.kind != KeyEventKind::Press {
        return false;
    }
    match event.code {
        KeyCode::Char('c') | KeyCode::Char('C') => event.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        }
        KeyCode::Esc => true,
        _ => false,
    }
}

/// Render one preview frame for a `cols` x `rows` area, overlay included.
///
/// Returns `None` when the area is too small to hold anything.
pub fn compose(
    frame: &Frame,
    cols: u16,
    rows: u16,
    settings: &DisplaySettings,
    region: Option<Region>,
) -> Option<AsciiFrame> {
    if !frame.is_complete() {
        return None;
    }
    let (width, height) = calculate_dimensions(frame.width, frame.height, cols, rows);
    if width == 0 || height == 0 {
        return None;
    }
    let mut ascii = AsciiFrame::render(frame, width, height, settings.charset, settings.invert);
    draw_region_box(&mut ascii, region);
    Some(ascii)
}

pub struct DisplayLoop<S> {
    source: S,
    shared: Arc<SharedState>,
    settings: DisplaySettings,
    drawn: Option<(u64, Option<Region>)>,
}

impl<S: FrameSource> DisplayLoop<S> {
    pub fn new(source: S, shared: Arc<SharedState>, settings: DisplaySettings) -> Self {
        Self {
            source,
            shared,
            settings,
            drawn: None,
        }
    }

    /// Take over the terminal until the user quits or the stop flag is set.
    ///
    /// Always sets the stop flag and restores the terminal before returning.
    pub fn run(mut self) -> io::Result<()> {
        let mut guard = ScreenGuard::enter()?;
        let mut stdout = io::stdout();

        let result = self.event_loop(&mut stdout);

        self.shared.request_stop();
        guard.exit();
        result
    }

    fn event_loop(&mut self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, Clear(ClearType::All))?;

        loop {
            if self.shared.should_stop() {
                return Ok(());
            }

            if let Some(frame) = self.source.latest() {
                let region = self.shared.region();
                if self.drawn != Some((frame.sequence, region)) {
                    self.draw(out, &frame, region)?;
                    self.drawn = Some((frame.sequence, region));
                }
            }

            if event::poll(self.settings.frame_interval)? {
                match event::read()? {
                    Event::Key(key) if is_quit_key(&key) => {
                        log::debug!("quit requested from preview");
                        return Ok(());
                    }
                    Event::Resize(_, _) => {
                        queue!(out, Clear(ClearType::All))?;
                        self.drawn = None;
                    }
                    _ => {}
                }
            }
        }
    }

    fn draw(&self, out: &mut impl Write, frame: &Frame, region: Option<Region>) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let preview_rows = rows.saturating_sub(1);

        if let Some(ascii) = compose(frame, cols, preview_rows, &self.settings, region) {
            for y in 0..ascii.height {
                let Some((chars, marks)) = ascii.row(y) else {
                    break;
                };
                queue!(out, MoveTo(0, y))?;
                write_row(out, chars, marks)?;
            }
        }

        let status = Status {
            region,
            last_key: self.shared.last_key(),
            presses: self.shared.presses(),
        };
        queue!(
            out,
            MoveTo(0, rows.saturating_sub(1)),
            Clear(ClearType::CurrentLine),
            Print(status.format(cols))
        )?;
        out.flush()
    }
}

/// Write one row, coloring overlay cells red.
fn write_row(out: &mut impl Write, chars: &[char], marks: &[bool]) -> io::Result<()> {
    let mut run = String::new();
    let mut run_marked = false;

    for (&c, &marked) in chars.iter().zip(marks) {
        if marked != run_marked && !run.is_empty() {
            flush_run(out, &run, run_marked)?;
            run.clear();
        }
        run_marked = marked;
        run.push(c);
    }
    if !run.is_empty() {
        flush_run(out, &run, run_marked)?;
    }
    Ok(())
}

fn flush_run(out: &mut impl Write, text: &str, marked: bool) -> io::Result<()> {
    if marked {
        queue!(out, SetForegroundColor(Color::Red), Print(text), ResetColor)
    } else {
        queue!(out, Print(text))
    }
}
