//! Terminal demo: a long document with a draggable scrollbar.
//!
//! Drag the knob with the left button or use the wheel. `q` or Esc quits.
//! Pass `--left` to put the track on the left edge.

use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use tscroll::{Dom, GestureNormalizer, Options, PositionKey, Scrollbars};
use tscroll_dom::{Document, Element, NodeId};

const LINES: usize = 400;

struct Demo {
    doc: Document,
    bars: Scrollbars<NodeId>,
    outer: NodeId,
    lines: Vec<String>,
    position: PositionKey,
}

impl Demo {
    fn new(width: u16, height: u16, position: PositionKey) -> Option<Self> {
        let lines: Vec<String> = (1..=LINES)
            .map(|n| format!("{n:>4}  The quick brown fox jumps over the lazy dog."))
            .collect();

        let mut doc = Document::new();
        let body = doc.body();
        let outer = doc
            .insert(
                body,
                Element::div()
                    .id("outer")
                    .height(f64::from(height))
                    .style("width", format!("{width}px"))
                    .child(Element::div().id("content").height(lines.len() as f64)),
            )
            .ok()?;

        let mut bars = Scrollbars::new();
        let options = Options { position };
        if !bars.attach(&mut doc, outer, "#content", options) {
            return None;
        }

        Some(Self {
            doc,
            bars,
            outer,
            lines,
            position,
        })
    }

    fn knob(&self) -> Option<NodeId> {
        self.bars.refs(&self.outer).map(|r| r.knob)
    }

    /// Knob rows as a half-open range, if the track is shown.
    fn knob_rows(&self) -> Option<(u16, u16)> {
        let state = self.bars.state(&self.outer)?;
        if !state.visible {
            return None;
        }
        let top = state.knob_top_px.round() as u16;
        let height = self.doc.height(self.knob()?).unwrap_or_default().max(1.0) as u16;
        Some((top, top + height))
    }

    fn bar_column(&self, width: u16) -> u16 {
        match self.position {
            PositionKey::Left => 0,
            PositionKey::Right => width.saturating_sub(1),
        }
    }

    fn resize(&mut self, height: u16) {
        Dom::set_height(&mut self.doc, &self.outer, f64::from(height));
        self.bars.refresh(&mut self.doc, &self.outer);
    }

    fn render(&self, out: &mut impl Write, width: u16, height: u16) -> io::Result<()> {
        let scroll_top = self.doc.scroll_top(self.outer).unwrap_or_default() as usize;
        let bar_x = self.bar_column(width);
        let knob = self.knob_rows();
        let text_x = if self.position == PositionKey::Left { 2 } else { 0 };
        let text_width = usize::from(width.saturating_sub(2));

        queue!(out, terminal::Clear(terminal::ClearType::All))?;
        for row in 0..height {
            let line = self
                .lines
                .get(scroll_top + usize::from(row))
                .map(String::as_str)
                .unwrap_or("");
            let visible: String = line.chars().take(text_width).collect();
            queue!(out, cursor::MoveTo(text_x, row), Print(visible))?;

            if let Some((start, end)) = knob {
                let on_knob = row >= start && row < end;
                let (bg, glyph) = if on_knob {
                    (Color::Grey, ' ')
                } else {
                    (Color::DarkGrey, '│')
                };
                queue!(
                    out,
                    cursor::MoveTo(bar_x, row),
                    SetBackgroundColor(bg),
                    SetForegroundColor(Color::Black),
                    Print(glyph),
                    ResetColor
                )?;
            }
        }
        out.flush()
    }

    fn handle_mouse(&mut self, normalizer: &mut GestureNormalizer, mouse: &event::MouseEvent) {
        let (width, _) = terminal::size().unwrap_or((80, 24));
        let on_knob = mouse.column == self.bar_column(width)
            && self
                .knob_rows()
                .is_some_and(|(start, end)| mouse.row >= start && mouse.row < end);

        for signal in normalizer.normalize(mouse, on_knob) {
            let target = if signal.targets_outer() {
                Some(self.outer)
            } else {
                self.knob()
            };
            if let Some(target) = target {
                let result = self.bars.dispatch(&mut self.doc, &target, signal);
                log::trace!("{signal:?} -> {result:?}");
            }
        }
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("tscroll-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let position = if std::env::args().any(|a| a == "--left") {
        PositionKey::Left
    } else {
        PositionKey::Right
    };

    let (width, height) = terminal::size()?;
    let Some(mut demo) = Demo::new(width, height, position) else {
        eprintln!("Error: could not attach the scrollbar");
        return Ok(());
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut demo, &mut stdout);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(demo: &mut Demo, stdout: &mut io::Stdout) -> io::Result<()> {
    let mut normalizer = GestureNormalizer::new();

    loop {
        let (width, height) = terminal::size()?;
        demo.render(stdout, width, height)?;

        match event::read()? {
            CrosstermEvent::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                return Ok(());
            }
            CrosstermEvent::Mouse(mouse) => demo.handle_mouse(&mut normalizer, &mouse),
            CrosstermEvent::Resize(_, rows) => demo.resize(rows),
            _ => {}
        }
    }
}
