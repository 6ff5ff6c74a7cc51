//! Demo application: controlled and uncontrolled select widgets side by
//! side.
//!
//! The uncontrolled select keeps its own value. The controlled select only
//! requests changes; this application owns the value and applies it back
//! with `set_value`, either from the select's own change handler or from
//! the "Set to Mint Chutney" button.

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use elegir_core::{
    Canvas, Color, Constraints, Event, FontWeight, Key, Point, Rect, Size, TextStyle, Widget,
};
use elegir_terminal::{translate, CellCanvas, TerminalError};
use elegir_widgets::{Button, ButtonClicked, Select, SelectOption, SelectionChanged};
use log::LevelFilter;
use simplelog::{Config as LogConfig, WriteLogger};
use std::any::Any;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Parser)]
#[command(
    name = "elegir-demo",
    about = "Controlled and uncontrolled select widgets, side by side"
)]
struct Args {
    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    verbose: bool,
}

fn dishes() -> Vec<SelectOption> {
    vec![
        SelectOption::new("tikka-masala", "Tikka Masala"),
        SelectOption::new("tandoori-chicken", "Tandoori Chicken"),
        SelectOption::new("dosa", "Dosa"),
        SelectOption::new("mint-chutney", "Mint Chutney"),
    ]
}

#[derive(Clone, Copy, PartialEq)]
enum Focus {
    Uncontrolled,
    Controlled,
    Button,
}

struct DemoApp {
    uncontrolled: Select,
    controlled: Select,
    set_button: Button,
    /// The authoritative value of the controlled select, owned here.
    owner_value: String,
    /// Values the controlled select has requested but the owner has not
    /// applied yet.
    requested: Arc<Mutex<Option<String>>>,
    focus: Focus,
}

impl DemoApp {
    fn new() -> Self {
        let requested = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&requested);
        let mut controlled = Select::controlled(move |value: &str| {
            log::debug!("change requested: {value}");
            if let Ok(mut guard) = sink.lock() {
                *guard = Some(value.to_string());
            }
        })
        .options(dishes())
        .with_accessible_name("Controlled dish");
        let owner_value = "dosa".to_string();
        controlled.set_value(Some(owner_value.clone()));

        Self {
            uncontrolled: Select::uncontrolled_with("tikka-masala")
                .options(dishes())
                .with_accessible_name("Uncontrolled dish"),
            controlled,
            set_button: Button::new("Set to Mint Chutney"),
            owner_value,
            requested,
            focus: Focus::Uncontrolled,
        }
    }

    fn layout(&mut self) {
        self.uncontrolled.layout(Rect::new(2.0, 2.0, 24.0, 1.0));
        self.controlled.layout(Rect::new(2.0, 7.0, 24.0, 1.0));
        let size = self
            .set_button
            .measure(Constraints::loose(Size::new(30.0, 1.0)));
        self.set_button
            .layout(Rect::new(30.0, 7.0, size.width, size.height));
    }

    fn focused_widget(&mut self) -> &mut dyn Widget {
        match self.focus {
            Focus::Uncontrolled => &mut self.uncontrolled,
            Focus::Controlled => &mut self.controlled,
            Focus::Button => &mut self.set_button,
        }
    }

    fn cycle_focus(&mut self) {
        self.focused_widget().event(&Event::FocusOut);
        self.focus = match self.focus {
            Focus::Uncontrolled => Focus::Controlled,
            Focus::Controlled => Focus::Button,
            Focus::Button => Focus::Uncontrolled,
        };
        self.focused_widget().event(&Event::FocusIn);
    }

    fn handle(&mut self, event: &Event) {
        let mut messages: Vec<Box<dyn Any + Send>> = Vec::new();

        match event {
            Event::KeyDown { key: Key::Tab } => self.cycle_focus(),
            Event::MouseMove { .. } | Event::MouseDown { .. } | Event::MouseUp { .. } => {
                // Every widget hit-tests itself; an open list also uses
                // outside clicks to close.
                let widgets: [&mut dyn Widget; 3] = [
                    &mut self.uncontrolled,
                    &mut self.controlled,
                    &mut self.set_button,
                ];
                for widget in widgets {
                    if let Some(message) = widget.event(event) {
                        messages.push(message);
                    }
                }
            }
            _ => {
                if let Some(message) = self.focused_widget().event(event) {
                    messages.push(message);
                }
            }
        }

        for message in messages {
            if let Some(changed) = message.downcast_ref::<SelectionChanged>() {
                log::info!("selection changed: {:?}", changed.value);
            } else if message.downcast_ref::<ButtonClicked>().is_some() {
                if let Ok(mut guard) = self.requested.lock() {
                    *guard = Some("mint-chutney".to_string());
                }
            }
        }

        // Owner side of the controlled contract: apply requested values.
        if let Ok(mut guard) = self.requested.lock() {
            if let Some(value) = guard.take() {
                log::info!("owner applies value {value:?}");
                self.owner_value = value;
                self.controlled.set_value(Some(self.owner_value.clone()));
            }
        }
    }

    fn paint(&self, canvas: &mut CellCanvas) {
        canvas.clear();

        let frame_color = Color::from_hex("#4b5563").unwrap_or(Color::WHITE);
        let title_style = TextStyle {
            color: Color::WHITE,
            weight: FontWeight::Bold,
        };
        let dim_style = TextStyle {
            color: Color::from_hex("#9ca3af").unwrap_or(Color::WHITE),
            weight: FontWeight::Normal,
        };

        canvas.stroke_rect(Rect::new(0.0, 0.0, 56.0, 4.0), frame_color, 1.0);
        canvas.draw_text(" Uncontrolled ", Point::new(2.0, 0.0), &title_style);

        canvas.stroke_rect(Rect::new(0.0, 6.0, 56.0, 4.0), frame_color, 1.0);
        canvas.draw_text(" Controlled ", Point::new(2.0, 6.0), &title_style);

        canvas.draw_text(
            &format!("owner value: {}", self.owner_value),
            Point::new(2.0, 13.0),
            &dim_style,
        );
        canvas.draw_text(
            "Tab moves focus · Enter opens · q quits",
            Point::new(2.0, 14.0),
            &dim_style,
        );

        self.uncontrolled.paint(canvas);
        self.controlled.paint(canvas);
        self.set_button.paint(canvas);

        // Focus marker in the frame gutter.
        let focused_y = match self.focus {
            Focus::Uncontrolled => Widget::bounds(&self.uncontrolled).y,
            Focus::Controlled => Widget::bounds(&self.controlled).y,
            Focus::Button => Widget::bounds(&self.set_button).y,
        };
        canvas.draw_text("▸", Point::new(1.0, focused_y), &title_style);
    }
}

/// Puts the terminal into raw/alternate-screen mode and restores it on
/// drop, so errors unwind cleanly.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, TerminalError> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn is_quit(event: &CrosstermEvent) -> bool {
    match event {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => {
            *code == KeyCode::Char('q')
                || (*code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

fn init_logging(args: &Args) -> Result<(), TerminalError> {
    if let Some(path) = &args.log_file {
        let level = if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        WriteLogger::init(level, LogConfig::default(), File::create(path)?)?;
    }
    Ok(())
}

fn run() -> Result<(), TerminalError> {
    let _guard = TerminalGuard::enter()?;
    let (width, height) = terminal::size()?;
    let mut canvas = CellCanvas::new(width, height);
    let mut app = DemoApp::new();
    app.layout();
    let mut out = io::stdout();

    loop {
        app.paint(&mut canvas);
        canvas.present(&mut out)?;
        out.flush()?;

        let raw = event::read()?;
        if is_quit(&raw) {
            break;
        }
        if let CrosstermEvent::Resize(new_width, new_height) = raw {
            canvas.resize(new_width, new_height);
        }
        if let Some(event) = translate(&raw) {
            app.handle(&event);
        }
    }
    Ok(())
}

fn main() -> Result<(), TerminalError> {
    let args = Args::parse();
    init_logging(&args)?;
    if !io::stdout().is_tty() {
        return Err(TerminalError::NotATty);
    }
    run()
}
