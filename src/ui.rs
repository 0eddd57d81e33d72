//! Console output for the report front end.
//!
//! Progress lines (the chosen template, the converter in use) carry an
//! `allure-docx: ` prefix. Problems with the builder or a converter get a
//! coloured `warning` / `error` label when stdout is a terminal, plain text
//! otherwise. Every line goes to stdout under one lock so converter notices
//! never interleave mid-line.

use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

const PREFIX: &str = "allure-docx: ";

lazy_static! {
    static ref CONSOLE: Mutex<()> = Mutex::new(());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    /// Best-effort export reported a problem; the run goes on
    Warning,
    /// The run is about to end with a non-zero exit code
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    fn color(self) -> term::color::Color {
        match self {
            Level::Warning => term::color::BRIGHT_YELLOW,
            Level::Error => term::color::BRIGHT_RED,
        }
    }

    /// Errors are the last thing printed, so they get blank lines around them.
    fn padded(self) -> bool {
        self == Level::Error
    }
}

fn with_console(f: impl FnOnce()) {
    let _guard = CONSOLE.lock();
    f();
}

fn prefixed(msg: &str) -> String {
    format!("{}{}", PREFIX, msg)
}

/// Write the bold, coloured label. Returns false if stdout can't do colour.
fn write_colored_label(level: Level) -> bool {
    let Some(mut t) = term::stdout() else {
        return false;
    };
    if t.fg(level.color()).is_err() {
        return false;
    }
    let _ = t.attr(term::Attr::Bold);
    let written = write!(t, "{}", level.label()).is_ok();
    let _ = t.reset();
    written
}

fn print_labeled(level: Level, msg: &str) {
    with_console(|| {
        if level.padded() {
            println!();
        }
        if !write_colored_label(level) {
            print!("{}", level.label());
        }
        println!(": {}", msg);
        if level.padded() {
            println!();
        }
    });
}

/// Progress line such as the template in use or the converter found
pub fn status(msg: &str) {
    with_console(|| println!("{}", prefixed(msg)));
}

pub fn print_warning(msg: &str) {
    print_labeled(Level::Warning, msg);
}

pub fn print_error(msg: &str) {
    print_labeled(Level::Error, msg);
}
