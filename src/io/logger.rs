use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::io::{self, Write};

#[derive(PartialEq, Eq)]
pub enum Status {
    Info,
    Warning,
    Error,
}

impl Status {
    fn symbol(&self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Warning => "!".yellow(),
            Self::Error => "!".red(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Writes a single status line to `writer`
pub fn write_status(
    writer: &mut impl Write,
    status: &Status,
    message: &impl Display,
    newline: bool,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}[{status}] {message}",
        if newline { "\n" } else { "" }
    )
}

pub fn status(status: &Status, message: &impl Display, newline: bool) {
    // Write failures on a closed console are ignored
    let _ = match status {
        Status::Error => write_status(&mut io::stderr().lock(), status, message, newline),
        _ => write_status(&mut io::stdout().lock(), status, message, newline),
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Info,
            &$message.to_string(),
            false,
        );
    };
}

#[macro_export]
macro_rules! log_warn {
    ($message:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Warning,
            &$message.to_string(),
            false,
        );
    };
}
