//! Terminal I/O for the shell: prefixed status messages, prompts, and
//! yes/no confirmation.
//!
//! Info lines go to stdout, warnings and errors to stderr. Prefixes are
//! colored with `crossterm` only when the target stream allows color.

use std::io::{self, BufRead, Write};

use crossterm::style::{Color, StyledContent, Stylize};
use crossterm::{cursor, execute, terminal};

/// The streams a session reads from and writes to.
pub struct Console<'io> {
    input: &'io mut dyn BufRead,
    out: &'io mut dyn Write,
    err: &'io mut dyn Write,
    color_out: bool,
    color_err: bool,
    errors: usize,
}

impl<'io> Console<'io> {
    pub fn new(
        input: &'io mut dyn BufRead,
        out: &'io mut dyn Write,
        err: &'io mut dyn Write,
    ) -> Self {
        Self {
            input,
            out,
            err,
            color_out: false,
            color_err: false,
            errors: 0,
        }
    }

    /// Enable color per stream.
    #[must_use]
    pub const fn with_color(mut self, out: bool, err: bool) -> Self {
        self.color_out = out;
        self.color_err = err;
        self
    }

    /// Whether stdout output may carry ANSI styling.
    pub const fn color(&self) -> bool {
        self.color_out
    }

    /// Number of `E:` lines written so far.
    pub const fn errors(&self) -> usize {
        self.errors
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn info(&mut self, msg: &str) -> io::Result<()> {
        let prefix = paint("I: ", self.color_out, Color::Green);
        writeln!(self.out, "{prefix}{msg}")
    }

    pub fn warn(&mut self, msg: &str) -> io::Result<()> {
        let prefix = paint("W: ", self.color_err, Color::Magenta);
        writeln!(self.err, "{prefix}{msg}")
    }

    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        self.errors += 1;
        let prefix = paint("E: ", self.color_err, Color::Red);
        writeln!(self.err, "{prefix}{msg}")
    }

    /// Write `prompt` without a newline and read one line.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: Option<&str>) -> io::Result<Option<String>> {
        if let Some(prompt) = prompt {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask a yes/no question on stderr until the answer starts with `y` or
    /// `n`. End of input counts as no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            self.warn(&format!("{question} y/n"))?;
            self.err.flush()?;
            let Some(answer) = self.read_line(None)? else {
                return Ok(false);
            };
            match answer.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                _ => {}
            }
        }
    }

    /// Clear the screen when stdout is a color-capable terminal.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        if !self.color_out {
            return Ok(());
        }
        execute!(
            &mut self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

/// Color `text` when `enabled`; otherwise leave it unstyled.
pub fn paint(text: &str, enabled: bool, color: Color) -> StyledContent<&str> {
    let styled = text.stylize();
    if enabled { styled.with(color) } else { styled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prefixes_route_to_the_right_stream() {
        let mut input = Cursor::new(Vec::new());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut input, &mut out, &mut err);

        console.info("ok").expect("info");
        console.warn("careful").expect("warn");
        console.error("bad").expect("error");
        assert_eq!(console.errors(), 1);
        drop(console);

        assert_eq!(String::from_utf8(out).expect("utf8"), "I: ok\n");
        assert_eq!(
            String::from_utf8(err).expect("utf8"),
            "W: careful\nE: bad\n"
        );
    }

    #[test]
    fn colored_prefix_carries_escape_codes() {
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let mut input = Cursor::new(Vec::new());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut input, &mut out, &mut err).with_color(true, false);
        console.info("ok").expect("info");
        drop(console);

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains('\u{1b}'));
        assert!(text.ends_with("ok\n"));
    }

    #[test]
    fn confirm_retries_until_yes_or_no() {
        let mut input = Cursor::new(b"maybe\n\nYes\n".to_vec());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut input, &mut out, &mut err);
        assert!(console.confirm("Proceed?").expect("confirm"));
        drop(console);

        let asked = String::from_utf8(err).expect("utf8");
        assert_eq!(asked.matches("W: Proceed? y/n").count(), 3);
    }

    #[test]
    fn confirm_treats_eof_as_no() {
        let mut input = Cursor::new(Vec::new());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut input, &mut out, &mut err);
        assert!(!console.confirm("Proceed?").expect("confirm"));
    }

    #[test]
    fn clear_screen_emits_escape_codes_with_color() {
        let mut input = Cursor::new(Vec::new());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut input, &mut out, &mut err).with_color(true, false);
        console.clear_screen().expect("clear");
        drop(console);

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("\u{1b}[2J"), "{text:?}");
        assert!(text.contains("\u{1b}[1;1H"), "{text:?}");
        assert!(err.is_empty());
    }

    #[test]
    fn clear_screen_is_silent_without_color() {
        let mut input = Cursor::new(Vec::new());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut input, &mut out, &mut err);
        console.clear_screen().expect("clear");
        drop(console);
        assert!(out.is_empty());
    }

    #[test]
    fn read_line_writes_prompt() {
        let mut input = Cursor::new(b"tell\n".to_vec());
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut console = Console::new(&mut input, &mut out, &mut err);
        let line = console.read_line(Some("> ")).expect("read");
        assert_eq!(line.as_deref(), Some("tell\n"));
        assert_eq!(console.read_line(Some("> ")).expect("read"), None);
        drop(console);
        assert_eq!(String::from_utf8(out).expect("utf8"), "> > ");
    }
}
