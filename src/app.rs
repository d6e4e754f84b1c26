// std imports
use std::io::{BufRead, Write};

// third-party imports
use wildcard::Pattern;

// local imports
use crate::error::Result;

// ---

pub struct Options {
    pub pattern: Pattern,
    pub invert: bool,
    pub count: bool,
}

/// Selects texts matching a wildcard pattern.
pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Filters the given texts, returns `true` if any text was selected.
    pub fn run<I, S, W>(&self, texts: I, output: &mut W) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let mut selected = 0;
        for text in texts {
            selected += self.process(text.as_ref(), output)? as usize;
        }
        self.finish(selected, output)
    }

    /// Filters lines of the input, returns `true` if any line was selected.
    ///
    /// Line terminators are not part of the matched text. Invalid UTF-8 sequences are
    /// replaced with U+FFFD before matching.
    pub fn run_lines<R, W>(&self, mut input: R, output: &mut W) -> Result<bool>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        let mut selected = 0;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = strip_line_ending(&buf);
            let text = String::from_utf8_lossy(line);
            selected += self.process(&text, output)? as usize;
        }
        self.finish(selected, output)
    }

    fn process<W: Write + ?Sized>(&self, text: &str, output: &mut W) -> Result<bool> {
        let selected = self.options.pattern.matches(text) != self.options.invert;
        if selected && !self.options.count {
            output.write_all(text.as_bytes())?;
            output.write_all(b"\n")?;
        }
        Ok(selected)
    }

    fn finish<W: Write + ?Sized>(&self, selected: usize, output: &mut W) -> Result<bool> {
        log::debug!("selected {} texts", selected);
        if self.options.count {
            writeln!(output, "{}", selected)?;
        }
        output.flush()?;
        Ok(selected != 0)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}
