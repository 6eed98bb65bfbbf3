/*
    tracklist-export | Rust CLI tool to export Spotify track listings to files.
    Copyright (C) 2025  Israel Alberto Roldan Vega

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Line-oriented terminal I/O.

use std::io::{self, BufRead, Write};

/// Minimal interactive surface used by the menu and prompts.
pub trait Console {
    /// Shows `prompt` and reads one line without its line terminator.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;
}

/// Reads one line from `reader` without its terminator, or `None` at end of
/// input. Bytes that are not valid UTF-8 become U+FFFD instead of failing
/// the read, so bad input reaches the prompt that asked for it.
pub fn read_line_lossy<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// [`Console`] over the process's stdin and stdout.
pub struct Terminal {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut out = self.stdout.lock();
        write!(out, "{}", prompt)?;
        out.flush()?;

        read_line_lossy(&mut self.stdin.lock())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout.lock(), "{}", line)
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut out = self.stdout.lock();
        write!(out, "\x1B[2J\x1B[1;1H")?;
        out.flush()
    }
}
