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

//! Colours used on screen.

use colored::{ColoredString, Colorize};

pub fn banner(text: &str) -> ColoredString {
    text.cyan().bold()
}

pub fn header(text: &str) -> ColoredString {
    text.yellow().bold()
}

pub fn section(text: &str) -> ColoredString {
    text.magenta()
}

pub fn option(text: &str) -> ColoredString {
    text.white()
}

pub fn prompt(text: &str) -> ColoredString {
    text.yellow()
}

pub fn success(text: &str) -> ColoredString {
    text.green().bold()
}

pub fn error(text: &str) -> ColoredString {
    text.red()
}
