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

use crate::console::Console;
use crate::theme;
use std::fmt::Display;
use std::io;
use std::num::IntErrorKind;

/// Lets the user pick one of `items` by its 1-based number.
///
/// An empty line (or end of input) cancels and yields `None`. Anything else,
/// a line of spaces included, must be a number in range; otherwise the error
/// is reported and the question asked again.
pub fn select<'a, T, C>(
    console: &mut C,
    items: &'a [T],
    label: &str,
) -> io::Result<Option<&'a T>>
where
    T: Display,
    C: Console + ?Sized,
{
    let title = format!("--- Выберите {} для выгрузки треков ---", label);
    console.write_line(&theme::header(&title).to_string())?;

    for (i, item) in items.iter().enumerate() {
        console.write_line(&theme::option(&format!("{}. {}", i + 1, item)).to_string())?;
    }

    let prompt =
        theme::prompt("\nВведите номер из списка (или просто Enter для отмены): ").to_string();
    loop {
        let input = match console.read_line(&prompt)? {
            Some(line) if !line.is_empty() => line,
            _ => {
                console.write_line("\nОтмена операции.")?;
                return Ok(None);
            }
        };

        // Numbers too large for i64 are still numbers, just not in the list.
        let number = input.trim().parse::<i64>().map(Some).or_else(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Ok(None),
            _ => Err(e),
        });

        match number {
            Ok(Some(n)) if n >= 1 && n as usize <= items.len() => {
                return Ok(Some(&items[n as usize - 1]));
            }
            Ok(_) => console.write_line(
                &theme::error("Ошибка: Такого номера нет в списке. Попробуйте еще раз.").to_string(),
            )?,
            Err(_) => console.write_line(
                &theme::error("Ошибка: Введите число, а не текст. Попробуйте еще раз.").to_string(),
            )?,
        }
    }
}
