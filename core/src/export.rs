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

//! Writing track listings to `.txt`, `.csv` and `.xlsx` files.

use crate::models::Track;
use log::info;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use strum::EnumString;
use thiserror::Error;

/// Column titles shared by the CSV and spreadsheet formats.
pub const HEADER: [&str; 3] = ["#", "Название трека", "Исполнитель"];

pub const SHEET_NAME: &str = "Треклист";

/// Characters that may not appear in an exported file name.
const FORBIDDEN_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

const MAX_FILE_NAME_CHARS: usize = 100;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("No tracks to export")]
    NothingToExport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Txt,
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Makes `name` safe to use as a file name: drops reserved characters,
/// turns spaces into underscores and keeps at most 100 characters.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .take(MAX_FILE_NAME_CHARS)
        .collect()
}

/// `{category}_{source}` sanitized, plus the format's extension.
pub fn export_file_name(category: &str, source_name: &str, format: ExportFormat) -> String {
    let base = sanitize_filename(&format!("{}_{}", category, source_name));
    format!("{}.{}", base, format.extension())
}

/// Writes `tracks` to `path` in the given format.
///
/// Refuses to create a file when there is nothing to write.
pub fn export_tracks(
    tracks: &[Track],
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    if tracks.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    match format {
        ExportFormat::Txt => {
            let mut out = BufWriter::new(File::create(path)?);
            write_text(tracks, &mut out)?;
            out.flush()?;
        }
        ExportFormat::Csv => write_csv(tracks, File::create(path)?)?,
        ExportFormat::Xlsx => write_xlsx(tracks, path)?,
    }

    info!("Exported {} tracks to {}", tracks.len(), path.display());
    Ok(())
}

/// One `N. name - artist` line per track.
pub fn write_text<W: Write>(tracks: &[Track], out: &mut W) -> io::Result<()> {
    for (i, track) in tracks.iter().enumerate() {
        writeln!(out, "{}. {} - {}", i + 1, track.name, track.artist)?;
    }
    Ok(())
}

/// A data row of the CSV listing, in [`HEADER`] column order.
#[derive(Serialize)]
struct CsvRow<'a> {
    position: usize,
    name: &'a str,
    artist: &'a str,
}

/// Header plus one row per track, CRLF-terminated and quoted only where needed.
pub fn write_csv<W: Write>(tracks: &[Track], out: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);
    writer.write_record(HEADER)?;
    for (i, track) in tracks.iter().enumerate() {
        writer.serialize(CsvRow {
            position: i + 1,
            name: &track.name,
            artist: &track.artist,
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_xlsx(tracks: &[Track], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }
    for (i, track) in tracks.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_number(row, 0, row)?;
        worksheet.write_string(row, 1, &track.name)?;
        worksheet.write_string(row, 2, &track.artist)?;
    }
    for (col, width) in column_widths(tracks).into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Width of each spreadsheet column: its longest value in characters,
/// header included, plus two.
pub fn column_widths(tracks: &[Track]) -> [usize; 3] {
    let mut widths = HEADER.map(|title| title.chars().count());
    for (i, track) in tracks.iter().enumerate() {
        let cells = [
            (i + 1).to_string().len(),
            track.name.chars().count(),
            track.artist.chars().count(),
        ];
        for (width, len) in widths.iter_mut().zip(cells) {
            *width = (*width).max(len);
        }
    }
    widths.map(|w| w + 2)
}
