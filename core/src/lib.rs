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

pub mod api;
pub mod auth;
pub mod cache;
pub mod console;
pub mod export;
pub mod library;
pub mod models;
pub mod paging;
pub mod prompt;
pub mod session;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export key items for convenience
pub use api::LibraryApi;
pub use auth::get_spotify_client;
pub use console::{Console, Terminal};
pub use export::ExportFormat;
pub use library::SpotifyLibrary;
pub use models::{Album, Playlist, Track};
pub use session::Session;
