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

//! Session-lifetime cache for the album and playlist listings.
//!
//! Each listing is fetched on first use and kept until the process exits.
//! Track listings are never cached.

use crate::api::LibraryApi;
use crate::library::LibraryError;
use crate::models::{Album, Playlist};
use crate::paging;
use log::debug;

#[derive(Debug, Default)]
pub struct SelectionCache {
    albums: Option<Vec<Album>>,
    playlists: Option<Vec<Playlist>>,
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_albums(&self) -> bool {
        self.albums.is_some()
    }

    pub fn has_playlists(&self) -> bool {
        self.playlists.is_some()
    }

    pub async fn albums<A: LibraryApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> Result<&[Album], LibraryError> {
        if self.albums.is_none() {
            let albums = paging::saved_albums(api).await?;
            debug!("Cached {} saved albums", albums.len());
            self.albums = Some(albums);
        }
        Ok(self.albums.as_deref().unwrap_or_default())
    }

    pub async fn playlists<A: LibraryApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> Result<&[Playlist], LibraryError> {
        if self.playlists.is_none() {
            let playlists = paging::playlists(api).await?;
            debug!("Cached {} playlists", playlists.len());
            self.playlists = Some(playlists);
        }
        Ok(self.playlists.as_deref().unwrap_or_default())
    }
}
