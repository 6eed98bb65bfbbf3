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

//! The seam between the session and the remote catalog.
//!
//! Implementations return one raw page per call. Turning pages into flat
//! records is the job of [`crate::paging`].

use crate::library::LibraryError;
use crate::models::{Album, Playlist, Track};
use async_trait::async_trait;

/// One page of a listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>, // Link to the following page, if the API has one
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Album entry of the saved-albums listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumItem {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
}

/// Playlist entry of the user's playlists listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItem {
    pub id: String,
    pub name: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackItem {
    pub name: String,
    pub artists: Vec<String>,
}

/// Wrapper used by playlist and saved-track listings, where the track
/// itself may be gone (deleted, unavailable, or not a track at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub track: Option<TrackItem>,
}

/// Projection of a raw page item into its flat record.
///
/// Returns `None` when the item has nothing to project.
pub trait IntoRecord {
    type Record;

    fn into_record(self) -> Option<Self::Record>;
}

impl IntoRecord for AlbumItem {
    type Record = Album;

    fn into_record(self) -> Option<Album> {
        Some(Album {
            id: self.id,
            name: self.name,
            artist: self.artists.join(", "),
        })
    }
}

impl IntoRecord for PlaylistItem {
    type Record = Playlist;

    fn into_record(self) -> Option<Playlist> {
        Some(Playlist {
            id: self.id,
            name: self.name,
            owner: self.owner,
        })
    }
}

impl IntoRecord for TrackItem {
    type Record = Track;

    fn into_record(self) -> Option<Track> {
        Some(Track {
            name: self.name,
            artist: self.artists.join(", "),
        })
    }
}

impl IntoRecord for TrackEntry {
    type Record = Track;

    fn into_record(self) -> Option<Track> {
        self.track.and_then(IntoRecord::into_record)
    }
}

/// Read access to a user's music library.
#[async_trait]
pub trait LibraryApi: Send + Sync {
    /// Display name of the authenticated user.
    async fn current_user_name(&self) -> Result<String, LibraryError>;

    async fn saved_albums_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<AlbumItem>, LibraryError>;

    async fn playlists_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<PlaylistItem>, LibraryError>;

    async fn album_tracks_page(
        &self,
        album_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<TrackItem>, LibraryError>;

    async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<TrackEntry>, LibraryError>;

    async fn liked_tracks_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<TrackEntry>, LibraryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, artists: &[&str]) -> TrackItem {
        TrackItem {
            name: name.to_string(),
            artists: artists.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_track_artists_are_comma_joined() {
        let record = track("Under Pressure", &["Queen", "David Bowie"])
            .into_record()
            .unwrap();

        assert_eq!(record.name, "Under Pressure");
        assert_eq!(record.artist, "Queen, David Bowie");
    }

    #[test]
    fn test_empty_entry_projects_to_nothing() {
        let entry = TrackEntry { track: None };
        assert!(entry.into_record().is_none());

        let entry = TrackEntry {
            track: Some(track("Solo", &["Someone"])),
        };
        assert_eq!(entry.into_record().unwrap().artist, "Someone");
    }

    #[test]
    fn test_album_item_keeps_id() {
        let item = AlbumItem {
            id: "4aawyAB9vmqN3uQ7FjRGTy".to_string(),
            name: "Global Warming".to_string(),
            artists: vec!["Pitbull".to_string()],
        };

        let album = item.into_record().unwrap();
        assert_eq!(album.id, "4aawyAB9vmqN3uQ7FjRGTy");
        assert_eq!(album.artist, "Pitbull");
    }
}
