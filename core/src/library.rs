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

use crate::api::{AlbumItem, LibraryApi, Page, PlaylistItem, TrackEntry, TrackItem};
use async_trait::async_trait;
use log::debug;
use rspotify::{
    model::{
        AlbumId, FullTrack, Market, PlayableItem, PlaylistId, SavedAlbum, SavedTrack,
        SimplifiedArtist, SimplifiedPlaylist, SimplifiedTrack,
    },
    prelude::*,
    AuthCodeSpotify,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Spotify API error: {0}")]
    Spotify(#[from] rspotify::ClientError),
    #[error("Invalid Spotify ID: {0}")]
    InvalidId(String),
}

/// [`LibraryApi`] backed by an authenticated rspotify client.
pub struct SpotifyLibrary {
    spotify: AuthCodeSpotify,
}

impl SpotifyLibrary {
    pub fn new(spotify: AuthCodeSpotify) -> Self {
        Self { spotify }
    }
}

fn artist_names(artists: &[SimplifiedArtist]) -> Vec<String> {
    artists.iter().map(|a| a.name.clone()).collect()
}

fn convert_page<T, U: From<T>>(page: rspotify::model::Page<T>) -> Page<U> {
    Page {
        items: page.items.into_iter().map(U::from).collect(),
        next: page.next,
    }
}

impl From<SavedAlbum> for AlbumItem {
    fn from(saved: SavedAlbum) -> Self {
        let album = saved.album;
        AlbumItem {
            id: album.id.id().to_owned(),
            artists: artist_names(&album.artists),
            name: album.name,
        }
    }
}

impl From<SimplifiedPlaylist> for PlaylistItem {
    fn from(pl: SimplifiedPlaylist) -> Self {
        let owner = pl
            .owner
            .display_name
            .unwrap_or_else(|| pl.owner.id.id().to_owned());

        PlaylistItem {
            id: pl.id.id().to_owned(),
            name: pl.name,
            owner,
        }
    }
}

impl From<SimplifiedTrack> for TrackItem {
    fn from(track: SimplifiedTrack) -> Self {
        TrackItem {
            artists: artist_names(&track.artists),
            name: track.name,
        }
    }
}

impl From<FullTrack> for TrackItem {
    fn from(track: FullTrack) -> Self {
        TrackItem {
            artists: artist_names(&track.artists),
            name: track.name,
        }
    }
}

impl From<rspotify::model::PlaylistItem> for TrackEntry {
    fn from(item: rspotify::model::PlaylistItem) -> Self {
        // Episodes and removed tracks carry no track payload.
        let track = match item.track {
            Some(PlayableItem::Track(track)) => Some(TrackItem::from(track)),
            _ => None,
        };
        TrackEntry { track }
    }
}

impl From<SavedTrack> for TrackEntry {
    fn from(saved: SavedTrack) -> Self {
        TrackEntry {
            track: Some(TrackItem::from(saved.track)),
        }
    }
}

#[async_trait]
impl LibraryApi for SpotifyLibrary {
    async fn current_user_name(&self) -> Result<String, LibraryError> {
        let user = self.spotify.me().await?;
        debug!("Authenticated as user: {:?}", user.display_name);
        Ok(user.display_name.unwrap_or_else(|| user.id.id().to_owned()))
    }

    async fn saved_albums_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<AlbumItem>, LibraryError> {
        let page = self
            .spotify
            .current_user_saved_albums_manual(None, Some(limit), Some(offset))
            .await?;
        Ok(convert_page(page))
    }

    async fn playlists_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<PlaylistItem>, LibraryError> {
        let page = self
            .spotify
            .current_user_playlists_manual(Some(limit), Some(offset))
            .await?;
        Ok(convert_page(page))
    }

    async fn album_tracks_page(
        &self,
        album_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<TrackItem>, LibraryError> {
        let album_id =
            AlbumId::from_id(album_id).map_err(|_| LibraryError::InvalidId(album_id.to_string()))?;

        let page = self
            .spotify
            .album_track_manual(album_id, None, Some(limit), Some(offset))
            .await?;
        Ok(convert_page(page))
    }

    async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<TrackEntry>, LibraryError> {
        let playlist_id = PlaylistId::from_id(playlist_id)
            .map_err(|_| LibraryError::InvalidId(playlist_id.to_string()))?;

        let page = self
            .spotify
            .playlist_items_manual(
                playlist_id,
                None,
                Some(Market::FromToken),
                Some(limit),
                Some(offset),
            )
            .await?;
        Ok(convert_page(page))
    }

    async fn liked_tracks_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<TrackEntry>, LibraryError> {
        let page = self
            .spotify
            .current_user_saved_tracks_manual(None, Some(limit), Some(offset))
            .await?;
        Ok(convert_page(page))
    }
}
