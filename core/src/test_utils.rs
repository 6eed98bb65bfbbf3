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

//! Fakes shared by the unit tests.

use crate::api::{AlbumItem, LibraryApi, Page, PlaylistItem, TrackEntry, TrackItem};
use crate::console::Console;
use crate::library::LibraryError;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

/// In-memory [`LibraryApi`] serving pre-built pages and recording every call.
#[derive(Default)]
pub struct MockLibrary {
    pub user: String,
    pub albums: Vec<Vec<AlbumItem>>,
    pub playlists: Vec<Vec<PlaylistItem>>,
    pub album_tracks: HashMap<String, Vec<Vec<TrackItem>>>,
    pub playlist_tracks: HashMap<String, Vec<Vec<TrackEntry>>>,
    pub liked: Vec<Vec<TrackEntry>>,
    /// Every call fails with [`LibraryError::InvalidId`].
    pub fail: bool,
    /// `(endpoint, offset)` of every page request.
    pub log: Mutex<Vec<(&'static str, u32)>>,
}

impl MockLibrary {
    pub fn with_album_tracks(mut self, album_id: &str, pages: Vec<Vec<TrackItem>>) -> Self {
        self.album_tracks.insert(album_id.to_string(), pages);
        self
    }

    pub fn with_playlist_tracks(
        mut self,
        playlist_id: &str,
        pages: Vec<Vec<TrackEntry>>,
    ) -> Self {
        self.playlist_tracks.insert(playlist_id.to_string(), pages);
        self
    }

    /// Number of page requests made to `endpoint`.
    pub fn calls(&self, endpoint: &str) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| *name == endpoint)
            .count()
    }

    /// Offsets requested from `endpoint`, in call order.
    pub fn offsets(&self, endpoint: &str) -> Vec<u32> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| *name == endpoint)
            .map(|(_, offset)| *offset)
            .collect()
    }

    fn serve<T: Clone>(
        &self,
        endpoint: &'static str,
        pages: &[Vec<T>],
        offset: u32,
    ) -> Result<Page<T>, LibraryError> {
        self.log.lock().unwrap().push((endpoint, offset));
        if self.fail {
            return Err(LibraryError::InvalidId(endpoint.to_string()));
        }

        let mut start = 0u32;
        for (i, items) in pages.iter().enumerate() {
            if start == offset {
                let next = (i + 1 < pages.len())
                    .then(|| format!("{endpoint}?offset={}", offset + items.len() as u32));
                return Ok(Page {
                    items: items.clone(),
                    next,
                });
            }
            start += items.len() as u32;
        }

        Ok(Page {
            items: Vec::new(),
            next: None,
        })
    }
}

#[async_trait]
impl LibraryApi for MockLibrary {
    async fn current_user_name(&self) -> Result<String, LibraryError> {
        Ok(self.user.clone())
    }

    async fn saved_albums_page(
        &self,
        _limit: u32,
        offset: u32,
    ) -> Result<Page<AlbumItem>, LibraryError> {
        self.serve("saved_albums", &self.albums, offset)
    }

    async fn playlists_page(
        &self,
        _limit: u32,
        offset: u32,
    ) -> Result<Page<PlaylistItem>, LibraryError> {
        self.serve("playlists", &self.playlists, offset)
    }

    async fn album_tracks_page(
        &self,
        album_id: &str,
        _limit: u32,
        offset: u32,
    ) -> Result<Page<TrackItem>, LibraryError> {
        let pages = self
            .album_tracks
            .get(album_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        self.serve("album_tracks", pages, offset)
    }

    async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        _limit: u32,
        offset: u32,
    ) -> Result<Page<TrackEntry>, LibraryError> {
        let pages = self
            .playlist_tracks
            .get(playlist_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        self.serve("playlist_tracks", pages, offset)
    }

    async fn liked_tracks_page(
        &self,
        _limit: u32,
        offset: u32,
    ) -> Result<Page<TrackEntry>, LibraryError> {
        self.serve("liked_tracks", &self.liked, offset)
    }
}

/// `count` albums with ids `album-{start}` onwards.
pub fn album_items(start: usize, count: usize) -> Vec<AlbumItem> {
    (start..start + count)
        .map(|i| AlbumItem {
            id: format!("album-{i}"),
            name: format!("Album {i}"),
            artists: vec![format!("Artist {i}")],
        })
        .collect()
}

pub fn album_item(id: &str, name: &str, artist: &str) -> AlbumItem {
    AlbumItem {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![artist.to_string()],
    }
}

pub fn playlist_item(id: &str, name: &str, owner: &str) -> PlaylistItem {
    PlaylistItem {
        id: id.to_string(),
        name: name.to_string(),
        owner: owner.to_string(),
    }
}

pub fn track_item(name: &str, artists: &[&str]) -> TrackItem {
    TrackItem {
        name: name.to_string(),
        artists: artists.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn entry(name: &str, artists: &[&str]) -> TrackEntry {
    TrackEntry {
        track: Some(track_item(name, artists)),
    }
}

/// [`Console`] fed from a queue of input lines. Prompts and output are
/// captured in `lines`; an exhausted queue reads as end of input.
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub lines: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }

    /// How many captured lines contain `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.lines.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
