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

//! Offset/limit pagination over the listing endpoints of [`LibraryApi`].

use crate::api::{IntoRecord, LibraryApi, Page};
use crate::library::LibraryError;
use crate::models::{Album, Playlist, Track};
use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use std::future::Future;

/// Items requested per call. The Web API caps most listings at 50.
pub const PAGE_SIZE: u32 = 50;

/// Lazily walks a listing, yielding the items of each page in order.
///
/// `fetch_page` is called with `(limit, offset)`. The offset advances by the
/// number of items received. The stream ends at the first empty page or at
/// the first page without a next link, whichever comes first.
pub fn pages<T, F, Fut>(
    page_size: u32,
    fetch_page: F,
) -> impl Stream<Item = Result<Vec<T>, LibraryError>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, LibraryError>>,
{
    stream::try_unfold((fetch_page, Some(0u32)), move |(fetch_page, cursor)| {
        next_page(fetch_page, cursor, page_size)
    })
}

async fn next_page<T, F, Fut>(
    mut fetch_page: F,
    cursor: Option<u32>,
    page_size: u32,
) -> Result<Option<(Vec<T>, (F, Option<u32>))>, LibraryError>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, LibraryError>>,
{
    let Some(offset) = cursor else {
        return Ok(None);
    };

    let page = fetch_page(page_size, offset).await?;
    debug!("Fetched page at offset {}: {} items", offset, page.items.len());

    if page.items.is_empty() {
        return Ok(None);
    }

    let next = if page.has_next() {
        Some(offset + page.items.len() as u32)
    } else {
        None
    };
    Ok(Some((page.items, (fetch_page, next))))
}

/// Collects every page of a listing into flat records, skipping items that
/// have nothing to project.
pub async fn fetch_all<T, F, Fut>(
    page_size: u32,
    fetch_page: F,
) -> Result<Vec<T::Record>, LibraryError>
where
    T: IntoRecord,
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, LibraryError>>,
{
    pages(page_size, fetch_page)
        .try_fold(Vec::new(), |mut records, items| async move {
            records.extend(items.into_iter().filter_map(IntoRecord::into_record));
            Ok::<_, LibraryError>(records)
        })
        .await
}

pub async fn saved_albums<A: LibraryApi + ?Sized>(api: &A) -> Result<Vec<Album>, LibraryError> {
    fetch_all(PAGE_SIZE, |limit, offset| api.saved_albums_page(limit, offset)).await
}

pub async fn playlists<A: LibraryApi + ?Sized>(api: &A) -> Result<Vec<Playlist>, LibraryError> {
    fetch_all(PAGE_SIZE, |limit, offset| api.playlists_page(limit, offset)).await
}

pub async fn album_tracks<A: LibraryApi + ?Sized>(
    api: &A,
    album_id: &str,
) -> Result<Vec<Track>, LibraryError> {
    fetch_all(PAGE_SIZE, |limit, offset| {
        api.album_tracks_page(album_id, limit, offset)
    })
    .await
}

pub async fn playlist_tracks<A: LibraryApi + ?Sized>(
    api: &A,
    playlist_id: &str,
) -> Result<Vec<Track>, LibraryError> {
    fetch_all(PAGE_SIZE, |limit, offset| {
        api.playlist_tracks_page(playlist_id, limit, offset)
    })
    .await
}

pub async fn liked_tracks<A: LibraryApi + ?Sized>(api: &A) -> Result<Vec<Track>, LibraryError> {
    fetch_all(PAGE_SIZE, |limit, offset| api.liked_tracks_page(limit, offset)).await
}
