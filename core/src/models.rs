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

use std::fmt;

/// A single exported track line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String, // Comma-joined artist names
}

/// An album saved in the user's library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artist: String,
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.artist)
    }
}

/// A playlist owned or followed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: String,
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Владелец: {})", self.name, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_display_shows_artist() {
        let album = Album {
            id: "1".to_string(),
            name: "Kid A".to_string(),
            artist: "Radiohead".to_string(),
        };

        assert_eq!(format!("{}", album), "Kid A - Radiohead");
    }

    #[test]
    fn test_playlist_display_shows_owner() {
        let playlist = Playlist {
            id: "2".to_string(),
            name: "Road Trip".to_string(),
            owner: "alice".to_string(),
        };

        let display = format!("{}", playlist);
        assert!(display.starts_with("Road Trip"));
        assert!(display.contains("(Владелец: alice)"));
    }
}
