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

use log::debug;
use rspotify::{prelude::*, AuthCodeSpotify, Config, Credentials, OAuth};
use thiserror::Error;

/// The exporter only reads the library, so these are all it asks for.
pub const READ_SCOPES: [&str; 2] = ["user-library-read", "playlist-read-private"];

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to initialize Spotify client: {0}")]
    ClientConfig(String),
    #[error("Spotify authentication failed: {0}")]
    Spotify(#[from] rspotify::ClientError),
}

/// Client for the given app credentials with read-only scopes and an
/// on-disk, self-refreshing token. Nothing is requested from Spotify yet.
pub fn build_client(creds: Credentials, redirect_uri: &str) -> AuthCodeSpotify {
    let oauth = OAuth {
        redirect_uri: redirect_uri.to_string(),
        scopes: READ_SCOPES.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    let config = Config {
        token_cached: true,
        token_refreshing: true,
        ..Default::default()
    };
    AuthCodeSpotify::with_config(creds, oauth, config)
}

/// Connects to the account whose library will be exported.
///
/// App credentials and the redirect URI are read from the `RSPOTIFY_*`
/// environment variables (a `.env` file is honoured). A cached token is
/// reused when present; otherwise the browser is opened on the consent page
/// and the redirect URL is pasted back on the console.
pub async fn get_spotify_client() -> Result<AuthCodeSpotify, AuthError> {
    let creds = Credentials::from_env().ok_or_else(|| {
        AuthError::ClientConfig("Missing RSPOTIFY_CLIENT_ID or RSPOTIFY_CLIENT_SECRET".to_string())
    })?;
    let redirect_uri = std::env::var("RSPOTIFY_REDIRECT_URI")
        .map_err(|_| AuthError::ClientConfig("Missing RSPOTIFY_REDIRECT_URI".to_string()))?;

    let spotify = build_client(creds, &redirect_uri);
    debug!("Authorizing with scopes {:?}", READ_SCOPES);

    let url = spotify.get_authorize_url(false)?;
    spotify.prompt_for_token(&url).await?;

    Ok(spotify)
}
