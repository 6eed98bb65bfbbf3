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

use clap::Parser;
use dotenvy::dotenv;
use std::env;
use std::process;
use tracklist_core::{
    get_spotify_client, theme, Console, LibraryApi, Session, SpotifyLibrary, Terminal,
};

/// Interactive exporter for the track listings of your Spotify albums,
/// playlists and Liked Songs (.txt, .csv, .xlsx).
#[derive(Parser)]
#[command(name = "tracklist", version, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    if dotenv().is_err() {
        // Silently ignore
    }

    let _cli = Cli::parse();

    let mut terminal = Terminal::new();
    terminal.clear()?;
    terminal.write_line(&theme::prompt("Подключение к Spotify...").to_string())?;

    let library = connect().await;
    let user_name = match library.current_user_name().await {
        Ok(name) => name,
        Err(e) => auth_failed(e),
    };

    let output_dir = env::current_dir()?;
    log::info!("Writing exports to {}", output_dir.display());

    terminal.clear()?;
    let mut session = Session::new(library, terminal, output_dir);
    session.greet(&user_name)?;
    session.run().await?;

    Ok(())
}

async fn connect() -> SpotifyLibrary {
    match get_spotify_client().await {
        Ok(spotify) => SpotifyLibrary::new(spotify),
        Err(e) => auth_failed(e),
    }
}

fn auth_failed(e: impl std::fmt::Display) -> ! {
    eprintln!("{}", theme::error(&format!("Ошибка авторизации: {}", e)));
    process::exit(1);
}
