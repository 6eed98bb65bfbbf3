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

//! The interactive menu loop.

use crate::api::LibraryApi;
use crate::cache::SelectionCache;
use crate::console::Console;
use crate::export::{self, ExportError, ExportFormat};
use crate::library::LibraryError;
use crate::models::Track;
use crate::paging;
use crate::prompt;
use crate::theme;
use log::{debug, error};
use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

const RULE_WIDTH: usize = 45;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Console I/O failed: {0}")]
    Console(#[from] io::Error),
}

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAlbums,
    ViewPlaylists,
    ExportAlbum,
    ExportPlaylist,
    ExportLiked,
    Help,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ViewAlbums),
            "2" => Some(MenuChoice::ViewPlaylists),
            "3" => Some(MenuChoice::ExportAlbum),
            "4" => Some(MenuChoice::ExportPlaylist),
            "5" => Some(MenuChoice::ExportLiked),
            "6" => Some(MenuChoice::Help),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// One interactive run: the API client, the console and the cached listings.
pub struct Session<A, C> {
    api: A,
    console: C,
    cache: SelectionCache,
    output_dir: PathBuf,
}

impl<A: LibraryApi, C: Console> Session<A, C> {
    /// Exported files are written to `output_dir`.
    pub fn new(api: A, console: C, output_dir: PathBuf) -> Self {
        Self {
            api,
            console,
            cache: SelectionCache::new(),
            output_dir,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn greet(&mut self, user_name: &str) -> io::Result<()> {
        let line = format!("[+] Авторизация успешна для: {} [+]\n", user_name);
        self.console.write_line(&theme::success(&line).to_string())
    }

    /// Shows the menu and handles choices until the user exits or input ends.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.draw_menu()?;

            let prompt = theme::prompt("Выберите пункт меню: ").to_string();
            let Some(input) = self.console.read_line(&prompt)? else {
                debug!("End of input, leaving the menu");
                return Ok(());
            };
            self.console.clear()?;

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Exit) => {
                    self.console
                        .write_line(&theme::header("Выход из программы.").to_string())?;
                    return Ok(());
                }
                Some(choice) => self.perform(choice).await?,
                None => debug!("Ignoring unknown menu input {:?}", input),
            }

            self.console.clear()?;
        }
    }

    /// Runs one menu action.
    ///
    /// API and export failures are reported on the console and the session
    /// goes on. Console failures are returned.
    pub async fn perform(&mut self, choice: MenuChoice) -> Result<(), SessionError> {
        let result = match choice {
            MenuChoice::ViewAlbums => self.show_albums().await,
            MenuChoice::ViewPlaylists => self.show_playlists().await,
            MenuChoice::ExportAlbum => self.export_album().await,
            MenuChoice::ExportPlaylist => self.export_playlist().await,
            MenuChoice::ExportLiked => self.export_liked().await,
            MenuChoice::Help => return Ok(self.show_help()?),
            MenuChoice::Exit => return Ok(()),
        };

        match result {
            Err(SessionError::Console(e)) => return Err(SessionError::Console(e)),
            Err(e) => {
                error!("{:?} failed: {}", choice, e);
                let line = format!("Ошибка: {}", e);
                self.console.write_line(&theme::error(&line).to_string())?;
            }
            Ok(()) => {}
        }

        self.pause()?;
        Ok(())
    }

    /// Asks for a format and writes `tracks` to
    /// `{category}_{source_name}.{ext}` in the output directory.
    ///
    /// Returns the written path, or `None` when nothing was written.
    pub fn offer_export(
        &mut self,
        tracks: &[Track],
        source_name: &str,
        category: &str,
    ) -> Result<Option<PathBuf>, SessionError> {
        if tracks.is_empty() {
            self.console
                .write_line(&theme::error("Треков для сохранения не найдено.").to_string())?;
            return Ok(None);
        }

        self.console.write_line(&"─".repeat(RULE_WIDTH))?;
        let prompt =
            theme::prompt("Выберите формат для сохранения (txt, csv, xlsx) или Enter для отмены: ")
                .to_string();
        let token = self
            .console
            .read_line(&prompt)?
            .unwrap_or_default()
            .to_lowercase();

        // Only a bare Enter cancels; padded tokens are not formats.
        if token.is_empty() {
            self.console.write_line("Сохранение отменено.")?;
            return Ok(None);
        }
        let Ok(format) = token.parse::<ExportFormat>() else {
            debug!("Unknown export format {:?}", token);
            self.console
                .write_line(&theme::error("Неверный формат. Сохранение отменено.").to_string())?;
            return Ok(None);
        };

        let file_name = export::export_file_name(category, source_name, format);
        let path = self.output_dir.join(&file_name);
        export::export_tracks(tracks, format, &path)?;

        let line = format!("\n[+] Список успешно сохранен в файл: {}", file_name);
        self.console.write_line(&theme::success(&line).to_string())?;
        Ok(Some(path))
    }

    fn draw_menu(&mut self) -> io::Result<()> {
        let lines = [
            theme::banner("╔════════════════════════════════════════════╗"),
            theme::banner("║              Tracklist Export              ║"),
            theme::banner("╚════════════════════════════════════════════╝"),
            theme::section("\n[ ПРОСМОТР СПИСКОВ ]"),
            theme::option("  1. Показать мои сохраненные альбомы"),
            theme::option("  2. Показать мои плейлисты"),
            theme::section("\n[ ВЫГРУЗКА В ФАЙЛ ]"),
            theme::option("  3. Выгрузить треки из альбома"),
            theme::option("  4. Выгрузить треки из плейлиста"),
            theme::option("  5. Выгрузить 'Сохраненные треки' (Liked Songs)"),
            theme::section("\n[ ПРОЧЕЕ ]"),
            theme::option("  6. FAQ / Помощь"),
            theme::option("  0. Выход"),
        ];
        for line in lines {
            self.console.write_line(&line.to_string())?;
        }
        self.console.write_line(&"─".repeat(RULE_WIDTH))
    }

    async fn show_albums(&mut self) -> Result<(), SessionError> {
        if !self.cache.has_albums() {
            self.console
                .write_line(&theme::prompt("Загрузка сохраненных альбомов...").to_string())?;
        }
        let albums = self.cache.albums(&self.api).await?;
        write_listing(
            &mut self.console,
            "--- Ваши сохраненные альбомы ---",
            albums,
            "Сохраненных альбомов не найдено.",
        )?;
        Ok(())
    }

    async fn show_playlists(&mut self) -> Result<(), SessionError> {
        if !self.cache.has_playlists() {
            self.console
                .write_line(&theme::prompt("Загрузка плейлистов...").to_string())?;
        }
        let playlists = self.cache.playlists(&self.api).await?;
        write_listing(
            &mut self.console,
            "--- Ваши плейлисты ---",
            playlists,
            "Плейлистов не найдено.",
        )?;
        Ok(())
    }

    async fn export_album(&mut self) -> Result<(), SessionError> {
        if !self.cache.has_albums() {
            self.console
                .write_line(&theme::prompt("Загрузка сохраненных альбомов...").to_string())?;
        }
        let albums = self.cache.albums(&self.api).await?;
        let Some(album) = prompt::select(&mut self.console, albums, "альбом")?.cloned() else {
            return Ok(());
        };

        let tracks = paging::album_tracks(&self.api, &album.id).await?;
        let line = format!("\n[+] Найдено {} треков в альбоме '{}'.", tracks.len(), album.name);
        self.console.write_line(&theme::success(&line).to_string())?;

        self.offer_export(&tracks, &album.name, "Альбом")?;
        Ok(())
    }

    async fn export_playlist(&mut self) -> Result<(), SessionError> {
        if !self.cache.has_playlists() {
            self.console
                .write_line(&theme::prompt("Загрузка плейлистов...").to_string())?;
        }
        let playlists = self.cache.playlists(&self.api).await?;
        let Some(playlist) = prompt::select(&mut self.console, playlists, "плейлист")?.cloned()
        else {
            return Ok(());
        };

        let tracks = paging::playlist_tracks(&self.api, &playlist.id).await?;
        let line = format!(
            "\n[+] Найдено {} треков в плейлисте '{}'.",
            tracks.len(),
            playlist.name
        );
        self.console.write_line(&theme::success(&line).to_string())?;

        self.offer_export(&tracks, &playlist.name, "Плейлист")?;
        Ok(())
    }

    async fn export_liked(&mut self) -> Result<(), SessionError> {
        self.console
            .write_line(&theme::prompt("Загрузка 'Сохраненных треков'...").to_string())?;
        let tracks = paging::liked_tracks(&self.api).await?;

        let line = format!("\n[+] Найдено {} сохраненных треков.", tracks.len());
        self.console.write_line(&theme::success(&line).to_string())?;

        self.offer_export(&tracks, "Liked_Songs", "Сохраненные")?;
        Ok(())
    }

    fn show_help(&mut self) -> io::Result<()> {
        self.console.clear()?;
        let lines = [
            theme::header("╔════════════════════════════════════════════╗"),
            theme::header("║                FAQ / Помощь                ║"),
            theme::header("╚════════════════════════════════════════════╝"),
            theme::prompt("\nQ: Что делает эта программа?"),
            theme::option("A: Подключается к вашему аккаунту Spotify и выгружает списки"),
            theme::option("   треков из альбомов, плейлистов и 'Сохраненных треков'"),
            theme::option("   в файлы .txt, .csv или .xlsx."),
            theme::prompt("\nQ: Куда сохраняются файлы?"),
            theme::option("A: В папку, из которой запущена программа."),
            theme::prompt("\nQ: Как обновить списки альбомов и плейлистов?"),
            theme::option("A: Списки загружаются один раз за сеанс. Перезапустите"),
            theme::option("   программу, чтобы получить свежие данные."),
        ];
        for line in lines {
            self.console.write_line(&line.to_string())?;
        }
        self.pause()
    }

    fn pause(&mut self) -> io::Result<()> {
        let prompt = theme::prompt("\nНажмите Enter, чтобы вернуться в меню...").to_string();
        self.console.read_line(&prompt)?;
        Ok(())
    }
}

fn write_listing<C: Console + ?Sized, T: Display>(
    console: &mut C,
    title: &str,
    items: &[T],
    empty_message: &str,
) -> io::Result<()> {
    console.write_line(&theme::header(title).to_string())?;
    if items.is_empty() {
        return console.write_line(empty_message);
    }
    for (i, item) in items.iter().enumerate() {
        console.write_line(&format!("{}. {}", i + 1, item))?;
    }
    Ok(())
}
