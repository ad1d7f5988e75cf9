// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery for the floating action layer.
//!
//! Run with `cargo run --example gallery`. Structural toggles are
//! persisted to a `gallery.toml` under the platform config directory.

use std::time::Instant;

use env_logger::{Builder, Target};
use iced::widget::{checkbox, container, scrollable, svg, text, text_input, Column, Stack};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use iced_fab::{Action, Event, FloatingAction, Message as FabMessage, Options, Position};
use log::LevelFilter;

const SHARE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#f5f5f5" d="M18 16.1a3 3 0 0 0-2.1.9l-7-4.1a3 3 0 0 0 0-1.8l7-4.1a3 3 0 1 0-1-1.7l-7 4.1a3 3 0 1 0 0 5.2l7 4.2a3 3 0 1 0 3.1-2.7z"/></svg>"##;

const EDIT_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="#f5f5f5" d="M3 17.2V21h3.8L17.9 9.9l-3.8-3.8L3 17.2zM20.7 7.1a1 1 0 0 0 0-1.4l-2.4-2.4a1 1 0 0 0-1.4 0l-1.8 1.8 3.8 3.8 1.8-1.8z"/></svg>"##;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("iced_fab", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        init_logger();
    }

    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .title(|_: &Gallery| String::from("iced_fab gallery"))
        .theme(|_: &Gallery| Theme::Dark)
        .window(window::Settings {
            size: Size::new(420.0, 760.0),
            min_size: Some(Size::new(320.0, 480.0)),
            ..window::Settings::default()
        })
        .subscription(Gallery::subscription)
        .run()
}

struct Gallery {
    fab: FloatingAction,
    settings: settings::Settings,
    note: String,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    Fab(FabMessage),
    VerticalToggled(bool),
    AnchorLeftToggled(bool),
    OverlayToggled(bool),
    HiddenToggled(bool),
    NoteChanged(String),
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        let settings = settings::load();
        let fab = FloatingAction::new(Self::options(&settings), Instant::now());

        (
            Self {
                fab,
                settings,
                note: String::new(),
                status: String::from("Press the round button"),
            },
            Task::none(),
        )
    }

    fn options(settings: &settings::Settings) -> Options {
        Options::new()
            .actions([
                Action::new("share").icon(svg::Handle::from_memory(SHARE_SVG)),
                Action::new("edit").icon(svg::Handle::from_memory(EDIT_SVG)),
                Action::new("star").icon('★'),
                Action::new("blank"),
            ])
            .vertical(settings.vertical)
            .position(if settings.anchor_left {
                Position::Left
            } else {
                Position::Right
            })
            .hide_overlay(settings.hide_overlay)
            .dismiss_keyboard_on_press(true)
    }

    /// Structural options are fixed at construction, so toggling one
    /// rebuilds the layer in its closed state.
    fn rebuild_fab(&mut self) {
        self.fab = FloatingAction::new(Self::options(&self.settings), Instant::now());
    }

    fn persist(&self) {
        if let Err(error) = settings::save(&self.settings) {
            log::warn!("Could not save gallery settings: {error}");
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Fab(message) => {
                let (event, task) = self.fab.update(message, Instant::now());

                match event {
                    Event::MainPressed(intent) => {
                        self.status = format!("Main pressed: {intent:?}");
                    }
                    Event::ItemPressed(key) => {
                        self.status = format!("Item pressed: {key}");
                    }
                    Event::None => {}
                }

                task.map(Message::Fab)
            }
            Message::VerticalToggled(vertical) => {
                self.settings.vertical = vertical;
                self.persist();
                self.rebuild_fab();
                Task::none()
            }
            Message::AnchorLeftToggled(anchor_left) => {
                self.settings.anchor_left = anchor_left;
                self.persist();
                self.rebuild_fab();
                Task::none()
            }
            Message::OverlayToggled(hide_overlay) => {
                self.settings.hide_overlay = hide_overlay;
                self.persist();
                self.rebuild_fab();
                Task::none()
            }
            Message::HiddenToggled(hidden) => {
                self.fab.set_hidden(hidden, Instant::now());
                Task::none()
            }
            Message::NoteChanged(note) => {
                self.note = note;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Column::new()
            .spacing(10)
            .push(text("iced_fab gallery").size(24))
            .push(
                checkbox(self.settings.vertical)
                    .label("Vertical strip")
                    .on_toggle(Message::VerticalToggled),
            )
            .push(
                checkbox(self.settings.anchor_left)
                    .label("Anchor left")
                    .on_toggle(Message::AnchorLeftToggled),
            )
            .push(
                checkbox(self.settings.hide_overlay)
                    .label("Hide dim overlay")
                    .on_toggle(Message::OverlayToggled),
            )
            .push(
                checkbox(self.fab.is_hidden())
                    .label("Hidden")
                    .on_toggle(Message::HiddenToggled),
            )
            .push(
                text_input("Focus me, then press the round button", &self.note)
                    .on_input(Message::NoteChanged)
                    .padding(6),
            )
            .push(text(&self.status).size(16));

        let filler = (1..=30).fold(Column::new().spacing(8), |column, line| {
            column.push(text(format!("Content row {line}")))
        });

        let content = container(
            Column::new()
                .spacing(16)
                .padding(16)
                .push(controls)
                .push(scrollable(filler).height(Length::Fill)),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(self.fab.view().map(Message::Fab))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.fab.subscription().map(Message::Fab)
    }
}

mod settings {
    //! Persisted gallery toggles, stored as TOML in the platform config
    //! directory.

    use iced_fab::{Error, Result};
    use serde::{Deserialize, Serialize};
    use std::fs;
    use std::path::PathBuf;

    const SETTINGS_FILE: &str = "gallery.toml";
    const APP_NAME: &str = "iced_fab";

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct Settings {
        #[serde(default)]
        pub vertical: bool,
        #[serde(default)]
        pub anchor_left: bool,
        #[serde(default)]
        pub hide_overlay: bool,
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(SETTINGS_FILE);
            path
        })
    }

    pub fn load() -> Settings {
        let Some(path) = default_path() else {
            return Settings::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Settings::default(),
        }
    }

    pub fn save(settings: &Settings) -> Result<()> {
        let Some(path) = default_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(settings).map_err(|error| Error::Io(error.to_string()))?;
        fs::write(&path, content)?;
        Ok(())
    }
}
