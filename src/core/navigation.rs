//! View dispatch
//!
//! Each of the five screens is rendered in full from the current store
//! contents. Nothing is kept between renders except the stores themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::SourceMode;
use crate::error::{Error, Result};
use crate::models::Mood;
use crate::serializers::{serialize_playlist, serialize_songs, PlaylistResponse, SongResponse};
use crate::state::AppState;

pub const APP_TITLE: &str = "Music Playlist App";
pub const NO_SONGS_FOR_MOOD: &str = "No songs found for this mood.";
pub const NO_PLAYLISTS: &str =
    "You haven't created any playlists yet. Go to 'Create Playlist' to make one!";
pub const NAME_REQUIRED: &str = "Please enter a playlist name to proceed.";

/// Navigable screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    Browse,
    MyPlaylists,
    CreatePlaylist,
    AddTrack,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Browse,
        View::MyPlaylists,
        View::CreatePlaylist,
        View::AddTrack,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Browse => "browse",
            View::MyPlaylists => "my-playlists",
            View::CreatePlaylist => "create-playlist",
            View::AddTrack => "add-track",
        }
    }

    /// Sidebar label
    pub fn label(&self, mode: SourceMode) -> &'static str {
        match (self, mode) {
            (View::Home, _) => "Home",
            (View::Browse, _) => "Browse Music",
            (View::MyPlaylists, _) => "My Playlists",
            (View::CreatePlaylist, _) => "Create Playlist",
            (View::AddTrack, SourceMode::Link) => "Add Spotify Link",
            (View::AddTrack, SourceMode::File) => "Upload Music",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        View::ALL
            .into_iter()
            .find(|v| v.slug() == s)
            .ok_or_else(|| Error::NotFound(format!("View '{}'", s)))
    }
}

/// Selections carried by the request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    pub mood: Option<String>,
    pub playlist: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
}

/// Everything a client needs to draw one screen
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewState {
    Home {
        title: &'static str,
        welcome: &'static str,
        tagline: &'static str,
        navigation: Vec<NavItem>,
    },
    Browse {
        moods: Vec<&'static str>,
        selected: Option<String>,
        songs: Vec<SongResponse>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<&'static str>,
    },
    MyPlaylists {
        names: Vec<String>,
        selected: Option<PlaylistResponse>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<&'static str>,
    },
    CreatePlaylist {
        name: String,
        options: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        warning: Option<&'static str>,
    },
    AddTrack {
        mode: SourceMode,
        label: &'static str,
        moods: Vec<&'static str>,
        accepted_extensions: Vec<String>,
    },
}

/// Render `view` against the current stores
pub fn render(view: View, state: &AppState, query: &ViewQuery) -> Result<ViewState> {
    let mode = state.config.source_mode;

    let rendered = match view {
        View::Home => ViewState::Home {
            title: APP_TITLE,
            welcome: "Welcome to Your Personal Music Playlist App!",
            tagline: match mode {
                SourceMode::Link => {
                    "Explore music by mood, create playlists, and enjoy Spotify tracks!"
                }
                SourceMode::File => {
                    "Explore music by mood, create playlists, upload your music, and enjoy listening!"
                }
            },
            navigation: View::ALL
                .into_iter()
                .map(|v| NavItem {
                    view: v,
                    label: v.label(mode),
                })
                .collect(),
        },
        View::Browse => {
            let moods: Vec<_> = state.catalog.list_moods().into_iter().collect();
            // an unselected box defaults to its first option
            let selected = query
                .mood
                .clone()
                .filter(|m| !m.is_empty())
                .or_else(|| moods.first().map(|m| m.to_string()));

            let songs = selected
                .as_deref()
                .map(|m| state.catalog.filter_by_mood(m))
                .unwrap_or_default();
            let message = songs.is_empty().then_some(NO_SONGS_FOR_MOOD);

            ViewState::Browse {
                moods,
                selected,
                songs: serialize_songs(&songs, state.embed_base()),
                message,
            }
        }
        View::MyPlaylists => {
            if state.playlists.is_empty() {
                ViewState::MyPlaylists {
                    names: Vec::new(),
                    selected: None,
                    message: Some(NO_PLAYLISTS),
                }
            } else {
                let names = state.playlists.list_names();
                let name = query
                    .playlist
                    .clone()
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| names[0].clone());
                let playlist = state.playlists.get(&name)?;

                ViewState::MyPlaylists {
                    names,
                    selected: Some(serialize_playlist(&playlist, state.embed_base())),
                    message: None,
                }
            }
        }
        View::CreatePlaylist => {
            let name = query.name.clone().unwrap_or_default();
            let warning = name.is_empty().then_some(NAME_REQUIRED);

            ViewState::CreatePlaylist {
                name,
                options: state.catalog.song_keys(),
                warning,
            }
        }
        View::AddTrack => ViewState::AddTrack {
            mode,
            label: view.label(mode),
            moods: Mood::ALL.iter().map(Mood::as_str).collect(),
            accepted_extensions: match mode {
                SourceMode::Link => Vec::new(),
                SourceMode::File => state.config.allowed_extensions.clone(),
            },
        },
    };

    Ok(rendered)
}
