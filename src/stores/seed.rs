//! Catalog contents available at startup

use std::path::Path;

use crate::config::SourceMode;
use crate::models::{NewSong, SongSource};

/// (title, artist, mood, streaming link)
const SEED: [(&str, &str, &str, &str); 5] = [
    (
        "Blinding Lights",
        "The Weeknd",
        "Energetic",
        "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b",
    ),
    (
        "Shallow",
        "Lady Gaga & Bradley Cooper",
        "Romantic",
        "https://open.spotify.com/track/2VxeLyX666F8uXCJ0dZF8B",
    ),
    (
        "Someone You Loved",
        "Lewis Capaldi",
        "Sad",
        "https://open.spotify.com/track/7qEHsqek33rTcFNT9PFqLf",
    ),
    (
        "Happier",
        "Marshmello",
        "Happy",
        "https://open.spotify.com/track/2dpaYNEQHiRxtZbfNsse99",
    ),
    (
        "Weightless",
        "Marconi Union",
        "Relaxed",
        "https://open.spotify.com/track/4dZKhQIfmh3zjxBT9AH6sg",
    ),
];

/// The five starter songs, sourced according to `mode`
///
/// In file mode the Nth song points at `<media_dir>/N.mp3`.
pub fn seed_songs(mode: SourceMode, media_dir: &Path) -> Vec<NewSong> {
    SEED.iter()
        .enumerate()
        .map(|(i, (title, artist, mood, link))| {
            let source = match mode {
                SourceMode::Link => SongSource::SourceLink(link.to_string()),
                SourceMode::File => {
                    SongSource::SourceFile(media_dir.join(format!("{}.mp3", i + 1)))
                }
            };
            NewSong {
                title: title.to_string(),
                artist: artist.to_string(),
                mood: mood.to_string(),
                source,
            }
        })
        .collect()
}
