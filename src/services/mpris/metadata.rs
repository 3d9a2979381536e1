use std::{collections::BTreeMap, fmt};

use tracing::warn;

use super::PropValue;

const TITLE_KEY: &str = "xesam:title";
const ARTIST_KEY: &str = "xesam:artist";
const LENGTH_KEY: &str = "mpris:length";

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Snapshot of the `Metadata` property for the current track.
///
/// Fetched fresh for every query and never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata(BTreeMap<String, PropValue>);

impl Metadata {
    /// Wrap the raw metadata dictionary
    pub fn new(entries: BTreeMap<String, PropValue>) -> Self {
        Self(entries)
    }

    /// Look up any metadata entry by its full key
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Track title, coerced to text
    pub fn title(&self) -> Option<String> {
        self.get(TITLE_KEY).map(ToString::to_string)
    }

    /// First listed artist.
    ///
    /// A bare string is accepted as a single artist. An empty list yields
    /// `None`.
    pub fn artist(&self) -> Option<String> {
        match self.get(ARTIST_KEY)? {
            PropValue::List(artists) => {
                let first = artists.first().map(ToString::to_string);
                if first.is_none() {
                    warn!("Track has an empty artist list");
                }
                first
            }
            other => Some(other.to_string()),
        }
    }

    /// Track length in whole seconds, rounded down
    pub fn length_secs(&self) -> Option<u64> {
        let micros = self.get(LENGTH_KEY)?.as_int()?;
        u64::try_from(micros / MICROS_PER_SECOND).ok()
    }
}

impl From<BTreeMap<String, PropValue>> for Metadata {
    fn from(entries: BTreeMap<String, PropValue>) -> Self {
        Self::new(entries)
    }
}

/// Artist, title and length of the current track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInfo {
    /// First listed artist
    pub artist: String,

    /// Track title
    pub title: String,

    /// Length in whole seconds
    pub length_secs: u64,
}

impl fmt::Display for SongInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.artist,
            self.title,
            format_minutes(self.length_secs)
        )
    }
}

/// Formats seconds as `{m}m{s}s`, e.g. `4m42s`
pub fn format_minutes(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes}m{seconds}s")
}
