use std::fmt;

/// MPRIS object path shared by every player.
pub const MPRIS_OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";

/// Interface carrying playback control and track properties.
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Bus name of the discovered player.
///
/// Produced once by discovery and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerHandle(String);

impl PlayerHandle {
    /// Create a handle from a D-Bus bus name
    pub fn from_bus_name(bus_name: &str) -> Self {
        Self(bus_name.to_string())
    }

    /// Get the D-Bus bus name
    pub fn bus_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Known properties of the `org.mpris.MediaPlayer2.Player` interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// Playing, Paused or Stopped
    PlaybackStatus,
    /// None, Track or Playlist
    LoopStatus,
    /// Playback rate
    Rate,
    /// Shuffle flag
    Shuffle,
    /// Current track metadata
    Metadata,
    /// Volume between 0.0 and 1.0
    Volume,
    /// Position in microseconds
    Position,
    /// Minimum playback rate
    MinimumRate,
    /// Maximum playback rate
    MaximumRate,
    /// Whether `Next` is allowed
    CanGoNext,
    /// Whether `Previous` is allowed
    CanGoPrevious,
    /// Whether `Play` is allowed
    CanPlay,
    /// Whether `Pause` is allowed
    CanPause,
    /// Whether `Seek` is allowed
    CanSeek,
    /// Whether the player accepts control at all
    CanControl,
}

impl PropertyKey {
    /// Every known key, in interface declaration order.
    pub const ALL: [PropertyKey; 15] = [
        PropertyKey::PlaybackStatus,
        PropertyKey::LoopStatus,
        PropertyKey::Rate,
        PropertyKey::Shuffle,
        PropertyKey::Metadata,
        PropertyKey::Volume,
        PropertyKey::Position,
        PropertyKey::MinimumRate,
        PropertyKey::MaximumRate,
        PropertyKey::CanGoNext,
        PropertyKey::CanGoPrevious,
        PropertyKey::CanPlay,
        PropertyKey::CanPause,
        PropertyKey::CanSeek,
        PropertyKey::CanControl,
    ];

    /// Property name as sent over the bus
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::PlaybackStatus => "PlaybackStatus",
            PropertyKey::LoopStatus => "LoopStatus",
            PropertyKey::Rate => "Rate",
            PropertyKey::Shuffle => "Shuffle",
            PropertyKey::Metadata => "Metadata",
            PropertyKey::Volume => "Volume",
            PropertyKey::Position => "Position",
            PropertyKey::MinimumRate => "MinimumRate",
            PropertyKey::MaximumRate => "MaximumRate",
            PropertyKey::CanGoNext => "CanGoNext",
            PropertyKey::CanGoPrevious => "CanGoPrevious",
            PropertyKey::CanPlay => "CanPlay",
            PropertyKey::CanPause => "CanPause",
            PropertyKey::CanSeek => "CanSeek",
            PropertyKey::CanControl => "CanControl",
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Methods of the player interface this client invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMethod {
    /// Toggle between playing and paused
    PlayPause,
    /// Start or resume playback
    Play,
    /// Stop playback
    Stop,
    /// Skip to the next track
    Next,
    /// Go back to the previous track
    Previous,
    /// Move the position by an offset in microseconds
    Seek(i64),
}

impl PlayerMethod {
    /// Method name as sent over the bus
    pub fn name(&self) -> &'static str {
        match self {
            PlayerMethod::PlayPause => "PlayPause",
            PlayerMethod::Play => "Play",
            PlayerMethod::Stop => "Stop",
            PlayerMethod::Next => "Next",
            PlayerMethod::Previous => "Previous",
            PlayerMethod::Seek(_) => "Seek",
        }
    }
}

/// Current playback state of a media player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    Stopped,
}

impl From<&str> for PlaybackState {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Playing => write!(f, "Playing"),
            PlaybackState::Paused => write!(f, "Paused"),
            PlaybackState::Stopped => write!(f, "Stopped"),
        }
    }
}
