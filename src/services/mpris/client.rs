use tracing::{debug, error, info, instrument, warn};

use super::{
    Metadata, MediaError, MprisBus, PlaybackState, PlayerHandle, PlayerMethod, PropValue,
    PropertyKey, ZbusBus, discovery, report,
};
use crate::config::PlayerConfig;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Capability-checked access to one MPRIS player.
///
/// Discovery happens once, when the client is built. If no player matched,
/// the client stays usable: every accessor returns `None` and every action
/// is skipped, each with an error log. Per-call bus failures are logged the
/// same way and never surface as errors.
pub struct PlayerClient<B> {
    bus: B,
    handle: Option<PlayerHandle>,
}

impl PlayerClient<ZbusBus> {
    /// Connect to the session bus and discover the configured player.
    ///
    /// # Errors
    /// Returns `MediaError::Connection` if the session bus is unreachable.
    /// A missing player is not an error.
    pub async fn connect(config: &PlayerConfig) -> Result<Self, MediaError> {
        let bus = ZbusBus::session(config.call_timeout()).await?;
        Ok(Self::discover(bus, &config.name_fragments).await)
    }
}

impl<B: MprisBus> PlayerClient<B> {
    /// Find the first bus name containing `fragments`, in order.
    #[instrument(skip(bus))]
    pub async fn discover(bus: B, fragments: &[String]) -> Self {
        let handle = match bus.list_names().await {
            Ok(names) => discovery::find_player(&names, fragments),
            Err(e) => {
                error!("{e}");
                None
            }
        };

        match &handle {
            Some(handle) => info!("Found player at {handle}"),
            None => error!("{}. Is the player running?", MediaError::PlayerUnavailable),
        }

        Self { bus, handle }
    }

    /// Build a client for an already known player.
    pub fn with_handle(bus: B, handle: Option<PlayerHandle>) -> Self {
        Self { bus, handle }
    }

    /// The discovered player, if any
    pub fn handle(&self) -> Option<&PlayerHandle> {
        self.handle.as_ref()
    }

    /// The bus this client talks through
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Whether a player was found at startup
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    fn player(&self, action: &str) -> Option<&PlayerHandle> {
        if self.handle.is_none() {
            error!("Cannot {action}: {}", MediaError::PlayerUnavailable);
        }
        self.handle.as_ref()
    }

    /// Read a player property.
    ///
    /// Returns `None` when there is no player or the read fails.
    #[instrument(skip(self))]
    pub async fn get_property(&self, key: PropertyKey) -> Option<PropValue> {
        let player = self.player("get property")?;
        debug!("Getting property: {key}");

        match self.bus.get_property(player, key.as_str()).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Could not get property: {e}");
                None
            }
        }
    }

    /// Write a player property. Failures are logged.
    #[instrument(skip(self))]
    pub async fn set_property(&self, key: PropertyKey, value: PropValue) {
        let Some(player) = self.player("set property") else {
            return;
        };
        debug!("Setting property: {key}");

        if let Err(e) = self.bus.set_property(player, key.as_str(), &value).await {
            error!("Could not set property: {e}");
        }
    }

    async fn capable(&self, key: PropertyKey) -> bool {
        self.get_property(key)
            .await
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    async fn invoke(&self, player: &PlayerHandle, method: PlayerMethod) {
        debug!("Calling {}", method.name());
        if let Err(e) = self.bus.call_method(player, method).await {
            error!("{e}");
        }
    }

    /// Toggle between playing and paused.
    ///
    /// Requires both `CanPause` and `CanPlay`.
    #[instrument(skip(self))]
    pub async fn toggle(&self) {
        let Some(player) = self.player("play/pause") else {
            return;
        };

        let can_pause = self.capable(PropertyKey::CanPause).await;
        let can_play = self.capable(PropertyKey::CanPlay).await;
        if can_pause && can_play {
            self.invoke(player, PlayerMethod::PlayPause).await;
        } else {
            warn!("Cannot Play/Pause");
        }
    }

    /// Start playback if `CanPlay` allows it.
    #[instrument(skip(self))]
    pub async fn play(&self) {
        let Some(player) = self.player("play") else {
            return;
        };

        if self.capable(PropertyKey::CanPlay).await {
            self.invoke(player, PlayerMethod::Play).await;
        } else {
            warn!("Cannot Play");
        }
    }

    /// Stop playback. Not capability-gated.
    #[instrument(skip(self))]
    pub async fn stop(&self) {
        let Some(player) = self.player("stop") else {
            return;
        };

        self.invoke(player, PlayerMethod::Stop).await;
    }

    /// Skip to the next track if `CanGoNext` allows it.
    #[instrument(skip(self))]
    pub async fn next(&self) {
        let Some(player) = self.player("go next") else {
            return;
        };

        if self.capable(PropertyKey::CanGoNext).await {
            self.invoke(player, PlayerMethod::Next).await;
        } else {
            warn!("Cannot Go Next");
        }
    }

    /// Go to the previous track if `CanGoPrevious` allows it.
    #[instrument(skip(self))]
    pub async fn prev(&self) {
        let Some(player) = self.player("go previous") else {
            return;
        };

        if self.capable(PropertyKey::CanGoPrevious).await {
            self.invoke(player, PlayerMethod::Previous).await;
        } else {
            warn!("Cannot Go Previous");
        }
    }

    /// Move the position by `offset_secs` (negative seeks back) if `CanSeek`
    /// allows it.
    #[instrument(skip(self))]
    pub async fn seek(&self, offset_secs: i64) {
        let Some(player) = self.player("seek") else {
            return;
        };

        if self.capable(PropertyKey::CanSeek).await {
            let offset = offset_secs.saturating_mul(MICROS_PER_SECOND);
            self.invoke(player, PlayerMethod::Seek(offset)).await;
        } else {
            warn!("Cannot Seek");
        }
    }

    /// Current `PlaybackStatus`
    pub async fn status(&self) -> Option<PlaybackState> {
        match self.get_property(PropertyKey::PlaybackStatus).await? {
            PropValue::Str(status) => Some(PlaybackState::from(status.as_str())),
            other => {
                error!("Unexpected PlaybackStatus value: {other}");
                None
            }
        }
    }

    /// Fresh snapshot of the current track's metadata
    pub async fn metadata(&self) -> Option<Metadata> {
        match self.get_property(PropertyKey::Metadata).await? {
            PropValue::Map(entries) => Some(Metadata::new(entries)),
            other => {
                error!("Unexpected Metadata value: {other}");
                None
            }
        }
    }

    /// Length of the current track in whole seconds
    pub async fn song_length(&self) -> Option<u64> {
        self.metadata().await?.length_secs()
    }

    /// Title of the current track
    pub async fn song_title(&self) -> Option<String> {
        self.metadata().await?.title()
    }

    /// First artist of the current track
    pub async fn song_artist(&self) -> Option<String> {
        self.metadata().await?.artist()
    }

    /// Every player property and metadata entry as aligned `key = value`
    /// lines.
    #[instrument(skip(self))]
    pub async fn dump_all(&self) -> Option<String> {
        let player = self.player("get properties")?;

        match self.bus.get_all_properties(player).await {
            Ok(properties) => Some(report::format_report(&properties)),
            Err(e) => {
                error!("Could not get properties: {e}");
                None
            }
        }
    }
}
