use tracing::{instrument, warn};

use super::{
    Command, GetField,
    formatting::{format_length, format_report},
};
use crate::services::mpris::{MprisBus, PlayerClient, SongInfo};

/// Runs exactly one command against a player.
///
/// Actions produce no output; queries return the text to print. A query that
/// yields nothing returns `None`, the reason having already been logged.
pub struct CommandDispatcher<'a, B> {
    client: &'a PlayerClient<B>,
}

impl<'a, B: MprisBus> CommandDispatcher<'a, B> {
    /// Creates a dispatcher for `client`
    pub fn new(client: &'a PlayerClient<B>) -> Self {
        Self { client }
    }

    /// The client commands are sent to
    pub fn client(&self) -> &PlayerClient<B> {
        self.client
    }

    /// Executes `command` and returns its output, if any.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, command: &Command) -> Option<String> {
        match command {
            Command::Toggle => self.client.toggle().await,
            Command::Next => self.client.next().await,
            Command::Prev => self.client.prev().await,
            Command::Stop => self.client.stop().await,
            Command::Play => self.client.play().await,
            Command::Seek { seconds } => self.client.seek(*seconds).await,
            Command::Get { field } => return self.get(*field).await,
        }
        None
    }

    async fn get(&self, field: Option<GetField>) -> Option<String> {
        match field {
            Some(GetField::Title) => self.client.song_title().await,
            Some(GetField::Artist) => self.client.song_artist().await,
            Some(GetField::Length) => self.client.song_length().await.map(format_length),
            Some(GetField::Status) => self.client.status().await.map(|state| state.to_string()),
            Some(GetField::All) => self.client.dump_all().await.map(format_report),
            None => self.song_line().await,
        }
    }

    async fn song_line(&self) -> Option<String> {
        let artist = self.client.song_artist().await;
        let title = self.client.song_title().await;
        let length = self.client.song_length().await;

        match (artist, title, length) {
            (Some(artist), Some(title), Some(length_secs)) => Some(
                SongInfo {
                    artist,
                    title,
                    length_secs,
                }
                .to_string(),
            ),
            _ => {
                warn!("Song information incomplete");
                None
            }
        }
    }
}
