//! Unit tests for `PlayerClient`
//!
//! Runs the client against `MockBus`, so no session bus is needed.

use std::time::{Duration, Instant};

use super::{
    PlaybackState, PlayerClient, PlayerHandle, PlayerMethod, PropValue, PropertyKey,
    testing::{MockBus, SPOTIFY_BUS_NAME},
};

fn spotify_fragments() -> Vec<String> {
    vec!["mpris".to_string(), "spotify".to_string()]
}

async fn spotify(bus: MockBus) -> PlayerClient<MockBus> {
    PlayerClient::discover(bus, &spotify_fragments()).await
}

fn detached(bus: MockBus) -> PlayerClient<MockBus> {
    PlayerClient::with_handle(bus, None)
}

fn all_capabilities(bus: MockBus) -> MockBus {
    bus.property("CanPlay", true)
        .property("CanPause", true)
        .property("CanGoNext", true)
        .property("CanGoPrevious", true)
        .property("CanSeek", true)
}

#[tokio::test]
async fn discovery_picks_spotify() {
    let client = spotify(MockBus::with_spotify()).await;

    assert!(client.is_running());
    assert_eq!(
        client.handle(),
        Some(&PlayerHandle::from_bus_name(SPOTIFY_BUS_NAME))
    );
}

#[tokio::test]
async fn discovery_without_player_is_inert() {
    let client = spotify(MockBus::with_names(&["org.freedesktop.Notifications"])).await;

    assert!(!client.is_running());
    assert!(client.handle().is_none());
}

#[tokio::test]
async fn discovery_failure_is_inert() {
    let client = spotify(MockBus::with_spotify().failing_list()).await;
    assert!(!client.is_running());
}

#[tokio::test]
async fn get_property_without_player_returns_none() {
    let client = detached(all_capabilities(MockBus::with_spotify()));

    for key in PropertyKey::ALL {
        assert_eq!(client.get_property(key).await, None);
    }
    assert!(client.bus().reads().is_empty());
}

#[tokio::test]
async fn actions_without_player_do_nothing() {
    let client = detached(all_capabilities(MockBus::with_spotify()));

    client.toggle().await;
    client.play().await;
    client.stop().await;
    client.next().await;
    client.prev().await;
    client.seek(10).await;
    client.set_property(PropertyKey::Volume, PropValue::Double(0.5)).await;

    assert!(client.bus().calls().is_empty());
    assert!(client.bus().reads().is_empty());
    assert!(client.bus().writes().is_empty());
    assert_eq!(client.dump_all().await, None);
    assert_eq!(client.song_title().await, None);
}

#[tokio::test]
async fn get_property_reads_from_bus() {
    let client = spotify(MockBus::with_spotify().property("PlaybackStatus", "Playing")).await;

    assert_eq!(
        client.get_property(PropertyKey::PlaybackStatus).await,
        Some(PropValue::Str("Playing".to_string()))
    );
    assert_eq!(client.bus().reads(), vec!["PlaybackStatus"]);
}

#[tokio::test]
async fn get_property_failure_returns_none() {
    let client = spotify(MockBus::with_spotify()).await;
    assert_eq!(client.get_property(PropertyKey::Volume).await, None);
}

#[tokio::test]
async fn toggle_requires_pause_and_play() {
    let client = spotify(
        MockBus::with_spotify()
            .property("CanPause", true)
            .property("CanPlay", true),
    )
    .await;

    client.toggle().await;
    assert_eq!(client.bus().calls(), vec![PlayerMethod::PlayPause]);
    assert_eq!(client.bus().reads(), vec!["CanPause", "CanPlay"]);
}

#[tokio::test]
async fn toggle_denied_when_either_capability_missing() {
    let cases = [
        MockBus::with_spotify().property("CanPause", true).property("CanPlay", false),
        MockBus::with_spotify().property("CanPause", false).property("CanPlay", true),
        MockBus::with_spotify().property("CanPause", true),
        MockBus::with_spotify(),
    ];

    for bus in cases {
        let client = spotify(bus).await;
        client.toggle().await;
        assert!(client.bus().calls().is_empty());
    }
}

#[tokio::test]
async fn non_boolean_capability_counts_as_denied() {
    let client = spotify(MockBus::with_spotify().property("CanGoNext", "yes")).await;

    client.next().await;
    assert!(client.bus().calls().is_empty());
}

#[tokio::test]
async fn next_and_prev_follow_their_capabilities() {
    let client = spotify(
        MockBus::with_spotify()
            .property("CanGoNext", true)
            .property("CanGoPrevious", false),
    )
    .await;

    client.next().await;
    client.prev().await;
    assert_eq!(client.bus().calls(), vec![PlayerMethod::Next]);

    let client = spotify(
        MockBus::with_spotify()
            .property("CanGoNext", false)
            .property("CanGoPrevious", true),
    )
    .await;

    client.next().await;
    client.prev().await;
    assert_eq!(client.bus().calls(), vec![PlayerMethod::Previous]);
}

#[tokio::test]
async fn play_gated_on_can_play() {
    let client = spotify(MockBus::with_spotify().property("CanPlay", false)).await;
    client.play().await;
    assert!(client.bus().calls().is_empty());

    let client = spotify(MockBus::with_spotify().property("CanPlay", true)).await;
    client.play().await;
    assert_eq!(client.bus().calls(), vec![PlayerMethod::Play]);
}

#[tokio::test]
async fn stop_is_never_gated() {
    let client = spotify(MockBus::with_spotify()).await;

    client.stop().await;
    assert_eq!(client.bus().calls(), vec![PlayerMethod::Stop]);
    assert!(client.bus().reads().is_empty());
}

#[tokio::test]
async fn seek_converts_seconds_to_microseconds() {
    let client = spotify(MockBus::with_spotify().property("CanSeek", true)).await;

    client.seek(-5).await;
    client.seek(i64::MAX).await;
    assert_eq!(
        client.bus().calls(),
        vec![PlayerMethod::Seek(-5_000_000), PlayerMethod::Seek(i64::MAX)]
    );
}

#[tokio::test]
async fn seek_denied_without_capability() {
    let client = spotify(MockBus::with_spotify().property("CanSeek", false)).await;

    client.seek(30).await;
    assert!(client.bus().calls().is_empty());
}

#[tokio::test]
async fn failed_method_call_is_absorbed() {
    let client = spotify(all_capabilities(MockBus::with_spotify()).failing_calls()).await;

    client.next().await;
    client.stop().await;
    assert_eq!(
        client.bus().calls(),
        vec![PlayerMethod::Next, PlayerMethod::Stop]
    );
}

#[tokio::test]
async fn set_property_forwards_scalars_only() {
    let client = spotify(MockBus::with_spotify()).await;

    client.set_property(PropertyKey::Volume, PropValue::Double(0.25)).await;
    client
        .set_property(PropertyKey::LoopStatus, PropValue::List(vec![]))
        .await;

    assert_eq!(
        client.bus().writes(),
        vec![("Volume".to_string(), PropValue::Double(0.25))]
    );
}

#[tokio::test]
async fn status_parses_playback_state() {
    let client = spotify(MockBus::with_spotify().property("PlaybackStatus", "Paused")).await;
    assert_eq!(client.status().await, Some(PlaybackState::Paused));

    let client = spotify(MockBus::with_spotify().property("PlaybackStatus", 3_i64)).await;
    assert_eq!(client.status().await, None);
}

#[tokio::test]
async fn song_getters_read_metadata() {
    let client = spotify(MockBus::with_spotify().metadata(vec![
        ("mpris:length", PropValue::Int(185_000_000)),
        ("xesam:title", "Tom Sawyer".into()),
        (
            "xesam:artist",
            PropValue::List(vec!["Artist A".into(), "Artist B".into()]),
        ),
    ]))
    .await;

    assert_eq!(client.song_length().await, Some(185));
    assert_eq!(client.song_title().await.as_deref(), Some("Tom Sawyer"));
    assert_eq!(client.song_artist().await.as_deref(), Some("Artist A"));
    assert_eq!(client.bus().reads(), vec!["Metadata"; 3]);
}

#[tokio::test]
async fn empty_artist_list_yields_none() {
    let client = spotify(
        MockBus::with_spotify().metadata(vec![("xesam:artist", PropValue::List(vec![]))]),
    )
    .await;

    assert_eq!(client.song_artist().await, None);
}

#[tokio::test]
async fn metadata_with_wrong_shape_yields_none() {
    let client = spotify(MockBus::with_spotify().property("Metadata", "broken")).await;

    assert_eq!(client.metadata().await, None);
    assert_eq!(client.song_length().await, None);
}

#[tokio::test]
async fn dump_all_lists_properties_and_metadata() {
    let client = spotify(
        MockBus::with_spotify()
            .property("CanPlay", true)
            .property("Volume", 1.0)
            .metadata(vec![("xesam:title", "Tom Sawyer".into())]),
    )
    .await;

    let report = client.dump_all().await.unwrap();
    assert_eq!(
        report,
        "CanPlay \t=  true\nVolume \t\t=  1\n\ntitle \t\t=  Tom Sawyer\n"
    );
}

#[tokio::test]
async fn slow_property_read_times_out() {
    let client = spotify(
        MockBus::with_spotify()
            .property("CanPlay", true)
            .slow_reads(Duration::from_secs(5))
            .call_timeout(Duration::from_millis(50)),
    )
    .await;

    let started = Instant::now();
    assert_eq!(client.get_property(PropertyKey::CanPlay).await, None);
    assert!(started.elapsed() < Duration::from_secs(2));

    client.play().await;
    assert!(client.bus().calls().is_empty());
}

#[tokio::test]
async fn slow_property_read_within_limit_succeeds() {
    let client = spotify(
        MockBus::with_spotify()
            .property("CanPlay", true)
            .slow_reads(Duration::from_millis(10))
            .call_timeout(Duration::from_secs(5)),
    )
    .await;

    client.play().await;
    assert_eq!(client.bus().calls(), vec![PlayerMethod::Play]);
}
