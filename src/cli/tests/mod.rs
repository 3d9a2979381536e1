//! Unit tests for CLI module
//!
//! Tests argument parsing and command dispatch against an in-memory bus.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    cli::{Cli, Command, CommandDispatcher, GetField, formatting::format_length},
    config::{LogLevel, LoggingConfig},
    services::mpris::{
        PlayerClient, PlayerMethod, PropValue,
        testing::MockBus,
    },
};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("spotctl").chain(args.iter().copied())).unwrap()
}

fn rush() -> MockBus {
    MockBus::with_spotify()
        .property("CanPause", true)
        .property("CanPlay", true)
        .property("CanGoNext", false)
        .property("PlaybackStatus", "Playing")
        .metadata(vec![
            ("xesam:artist", PropValue::List(vec!["Rush".into()])),
            ("xesam:title", "Tom Sawyer".into()),
            ("mpris:length", PropValue::Int(282_000_000)),
        ])
}

async fn client(bus: MockBus) -> PlayerClient<MockBus> {
    PlayerClient::discover(bus, &["mpris".to_string(), "spotify".to_string()]).await
}

#[test]
fn parses_action_commands() {
    assert_eq!(parse(&["toggle"]).command, Command::Toggle);
    assert_eq!(parse(&["next"]).command, Command::Next);
    assert_eq!(parse(&["prev"]).command, Command::Prev);
    assert_eq!(parse(&["stop"]).command, Command::Stop);
    assert_eq!(parse(&["play"]).command, Command::Play);
    assert_eq!(parse(&["seek", "-10"]).command, Command::Seek { seconds: -10 });
}

#[test]
fn parses_get_selectors() {
    assert_eq!(parse(&["get"]).command, Command::Get { field: None });
    assert_eq!(
        parse(&["get", "title"]).command,
        Command::Get {
            field: Some(GetField::Title)
        }
    );
    assert_eq!(
        parse(&["get", "all"]).command,
        Command::Get {
            field: Some(GetField::All)
        }
    );
}

#[test]
fn rejects_missing_or_unknown_command() {
    assert!(Cli::try_parse_from(["spotctl"]).is_err());
    assert!(Cli::try_parse_from(["spotctl", "rewind"]).is_err());
    assert!(Cli::try_parse_from(["spotctl", "get", "album"]).is_err());
    assert!(Cli::try_parse_from(["spotctl", "toggle", "next"]).is_err());
}

#[test]
fn flags_parse_anywhere() {
    let cli = parse(&["-vv", "get", "--log", "/tmp/spotctl.log", "-q"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(cli.log, Some(PathBuf::from("/tmp/spotctl.log")));
}

#[test]
fn verbosity_clamps_at_debug() {
    let five = parse(&["next", "-vvvvv"]).log_options(&LoggingConfig::default());
    let three = parse(&["next", "-vvv"]).log_options(&LoggingConfig::default());
    assert_eq!(five.level, three.level);
    assert_eq!(five.level, LogLevel::Debug);
    assert_eq!(
        parse(&["next"]).log_options(&LoggingConfig::default()).level,
        LogLevel::Error
    );
}

#[test]
fn flags_override_config_file() {
    let config = LoggingConfig {
        file: Some(PathBuf::from("/var/log/from-config.log")),
        quiet: false,
    };

    let options = parse(&["stop", "-q", "-l", "/tmp/cli.log"]).log_options(&config);
    assert!(options.quiet);
    assert_eq!(options.file, Some(PathBuf::from("/tmp/cli.log")));

    let options = parse(&["stop"]).log_options(&config);
    assert!(!options.quiet);
    assert_eq!(options.file, Some(PathBuf::from("/var/log/from-config.log")));

    let quiet_config = LoggingConfig {
        file: None,
        quiet: true,
    };
    assert!(parse(&["stop"]).log_options(&quiet_config).quiet);
}

#[test]
fn length_format() {
    assert_eq!(format_length(282), "4m42s (282)");
    assert_eq!(format_length(0), "0m0s (0)");
}

#[tokio::test]
async fn bare_get_prints_song_line() {
    let client = client(rush()).await;
    let dispatcher = CommandDispatcher::new(&client);

    let output = dispatcher.dispatch(&Command::Get { field: None }).await;
    assert_eq!(output.as_deref(), Some("Rush - Tom Sawyer (4m42s)"));
}

#[tokio::test]
async fn get_selectors_print_single_values() {
    let client = client(rush()).await;
    let dispatcher = CommandDispatcher::new(&client);

    let get = |field| Command::Get { field: Some(field) };
    assert_eq!(
        dispatcher.dispatch(&get(GetField::Title)).await.as_deref(),
        Some("Tom Sawyer")
    );
    assert_eq!(
        dispatcher.dispatch(&get(GetField::Artist)).await.as_deref(),
        Some("Rush")
    );
    assert_eq!(
        dispatcher.dispatch(&get(GetField::Length)).await.as_deref(),
        Some("4m42s (282)")
    );
    assert_eq!(
        dispatcher.dispatch(&get(GetField::Status)).await.as_deref(),
        Some("Playing")
    );
}

#[tokio::test]
async fn get_all_prints_report_without_trailing_newline() {
    let client = client(rush()).await;
    let dispatcher = CommandDispatcher::new(&client);

    let output = dispatcher
        .dispatch(&Command::Get {
            field: Some(GetField::All),
        })
        .await
        .unwrap();

    assert!(output.starts_with("CanGoNext \t=  false\nCanPause \t=  true\n"));
    assert!(output.ends_with("title \t\t=  Tom Sawyer"));
}

#[tokio::test]
async fn actions_print_nothing_and_call_one_method() {
    let client = client(rush()).await;
    let dispatcher = CommandDispatcher::new(&client);

    assert_eq!(dispatcher.dispatch(&Command::Toggle).await, None);
    assert_eq!(dispatcher.dispatch(&Command::Next).await, None);
    assert_eq!(dispatcher.dispatch(&Command::Stop).await, None);

    assert_eq!(
        dispatcher.client().bus().calls(),
        vec![PlayerMethod::PlayPause, PlayerMethod::Stop]
    );
}

#[tokio::test]
async fn missing_player_prints_nothing() {
    let client = client(MockBus::with_names(&["org.freedesktop.Notifications"])).await;
    let dispatcher = CommandDispatcher::new(&client);

    assert_eq!(dispatcher.dispatch(&Command::Get { field: None }).await, None);
    assert_eq!(dispatcher.dispatch(&Command::Play).await, None);
    assert!(dispatcher.client().bus().calls().is_empty());
}

#[tokio::test]
async fn incomplete_song_prints_nothing() {
    let bus = MockBus::with_spotify().metadata(vec![
        ("xesam:artist", PropValue::List(vec![])),
        ("xesam:title", "Untitled".into()),
        ("mpris:length", PropValue::Int(60_000_000)),
    ]);
    let client = client(bus).await;
    let dispatcher = CommandDispatcher::new(&client);

    assert_eq!(dispatcher.dispatch(&Command::Get { field: None }).await, None);
}
