//! Timing tests for the async player, run against tokio's paused clock.

mod common;

use std::time::Duration;

use common::{collect_until_finished, create_test_player};
use lifeio_core::{PlayerBuilder, PlayerEvent, Speed, VisualizerError};
use tokio::time::{self, Instant};

#[tokio::test(start_paused = true)]
async fn test_autoplay_reaches_last_step_and_stops() {
    let (player, mut events) = create_test_player();
    let start = Instant::now();

    let state = player.play().await.expect("Failed to play");
    assert!(state.is_playing);

    let collected = collect_until_finished(&mut events).await;
    let elapsed = start.elapsed();

    let advanced: Vec<_> = collected
        .iter()
        .filter_map(|event| match event {
            PlayerEvent::Advanced(state) => Some(state.current_step),
            _ => None,
        })
        .collect();
    assert_eq!(advanced, vec![1, 2, 3, 4, 5, 6, 7]);

    assert!(elapsed >= Duration::from_secs(14));
    assert!(elapsed < Duration::from_secs(14) + Duration::from_millis(50));

    let state = player.state().await.expect("Failed to read state");
    assert_eq!(state.current_step, 7);
    assert!(!state.is_playing);

    // Nothing else happens afterwards.
    time::sleep(Duration::from_secs(30)).await;
    assert_eq!(player.state().await.unwrap(), state);

    player.shutdown().await.expect("Failed to shut down");
}

#[tokio::test(start_paused = true)]
async fn test_double_speed_halves_interval() {
    let (player, _events) = create_test_player();
    player.set_speed(2.0).await.expect("Failed to set speed");
    player.play().await.expect("Failed to play");

    time::sleep(Duration::from_millis(900)).await;
    assert_eq!(player.state().await.unwrap().current_step, 0);

    time::sleep(Duration::from_millis(200)).await;
    let state = player.state().await.unwrap();
    assert_eq!(state.current_step, 1);
    assert!(state.is_playing);
    assert_eq!(state.speed, Speed::new(2.0).unwrap());

    // The next tick is also scheduled at half the base interval.
    time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(player.state().await.unwrap().current_step, 2);
}

#[tokio::test(start_paused = true)]
async fn test_speed_change_reschedules_pending_tick() {
    let (player, mut events) = create_test_player();
    player.play().await.unwrap();

    time::sleep(Duration::from_millis(1500)).await;
    player.set_speed(2.0).await.unwrap();

    // The original 2000ms tick has been replaced.
    time::sleep(Duration::from_millis(600)).await;
    assert_eq!(player.state().await.unwrap().current_step, 0);

    // The replacement fires 1000ms after the speed change.
    time::sleep(Duration::from_millis(500)).await;
    assert_eq!(player.state().await.unwrap().current_step, 1);

    // Exactly one advance so far.
    let mut advances = 0;
    while let Ok(event) = events.try_recv() {
        if matches!(event, PlayerEvent::Advanced(_)) {
            advances += 1;
        }
    }
    assert_eq!(advances, 1);
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_pending_tick() {
    let player = PlayerBuilder::new()
        .with_start_step(3)
        .spawn()
        .expect("Failed to spawn player");
    player.play().await.unwrap();

    time::sleep(Duration::from_millis(1000)).await;
    let state = player.restart().await.unwrap();
    assert_eq!(state.current_step, 0);
    assert!(!state.is_playing);

    time::sleep(Duration::from_secs(10)).await;
    let state = player.state().await.unwrap();
    assert_eq!(state.current_step, 0);
    assert!(!state.is_playing);
}

#[tokio::test(start_paused = true)]
async fn test_manual_step_restarts_interval() {
    let (player, _events) = create_test_player();
    player.play().await.unwrap();

    time::sleep(Duration::from_millis(1500)).await;
    let state = player.step_forward().await.unwrap();
    assert_eq!(state.current_step, 1);
    assert!(state.is_playing);

    // The tick scheduled before the manual step would have fired at 2000ms.
    time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(player.state().await.unwrap().current_step, 1);

    time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(player.state().await.unwrap().current_step, 2);
}

#[tokio::test(start_paused = true)]
async fn test_pause_and_resume() {
    let (player, _events) = create_test_player();
    player.play().await.unwrap();
    time::sleep(Duration::from_millis(2100)).await;

    let paused = player.pause().await.unwrap();
    assert_eq!(paused.current_step, 1);
    assert!(!paused.is_playing);

    time::sleep(Duration::from_secs(10)).await;
    assert_eq!(player.state().await.unwrap().current_step, 1);

    player.toggle_play_pause().await.unwrap();
    time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(player.state().await.unwrap().current_step, 2);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_speed_is_rejected() {
    let (player, _events) = create_test_player();
    player.play().await.unwrap();

    let err = player.set_speed(0.0).await.unwrap_err();
    assert!(matches!(err, VisualizerError::InvalidSpeed { .. }));

    let state = player.state().await.unwrap();
    assert!(state.is_playing);
    assert_eq!(state.speed, Speed::NORMAL);

    // The pending tick survived the rejected change.
    time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(player.state().await.unwrap().current_step, 1);
}

#[tokio::test(start_paused = true)]
async fn test_seek_to_last_step_finishes_playback() {
    let (player, mut events) = create_test_player();
    player.play().await.unwrap();
    let state = player.seek(100).await.unwrap();
    assert_eq!(state.current_step, 7);
    assert!(!state.is_playing);

    let collected = collect_until_finished(&mut events).await;
    assert!(matches!(collected.last(), Some(PlayerEvent::Finished(_))));
}

#[tokio::test(start_paused = true)]
async fn test_play_at_last_step_does_not_loop() {
    let player = PlayerBuilder::new()
        .with_start_step(7)
        .spawn()
        .expect("Failed to spawn player");
    let state = player.play().await.unwrap();
    assert_eq!(state.current_step, 7);
    assert!(!state.is_playing);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_returns_stopped_state() {
    let (player, _events) = create_test_player();
    player.play().await.unwrap();
    time::sleep(Duration::from_millis(2100)).await;

    let state = player.shutdown().await.expect("Failed to shut down");
    assert_eq!(state.current_step, 1);
    assert!(!state.is_playing);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_player_stops_events() {
    let (player, mut events) = create_test_player();
    player.play().await.unwrap();
    drop(player);

    // Changed event from play() is buffered, then the channel closes.
    assert!(matches!(events.recv().await, Ok(PlayerEvent::Changed(_))));
    time::sleep(Duration::from_secs(5)).await;
    assert!(events.recv().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_events_end_with_latest_command_state() {
    let (player, mut events) = create_test_player();
    player.play().await.unwrap();

    time::sleep(Duration::from_millis(2001)).await;
    let reply = player.step_backward().await.unwrap();
    assert_eq!(reply.current_step, 0);

    // Replaying the queue in order must leave the reply as the last frame.
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    let steps: Vec<_> = drained
        .iter()
        .filter(|event| !matches!(event, PlayerEvent::Finished(_)))
        .map(|event| event.state().current_step)
        .collect();
    assert_eq!(steps, vec![0, 1, 0]);
    assert_eq!(drained.last().map(PlayerEvent::state), Some(reply));
}
