use lifeio_core::{Player, PlayerBuilder, PlayerEvent};
use tokio::sync::broadcast;

/// Helper function to create a test player with the standard catalog and a
/// 2 second base interval
pub fn create_test_player() -> (Player, broadcast::Receiver<PlayerEvent>) {
    let player = PlayerBuilder::new()
        .spawn()
        .expect("Failed to spawn player");
    let events = player.subscribe();
    (player, events)
}

/// Collect events until autoplay reports it has finished
pub async fn collect_until_finished(
    events: &mut broadcast::Receiver<PlayerEvent>,
) -> Vec<PlayerEvent> {
    let mut collected = Vec::new();
    loop {
        let event = events.recv().await.expect("Player event channel closed");
        collected.push(event);
        if matches!(event, PlayerEvent::Finished(_)) {
            return collected;
        }
    }
}
