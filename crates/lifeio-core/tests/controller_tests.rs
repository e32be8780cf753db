//! Black-box properties of the playback controller.

use lifeio_core::{
    Catalog, PlaybackCommand, PlaybackController, Snapshot, FINAL_METADATA, INITIAL_METADATA,
};

#[test]
fn test_every_reachable_state_has_a_snapshot() {
    let mut controller = PlaybackController::new(Catalog::standard());
    let commands = [
        PlaybackCommand::StepForward,
        PlaybackCommand::StepForward,
        PlaybackCommand::Play,
        PlaybackCommand::SetSpeed(0.5),
        PlaybackCommand::StepBackward,
        PlaybackCommand::Seek(99),
        PlaybackCommand::TogglePlayPause,
        PlaybackCommand::StepBackward,
        PlaybackCommand::Restart,
    ];

    for command in commands {
        controller.apply(command).expect("Command failed");
        let snapshot = Snapshot::from_controller(&controller).expect("Snapshot failed");
        assert!(snapshot.state.current_step < snapshot.total_steps);
    }
}

#[test]
fn test_metadata_depends_only_on_step() {
    let catalog = Catalog::standard();

    let mut forward = PlaybackController::new(catalog);
    for _ in 0..5 {
        forward.step_forward();
    }
    forward.seek(2);

    let mut backward = PlaybackController::new(catalog);
    backward.seek(7);
    for _ in 0..5 {
        backward.step_backward();
    }

    assert_eq!(forward.state().current_step, 2);
    assert_eq!(backward.state().current_step, 2);
    assert_eq!(forward.metadata().unwrap(), backward.metadata().unwrap());
    assert_eq!(
        forward.metadata().unwrap(),
        catalog.compute_metadata(2).unwrap()
    );
}

#[test]
fn test_full_autoplay_goes_from_initial_to_final_metadata() {
    let mut controller = PlaybackController::new(Catalog::standard());
    assert_eq!(controller.metadata().unwrap(), INITIAL_METADATA);

    controller.play();
    let mut ticks = 0;
    while let Some(tick) = controller.pending_tick() {
        assert!(controller.fire_tick(tick.id));
        ticks += 1;
    }

    assert_eq!(ticks, Catalog::standard().len() - 1);
    assert_eq!(controller.metadata().unwrap(), FINAL_METADATA);
    assert!(!controller.state().is_playing);
}
