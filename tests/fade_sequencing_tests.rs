use multiline_rs::api::{ChartEngine, ChartEngineConfig};
use multiline_rs::core::{ObservationRecord, Viewport};
use multiline_rs::render::{RecordingSink, VisualCommand};

fn sample_records() -> Vec<ObservationRecord> {
    vec![
        ObservationRecord::new(1990.0, 8.0, "Chile", "male"),
        ObservationRecord::new(2013.0, 22.0, "Chile", "male"),
        ObservationRecord::new(1990.0, 9.0, "Chile", "female"),
        ObservationRecord::new(2013.0, 20.0, "Chile", "female"),
        ObservationRecord::new(1990.0, 6.0, "Japan", "male"),
        ObservationRecord::new(2013.0, 7.0, "Japan", "male"),
        ObservationRecord::new(1990.0, 5.0, "Japan", "female"),
        ObservationRecord::new(2013.0, 12.0, "Japan", "female"),
    ]
}

fn engine() -> ChartEngine<RecordingSink> {
    let config = ChartEngineConfig::new(Viewport::new(920, 450));
    ChartEngine::new(RecordingSink::new(), config, sample_records()).expect("engine init")
}

#[test]
fn leaving_all_state_hides_other_lines_before_finalizing() {
    let mut engine = engine();

    let scheduled = engine
        .select_entity("Chile")
        .expect("select")
        .expect("a fade is scheduled");
    assert_eq!(scheduled.delay_ms, 205);

    // Phase one: the other line fades out, the target stays visible, and
    // neither the selection set nor the scale has moved yet.
    assert_eq!(engine.sink().opacity_of("Japan"), Some(0.0));
    assert_eq!(engine.sink().opacity_of("Chile"), Some(1.0));
    assert!(engine.selected_entities().is_empty());
    assert_eq!(engine.value_domain(), engine.full_value_domain());
    assert_eq!(engine.sink().axis_update_count(), 0);
    assert!(engine.pending_fade().is_some());

    // Phase two: the completion replaces the set atomically and rescales.
    engine.fade_complete(scheduled.token).expect("finalize");
    assert_eq!(engine.selected_entities(), ["Chile"]);
    assert_eq!(engine.value_domain().bounds(), (8.0, 22.0));
    assert_eq!(engine.sink().axis_update_count(), 1);
    assert!(engine.pending_fade().is_none());
}

#[test]
fn stale_fade_completion_is_ignored() {
    let mut engine = engine();

    let first = engine
        .select_entity("Chile")
        .expect("select")
        .expect("scheduled");

    // A second rapid selection supersedes the pending phase synchronously,
    // so nothing is left pending afterwards.
    let second = engine.select_entity("Japan").expect("select");
    assert!(second.is_none());
    assert!(engine.pending_fade().is_none());

    // The superseded token fires late and must change nothing.
    let domain_before = engine.value_domain();
    let selected_before: Vec<String> = engine
        .selected_entities()
        .iter()
        .map(|name| (*name).to_owned())
        .collect();
    let commands_before = engine.sink().commands.len();

    engine.fade_complete(first.token).expect("stale completion");

    assert_eq!(engine.value_domain(), domain_before);
    let selected_after: Vec<String> = engine
        .selected_entities()
        .iter()
        .map(|name| (*name).to_owned())
        .collect();
    assert_eq!(selected_after, selected_before);
    assert_eq!(engine.sink().commands.len(), commands_before);
}

#[test]
fn rapid_second_selection_supersedes_the_pending_fade_out() {
    let mut engine = engine();

    engine.select_entity("Chile").expect("select");
    // Before the settle delay elapses the user picks Japan too. The pending
    // Chile finalize runs synchronously (set replacement + rescale), then
    // Japan applies as a plain add.
    engine.select_entity("Japan").expect("select");

    assert_eq!(engine.selected_entities(), ["Chile", "Japan"]);
    assert_eq!(engine.value_domain().bounds(), (5.0, 22.0));
    assert!(engine.pending_fade().is_none());
    assert_eq!(engine.sink().opacity_of("Japan"), Some(1.0));
}

#[test]
fn select_all_shows_every_line_only_after_the_settle_delay() {
    let mut engine = engine();
    let scheduled = engine.select_entity("Chile").expect("select").expect("scheduled");
    engine.fade_complete(scheduled.token).expect("finalize");
    engine.sink_mut().clear();

    let scheduled = engine
        .select_all()
        .expect("select all")
        .expect("show-all is scheduled");

    // The scale reverts immediately; lines stay put until the delay.
    assert!(engine.is_all_mode());
    assert!(engine.selected_entities().is_empty());
    assert_eq!(engine.value_domain(), engine.full_value_domain());
    let early_show = engine.sink().commands.iter().any(|command| {
        matches!(command, VisualCommand::SetOpacity { opacity, .. } if *opacity == 1.0)
    });
    assert!(!early_show, "no line shown before the settle delay");

    engine.fade_complete(scheduled.token).expect("finalize");
    assert_eq!(engine.sink().opacity_of("Chile"), Some(1.0));
    assert_eq!(engine.sink().opacity_of("Japan"), Some(1.0));
}

#[test]
fn duplicate_completion_of_the_same_token_is_inert() {
    let mut engine = engine();
    let scheduled = engine.select_entity("Chile").expect("select").expect("scheduled");

    engine.fade_complete(scheduled.token).expect("first completion");
    let axis_updates = engine.sink().axis_update_count();

    engine.fade_complete(scheduled.token).expect("second completion");
    assert_eq!(engine.sink().axis_update_count(), axis_updates, "no duplicate rescale");
}
