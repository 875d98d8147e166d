use indexmap::IndexSet;
use multiline_rs::core::{DatasetIndex, ObservationRecord, ScaleEngine};
use multiline_rs::error::ChartError;

fn sample_index() -> DatasetIndex {
    DatasetIndex::from_records(vec![
        ObservationRecord::new(1990.0, 8.0, "Chile", "male"),
        ObservationRecord::new(2013.0, 22.0, "Chile", "male"),
        ObservationRecord::new(1990.0, 9.0, "Chile", "female"),
        ObservationRecord::new(2013.0, 20.0, "Chile", "female"),
        ObservationRecord::new(1990.0, 6.0, "Japan", "male"),
        ObservationRecord::new(2013.0, 7.0, "Japan", "male"),
        ObservationRecord::new(1990.0, 5.0, "Japan", "female"),
        ObservationRecord::new(2013.0, 12.0, "Japan", "female"),
        ObservationRecord::new(1990.0, 2.0, "Norway", "male"),
        ObservationRecord::new(2013.0, 3.0, "Norway", "male"),
        ObservationRecord::new(1990.0, 2.5, "Norway", "female"),
        ObservationRecord::new(2013.0, 35.0, "Norway", "female"),
    ])
    .expect("valid index")
}

fn selection(names: &[&str]) -> IndexSet<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn full_domain_covers_every_series_of_every_category() {
    let index = sample_index();
    let domain = ScaleEngine::compute_full_value_domain(&index).expect("full domain");
    assert_eq!(domain.bounds(), (2.0, 35.0));
}

#[test]
fn restricted_domain_uses_all_categories_not_only_the_drawn_one() {
    let index = sample_index();

    // Norway's male series spans [2, 3]; the female series reaches 35.
    // Both contribute, regardless of which category line is on screen.
    let domain = ScaleEngine::compute_restricted_value_domain(&index, &selection(&["Norway"]))
        .expect("restricted domain");
    assert_eq!(domain.bounds(), (2.0, 35.0));

    let domain = ScaleEngine::compute_restricted_value_domain(&index, &selection(&["Japan"]))
        .expect("restricted domain");
    assert_eq!(domain.bounds(), (5.0, 12.0));
}

#[test]
fn restricted_domain_of_a_union_covers_both_entities() {
    let index = sample_index();
    let domain =
        ScaleEngine::compute_restricted_value_domain(&index, &selection(&["Chile", "Japan"]))
            .expect("restricted domain");
    assert_eq!(domain.bounds(), (5.0, 22.0));
}

#[test]
fn empty_selection_resolves_to_the_full_domain() {
    let index = sample_index();
    let engine = ScaleEngine::new(&index).expect("engine");

    let resolved = engine
        .resolve_value_domain(&index, &IndexSet::new())
        .expect("resolved domain");
    assert_eq!(resolved, engine.full_value_domain());
}

#[test]
fn restricted_domain_with_empty_selection_is_a_precondition_violation() {
    let index = sample_index();
    let err = ScaleEngine::compute_restricted_value_domain(&index, &IndexSet::new())
        .expect_err("must fail");
    assert!(matches!(err, ChartError::EmptySelection));
}

#[test]
fn rescale_decision_is_false_for_an_identical_domain() {
    let index = sample_index();
    let mut engine = ScaleEngine::new(&index).expect("engine");

    let restricted = engine
        .resolve_value_domain(&index, &selection(&["Chile"]))
        .expect("restricted domain");
    assert!(engine.decide_rescale(restricted));
    engine.commit(restricted);

    // The same selection resolved again must not re-trigger anything.
    let repeated = engine
        .resolve_value_domain(&index, &selection(&["Chile"]))
        .expect("restricted domain");
    assert!(!engine.decide_rescale(repeated));
}

#[test]
fn year_domain_is_fixed_at_construction() {
    let index = sample_index();
    let mut engine = ScaleEngine::new(&index).expect("engine");
    assert_eq!(engine.year_domain().bounds(), (1990.0, 2013.0));

    let restricted = engine
        .resolve_value_domain(&index, &selection(&["Norway"]))
        .expect("restricted domain");
    engine.commit(restricted);
    assert_eq!(engine.year_domain().bounds(), (1990.0, 2013.0));
}
