use indexmap::IndexSet;

use crate::core::{DatasetIndex, ValueRange, ValueScale, YearScale};
use crate::error::{ChartError, ChartResult};

/// Owns the chart's numeric domains and the value domain currently in effect.
///
/// The year domain is fixed at construction; the value domain starts at the
/// full-dataset extent and follows the selection from then on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleEngine {
    year_domain: ValueRange,
    full_value_domain: ValueRange,
    current_value_domain: ValueRange,
}

impl ScaleEngine {
    /// Scans the full dataset once and seeds both domains from it.
    pub fn new(index: &DatasetIndex) -> ChartResult<Self> {
        let full_value_domain = Self::compute_full_value_domain(index)?;
        Ok(Self {
            year_domain: index.year_range(),
            full_value_domain,
            current_value_domain: full_value_domain,
        })
    }

    /// Global value extent over every series of every category.
    pub fn compute_full_value_domain(index: &DatasetIndex) -> ChartResult<ValueRange> {
        if index.is_empty() {
            return Err(ChartError::InvalidData(
                "full value domain requires a non-empty dataset".to_owned(),
            ));
        }
        Ok(index.value_range())
    }

    /// Value extent restricted to the selected entities, taken across
    /// **all** categories of each entity, not only the one currently drawn.
    /// Keeping every category in the scan keeps comparisons stable when the
    /// user later switches category.
    pub fn compute_restricted_value_domain(
        index: &DatasetIndex,
        entities: &IndexSet<String>,
    ) -> ChartResult<ValueRange> {
        if entities.is_empty() {
            return Err(ChartError::EmptySelection);
        }

        let mut accumulated: Option<ValueRange> = None;
        for entity in entities {
            let Some(by_category) = index.entity_series(entity) else {
                return Err(ChartError::InvalidData(format!(
                    "selected entity `{entity}` is not present in the dataset index"
                )));
            };
            for series in by_category.values() {
                let Some(extent) = series.value_extent() else {
                    continue;
                };
                accumulated = Some(match accumulated {
                    None => extent,
                    Some(range) => range
                        .expanded_to(extent.min())
                        .expanded_to(extent.max()),
                });
            }
        }

        accumulated.ok_or_else(|| {
            ChartError::InvalidData(
                "selected entities hold no finite observations".to_owned(),
            )
        })
    }

    /// Resolves the value domain a selection implies: the full-dataset
    /// extent for the distinguished empty selection, otherwise the
    /// restricted extent.
    pub fn resolve_value_domain(
        &self,
        index: &DatasetIndex,
        entities: &IndexSet<String>,
    ) -> ChartResult<ValueRange> {
        if entities.is_empty() {
            return Ok(self.full_value_domain);
        }
        Self::compute_restricted_value_domain(index, entities)
    }

    /// True iff `new_domain` differs from the committed domain in either
    /// bound. Rescaling is skipped when unchanged so repeated identical
    /// selections never re-trigger the axis animation.
    #[must_use]
    pub fn decide_rescale(&self, new_domain: ValueRange) -> bool {
        new_domain.differs_from(self.current_value_domain)
    }

    /// Commits a resolved domain as the one in effect.
    pub fn commit(&mut self, domain: ValueRange) {
        self.current_value_domain = domain;
    }

    #[must_use]
    pub fn year_domain(&self) -> ValueRange {
        self.year_domain
    }

    #[must_use]
    pub fn full_value_domain(&self) -> ValueRange {
        self.full_value_domain
    }

    #[must_use]
    pub fn value_domain(&self) -> ValueRange {
        self.current_value_domain
    }

    pub fn year_scale(&self) -> ChartResult<YearScale> {
        YearScale::from_range(self.year_domain)
    }

    pub fn value_scale(&self) -> ChartResult<ValueScale> {
        ValueScale::from_range(self.current_value_domain)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;

    use super::ScaleEngine;
    use crate::core::{DatasetIndex, ObservationRecord, ValueRange};
    use crate::error::ChartError;

    fn sample_index() -> DatasetIndex {
        DatasetIndex::from_records(vec![
            ObservationRecord::new(1990.0, 8.0, "Chile", "male"),
            ObservationRecord::new(2013.0, 22.0, "Chile", "male"),
            ObservationRecord::new(1990.0, 9.0, "Chile", "female"),
            ObservationRecord::new(2013.0, 20.0, "Chile", "female"),
            ObservationRecord::new(1990.0, 5.0, "Japan", "male"),
            ObservationRecord::new(2013.0, 6.0, "Japan", "male"),
            ObservationRecord::new(1990.0, 5.5, "Japan", "female"),
            ObservationRecord::new(2013.0, 35.0, "Japan", "female"),
        ])
        .expect("valid index")
    }

    #[test]
    fn restricted_domain_spans_all_categories_of_the_selection() {
        let index = sample_index();
        let selection: IndexSet<String> = ["Chile".to_owned()].into_iter().collect();

        let domain = ScaleEngine::compute_restricted_value_domain(&index, &selection)
            .expect("restricted domain");
        // Chile's male series bottoms at 8.0 and tops at 22.0; the female
        // series is inside that envelope, so both categories contribute.
        assert_eq!(domain.bounds(), (8.0, 22.0));
    }

    #[test]
    fn empty_selection_is_a_precondition_violation() {
        let index = sample_index();
        let err = ScaleEngine::compute_restricted_value_domain(&index, &IndexSet::new())
            .expect_err("empty selection must fail");
        assert!(matches!(err, ChartError::EmptySelection));
    }

    #[test]
    fn rescale_decision_is_idempotent_after_commit() {
        let index = sample_index();
        let mut engine = ScaleEngine::new(&index).expect("engine");
        let narrowed = ValueRange::new(8.0, 22.0).expect("valid range");

        assert!(engine.decide_rescale(narrowed));
        engine.commit(narrowed);
        assert!(!engine.decide_rescale(narrowed));
    }
}
