use std::cmp::Ordering;

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::core::{Observation, ObservationRecord, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Ordered observations for one (entity, category) pair.
///
/// Canonical form: sorted by year ascending, unique years, finite samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    points: Vec<Observation>,
}

impl Series {
    /// Canonicalizes raw observations: drops non-finite samples, sorts by
    /// year, keeps the last sample on duplicate years.
    #[must_use]
    pub fn from_observations(mut points: Vec<Observation>) -> Self {
        let original_len = points.len();
        points.retain(|point| point.is_finite());
        points.sort_by(|a, b| a.year.total_cmp(&b.year));

        let mut deduped: Vec<Observation> = Vec::with_capacity(points.len());
        let mut duplicate_count = 0_usize;
        for point in points {
            if let Some(last) = deduped.last_mut() {
                if point.year.total_cmp(&last.year) == Ordering::Equal {
                    *last = point;
                    duplicate_count += 1;
                    continue;
                }
            }
            deduped.push(point);
        }

        let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
        if filtered_count > 0 || duplicate_count > 0 {
            warn!(
                filtered_count,
                duplicate_count,
                canonical_count = deduped.len(),
                "canonicalized series observations"
            );
        }
        Self { points: deduped }
    }

    #[must_use]
    pub fn points(&self) -> &[Observation] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn year_extent(&self) -> Option<ValueRange> {
        extent(self.points.iter().map(|point| point.year))
    }

    #[must_use]
    pub fn value_extent(&self) -> Option<ValueRange> {
        extent(self.points.iter().map(|point| point.value))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<ValueRange> {
    values.fold(None, |acc, value| {
        Some(match acc {
            None => ValueRange::seed(value),
            Some(range) => range.expanded_to(value),
        })
    })
}

/// Two-level ordered mapping entity → category → series.
///
/// Built once from the loader's flat records; read-only afterwards. Every
/// entity carries the same global category set, validated at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetIndex {
    entities: IndexMap<String, IndexMap<String, Series>>,
    categories: Vec<String>,
    year_range: ValueRange,
    value_range: ValueRange,
}

impl DatasetIndex {
    /// Groups flat records into the two-level index.
    ///
    /// Entity and category order is first-seen order. The global category
    /// set is enumerated once; an entity whose category set disagrees with
    /// it fails the build rather than silently inheriting the first
    /// entity's keys.
    pub fn from_records(records: Vec<ObservationRecord>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset index cannot be built from zero records".to_owned(),
            ));
        }

        let mut categories: IndexSet<String> = IndexSet::new();
        let mut grouped: IndexMap<String, IndexMap<String, Vec<Observation>>> = IndexMap::new();
        for record in records {
            categories.insert(record.category.clone());
            grouped
                .entry(record.entity)
                .or_default()
                .entry(record.category)
                .or_default()
                .push(Observation::new(record.year, record.value));
        }

        let mut entities: IndexMap<String, IndexMap<String, Series>> =
            IndexMap::with_capacity(grouped.len());
        for (entity, by_category) in grouped {
            if by_category.len() != categories.len()
                || !by_category.keys().all(|key| categories.contains(key))
            {
                return Err(ChartError::CategoryMismatch { entity });
            }

            // Category order inside each entity follows the global list.
            let mut series: IndexMap<String, Series> = IndexMap::with_capacity(categories.len());
            let mut by_category = by_category;
            for category in &categories {
                let observations = by_category.swap_remove(category).unwrap_or_default();
                series.insert(category.clone(), Series::from_observations(observations));
            }
            entities.insert(entity, series);
        }

        let year_range = index_extent(&entities, |point| point.year).ok_or_else(|| {
            ChartError::InvalidData("dataset index holds no finite observations".to_owned())
        })?;
        let value_range = index_extent(&entities, |point| point.value).ok_or_else(|| {
            ChartError::InvalidData("dataset index holds no finite observations".to_owned())
        })?;

        Ok(Self {
            entities,
            categories: categories.into_iter().collect(),
            year_range,
            value_range,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn contains_entity(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.iter().any(|key| key == category)
    }

    #[must_use]
    pub fn series(&self, entity: &str, category: &str) -> Option<&Series> {
        self.entities.get(entity)?.get(category)
    }

    #[must_use]
    pub fn entity_series(&self, entity: &str) -> Option<&IndexMap<String, Series>> {
        self.entities.get(entity)
    }

    /// Year extent over the whole dataset, computed once at build time.
    #[must_use]
    pub fn year_range(&self) -> ValueRange {
        self.year_range
    }

    /// Value extent over the whole dataset, computed once at build time.
    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        self.value_range
    }
}

fn index_extent(
    entities: &IndexMap<String, IndexMap<String, Series>>,
    pick: impl Fn(&Observation) -> f64 + Copy,
) -> Option<ValueRange> {
    extent(
        entities
            .values()
            .flat_map(IndexMap::values)
            .flat_map(|series| series.points().iter().map(pick)),
    )
}
