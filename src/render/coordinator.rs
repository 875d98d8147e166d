use indexmap::IndexSet;
use tracing::warn;

use crate::core::{DatasetIndex, Series, ValueScale, Viewport, YearScale};
use crate::error::ChartResult;
use crate::render::{PathPoint, VisualCommand};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Projects one series into ordered pixel-space path points.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry output.
pub fn project_path(
    series: &Series,
    year_scale: YearScale,
    value_scale: ValueScale,
    viewport: Viewport,
) -> ChartResult<Vec<PathPoint>> {
    let mut points = Vec::with_capacity(series.len());
    for observation in series.points() {
        let x = year_scale.year_to_pixel(observation.year, viewport)?;
        let y = value_scale.value_to_pixel(observation.value, viewport)?;
        points.push(PathPoint::new(x, y));
    }
    Ok(points)
}

/// Visibility rule for one entity: visible iff the selection is empty or the
/// entity is part of it.
#[must_use]
pub fn visibility_target(selected: &IndexSet<String>, entity: &str) -> bool {
    selected.is_empty() || selected.contains(entity)
}

/// Projects the active-category series of every entity, in index order.
///
/// An entity whose series is absent or empty for the category is skipped and
/// logged; the chart degrades to a missing line rather than failing.
pub fn project_all_paths(
    index: &DatasetIndex,
    category: &str,
    year_scale: YearScale,
    value_scale: ValueScale,
    viewport: Viewport,
) -> ChartResult<Vec<(String, Vec<PathPoint>)>> {
    let entities: Vec<&str> = index.entity_names().collect();

    #[cfg(feature = "parallel-projection")]
    let projected: Vec<ChartResult<Option<(String, Vec<PathPoint>)>>> = entities
        .par_iter()
        .map(|&entity| {
            project_entity_path(index, entity, category, year_scale, value_scale, viewport)
        })
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let projected: Vec<ChartResult<Option<(String, Vec<PathPoint>)>>> = entities
        .iter()
        .map(|&entity| {
            project_entity_path(index, entity, category, year_scale, value_scale, viewport)
        })
        .collect();

    let mut paths = Vec::with_capacity(projected.len());
    for outcome in projected {
        if let Some(path) = outcome? {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn project_entity_path(
    index: &DatasetIndex,
    entity: &str,
    category: &str,
    year_scale: YearScale,
    value_scale: ValueScale,
    viewport: Viewport,
) -> ChartResult<Option<(String, Vec<PathPoint>)>> {
    let Some(series) = index.series(entity, category) else {
        warn!(entity, category, "missing series; rendering nothing for entity");
        return Ok(None);
    };
    if series.is_empty() {
        warn!(entity, category, "missing series; rendering nothing for entity");
        return Ok(None);
    }
    let points = project_path(series, year_scale, value_scale, viewport)?;
    Ok(Some((entity.to_owned(), points)))
}

/// Path-update commands for every entity under the given scales.
///
/// Used on rescale ("update all lines") and on category switch; hidden lines
/// are re-projected too, which is inert at zero opacity.
pub fn update_all_paths_commands(
    index: &DatasetIndex,
    category: &str,
    year_scale: YearScale,
    value_scale: ValueScale,
    viewport: Viewport,
    animated: bool,
    duration_ms: u64,
) -> ChartResult<Vec<VisualCommand>> {
    let paths = project_all_paths(index, category, year_scale, value_scale, viewport)?;
    Ok(paths
        .into_iter()
        .map(|(entity, points)| VisualCommand::DrawPath {
            entity,
            points,
            animated,
            duration_ms,
        })
        .collect())
}
