use tracing::debug;

use crate::core::{DatasetIndex, ObservationRecord, ScaleEngine, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::coordinator::{project_all_paths, visibility_target};
use crate::render::{
    AxisKind, ColorTable, CommandSink, MotionBehavior, StrokeBehavior, VisualCommand,
};
use crate::selection::{
    ScheduledFade, SelectionEvent, SelectionState, TransitionContext, transitions,
};

use super::ChartEngineConfig;

/// Internal engine state behind the public facade.
pub(super) struct EngineCore {
    pub(super) index: DatasetIndex,
    pub(super) scales: ScaleEngine,
    pub(super) colors: ColorTable,
    pub(super) selection: SelectionState,
    pub(super) viewport: Viewport,
    pub(super) motion: MotionBehavior,
    pub(super) stroke: StrokeBehavior,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset index, scale engine, color table and
/// selection state, routes every selection event through the pure transition
/// function, and forwards the resulting visual commands to the sink in order.
pub struct ChartEngine<S: CommandSink> {
    pub(super) sink: S,
    pub(super) core: EngineCore,
}

impl<S: CommandSink> ChartEngine<S> {
    /// Builds the engine from the loader's flat records.
    ///
    /// The dataset index, year domain, full value domain and color table are
    /// all fixed here; the initial state is the all state with the first
    /// category active.
    pub fn new(
        sink: S,
        config: ChartEngineConfig,
        records: Vec<ObservationRecord>,
    ) -> ChartResult<Self> {
        config.validate()?;
        let index = DatasetIndex::from_records(records)?;
        let scales = ScaleEngine::new(&index)?;
        let colors = ColorTable::from_categories(index.categories())?;
        let active_category = index
            .categories()
            .first()
            .cloned()
            .ok_or_else(|| ChartError::InvalidData("dataset carries no categories".to_owned()))?;

        debug!(
            entities = index.len(),
            categories = index.categories().len(),
            "chart engine initialized"
        );

        Ok(Self {
            sink,
            core: EngineCore {
                index,
                scales,
                colors,
                selection: SelectionState::new(active_category),
                viewport: config.viewport,
                motion: config.motion,
                stroke: config.stroke,
            },
        })
    }

    /// Emits the initial frame: axis domains, then one path, stroke and full
    /// opacity per entity, all unanimated.
    pub fn populate(&mut self) -> ChartResult<()> {
        let commands = self.full_frame_commands()?;
        for command in &commands {
            self.sink.apply(command)?;
        }
        Ok(())
    }

    /// Re-emits the whole frame from current state: current scales, current
    /// category, visibility targets and hover highlight.
    pub fn refresh(&mut self) -> ChartResult<()> {
        self.populate()
    }

    fn full_frame_commands(&self) -> ChartResult<Vec<VisualCommand>> {
        let core = &self.core;
        let mut commands = vec![
            VisualCommand::SetAxisDomain {
                axis: AxisKind::Year,
                domain: core.scales.year_domain(),
                animated: false,
                duration_ms: 0,
            },
            VisualCommand::SetAxisDomain {
                axis: AxisKind::Value,
                domain: core.scales.value_domain(),
                animated: false,
                duration_ms: 0,
            },
        ];

        let category = core.selection.active_category();
        let color = core.colors.color_of(category).ok_or_else(|| {
            ChartError::InvalidData(format!("no color assigned to category `{category}`"))
        })?;
        let paths = project_all_paths(
            &core.index,
            category,
            core.scales.year_scale()?,
            core.scales.value_scale()?,
            core.viewport,
        )?;
        for (entity, points) in paths {
            let hovered = core.selection.hovered() == Some(entity.as_str());
            let visible = visibility_target(core.selection.selected(), &entity);
            commands.push(VisualCommand::DrawPath {
                entity: entity.clone(),
                points,
                animated: false,
                duration_ms: 0,
            });
            commands.push(VisualCommand::SetStroke {
                entity: entity.clone(),
                color: if hovered { core.stroke.hover_color } else { color },
                width: if hovered {
                    core.stroke.hover_width
                } else {
                    core.stroke.base_width
                },
            });
            commands.push(VisualCommand::SetOpacity {
                entity,
                opacity: if visible { 1.0 } else { 0.0 },
                animated: false,
                duration_ms: 0,
            });
        }
        Ok(commands)
    }

    /// Routes one event through the pure transition function and performs
    /// the effects it returned.
    pub(super) fn dispatch(&mut self, event: SelectionEvent) -> ChartResult<Option<ScheduledFade>> {
        let core = &mut self.core;
        let ctx = TransitionContext {
            index: &core.index,
            scales: &core.scales,
            colors: &core.colors,
            viewport: core.viewport,
            motion: core.motion,
            stroke: core.stroke,
        };
        let output = transitions::apply(&mut core.selection, event, &ctx)?;

        if let Some(domain) = output.committed_value_domain {
            core.scales.commit(domain);
        }
        for command in &output.commands {
            self.sink.apply(command)?;
        }
        Ok(output.scheduled)
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
