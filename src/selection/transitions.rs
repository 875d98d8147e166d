use tracing::{debug, warn};

use crate::core::{DatasetIndex, ScaleEngine, ValueRange, ValueScale, Viewport};
use crate::error::ChartResult;
use crate::render::coordinator::{project_all_paths, update_all_paths_commands};
use crate::render::{
    AxisKind, ColorTable, MotionBehavior, StrokeBehavior, VisualCommand,
};
use crate::selection::{FadeToken, Phase, SelectionEvent, SelectionState};

/// Read-only collaborators a transition consults.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub index: &'a DatasetIndex,
    pub scales: &'a ScaleEngine,
    pub colors: &'a ColorTable,
    pub viewport: Viewport,
    pub motion: MotionBehavior,
    pub stroke: StrokeBehavior,
}

/// Delayed follow-up a transition asks the host to schedule.
///
/// The host delivers `SelectionEvent::FadeComplete(token)` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledFade {
    pub token: FadeToken,
    pub delay_ms: u64,
}

/// Everything a transition produced, as data.
///
/// The caller forwards `commands` to the sink in order, commits
/// `committed_value_domain` into the scale engine when present, and
/// schedules `scheduled` when present.
#[derive(Debug, Default)]
pub struct TransitionOutput {
    pub commands: Vec<VisualCommand>,
    pub committed_value_domain: Option<ValueRange>,
    pub scheduled: Option<ScheduledFade>,
}

impl TransitionOutput {
    fn noop() -> Self {
        Self::default()
    }
}

/// Value domain in effect while one transition runs.
///
/// A transition can rescale more than once (superseding a pending phase and
/// then applying the new event); the cursor keeps the decision gate exact
/// across those steps without mutating the scale engine.
struct DomainCursor {
    current: ValueRange,
    committed: Option<ValueRange>,
}

impl DomainCursor {
    fn new(current: ValueRange) -> Self {
        Self {
            current,
            committed: None,
        }
    }

    fn commit(&mut self, domain: ValueRange) {
        self.current = domain;
        self.committed = Some(domain);
    }
}

/// Applies one selection event to the state, returning every effect as data.
///
/// Deterministic and free of I/O (apart from tracing): the chart state
/// machine is testable without any rendering collaborator.
pub fn apply(
    state: &mut SelectionState,
    event: SelectionEvent,
    ctx: &TransitionContext<'_>,
) -> ChartResult<TransitionOutput> {
    match event {
        SelectionEvent::SelectEntity(name) => select_entity(state, name, ctx),
        SelectionEvent::DeselectEntity(name) => deselect_entity(state, name, ctx),
        SelectionEvent::SelectAll => select_all(state, ctx),
        SelectionEvent::SetActiveCategory(key) => set_active_category(state, key, ctx),
        SelectionEvent::HoverEntity(name) => hover_entity(state, name, ctx),
        SelectionEvent::UnhoverEntity(name) => unhover_entity(state, name, ctx),
        SelectionEvent::FadeComplete(token) => fade_complete(state, token, ctx),
    }
}

fn select_entity(
    state: &mut SelectionState,
    name: String,
    ctx: &TransitionContext<'_>,
) -> ChartResult<TransitionOutput> {
    if !ctx.index.contains_entity(&name) {
        warn!(entity = %name, "rejecting selection of unknown entity");
        return Ok(TransitionOutput::noop());
    }

    let mut output = TransitionOutput::noop();
    let mut cursor = DomainCursor::new(ctx.scales.value_domain());
    finalize_pending(state, ctx, &mut cursor, &mut output.commands)?;

    if state.all_mode {
        // Leave the all state: fade out every other line now, and only
        // replace the selection set once the fade settles so all lines do
        // not visibly rescale at once.
        state.all_mode = false;
        for entity in ctx.index.entity_names() {
            let opacity = if entity == name { 1.0 } else { 0.0 };
            output.commands.push(VisualCommand::SetOpacity {
                entity: entity.to_owned(),
                opacity,
                animated: true,
                duration_ms: ctx.motion.fade_duration_ms,
            });
        }
        let token = state.issue_token();
        state.phase = Phase::AwaitingFadeOut {
            target: name,
            token,
        };
        output.scheduled = Some(ScheduledFade {
            token,
            delay_ms: ctx.motion.settle_delay_ms,
        });
    } else {
        if state.selected.contains(&name) {
            output.committed_value_domain = cursor.committed;
            return Ok(output);
        }
        state.selected.insert(name.clone());
        emit_rescale_if_needed(state, ctx, &mut cursor, &mut output.commands)?;
        output.commands.push(VisualCommand::SetOpacity {
            entity: name,
            opacity: 1.0,
            animated: true,
            duration_ms: ctx.motion.fade_duration_ms,
        });
    }

    output.committed_value_domain = cursor.committed;
    Ok(output)
}

fn deselect_entity(
    state: &mut SelectionState,
    name: String,
    ctx: &TransitionContext<'_>,
) -> ChartResult<TransitionOutput> {
    if !ctx.index.contains_entity(&name) {
        warn!(entity = %name, "rejecting deselection of unknown entity");
        return Ok(TransitionOutput::noop());
    }

    let mut output = TransitionOutput::noop();
    let mut cursor = DomainCursor::new(ctx.scales.value_domain());
    finalize_pending(state, ctx, &mut cursor, &mut output.commands)?;

    if !state.selected.swap_remove(&name) {
        output.committed_value_domain = cursor.committed;
        return Ok(output);
    }

    // An emptied set scales back to the full domain, but the all control's
    // own state is not reasserted.
    emit_rescale_if_needed(state, ctx, &mut cursor, &mut output.commands)?;
    output.commands.push(VisualCommand::SetOpacity {
        entity: name,
        opacity: 0.0,
        animated: true,
        duration_ms: ctx.motion.fade_duration_ms,
    });

    output.committed_value_domain = cursor.committed;
    Ok(output)
}

fn select_all(
    state: &mut SelectionState,
    ctx: &TransitionContext<'_>,
) -> ChartResult<TransitionOutput> {
    if state.all_mode {
        return Ok(TransitionOutput::noop());
    }

    let mut output = TransitionOutput::noop();
    let mut cursor = DomainCursor::new(ctx.scales.value_domain());
    finalize_pending(state, ctx, &mut cursor, &mut output.commands)?;

    state.all_mode = true;
    state.selected.clear();
    emit_rescale_if_needed(state, ctx, &mut cursor, &mut output.commands)?;

    // Lines fade back in only after in-flight per-line fades settle.
    let token = state.issue_token();
    state.phase = Phase::AwaitingShowAll { token };
    output.scheduled = Some(ScheduledFade {
        token,
        delay_ms: ctx.motion.settle_delay_ms,
    });

    output.committed_value_domain = cursor.committed;
    Ok(output)
}

fn set_active_category(
    state: &mut SelectionState,
    key: String,
    ctx: &TransitionContext<'_>,
) -> ChartResult<TransitionOutput> {
    if !ctx.index.contains_category(&key) {
        warn!(category = %key, "rejecting switch to unknown category");
        return Ok(TransitionOutput::noop());
    }
    if key == state.active_category {
        return Ok(TransitionOutput::noop());
    }

    state.active_category = key.clone();

    // Geometry and stroke change; the value domain is selection-based and
    // stays untouched.
    let mut output = TransitionOutput::noop();
    let year_scale = ctx.scales.year_scale()?;
    let value_scale = ctx.scales.value_scale()?;
    let paths = project_all_paths(ctx.index, &key, year_scale, value_scale, ctx.viewport)?;
    let Some(color) = ctx.colors.color_of(&key) else {
        warn!(category = %key, "no color assigned to category; leaving strokes unchanged");
        return Ok(output);
    };
    for (entity, points) in paths {
        let keep_highlight = state.hovered.as_deref() == Some(entity.as_str());
        output.commands.push(VisualCommand::DrawPath {
            entity: entity.clone(),
            points,
            animated: true,
            duration_ms: ctx.motion.rescale_duration_ms,
        });
        if !keep_highlight {
            output.commands.push(VisualCommand::SetStroke {
                entity,
                color,
                width: ctx.stroke.base_width,
            });
        }
    }
    Ok(output)
}

fn hover_entity(
    state: &mut SelectionState,
    name: String,
    ctx: &TransitionContext<'_>,
) -> ChartResult<TransitionOutput> {
    if !ctx.index.contains_entity(&name) {
        warn!(entity = %name, "ignoring hover over unknown entity");
        return Ok(TransitionOutput::noop());
    }

    state.hovered = Some(name.clone());
    let mut output = TransitionOutput::noop();
    output.commands.push(VisualCommand::SetStroke {
        entity: name,
        color: ctx.stroke.hover_color,
        width: ctx.stroke.hover_width,
    });
    Ok(output)
}

fn unhover_entity(
    state: &mut SelectionState,
    name: String,
    ctx: &TransitionContext<'_>,
) -> ChartResult<TransitionOutput> {
    if !ctx.index.contains_entity(&name) {
        warn!(entity = %name, "ignoring hover exit for unknown entity");
        return Ok(TransitionOutput::noop());
    }

    if state.hovered.as_deref() == Some(name.as_str()) {
        state.hovered = None;
    }

    let mut output = TransitionOutput::noop();
    let Some(color) = ctx.colors.color_of(&state.active_category) else {
        warn!(
            category = %state.active_category,
            "no color assigned to active category; leaving stroke unchanged"
        );
        return Ok(output);
    };
    output.commands.push(VisualCommand::SetStroke {
        entity: name,
        color,
        width: ctx.stroke.base_width,
    });
    Ok(output)
}

fn fade_complete(
    state: &mut SelectionState,
    token: FadeToken,
    ctx: &TransitionContext<'_>,
) -> ChartResult<TransitionOutput> {
    let expected = match &state.phase {
        Phase::Idle => None,
        Phase::AwaitingFadeOut { token, .. } | Phase::AwaitingShowAll { token } => Some(*token),
    };
    if expected != Some(token) {
        debug!("ignoring stale fade completion");
        return Ok(TransitionOutput::noop());
    }

    let mut output = TransitionOutput::noop();
    let mut cursor = DomainCursor::new(ctx.scales.value_domain());
    finalize_phase(state, ctx, &mut cursor, &mut output.commands)?;
    output.committed_value_domain = cursor.committed;
    Ok(output)
}

/// Supersedes a pending phase before a new selection event takes effect.
fn finalize_pending(
    state: &mut SelectionState,
    ctx: &TransitionContext<'_>,
    cursor: &mut DomainCursor,
    commands: &mut Vec<VisualCommand>,
) -> ChartResult<()> {
    if !matches!(state.phase, Phase::Idle) {
        debug!("superseding pending fade phase");
        finalize_phase(state, ctx, cursor, commands)?;
    }
    Ok(())
}

/// Advances the current phase to completion, observing live state.
fn finalize_phase(
    state: &mut SelectionState,
    ctx: &TransitionContext<'_>,
    cursor: &mut DomainCursor,
    commands: &mut Vec<VisualCommand>,
) -> ChartResult<()> {
    match std::mem::replace(&mut state.phase, Phase::Idle) {
        Phase::Idle => {}
        Phase::AwaitingFadeOut { target, .. } => {
            state.selected.clear();
            state.selected.insert(target);
            emit_rescale_if_needed(state, ctx, cursor, commands)?;
        }
        Phase::AwaitingShowAll { .. } => {
            for entity in ctx.index.entity_names() {
                commands.push(VisualCommand::SetOpacity {
                    entity: entity.to_owned(),
                    opacity: 1.0,
                    animated: true,
                    duration_ms: ctx.motion.fade_duration_ms,
                });
            }
        }
    }
    Ok(())
}

/// Resolves the domain the current selection implies and, when it differs
/// from the one in effect, emits the axis update plus path updates for every
/// line under the new scale.
fn emit_rescale_if_needed(
    state: &SelectionState,
    ctx: &TransitionContext<'_>,
    cursor: &mut DomainCursor,
    commands: &mut Vec<VisualCommand>,
) -> ChartResult<()> {
    let new_domain = if state.selected.is_empty() {
        ctx.scales.full_value_domain()
    } else {
        ScaleEngine::compute_restricted_value_domain(ctx.index, &state.selected)?
    };

    if !new_domain.differs_from(cursor.current) {
        return Ok(());
    }
    cursor.commit(new_domain);

    commands.push(VisualCommand::SetAxisDomain {
        axis: AxisKind::Value,
        domain: new_domain,
        animated: true,
        duration_ms: ctx.motion.rescale_duration_ms,
    });
    let year_scale = ctx.scales.year_scale()?;
    let value_scale = ValueScale::from_range(new_domain)?;
    commands.extend(update_all_paths_commands(
        ctx.index,
        &state.active_category,
        year_scale,
        value_scale,
        ctx.viewport,
        true,
        ctx.motion.rescale_duration_ms,
    )?);
    Ok(())
}
