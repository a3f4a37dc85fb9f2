use std::collections::BTreeMap;

use crate::{
    animation::{
        action::{Action, ActionSequence, MoveTo},
        interp::curve_for,
    },
    document::model::{AnimationBlock, TimelineDef},
    foundation::{
        core::Point,
        diag::{Diagnostic, DiagnosticSink, Severity},
        error::{UiError, UiResult},
    },
};

/// Property name of the only timeline kind that compiles.
pub const POSITION_PROPERTY: &str = "Position";

/// Compile the Position timelines of an animation block into move sequences keyed by action tag.
///
/// Keyframes keep document order. Each keyframe becomes one move lasting
/// `speed / duration * frame_index` seconds. Later timelines with the same tag replace earlier
/// ones. Easing codes outside the table are reported and the move plays linearly.
///
/// Fails when a Position keyframe has to be compiled while the block duration is zero, negative,
/// or not finite, when the speed is not finite, or when a frame index is negative.
pub fn compile_animation(
    block: &AnimationBlock,
    sink: &dyn DiagnosticSink,
) -> UiResult<BTreeMap<i32, ActionSequence>> {
    let mut out = BTreeMap::new();
    let mut seconds_per_frame: Option<f64> = None;

    for timeline in &block.timelines {
        if timeline.property != POSITION_PROPERTY {
            tracing::trace!(
                action_tag = timeline.action_tag,
                property = %timeline.property,
                "skipping non-position timeline"
            );
            continue;
        }

        let mut seq = ActionSequence::new();
        for frame in &timeline.frames {
            let step = match seconds_per_frame {
                Some(step) => step,
                None => {
                    let step = frame_step(block)?;
                    seconds_per_frame = Some(step);
                    step
                }
            };
            if frame.frame_index < 0 {
                return Err(UiError::animation(format!(
                    "timeline {}: negative frame index {}",
                    timeline.action_tag, frame.frame_index
                )));
            }

            let curve = curve_for(frame.easing.kind);
            if curve.is_none() {
                sink.emit(Diagnostic::new(
                    Severity::Debug,
                    format!(
                        "timeline {}: easing code {} out of range, frame {} plays linearly",
                        timeline.action_tag, frame.easing.kind, frame.frame_index
                    ),
                ));
            }

            seq.push(Action::MoveTo(MoveTo {
                target: Point::new(frame.x, frame.y),
                duration: step * frame.frame_index as f64,
                curve,
            }));
        }

        replace_sequence(&mut out, timeline, seq);
    }

    Ok(out)
}

fn frame_step(block: &AnimationBlock) -> UiResult<f64> {
    if !block.duration.is_finite() || block.duration <= 0.0 {
        return Err(UiError::animation(format!(
            "animation duration must be finite and positive, got {}",
            block.duration
        )));
    }
    if !block.speed.is_finite() {
        return Err(UiError::animation(format!(
            "animation speed must be finite, got {}",
            block.speed
        )));
    }
    Ok(block.speed / block.duration)
}

fn replace_sequence(
    out: &mut BTreeMap<i32, ActionSequence>,
    timeline: &TimelineDef,
    seq: ActionSequence,
) {
    if out.insert(timeline.action_tag, seq).is_some() {
        tracing::debug!(
            action_tag = timeline.action_tag,
            "position timeline replaced an earlier one with the same tag"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
