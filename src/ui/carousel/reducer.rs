use super::intent::CarouselIntent;
use super::state::{CarouselState, Phase};
use crate::ui::mvi::Reducer;

/// Pure transition rules. Requests that are not allowed return the state
/// unchanged, which is how the controller detects a dropped request.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state.phase, intent) {
            (Phase::Idle, CarouselIntent::Advance(direction)) if state.len > 0 => {
                let len = state.len as isize;
                let target = (state.current_index as isize + direction.delta()).rem_euclid(len);
                CarouselState {
                    phase: Phase::Transitioning {
                        target: target as usize,
                    },
                    ..state
                }
            }
            (Phase::Idle, CarouselIntent::Jump(target))
                if target < state.len && target != state.current_index =>
            {
                CarouselState {
                    phase: Phase::Transitioning { target },
                    ..state
                }
            }
            (Phase::Transitioning { target }, CarouselIntent::Commit) => CarouselState {
                current_index: target,
                len: state.len,
                phase: Phase::Idle,
            },
            _ => state,
        }
    }
}
