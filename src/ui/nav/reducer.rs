use super::intent::NavIntent;
use super::state::NavState;
use crate::ui::mvi::Reducer;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let target = match intent {
            NavIntent::Navigate { target } => target,
            NavIntent::AddressChanged { page } => page,
        };
        if target == state.current {
            return state;
        }
        NavState {
            current: target,
            previous: Some(state.current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::nav::Page;

    #[test]
    fn both_intents_share_the_transition() {
        let start = NavState::new(Page::Home);
        let via_navigate = NavReducer::reduce(start, NavIntent::Navigate { target: Page::Partners });
        let via_address = NavReducer::reduce(start, NavIntent::AddressChanged { page: Page::Partners });
        assert_eq!(via_navigate, via_address);
        assert_eq!(via_navigate.previous, Some(Page::Home));
    }

    #[test]
    fn same_page_keeps_state() {
        let start = NavState {
            current: Page::Waitlist,
            previous: Some(Page::Home),
        };
        let next = NavReducer::reduce(start, NavIntent::Navigate { target: Page::Waitlist });
        assert_eq!(next, start);
    }
}
