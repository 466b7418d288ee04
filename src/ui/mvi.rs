//! Model-View-Intent primitives shared by the site's state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Snapshot (host renders)
//!    ↑                              │
//!    └──── input / timers ──────────┘
//! ```
//!
//! Reducers are pure. Timers and other effects belong to the controller that
//! owns the state; it learns whether to act from [`Reducer::apply`].

/// Plain data describing one machine (navigation, carousel). Comparable, so
/// an unchanged result means the intent was refused.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A request to change a state: a button press, a swipe, an elapsed
/// transition delay, the host rewriting its address.
pub trait Intent: Send + 'static {}

pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Reduce in place. Returns `false` when the intent left the state as it
    /// was, which callers treat as a dropped request.
    fn apply(state: &mut Self::State, intent: Self::Intent) -> bool {
        let next = Self::reduce(state.clone(), intent);
        if next == *state {
            return false;
        }
        *state = next;
        true
    }
}
