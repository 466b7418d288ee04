//! The confession carousel on the home page.
//!
//! [`CarouselReducer`] owns the `Idle`/`Transitioning` state machine and
//! [`CarouselController`] wires it to timers: the transition delay, the
//! autoplay sequencer and the text/tagline typewriters.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{CarouselController, CarouselEvent, CarouselTiming, Gesture};
pub use intent::{CarouselIntent, Direction};
pub use reducer::CarouselReducer;
pub use state::{CarouselState, Phase};
