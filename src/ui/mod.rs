//! Site state machines and the shell that hosts them.

pub mod app;
pub mod carousel;
pub mod events;
pub mod intro;
pub mod mvi;
pub mod nav;
pub mod quill;
pub mod runtime;
pub mod sequencer;
pub mod typewriter;
pub mod views;
