//! Headless core of the Erocras landing site.
//!
//! The crate owns everything on the site that has timing or state-machine
//! behaviour: page navigation, the confession carousel with its typewriter
//! reveals, the intro sequence, the partner reveal and the two forms'
//! submission boundary. Rendering is left to the host, which reads
//! [`ui::app::SiteSnapshot`]s.

pub mod confessions;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod submit;
pub mod timer;
pub mod ui;
