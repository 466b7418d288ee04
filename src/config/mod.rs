//! Site configuration: timings, routes, intro, forms and the confession deck.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, FormsConfig, IntroConfig, PartnerLogo, PartnersConfig, RoutesConfig,
    SubmissionsConfig, TimingConfig,
};
