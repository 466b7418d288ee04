use crate::confessions::Confession;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub intro: IntroConfig,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub partners: PartnersConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub submissions: SubmissionsConfig,
    /// Replaces the built-in confession deck when non-empty.
    #[serde(default)]
    pub confessions: Vec<Confession>,
}

/// Durations of the carousel and the home page interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay between a next/prev request and the index commit (default: 600).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Delay between a dot-jump request and the index commit (default: 300).
    #[serde(default = "default_jump_transition_ms")]
    pub jump_transition_ms: u64,
    /// How long a confession stays before autoplay advances (default: 9000).
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,
    /// Per-character interval of the confession text (default: 40).
    #[serde(default = "default_text_interval_ms")]
    pub text_interval_ms: u64,
    /// Pause between the text finishing and the tagline starting (default: 800).
    #[serde(default = "default_tagline_pause_ms")]
    pub tagline_pause_ms: u64,
    /// Per-character interval of the tagline (default: 30).
    #[serde(default = "default_tagline_interval_ms")]
    pub tagline_interval_ms: u64,
    /// Grace period after a sticky-note drag during which clicks are
    /// ignored (default: 100).
    #[serde(default = "default_drag_release_ms")]
    pub drag_release_ms: u64,
}

/// Optional intro shown before the first page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Dwell of each intro part in milliseconds (default: [2500, 2500]).
    #[serde(default = "default_intro_steps_ms")]
    pub step_ms: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Delay between a successful submit and the return to home (default: 1500).
    #[serde(default = "default_return_home_ms")]
    pub return_home_ms: u64,
    /// Per-character interval when an accepted email suggestion is written
    /// out (default: 60).
    #[serde(default = "default_suggestion_interval_ms")]
    pub suggestion_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnersConfig {
    #[serde(default = "default_partner_logos")]
    pub logos: Vec<PartnerLogo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerLogo {
    pub name: String,
    /// Delay after mount before the logo is drawn.
    pub delay_ms: u64,
}

/// Address of each page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_home_route")]
    pub home: String,
    #[serde(default = "default_waitlist_route")]
    pub waitlist: String,
    #[serde(default = "default_partners_route")]
    pub partners: String,
    #[serde(default = "default_nomination_route")]
    pub nomination: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionsConfig {
    /// Append submissions to this JSON-lines file. Kept in memory when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_transition_ms() -> u64 {
    600
}

fn default_jump_transition_ms() -> u64 {
    300
}

fn default_dwell_ms() -> u64 {
    9000
}

fn default_text_interval_ms() -> u64 {
    40
}

fn default_tagline_pause_ms() -> u64 {
    800
}

fn default_tagline_interval_ms() -> u64 {
    30
}

fn default_drag_release_ms() -> u64 {
    100
}

fn default_intro_steps_ms() -> Vec<u64> {
    vec![2500, 2500]
}

fn default_return_home_ms() -> u64 {
    1500
}

fn default_suggestion_interval_ms() -> u64 {
    60
}

fn default_partner_logos() -> Vec<PartnerLogo> {
    [200, 500, 800]
        .into_iter()
        .enumerate()
        .map(|(i, delay_ms)| PartnerLogo {
            name: format!("Partner {}", i + 1),
            delay_ms,
        })
        .collect()
}

fn default_home_route() -> String {
    "/".to_string()
}

fn default_waitlist_route() -> String {
    "/waitlist".to_string()
}

fn default_partners_route() -> String {
    "/partners".to_string()
}

fn default_nomination_route() -> String {
    "/nomination".to_string()
}

impl TimingConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn jump_transition(&self) -> Duration {
        Duration::from_millis(self.jump_transition_ms)
    }

    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    pub fn text_interval(&self) -> Duration {
        Duration::from_millis(self.text_interval_ms)
    }

    pub fn tagline_pause(&self) -> Duration {
        Duration::from_millis(self.tagline_pause_ms)
    }

    pub fn tagline_interval(&self) -> Duration {
        Duration::from_millis(self.tagline_interval_ms)
    }

    pub fn drag_release(&self) -> Duration {
        Duration::from_millis(self.drag_release_ms)
    }
}

impl IntroConfig {
    pub fn steps(&self) -> Vec<Duration> {
        self.step_ms.iter().copied().map(Duration::from_millis).collect()
    }
}

impl FormsConfig {
    pub fn return_home(&self) -> Duration {
        Duration::from_millis(self.return_home_ms)
    }

    pub fn suggestion_interval(&self) -> Duration {
        Duration::from_millis(self.suggestion_interval_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            jump_transition_ms: default_jump_transition_ms(),
            dwell_ms: default_dwell_ms(),
            text_interval_ms: default_text_interval_ms(),
            tagline_pause_ms: default_tagline_pause_ms(),
            tagline_interval_ms: default_tagline_interval_ms(),
            drag_release_ms: default_drag_release_ms(),
        }
    }
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            step_ms: default_intro_steps_ms(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            return_home_ms: default_return_home_ms(),
            suggestion_interval_ms: default_suggestion_interval_ms(),
        }
    }
}

impl Default for PartnersConfig {
    fn default() -> Self {
        Self {
            logos: default_partner_logos(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: default_home_route(),
            waitlist: default_waitlist_route(),
            partners: default_partners_route(),
            nomination: default_nomination_route(),
        }
    }
}
