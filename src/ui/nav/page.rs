use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Waitlist,
    Partners,
    Nomination,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Waitlist, Page::Partners, Page::Nomination];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Waitlist => "waitlist",
            Page::Partners => "partners",
            Page::Nomination => "nomination",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page '{0}' (expected home, waitlist, partners or nomination)")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}
