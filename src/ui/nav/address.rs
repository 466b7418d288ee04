//! Mapping between pages and the host's address representation.

use super::page::Page;
use crate::config::RoutesConfig;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressMapError {
    #[error("pages '{first}' and '{second}' both resolve from address key '{key}'")]
    Duplicate {
        first: Page,
        second: Page,
        key: String,
    },
}

/// Reduce an address to its lookup key.
///
/// Query strings and `#fragment` suffixes are ignored, surrounding slashes
/// trimmed and the result lowercased. A leading `#` is treated as hash
/// routing (`#/waitlist` is the same key as `/waitlist`).
pub fn normalize_address(address: &str) -> String {
    let address = address.trim();
    let address = address.strip_prefix('#').unwrap_or(address);
    let path = address.split(['?', '#']).next().unwrap_or_default();
    path.trim_matches('/').to_ascii_lowercase()
}

/// Bijection between the four pages and their addresses.
#[derive(Debug, Clone)]
pub struct AddressMap {
    addresses: [String; 4],
    keys: HashMap<String, Page>,
}

impl AddressMap {
    pub fn new(
        home: impl Into<String>,
        waitlist: impl Into<String>,
        partners: impl Into<String>,
        nomination: impl Into<String>,
    ) -> Result<Self, AddressMapError> {
        let addresses = [home.into(), waitlist.into(), partners.into(), nomination.into()];
        let mut keys = HashMap::new();
        for (page, address) in Page::ALL.into_iter().zip(addresses.iter()) {
            let key = normalize_address(address);
            if let Some(first) = keys.insert(key.clone(), page) {
                return Err(AddressMapError::Duplicate {
                    first,
                    second: page,
                    key,
                });
            }
        }
        Ok(Self { addresses, keys })
    }

    pub fn from_routes(routes: &RoutesConfig) -> Result<Self, AddressMapError> {
        Self::new(
            routes.home.as_str(),
            routes.waitlist.as_str(),
            routes.partners.as_str(),
            routes.nomination.as_str(),
        )
    }

    pub fn address_of(&self, page: Page) -> &str {
        &self.addresses[slot(page)]
    }

    /// Exact lookup; `None` when the address names no page.
    pub fn lookup(&self, address: &str) -> Option<Page> {
        self.keys.get(&normalize_address(address)).copied()
    }

    /// Resolve an address, falling back to [`Page::Home`] for anything
    /// unrecognized.
    pub fn resolve(&self, address: &str) -> Page {
        self.lookup(address).unwrap_or_else(|| {
            tracing::debug!(address, "unrecognized address, resolving to home");
            Page::Home
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Page, &str)> {
        Page::ALL
            .into_iter()
            .map(move |page| (page, self.address_of(page)))
    }
}

impl Default for AddressMap {
    fn default() -> Self {
        Self::new("/", "/waitlist", "/partners", "/nomination")
            .unwrap_or_else(|_| unreachable!("default routes are distinct"))
    }
}

fn slot(page: Page) -> usize {
    match page {
        Page::Home => 0,
        Page::Waitlist => 1,
        Page::Partners => 2,
        Page::Nomination => 3,
    }
}

/// Host side of the address: something that can show and change it.
pub trait AddressBar: Send {
    /// Address currently shown by the host.
    fn current(&self) -> String;
    /// Show `address` as a new history entry.
    fn push(&mut self, address: &str);
    /// Show `address` in place of the current entry.
    fn replace(&mut self, address: &str);
    /// Step back one history entry, returning the address now shown.
    fn back(&mut self) -> Option<String>;
}

/// In-process address bar with a history stack.
///
/// Clones share the same history, so a test can keep a handle while the
/// navigation store owns another.
#[derive(Debug, Clone)]
pub struct MemoryAddressBar {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryAddressBar {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: Arc::new(Mutex::new(vec![initial.into()])),
        }
    }

    /// Number of entries in the history stack.
    pub fn depth(&self) -> usize {
        self.history.lock().len()
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AddressBar for MemoryAddressBar {
    fn current(&self) -> String {
        self.history.lock().last().cloned().unwrap_or_default()
    }

    fn push(&mut self, address: &str) {
        self.history.lock().push(address.to_string());
    }

    fn replace(&mut self, address: &str) {
        let mut history = self.history.lock();
        match history.last_mut() {
            Some(last) => *last = address.to_string(),
            None => history.push(address.to_string()),
        }
    }

    fn back(&mut self) -> Option<String> {
        let mut history = self.history.lock();
        if history.len() < 2 {
            return None;
        }
        history.pop();
        history.last().cloned()
    }
}
