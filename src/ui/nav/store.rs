use super::address::{AddressBar, AddressMap};
use super::intent::NavIntent;
use super::page::Page;
use super::reducer::NavReducer;
use super::state::NavState;
use crate::ui::mvi::Reducer;
use tokio::sync::watch;

/// Owner of the current page and of the host address that mirrors it.
pub struct NavigationStore {
    routes: AddressMap,
    state: NavState,
    address_bar: Box<dyn AddressBar>,
    page_tx: watch::Sender<Page>,
}

impl NavigationStore {
    /// Create the store, deriving the initial page from the address the host
    /// currently shows.
    pub fn new(routes: AddressMap, address_bar: Box<dyn AddressBar>) -> Self {
        let initial = routes.resolve(&address_bar.current());
        let (page_tx, _) = watch::channel(initial);
        Self {
            routes,
            state: NavState::new(initial),
            address_bar,
            page_tx,
        }
    }

    pub fn current_page(&self) -> Page {
        self.state.current
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn routes(&self) -> &AddressMap {
        &self.routes
    }

    /// Address the host currently shows.
    pub fn address(&self) -> String {
        self.address_bar.current()
    }

    /// Receive every page change.
    pub fn subscribe(&self) -> watch::Receiver<Page> {
        self.page_tx.subscribe()
    }

    /// Switch to `target` and publish its address. Returns whether the page
    /// changed; navigating to the current page only re-publishes the address.
    pub fn navigate(&mut self, target: Page) -> bool {
        let changed = self.dispatch(NavIntent::Navigate { target });
        let address = self.routes.address_of(target);
        if changed {
            self.address_bar.push(address);
        } else {
            self.address_bar.replace(address);
        }
        changed
    }

    /// React to the host changing its address (back/forward, manual edit).
    pub fn on_address_changed(&mut self, address: &str) -> bool {
        let page = self.routes.resolve(address);
        self.dispatch(NavIntent::AddressChanged { page })
    }

    /// The user entered `address` in the host's bar: record it as a new
    /// history entry, then follow it like any other address change.
    pub fn enter_address(&mut self, address: &str) -> bool {
        self.address_bar.push(address);
        self.on_address_changed(address)
    }

    /// Step the host back one entry and follow it.
    pub fn go_back(&mut self) -> bool {
        match self.address_bar.back() {
            Some(address) => self.on_address_changed(&address),
            None => false,
        }
    }

    fn dispatch(&mut self, intent: NavIntent) -> bool {
        let before = self.state.current;
        let changed = NavReducer::apply(&mut self.state, intent);
        if changed {
            tracing::info!(from = %before, to = %self.state.current, "page changed");
            self.page_tx.send_replace(self.state.current);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::nav::MemoryAddressBar;

    fn store_at(address: &str) -> (NavigationStore, MemoryAddressBar) {
        let bar = MemoryAddressBar::new(address);
        let store = NavigationStore::new(AddressMap::default(), Box::new(bar.clone()));
        (store, bar)
    }

    #[test]
    fn entered_address_is_recorded() {
        let (mut store, bar) = store_at("/waitlist");
        assert!(store.enter_address("/partners"));
        assert_eq!(store.address(), "/partners");
        assert_eq!(bar.depth(), 2);

        assert!(store.go_back());
        assert_eq!(store.current_page(), Page::Waitlist);
    }

    #[test]
    fn initial_page_comes_from_address() {
        let (store, _) = store_at("/partners");
        assert_eq!(store.current_page(), Page::Partners);

        let (store, _) = store_at("/no/such/page");
        assert_eq!(store.current_page(), Page::Home);
    }

    #[test]
    fn same_page_navigation_replaces_entry() {
        let (mut store, bar) = store_at("/waitlist?utm=x");
        assert!(!store.navigate(Page::Waitlist));
        assert_eq!(bar.depth(), 1);
        assert_eq!(store.address(), "/waitlist");
    }

    #[test]
    fn subscribers_see_changes() {
        let (mut store, _) = store_at("/");
        let rx = store.subscribe();
        store.navigate(Page::Nomination);
        assert_eq!(*rx.borrow(), Page::Nomination);
    }
}
