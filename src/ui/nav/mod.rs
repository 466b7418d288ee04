//! Navigation between the site's four pages.
//!
//! [`NavigationStore`] is the single owner of the current [`Page`]. Both
//! entry points (an in-app `navigate` and an out-of-band address change such
//! as the browser's back button) go through [`NavReducer`], so they can never
//! disagree about which page is current.

mod address;
mod intent;
mod page;
mod reducer;
mod state;
mod store;

pub use address::{normalize_address, AddressBar, AddressMap, AddressMapError, MemoryAddressBar};
pub use intent::NavIntent;
pub use page::{Page, UnknownPage};
pub use reducer::NavReducer;
pub use state::NavState;
pub use store::NavigationStore;
