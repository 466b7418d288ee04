mod common;

use common::{default_site, make_site};
use erocras::config::Config;
use erocras::ui::events::HostEvent;
use erocras::ui::mvi::Reducer;
use erocras::ui::nav::{AddressMap, NavIntent, NavReducer, NavState, Page};

#[test]
fn every_page_round_trips_through_its_address() {
    let routes = AddressMap::default();
    for page in Page::ALL {
        assert_eq!(routes.resolve(routes.address_of(page)), page);
    }
}

#[test]
fn navigate_publishes_address_and_mounts_view() {
    let mut h = default_site();
    for page in Page::ALL {
        h.site.handle(HostEvent::Navigate(page));
        assert_eq!(h.site.current_page(), page);
        assert_eq!(h.site.mounted_page(), Some(page));
        assert_eq!(h.site.address(), h.site.routes().address_of(page));
    }
}

#[test]
fn startup_address_selects_page() {
    let h = make_site(Config::default(), "/Nomination/?from=mail#top");
    assert_eq!(h.site.current_page(), Page::Nomination);
    assert!(h.site.nomination().is_some());
}

#[test]
fn unrecognized_address_resolves_home() {
    let mut h = make_site(Config::default(), "/waitlist");
    assert_eq!(h.site.current_page(), Page::Waitlist);

    assert!(h.site.handle(HostEvent::AddressChanged("/careers".to_string())));
    assert_eq!(h.site.current_page(), Page::Home);
    assert!(h.site.home().is_some());

    let h = make_site(Config::default(), "/does-not-exist");
    assert_eq!(h.site.current_page(), Page::Home);
}

#[test]
fn same_page_navigation_reports_no_change() {
    let mut h = make_site(Config::default(), "/partners");
    let depth = h.bar.depth();
    assert!(!h.site.handle(HostEvent::Navigate(Page::Partners)));
    assert_eq!(h.bar.depth(), depth);
    assert_eq!(h.site.current_page(), Page::Partners);
}

#[test]
fn back_follows_history() {
    let mut h = default_site();
    h.site.handle(HostEvent::Navigate(Page::Waitlist));
    h.site.handle(HostEvent::Navigate(Page::Partners));
    assert_eq!(h.bar.depth(), 3);

    assert!(h.site.handle(HostEvent::Back));
    assert_eq!(h.site.current_page(), Page::Waitlist);
    assert_eq!(h.site.address(), "/waitlist");

    assert!(h.site.handle(HostEvent::Back));
    assert_eq!(h.site.current_page(), Page::Home);

    // Nothing left to go back to.
    assert!(!h.site.handle(HostEvent::Back));
}

#[test]
fn entered_address_joins_history() {
    let mut h = default_site();
    h.site.handle(HostEvent::Navigate(Page::Waitlist));
    assert!(h.site.handle(HostEvent::AddressChanged("/partners".to_string())));

    let snapshot = h.site.snapshot();
    assert_eq!(snapshot.page, Page::Partners);
    assert_eq!(h.site.routes().resolve(&snapshot.address), snapshot.page);
    assert_eq!(h.bar.depth(), 3);

    assert!(h.site.handle(HostEvent::Back));
    assert_eq!(h.site.current_page(), Page::Waitlist);
    assert_eq!(h.site.address(), "/waitlist");
    assert!(h.site.waitlist().is_some());
}

#[test]
fn subscribers_see_page_changes() {
    let mut h = default_site();
    let mut pages = h.site.navigation().subscribe();
    h.site.handle(HostEvent::Navigate(Page::Nomination));
    assert!(pages.has_changed().unwrap());
    assert_eq!(*pages.borrow_and_update(), Page::Nomination);
}

#[test]
fn reducer_tracks_previous_page() {
    let state = NavState::new(Page::Home);
    let state = NavReducer::reduce(
        state,
        NavIntent::Navigate {
            target: Page::Waitlist,
        },
    );
    assert_eq!(state.current, Page::Waitlist);
    assert_eq!(state.previous, Some(Page::Home));

    let same = NavReducer::reduce(
        state,
        NavIntent::AddressChanged {
            page: Page::Waitlist,
        },
    );
    assert_eq!(same, state);
}

#[test]
fn custom_routes_are_honoured() {
    let mut config = Config::default();
    config.routes.waitlist = "/join".to_string();
    let mut h = make_site(config, "/JOIN");
    assert_eq!(h.site.current_page(), Page::Waitlist);

    h.site.handle(HostEvent::Navigate(Page::Home));
    h.site.handle(HostEvent::Navigate(Page::Waitlist));
    assert_eq!(h.site.address(), "/join");
}
