mod common;

use common::{config_with_deck, default_site, make_site, ms};
use erocras::config::{Config, ConfigError};
use erocras::submit::MemorySink;
use erocras::ui::app::{Site, ViewSnapshot};
use erocras::ui::carousel::Gesture;
use erocras::ui::events::HostEvent;
use erocras::ui::nav::{MemoryAddressBar, Page};

fn intro_config() -> Config {
    let mut config = config_with_deck(3);
    config.intro.enabled = true;
    config
}

#[test]
fn intro_holds_the_page_until_it_completes() {
    let mut h = make_site(intro_config(), "/");
    assert_eq!(h.site.intro_part(), Some(0));
    assert_eq!(h.site.mounted_page(), None);
    assert!(!h.site.gesture(Gesture::SwipeNext));

    h.site.advance(ms(2500));
    assert_eq!(h.site.intro_part(), Some(1));
    assert_eq!(h.site.mounted_page(), None);

    h.site.advance(ms(2500));
    assert_eq!(h.site.intro_part(), None);
    assert_eq!(h.site.mounted_page(), Some(Page::Home));
    assert!(h.site.home().unwrap().carousel().is_autoplaying());
}

#[test]
fn skip_intro_mounts_immediately() {
    let mut h = make_site(intro_config(), "/partners");
    assert!(h.site.handle(HostEvent::SkipIntro));
    assert_eq!(h.site.mounted_page(), Some(Page::Partners));
    assert!(!h.site.handle(HostEvent::SkipIntro));
}

#[test]
fn navigation_during_intro_applies_after_it() {
    let mut h = make_site(intro_config(), "/");
    assert!(h.site.handle(HostEvent::Navigate(Page::Waitlist)));
    assert_eq!(h.site.mounted_page(), None);

    h.site.advance(ms(5000));
    assert_eq!(h.site.mounted_page(), Some(Page::Waitlist));
}

#[test]
fn partner_logos_reveal_in_stagger() {
    let mut h = make_site(Config::default(), "/partners");
    let revealed = |h: &common::Harness| h.site.partners().unwrap().revealed_count();
    assert_eq!(revealed(&h), 0);

    h.site.advance(ms(200));
    assert_eq!(revealed(&h), 1);
    h.site.advance(ms(300));
    assert_eq!(revealed(&h), 2);
    h.site.advance(ms(299));
    assert_eq!(revealed(&h), 2);
    h.site.advance(ms(1));
    assert_eq!(revealed(&h), 3);
    assert_eq!(h.site.pending_timers(), 0);
}

#[test]
fn revisiting_partners_replays_the_reveal() {
    let mut h = make_site(Config::default(), "/partners");
    h.site.advance(ms(1000));
    h.site.handle(HostEvent::Navigate(Page::Home));
    h.site.handle(HostEvent::Navigate(Page::Partners));
    assert_eq!(h.site.partners().unwrap().revealed_count(), 0);
}

#[test]
fn sticky_note_click_is_ignored_while_dragging() {
    let mut h = default_site();
    assert!(h.site.handle(HostEvent::NoteDragStart));
    assert!(!h.site.handle(HostEvent::NoteClick));
    h.site.handle(HostEvent::NoteDragEnd);
    assert!(!h.site.handle(HostEvent::NoteClick));

    h.site.advance(ms(100));
    assert!(h.site.handle(HostEvent::NoteClick));
    assert_eq!(h.site.current_page(), Page::Nomination);
}

#[test]
fn unmount_leaves_no_timers() {
    for page in Page::ALL {
        let mut h = default_site();
        h.site.handle(HostEvent::Navigate(page));
        h.site.advance(ms(50));
        h.site.shutdown();
        assert_eq!(h.site.pending_timers(), 0, "{page} left timers");
        assert_eq!(h.site.mounted_page(), None);
    }
}

#[test]
fn events_for_other_pages_are_ignored() {
    let mut h = make_site(Config::default(), "/waitlist");
    assert!(!h.site.gesture(Gesture::Dot(2)));
    assert!(!h.site.handle(HostEvent::InteractionStart));
    assert!(!h.site.handle(HostEvent::NoteClick));
    assert_eq!(h.site.current_page(), Page::Waitlist);
}

#[test]
fn snapshot_describes_the_home_page() {
    let mut h = make_site(config_with_deck(4), "/");
    h.site.advance(ms(120));
    let snapshot = h.site.snapshot();
    assert_eq!(snapshot.page, Page::Home);
    assert_eq!(snapshot.address, "/");
    assert_eq!(snapshot.elapsed_ms, 120);

    match snapshot.view {
        Some(ViewSnapshot::Home {
            index,
            count,
            author,
            text,
            tagline,
            autoplay,
            ..
        }) => {
            assert_eq!(index, 0);
            assert_eq!(count, 4);
            assert_eq!(author, "author-0");
            assert_eq!(text, "tex");
            assert_eq!(tagline, "");
            assert!(autoplay);
        }
        other => panic!("expected home snapshot, got {:?}", other),
    }

    let json = serde_json::to_value(h.site.snapshot()).unwrap();
    assert_eq!(json["view"]["view"], "home");
    assert_eq!(json["view"]["quill"]["field"], "text");
}

#[test]
fn site_refuses_an_invalid_config() {
    let mut config = config_with_deck(3);
    config.timing.dwell_ms = 0;
    let site = Site::new(
        config,
        Box::new(MemoryAddressBar::new("/")),
        Box::new(MemorySink::new()),
    );
    assert!(matches!(site, Err(ConfigError::ValidationError { .. })));
}
