mod common;

use common::{default_site, make_site, ms};
use erocras::config::Config;
use erocras::submit::{JsonlSink, Submission, SubmissionHandler};
use erocras::ui::events::HostEvent;
use erocras::ui::nav::{MemoryAddressBar, Page};
use erocras::ui::views::{NominationField, SubmitOutcome};
use erocras::ui::app::Site;
use tempfile::TempDir;

#[test]
fn waitlist_hands_off_email_once_then_returns_home() {
    let mut h = make_site(Config::default(), "/waitlist");
    h.site.handle(HostEvent::SetEmail("a@b.edu".to_string()));
    assert_eq!(h.site.submit(), Some(SubmitOutcome::Submitted));
    assert_eq!(h.site.submit(), Some(SubmitOutcome::AlreadySubmitted));

    assert_eq!(
        h.sink.submissions(),
        vec![Submission::Waitlist {
            email: "a@b.edu".to_string()
        }]
    );
    assert!(h.site.waitlist().unwrap().is_submitted());

    h.site.advance(ms(1499));
    assert_eq!(h.site.current_page(), Page::Waitlist);
    h.site.advance(ms(1));
    assert_eq!(h.site.current_page(), Page::Home);
    assert_eq!(h.site.address(), "/");
}

#[test]
fn blank_email_is_withheld() {
    let mut h = make_site(Config::default(), "/waitlist");
    assert_eq!(h.site.submit(), Some(SubmitOutcome::Withheld));
    h.site.handle(HostEvent::SetEmail("   ".to_string()));
    assert!(!h.site.handle(HostEvent::Submit));

    assert!(h.sink.is_empty());
    h.site.advance(ms(10_000));
    assert_eq!(h.site.current_page(), Page::Waitlist);
    assert_eq!(h.site.pending_timers(), 0);
}

#[test]
fn email_is_trimmed_before_handoff() {
    let mut h = make_site(Config::default(), "/waitlist");
    h.site.handle(HostEvent::SetEmail("  sam@duke.edu \n".to_string()));
    assert!(h.site.handle(HostEvent::Submit));
    assert_eq!(
        h.sink.submissions(),
        vec![Submission::Waitlist {
            email: "sam@duke.edu".to_string()
        }]
    );
}

#[test]
fn leaving_before_return_cancels_it() {
    let mut h = make_site(Config::default(), "/waitlist");
    h.site.handle(HostEvent::SetEmail("a@b.edu".to_string()));
    h.site.handle(HostEvent::Submit);
    h.site.handle(HostEvent::Navigate(Page::Partners));

    h.site.advance(ms(5000));
    assert_eq!(h.site.current_page(), Page::Partners);
}

#[test]
fn domain_suggestion_is_typed_out() {
    let mut h = make_site(Config::default(), "/waitlist");
    h.site.handle(HostEvent::SetEmail("kim@s".to_string()));
    assert_eq!(h.site.waitlist().unwrap().suggestion(), Some("stanford.edu"));

    assert!(h.site.handle(HostEvent::AcceptSuggestion));
    assert!(!h.site.handle(HostEvent::AcceptSuggestion));
    let form = h.site.waitlist().unwrap();
    assert_eq!(form.email(), "kim@stanford.edu");
    assert_eq!(form.displayed_email(), "");

    // Four chars at 60ms each.
    h.site.advance(ms(240));
    assert_eq!(h.site.waitlist().unwrap().displayed_email(), "kim@");

    h.site.advance(ms(60 * 12));
    assert_eq!(h.site.waitlist().unwrap().displayed_email(), "kim@stanford.edu");
}

#[test]
fn nomination_requires_name() {
    let mut h = make_site(Config::default(), "/nomination");
    h.site.handle(HostEvent::SetNominationField(
        NominationField::Reason,
        "Helps everyone with interview prep".to_string(),
    ));
    assert_eq!(h.site.submit(), Some(SubmitOutcome::Withheld));
    assert!(h.sink.is_empty());

    h.site.handle(HostEvent::SetNominationField(
        NominationField::Name,
        "Jordan Lee".to_string(),
    ));
    h.site.handle(HostEvent::SetNominationField(
        NominationField::Year,
        " Junior ".to_string(),
    ));
    assert_eq!(h.site.submit(), Some(SubmitOutcome::Submitted));
    assert_eq!(
        h.sink.submissions(),
        vec![Submission::Nomination {
            name: "Jordan Lee".to_string(),
            year: "Junior".to_string(),
            reason: "Helps everyone with interview prep".to_string(),
        }]
    );

    h.site.advance(ms(1500));
    assert_eq!(h.site.current_page(), Page::Home);
}

#[test]
fn submit_outside_a_form_does_nothing() {
    let mut h = default_site();
    assert_eq!(h.site.submit(), None);
    assert!(!h.site.handle(HostEvent::Submit));
    assert!(!h.site.handle(HostEvent::SetEmail("a@b.edu".to_string())));
    assert!(h.sink.is_empty());
}

#[test]
fn jsonl_sink_appends_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("submissions.jsonl");
    let mut sink = JsonlSink::open(&path).unwrap();
    sink.submit(Submission::Waitlist {
        email: "a@b.edu".to_string(),
    });
    sink.submit(Submission::Nomination {
        name: "Ana".to_string(),
        year: String::new(),
        reason: String::new(),
    });

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["form"], "waitlist");
    assert_eq!(lines[0]["email"], "a@b.edu");
    assert_eq!(lines[1]["form"], "nomination");
    assert_ne!(lines[0]["id"], lines[1]["id"]);
}

#[test]
fn site_can_write_to_jsonl_sink() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.jsonl");
    let sink = JsonlSink::open(&path).unwrap();
    let mut site = Site::new(
        Config::default(),
        Box::new(MemoryAddressBar::new("/waitlist")),
        Box::new(sink),
    )
    .unwrap();
    site.handle(HostEvent::SetEmail("z@y.edu".to_string()));
    assert!(site.handle(HostEvent::Submit));

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
}
