use backdrop_core::*;
use std::time::Duration;

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.name = "Ada".into();
    form.email = "ada@example.com".into();
    form.message = "Hello there".into();
    form
}

#[test]
fn payload_carries_subject() {
    let payload = filled().payload("key-123").unwrap();
    assert_eq!(payload.access_key, "key-123");
    assert_eq!(payload.subject, "Portfolio Contact from Ada");
    assert_eq!(payload.fields()[3], ("message", "Hello there"));
}

#[test]
fn blank_fields_are_rejected() {
    let mut form = filled();
    form.email = "   ".into();
    assert_eq!(form.payload("k"), Err(ContactError::MissingField("email")));
    assert_eq!(
        ContactForm::default().begin_submit("k"),
        Err(ContactError::MissingField("name"))
    );
}

#[test]
fn only_one_submission_in_flight() {
    let mut form = filled();
    assert!(form.begin_submit("k").is_ok());
    assert!(form.is_submitting());
    assert_eq!(form.begin_submit("k"), Err(ContactError::InFlight));
}

#[test]
fn success_clears_and_resets_after_five_seconds() {
    let mut form = filled();
    form.begin_submit("k").unwrap();
    let sent_at = Duration::from_secs(10);
    form.finish(Ok(()), sent_at);
    assert!(!form.is_submitting());
    assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    assert_eq!(form.status(), SubmitStatus::Success { since: sent_at });

    form.tick(sent_at + Duration::from_millis(4_999));
    assert_eq!(form.status(), SubmitStatus::Success { since: sent_at });
    form.tick(sent_at + Duration::from_secs(5));
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn failure_keeps_fields_for_retry() {
    let mut form = filled();
    form.begin_submit("k").unwrap();
    form.finish(Err(ContactError::Rejected), Duration::ZERO);
    assert_eq!(form.status(), SubmitStatus::Error);
    assert_eq!(form.name, "Ada");

    form.begin_submit("k").unwrap();
    assert_eq!(form.status(), SubmitStatus::Idle);
    form.finish(Err(ContactError::Transport("offline".into())), Duration::ZERO);
    assert_eq!(form.status(), SubmitStatus::Error);
    // errors never time out
    form.tick(Duration::from_secs(60));
    assert_eq!(form.status(), SubmitStatus::Error);
}

#[test]
fn reset_timer_clears_success_on_a_coarse_clock() {
    let mut form = filled();
    form.begin_submit("k").unwrap();
    let sent_at = Duration::from_millis(10_000);
    form.finish(Ok(()), sent_at);
    // the clock reads 4.9 s when the 5 s timer fires
    form.tick(sent_at + Duration::from_millis(4_900));
    assert_eq!(form.status(), SubmitStatus::Success { since: sent_at });
    assert!(form.expire_success(sent_at));
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert!(!form.expire_success(sent_at));
}

#[test]
fn stale_reset_timer_keeps_a_newer_success() {
    let mut form = filled();
    form.begin_submit("k").unwrap();
    let first = Duration::from_secs(1);
    form.finish(Ok(()), first);

    form.name = "Grace".into();
    form.email = "grace@example.com".into();
    form.message = "Second note".into();
    form.begin_submit("k").unwrap();
    let second = Duration::from_secs(3);
    form.finish(Ok(()), second);

    assert!(!form.expire_success(first));
    assert_eq!(form.status(), SubmitStatus::Success { since: second });
    assert!(form.expire_success(second));
}
