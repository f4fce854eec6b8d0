use incubator_backend::db::enums::ApplicationStatus;

#[test]
fn submitted_can_move_to_every_review_state() {
    use ApplicationStatus::*;
    for next in [UnderReview, Approved, Rejected, Waitlisted] {
        assert!(Submitted.can_transition_to(next));
    }
}

#[test]
fn terminal_states_only_reopen_to_under_review() {
    use ApplicationStatus::*;
    for terminal in [Approved, Rejected] {
        assert!(terminal.can_transition_to(UnderReview));
        assert!(!terminal.can_transition_to(Submitted));
        assert!(!terminal.can_transition_to(Waitlisted));
    }
    assert!(!Approved.can_transition_to(Rejected));
    assert!(!Rejected.can_transition_to(Approved));
}

#[test]
fn waitlisted_is_fully_retransitionable() {
    use ApplicationStatus::*;
    for next in [UnderReview, Approved, Rejected] {
        assert!(Waitlisted.can_transition_to(next));
    }
    assert!(!Waitlisted.can_transition_to(Submitted));
}

#[test]
fn reissuing_the_same_status_is_legal() {
    // A double-click sends the same update twice; the second must not fail.
    for status in ApplicationStatus::ALL {
        assert!(status.can_transition_to(status));
    }
}

#[test]
fn parse_and_display_round_trip() {
    for status in ApplicationStatus::ALL {
        assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
    }
    // Legacy alias used by older exports.
    assert_eq!(
        ApplicationStatus::parse("pending"),
        Some(ApplicationStatus::Submitted)
    );
    assert_eq!(ApplicationStatus::parse("archived"), None);
}
