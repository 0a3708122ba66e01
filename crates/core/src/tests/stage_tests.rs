// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for booking stage transitions.

use crate::BookingStage;

const ALL_STAGES: [BookingStage; 7] = [
    BookingStage::Received,
    BookingStage::Validated,
    BookingStage::SlotChecked,
    BookingStage::Priced,
    BookingStage::Reserved,
    BookingStage::Persisted,
    BookingStage::Rejected,
];

#[test]
fn test_default_stage_is_received() {
    assert_eq!(BookingStage::default(), BookingStage::Received);
}

#[test]
fn test_success_path_is_linear() {
    let path: [BookingStage; 6] = [
        BookingStage::Received,
        BookingStage::Validated,
        BookingStage::SlotChecked,
        BookingStage::Priced,
        BookingStage::Reserved,
        BookingStage::Persisted,
    ];

    for pair in path.windows(2) {
        assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
    }
    assert!(!BookingStage::Received.can_transition_to(BookingStage::Priced));
    assert!(!BookingStage::Priced.can_transition_to(BookingStage::Validated));
}

#[test]
fn test_any_open_stage_can_be_rejected() {
    for stage in ALL_STAGES {
        assert_eq!(
            stage.can_transition_to(BookingStage::Rejected),
            !stage.is_terminal(),
            "{stage}"
        );
    }
}

#[test]
fn test_terminal_stages_have_no_successors() {
    for target in ALL_STAGES {
        assert!(!BookingStage::Persisted.can_transition_to(target));
        assert!(!BookingStage::Rejected.can_transition_to(target));
    }
}

#[test]
fn test_stage_display() {
    assert_eq!(BookingStage::SlotChecked.to_string(), "SlotChecked");
    assert_eq!(BookingStage::Rejected.as_str(), "Rejected");
}
