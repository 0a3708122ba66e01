// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The stage a single booking attempt has reached.
///
/// The success path is strictly linear. `Rejected` is terminal and can be
/// entered from any non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingStage {
    /// The request has arrived and nothing has been checked.
    #[default]
    Received,
    /// Required fields are present and the experience exists.
    Validated,
    /// The slot was free when checked.
    SlotChecked,
    /// The total has been computed (and verified against the client's).
    Priced,
    /// The store accepted the slot and reference.
    Reserved,
    /// The booking record is durable. Terminal.
    Persisted,
    /// The attempt failed with a specific reason. Terminal.
    Rejected,
}

impl BookingStage {
    /// Converts this stage to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Validated => "Validated",
            Self::SlotChecked => "SlotChecked",
            Self::Priced => "Priced",
            Self::Reserved => "Reserved",
            Self::Persisted => "Persisted",
            Self::Rejected => "Rejected",
        }
    }

    /// Checks if a transition from this stage to another is valid.
    ///
    /// Valid transitions are:
    /// - Received → Validated → `SlotChecked` → Priced → Reserved → Persisted
    /// - any non-terminal stage → Rejected
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Received, Self::Validated)
                | (Self::Validated, Self::SlotChecked)
                | (Self::SlotChecked, Self::Priced)
                | (Self::Priced, Self::Reserved)
                | (Self::Reserved, Self::Persisted)
                | (
                    Self::Received
                        | Self::Validated
                        | Self::SlotChecked
                        | Self::Priced
                        | Self::Reserved,
                    Self::Rejected
                )
        )
    }

    /// Returns whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Persisted | Self::Rejected)
    }
}

impl std::fmt::Display for BookingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
