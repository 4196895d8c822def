use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Responded,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn can_transition_to(&self, next: TicketStatus) -> bool {
        use TicketStatus::*;
        matches!(
            (self, next),
            (Open, Responded)
                | (Open, Resolved)
                | (Open, Closed)
                | (Responded, Resolved)
                | (Responded, Closed)
                | (Resolved, Closed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::TicketStatus::*;

    #[test]
    fn open_moves_forward_only() {
        assert!(Open.can_transition_to(Responded));
        assert!(Open.can_transition_to(Resolved));
        assert!(Open.can_transition_to(Closed));
        assert!(!Responded.can_transition_to(Open));
    }

    #[test]
    fn closed_is_terminal() {
        for next in [Open, Responded, Resolved, Closed] {
            assert!(!Closed.can_transition_to(next));
        }
    }
}
