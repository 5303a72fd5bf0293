use std::collections::HashMap;

/// UI actions that talk to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Upload,
    Query,
    RawSql,
}

/// Identifies one invocation of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    action: Action,
    seq: u64,
}

impl Ticket {
    pub fn action(&self) -> Action {
        self.action
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Per-action request counter; only the latest ticket of an action is current
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: HashMap<Action, u64>,
}

impl RequestSequencer {
    pub fn issue(&mut self, action: Action) -> Ticket {
        let seq = self.latest.entry(action).or_insert(0);
        *seq += 1;
        Ticket { action, seq: *seq }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get(&ticket.action) == Some(&ticket.seq)
    }
}
