//! Guards against applying responses to views that moved on.
//!
//! A view owns one [`RequestSeq`]. Loads call [`RequestSeq::reissue`], which
//! supersedes every earlier ticket, so a slow response for a previous route
//! parameter is dropped when it finally arrives. Mutations stamp themselves
//! with [`RequestSeq::ticket`] without superseding anything. When the view is
//! destroyed it calls [`RequestSeq::close`] and no ticket is accepted again.

/// Generation stamp carried by an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct RequestSeq {
    generation: u64,
    open: bool,
}

impl Default for RequestSeq {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSeq {
    pub fn new() -> Self {
        Self {
            generation: 0,
            open: true,
        }
    }

    /// Starts a new generation; outstanding tickets stop being accepted.
    pub fn reissue(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Ticket for the current generation.
    pub fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.open && ticket.0 == self.generation
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_load_supersedes_earlier_one() {
        let mut seq = RequestSeq::new();
        let first = seq.reissue();
        let second = seq.reissue();
        assert!(!seq.accepts(first));
        assert!(seq.accepts(second));
    }

    #[test]
    fn mutation_ticket_survives_until_next_load() {
        let mut seq = RequestSeq::new();
        seq.reissue();
        let mutation = seq.ticket();
        assert!(seq.accepts(mutation));
        seq.reissue();
        assert!(!seq.accepts(mutation));
    }

    #[test]
    fn closed_sequence_rejects_everything() {
        let mut seq = RequestSeq::new();
        let ticket = seq.reissue();
        seq.close();
        assert!(!seq.is_open());
        assert!(!seq.accepts(ticket));
        assert!(!seq.accepts(seq.ticket()));
    }
}
