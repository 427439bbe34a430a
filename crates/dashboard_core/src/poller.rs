/// Polling flag plus request sequencing.
///
/// Every status request gets a sequence number from [`PollScheduler::begin_request`].
/// A response is applied only if its number is newer than the last one applied,
/// so a slow response can never overwrite a fresher table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PollScheduler {
    active: bool,
    next_seq: u64,
    applied_seq: Option<u64>,
}

impl PollScheduler {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true only when this call switched polling on.
    pub fn activate(&mut self) -> bool {
        let changed = !self.active;
        self.active = true;
        changed
    }

    pub fn deactivate(&mut self) -> bool {
        let changed = self.active;
        self.active = false;
        changed
    }

    pub fn begin_request(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    pub fn accept(&mut self, seq: u64) -> bool {
        if self.applied_seq.is_some_and(|applied| seq <= applied) {
            return false;
        }
        self.applied_seq = Some(seq);
        true
    }

    pub fn applied_seq(&self) -> Option<u64> {
        self.applied_seq
    }
}
