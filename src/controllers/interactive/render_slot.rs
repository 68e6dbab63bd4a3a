/// What to do with a request that arrives while a render is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Discard the request.
    Drop,
    /// Park the request until the current render finishes. A newer queued
    /// request replaces an older one.
    Queue,
}

/// Outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The slot was idle and the render starts straight away.
    Started(u64),
    /// The slot was busy and the request now waits in the pending slot.
    Queued(u64),
    /// The slot was busy and the request was discarded.
    Dropped,
}

impl Submission {
    #[must_use]
    pub fn generation(self) -> Option<u64> {
        match self {
            Self::Started(generation) | Self::Queued(generation) => Some(generation),
            Self::Dropped => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Idle,
    Rendering { generation: u64 },
}

impl SlotState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

/// Single-slot render state machine: `Idle -> Rendering -> Idle`, plus at
/// most one pending request.
///
/// `ready` holds the request the worker should pick up next; it is only ever
/// set while the state is `Rendering` with the same generation.
#[derive(Debug)]
pub struct RenderSlot<R> {
    state: SlotState,
    ready: Option<(u64, R)>,
    pending: Option<(u64, R)>,
    last_generation: u64,
}

impl<R> Default for RenderSlot<R> {
    fn default() -> Self {
        Self {
            state: SlotState::Idle,
            ready: None,
            pending: None,
            last_generation: 0,
        }
    }
}

impl<R> RenderSlot<R> {
    #[must_use]
    pub fn state(&self) -> SlotState {
        self.state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    #[must_use]
    pub fn pending_generation(&self) -> Option<u64> {
        self.pending.as_ref().map(|(generation, _)| *generation)
    }

    pub fn submit(&mut self, request: R, policy: SubmitPolicy) -> Submission {
        match (self.state, policy) {
            (SlotState::Idle, _) => {
                let generation = self.next_generation();
                self.state = SlotState::Rendering { generation };
                self.ready = Some((generation, request));
                Submission::Started(generation)
            }
            (SlotState::Rendering { .. }, SubmitPolicy::Drop) => Submission::Dropped,
            (SlotState::Rendering { .. }, SubmitPolicy::Queue) => {
                let generation = self.next_generation();
                if let Some((superseded, _)) = self.pending.replace((generation, request)) {
                    tracing::debug!(superseded, generation, "pending render replaced");
                }
                Submission::Queued(generation)
            }
        }
    }

    /// Hands the started request to the worker.
    pub fn take_ready(&mut self) -> Option<(u64, R)> {
        self.ready.take()
    }

    /// Marks `generation` finished. Promotes the pending request if there is
    /// one, otherwise returns to `Idle`.
    pub fn complete(&mut self, generation: u64) {
        if self.state != (SlotState::Rendering { generation }) {
            tracing::warn!(
                generation,
                state = ?self.state,
                "completion for a render that is not running"
            );
            return;
        }

        match self.pending.take() {
            Some((next, request)) => {
                self.state = SlotState::Rendering { generation: next };
                self.ready = Some((next, request));
            }
            None => self.state = SlotState::Idle,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.last_generation += 1;
        self.last_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let slot = RenderSlot::<&str>::default();

        assert!(slot.is_idle());
        assert_eq!(slot.pending_generation(), None);
    }

    #[test]
    fn idle_slot_starts_render_for_either_policy() {
        for policy in [SubmitPolicy::Drop, SubmitPolicy::Queue] {
            let mut slot = RenderSlot::default();

            assert_eq!(slot.submit("a", policy), Submission::Started(1));
            assert_eq!(slot.state(), SlotState::Rendering { generation: 1 });
            assert_eq!(slot.take_ready(), Some((1, "a")));
            assert_eq!(slot.take_ready(), None);
        }
    }

    #[test]
    fn drop_policy_discards_while_busy() {
        let mut slot = RenderSlot::default();
        slot.submit("a", SubmitPolicy::Drop);
        slot.take_ready();

        assert_eq!(slot.submit("b", SubmitPolicy::Drop), Submission::Dropped);
        assert_eq!(slot.pending_generation(), None);

        slot.complete(1);
        assert!(slot.is_idle());
        assert_eq!(slot.take_ready(), None);
    }

    #[test]
    fn queue_policy_keeps_only_latest() {
        let mut slot = RenderSlot::default();
        slot.submit("a", SubmitPolicy::Queue);
        slot.take_ready();

        assert_eq!(slot.submit("b", SubmitPolicy::Queue), Submission::Queued(2));
        assert_eq!(slot.submit("c", SubmitPolicy::Queue), Submission::Queued(3));
        assert_eq!(slot.pending_generation(), Some(3));

        slot.complete(1);
        assert_eq!(slot.state(), SlotState::Rendering { generation: 3 });
        assert_eq!(slot.take_ready(), Some((3, "c")));

        slot.complete(3);
        assert!(slot.is_idle());
    }

    #[test]
    fn dropped_requests_do_not_consume_generations() {
        let mut slot = RenderSlot::default();
        slot.submit("a", SubmitPolicy::Drop);
        slot.submit("b", SubmitPolicy::Drop);
        slot.take_ready();
        slot.complete(1);

        assert_eq!(slot.submit("c", SubmitPolicy::Drop), Submission::Started(2));
    }

    #[test]
    fn generations_strictly_increase() {
        let mut slot = RenderSlot::default();
        let mut seen = Vec::new();

        for round in 0..5 {
            let started = slot.submit(round, SubmitPolicy::Queue);
            seen.extend(started.generation());
            let queued = slot.submit(round + 100, SubmitPolicy::Queue);
            seen.extend(queued.generation());

            while let Some((generation, _)) = slot.take_ready() {
                slot.complete(generation);
            }
        }

        assert!(slot.is_idle());
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]), "{seen:?}");
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut slot = RenderSlot::default();
        slot.submit("a", SubmitPolicy::Queue);
        slot.take_ready();

        slot.complete(7);

        assert_eq!(slot.state(), SlotState::Rendering { generation: 1 });
    }
}
