use crate::state::WindowState;
use crate::{Direction, Mutation, Observation, RowMeasurer, WindowConfig, WindowOp};

/// The outcome of one policy decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub scroll_offset: u64,
    pub observation: Observation,
    // A decision touches at most one trim and one growth.
    mutations: [Option<Mutation>; 2],
}

impl Decision {
    pub(crate) fn new(scroll_offset: u64, observation: Observation) -> Self {
        Self {
            scroll_offset,
            observation,
            mutations: [None; 2],
        }
    }

    fn record(&mut self, mutation: Mutation) {
        if let Some(slot) = self.mutations.iter_mut().find(|m| m.is_none()) {
            *slot = Some(mutation);
        } else {
            debug_assert!(false, "decision recorded more than two mutations");
        }
    }

    pub fn direction(&self) -> Direction {
        self.observation.direction
    }

    /// Primitives invoked by the policy, in invocation order.
    pub fn mutations(&self) -> impl Iterator<Item = Mutation> + '_ {
        self.mutations.iter().flatten().copied()
    }

    /// Returns the invocation of `op`, if the policy asked for it (even when it was clamped to
    /// a no-op).
    pub fn invoked(&self, op: WindowOp) -> Option<Mutation> {
        self.mutations().find(|m| m.op == op)
    }

    pub fn applied(&self, op: WindowOp) -> usize {
        self.invoked(op).map(|m| m.applied).unwrap_or(0)
    }

    /// Whether any invoked primitive changed the window.
    pub fn changed(&self) -> bool {
        self.mutations().any(|m| m.applied > 0)
    }

    pub fn changed_top(&self) -> bool {
        self.applied(WindowOp::AddTop) > 0 || self.applied(WindowOp::RemoveTop) > 0
    }
}

/// What happened to a scroll notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollOutcome {
    /// The notification was measured and the window policy ran.
    Decided(Decision),
    /// The host has not rendered the last mutation yet; nothing was measured.
    Deferred,
    /// The notification was the host echoing the last scroll correction.
    Echo,
}

impl ScrollOutcome {
    pub fn decision(&self) -> Option<&Decision> {
        match self {
            Self::Decided(d) => Some(d),
            Self::Deferred | Self::Echo => None,
        }
    }

    pub fn into_decision(self) -> Option<Decision> {
        match self {
            Self::Decided(d) => Some(d),
            Self::Deferred | Self::Echo => None,
        }
    }
}

impl WindowState {
    /// Grows and trims the window according to `config` and an observation of the current
    /// layout.
    ///
    /// Scrolling up trims the bottom back to `max_window_size` and restores `top_threshold`
    /// rows once the hidden buffer above the viewport runs low. Scrolling down mirrors this at
    /// the other edge. The scroll pointer always advances to the observed offset.
    pub(crate) fn apply_policy<M: RowMeasurer + ?Sized>(
        &mut self,
        config: &WindowConfig,
        decision: &mut Decision,
        measurer: &M,
    ) {
        let obs = decision.observation;
        let rendered = self.window.len();

        match obs.direction {
            Direction::Up => {
                if rendered > config.max_window_size {
                    let requested = rendered - config.max_window_size;
                    let applied = self.remove_bottom_items(requested);
                    decision.record(Mutation {
                        op: WindowOp::RemoveBottom,
                        requested,
                        applied,
                    });
                }
                if obs.top_invisible < config.top_threshold && self.window.top_offset > 0 {
                    let requested = config.top_threshold;
                    let applied = self.add_top_items(requested);
                    decision.record(Mutation {
                        op: WindowOp::AddTop,
                        requested,
                        applied,
                    });
                }
            }
            Direction::Down => {
                if rendered > config.max_window_size {
                    let requested = rendered - config.max_window_size;
                    let applied = self.remove_top_items(requested, measurer);
                    decision.record(Mutation {
                        op: WindowOp::RemoveTop,
                        requested,
                        applied,
                    });
                }
                if obs.bottom_invisible < config.bottom_threshold {
                    let requested = config.bottom_threshold;
                    let applied = self.add_bottom_items(requested);
                    decision.record(Mutation {
                        op: WindowOp::AddBottom,
                        requested,
                        applied,
                    });
                }
            }
        }

        self.scroll_pointer = decision.scroll_offset;
    }
}
