//! Progress events for long-running Poisson disk runs.
//!
//! [`crate::sampling::PoissonDiskSampling::generate_with_events`] reports its
//! derived parameters, periodic progress and the final count as
//! [`SamplingEvent`]s. Events are purely observational; the generated points do
//! not depend on the sink.

/// Describes events emitted while sampling.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingEvent {
    /// Emitted once the run parameters are derived, before the first sample.
    Started {
        /// Internal target count after oversampling.
        target: usize,
        /// Minimum distance in effect.
        min_distance: f32,
        /// Grid cells per axis.
        grid_size: usize,
    },

    /// Emitted periodically while samples accumulate.
    Progress {
        /// Samples accepted so far.
        accepted: usize,
        /// Samples still able to spawn children.
        active: usize,
        /// Internal target count.
        target: usize,
    },

    /// Emitted when the run ends.
    Finished {
        /// Number of samples returned.
        accepted: usize,
        /// True when the run stopped because the target was reached rather than
        /// because the region saturated.
        reached_target: bool,
    },
}

/// A generic event sink that accepts [`SamplingEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SamplingEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SamplingEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    #[inline]
    fn send(&mut self, event: SamplingEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Debug, Default)]
pub struct VecSink {
    events: Vec<SamplingEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SamplingEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SamplingEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SamplingEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_events_in_order() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(SamplingEvent::Progress {
            accepted: 1000,
            active: 40,
            target: 2000,
        });
        sink.send(SamplingEvent::Finished {
            accepted: 1500,
            reached_target: false,
        });
        assert_eq!(sink.len(), 2);
        assert!(matches!(
            sink.as_slice()[1],
            SamplingEvent::Finished { accepted: 1500, .. }
        ));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(SamplingEvent::Finished {
            accepted: 0,
            reached_target: false,
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn unit_sink_discards_events() {
        let mut sink = ();
        sink.send(SamplingEvent::Finished {
            accepted: 3,
            reached_target: true,
        });
    }
}
