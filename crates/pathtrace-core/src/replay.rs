//! Replay cursor over a computed trace
//!
//! The trace is immutable once computed; a cursor is just a position into it.
//! Callers own their cursors, so any number of independent replays can run
//! over the same trace.

use serde::Serialize;

use crate::graph::{AdjacencyGraph, NodeId, StepRecord};

/// Position within an immutable step trace
#[derive(Debug, Clone)]
pub struct ReplayCursor<'a> {
    trace: &'a [StepRecord],
    position: usize,
}

/// One displayable frame: the step plus the nodes to highlight around it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame<'a> {
    /// Zero-based index of the step in the trace
    pub index: usize,
    pub step: &'a StepRecord,
    /// Neighbors of the step's predecessor, start node excluded
    pub highlighted: Vec<&'a NodeId>,
}

impl<'a> ReplayCursor<'a> {
    pub fn new(trace: &'a [StepRecord]) -> Self {
        Self { trace, position: 0 }
    }

    /// Return the next step and move past it
    pub fn advance(&mut self) -> Option<&'a StepRecord> {
        let step = self.trace.get(self.position)?;
        self.position += 1;
        Some(step)
    }

    /// Next step without moving
    pub fn peek(&self) -> Option<&'a StepRecord> {
        self.trace.get(self.position)
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Number of steps already replayed
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.trace.len() - self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.trace.len()
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Advance and build the display frame for the step.
    pub fn advance_frame(
        &mut self,
        graph: &'a AdjacencyGraph,
        start: &'a str,
    ) -> Option<ReplayFrame<'a>> {
        let index = self.position;
        let step = self.advance()?;
        let highlighted = graph.neighbors_excluding(&step.previous, start).collect();
        Some(ReplayFrame {
            index,
            step,
            highlighted,
        })
    }
}

impl<'a> Iterator for ReplayCursor<'a> {
    type Item = &'a StepRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for ReplayCursor<'_> {}
