use super::errors::CastError;
use super::event::Event;

/// Pending event together with how many reactions deep it sits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub event: Event,
    /// `0` for an event submitted by an effect, parent depth + 1 for reactions.
    pub depth: usize,
}

/// Explicit LIFO stack of pending events.
///
/// The most recently pushed event resolves first, together with every
/// reaction it queues, before older events resume.
#[derive(Clone, Debug)]
pub struct EventStack {
    frames: Vec<Frame>,
    max_depth: usize,
}

impl EventStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Pushes an event, refusing reactions nested deeper than the limit.
    pub fn push(&mut self, event: Event, depth: usize) -> Result<(), CastError> {
        if depth > self.max_depth {
            return Err(CastError::CascadeTooDeep {
                depth,
                limit: self.max_depth,
            });
        }
        self.frames.push(Frame { event, depth });
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn peek(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drops every frame above `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.frames.truncate(len);
    }
}
