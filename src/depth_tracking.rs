use crate::error::{Error, Result};

/// Tracks how deeply nested the decoder currently is: each nested message or group is one level.
#[derive(Clone, Copy, Debug)]
pub struct DepthTracker {
    depth: usize,
    max: usize,
}

impl DepthTracker {
    /// Create a new depth tracker at the top level.
    pub fn new(max: usize) -> Self {
        Self { depth: 0, max }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Go one level deeper, failing if that would pass the nesting limit.
    pub fn descend(&self) -> Result<Self> {
        if self.depth >= self.max {
            return Err(Error::ParseLimit(format!(
                "Depth limit of {} exceeded",
                self.max
            )));
        }
        Ok(Self {
            depth: self.depth + 1,
            max: self.max,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn limit() {
        let mut tracker = DepthTracker::new(3);
        for _ in 0..3 {
            tracker = tracker.descend().unwrap();
        }
        assert_eq!(tracker.depth(), 3);
        assert!(matches!(tracker.descend(), Err(Error::ParseLimit(_))));
    }
}
