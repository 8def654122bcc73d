use std::collections::VecDeque;

use crate::complex::Complex;

/// Bounded history of reconstructed points, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trail {
    points: VecDeque<Complex>,
    capacity: usize,
}

impl Trail {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `point`, evicting the oldest one when full.
    pub fn push(&mut self, point: Complex) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Complex> {
        self.points.iter()
    }
}
