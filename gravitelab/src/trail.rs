use std::collections::VecDeque;

use glam::DVec3;

/// Bounded first-in first-out history of positions, drawn as a connected line.
///
/// Pushing past the capacity evicts the oldest position.
///
/// # Example
///
/// ```
/// use gravitelab::Trail;
/// use glam::DVec3;
///
/// let mut trail = Trail::new(2);
/// trail.push(DVec3::X);
/// trail.push(DVec3::Y);
/// trail.push(DVec3::Z);
///
/// assert_eq!(trail.iter().collect::<Vec<_>>(), [DVec3::Y, DVec3::Z]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    capacity: usize,
    cached: VecDeque<DVec3>,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(crate::orbit::TRAIL_LIMIT)
    }
}

impl Trail {
    /// Creates an empty [`Trail`] holding at most `capacity` positions.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            cached: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Maximum number of positions kept.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of positions currently kept.
    #[inline]
    pub fn len(&self) -> usize {
        self.cached.len()
    }

    /// Returns `true` if the trail holds no position.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cached.is_empty()
    }

    /// Appends a position, dropping the oldest ones beyond the capacity.
    pub fn push(&mut self, position: DVec3) {
        self.cached.push_back(position);
        while self.cached.len() > self.capacity {
            self.cached.pop_front();
        }
    }

    /// Removes every position.
    #[inline]
    pub fn clear(&mut self) {
        self.cached.clear();
    }

    /// Iterates over the positions from the oldest to the most recent.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DVec3> + ExactSizeIterator + '_ {
        self.cached.iter().copied()
    }

    /// Positions converted to single precision, ready to be used as vertices.
    pub fn vertices(&self) -> Vec<[f32; 3]> {
        self.iter().map(|p| p.as_vec3().to_array()).collect()
    }
}
