//! Construction-time configuration for the heap containers
//!
//! A heap's ordering rule is fixed when it is built: either a [`HeapMode`]
//! (the default, [`HeapMode::Min`]) or a caller-supplied [`Comparator`],
//! which overrides the mode. [`HeapOptions`] bundles both.
//!
//! # Example
//!
//! ```rust
//! use rust_heap_containers::{BinaryHeap, HeapMode, HeapOptions};
//!
//! let mode: HeapMode = "max".parse().unwrap();
//! let mut heap = BinaryHeap::with_options(HeapOptions::new().mode(mode));
//! heap.insert(1).unwrap();
//! heap.insert(7).unwrap();
//! assert_eq!(heap.peek(), Some(&7));
//!
//! assert!("median".parse::<HeapMode>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::engine::Comparator;
use crate::traits::ContainerError;

/// Ordering direction used when no comparator is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapMode {
    /// Smallest key at the root
    #[default]
    Min,
    /// Largest key at the root
    Max,
}

impl HeapMode {
    /// Returns true if `a` must rank strictly above `b` in this mode
    ///
    /// Incomparable keys (e.g. NaN) never rank above anything.
    #[inline]
    pub fn ranks_above<K: PartialOrd + ?Sized>(self, a: &K, b: &K) -> bool {
        match self {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }

    /// The mode's name as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            HeapMode::Min => "min",
            HeapMode::Max => "max",
        }
    }
}

impl fmt::Display for HeapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeapMode {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(HeapMode::Min),
            "max" => Ok(HeapMode::Max),
            other => Err(ContainerError::InvalidMode(other.to_owned())),
        }
    }
}

/// Options accepted by the heap constructors
///
/// Mirrors `new(mode?, comparator?)`: both are optional, the mode defaults
/// to [`HeapMode::Min`], and a comparator makes the mode irrelevant to
/// ordering (the mode is still recorded and carried by copies).
pub struct HeapOptions<K: ?Sized> {
    pub(crate) mode: HeapMode,
    pub(crate) comparator: Option<Comparator<K>>,
}

impl<K: ?Sized> HeapOptions<K> {
    /// Options with the default mode and no comparator
    pub fn new() -> Self {
        Self {
            mode: HeapMode::default(),
            comparator: None,
        }
    }

    /// Sets the ordering direction
    pub fn mode(mut self, mode: HeapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parses and sets the ordering direction
    ///
    /// # Errors
    /// Returns [`ContainerError::InvalidMode`] unless `mode` is `"min"` or `"max"`.
    pub fn mode_str(self, mode: &str) -> Result<Self, ContainerError> {
        Ok(self.mode(mode.parse()?))
    }

    /// Sets the comparator, overriding the mode
    pub fn comparator(mut self, comparator: Comparator<K>) -> Self {
        self.comparator = Some(comparator);
        self
    }
}

impl<K: ?Sized> Default for HeapOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized> Clone for HeapOptions<K> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: ?Sized> fmt::Debug for HeapOptions<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapOptions")
            .field("mode", &self.mode)
            .field("comparator", &self.comparator)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("min".parse::<HeapMode>(), Ok(HeapMode::Min));
        assert_eq!("max".parse::<HeapMode>(), Ok(HeapMode::Max));
        assert_eq!(
            "MAX".parse::<HeapMode>(),
            Err(ContainerError::InvalidMode("MAX".to_owned()))
        );
        assert_eq!(
            "".parse::<HeapMode>(),
            Err(ContainerError::InvalidMode(String::new()))
        );
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [HeapMode::Min, HeapMode::Max] {
            assert_eq!(mode.to_string().parse::<HeapMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_ranks_above() {
        assert!(HeapMode::Min.ranks_above(&1, &2));
        assert!(!HeapMode::Min.ranks_above(&2, &2));
        assert!(HeapMode::Max.ranks_above(&2, &1));
        assert!(!HeapMode::Max.ranks_above(&f64::NAN, &1.0));
    }

    #[test]
    fn test_options_defaults() {
        let options: HeapOptions<i32> = HeapOptions::default();
        assert_eq!(options.mode, HeapMode::Min);
        assert!(options.comparator.is_none());

        let options: HeapOptions<i32> = HeapOptions::new().mode_str("max").unwrap();
        assert_eq!(options.mode, HeapMode::Max);
        assert!(HeapOptions::<i32>::new().mode_str("middle").is_err());
    }
}
