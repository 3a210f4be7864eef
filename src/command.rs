//! Command-based control for loaders.

use crate::config::LoaderConfig;
use crate::time::TimeDuration;

/// Actions for controlling a loader.
///
/// Useful when control requests arrive over a channel or queue and are
/// applied from the rendering path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoaderAction<D: TimeDuration> {
    /// Start animating.
    Start,
    /// Stop animating.
    Stop,
    /// Stop, then start from a fresh cycle.
    Restart,
    /// Replace the configuration.
    Configure(LoaderConfig<D>),
}
