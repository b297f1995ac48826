//! Measurement channels
//!
//! A probe publishes the extent it was given into a [`ChannelKey`] while the
//! layout pass places it. Publications are collected for that pass only; once
//! placement finishes, every [`ChannelSubscription`] reduces the publications
//! for its key with its [`MergePolicy`] and, if the result differs from what it
//! delivered last time, hands the new value to its callback.
//!
//! Keys carry the owning reader's group key, so nested readers on the same
//! axis never share a channel.

use std::cell::Cell;
use std::fmt;

use oneaxis_core::map::HashMap;
use oneaxis_core::Key;
use oneaxis_ui_layout::Axis;
use smallvec::SmallVec;

/// Value a channel carries when nothing was published.
pub const AXIS_VALUE_DEFAULT: f32 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelKey {
    axis: Axis,
    owner: Key,
}

impl ChannelKey {
    pub fn new(axis: Axis, owner: Key) -> Self {
        Self { axis, owner }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn owner(&self) -> Key {
        self.owner
    }
}

/// How several publications into one channel during a single pass are combined.
///
/// With zero publications every policy yields [`AXIS_VALUE_DEFAULT`]; with one
/// publication every policy yields that value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// More than one publication collapses to [`AXIS_VALUE_DEFAULT`].
    ///
    /// This is the behaviour the readers have always had and stays the
    /// default for compatibility: a second probe in the same channel erases
    /// the meaningful measurement.
    #[default]
    ResetToDefault,
    /// Keep the first publication in placement order.
    FirstWins,
    /// Keep the last publication in placement order.
    LastWins,
    /// Keep the largest publication.
    Max,
}

impl MergePolicy {
    pub fn merge(&self, publications: &[f32]) -> f32 {
        match publications {
            [] => AXIS_VALUE_DEFAULT,
            [only] => *only,
            [first, .., last] => match self {
                MergePolicy::ResetToDefault => AXIS_VALUE_DEFAULT,
                MergePolicy::FirstWins => *first,
                MergePolicy::LastWins => *last,
                MergePolicy::Max => publications.iter().copied().fold(f32::MIN, f32::max),
            },
        }
    }
}

/// Receiving end of one channel, owned by the reader that created it.
pub struct ChannelSubscription {
    key: ChannelKey,
    policy: Cell<MergePolicy>,
    last_delivered: Cell<Option<f32>>,
    on_change: Box<dyn Fn(f32)>,
}

impl ChannelSubscription {
    pub fn new(key: ChannelKey, policy: MergePolicy, on_change: impl Fn(f32) + 'static) -> Self {
        Self {
            key,
            policy: Cell::new(policy),
            last_delivered: Cell::new(None),
            on_change: Box::new(on_change),
        }
    }

    pub fn key(&self) -> ChannelKey {
        self.key
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy.get()
    }

    pub fn set_policy(&self, policy: MergePolicy) {
        self.policy.set(policy);
    }

    pub fn last_delivered(&self) -> Option<f32> {
        self.last_delivered.get()
    }

    /// Reduces one pass worth of publications and invokes the callback when
    /// the reduced value changed. Returns the delivered value, if any.
    pub fn deliver(&self, publications: &[f32]) -> Option<f32> {
        let value = self.policy.get().merge(publications);
        if self.last_delivered.get() == Some(value) {
            return None;
        }
        if publications.len() > 1 {
            log::debug!(
                "{} publications into {:?} merged with {:?} to {value}",
                publications.len(),
                self.key,
                self.policy.get()
            );
        }
        self.last_delivered.set(Some(value));
        (self.on_change)(value);
        Some(value)
    }
}

impl fmt::Debug for ChannelSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelSubscription")
            .field("key", &self.key)
            .field("policy", &self.policy.get())
            .field("last_delivered", &self.last_delivered.get())
            .finish_non_exhaustive()
    }
}

/// Publications gathered during one layout pass.
#[derive(Default, Debug)]
pub struct PublicationCollector {
    channels: HashMap<ChannelKey, SmallVec<[f32; 2]>>,
}

impl PublicationCollector {
    pub fn publish(&mut self, key: ChannelKey, value: f32) {
        log::trace!("probe published {value} into {key:?}");
        self.channels.entry(key).or_default().push(value);
    }

    /// Removes and returns the publications for `key`, in placement order.
    pub fn take(&mut self, key: ChannelKey) -> SmallVec<[f32; 2]> {
        self.channels.remove(&key).unwrap_or_default()
    }

    pub fn publications(&self, key: ChannelKey) -> &[f32] {
        self.channels.get(&key).map(|values| values.as_slice()).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of channels still holding publications nobody claimed.
    pub fn unclaimed(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
#[path = "tests/measurement_channel_tests.rs"]
mod tests;
