//! Distribution analysis: group samples by canonical color key and rank
//! the groups by size.
//!
//! Grouping uses an explicit ordered mapping built once per call: the
//! group order is the order in which keys are first encountered while
//! scanning the input forward. Nothing is shared across calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sample::PixelSample;

/// A cluster of samples sharing one canonical color key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorGroup {
    /// Canonical color key shared by all members.
    pub key: String,
    /// The first-encountered member of the group.
    ///
    /// This is the color reported for the group. It is a representative,
    /// not an average: channel values are never blended.
    pub representative: PixelSample,
    /// Every member of the group, in encounter order.
    pub members: Vec<PixelSample>,
}

impl ColorGroup {
    /// Number of members in the group. Always equals `members.len()`.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.members.len()
    }
}

/// Group samples by canonical key and rank the groups.
///
/// Singleton groups are discarded: a color seen only once is noise, not
/// a cluster. The survivors are sorted by descending member count with a
/// stable sort, so ties keep their first-encounter order.
#[must_use]
pub fn distribution(samples: &[PixelSample]) -> Vec<ColorGroup> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ColorGroup> = Vec::new();

    for &sample in samples {
        let key = sample.key();
        if let Some(&slot) = slots.get(&key) {
            groups[slot].members.push(sample);
        } else {
            slots.insert(key.clone(), groups.len());
            groups.push(ColorGroup {
                key,
                representative: sample,
                members: vec![sample],
            });
        }
    }

    groups.retain(|group| group.count() > 1);
    groups.sort_by(|a, b| b.count().cmp(&a.count()));
    groups
}
