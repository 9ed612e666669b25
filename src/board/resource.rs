//! Resource kinds and the fixed-size per-resource map.
//!
//! Every per-resource quantity on the board (flow rates, need vectors) is a
//! `ResourceMap` indexed by the `ResourceKind` discriminant, so lookups never
//! miss and `match` over resources stays exhaustive.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The number of distinct resource kinds.
pub const RESOURCE_COUNT: usize = 5;

/// A resource produced by a tile.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ResourceKind {
    Brick = 0,
    Lumber = 1,
    Ore = 2,
    Grain = 3,
    Wool = 4,
}

/// All resource variants in index order.
pub const ALL_RESOURCES: [ResourceKind; RESOURCE_COUNT] = [
    ResourceKind::Brick,
    ResourceKind::Lumber,
    ResourceKind::Ore,
    ResourceKind::Grain,
    ResourceKind::Wool,
];

impl ResourceKind {
    /// Returns the lowercase name used in board notation.
    pub const fn name(self) -> &'static str {
        match self {
            ResourceKind::Brick => "brick",
            ResourceKind::Lumber => "lumber",
            ResourceKind::Ore => "ore",
            ResourceKind::Grain => "grain",
            ResourceKind::Wool => "wool",
        }
    }

    /// Looks up a resource by its lowercase name.
    pub fn from_name(name: &str) -> Option<ResourceKind> {
        ALL_RESOURCES.iter().copied().find(|r| r.name() == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a resource name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource '{0}'")]
pub struct UnknownResource(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ResourceKind::from_name(&lower).ok_or(UnknownResource(lower))
    }
}

/// A value for each resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceMap([f64; RESOURCE_COUNT]);

/// Target resource amounts used by fill-time queries.
pub type NeedVector = ResourceMap;

impl ResourceMap {
    /// A map with every resource set to zero.
    pub const ZERO: ResourceMap = ResourceMap([0.0; RESOURCE_COUNT]);

    /// Builds a map with every resource set to `value`.
    pub const fn splat(value: f64) -> Self {
        ResourceMap([value; RESOURCE_COUNT])
    }

    /// Builds a map from `(resource, value)` pairs; unlisted resources are zero.
    /// A resource listed twice keeps the last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ResourceKind, f64)>,
    {
        let mut map = ResourceMap::ZERO;
        for (resource, value) in pairs {
            map[resource] = value;
        }
        map
    }

    /// Iterates `(resource, value)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, f64)> + '_ {
        ALL_RESOURCES.iter().map(move |&r| (r, self.0[r as usize]))
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Index<ResourceKind> for ResourceMap {
    type Output = f64;

    fn index(&self, resource: ResourceKind) -> &f64 {
        &self.0[resource as usize]
    }
}

impl IndexMut<ResourceKind> for ResourceMap {
    fn index_mut(&mut self, resource: ResourceKind) -> &mut f64 {
        &mut self.0[resource as usize]
    }
}

impl AddAssign for ResourceMap {
    fn add_assign(&mut self, rhs: ResourceMap) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl Add for ResourceMap {
    type Output = ResourceMap;

    fn add(mut self, rhs: ResourceMap) -> ResourceMap {
        self += rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_indices_are_sequential() {
        for (i, r) in ALL_RESOURCES.iter().enumerate() {
            assert_eq!(*r as usize, i, "Resource {:?} has wrong index", r);
        }
    }

    #[test]
    fn name_lookup() {
        for r in ALL_RESOURCES {
            assert_eq!(ResourceKind::from_name(r.name()), Some(r));
        }
        assert_eq!(ResourceKind::from_name("desert"), None);
        assert_eq!(ResourceKind::from_name(""), None);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Lumber".parse::<ResourceKind>(), Ok(ResourceKind::Lumber));
        assert_eq!(" ORE ".parse::<ResourceKind>(), Ok(ResourceKind::Ore));
        assert_eq!(
            "gold".parse::<ResourceKind>(),
            Err(UnknownResource("gold".to_string()))
        );
    }

    #[test]
    fn map_from_pairs_defaults_to_zero() {
        let map = ResourceMap::from_pairs([(ResourceKind::Ore, 2.0), (ResourceKind::Wool, 0.5)]);
        assert_eq!(map[ResourceKind::Ore], 2.0);
        assert_eq!(map[ResourceKind::Wool], 0.5);
        assert_eq!(map[ResourceKind::Brick], 0.0);
        assert_eq!(map.total(), 2.5);
    }

    #[test]
    fn map_addition_is_per_resource() {
        let a = ResourceMap::from_pairs([(ResourceKind::Grain, 1.0)]);
        let b = ResourceMap::from_pairs([(ResourceKind::Grain, 2.0), (ResourceKind::Lumber, 3.0)]);
        let sum = a + b;
        assert_eq!(sum[ResourceKind::Grain], 3.0);
        assert_eq!(sum[ResourceKind::Lumber], 3.0);
        assert_eq!(sum[ResourceKind::Ore], 0.0);
    }

    #[test]
    fn map_iter_is_in_index_order() {
        let map = ResourceMap::from_pairs([(ResourceKind::Wool, 4.0), (ResourceKind::Brick, 1.0)]);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), RESOURCE_COUNT);
        assert_eq!(pairs[0], (ResourceKind::Brick, 1.0));
        assert_eq!(pairs[4], (ResourceKind::Wool, 4.0));
        assert_eq!(pairs[2], (ResourceKind::Ore, 0.0));
    }
}
