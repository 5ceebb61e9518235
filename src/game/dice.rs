//! Dice faces and the multiset pool they are rolled into.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One symbolic outcome of a die.
///
/// Faces are ordered so that pools iterate and display deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Face {
    /// Takes an arrow from the shared pile.
    Arrow,
    /// Heals one point.
    Beer,
    /// Three of these hurt the roller and end rerolling.
    Dynamite,
    /// Three of these fire the Gatling.
    Gatling,
    /// Shoots a player at distance 1.
    #[serde(rename = "shoot-1")]
    Shoot1,
    /// Shoots a player at distance 2.
    #[serde(rename = "shoot-2")]
    Shoot2,
}

impl Face {
    /// Every face, each equally likely on a roll.
    pub const ALL: [Face; 6] = [
        Face::Arrow,
        Face::Beer,
        Face::Dynamite,
        Face::Gatling,
        Face::Shoot1,
        Face::Shoot2,
    ];

    /// Display name of the face.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Arrow => "arrow",
            Face::Beer => "beer",
            Face::Dynamite => "dynamite",
            Face::Gatling => "gatling",
            Face::Shoot1 => "1",
            Face::Shoot2 => "2",
        }
    }

    /// Single-character key used to pick the face at a prompt.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Face::Arrow => 'a',
            Face::Beer => 'b',
            Face::Dynamite => 'd',
            Face::Gatling => 'g',
            Face::Shoot1 => '1',
            Face::Shoot2 => '2',
        }
    }

    /// Look a face up by its prompt key.
    #[must_use]
    pub fn from_key(key: char) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|face| face.key() == key.to_ascii_lowercase())
    }

    /// Whether a die showing this face may be rerolled. Dynamite is kept.
    #[must_use]
    pub const fn is_rerollable(self) -> bool {
        !matches!(self, Face::Dynamite)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A multiset of dice faces.
///
/// Zero counts are never stored, so two pools with the same dice compare
/// equal. Every operation is total: subtraction saturates at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Face, u32>", into = "BTreeMap<Face, u32>")]
pub struct Pool {
    counts: BTreeMap<Face, u32>,
}

impl Pool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool holding `count` dice of a single face.
    #[must_use]
    pub fn of(face: Face, count: u32) -> Self {
        let mut pool = Self::new();
        pool.insert(face, count);
        pool
    }

    /// Number of dice showing `face`.
    #[must_use]
    pub fn count(&self, face: Face) -> u32 {
        self.counts.get(&face).copied().unwrap_or(0)
    }

    /// Total number of dice.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Whether the pool holds no dice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Add `count` dice showing `face`.
    pub fn insert(&mut self, face: Face, count: u32) {
        if count > 0 {
            *self.counts.entry(face).or_insert(0) += count;
        }
    }

    /// Add every die of `other` to this pool.
    pub fn add(&mut self, other: &Pool) {
        for (face, count) in other.iter() {
            self.insert(face, count);
        }
    }

    /// Take the dice of `other` out of this pool.
    ///
    /// Removing more dice of a face than are present leaves zero of it.
    pub fn remove(&mut self, other: &Pool) {
        for (face, count) in other.iter() {
            if let Some(held) = self.counts.get_mut(&face) {
                *held = held.saturating_sub(count);
                if *held == 0 {
                    self.counts.remove(&face);
                }
            }
        }
    }

    /// Sub-pool of the faces matching `predicate`, counts preserved.
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(Face) -> bool) -> Pool {
        Pool {
            counts: self
                .counts
                .iter()
                .filter(|&(&face, _)| predicate(face))
                .map(|(&face, &count)| (face, count))
                .collect(),
        }
    }

    /// Whether every face count of `other` fits inside this pool.
    #[must_use]
    pub fn contains(&self, other: &Pool) -> bool {
        other.iter().all(|(face, count)| count <= self.count(face))
    }

    /// Iterate `(face, count)` pairs in face order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, u32)> + '_ {
        self.counts.iter().map(|(&face, &count)| (face, count))
    }

    /// Iterate individual dice in face order.
    pub fn dice(&self) -> impl Iterator<Item = Face> + '_ {
        self.iter()
            .flat_map(|(face, count)| std::iter::repeat_n(face, count as usize))
    }
}

impl FromIterator<Face> for Pool {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut pool = Pool::new();
        for face in iter {
            pool.insert(face, 1);
        }
        pool
    }
}

impl From<BTreeMap<Face, u32>> for Pool {
    fn from(counts: BTreeMap<Face, u32>) -> Self {
        let mut pool = Pool::new();
        for (face, count) in counts {
            pool.insert(face, count);
        }
        pool
    }
}

impl From<Pool> for BTreeMap<Face, u32> {
    fn from(pool: Pool) -> Self {
        pool.counts
    }
}

impl fmt::Display for Pool {
    /// Formats as `2× arrow, 1× beer`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (face, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{count}× {face}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(faces: &[Face]) -> Pool {
        faces.iter().copied().collect()
    }

    #[test]
    fn test_pool_counts() {
        let p = pool(&[Face::Arrow, Face::Arrow, Face::Beer]);
        assert_eq!(p.count(Face::Arrow), 2);
        assert_eq!(p.count(Face::Beer), 1);
        assert_eq!(p.count(Face::Gatling), 0);
        assert_eq!(p.size(), 3);
    }

    #[test]
    fn test_pool_remove_saturates() {
        let mut p = pool(&[Face::Beer]);
        p.remove(&Pool::of(Face::Beer, 3));
        p.remove(&Pool::of(Face::Gatling, 1));
        assert!(p.is_empty());
        assert_eq!(p, Pool::new());
    }

    #[test]
    fn test_pool_contains() {
        let p = pool(&[Face::Gatling, Face::Gatling, Face::Gatling, Face::Shoot1]);
        assert!(p.contains(&Pool::of(Face::Gatling, 3)));
        assert!(!p.contains(&Pool::of(Face::Gatling, 4)));
        assert!(p.contains(&Pool::new()));
        assert!(!Pool::new().contains(&Pool::of(Face::Beer, 1)));
    }

    #[test]
    fn test_pool_filter_keeps_counts() {
        let p = pool(&[Face::Dynamite, Face::Dynamite, Face::Arrow, Face::Shoot2]);
        let rerollable = p.filter(Face::is_rerollable);
        assert_eq!(rerollable.count(Face::Dynamite), 0);
        assert_eq!(rerollable.count(Face::Arrow), 1);
        assert_eq!(rerollable.size(), 2);
    }

    #[test]
    fn test_pool_display() {
        let p = pool(&[Face::Beer, Face::Arrow, Face::Arrow, Face::Shoot1]);
        assert_eq!(p.to_string(), "2× arrow, 1× beer, 1× 1");
        assert_eq!(Pool::new().to_string(), "");
    }

    #[test]
    fn test_face_keys() {
        for face in Face::ALL {
            assert_eq!(Face::from_key(face.key()), Some(face));
        }
        assert_eq!(Face::from_key('G'), Some(Face::Gatling));
        assert_eq!(Face::from_key('x'), None);
    }

    #[test]
    fn test_pool_serde() {
        let p = pool(&[Face::Shoot1, Face::Beer, Face::Beer]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"beer":2,"shoot-1":1}"#);
        let back: Pool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        let zeros: Pool = serde_json::from_str(r#"{"beer":0,"arrow":1}"#).unwrap();
        assert_eq!(zeros, Pool::of(Face::Arrow, 1));
    }
}
