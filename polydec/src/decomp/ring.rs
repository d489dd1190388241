use std::fmt;

use itertools::Itertools;
use log::{debug, info};
use ordered_float::NotNan;
use slotmap::SlotMap;

use crate::decomp::{VertKey, Vertex};
use crate::errors::DecompError;
use crate::geometry::{Point, SPolygon};
use crate::util::assertions;

/// A closed polygon stored as a circular doubly-linked ring of vertices in an
/// arena, supporting reversible decimation.
///
/// [`DecompRing::set_to_size`] removes the globally least important vertex one
/// at a time until a target fraction of the original vertex count is reached,
/// or pops previously removed vertices off the undo stack to grow back towards
/// the original shape. Removal and restoration are strict inverses: vertices
/// reappear in exactly the reverse order they disappeared in.
#[derive(Debug, Clone)]
pub struct DecompRing {
    verts: SlotMap<VertKey, Vertex>,
    /// Entry point and iteration anchor, always a live vertex
    front: VertKey,
    n_initial: usize,
    n_live: usize,
    /// Undo stack of removed vertices, most recent on top
    removed: Vec<VertKey>,
}

impl DecompRing {
    /// Builds a ring from an ordered, implicitly closed point sequence
    /// (the last point connects back to the first).
    pub fn new(points: Vec<Point>) -> Result<Self, DecompError> {
        if points.is_empty() {
            return Err(DecompError::InvalidInput(
                "no polygon can be formed from an empty point sequence".to_string(),
            ));
        }

        let mut verts: SlotMap<VertKey, Vertex> = SlotMap::with_key();
        let keys = points
            .iter()
            .map(|&point| {
                //self-linked placeholder, the links are closed below
                verts.insert_with_key(|k| Vertex {
                    point,
                    importance: 0.0,
                    prev: k,
                    next: k,
                })
            })
            .collect_vec();

        let n = keys.len();
        for (i, &k) in keys.iter().enumerate() {
            verts[k].prev = keys[(i + n - 1) % n];
            verts[k].next = keys[(i + 1) % n];
        }

        let mut ring = DecompRing {
            verts,
            front: keys[0],
            n_initial: n,
            n_live: n,
            removed: Vec::with_capacity(n),
        };

        //scores depend only on the immediate neighbors, but every link must be in place first
        for k in keys {
            ring.recompute_importance(k);
        }

        debug_assert!(assertions::ring_is_coherent(&ring));

        Ok(ring)
    }

    /// Number of vertices the ring was created with
    pub fn n_initial(&self) -> usize {
        self.n_initial
    }

    /// Number of currently live vertices
    pub fn n_live(&self) -> usize {
        self.n_live
    }

    /// Depth of the undo stack, always `n_initial - n_live`
    pub fn n_removed(&self) -> usize {
        self.removed.len()
    }

    /// Anchor vertex of the ring, guaranteed live
    pub fn front(&self) -> VertKey {
        self.front
    }

    pub fn vertex(&self, key: VertKey) -> &Vertex {
        &self.verts[key]
    }

    /// Keys of all live vertices, in ring order starting at [`DecompRing::front`]
    pub fn live_keys(&self) -> impl Iterator<Item = VertKey> + '_ {
        let mut next = self.front;
        (0..self.n_live).map(move |_| {
            let cur = next;
            next = self.verts[cur].next;
            cur
        })
    }

    /// Resizes the ring to `target_percent` of its initial vertex count
    /// (rounded down), by removing least important vertices or restoring
    /// previously removed ones.
    ///
    /// Validation happens before any mutation: a target of 0 vertices or more
    /// vertices than the ring was created with is rejected with
    /// [`DecompError::TargetUnreachable`] and leaves the ring untouched.
    pub fn set_to_size(&mut self, target_percent: u64) -> Result<(), DecompError> {
        let target = (target_percent.saturating_mul(self.n_initial as u64) / 100) as usize;

        if target == 0 || target > self.n_initial {
            return Err(DecompError::TargetUnreachable {
                target,
                n_initial: self.n_initial,
                n_live: self.n_live,
            });
        }

        let before = self.n_live;
        while self.n_live > target {
            self.remove_least()?;
        }
        while self.n_live < target {
            self.restore_last()?;
        }

        if before != self.n_live {
            info!(
                "[RING] resized from {} to {} live vertices ({}% of {})",
                before, self.n_live, target_percent, self.n_initial
            );
        }

        Ok(())
    }

    /// Removes the least important live vertex, pushing it onto the undo stack.
    /// Ties are broken by first encounter in ring order from the front.
    ///
    /// The ring must always retain at least one vertex, removing the last one
    /// is rejected with [`DecompError::TargetUnreachable`].
    pub fn remove_least(&mut self) -> Result<VertKey, DecompError> {
        if self.n_live == 1 {
            return Err(DecompError::TargetUnreachable {
                target: 0,
                n_initial: self.n_initial,
                n_live: self.n_live,
            });
        }

        let key = self.find_least_important();
        let Vertex {
            point, prev, next, ..
        } = self.verts[key];

        if key == self.front {
            //the anchor is never allowed to be a removed vertex
            self.front = next;
        }

        //splice out, leaving the vertex's own links frozen for restoration
        self.verts[prev].next = next;
        self.verts[next].prev = prev;

        self.recompute_importance(prev);
        self.recompute_importance(next);

        self.n_live -= 1;
        self.removed.push(key);

        debug!(
            "[RING] removed ({}, {}), {} live vertices left",
            point.0, point.1, self.n_live
        );
        debug_assert!(assertions::ring_is_coherent(self));

        Ok(key)
    }

    /// Relinks the most recently removed vertex through its frozen handles,
    /// the exact inverse of the removal that parked it on the undo stack.
    pub fn restore_last(&mut self) -> Result<VertKey, DecompError> {
        let key = self.removed.pop().ok_or(DecompError::EmptyUndoStack)?;
        let Vertex {
            point, prev, next, ..
        } = self.verts[key];

        self.verts[prev].next = key;
        self.verts[next].prev = key;

        //the restored vertex's own score is still exact: coordinates never move
        //and its frozen neighbors are the vertices it was scored against
        self.recompute_importance(prev);
        self.recompute_importance(next);

        self.n_live += 1;

        debug!(
            "[RING] restored ({}, {}), {} live vertices",
            point.0, point.1, self.n_live
        );
        debug_assert!(assertions::ring_is_coherent(self));

        Ok(key)
    }

    /// Coordinates of the live vertices in ring order starting at the front
    pub fn to_polygon(&self) -> SPolygon {
        SPolygon::new(self.live_keys().map(|k| self.verts[k].point).collect())
    }

    fn find_least_important(&self) -> VertKey {
        //min_by_key keeps the first of equally minimal elements: ties break in
        //ring order from the front
        self.live_keys()
            .min_by_key(|&k| NotNan::new(self.verts[k].importance).expect("importance is NaN"))
            .expect("ring is empty")
    }

    fn recompute_importance(&mut self, key: VertKey) {
        let v = self.verts[key];
        let prev = self.verts[v.prev].point;
        let next = self.verts[v.next].point;

        self.verts[key].importance =
            prev.distance_to(&v.point) + v.point.distance_to(&next) - prev.distance_to(&next);
    }
}

impl fmt::Display for DecompRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dump = self
            .live_keys()
            .map(|k| {
                let v = &self.verts[k];
                format!(
                    "x = {}, y = {}, importance = {}",
                    v.point.0, v.point.1, v.importance
                )
            })
            .join("\n");
        write!(f, "{dump}")
    }
}
