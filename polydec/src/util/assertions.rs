use itertools::Itertools;

use crate::decomp::DecompRing;

//Checks to verify the coherence of the ring structure after pointer surgery.
//Used in debug_assert!() blocks.

pub fn ring_is_coherent(ring: &DecompRing) -> bool {
    ring_closes_in_both_directions(ring)
        && neighbor_links_are_mutual(ring)
        && undo_stack_accounts_for_all_removed(ring)
}

/// Following `next` (resp. `prev`) from the front exactly `n_live` times must
/// arrive back at the front, without revisiting any vertex on the way.
pub fn ring_closes_in_both_directions(ring: &DecompRing) -> bool {
    let live = ring.live_keys().collect_vec();
    if !live.iter().all_unique() {
        return false;
    }

    let mut fwd = ring.front();
    let mut bwd = ring.front();
    for _ in 0..ring.n_live() {
        fwd = ring.vertex(fwd).next;
        bwd = ring.vertex(bwd).prev;
    }
    fwd == ring.front() && bwd == ring.front()
}

pub fn neighbor_links_are_mutual(ring: &DecompRing) -> bool {
    ring.live_keys().all(|k| {
        let v = ring.vertex(k);
        ring.vertex(v.prev).next == k && ring.vertex(v.next).prev == k
    })
}

pub fn undo_stack_accounts_for_all_removed(ring: &DecompRing) -> bool {
    ring.n_removed() == ring.n_initial() - ring.n_live()
}
