/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{adjacency::NeighborLists, sets::VertexSets, Error, Result};
use dsi_progress_logger::ProgressLog;
use log::warn;
use std::mem;
use webgraph::traits::RandomAccessGraph;

/// Merges the (`size` − 1)-slots of `prev` pairwise into the `size`-slots
/// of `next`, returning the number of slots produced.
///
/// A generation is a dense buffer of equally sized slots, each a strictly
/// ascending run of vertex indices, with the slots themselves in
/// lexicographic order. Under this representation two slots can be merged
/// into a slot of the next generation iff they agree everywhere except in
/// a single position and the two vertices they do not share pass the
/// adjacency test (adjacent for cliques, non-adjacent when `independent`
/// is set).
fn merge_generation(
    adj: &NeighborLists,
    size: usize,
    prev: &[usize],
    next: &mut Vec<usize>,
    prev_count: usize,
    independent: bool,
    stop: &mut impl FnMut() -> bool,
) -> Result<usize> {
    next.clear();
    next.try_reserve(size.saturating_mul(prev_count))?;

    for j in 0..prev_count {
        if stop() {
            return Err(Error::Interrupted);
        }
        let c1 = &prev[j * (size - 1)..(j + 1) * (size - 1)];
        for k in (j + 1)..prev_count {
            let c2 = &prev[k * (size - 1)..(k + 1) * (size - 1)];
            let committed = next.len();
            next.try_reserve(size)?;

            // Copy the longest common prefix of the two slots.
            let mut l = 0;
            while l < size - 1 && c1[l] == c2[l] {
                next.push(c1[l]);
                l += 1;
            }
            if l == size - 1 {
                // Two identical slots: the lexicographic ordering of the
                // generation should make this impossible.
                warn!("possible bug: duplicate slots in a generation");
                next.truncate(committed);
                continue;
            }

            // Since j < k and the generation is lexicographically ordered,
            // c1[l] < c2[l]. Keep the smaller vertex and carry the two
            // candidates for the position in which the slots differ.
            next.push(c1[l]);
            let v1 = c1[l];
            let mut v2 = c2[l];
            l += 1;

            // Copy the remaining positions. A pair of entries is viable
            // only if the entries are equal, or if the smaller one matches
            // the carried vertex, in which case the larger one replaces the
            // carried candidate; anything else means the slots differ in
            // more than one position.
            let mut single_mismatch = true;
            while l < size - 1 {
                if c1[l] == c2[l] {
                    next.push(c1[l]);
                    single_mismatch = false;
                } else if single_mismatch {
                    if c1[l] < c2[l] {
                        if c1[l] == v1 {
                            next.push(c1[l]);
                            v2 = c2[l];
                        } else {
                            break;
                        }
                    } else if c2[l] == v1 {
                        next.push(c2[l]);
                        v2 = c1[l];
                    } else {
                        break;
                    }
                } else {
                    break;
                }
                l += 1;
            }
            if l != size - 1 {
                next.truncate(committed);
                continue;
            }

            // v1 and v2 are the two vertices the slots do not share: check
            // for an edge (cliques) or for its absence (independent sets),
            // and accept the new slot only if appending v2 keeps it
            // ascending, which also keeps the generation lexicographically
            // ordered.
            if adj.are_neighbors(v1, v2) != independent
                && (next.len() == committed || v2 > next[next.len() - 1])
            {
                next.push(v2);
            } else {
                next.truncate(committed);
            }
        }
    }

    Ok(next.len() / size)
}

fn enumerate_bounded(
    graph: impl RandomAccessGraph,
    min_size: usize,
    mut max_size: usize,
    independent: bool,
    mut stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<VertexSets> {
    let adj = NeighborLists::new(graph);
    let num_nodes = adj.num_nodes();
    if max_size == 0 || max_size > num_nodes {
        max_size = num_nodes;
    }

    pl.item_name("generation");
    pl.expected_updates(Some(max_size.saturating_sub(1)));
    pl.start(if independent {
        "Enumerating independent vertex sets..."
    } else {
        "Enumerating cliques..."
    });

    let mut res = VertexSets::new();

    // Generation 1: every vertex is a 1-slot.
    let mut prev: Vec<usize> = Vec::new();
    let mut next: Vec<usize> = Vec::new();
    next.try_reserve(num_nodes)?;
    next.extend(0..num_nodes);
    let mut count = num_nodes;

    if min_size <= 1 {
        for v in 0..num_nodes {
            let mut set = Vec::new();
            set.try_reserve_exact(1)?;
            set.push(v);
            res.push(set)?;
        }
    }

    let mut size = 2;
    while size <= max_size && count > 1 {
        if stop() {
            return Err(Error::Interrupted);
        }
        mem::swap(&mut prev, &mut next);
        count = merge_generation(&adj, size, &prev, &mut next, count, independent, &mut stop)?;

        if size >= min_size {
            for slot in next.chunks_exact(size).take(count) {
                let mut set = Vec::new();
                set.try_reserve_exact(size)?;
                set.extend_from_slice(slot);
                res.push(set)?;
            }
        }

        pl.light_update();
        size += 1;
    }

    pl.done();
    Ok(res)
}

/// Enumerates all cliques with size in `[min_size, max_size]`.
///
/// A clique is a set of pairwise adjacent vertices. Each clique is
/// returned as a strictly ascending set of vertex indices, and the
/// returned collection contains no duplicates. A `max_size` of zero, or
/// greater than the number of nodes, means no upper bound.
///
/// If you are only interested in the size of the largest clique, use
/// [`clique_number`](crate::clique_number) instead; for the inclusion-wise
/// maximal cliques, use [`maximal_cliques`](crate::maximal_cliques).
///
/// The `stop` predicate is polled periodically; when it returns true the
/// enumeration is abandoned with [`Error::Interrupted`].
pub fn cliques(
    graph: impl RandomAccessGraph,
    min_size: usize,
    max_size: usize,
    stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<VertexSets> {
    enumerate_bounded(graph, min_size, max_size, false, stop, pl)
}

/// Enumerates all independent vertex sets with size in
/// `[min_size, max_size]`.
///
/// An independent vertex set is a set of pairwise non-adjacent vertices.
/// Each set is returned as a strictly ascending set of vertex indices, and
/// the returned collection contains no duplicates. A `max_size` of zero,
/// or greater than the number of nodes, means no upper bound.
///
/// If you are only interested in the size of the largest independent
/// vertex set, use [`independence_number`](crate::independence_number)
/// instead; for the inclusion-wise maximal sets, use
/// [`maximal_independent_vertex_sets`](crate::maximal_independent_vertex_sets).
///
/// The `stop` predicate is polled periodically; when it returns true the
/// enumeration is abandoned with [`Error::Interrupted`].
pub fn independent_vertex_sets(
    graph: impl RandomAccessGraph,
    min_size: usize,
    max_size: usize,
    stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<VertexSets> {
    enumerate_bounded(graph, min_size, max_size, true, stop, pl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use webgraph::graphs::vec_graph::VecGraph;

    fn path_adjacency() -> NeighborLists {
        // 0 - 1 - 2 - 3
        NeighborLists::new(VecGraph::from_arcs([
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 3),
            (3, 2),
        ]))
    }

    #[test]
    fn test_merge_rejects_duplicate_slots() {
        let adj = path_adjacency();
        // A corrupted generation containing the same 2-slot twice; the
        // defensive branch must skip the pair without producing output.
        let prev = vec![0, 1, 0, 1];
        let mut next = Vec::new();
        let count =
            merge_generation(&adj, 3, &prev, &mut next, 2, false, &mut || false).unwrap();
        assert_eq!(count, 0);
        assert!(next.is_empty());
    }

    #[test]
    fn test_organic_generations_have_no_duplicates() {
        // On a well-formed generation the defensive branch is unreachable:
        // every produced generation is strictly lexicographically
        // increasing, so no two slots are ever identical.
        let adj = path_adjacency();
        let mut prev = (0..adj.num_nodes()).collect::<Vec<_>>();
        let mut next = Vec::new();
        let mut count = adj.num_nodes();
        let mut size = 2;
        while count > 1 {
            count =
                merge_generation(&adj, size, &prev, &mut next, count, false, &mut || false)
                    .unwrap();
            let slots = next.chunks_exact(size).take(count).collect::<Vec<_>>();
            for pair in slots.windows(2) {
                assert!(pair[0] < pair[1], "generation is not strictly ordered");
            }
            std::mem::swap(&mut prev, &mut next);
            size += 1;
        }
    }

    #[test]
    fn test_rejected_pair_restores_watermark() {
        let adj = path_adjacency();
        // The only 2-slots are the edges; (0, 1) and (2, 3) share no
        // vertex, so their merge must leave no partial slot behind.
        let prev = vec![0, 1, 2, 3];
        let mut next = Vec::new();
        let count =
            merge_generation(&adj, 3, &prev, &mut next, 2, false, &mut || false).unwrap();
        assert_eq!(count, 0);
        assert!(next.is_empty());
    }
}
