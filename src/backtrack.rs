/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{adjacency::NeighborLists, sets::VertexSets, Error, Result};
use dsi_progress_logger::ProgressLog;
use webgraph::traits::RandomAccessGraph;

/// Mutable state of the Tsukiyama–Ide–Ariyoshi–Shirakawa enumeration of
/// maximal independent sets.
///
/// Vertices are examined in ascending order. At level `level` the vertices
/// `0..=level` have been decided: a vertex `v` is in the current set iff
/// `blockers[v]` is zero; otherwise `blockers[v]` counts the selected
/// neighbors of `v` that force it out. The recursion mutates the counters
/// on the way down and restores them on the way up, using per-level
/// journals of touched neighbor positions, so that every call is
/// state-neutral.
struct Tias {
    deg: Box<[usize]>,
    // Signed: the undo sequence decrements all the counters touched on the
    // way down before the journal replay re-increments them, so a counter
    // can transiently drop below zero.
    blockers: Box<[isize]>,
    buckets: Box<[Vec<usize>]>,
    largest_set_size: usize,
    keep_only_largest: bool,
}

impl Tias {
    fn new(adj: &NeighborLists, keep_only_largest: bool) -> Self {
        let num_nodes = adj.num_nodes();
        Self {
            deg: (0..num_nodes).map(|v| adj.degree(v)).collect(),
            blockers: vec![0isize; num_nodes].into_boxed_slice(),
            buckets: (0..num_nodes + 1).map(|_| Vec::new()).collect(),
            largest_set_size: 0,
            keep_only_largest,
        }
    }

    fn solve(
        &mut self,
        adj: &NeighborLists,
        level: usize,
        mut res: Option<&mut VertexSets>,
        stop: &mut impl FnMut() -> bool,
        pl: &mut impl ProgressLog,
    ) -> Result<()> {
        if stop() {
            return Err(Error::Interrupted);
        }
        pl.light_update();
        let num_nodes = adj.num_nodes();

        if level + 1 >= num_nodes {
            // Leaf: the current set is every vertex with no blockers.
            let size = self.blockers.iter().filter(|&&b| b == 0).count();
            if let Some(res) = res {
                let mut set = Vec::new();
                set.try_reserve_exact(size)?;
                set.extend((0..num_nodes).filter(|&v| self.blockers[v] == 0));
                if !self.keep_only_largest {
                    res.push(set)?;
                } else if size > self.largest_set_size {
                    // Strictly larger than every set seen so far: the
                    // previous sets are no longer largest.
                    res.clear();
                    res.push(set)?;
                } else if size == self.largest_set_size {
                    res.push(set)?;
                }
            }
            if size > self.largest_set_size {
                self.largest_set_size = size;
            }
            return Ok(());
        }

        let v1 = level + 1;
        let neighbors = adj.neighbors(v1);
        let deg = self.deg[v1];

        // Number of selected vertices among the neighbors of v1 with index
        // at most level; the scan stops early thanks to ascending order.
        let mut c = 0isize;
        let mut j = 0;
        while j < deg && neighbors[j] <= level {
            if self.blockers[neighbors[j]] == 0 {
                c += 1;
            }
            j += 1;
        }

        if c == 0 {
            // No selected neighbor excludes v1: select it.
            let mut j = 0;
            while j < deg && neighbors[j] <= level {
                self.blockers[neighbors[j]] += 1;
                j += 1;
            }
            self.solve(adj, v1, res, stop, pl)?;
            let mut j = 0;
            while j < deg && neighbors[j] <= level {
                self.blockers[neighbors[j]] -= 1;
                j += 1;
            }
        } else {
            // v1 is excluded by c selected neighbors.
            self.blockers[v1] = c;
            self.solve(adj, v1, res.as_deref_mut(), stop, pl)?;
            self.blockers[v1] = 0;

            // Alternatively, select v1 in place of the selected neighbors
            // blocking it. Each such neighbor v2 loses its support: every
            // earlier neighbor of v2 gets one blocker less, and if some
            // counter reaches zero a previously excluded vertex would
            // become selectable, making the branch infeasible. The touched
            // positions are journaled in the bucket of v1 so the counters
            // can be restored afterwards.
            let mut feasible = true;
            let mut j = 0;
            while j < deg && neighbors[j] <= level {
                let v2 = neighbors[j];
                if self.blockers[v2] == 0 {
                    self.buckets[v1].push(j);
                    let neighbors2 = adj.neighbors(v2);
                    let mut k = 0;
                    while k < self.deg[v2] && neighbors2[k] <= level {
                        let v3 = neighbors2[k];
                        self.blockers[v3] -= 1;
                        if self.blockers[v3] == 0 {
                            feasible = false;
                        }
                        k += 1;
                    }
                }
                self.blockers[v2] += 1;
                j += 1;
            }

            if feasible {
                self.solve(adj, v1, res.as_deref_mut(), stop, pl)?;
            }

            let mut j = 0;
            while j < deg && neighbors[j] <= level {
                self.blockers[neighbors[j]] -= 1;
                j += 1;
            }

            // Replay the journal backwards, restoring the counters of the
            // earlier neighbors of every replaced vertex.
            for i in (0..self.buckets[v1].len()).rev() {
                let v2 = neighbors[self.buckets[v1][i]];
                let neighbors2 = adj.neighbors(v2);
                let mut k = 0;
                while k < self.deg[v2] && neighbors2[k] <= level {
                    self.blockers[neighbors2[k]] += 1;
                    k += 1;
                }
            }
            self.buckets[v1].clear();
        }

        Ok(())
    }
}

/// Runs the backtracking enumeration on the plain or complement adjacency,
/// returning the size of the largest set seen.
fn maximal_or_largest(
    graph: impl RandomAccessGraph,
    keep_only_largest: bool,
    complement: bool,
    mut res: Option<&mut VertexSets>,
    mut stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<usize> {
    let adj = if complement {
        NeighborLists::complement(graph)
    } else {
        NeighborLists::new(graph)
    };

    pl.item_name("call");
    pl.start("Backtracking over maximal sets...");

    let mut state = Tias::new(&adj, keep_only_largest);
    state.solve(&adj, 0, res.as_deref_mut(), &mut stop, pl)?;

    pl.done();
    Ok(state.largest_set_size)
}

/// Enumerates the maximal cliques of the graph.
///
/// A maximal clique is a clique that cannot be extended by adding any
/// vertex; it is found as a maximal independent vertex set of the
/// complement graph. Note that a maximal clique is not necessarily
/// largest; see [`largest_cliques`].
///
/// The `stop` predicate is polled at every step of the recursion; when it
/// returns true the enumeration is abandoned with [`Error::Interrupted`].
pub fn maximal_cliques(
    graph: impl RandomAccessGraph,
    stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<VertexSets> {
    let mut res = VertexSets::new();
    maximal_or_largest(graph, false, true, Some(&mut res), stop, pl)?;
    Ok(res)
}

/// Enumerates the maximal independent vertex sets of the graph.
///
/// A maximal independent vertex set is an independent vertex set that
/// cannot be extended by adding any vertex.
///
/// The algorithm is from S. Tsukiyama, M. Ide, H. Ariyoshi, and
/// I. Shirakawa, “A new algorithm for generating all the maximal
/// independent sets”, *SIAM J. Comput.*, 6:505–517, 1977.
///
/// The `stop` predicate is polled at every step of the recursion; when it
/// returns true the enumeration is abandoned with [`Error::Interrupted`].
pub fn maximal_independent_vertex_sets(
    graph: impl RandomAccessGraph,
    stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<VertexSets> {
    let mut res = VertexSets::new();
    maximal_or_largest(graph, false, false, Some(&mut res), stop, pl)?;
    Ok(res)
}

/// Returns the cliques of maximum size.
///
/// Every largest clique is maximal, but the converse does not hold in
/// general.
pub fn largest_cliques(
    graph: impl RandomAccessGraph,
    stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<VertexSets> {
    let mut res = VertexSets::new();
    maximal_or_largest(graph, true, true, Some(&mut res), stop, pl)?;
    Ok(res)
}

/// Returns the independent vertex sets of maximum size.
///
/// Every largest independent vertex set is maximal, but the converse does
/// not hold in general.
pub fn largest_independent_vertex_sets(
    graph: impl RandomAccessGraph,
    stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<VertexSets> {
    let mut res = VertexSets::new();
    maximal_or_largest(graph, true, false, Some(&mut res), stop, pl)?;
    Ok(res)
}

/// Returns the clique number ω of the graph, that is, the size of its
/// largest clique.
pub fn clique_number(
    graph: impl RandomAccessGraph,
    stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<usize> {
    maximal_or_largest(graph, true, true, None, stop, pl)
}

/// Returns the independence number α of the graph, that is, the size of
/// its largest independent vertex set.
pub fn independence_number(
    graph: impl RandomAccessGraph,
    stop: impl FnMut() -> bool,
    pl: &mut impl ProgressLog,
) -> Result<usize> {
    maximal_or_largest(graph, true, false, None, stop, pl)
}
