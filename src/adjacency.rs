/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use log::warn;
use webgraph::traits::RandomAccessGraph;

/// Owned per-vertex neighbor lists in strictly ascending order.
///
/// The enumeration engines interpret their input graph as undirected, and
/// they need, for every vertex, the list of its neighbors sorted in
/// ascending order without duplicates or self-loops; ascending order is a
/// contract the engines rely on (e.g., to truncate neighbor scans at the
/// first neighbor beyond the current recursion level, and to binary-search
/// for adjacency). This structure materializes such lists once per
/// enumeration from any [`RandomAccessGraph`], merging arc directions:
/// `u` and `v` are neighbors if the graph contains the arc (`u`, `v`), the
/// arc (`v`, `u`), or both.
///
/// If some arc has no matching reverse arc, the input was effectively
/// directed; directions are ignored, and a warning is logged once per
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborLists {
    neighbors: Box<[Box<[usize]>]>,
}

impl NeighborLists {
    /// Builds the merged-direction adjacency of `graph`.
    ///
    /// Self-loops and duplicate arcs are discarded.
    pub fn new(graph: impl RandomAccessGraph) -> Self {
        let num_nodes = graph.num_nodes();
        let mut lists: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];

        for node in 0..num_nodes {
            for succ in graph.successors(node) {
                if succ != node {
                    lists[node].push(succ);
                }
            }
            lists[node].sort_unstable();
            lists[node].dedup();
        }

        // Add the reverse of every arc; the forward lengths must be
        // snapshotted first, as the lists grow while we scan them.
        let forward_len = lists.iter().map(Vec::len).collect::<Vec<_>>();
        let num_arcs = forward_len.iter().sum::<usize>();
        for node in 0..num_nodes {
            for i in 0..forward_len[node] {
                let succ = lists[node][i];
                lists[succ].push(node);
            }
        }
        let mut num_merged = 0;
        for list in lists.iter_mut() {
            list.sort_unstable();
            list.dedup();
            num_merged += list.len();
        }

        // A symmetric graph contributes every edge to both of its
        // endpoints' lists, so the merge adds no entry beyond the distinct
        // arcs; a strict increase means some arc had no reverse.
        if num_arcs < num_merged {
            warn!("arc directions are ignored: the graph is not symmetric");
        }

        Self {
            neighbors: lists.into_iter().map(Vec::into_boxed_slice).collect(),
        }
    }

    /// Builds the adjacency of the edge-complement of `graph`.
    ///
    /// For every vertex `v` the resulting list is the ascending enumeration
    /// of the vertices that are neither `v` itself nor neighbors of `v` in
    /// the merged-direction adjacency.
    pub fn complement(graph: impl RandomAccessGraph) -> Self {
        let merged = Self::new(graph);
        let num_nodes = merged.num_nodes();
        let mut lists = Vec::with_capacity(num_nodes);

        for v in 0..num_nodes {
            let mut non_neighbors =
                Vec::with_capacity((num_nodes - 1) - merged.degree(v));
            let mut neighbors = merged.neighbors(v).iter().copied().peekable();
            for u in 0..num_nodes {
                if u == v {
                    continue;
                }
                match neighbors.peek() {
                    Some(&w) if w == u => {
                        neighbors.next();
                    }
                    _ => non_neighbors.push(u),
                }
            }
            lists.push(non_neighbors.into_boxed_slice());
        }

        Self {
            neighbors: lists.into(),
        }
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the neighbors of `node`, in strictly ascending order.
    #[inline(always)]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.neighbors[node]
    }

    /// Returns the degree of `node`.
    #[inline(always)]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors[node].len()
    }

    /// Returns whether `u` and `v` are neighbors.
    pub fn are_neighbors(&self, u: usize, v: usize) -> bool {
        self.neighbors[u].binary_search(&v).is_ok()
    }
}
