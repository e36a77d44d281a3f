/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use webgraph::graphs::vec_graph::VecGraph;
use webgraph_cliques::NeighborLists;

fn symmetric(num_nodes: usize, edges: &[(usize, usize)]) -> VecGraph {
    let mut graph = VecGraph::new();
    if num_nodes > 0 {
        graph.add_node(num_nodes - 1);
    }
    graph.add_arcs(edges.iter().flat_map(|&(u, v)| [(u, v), (v, u)]));
    graph
}

fn random_edges(rng: &mut SmallRng, num_nodes: usize, p: f64) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for u in 0..num_nodes {
        for v in u + 1..num_nodes {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    edges
}

#[test]
fn test_ascending_invariant() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..50 {
        let num_nodes = rng.random_range(1..16);
        let extra = rng.random();
        let edges = random_edges(&mut rng, num_nodes, extra);
        let adj = NeighborLists::new(symmetric(num_nodes, &edges));
        assert_eq!(adj.num_nodes(), num_nodes);
        for v in 0..num_nodes {
            let neighbors = adj.neighbors(v);
            assert_eq!(neighbors.len(), adj.degree(v));
            for pair in neighbors.windows(2) {
                assert!(pair[0] < pair[1], "neighbors of {v} are not ascending");
            }
            assert!(!neighbors.contains(&v), "self-loop in the list of {v}");
        }
    }
    Ok(())
}

#[test]
fn test_directions_are_merged() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    // A path given with one arc per edge must yield the same adjacency as
    // the symmetric version (and log a warning while at it).
    let one_way = VecGraph::from_arcs([(0, 1), (1, 2), (2, 3)]);
    let both_ways = symmetric(4, &[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(NeighborLists::new(one_way), NeighborLists::new(both_ways));
    Ok(())
}

#[test]
fn test_self_loops_are_ignored() -> Result<()> {
    let graph = VecGraph::from_arcs([(0, 0), (0, 1), (1, 0), (1, 1)]);
    let adj = NeighborLists::new(graph);
    assert_eq!(adj.neighbors(0), &[1]);
    assert_eq!(adj.neighbors(1), &[0]);
    Ok(())
}

#[test]
fn test_are_neighbors() -> Result<()> {
    let adj = NeighborLists::new(symmetric(4, &[(0, 1), (1, 2), (2, 3)]));
    assert!(adj.are_neighbors(0, 1));
    assert!(adj.are_neighbors(1, 0));
    assert!(!adj.are_neighbors(0, 2));
    assert!(!adj.are_neighbors(0, 3));
    Ok(())
}

#[test]
fn test_complement_against_brute_force() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..50 {
        let num_nodes = rng.random_range(1..14);
        let extra = rng.random();
        let edges = random_edges(&mut rng, num_nodes, extra);
        let graph = symmetric(num_nodes, &edges);
        let adj = NeighborLists::new(&graph);
        let complement = NeighborLists::complement(&graph);

        for v in 0..num_nodes {
            let expected = (0..num_nodes)
                .filter(|&u| u != v && !adj.are_neighbors(u, v))
                .collect::<Vec<_>>();
            assert_eq!(complement.neighbors(v), expected.as_slice());
        }
    }
    Ok(())
}

#[test]
fn test_complement_of_empty_and_complete() -> Result<()> {
    let empty = symmetric(4, &[]);
    let complement = NeighborLists::complement(&empty);
    for v in 0..4 {
        assert_eq!(complement.degree(v), 3);
    }

    let mut edges = Vec::new();
    for u in 0..4 {
        for v in u + 1..4 {
            edges.push((u, v));
        }
    }
    let complete = symmetric(4, &edges);
    let complement = NeighborLists::complement(&complete);
    for v in 0..4 {
        assert_eq!(complement.degree(v), 0);
    }
    Ok(())
}
