//! Reachability, levels and boundary behaviour of the four traversals.

use graph_sweep::engine::{
    bfs_distances, level_synchronous_bfs, level_synchronous_bfs_levels, sequential_bfs,
    sequential_bfs_order, sequential_dfs, sequential_dfs_order, unsynchronized_concurrent_dfs,
    WorkerPool,
};
use graph_sweep::graph::generate::{complete_graph, cycle_graph, path_graph, random_graph};
use graph_sweep::graph::Graph;
use graph_sweep::types::{NodeId, SweepError};

// ==================== Helpers ====================

fn diamond_tail() -> Graph {
    Graph::from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap()
}

fn pool() -> WorkerPool {
    WorkerPool::new(4).unwrap()
}

// ==================== Concrete scenarios ====================

#[test]
fn test_diamond_reaches_everything() {
    let g = diamond_tail();
    let expected: Vec<NodeId> = vec![0, 1, 2, 3];

    assert_eq!(sequential_dfs(&g, 0).unwrap().to_vec(), expected);
    assert_eq!(sequential_bfs(&g, 0).unwrap().to_vec(), expected);
    assert_eq!(level_synchronous_bfs(&g, 0, 4).unwrap().to_vec(), expected);

    let racy = unsynchronized_concurrent_dfs(&g, 0, &pool()).unwrap();
    assert!(racy.reached.contains(0));
    assert!(racy.reached.to_vec().iter().all(|n| expected.contains(n)));
}

#[test]
fn test_diamond_levels() {
    let g = diamond_tail();
    let levels = level_synchronous_bfs_levels(&g, 0, 2).unwrap();
    assert_eq!(levels.depth(), 3);
    assert_eq!(levels.sorted_level(0), vec![0]);
    assert_eq!(levels.sorted_level(1), vec![1, 2]);
    assert_eq!(levels.sorted_level(2), vec![3]);
}

#[test]
fn test_disconnected_start() {
    let g = Graph::from_edges(4, &[(0, 1)]).unwrap();
    assert_eq!(sequential_dfs(&g, 2).unwrap().to_vec(), vec![2]);
    assert_eq!(sequential_bfs(&g, 2).unwrap().to_vec(), vec![2]);
    assert_eq!(level_synchronous_bfs(&g, 2, 3).unwrap().to_vec(), vec![2]);
    let racy = unsynchronized_concurrent_dfs(&g, 2, &pool()).unwrap();
    assert_eq!(racy.reached.to_vec(), vec![2]);
    assert_eq!(racy.visits, 1);
}

#[test]
fn test_isolated_start_all_variants() {
    let g = Graph::from_edges(5, &[(0, 1), (1, 2), (3, 0)]).unwrap();
    assert_eq!(sequential_dfs(&g, 4).unwrap().to_vec(), vec![4]);
    assert_eq!(sequential_bfs(&g, 4).unwrap().to_vec(), vec![4]);
    assert_eq!(level_synchronous_bfs(&g, 4, 1).unwrap().to_vec(), vec![4]);
    assert_eq!(
        unsynchronized_concurrent_dfs(&g, 4, &pool())
            .unwrap()
            .reached
            .to_vec(),
        vec![4]
    );
}

// ==================== Boundary ====================

#[test]
fn test_start_out_of_range_all_variants() {
    let g = path_graph(3).unwrap();
    assert!(matches!(
        sequential_dfs(&g, 3),
        Err(SweepError::InvalidNode(3))
    ));
    assert!(matches!(
        sequential_bfs(&g, 3),
        Err(SweepError::InvalidNode(3))
    ));
    assert!(matches!(
        level_synchronous_bfs(&g, 100, 2),
        Err(SweepError::InvalidNode(100))
    ));
    assert!(matches!(
        unsynchronized_concurrent_dfs(&g, 3, &pool()),
        Err(SweepError::InvalidNode(3))
    ));
}

#[test]
fn test_negative_start_rejected_at_boundary() {
    let g = path_graph(3).unwrap();
    assert!(matches!(g.check_node(-1), Err(SweepError::InvalidNode(-1))));
    assert!(matches!(g.check_node(3), Err(SweepError::InvalidNode(3))));
    let start = g.check_node(2).unwrap();
    assert_eq!(sequential_dfs(&g, start).unwrap().len(), 3);
}

#[test]
fn test_empty_graph_has_no_valid_start() {
    let g = Graph::empty(0).unwrap();
    assert!(sequential_dfs(&g, 0).is_err());
    assert!(level_synchronous_bfs(&g, 0, 1).is_err());
}

#[test]
fn test_out_of_range_edge_list() {
    assert!(matches!(
        Graph::from_edges(2, &[(0, 2)]),
        Err(SweepError::OutOfRange { node: 2, .. })
    ));
}

// ==================== Agreement ====================

#[test]
fn test_exact_variants_agree_on_random_graphs() {
    for seed in 0..10 {
        let g = random_graph(120, 0.02, seed).unwrap();
        for start in [0, 17, 119] {
            let dfs = sequential_dfs(&g, start).unwrap();
            let bfs = sequential_bfs(&g, start).unwrap();
            let level = level_synchronous_bfs(&g, start, 4).unwrap();
            assert_eq!(dfs, bfs, "seed {} start {}", seed, start);
            assert_eq!(bfs, level, "seed {} start {}", seed, start);
        }
    }
}

#[test]
fn test_levels_match_shortest_paths() {
    for seed in 0..5 {
        let g = random_graph(80, 0.04, seed).unwrap();
        let distances = bfs_distances(&g, 0).unwrap();
        let levels = level_synchronous_bfs_levels(&g, 0, 3).unwrap();
        for (depth, level) in levels.iter().enumerate() {
            for &node in level {
                assert_eq!(distances[node as usize], Some(depth as u32));
            }
        }
        let reachable = distances.iter().filter(|d| d.is_some()).count();
        assert_eq!(levels.total(), reachable);
    }
}

#[test]
fn test_sequential_variants_are_idempotent() {
    let g = random_graph(60, 0.1, 11).unwrap();
    assert_eq!(
        sequential_dfs_order(&g, 5).unwrap(),
        sequential_dfs_order(&g, 5).unwrap()
    );
    assert_eq!(
        sequential_bfs_order(&g, 5).unwrap(),
        sequential_bfs_order(&g, 5).unwrap()
    );
}

#[test]
fn test_self_loops_and_duplicates() {
    let g = Graph::from_edges(3, &[(0, 0), (0, 1), (0, 1), (1, 1), (1, 2), (2, 1)]).unwrap();
    assert_eq!(sequential_dfs_order(&g, 0).unwrap(), vec![0, 1, 2]);
    assert_eq!(sequential_bfs_order(&g, 0).unwrap(), vec![0, 1, 2]);
    let levels = level_synchronous_bfs_levels(&g, 0, 2).unwrap();
    assert_eq!(levels.sizes(), vec![1, 1, 1]);
}

#[test]
fn test_cycle_from_middle() {
    let g = cycle_graph(7).unwrap();
    let levels = level_synchronous_bfs_levels(&g, 3, 2).unwrap();
    assert_eq!(levels.sizes(), vec![1, 2, 2, 2]);
}

#[test]
fn test_complete_graph_one_hop() {
    let g = complete_graph(10).unwrap();
    assert_eq!(sequential_bfs(&g, 9).unwrap().len(), 10);
    assert_eq!(sequential_dfs_order(&g, 0).unwrap(), (0..10).collect::<Vec<_>>());
}
