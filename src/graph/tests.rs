use similar_asserts::assert_eq;

use super::*;

fn triangle() -> Graph<usize> {
    graph! { 0 => [1, 2], 1 => [0, 2], 2 => [0, 1] }
}

fn path3() -> Graph<usize> {
    graph! { 0 => [1], 1 => [0, 2], 2 => [1] }
}

#[test]
fn counts() {
    assert_eq!(triangle().n_vertices(), 3);
    assert_eq!(triangle().n_edges(), 3);
    assert_eq!(path3().n_edges(), 2);
    assert_eq!(path3().degree(&1), Ok(2));

    let empty: Graph<usize> = Graph::new();
    assert_eq!(empty.n_vertices(), 0);
    assert_eq!(empty.n_edges(), 0);
}

#[test]
fn asymmetric_edge_count_truncates() {
    let lopsided: Graph<usize> = graph! { 0 => [1], 1 => [], 2 => [0, 1] };
    assert_eq!(lopsided.total_degree(), 3);
    assert_eq!(lopsided.n_edges(), 1);
}

#[test]
fn neighbors_of_unknown_vertex() {
    assert_eq!(triangle().neighbors(&0), Ok(&[1, 2][..]));
    assert_eq!(triangle().neighbors(&7), Err(GraphError::UnknownVertex(7)));
}

#[test]
fn vertices_keep_insertion_order() {
    let g: Graph<&str> = graph! { "c" => ["a"], "a" => ["c", "b"], "b" => ["a"] };
    assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    assert_eq!(g.position(&"b"), Ok(2));
}

#[test]
fn add_vertex_links_back() {
    let mut g = path3();
    g.add_vertex(3, [0, 2]).unwrap();

    assert_eq!(g.n_vertices(), 4);
    assert_eq!(g.n_vertices(), g.vertices().len());
    assert_eq!(g.neighbors(&3).unwrap(), &[0, 2]);
    assert_eq!(g.neighbors(&0).unwrap(), &[1, 3]);
    assert_eq!(g.neighbors(&2).unwrap(), &[1, 3]);
    assert_eq!(g.n_edges(), 4);
}

#[test]
fn add_vertex_with_unknown_neighbor_leaves_graph_untouched() {
    let mut g = path3();
    assert_eq!(
        g.add_vertex(3, [0, 9]),
        Err(GraphError::UnknownVertex(9))
    );
    assert_eq!(g.n_vertices(), 3);
    assert!(!g.contains(&3));
    assert_eq!(g.neighbors(&0).unwrap(), &[1]);
}

#[test]
fn add_vertex_self_loop() {
    let mut g: Graph<usize> = graph! { 0 => [] };
    g.add_vertex(1, [0, 1]).unwrap();
    assert_eq!(g.neighbors(&1).unwrap(), &[0, 1, 1]);
    assert_eq!(g.degree(&1), Ok(3));
}

#[test]
fn add_existing_vertex_keeps_count_in_sync() {
    let mut g = path3();
    g.add_vertex(2, [0]).unwrap();
    assert_eq!(g.n_vertices(), 3);
    assert_eq!(g.neighbors(&2).unwrap(), &[0]);
    assert_eq!(g.neighbors(&0).unwrap(), &[1, 2]);
}

#[test]
fn subgraph_is_induced() {
    let g = triangle();
    let sub = g.subgraph(&[2, 0]).unwrap();
    assert_eq!(sub.n_vertices(), 2);
    assert_eq!(sub.to_string(), "{2: [0], 0: [2]}");

    assert_eq!(g.subgraph(&[0, 5]).unwrap_err(), GraphError::UnknownVertex(5));
}

#[test]
fn subgraph_collapses_repeated_vertices() {
    let sub = path3().subgraph(&[1, 1, 2]).unwrap();
    assert_eq!(sub.n_vertices(), 2);
    assert_eq!(sub.vertices().len(), 2);
}

#[test]
fn relabel_follows_vertex_order() {
    let g: Graph<&str> = graph! { "x" => ["z"], "z" => ["x", "y"], "y" => ["z"] };
    let relabeled = g.relabeled().unwrap();
    insta::assert_snapshot!(relabeled, @"{0: [1], 1: [0, 2], 2: [1]}");

    let mut sub = triangle().subgraph(&[2, 1]).unwrap();
    let chained = sub.relabel().unwrap();
    assert_eq!(chained.equals(&graph! { 0 => [1], 1 => [0] }), Ok(true));
}

#[test]
fn relabel_twice_is_stable() {
    let mut once = triangle().subgraph(&[1, 2]).unwrap();
    once.relabel().unwrap();
    let mut twice = once.clone();
    twice.relabel().unwrap().relabel().unwrap();
    assert_eq!(once.equals(&twice), Ok(true));
    assert_eq!(twice.equals(&once), Ok(true));
}

#[test]
fn relabel_rejects_dangling_neighbor() {
    let dangling: Graph<usize> = graph! { 0 => [4] };
    assert_eq!(dangling.relabeled().unwrap_err(), GraphError::UnknownVertex(4));
}

#[test]
fn equality_uses_neighbor_sets() {
    let reordered: Graph<usize> = graph! { 2 => [1, 0], 0 => [2, 1], 1 => [2, 0] };
    assert_eq!(triangle().equals(&triangle()), Ok(true));
    assert_eq!(triangle().equals(&reordered), Ok(true));
    assert_eq!(triangle().equals(&path3()), Ok(false));

    let doubled: Graph<usize> = graph! { 0 => [1, 1], 1 => [0, 0] };
    let single: Graph<usize> = graph! { 0 => [1], 1 => [0] };
    assert_eq!(doubled.equals(&single), Ok(true));
}

#[test]
fn equality_requires_shared_labels() {
    let letters: Graph<usize> = graph! { 10 => [11, 12], 11 => [10, 12], 12 => [10, 11] };
    assert_eq!(
        triangle().equals(&letters),
        Err(GraphError::UnknownVertex(0))
    );

    let larger: Graph<usize> = graph! { 10 => [11], 11 => [10], 12 => [], 13 => [] };
    assert_eq!(triangle().equals(&larger), Ok(false));
}

#[test]
fn equality_only_walks_the_left_graph() {
    let edge: Graph<usize> = graph! { 0 => [1], 1 => [0] };
    let stray: Graph<usize> = graph! { 0 => [1], 7 => [] };
    assert_eq!(edge.equals(&stray), Err(GraphError::UnknownVertex(1)));
    assert_eq!(stray.equals(&edge), Err(GraphError::UnknownVertex(7)));

    // a mismatch found before the missing label wins
    let mismatch: Graph<usize> = graph! { 0 => [5], 8 => [], 9 => [] };
    assert_eq!(triangle().equals(&mismatch), Ok(false));
}

#[test]
fn clone_owns_storage() {
    let original = path3();
    let mut copy = original.clone();
    copy.add_vertex(3, [2]).unwrap();
    assert_eq!(original.n_vertices(), 3);
    assert_eq!(original.neighbors(&2).unwrap(), &[1]);
    assert_eq!(copy.neighbors(&2).unwrap(), &[1, 3]);
}

#[test]
fn display() {
    insta::assert_snapshot!(triangle(), @"{0: [1, 2], 1: [0, 2], 2: [0, 1]}");
    let words: Graph<&str> = graph! { "a" => ["b"], "b" => ["a"] };
    insta::assert_snapshot!(words, @r#"{"a": ["b"], "b": ["a"]}"#);
    insta::assert_snapshot!(Graph::<usize>::new(), @"{}");
}

#[test]
fn collect_from_pairs() {
    let g: Graph<char> = vec![('a', vec!['b']), ('b', vec!['a'])]
        .into_iter()
        .collect();
    assert_eq!(g.n_vertices(), 2);
    assert_eq!(g.n_edges(), 1);
}
