//! Criterion benchmarks for the undirected graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use undirected_graph::graph::{breadth_first, depth_first, has_cycle, shortest_path, Graph};
use undirected_graph::types::NodeId;

/// Build a random graph with `edges_per_node` edges from each vertex.
fn make_graph(node_count: usize, edges_per_node: usize) -> (Graph<u64>, Vec<NodeId>) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut graph = Graph::with_capacity(node_count);
    let ids: Vec<NodeId> = (0..node_count as u64).map(|v| graph.insert(v)).collect();

    for &source in &ids {
        for _ in 0..edges_per_node {
            let target = ids[rng.gen_range(0..ids.len())];
            if target != source {
                let _ = graph.add_edge(source, target);
            }
        }
    }

    (graph, ids)
}

fn bench_add_edge(c: &mut Criterion) {
    let (mut graph, ids) = make_graph(10_000, 3);
    let mut rng = StdRng::seed_from_u64(2);

    c.bench_function("add_edge_to_10k", |b| {
        b.iter(|| {
            let src = ids[rng.gen_range(0..ids.len())];
            let tgt = ids[rng.gen_range(0..ids.len())];
            let _ = graph.add_edge(src, tgt);
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let (graph, ids) = make_graph(10_000, 3);

    c.bench_function("remove_vertex_from_10k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| {
                let _ = g.remove_vertex(ids[5_000]);
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_dfs_100k(c: &mut Criterion) {
    let (graph, ids) = make_graph(100_000, 3);

    c.bench_function("dfs_100k", |b| {
        b.iter(|| {
            let _ = depth_first(&graph, ids[0]);
        })
    });
}

fn bench_bfs_100k(c: &mut Criterion) {
    let (graph, ids) = make_graph(100_000, 3);

    c.bench_function("bfs_100k", |b| {
        b.iter(|| {
            let _ = breadth_first(&graph, ids[0]);
        })
    });
}

fn bench_has_cycle_100k(c: &mut Criterion) {
    let (graph, _) = make_graph(100_000, 1);

    c.bench_function("has_cycle_100k", |b| {
        b.iter(|| {
            let _ = has_cycle(&graph);
        })
    });
}

fn bench_shortest_path_100k(c: &mut Criterion) {
    let (graph, ids) = make_graph(100_000, 3);

    c.bench_function("shortest_path_100k", |b| {
        b.iter(|| {
            let _ = shortest_path(&graph, ids[0], ids[99_999]);
        })
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_remove_vertex,
    bench_dfs_100k,
    bench_bfs_100k,
    bench_has_cycle_100k,
    bench_shortest_path_100k,
);
criterion_main!(benches);
