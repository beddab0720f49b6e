use campusroute_lib::{campus_graph, find_route, GraphModel, PathQuery};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

static CAMPUS: Lazy<GraphModel> = Lazy::new(campus_graph);
static GATE_TO_SQUARE: Lazy<PathQuery> = Lazy::new(|| PathQuery::new("A", "J"));
static GATE_TO_POWER_SYSTEMS: Lazy<PathQuery> = Lazy::new(|| PathQuery::new("A", "AM"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*CAMPUS;

    c.bench_function("campus_gate_to_square", |b| {
        let query = &*GATE_TO_SQUARE;
        b.iter(|| {
            let result = find_route(graph, query).expect("route exists");
            black_box(result.hop_count())
        });
    });

    c.bench_function("campus_gate_to_power_systems", |b| {
        let query = &*GATE_TO_POWER_SYSTEMS;
        b.iter(|| {
            let result = find_route(graph, query).expect("route exists");
            black_box(result.total_distance)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
