use criterion::{criterion_group, criterion_main, Criterion};
use fuelroute_lib::{plan_delivery, Cost, DeliveryRequest, Network, NodeId, ShortestPaths};
use once_cell::sync::Lazy;
use std::hint::black_box;

const SIDE: usize = 12;

fn grid_edges() -> Vec<(NodeId, NodeId, Cost)> {
    let mut edges = Vec::new();
    for row in 0..SIDE {
        for col in 0..SIDE {
            let node = row * SIDE + col;
            let weight = ((row * 7 + col * 3) % 5 + 1) as Cost;
            if col + 1 < SIDE {
                edges.push((node, node + 1, weight));
            }
            if row + 1 < SIDE {
                edges.push((node, node + SIDE, weight + 1));
            }
        }
    }
    edges
}

static GRID: Lazy<Network> = Lazy::new(|| {
    let stations = [0, SIDE - 1, SIDE * SIDE / 2, SIDE * SIDE - 1];
    Network::new(SIDE * SIDE, &grid_edges(), &stations).expect("grid is valid")
});
static PATHS: Lazy<ShortestPaths> = Lazy::new(|| ShortestPaths::compute(&GRID));
static REQUEST: Lazy<DeliveryRequest> = Lazy::new(|| {
    let hubs = (0..SIDE).map(|i| i * SIDE + i / 2).collect();
    let houses = (0..SIDE).map(|i| (SIDE - 1 - i) * SIDE + i).collect();
    DeliveryRequest::new(hubs, houses, 1_000)
});

fn benchmark_shortest_paths(c: &mut Criterion) {
    let network = &*GRID;

    c.bench_function("floyd_warshall_grid_144", |b| {
        b.iter(|| {
            let paths = ShortestPaths::compute(black_box(network));
            black_box(paths.distance(0, SIDE * SIDE - 1))
        });
    });

    c.bench_function("plan_delivery_grid_144", |b| {
        let paths = &*PATHS;
        let request = &*REQUEST;
        b.iter(|| {
            let plan = plan_delivery(network, paths, request).expect("route exists");
            black_box(plan.len())
        });
    });
}

criterion_group!(benches, benchmark_shortest_paths);
criterion_main!(benches);
