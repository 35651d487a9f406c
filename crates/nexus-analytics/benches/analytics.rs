use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_analytics::metrics::{PageRankConfig, betweenness_centrality, centrality_table, pagerank};
use nexus_analytics::{impact_sweep, simulate};
use nexus_core::{Dataset, Domain, Edge, Network, Node, NodeId};

/// Network sizes for the synthetic tiers.
const TIERS: [usize; 3] = [100, 400, 1_000];

/// Deterministic sparse graph: a ring plus two families of chords, about
/// three edges per node.
fn synthetic(n: usize) -> Network {
    let id = |i: usize| NodeId::try_from(i % n).unwrap_or_default();
    let nodes = (0..n)
        .map(|i| Node::new(id(i), format!("Inst{i}"), Domain::ALL[i % 5], 100.0))
        .collect();
    let edges = (0..n)
        .flat_map(|i| [id(i + 1), id(i + 7), id(i * 3 + 1)].map(|j| Edge(id(i), j)))
        .collect();
    Network::new(nodes, edges).unwrap_or_default()
}

fn bench_reference(c: &mut Criterion) {
    let ds = Dataset::reference();
    let config = PageRankConfig::default();
    let mut group = c.benchmark_group("reference");

    group.bench_function("centrality_table", |b| {
        b.iter(|| {
            let adj = ds.network.adjacency();
            black_box(centrality_table(&ds.network, &adj, &config))
        });
    });
    group.bench_function("simulate_remove_harvard", |b| {
        b.iter(|| black_box(simulate(&ds.network, Some(3), &config)));
    });
    group.bench_function("impact_sweep", |b| {
        b.iter(|| black_box(impact_sweep(&ds.network, &config)));
    });

    group.finish();
}

fn bench_tiers(c: &mut Criterion) {
    let config = PageRankConfig::default();
    let mut group = c.benchmark_group("synthetic");
    group.sample_size(20);

    for n in TIERS {
        let network = synthetic(n);
        let adj = network.adjacency();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("betweenness", n), &adj, |b, adj| {
            b.iter(|| black_box(betweenness_centrality(adj)));
        });
        group.bench_with_input(BenchmarkId::new("pagerank", n), &adj, |b, adj| {
            b.iter(|| black_box(pagerank(adj, &config)));
        });
        group.bench_with_input(BenchmarkId::new("simulate", n), &network, |b, network| {
            b.iter(|| black_box(simulate(network, Some(0), &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reference, bench_tiers);
criterion_main!(benches);
