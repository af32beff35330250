//! Benchmarks for the connectivity engine
//!
//! Measures performance of:
//! - Growing a network one hub at a time
//! - Placement checks against a populated network
//! - Hub removal that keeps the network intact
//! - Hub removal that splits the network

use blocknet::connectivity::analyze;
use blocknet::{DirectionSet, GridCoord, Network};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

/// A straight line of `len` hubs along x.
fn hub_line(len: i64) -> Network {
    let mut network = Network::new();
    for x in 0..len {
        network
            .add_networking_block(GridCoord::new(x, 0, 0), DirectionSet::ALL)
            .expect("line hub links to its predecessor");
    }
    network
}

/// A `side` × `side` sheet of hubs in the xz plane.
fn hub_sheet(side: i64) -> Network {
    let mut network = Network::new();
    for x in 0..side {
        for z in 0..side {
            network
                .add_networking_block(GridCoord::new(x, 0, z), DirectionSet::ALL)
                .expect("sheet hub links to a placed neighbor");
        }
    }
    network
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");

    for &len in &[16i64, 64, 256] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("line", len), &len, |b, &n| {
            b.iter(|| hub_line(black_box(n)))
        });
    }
    group.finish();
}

fn bench_can_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_add_block");

    for &side in &[4i64, 16, 32] {
        let network = hub_sheet(side);
        group.bench_with_input(BenchmarkId::new("sheet", side), &network, |b, net| {
            b.iter(|| net.can_add_block(black_box(GridCoord::new(side / 2, 1, side / 2)), DirectionSet::ALL))
        });
    }
    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_networking_block");

    for &side in &[4i64, 16, 32] {
        let sheet = hub_sheet(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("intact_sheet", side), &sheet, |b, net| {
            b.iter_batched(
                || net.clone(),
                |mut n| n.remove_networking_block(GridCoord::new(side / 2, 0, side / 2)),
                BatchSize::SmallInput,
            )
        });
    }

    for &len in &[16i64, 64, 256] {
        let line = hub_line(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("split_line", len), &line, |b, net| {
            b.iter_batched(
                || net.clone(),
                |mut n| n.remove_networking_block(GridCoord::new(len / 2, 0, 0)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for &side in &[4i64, 16, 32] {
        let sheet = hub_sheet(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("sheet", side), &sheet, |b, net| {
            b.iter(|| analyze(black_box(net.registry())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_growth, bench_can_add, bench_removal, bench_analyze);

criterion_main!(benches);
