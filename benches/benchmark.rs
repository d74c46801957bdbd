use criterion::{Criterion, criterion_group, criterion_main};
use phylopack::Converter;
use phylopack::model::PostorderTree;
use phylopack::topology::{ChunkSize, pack_topology};
use std::hint::black_box;

const CATERPILLAR_SIZES: &[(&str, usize)] = &[
    ("caterpillar-1k", 1_000),
    ("caterpillar-100k", 100_000),
];

/// Balanced parentheses of a caterpillar tree with `num_leaves` leaves,
/// together with the number of its nodes.
fn caterpillar_bits(num_leaves: usize) -> (Vec<u8>, usize) {
    let mut bits = Vec::with_capacity(4 * num_leaves);
    for _ in 1..num_leaves {
        bits.extend([1, 1, 0]);
    }
    bits.extend([1, 0]);
    bits.extend(std::iter::repeat_n(0, num_leaves - 1));
    (bits, 2 * num_leaves - 1)
}

fn caterpillar_tree(num_leaves: usize) -> PostorderTree {
    let (bits, num_nodes) = caterpillar_bits(num_leaves);
    let mut tree = PostorderTree::new(num_nodes).with_topology_bits(bits);
    for i in 0..num_nodes {
        tree.add_node(Some(format!("taxon_{i}")), Some(0.01 * i as f64));
    }
    tree
}

fn topology_packing(c: &mut Criterion) {
    for (name, num_leaves) in CATERPILLAR_SIZES {
        let (bits, _) = caterpillar_bits(*num_leaves);
        c.bench_function(&format!("pack/{name}"), |b| {
            b.iter(|| pack_topology(black_box(&bits), ChunkSize::default()).unwrap());
        });
    }
}

fn full_conversion(c: &mut Criterion) {
    for (name, num_leaves) in CATERPILLAR_SIZES {
        let tree = caterpillar_tree(*num_leaves);
        let converter = Converter::default();
        c.bench_function(&format!("convert/{name}"), |b| {
            b.iter(|| {
                let (mut lengths, mut labels, mut topology) =
                    (Vec::<u8>::new(), Vec::<u8>::new(), Vec::<u8>::new());
                converter
                    .convert(black_box(&tree), &mut lengths, &mut labels, &mut topology)
                    .unwrap();
            });
        });
    }
}

criterion_group!(regression, topology_packing);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = full_conversion
}
criterion_main!(regression, reporting);
