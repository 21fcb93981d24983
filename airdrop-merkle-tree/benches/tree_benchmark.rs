use airdrop_merkle_tree::{AirdropMerkleTree, Entry, hash_entry, verify};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn entries(count: u64) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let mut address = [0u8; 20];
            address[12..].copy_from_slice(&i.to_be_bytes());
            Entry::new(address, i * 1_000 + 1)
        })
        .collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("airdrop tree build");
        for size in [1_000u64, 10_000, 100_000] {
            let input = entries(size);
            group.bench_with_input(BenchmarkId::new("entries", size), &input, |b, input| {
                b.iter(|| AirdropMerkleTree::build(input).expect("build"));
            });
        }
    }

    c.bench_function("airdrop tree proof", |b| {
        let tree = AirdropMerkleTree::build(&entries(100_000)).expect("build");
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 7_919) % tree.leaf_count();
            tree.proof(index).expect("proof")
        });
    });

    c.bench_function("airdrop proof verify", |b| {
        let input = entries(100_000);
        let tree = AirdropMerkleTree::build(&input).expect("build");
        let root = tree.root();
        let leaf = hash_entry(&input[4_242]).expect("leaf");
        let proof = tree.proof(4_242).expect("proof");
        b.iter(|| verify(&leaf, proof.siblings(), &root));
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
