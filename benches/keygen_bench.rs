use criterion::{criterion_group, criterion_main, Criterion};
use execution_keeper::crypto::{ClassicHasher, FipsHasher};
use execution_keeper::keeper::{Context, Keeper};
use execution_keeper::keygen::IdGenerator;
use execution_keeper::store::MemoryStore;
use execution_keeper::test_utils::{gen_execution, test_sender};

fn keygen_benchmarks(c: &mut Criterion) {
    let exec = gen_execution(test_sender(), 100);

    c.bench_function("key_gen_blake3", |b| {
        let generator = IdGenerator::new(ClassicHasher);
        b.iter(|| generator.key_gen(&exec))
    });

    c.bench_function("key_gen_sha3", |b| {
        let generator = IdGenerator::new(FipsHasher);
        b.iter(|| generator.key_gen(&exec))
    });
}

fn keeper_benchmarks(c: &mut Criterion) {
    let exec = gen_execution(test_sender(), 100);

    c.bench_function("set_then_get", |b| {
        let mut store = MemoryStore::new();
        let keeper = Keeper::new();
        b.iter(|| {
            let mut ctx = Context::new(&mut store, 100);
            keeper.set_execution(&mut ctx, &exec).expect("set_execution failed");
            keeper.get_execution(&ctx, &exec.id)
        })
    });
}

criterion_group!(benches, keygen_benchmarks, keeper_benchmarks);
criterion_main!(benches);
