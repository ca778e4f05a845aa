use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming::ecc::{construct_code, inject_error, Gf2Vector};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for m in [3, 5, 8] {
        let code = construct_code(m).unwrap();
        let word = Gf2Vector::random(code.data_bits(), &mut rng);
        let codeword = code.encode(&word).unwrap();
        let received = inject_error(&codeword, code.total_bits() / 2).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", m), &word, |b, word| {
            b.iter(|| code.encode(black_box(word)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", m), &received, |b, received| {
            b.iter(|| code.decode(black_box(received)).unwrap())
        });
    }

    let data = vec![0xA5u8; 4096];
    let code = construct_code(4).unwrap();
    group.bench_function("encode_bytes_4k", |b| {
        b.iter(|| code.encode_bytes(black_box(&data)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_encode_decode);
criterion_main!(benches);
