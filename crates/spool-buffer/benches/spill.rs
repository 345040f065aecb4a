use criterion::{Criterion, criterion_group, criterion_main};

use spool_buffer::{SpillBuffer, SpoolOptions};

fn bench_append(c: &mut Criterion) {
    let data = vec![0xabu8; 64 * 1024];

    c.bench_function("append_1mib_memory_tier", |b| {
        b.iter(|| {
            let mut buffer = SpillBuffer::with_defaults();
            for _ in 0..16 {
                buffer.append(&data).unwrap();
            }
            buffer.len()
        })
    });

    c.bench_function("append_1mib_disk_tier", |b| {
        b.iter(|| {
            let mut buffer = SpillBuffer::new(SpoolOptions::new().max_buffer(0));
            for _ in 0..16 {
                buffer.append(&data).unwrap();
            }
            buffer.len()
        })
    });
}

criterion_group!(benches, bench_append);
criterion_main!(benches);
