//! Sink overhead: single sinks, fan-out and the `Display` bridge.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tstreaming_core::{ArrayBuf, Displayed, Fixed, Null, Print, fmt};

fn bench_sinks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sinks");
    let line = ("temp=", fmt::<Fixed<16, 2>, _>(403u16), " C");

    group.bench_function("null", |b| {
        let mut null = Null;
        b.iter(|| null.print(black_box(&line)))
    });
    group.bench_function("vec", |b| {
        let mut out = Vec::with_capacity(64);
        b.iter(|| {
            out.clear();
            out.print(black_box(&line))
        })
    });
    group.bench_function("fanout_two", |b| {
        let (mut a, mut z) = (ArrayBuf::<64>::new(), ArrayBuf::<64>::new());
        b.iter(|| {
            a.clear();
            z.clear();
            a.and(&mut z).print(black_box(&line))
        })
    });
    group.bench_function("display_bridge", |b| {
        let mut null = Null;
        b.iter(|| null.print(&Displayed(black_box(25.1875f64))))
    });
    group.finish();
}

criterion_group!(benches, bench_sinks);
criterion_main!(benches);
