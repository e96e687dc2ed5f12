use citygrid_core::grid::GridConfig;
use citygrid_core::sql::write_script;
use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;

fn bench_emit(c: &mut Criterion) {
    let config = GridConfig::new(Point::new(0.0, 0.0), 200, 200, 50.0, 50.0);

    c.bench_function("emit_200x200", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(4 << 20);
            write_script(&mut buf, &config).unwrap();
            buf
        });
    });
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
