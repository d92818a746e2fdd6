use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use samyama_element::graph::{ElementId, PropertyId, Vertex, VertexKind, VertexSpace};
use std::sync::Arc;
use std::thread;

/// Benchmark property insertion on a single element
fn bench_property_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("property_insertion");

    for size in [4u32, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let v = Vertex::vertex(ElementId::new(1));
                for i in 0..size {
                    let _ = v.try_add_property(PropertyId::new(i), i as i64);
                }
            });
        });
    }
    group.finish();
}

/// Benchmark uncontended lookups against property count
fn bench_property_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("property_lookup");

    for size in [4u32, 16, 64].iter() {
        let v = Vertex::vertex(ElementId::new(1));
        for i in 0..*size {
            let _ = v.try_add_property(PropertyId::new(i), i as i64);
        }
        let last = PropertyId::new(size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| v.try_get_property::<i64>(last));
        });
    }
    group.finish();
}

/// Benchmark full enumeration
fn bench_enumeration(c: &mut Criterion) {
    let v = Vertex::vertex(ElementId::new(1));
    for i in 0..32u32 {
        let _ = v.try_add_property(PropertyId::new(i), format!("value{}", i));
    }

    c.bench_function("enumerate_32", |b| {
        b.iter(|| v.get_all_properties().map(|props| props.count()));
    });
}

/// Benchmark writers retrying on collision against one shared element
fn bench_contended_writes(c: &mut Criterion) {
    let space = VertexSpace::new();
    let v = space.create(VertexKind, Vec::new());

    c.bench_function("contended_writes_4x100", |b| {
        b.iter(|| {
            thread::scope(|s| {
                for w in 0..4u32 {
                    let v = Arc::clone(&v);
                    s.spawn(move || {
                        for i in 0..100u32 {
                            let id = PropertyId::new(w * 100 + i);
                            while v.try_add_property(id, i as i64).is_err() {
                                std::hint::spin_loop();
                            }
                        }
                    });
                }
            });
        });
    });
}

criterion_group!(
    benches,
    bench_property_insertion,
    bench_property_lookup,
    bench_enumeration,
    bench_contended_writes
);
criterion_main!(benches);
