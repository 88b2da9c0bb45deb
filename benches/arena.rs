use balanced_collections::arena::{Arena, Handle};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NUM_OF_ALLOCATIONS: usize = 100;

struct Link {
    val: i32,
    parent: Option<Handle>,
}

fn bench_arena(c: &mut Criterion) {
    c.bench_function("bench arena", |b| {
        b.iter(|| {
            let mut arena = Arena::new();
            let mut curr = arena.allocate(Link { val: 0, parent: None });
            for _ in 0..NUM_OF_ALLOCATIONS {
                curr = arena.allocate(Link {
                    val: 0,
                    parent: Some(curr),
                });
            }
            while let Some(parent) = arena.free(curr).parent {
                curr = parent;
            }
            black_box(arena.len())
        })
    });
}

fn bench_arena_reuse(c: &mut Criterion) {
    let mut arena = Arena::new();
    c.bench_function("bench arena reuse", move |b| {
        b.iter(|| {
            let handles: Vec<Handle> = (0..NUM_OF_ALLOCATIONS as i32)
                .map(|val| arena.allocate(Link { val, parent: None }))
                .collect();
            let mut sum = 0;
            for handle in handles {
                sum += arena.free(handle).val;
            }
            black_box(sum)
        })
    });
}

fn bench_box(c: &mut Criterion) {
    c.bench_function("bench box", |b| {
        b.iter(|| {
            struct BoxedLink {
                val: i32,
                next: Option<Box<BoxedLink>>,
            }

            let mut curr = Box::new(BoxedLink { val: 0, next: None });
            for _ in 0..NUM_OF_ALLOCATIONS {
                curr = Box::new(BoxedLink {
                    val: 0,
                    next: Some(curr),
                });
            }
            black_box(curr.val + curr.next.map_or(0, |next| next.val))
        })
    });
}

criterion_group!(benches, bench_arena, bench_arena_reuse, bench_box);
criterion_main!(benches);
