use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
            black_box(set.len())
        })
    });
}

fn bench_btreeset_search(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench btreeset search", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

macro_rules! bst_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use criterion::{black_box, Criterion};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;

                fn build() -> ($type_name<u32>, Vec<u32>) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut keys = Vec::new();
                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        set.insert(key);
                        keys.push(key);
                    }
                    (set, keys)
                }

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let (set, _) = build();
                        black_box(set.len())
                    }));
                }

                pub fn bench_search(c: &mut Criterion) {
                    let (set, keys) = build();
                    c.bench_function(&format!("bench {} search", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(set.search(key));
                        }
                    }));
                }

                pub fn bench_delete(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} delete", stringify!($module_name)), |b| b.iter(|| {
                        let (mut set, keys) = build();
                        for key in &keys {
                            black_box(set.delete(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_insert,
            bench_btreeset_search,
            $(
                $module_name::bench_insert,
                $module_name::bench_search,
                $module_name::bench_delete,
            )*
        );
    }
}

bst_set_benches!(
    avl_tree: AvlSet,
    red_black_tree: RedBlackSet,
);

criterion_main!(benches);
