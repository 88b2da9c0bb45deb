use quickcheck::{Arbitrary, Gen};

/// A mutation to apply to both a balanced set and a reference `BTreeSet`.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(i8),
    Delete(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // bias toward inserts so that the trees grow past a handful of nodes
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Delete(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

macro_rules! property_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use balanced_collections::SearchTree;
                use quickcheck::quickcheck;
                use std::collections::BTreeSet;
                use super::Op;

                quickcheck! {
                    fn prop_in_order_is_sorted_and_distinct(keys: Vec<i16>) -> bool {
                        let set: $type_name<i16> = keys.iter().cloned().collect();
                        let expected: BTreeSet<i16> = keys.into_iter().collect();
                        set.iter().eq(expected.iter())
                    }

                    fn prop_search_matches_history(ops: Vec<Op>) -> bool {
                        let mut set = $type_name::new();
                        let mut expected = BTreeSet::new();
                        for op in ops {
                            let agrees = match op {
                                Op::Insert(key) => set.insert(key) == expected.insert(key),
                                Op::Delete(key) => set.delete(&key) == expected.take(&key),
                            };
                            if !agrees {
                                return false;
                            }
                        }
                        (i8::MIN..=i8::MAX).all(|key| set.search(&key) == expected.contains(&key))
                            && set.len() == expected.len()
                    }

                    fn prop_insert_present_key_is_noop(keys: Vec<u8>, index: usize) -> bool {
                        if keys.is_empty() {
                            return true;
                        }
                        let key = keys[index % keys.len()];
                        let mut set: $type_name<u8> = keys.into_iter().collect();
                        let before: Vec<u8> = set.iter().cloned().collect();
                        let height = set.height();

                        !SearchTree::insert(&mut set, key)
                            && set.iter().cloned().collect::<Vec<u8>>() == before
                            && set.height() == height
                    }

                    fn prop_delete_absent_key_is_noop(keys: Vec<u8>, absent: u8) -> bool {
                        let mut set: $type_name<u8> =
                            keys.into_iter().filter(|key| *key != absent).collect();
                        let before: Vec<u8> = set.iter().cloned().collect();
                        let height = set.height();

                        !SearchTree::delete(&mut set, &absent)
                            && set.iter().cloned().collect::<Vec<u8>>() == before
                            && set.height() == height
                    }

                    fn prop_delete_everything_empties(keys: Vec<i16>) -> bool {
                        let mut set: $type_name<i16> = keys.iter().cloned().collect();
                        for key in &keys {
                            set.delete(key);
                        }
                        set.is_empty() && set.height() == 0 && set.min().is_none()
                    }
                }
            }
        )*
    }
}

property_tests!(
    avl_tree: AvlSet,
    red_black_tree: RedBlackSet,
);
