use ordered_trees::Error;

const NUM_OF_OPERATIONS: usize = 100_000;
const KEY_SPACE: u32 = 1_000;

macro_rules! bst_set_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use ordered_trees::$module_name::$type_name;
                use rand::Rng;
                use super::{Error, KEY_SPACE, NUM_OF_OPERATIONS};

                #[test]
                fn int_test_set() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_SPACE);

                        if rng.gen::<bool>() {
                            set.insert(key);
                            let index = match expected.binary_search(&key) {
                                Ok(index) | Err(index) => index,
                            };
                            expected.insert(index, key);
                        } else {
                            match expected.binary_search(&key) {
                                Ok(index) => {
                                    expected.remove(index);
                                    assert_eq!(set.remove(&key), Ok(key));
                                },
                                Err(_) => assert_eq!(set.remove(&key), Err(Error::NotFound)),
                            }
                        }

                        assert_eq!(set.len(), expected.len());
                        assert_eq!(set.contains(&key), expected.binary_search(&key).is_ok());
                    }

                    assert_eq!(
                        set.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                    assert_eq!(set.min().ok(), expected.first());
                    assert_eq!(set.max().ok(), expected.last());

                    for key in &expected {
                        assert_eq!(set.get(key), Some(key));
                    }
                    assert_eq!(set.into_iter().collect::<Vec<u32>>(), expected);
                }

                #[test]
                fn int_test_set_drain() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS / 10 {
                        let key = rng.next_u32();
                        set.insert(key);
                        expected.push(key);
                    }

                    rng.shuffle(&mut expected);
                    while let Some(key) = expected.pop() {
                        assert_eq!(set.remove(&key), Ok(key));
                        assert_eq!(set.len(), expected.len());
                    }
                    assert!(set.is_empty());
                    assert_eq!(set.min(), Err(Error::EmptyTree));
                    assert_eq!(set.max(), Err(Error::EmptyTree));
                }

                #[test]
                fn int_test_set_sorted_insertions() {
                    let mut set = $type_name::new();
                    set.extend(0..NUM_OF_OPERATIONS as u32 / 10);
                    assert_eq!(set.len(), NUM_OF_OPERATIONS / 10);
                    assert!(set.iter().zip(0..).all(|(key, index)| *key == index));

                    set.clear();
                    assert!(set.is_empty());
                    assert_eq!(set.iter().next(), None);
                }

                #[test]
                fn int_test_set_custom_order() {
                    let mut set = $type_name::with_cmp(|l: &u32, r: &u32| r.cmp(l));
                    for key in &[5, 3, 7, 1, 4] {
                        set.insert(*key);
                    }
                    assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&7, &5, &4, &3, &1]);
                    assert_eq!(set.min(), Ok(&7));
                    assert_eq!(set.max(), Ok(&1));
                }
            }
        )*
    }
}

bst_set_tests!(
    binary_search_tree: BinarySearchTree,
    red_black_tree: RedBlackTree,
);
