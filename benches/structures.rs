use cesium_structures::{
    config::SkipListConfig,
    AVLTree,
    BinarySearchTree,
    Graph,
    PriorityQueue,
    SearchTree,
    SkipList,
};
use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BenchmarkId,
    Criterion,
};
use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_keys(n: usize) -> Vec<i32> {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.gen()).collect()
}

pub fn avl_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("AVLTree::insert()");
    for size in SIZES {
        let keys = random_keys(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = AVLTree::new();
                for &key in keys {
                    tree.insert(key);
                }
                tree
            })
        });
    }
    group.finish();
}

pub fn tree_search(c: &mut Criterion) {
    let keys = random_keys(10_000);
    let mut avl = AVLTree::new();
    let mut bst = BinarySearchTree::new();
    for &key in &keys {
        avl.insert(key);
        bst.insert(key);
    }

    let mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("AVLTree::exists()", |b| {
        b.iter(|| avl.exists(black_box(keys[rng.gen_range(0..keys.len())])))
    });
    c.bench_function("BinarySearchTree::exists()", |b| {
        b.iter(|| bst.exists(black_box(keys[rng.gen_range(0..keys.len())])))
    });
}

pub fn skiplist_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList::insert()");
    for size in SIZES {
        let keys = random_keys(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let config = SkipListConfig {
                    seed: Some(7),
                    ..SkipListConfig::default()
                };
                let mut list = match SkipList::with_config(config) {
                    | Ok(list) => list,
                    | Err(e) => panic!("invalid skip list config: {}", e),
                };
                for &key in keys {
                    list.insert(key);
                }
                list
            })
        });
    }
    group.finish();
}

pub fn skiplist_search(c: &mut Criterion) {
    let keys = random_keys(10_000);
    let mut list = SkipList::with_seed(7).unwrap();
    for &key in &keys {
        list.insert(key);
    }

    let mut rng = SmallRng::seed_from_u64(2);
    c.bench_function("SkipList::contains()", |b| {
        b.iter(|| list.contains(black_box(keys[rng.gen_range(0..keys.len())])))
    });
}

pub fn graph_distance(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut graph = Graph::new(false);
    for v in 0..1_000 {
        graph.create_vertex(v);
    }
    for _ in 0..4_000 {
        graph
            .add_edge(rng.gen_range(0..1_000), rng.gen_range(0..1_000))
            .unwrap();
    }

    c.bench_function("Graph::distance()", |b| {
        b.iter(|| graph.distance(black_box(rng.gen_range(0..1_000)), black_box(rng.gen_range(0..1_000))))
    });
}

pub fn heap_sort(c: &mut Criterion) {
    let keys = random_keys(10_000);
    c.bench_function("PriorityQueue::heap_sort()", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for &key in &keys {
                queue.insert(key).unwrap();
            }
            queue.heap_sort()
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets =
    avl_insert,
    tree_search,
    skiplist_insert,
    skiplist_search,
    graph_distance,
    heap_sort,
);
criterion_main!(benches);
