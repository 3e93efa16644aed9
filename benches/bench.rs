// Criterion benchmarks for the scoring and ranking pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotpepper_mcp::core::ranking::rank_shops;
use hotpepper_mcp::core::scoring::score_shop;
use hotpepper_mcp::models::{Genre, Shop, ShopUrls};

fn create_shop(id: usize) -> Shop {
    Shop {
        name: format!("Shop {}", id),
        address: format!("{}-1-1 Kabukicho, Shinjuku-ku, Tokyo", id % 30),
        access: "3 min walk from Shinjuku station".to_string(),
        genre: Genre {
            name: "居酒屋".to_string(),
        },
        capacity: if id % 3 == 0 { Some(20 + (id % 80) as u32) } else { None },
        free_drink: if id % 2 == 0 { Some("あり".to_string()) } else { None },
        private_room: if id % 5 == 0 { Some("あり".to_string()) } else { None },
        wifi: if id % 4 == 0 { Some("あり".to_string()) } else { None },
        card: if id % 7 == 0 { Some("利用可".to_string()) } else { None },
        urls: ShopUrls {
            pc: format!("https://www.hotpepper.jp/str{:08}/", id),
        },
        ..Shop::default()
    }
}

fn bench_score_shop(c: &mut Criterion) {
    let shop = create_shop(0);

    c.bench_function("score_shop", |b| {
        b.iter(|| score_shop(black_box(&shop), black_box(Some(8))));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");

    for pool_size in [10usize, 50, 100, 500, 1000].iter() {
        let shops: Vec<Shop> = (0..*pool_size).map(create_shop).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(pool_size),
            pool_size,
            |b, _| {
                b.iter(|| rank_shops(black_box(shops.clone()), 10, Some(8)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score_shop, bench_ranking);
criterion_main!(benches);
