//! Benchmark suite for comparing pricing strategies
//!
//! This benchmark compares the sync and async pricing strategies using the
//! divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Catalogs are generated in memory:
//! - small: the four-SKU catalog with a short basket
//! - large: 10,000 single-character and multi-character SKUs with a long basket

use checkout_engine::cli::StrategyType;
use checkout_engine::core::Basket;
use checkout_engine::strategy::{create_strategy, BatchConfig};
use checkout_engine::types::Sku;

fn main() {
    divan::main();
}

fn small_catalog() -> Vec<Sku> {
    vec![
        Sku::with_special("A", 50, 3, 130),
        Sku::with_special("B", 30, 2, 45),
        Sku::new("C", 20),
        Sku::new("D", 15),
    ]
}

fn large_catalog() -> Vec<Sku> {
    (0..10_000)
        .map(|i| {
            let identifier = if i < 26 {
                char::from(b'a' + i as u8).to_string()
            } else {
                format!("sku{}", i)
            };
            Sku::with_special(identifier, 10, 3, 25)
        })
        .collect()
}

fn large_basket() -> Basket {
    Basket::new("abcsku1sku42xyz".repeat(1_000))
}

/// Benchmark synchronous pricing with the small catalog
#[divan::bench]
fn sync_strategy_small() {
    let strategy = create_strategy(StrategyType::Sync, None);
    let catalog = small_catalog();
    let basket = Basket::new("AAAAABBBCCDAB");

    strategy
        .price(divan::black_box(&catalog), divan::black_box(&basket))
        .expect("Pricing failed");
}

/// Benchmark asynchronous pricing with the small catalog
#[divan::bench]
fn async_strategy_small() {
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));
    let catalog = small_catalog();
    let basket = Basket::new("AAAAABBBCCDAB");

    strategy
        .price(divan::black_box(&catalog), divan::black_box(&basket))
        .expect("Pricing failed");
}

/// Benchmark synchronous pricing with the large catalog
#[divan::bench]
fn sync_strategy_large() {
    let strategy = create_strategy(StrategyType::Sync, None);
    let catalog = large_catalog();
    let basket = large_basket();

    strategy
        .price(divan::black_box(&catalog), divan::black_box(&basket))
        .expect("Pricing failed");
}

/// Benchmark asynchronous pricing with the large catalog
#[divan::bench]
fn async_strategy_large() {
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::new(500, 4)));
    let catalog = large_catalog();
    let basket = large_basket();

    strategy
        .price(divan::black_box(&catalog), divan::black_box(&basket))
        .expect("Pricing failed");
}
