use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_category::cards::{parse_cards, Card};
use poker_category::deck::Deck;
use poker_category::evaluator::evaluate;

fn seven(hand: &str) -> [Card; 7] {
    parse_cards(hand).unwrap().try_into().unwrap()
}

fn bench_evaluate(c: &mut Criterion) {
    let cases = [
        ("high_card", seven("Ah Kd 7s 5c 2d 9h Jc")),
        ("royal_flush", seven("Ah Kh Qh Jh Th 2c 3d")),
        ("steel_wheel", seven("As 2s 3s 4s 5s 9d Kc")),
        ("straight_and_flush_apart", seven("Ac 9c 8c 7c 6c 6d 5d")),
    ];

    let mut g = c.benchmark_group("evaluate");
    for (name, hand) in cases.iter() {
        g.bench_with_input(BenchmarkId::new(*name, hand.len()), hand, |b, input| {
            b.iter(|| evaluate(black_box(input)))
        });
    }
    g.finish();
}

fn bench_dealt_hands(c: &mut Criterion) {
    let hands: Vec<[Card; 7]> = (0..1_000u64)
        .filter_map(|seed| Deck::seeded(seed).deal_seven())
        .collect();
    c.bench_function("evaluate_1000_dealt", |b| {
        b.iter(|| hands.iter().map(|h| evaluate(black_box(h))).max())
    });
}

criterion_group!(benches, bench_evaluate, bench_dealt_hands);
criterion_main!(benches);
