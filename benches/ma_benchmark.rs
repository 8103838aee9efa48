use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arcana_ta::indicators::moving_averages::{
    calculate_ema, dema, esma, frama, hma, kama, rma, sma, tema, wma, DemaInput, DemaParams,
    EmaInput, EmaParams, EsmaInput, EsmaParams, FramaInput, FramaParams, HmaInput, HmaParams,
    KamaInput, KamaParams, RmaInput, RmaParams, SmaInput, SmaParams, TemaInput, TemaParams,
    WmaInput, WmaParams,
};
use arcana_ta::utilities::data_loader::read_candles_from_csv;

fn benchmark_moving_averages(c: &mut Criterion) {
    let candles = read_candles_from_csv("src/data/ohlcv_sample.csv")
        .expect("Failed to load benchmark candles");
    let close = &candles.close;

    c.bench_function("sma", |b| {
        let input = SmaInput::from_candles(&candles, "close", SmaParams { period: Some(9) });
        b.iter(|| sma(black_box(&input)))
    });

    c.bench_function("esma", |b| {
        let input = EsmaInput::from_slice(close, EsmaParams::default());
        b.iter(|| esma(black_box(&input)))
    });

    c.bench_function("ema", |b| {
        let input = EmaInput::new(close, EmaParams { period: Some(9) });
        b.iter(|| calculate_ema(black_box(&input)))
    });

    c.bench_function("wma", |b| {
        let input = WmaInput::from_candles(&candles, "close", WmaParams { period: Some(30) });
        b.iter(|| wma(black_box(&input)))
    });

    c.bench_function("hma", |b| {
        let input = HmaInput::from_candles(&candles, "close", HmaParams { period: Some(16) });
        b.iter(|| hma(black_box(&input)))
    });

    c.bench_function("rma", |b| {
        let input = RmaInput::from_candles(&candles, "close", RmaParams { period: Some(14) });
        b.iter(|| rma(black_box(&input)))
    });

    c.bench_function("dema", |b| {
        let input = DemaInput::from_candles(&candles, "close", DemaParams { period: Some(9) });
        b.iter(|| dema(black_box(&input)))
    });

    c.bench_function("tema", |b| {
        let input = TemaInput::from_candles(&candles, "close", TemaParams { period: Some(9) });
        b.iter(|| tema(black_box(&input)))
    });

    c.bench_function("kama", |b| {
        let input = KamaInput::from_candles(&candles, "close", KamaParams::default());
        b.iter(|| kama(black_box(&input)))
    });

    c.bench_function("frama", |b| {
        let input = FramaInput::from_candles(&candles, FramaParams { period: Some(1) });
        b.iter(|| frama(black_box(&input)))
    });
}

criterion_group!(benches, benchmark_moving_averages);
criterion_main!(benches);
