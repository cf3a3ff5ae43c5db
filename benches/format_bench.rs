use clmm_price_format::{
    FormatSpec, U24, U160, U256, fee_to_percent_string, format, price_to_decimal_string,
    tick_to_decimal_string,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_decimal_point", |b| {
        b.iter(|| {
            let spec = FormatSpec::new(6, 5, 5).with_decimal_point(2);
            format(black_box(spec), black_box(U256::from(12_345u32)))
        })
    });
}

fn bench_price(c: &mut Criterion) {
    let sqrt_ratio_x96 = U160::from(83290069058676223003182343270u128);
    c.bench_function("price_to_decimal_string", |b| {
        b.iter(|| price_to_decimal_string(black_box(sqrt_ratio_x96), 18, 6))
    });
    c.bench_function("tick_to_decimal_string_small_price", |b| {
        b.iter(|| tick_to_decimal_string(black_box(-500_000), 60, 18, 18, false))
    });
}

fn bench_fee(c: &mut Criterion) {
    c.bench_function("fee_to_percent_string", |b| {
        b.iter(|| fee_to_percent_string(black_box(U24::from(3000u32))))
    });
}

criterion_group!(format_benches, bench_format, bench_price, bench_fee);
criterion_main!(format_benches);
