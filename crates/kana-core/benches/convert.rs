use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kana_core::codec::Utf16;
use kana_core::engine::{convert, convert_to_vec};
use kana_core::{ConversionRequest, ConvertTarget};

const SAMPLE: &str = "吾輩は😺猫である。名前はまだ無い。チタタプ　トテトテＦｏｏｏｏ！！！１１！ﾌｼﾞｻﾝｺﾎﾟｫ";

fn sample_utf16(repeat: usize) -> Vec<u16> {
    SAMPLE.repeat(repeat).encode_utf16().collect()
}

fn bench_steps(c: &mut Criterion) {
    let input = sample_utf16(16);
    let requests = [
        ("narrow", ConversionRequest::new().narrow(ConvertTarget::ALL)),
        ("wide", ConversionRequest::new().wide(ConvertTarget::ALL)),
        ("katakana", ConversionRequest::new().katakana()),
        ("upper", ConversionRequest::new().upper_case()),
        (
            "katakana_narrow_ascii",
            ConversionRequest::new()
                .katakana()
                .narrow(ConvertTarget::NUMBER | ConvertTarget::SYMBOL | ConvertTarget::ALPHABET),
        ),
    ];

    let mut group = c.benchmark_group("convert_to_vec");
    for (name, req) in &requests {
        group.bench_with_input(BenchmarkId::from_parameter(name), req, |b, req| {
            b.iter(|| convert_to_vec::<Utf16>(&input, req))
        });
    }
    group.finish();
}

fn bench_fixed_buffer(c: &mut Criterion) {
    let req = ConversionRequest::new().narrow(ConvertTarget::ALL);
    let mut group = c.benchmark_group("convert_fixed_buffer");
    for repeat in [1, 16, 256] {
        let input = sample_utf16(repeat);
        let mut out = vec![0u16; input.len() * 2 + 1];
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &input, |b, input| {
            b.iter(|| convert::<Utf16>(input, &req, &mut out))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_steps, bench_fixed_buffer);
criterion_main!(benches);
