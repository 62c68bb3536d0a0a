use criterion::{criterion_group, criterion_main, Criterion};
use hound::{SampleFormat, WavSpec};
use stegamux_core::media::audio::{embed_message, AudioMethod};
use stegamux_core::CodecOptions;

pub fn audio_encoding(c: &mut Criterion) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    c.bench_function("Audio Encoding to memory", |b| {
        let mut carrier = (spec, vec![1000i16; 44_100]);

        b.iter(|| {
            embed_message(
                &mut carrier,
                "Hello World!",
                &AudioMethod::Lsb,
                &CodecOptions::default(),
            )
            .expect("Cannot write to codec");
        })
    });

    c.bench_function("Audio Phase Encoding to memory", |b| {
        b.iter(|| {
            let mut carrier = (spec, vec![1000i16; 16_384]);
            embed_message(
                &mut carrier,
                "Hello World!",
                &AudioMethod::Phase,
                &CodecOptions::default(),
            )
            .expect("Cannot write to codec");
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
