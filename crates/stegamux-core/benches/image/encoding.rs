use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbImage;
use stegamux_core::media::image::{embed_message, ImageMethod};
use stegamux_core::CodecOptions;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = RgbImage::from_fn(512, 512, |x, y| {
            let i = (x + y) as u8;
            image::Rgb([i, i.wrapping_add(1), i.wrapping_add(2)])
        });

        b.iter(|| {
            embed_message(
                &mut plain_image,
                "Hello World!",
                &ImageMethod::Lsb,
                &CodecOptions::default(),
            )
            .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
