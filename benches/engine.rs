use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ppmlife::{GameOfLife, Image, Pixel};

fn make_image(width: usize, height: usize) -> Image {
    let mut image = Image::new(width, height);
    for row in 0..height {
        for col in 0..width {
            if (row + col) % 3 == 0 {
                image.set(row, col, Pixel::splat(1));
            }
        }
    }
    image
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    for size in [64, 128, 256] {
        let image = make_image(size, size);

        group.bench_with_input(BenchmarkId::new("serial", size), &image, |b, image| {
            b.iter_batched(
                || GameOfLife::from_image(image.clone()),
                |mut game| game.next_generation(),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &image, |b, image| {
            b.iter_batched(
                || GameOfLife::from_image(image.clone()),
                |mut game| game.next_generation_parallel(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next_generation);
criterion_main!(benches);
