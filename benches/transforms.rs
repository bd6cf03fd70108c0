use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use polcube_rs::transforms::{
    CameraDistortion, DemodulationMatrix, ImageCube, SurfaceCoefficients, correct_distortion,
    demodulate,
};

fn generate_cube(n_cols: usize, n_rows: usize, n_polstates: usize, n_cameras: usize) -> ImageCube {
    let len = n_cols * n_rows * n_polstates * n_cameras;
    let data: Vec<f32> = (0..len).map(|i| ((i * 7 + 3) % 1021) as f32 * 0.1).collect();
    ImageCube::from_dims(&[n_cols, n_rows, n_polstates, n_cameras], data).unwrap()
}

fn generate_matrix(n: usize) -> DemodulationMatrix {
    let data: Vec<f32> = (0..n * n).map(|i| (i as f32 * 0.37).cos()).collect();
    DemodulationMatrix::from_vec(n, data).unwrap()
}

fn generate_cameras(n_cameras: usize) -> Vec<CameraDistortion> {
    (0..n_cameras)
        .map(|c| {
            let mut dx = [[0.0; 4]; 4];
            let mut dy = [[0.0; 4]; 4];
            dx[0][0] = 0.8 + c as f64 * 0.1;
            dx[1][0] = 1.6e-3;
            dx[0][1] = -2.1e-3;
            dy[0][0] = -0.4;
            dy[1][1] = 3.0e-6;
            CameraDistortion::new(SurfaceCoefficients::new(dx), SurfaceCoefficients::new(dy))
        })
        .collect()
}

fn benchmark_demodulation_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("demodulation_by_size");

    let sizes = vec![
        (128, 128, "128x128"),
        (512, 512, "512x512"),
        (1024, 1024, "1024x1024"),
    ];

    for (n_cols, n_rows, label) in sizes {
        let cube = generate_cube(n_cols, n_rows, 4, 2);
        let matrix = generate_matrix(4);

        group.bench_with_input(BenchmarkId::from_parameter(label), &cube, |b, cube| {
            b.iter(|| demodulate(black_box(cube), &matrix).unwrap());
        });
    }

    group.finish();
}

fn benchmark_distortion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("distortion_by_size");
    group.sample_size(20);

    let sizes = vec![(128, 128, "128x128"), (512, 512, "512x512")];

    for (n_cols, n_rows, label) in sizes {
        let cube = generate_cube(n_cols, n_rows, 4, 2);
        let cameras = generate_cameras(2);

        group.bench_with_input(BenchmarkId::from_parameter(label), &cube, |b, cube| {
            b.iter(|| correct_distortion(black_box(cube), &cameras).unwrap());
        });
    }

    group.finish();
}

fn benchmark_distortion_polstates(c: &mut Criterion) {
    let mut group = c.benchmark_group("distortion_by_polstates");
    group.sample_size(20);

    for n_polstates in [1, 4] {
        let cube = generate_cube(256, 256, n_polstates, 2);
        let cameras = generate_cameras(2);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_polstates),
            &cube,
            |b, cube| {
                b.iter(|| correct_distortion(black_box(cube), &cameras).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_demodulation_sizes,
    benchmark_distortion_sizes,
    benchmark_distortion_polstates
);
criterion_main!(benches);
