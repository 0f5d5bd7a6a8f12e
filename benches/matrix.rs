use criterion::{Criterion, criterion_group, criterion_main};
use freelook_math::{FreeLookCamera, FreeLookConfig, Matrix3x3, Matrix4x4, Vec3};
use std::hint::black_box;

pub fn mul_matrix3(c: &mut Criterion) {
    let a = Matrix3x3::rotate_x(0.3) * Matrix3x3::rotate_y(-1.2);
    let b = Matrix3x3::scale(&Vec3::new(2.0, 0.5, 1.5));
    c.bench_function("mul_matrix3", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn mul_matrix4(c: &mut Criterion) {
    let a = Matrix4x4::perspective(1.2, 16.0 / 9.0, 0.1, 100.0);
    let b = Matrix4x4::translate(&Vec3::new(1.0, -2.0, 3.0));
    c.bench_function("mul_matrix4", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn mul_assign_matrix4_with_itself(c: &mut Criterion) {
    let m = Matrix4x4::from_matrix33(&Matrix3x3::rotate_z(0.01));
    c.bench_function("mul_assign_matrix4_with_itself", |bencher| {
        bencher.iter(|| {
            let mut m = black_box(m);
            m *= m;
            m
        });
    });
}

pub fn perspective(c: &mut Criterion) {
    c.bench_function("perspective", |bencher| {
        bencher.iter(|| {
            Matrix4x4::perspective(
                black_box(1.2),
                black_box(16.0 / 9.0),
                black_box(0.1),
                black_box(100.0),
            )
        });
    });
}

pub fn view_projection(c: &mut Criterion) {
    let mut camera = FreeLookCamera::new(FreeLookConfig::default()).unwrap();
    camera.set_position(Vec3::new(3.0, 1.0, -4.0));
    c.bench_function("view_projection", |bencher| {
        bencher.iter(|| black_box(&camera).view_projection_matrix(black_box(16.0 / 9.0)));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets =
        mul_matrix3,
        mul_matrix4,
        mul_assign_matrix4_with_itself,
        perspective,
        view_projection,
);
criterion_main!(benches);
