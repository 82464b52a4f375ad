/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use rand::Rng;
use std::hint::black_box;
use trimul::{
    KernelDirection, KernelMethod, Matrix3, Packed3, Trimul, matmul_dag3, matmul_dag3_karatsuba,
    matmul3, matmul3_karatsuba,
};

fn random_complex() -> Complex<f64> {
    Complex {
        re: rand::rng().random(),
        im: rand::rng().random(),
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let matrix: Matrix3<f64> =
        std::array::from_fn(|_| std::array::from_fn(|_| random_complex()));
    let src: Packed3<f64> = std::array::from_fn(|_| std::array::from_fn(|_| random_complex()));

    c.bench_function("matmul3 direct", |b| {
        let mut dst = Packed3::<f64>::default();
        b.iter(|| {
            matmul3(black_box(&matrix), black_box(&src), &mut dst);
        })
    });

    c.bench_function("matmul3 karatsuba", |b| {
        let mut dst = Packed3::<f64>::default();
        b.iter(|| {
            matmul3_karatsuba(black_box(&matrix), black_box(&src), &mut dst);
        })
    });

    c.bench_function("matmul_dag3 direct", |b| {
        let mut dst = Packed3::<f64>::default();
        b.iter(|| {
            matmul_dag3(black_box(&matrix), black_box(&src), &mut dst);
        })
    });

    c.bench_function("matmul_dag3 karatsuba", |b| {
        let mut dst = Packed3::<f64>::default();
        b.iter(|| {
            matmul_dag3_karatsuba(black_box(&matrix), black_box(&src), &mut dst);
        })
    });

    let flat_matrix = matrix.iter().flatten().copied().collect::<Vec<_>>();
    let batch = (0..3 * 4096).map(|_| random_complex()).collect::<Vec<_>>();

    for direction in [KernelDirection::Forward, KernelDirection::Dagger] {
        for method in [KernelMethod::Direct, KernelMethod::Karatsuba] {
            c.bench_function(format!("batched {direction:?} {method:?}").as_str(), |b| {
                let plan = Trimul::make_matvec_f64(direction, method);
                let mut working = vec![Complex::<f64>::default(); batch.len()];
                b.iter(|| {
                    plan.execute(&flat_matrix, &batch, &mut working).unwrap();
                })
            });
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
