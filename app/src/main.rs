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
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use trimul::{
    KernelDirection, KernelMethod, Matrix3, Packed3, Trimul, karatsuba_conj_mul, karatsuba_mul,
    matmul_dag3, matmul_dag3_karatsuba, matmul3, matmul3_karatsuba,
};

type Kernel = fn(&Matrix3<f64>, &Packed3<f64>, &mut Packed3<f64>);

fn random_complex(rng: &mut StdRng) -> Complex<f64> {
    Complex::new(rng.random(), rng.random())
}

fn max_deviation<'a>(
    a: impl Iterator<Item = &'a Complex<f64>>,
    b: impl Iterator<Item = &'a Complex<f64>>,
) -> f64 {
    a.zip(b).map(|(a, b)| (a - b).norm()).fold(0f64, f64::max)
}

fn format_packed(b: &Packed3<f64>) -> String {
    b.iter()
        .map(|v| v.iter().map(|z| format!("{z}")).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\t")
}

fn check_scalars(rng: &mut StdRng) {
    let lhs = random_complex(rng);
    let rhs = random_complex(rng);

    let product = lhs * rhs;
    let reduced = karatsuba_mul(lhs, rhs);
    info!("product {product} reduced {reduced}");

    let conj_product = lhs.conj() * rhs;
    let conj_reduced = karatsuba_conj_mul(lhs, rhs);
    info!("conj product {conj_product} reduced {conj_reduced}");

    let deviation = (product - reduced)
        .norm()
        .max((conj_product - conj_reduced).norm());
    if deviation > 1e-12 {
        warn!("scalar deviation {deviation:e} exceeds tolerance");
    }
}

fn check_kernels(rng: &mut StdRng) {
    let matrix: Matrix3<f64> =
        std::array::from_fn(|_| std::array::from_fn(|_| random_complex(rng)));
    let src: Packed3<f64> = std::array::from_fn(|_| std::array::from_fn(|_| random_complex(rng)));

    let pairs: [(&str, Kernel, Kernel); 2] = [
        ("forward", matmul3, matmul3_karatsuba),
        ("dagger", matmul_dag3, matmul_dag3_karatsuba),
    ];

    for (name, direct, reduced) in pairs {
        let mut reference = Packed3::<f64>::default();
        let mut output = Packed3::<f64>::default();
        direct(&matrix, &src, &mut reference);
        reduced(&matrix, &src, &mut output);
        debug!("{name} direct    {}", format_packed(&reference));
        debug!("{name} karatsuba {}", format_packed(&output));

        let deviation = max_deviation(reference.iter().flatten(), output.iter().flatten());
        if deviation > 1e-12 {
            warn!("{name} kernel deviation {deviation:e} exceeds tolerance");
        } else {
            info!("{name} kernel max deviation {deviation:e}");
        }
    }
}

fn check_batched(rng: &mut StdRng, vectors: usize) {
    let matrix = (0..9).map(|_| random_complex(rng)).collect::<Vec<_>>();
    let src = (0..vectors * 3)
        .map(|_| random_complex(rng))
        .collect::<Vec<_>>();

    for direction in [KernelDirection::Forward, KernelDirection::Dagger] {
        let direct = Trimul::make_matvec_f64(direction, KernelMethod::Direct);
        let reduced = Trimul::make_matvec_f64(direction, KernelMethod::Karatsuba);
        let mut reference = vec![Complex::<f64>::default(); src.len()];
        let mut output = vec![Complex::<f64>::default(); src.len()];
        if let Err(err) = direct
            .execute(&matrix, &src, &mut reference)
            .and_then(|_| reduced.execute(&matrix, &src, &mut output))
        {
            warn!("batched {direction:?} failed: {err}");
            continue;
        }
        let deviation = max_deviation(reference.iter(), output.iter());
        info!("batched {direction:?} over {vectors} vectors, max deviation {deviation:e}");
    }
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut rng = StdRng::seed_from_u64(57);
    check_scalars(&mut rng);
    check_kernels(&mut rng);
    check_batched(&mut rng, 1024);
}
