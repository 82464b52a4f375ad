#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use trimul::{KernelDirection, KernelMethod, Trimul};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    dagger: bool,
    matrix: [(f64, f64); 9],
    vectors: [(f64, f64); 6],
}

fn usable(v: &(f64, f64)) -> bool {
    v.0.is_finite() && v.1.is_finite() && v.0.abs() < 1e100 && v.1.abs() < 1e100
}

fn l1(z: &Complex<f64>) -> f64 {
    z.re.abs() + z.im.abs()
}

fuzz_target!(|data: Target| {
    if !data.matrix.iter().all(usable) || !data.vectors.iter().all(usable) {
        return;
    }
    let direction = if data.dagger {
        KernelDirection::Dagger
    } else {
        KernelDirection::Forward
    };
    let matrix = data
        .matrix
        .iter()
        .map(|&(re, im)| Complex::new(re, im))
        .collect::<Vec<_>>();
    let src = data
        .vectors
        .iter()
        .map(|&(re, im)| Complex::new(re, im))
        .collect::<Vec<_>>();

    let direct = Trimul::make_matvec_f64(direction, KernelMethod::Direct);
    let reduced = Trimul::make_matvec_f64(direction, KernelMethod::Karatsuba);
    let mut reference = vec![Complex::<f64>::default(); src.len()];
    let mut output = vec![Complex::<f64>::default(); src.len()];
    direct.execute(&matrix, &src, &mut reference).unwrap();
    reduced.execute(&matrix, &src, &mut output).unwrap();

    let matrix_scale = matrix.iter().map(l1).fold(0f64, f64::max);
    for (x, (a, b)) in src
        .chunks_exact(3)
        .zip(output.chunks_exact(3).zip(reference.chunks_exact(3)))
    {
        let scale = 3. * matrix_scale * x.iter().map(l1).fold(0f64, f64::max);
        let tol = scale * 1e-14 + 1e-300;
        for (a, b) in a.iter().zip(b.iter()) {
            assert!(
                (a.re - b.re).abs() <= tol && (a.im - b.im).abs() <= tol,
                "{a} != {b} with tolerance {tol}"
            );
        }
    }
});
