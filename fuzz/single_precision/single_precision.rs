#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use trimul::{KaratsubaAcc, KaratsubaLhs, KaratsubaRhs, karatsuba_conj_dot, karatsuba_dot};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    lhs: Vec<(f32, f32)>,
    rhs: Vec<(f32, f32)>,
}

fuzz_target!(|data: Target| {
    let lhs = data
        .lhs
        .iter()
        .map(|&(re, im)| KaratsubaLhs::new(Complex::new(re, im)))
        .collect::<Vec<_>>();
    let rhs = data
        .rhs
        .iter()
        .map(|&(re, im)| KaratsubaRhs::new(Complex::new(re, im)))
        .collect::<Vec<_>>();

    if lhs.len() != rhs.len() {
        assert!(karatsuba_dot(&lhs, &rhs).is_err());
        assert!(karatsuba_conj_dot(&lhs, &rhs).is_err());
        return;
    }

    let dot = karatsuba_dot(&lhs, &rhs).unwrap();
    let conj_dot = karatsuba_conj_dot(&lhs, &rhs).unwrap();

    let mut acc = KaratsubaAcc::default();
    let mut conj_acc = KaratsubaAcc::default();
    for (l, r) in lhs.iter().zip(rhs.iter()) {
        acc.madd(l, r);
        conj_acc.madd_lconj(l, r);
    }
    let folded = acc.finalize();
    let conj_folded = conj_acc.finalize();

    let same = |a: Complex<f32>, b: Complex<f32>| {
        (a.re == b.re || (a.re.is_nan() && b.re.is_nan()))
            && (a.im == b.im || (a.im.is_nan() && b.im.is_nan()))
    };
    assert!(same(dot, folded), "{dot} != {folded}");
    assert!(same(conj_dot, conj_folded), "{conj_dot} != {conj_folded}");
});
