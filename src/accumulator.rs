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
use crate::err::TrimulError;
use crate::split::{KaratsubaLhs, KaratsubaRhs};
use crate::traits::MulSample;
use num_complex::Complex;

/// Running sum of complex products kept as `(real, imag, common)`.
///
/// The represented value is `(real + common, imag + common)`, every product
/// folded in costs three real multiplications. Start with [`KaratsubaAcc::mult`]
/// (or from [`Default`], the zero sum), fold further terms with
/// [`KaratsubaAcc::madd`], read the value with [`KaratsubaAcc::finalize`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct KaratsubaAcc<T> {
    pub real: T,
    pub imag: T,
    pub common: T,
}

impl<T: MulSample> KaratsubaAcc<T> {
    /// Accumulator holding `lhs * rhs`.
    #[inline]
    pub fn new(lhs: &KaratsubaLhs<T>, rhs: &KaratsubaRhs<T>) -> Self {
        let mut acc = KaratsubaAcc::default();
        acc.mult(lhs, rhs);
        acc
    }

    // (a + bi)(c + di) = ((a - b)c + b(c - d), (a + b)d + b(c - d))
    #[inline]
    pub fn mult(&mut self, lhs: &KaratsubaLhs<T>, rhs: &KaratsubaRhs<T>) {
        self.real = lhs.diff * rhs.real;
        self.imag = lhs.sum * rhs.imag;
        self.common = lhs.imag * rhs.diff;
    }

    #[inline]
    pub fn madd(&mut self, lhs: &KaratsubaLhs<T>, rhs: &KaratsubaRhs<T>) {
        self.real += lhs.diff * rhs.real;
        self.imag += lhs.sum * rhs.imag;
        self.common += lhs.imag * rhs.diff;
    }

    // (a - bi)(c + di) = ((a + b)c - b(c - d), (a - b)d - b(c - d))
    #[inline]
    pub fn mult_lconj(&mut self, lhs: &KaratsubaLhs<T>, rhs: &KaratsubaRhs<T>) {
        self.real = lhs.sum * rhs.real;
        self.imag = lhs.diff * rhs.imag;
        self.common = -(lhs.imag * rhs.diff);
    }

    #[inline]
    pub fn madd_lconj(&mut self, lhs: &KaratsubaLhs<T>, rhs: &KaratsubaRhs<T>) {
        self.real += lhs.sum * rhs.real;
        self.imag += lhs.diff * rhs.imag;
        self.common -= lhs.imag * rhs.diff;
    }

    /// Complex value of the sum; the accumulator is left untouched.
    #[inline]
    pub fn finalize(&self) -> Complex<T> {
        Complex::new(self.real + self.common, self.imag + self.common)
    }
}

impl<T: MulSample> From<KaratsubaAcc<T>> for Complex<T> {
    #[inline]
    fn from(acc: KaratsubaAcc<T>) -> Self {
        acc.finalize()
    }
}

/// `a * b` through three real multiplications.
#[inline]
pub fn karatsuba_mul<T: MulSample>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    KaratsubaAcc::new(&KaratsubaLhs::new(a), &KaratsubaRhs::new(b)).finalize()
}

/// `a.conj() * b` through three real multiplications.
#[inline]
pub fn karatsuba_conj_mul<T: MulSample>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    let mut acc = KaratsubaAcc::default();
    acc.mult_lconj(&KaratsubaLhs::new(a), &KaratsubaRhs::new(b));
    acc.finalize()
}

pub(crate) fn fold_products<'a, T: MulSample + 'a>(
    mut terms: impl Iterator<Item = (&'a KaratsubaLhs<T>, &'a KaratsubaRhs<T>)>,
) -> Complex<T> {
    let Some((l0, r0)) = terms.next() else {
        return Complex::new(T::zero(), T::zero());
    };
    let mut acc = KaratsubaAcc::new(l0, r0);
    for (lhs, rhs) in terms {
        acc.madd(lhs, rhs);
    }
    acc.finalize()
}

pub(crate) fn fold_conj_products<'a, T: MulSample + 'a>(
    mut terms: impl Iterator<Item = (&'a KaratsubaLhs<T>, &'a KaratsubaRhs<T>)>,
) -> Complex<T> {
    let Some((l0, r0)) = terms.next() else {
        return Complex::new(T::zero(), T::zero());
    };
    let mut acc = KaratsubaAcc::default();
    acc.mult_lconj(l0, r0);
    for (lhs, rhs) in terms {
        acc.madd_lconj(lhs, rhs);
    }
    acc.finalize()
}

/// `sum_k lhs[k] * rhs[k]`, zero for empty slices.
///
/// Fails with [`TrimulError::LengthMismatch`] when the slices differ in length.
pub fn karatsuba_dot<T: MulSample>(
    lhs: &[KaratsubaLhs<T>],
    rhs: &[KaratsubaRhs<T>],
) -> Result<Complex<T>, TrimulError> {
    if lhs.len() != rhs.len() {
        return Err(TrimulError::LengthMismatch(lhs.len(), rhs.len()));
    }
    Ok(fold_products(lhs.iter().zip(rhs.iter())))
}

/// `sum_k lhs[k].conj() * rhs[k]`, zero for empty slices.
///
/// Fails with [`TrimulError::LengthMismatch`] when the slices differ in length.
pub fn karatsuba_conj_dot<T: MulSample>(
    lhs: &[KaratsubaLhs<T>],
    rhs: &[KaratsubaRhs<T>],
) -> Result<Complex<T>, TrimulError> {
    if lhs.len() != rhs.len() {
        return Err(TrimulError::LengthMismatch(lhs.len(), rhs.len()));
    }
    Ok(fold_conj_products(lhs.iter().zip(rhs.iter())))
}

#[cfg(test)]
macro_rules! test_product {
    ($method_name: ident, $data_type: ident, $reduced: ident, $reference: expr) => {
        #[test]
        fn $method_name() {
            use rand::Rng;
            for _ in 0..500 {
                let a = Complex::<$data_type>::new(
                    rand::rng().random_range(-1.0..1.0),
                    rand::rng().random_range(-1.0..1.0),
                );
                let b = Complex::<$data_type>::new(
                    rand::rng().random_range(-1.0..1.0),
                    rand::rng().random_range(-1.0..1.0),
                );
                let reduced = $reduced(a, b);
                let reference = $reference(a, b);
                let tol = $data_type::PRODUCT_EPSILON * reference.norm().max(1.0);
                assert!(
                    (reduced.re - reference.re).abs() < tol,
                    "re {} != {} for {a} * {b}",
                    reduced.re,
                    reference.re,
                );
                assert!(
                    (reduced.im - reference.im).abs() < tol,
                    "im {} != {} for {a} * {b}",
                    reduced.im,
                    reference.im,
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    test_product!(
        test_mul_f64,
        f64,
        karatsuba_mul,
        |a: Complex<f64>, b: Complex<f64>| a * b
    );
    test_product!(
        test_mul_f32,
        f32,
        karatsuba_mul,
        |a: Complex<f32>, b: Complex<f32>| a * b
    );
    test_product!(
        test_conj_mul_f64,
        f64,
        karatsuba_conj_mul,
        |a: Complex<f64>, b: Complex<f64>| a.conj() * b
    );
    test_product!(
        test_conj_mul_f32,
        f32,
        karatsuba_conj_mul,
        |a: Complex<f32>, b: Complex<f32>| a.conj() * b
    );

    fn random_pairs(n: usize) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
        let make = || {
            (0..n)
                .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
                .collect::<Vec<_>>()
        };
        (make(), make())
    }

    #[test]
    fn test_exact_small_integers() {
        let a = Complex::new(3.0f64, 2.0);
        let b = Complex::new(1.0f64, -4.0);
        assert_eq!(karatsuba_mul(a, b), Complex::new(11.0, -10.0));
        assert_eq!(karatsuba_conj_mul(a, b), Complex::new(-5.0, -14.0));
    }

    #[test]
    fn test_accumulation_law() {
        for n in 1..24 {
            let (a, b) = random_pairs(n);
            let lhs = a.iter().map(|&z| KaratsubaLhs::new(z)).collect::<Vec<_>>();
            let rhs = b.iter().map(|&z| KaratsubaRhs::new(z)).collect::<Vec<_>>();

            let reference: Complex<f64> = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
            let conj_reference: Complex<f64> =
                a.iter().zip(b.iter()).map(|(x, y)| x.conj() * y).sum();

            let dot = karatsuba_dot(&lhs, &rhs).unwrap();
            let conj_dot = karatsuba_conj_dot(&lhs, &rhs).unwrap();

            let tol = 1e-12 * n as f64;
            assert!(
                (dot - reference).norm() < tol,
                "dot {dot} != {reference} for size {n}"
            );
            assert!(
                (conj_dot - conj_reference).norm() < tol,
                "conj dot {conj_dot} != {conj_reference} for size {n}"
            );
        }
    }

    #[test]
    fn test_madd_on_default_matches_mult() {
        let lhs = KaratsubaLhs::new(Complex::new(0.3f64, -0.7));
        let rhs = KaratsubaRhs::new(Complex::new(-1.1f64, 0.4));
        let mut folded = KaratsubaAcc::default();
        folded.madd(&lhs, &rhs);
        assert_eq!(folded, KaratsubaAcc::new(&lhs, &rhs));

        let mut conj_folded = KaratsubaAcc::default();
        conj_folded.madd_lconj(&lhs, &rhs);
        let mut conj_started = KaratsubaAcc::default();
        conj_started.mult_lconj(&lhs, &rhs);
        assert_eq!(conj_folded.finalize(), conj_started.finalize());
    }

    #[test]
    fn test_mult_overwrites_previous_sum() {
        let lhs = KaratsubaLhs::new(Complex::new(2.0f64, 1.0));
        let rhs = KaratsubaRhs::new(Complex::new(1.0f64, 1.0));
        let mut acc = KaratsubaAcc::new(&lhs, &rhs);
        acc.madd(&lhs, &rhs);
        acc.mult(&lhs, &rhs);
        assert_eq!(acc.finalize(), Complex::new(1.0, 3.0));
        acc.mult_lconj(&lhs, &rhs);
        assert_eq!(acc.finalize(), Complex::new(3.0, 1.0));
    }

    #[test]
    fn test_finalize_is_pure_read() {
        let lhs = KaratsubaLhs::new(Complex::new(0.5f64, 0.25));
        let rhs = KaratsubaRhs::new(Complex::new(-0.5f64, 2.0));
        let acc = KaratsubaAcc::new(&lhs, &rhs);
        let snapshot = acc;
        let first = acc.finalize();
        let second: Complex<f64> = acc.into();
        assert_eq!(first, second);
        assert_eq!(acc, snapshot);
    }

    #[test]
    fn test_dot_empty_and_mismatch() {
        let empty_lhs: [KaratsubaLhs<f64>; 0] = [];
        let empty_rhs: [KaratsubaRhs<f64>; 0] = [];
        assert_eq!(
            karatsuba_dot(&empty_lhs, &empty_rhs).unwrap(),
            Complex::new(0.0, 0.0)
        );
        assert_eq!(
            karatsuba_conj_dot(&empty_lhs, &empty_rhs).unwrap(),
            Complex::new(0.0, 0.0)
        );
        let lhs = [KaratsubaLhs::new(Complex::new(1.0f64, 0.0))];
        assert_eq!(
            karatsuba_dot(&lhs, &empty_rhs),
            Err(TrimulError::LengthMismatch(1, 0))
        );
    }

    #[test]
    fn test_nan_propagates() {
        let z = karatsuba_mul(Complex::new(f64::NAN, 0.0), Complex::new(1.0, 1.0));
        assert!(z.re.is_nan());
        assert!(z.im.is_nan());
    }
}
