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
use crate::accumulator::{fold_conj_products, fold_products};
use crate::split::{KaratsubaLhs, split_matrix, split_vectors};
use crate::traits::MulSample;
use num_complex::Complex;

/// 3x3 complex matrix, row-major.
pub type Matrix3<T> = [[Complex<T>; 3]; 3];

/// Two independent complex 3-vectors processed together.
pub type Packed3<T> = [[Complex<T>; 3]; 2];

/// Matrix with every entry split as a left operand.
pub type KaratsubaMatrix<T, const N: usize> = [[KaratsubaLhs<T>; N]; N];

/// `dst[s][i] = sum_j matrix[i][j] * src[s][j]`
pub fn matmul_direct<T: MulSample, const N: usize, const S: usize>(
    matrix: &[[Complex<T>; N]; N],
    src: &[[Complex<T>; N]; S],
    dst: &mut [[Complex<T>; N]; S],
) {
    for (x, b) in src.iter().zip(dst.iter_mut()) {
        for (row, b) in matrix.iter().zip(b.iter_mut()) {
            let mut sum = Complex::new(T::zero(), T::zero());
            for (a, x) in row.iter().zip(x.iter()) {
                sum = sum + a * x;
            }
            *b = sum;
        }
    }
}

/// `dst[s][i] = sum_j matrix[j][i].conj() * src[s][j]`
pub fn matmul_dagger_direct<T: MulSample, const N: usize, const S: usize>(
    matrix: &[[Complex<T>; N]; N],
    src: &[[Complex<T>; N]; S],
    dst: &mut [[Complex<T>; N]; S],
) {
    for (x, b) in src.iter().zip(dst.iter_mut()) {
        for (i, b) in b.iter_mut().enumerate() {
            let mut sum = Complex::new(T::zero(), T::zero());
            for (row, x) in matrix.iter().zip(x.iter()) {
                sum = sum + row[i].conj() * x;
            }
            *b = sum;
        }
    }
}

/// Same result as [`matmul_direct`] with three real multiplications per term.
pub fn matmul_karatsuba<T: MulSample, const N: usize, const S: usize>(
    matrix: &[[Complex<T>; N]; N],
    src: &[[Complex<T>; N]; S],
    dst: &mut [[Complex<T>; N]; S],
) {
    matmul_karatsuba_prepared(&split_matrix(matrix), src, dst);
}

/// Same result as [`matmul_dagger_direct`] with three real multiplications per term.
///
/// The matrix is split exactly as for the forward product, conjugation
/// is carried by the accumulator.
pub fn matmul_dagger_karatsuba<T: MulSample, const N: usize, const S: usize>(
    matrix: &[[Complex<T>; N]; N],
    src: &[[Complex<T>; N]; S],
    dst: &mut [[Complex<T>; N]; S],
) {
    matmul_dagger_karatsuba_prepared(&split_matrix(matrix), src, dst);
}

/// [`matmul_karatsuba`] on a matrix already split with [`split_matrix`].
pub fn matmul_karatsuba_prepared<T: MulSample, const N: usize, const S: usize>(
    matrix: &KaratsubaMatrix<T, N>,
    src: &[[Complex<T>; N]; S],
    dst: &mut [[Complex<T>; N]; S],
) {
    let xr = split_vectors(src);
    for (x, b) in xr.iter().zip(dst.iter_mut()) {
        for (row, b) in matrix.iter().zip(b.iter_mut()) {
            *b = fold_products(row.iter().zip(x.iter()));
        }
    }
}

/// [`matmul_dagger_karatsuba`] on a matrix already split with [`split_matrix`].
pub fn matmul_dagger_karatsuba_prepared<T: MulSample, const N: usize, const S: usize>(
    matrix: &KaratsubaMatrix<T, N>,
    src: &[[Complex<T>; N]; S],
    dst: &mut [[Complex<T>; N]; S],
) {
    let xr = split_vectors(src);
    for (x, b) in xr.iter().zip(dst.iter_mut()) {
        for (i, b) in b.iter_mut().enumerate() {
            *b = fold_conj_products(matrix.iter().map(|row| &row[i]).zip(x.iter()));
        }
    }
}

/// `matrix[j][i].conj()` at `[i][j]`.
pub fn conjugate_transpose<T: MulSample, const N: usize>(
    matrix: &[[Complex<T>; N]; N],
) -> [[Complex<T>; N]; N] {
    std::array::from_fn(|i| std::array::from_fn(|j| matrix[j][i].conj()))
}

pub fn matmul3<T: MulSample>(matrix: &Matrix3<T>, src: &Packed3<T>, dst: &mut Packed3<T>) {
    matmul_direct(matrix, src, dst);
}

pub fn matmul_dag3<T: MulSample>(matrix: &Matrix3<T>, src: &Packed3<T>, dst: &mut Packed3<T>) {
    matmul_dagger_direct(matrix, src, dst);
}

pub fn matmul3_karatsuba<T: MulSample>(
    matrix: &Matrix3<T>,
    src: &Packed3<T>,
    dst: &mut Packed3<T>,
) {
    matmul_karatsuba(matrix, src, dst);
}

pub fn matmul_dag3_karatsuba<T: MulSample>(
    matrix: &Matrix3<T>,
    src: &Packed3<T>,
    dst: &mut Packed3<T>,
) {
    matmul_dagger_karatsuba(matrix, src, dst);
}

#[cfg(test)]
pub(crate) fn random_grid<T: MulSample, const R: usize, const C: usize>() -> [[Complex<T>; C]; R]
where
    rand::distr::StandardUniform: rand::distr::Distribution<T>,
{
    use rand::Rng;
    std::array::from_fn(|_| {
        std::array::from_fn(|_| Complex::new(rand::rng().random(), rand::rng().random()))
    })
}

#[cfg(test)]
macro_rules! test_kernel_pair {
    (
        $method_name: ident,
        $data_type: ident,
        $kernel: ident,
        $reference: ident,
        $n: literal,
        $s: literal
    ) => {
        #[test]
        fn $method_name() {
            for _ in 0..200 {
                let matrix = random_grid::<$data_type, $n, $n>();
                let src = random_grid::<$data_type, $s, $n>();
                let mut reference = [[Complex::<$data_type>::default(); $n]; $s];
                let mut output = [[Complex::<$data_type>::default(); $n]; $s];
                $reference(&matrix, &src, &mut reference);
                $kernel(&matrix, &src, &mut output);
                let tol = $data_type::PRODUCT_EPSILON * $n as $data_type;
                for s in 0..$s {
                    for i in 0..$n {
                        let a = output[s][i];
                        let b = reference[s][i];
                        assert!(
                            (a.re - b.re).abs() < tol,
                            "a_re {} != b_re {} at [{s}][{i}] for size {}",
                            a.re,
                            b.re,
                            $n
                        );
                        assert!(
                            (a.im - b.im).abs() < tol,
                            "a_im {} != b_im {} at [{s}][{i}] for size {}",
                            a.im,
                            b.im,
                            $n
                        );
                    }
                }
            }
        }
    };
}
