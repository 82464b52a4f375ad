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
use crate::traits::MulSample;
use num_complex::Complex;

/// Left operand `a + bi` prepared for a three-multiplication product.
///
/// Holds `a + b`, `a - b` and `b`. The same split serves both the plain
/// product and the product with the conjugated left operand.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct KaratsubaLhs<T> {
    pub sum: T,
    pub diff: T,
    pub imag: T,
}

impl<T: MulSample> KaratsubaLhs<T> {
    #[inline]
    pub fn new(z: Complex<T>) -> Self {
        Self {
            sum: z.re + z.im,
            diff: z.re - z.im,
            imag: z.im,
        }
    }
}

impl<T: MulSample> From<Complex<T>> for KaratsubaLhs<T> {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        KaratsubaLhs::new(z)
    }
}

/// Right operand `c + di` prepared for a three-multiplication product.
///
/// Holds `c`, `d` and `c - d`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct KaratsubaRhs<T> {
    pub real: T,
    pub imag: T,
    pub diff: T,
}

impl<T: MulSample> KaratsubaRhs<T> {
    #[inline]
    pub fn new(z: Complex<T>) -> Self {
        Self {
            real: z.re,
            imag: z.im,
            diff: z.re - z.im,
        }
    }
}

impl<T: MulSample> From<Complex<T>> for KaratsubaRhs<T> {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        KaratsubaRhs::new(z)
    }
}

/// Splits every entry of a square matrix as a left operand.
pub fn split_matrix<T: MulSample, const N: usize>(
    matrix: &[[Complex<T>; N]; N],
) -> [[KaratsubaLhs<T>; N]; N] {
    std::array::from_fn(|i| std::array::from_fn(|j| KaratsubaLhs::new(matrix[i][j])))
}

/// Splits every entry of packed vectors as a right operand.
pub fn split_vectors<T: MulSample, const N: usize, const S: usize>(
    vectors: &[[Complex<T>; N]; S],
) -> [[KaratsubaRhs<T>; N]; S] {
    std::array::from_fn(|s| std::array::from_fn(|j| KaratsubaRhs::new(vectors[s][j])))
}
