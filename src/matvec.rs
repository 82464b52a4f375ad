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
use crate::kernels::{
    matmul_dagger_direct, matmul_dagger_karatsuba_prepared, matmul_direct,
    matmul_karatsuba_prepared,
};
use crate::split::split_matrix;
use crate::traits::MulSample;
use crate::{KernelDirection, KernelMethod, MatVecExecutor, TrimulError};
use num_complex::Complex;
use std::marker::PhantomData;

pub(crate) struct MatVec<T, const N: usize> {
    phantom_data: PhantomData<T>,
    direction: KernelDirection,
    method: KernelMethod,
}

impl<T: MulSample, const N: usize> MatVec<T, N> {
    pub(crate) fn new(direction: KernelDirection, method: KernelMethod) -> Self {
        Self {
            phantom_data: PhantomData,
            direction,
            method,
        }
    }

    fn validate(
        &self,
        matrix: &[Complex<T>],
        src: &[Complex<T>],
        dst: &[Complex<T>],
    ) -> Result<(), TrimulError> {
        if matrix.len() != N * N {
            return Err(TrimulError::InvalidMatrixSize(matrix.len(), N * N));
        }
        if N == 0 || !src.len().is_multiple_of(N) {
            return Err(TrimulError::InvalidSizeMultiplier(src.len(), N));
        }
        if dst.len() != src.len() {
            return Err(TrimulError::InvalidOutputLength(dst.len(), src.len()));
        }
        Ok(())
    }
}

impl<T: MulSample, const N: usize> MatVecExecutor<T> for MatVec<T, N> {
    fn execute(
        &self,
        matrix: &[Complex<T>],
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), TrimulError> {
        self.validate(matrix, src, dst)?;

        let grid: [[Complex<T>; N]; N] =
            std::array::from_fn(|i| std::array::from_fn(|j| matrix[i * N + j]));
        let zero = Complex::new(T::zero(), T::zero());

        match self.method {
            KernelMethod::Direct => {
                for (x, b) in src.chunks_exact(N).zip(dst.chunks_exact_mut(N)) {
                    let x: [[Complex<T>; N]; 1] = [std::array::from_fn(|j| x[j])];
                    let mut out = [[zero; N]; 1];
                    match self.direction {
                        KernelDirection::Forward => matmul_direct(&grid, &x, &mut out),
                        KernelDirection::Dagger => matmul_dagger_direct(&grid, &x, &mut out),
                    }
                    b.copy_from_slice(&out[0]);
                }
            }
            KernelMethod::Karatsuba => {
                let prepared = split_matrix(&grid);
                for (x, b) in src.chunks_exact(N).zip(dst.chunks_exact_mut(N)) {
                    let x: [[Complex<T>; N]; 1] = [std::array::from_fn(|j| x[j])];
                    let mut out = [[zero; N]; 1];
                    match self.direction {
                        KernelDirection::Forward => {
                            matmul_karatsuba_prepared(&prepared, &x, &mut out)
                        }
                        KernelDirection::Dagger => {
                            matmul_dagger_karatsuba_prepared(&prepared, &x, &mut out)
                        }
                    }
                    b.copy_from_slice(&out[0]);
                }
            }
        }
        Ok(())
    }

    fn direction(&self) -> KernelDirection {
        self.direction
    }

    fn method(&self) -> KernelMethod {
        self.method
    }

    #[inline]
    fn dimension(&self) -> usize {
        N
    }
}
