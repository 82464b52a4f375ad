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
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Complex multiply-accumulate with three real multiplications per product
//! instead of four, and small fixed-size matrix-vector kernels built on it.
//!
//! Each operand is split once ([`KaratsubaLhs`], [`KaratsubaRhs`]) and the
//! split is reused across every term of an inner product that touches it.
//! A 3x3 matrix times a 3-vector then costs 27 real multiplications
//! instead of 36, paid for with extra additions.
mod accumulator;
mod err;
mod kernels;
mod matvec;
mod split;
mod traits;

pub use accumulator::{
    KaratsubaAcc, karatsuba_conj_dot, karatsuba_conj_mul, karatsuba_dot, karatsuba_mul,
};
pub use err::TrimulError;
pub use kernels::{
    KaratsubaMatrix, Matrix3, Packed3, conjugate_transpose, matmul_dag3, matmul_dag3_karatsuba,
    matmul_dagger_direct, matmul_dagger_karatsuba, matmul_dagger_karatsuba_prepared,
    matmul_direct, matmul_karatsuba, matmul_karatsuba_prepared, matmul3, matmul3_karatsuba,
};
pub use split::{KaratsubaLhs, KaratsubaRhs, split_matrix, split_vectors};
pub use traits::MulSample;

use crate::matvec::MatVec;
use num_complex::Complex;
use std::sync::Arc;

/// Matrix-vector product over flat, row-major slices.
///
/// `matrix` holds `dimension() * dimension()` entries, `src` any number of
/// vectors of `dimension()` entries each, `dst` receives as many vectors.
/// On error `dst` is left untouched.
pub trait MatVecExecutor<T> {
    fn execute(
        &self,
        matrix: &[Complex<T>],
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), TrimulError>;
    fn direction(&self) -> KernelDirection;
    fn method(&self) -> KernelMethod;
    fn dimension(&self) -> usize;
}

/// Factory for 3x3 [`MatVecExecutor`]s.
pub struct Trimul {}

impl Trimul {
    fn strategy<T: MulSample>(
        direction: KernelDirection,
        method: KernelMethod,
    ) -> Arc<dyn MatVecExecutor<T> + Send + Sync> {
        Arc::new(MatVec::<T, 3>::new(direction, method))
    }

    pub fn make_matvec_f32(
        direction: KernelDirection,
        method: KernelMethod,
    ) -> Arc<dyn MatVecExecutor<f32> + Send + Sync> {
        Trimul::strategy(direction, method)
    }

    pub fn make_matvec_f64(
        direction: KernelDirection,
        method: KernelMethod,
    ) -> Arc<dyn MatVecExecutor<f64> + Send + Sync> {
        Trimul::strategy(direction, method)
    }

    pub fn make_forward_f32() -> Arc<dyn MatVecExecutor<f32> + Send + Sync> {
        Trimul::strategy(KernelDirection::Forward, KernelMethod::Karatsuba)
    }

    pub fn make_forward_f64() -> Arc<dyn MatVecExecutor<f64> + Send + Sync> {
        Trimul::strategy(KernelDirection::Forward, KernelMethod::Karatsuba)
    }

    pub fn make_dagger_f32() -> Arc<dyn MatVecExecutor<f32> + Send + Sync> {
        Trimul::strategy(KernelDirection::Dagger, KernelMethod::Karatsuba)
    }

    pub fn make_dagger_f64() -> Arc<dyn MatVecExecutor<f64> + Send + Sync> {
        Trimul::strategy(KernelDirection::Dagger, KernelMethod::Karatsuba)
    }
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum KernelDirection {
    /// `A * x`
    Forward,
    /// `A^H * x`
    Dagger,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum KernelMethod {
    /// Four real multiplications per complex product.
    Direct,
    /// Three real multiplications per complex product on pre-split operands.
    Karatsuba,
}
