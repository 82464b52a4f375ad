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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrimulError {
    InvalidMatrixSize(usize, usize),
    InvalidSizeMultiplier(usize, usize),
    InvalidOutputLength(usize, usize),
    LengthMismatch(usize, usize),
}

impl Error for TrimulError {}

impl std::fmt::Display for TrimulError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TrimulError::InvalidMatrixSize(s0, s1) => f.write_fmt(format_args!(
                "Matrix length expected to be {s1}, but it was {s0}"
            )),
            TrimulError::InvalidSizeMultiplier(s0, s1) => f.write_fmt(format_args!(
                "Size {s0} is assumed to be multiplier of {s1} to execute many products, but it wasn't"
            )),
            TrimulError::InvalidOutputLength(s0, s1) => f.write_fmt(format_args!(
                "Output length expected to be {s1}, but it was {s0}"
            )),
            TrimulError::LengthMismatch(s0, s1) => f.write_fmt(format_args!(
                "Operands must have equal lengths, but they were {s0} and {s1}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TrimulError::InvalidMatrixSize(8, 9).to_string(),
            "Matrix length expected to be 9, but it was 8"
        );
        assert_eq!(
            TrimulError::InvalidSizeMultiplier(7, 3).to_string(),
            "Size 7 is assumed to be multiplier of 3 to execute many products, but it wasn't"
        );
        assert_eq!(
            TrimulError::InvalidOutputLength(3, 6).to_string(),
            "Output length expected to be 6, but it was 3"
        );
        assert_eq!(
            TrimulError::LengthMismatch(2, 4).to_string(),
            "Operands must have equal lengths, but they were 2 and 4"
        );
    }
}
