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
use crate::FftDirection;
use crate::traits::{FftSample, FftTrigonometry};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Computes `exp(-2*pi*i*index/fft_len)` for forward direction and its conjugate for inverse.
///
/// The angle is evaluated in `f64` regardless of `T`.
pub(crate) fn compute_twiddle<T: FftSample>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = -2. * index as f64 / fft_len as f64;
    let (v_sin, v_cos) = angle.sincos_pi();

    let result = Complex {
        re: v_cos.as_(),
        im: v_sin.as_(),
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Bit reversal permutation
pub(crate) fn bit_reverse_indices(n: usize) -> Vec<usize> {
    if n <= 1 {
        return (0..n).collect();
    }
    let bits = n.trailing_zeros();
    (0..n)
        .map(|i| i.reverse_bits() >> (usize::BITS - bits))
        .collect()
}

pub(crate) fn permute_inplace<T: Copy>(table: &mut [T], lut: &[usize]) {
    for (i, &j) in lut.iter().enumerate() {
        if i < j {
            table.swap(i, j);
        }
    }
}

/// `n` is zero, one or a power of two.
#[inline]
pub(crate) fn is_radix2_length(n: usize) -> bool {
    n <= 1 || n.is_power_of_two()
}
