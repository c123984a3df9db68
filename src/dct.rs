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
//! Orthonormal discrete cosine and sine transforms of types II, III and IV,
//! evaluated directly from their kernels in `O(N^2)`.
//!
//! Type II and type III are inverses of each other, type IV is its own inverse.
use crate::traits::{FftSample, FftTrigonometry};
use num_traits::{AsPrimitive, MulAdd};

/// `(sin, cos)` of `pi * numerator / denominator`, the numerator is reduced modulo a full turn first.
#[inline]
fn kernel_pi<T: FftSample>(numerator: usize, denominator: usize) -> (T, T)
where
    f64: AsPrimitive<T>,
{
    let reduced = numerator % (2 * denominator);
    let (v_sin, v_cos) = (reduced as f64 / denominator as f64).sincos_pi();
    (v_sin.as_(), v_cos.as_())
}

/// `y[k] = sqrt(2 / N) * sum x[i] * basis(k, i)`
fn direct_transform<T: FftSample>(input: &[T], basis: impl Fn(usize, usize) -> T) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    let length = input.len();
    if length == 0 {
        return Vec::new();
    }
    let scale: T = (2f64 / length as f64).sqrt().as_();
    (0..length)
        .map(|k| {
            let sum = input
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (i, &x)| MulAdd::mul_add(x, basis(k, i), acc));
            sum * scale
        })
        .collect()
}

fn boundary<T: FftSample>(is_boundary: bool) -> T
where
    f64: AsPrimitive<T>,
{
    if is_boundary {
        std::f64::consts::FRAC_1_SQRT_2.as_()
    } else {
        T::one()
    }
}

/// DCT-II, `y[k] = sqrt(2/N) * c[k] * sum x[i] * cos(pi * k * (2i + 1) / 2N)` with `c[0] = 1/sqrt(2)`.
pub fn dct2<T: FftSample>(input: &[T]) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    let length = input.len();
    direct_transform(input, |k, i| {
        let (_, v_cos) = kernel_pi::<T>(k * (2 * i + 1), 2 * length);
        v_cos * boundary::<T>(k == 0)
    })
}

/// DCT-III, inverse of [`dct2`]: the first input sample is weighted by `1/sqrt(2)`.
pub fn dct3<T: FftSample>(input: &[T]) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    let length = input.len();
    direct_transform(input, |k, i| {
        let (_, v_cos) = kernel_pi::<T>(i * (2 * k + 1), 2 * length);
        v_cos * boundary::<T>(i == 0)
    })
}

/// DCT-IV, `y[k] = sqrt(2/N) * sum x[i] * cos(pi * (2i + 1) * (2k + 1) / 4N)`.
pub fn dct4<T: FftSample>(input: &[T]) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    let length = input.len();
    direct_transform(input, |k, i| {
        kernel_pi::<T>((2 * i + 1) * (2 * k + 1), 4 * length).1
    })
}

/// DST-II, `y[k] = sqrt(2/N) * d[k] * sum x[i] * sin(pi * (2i + 1) * (k + 1) / 2N)`
/// with `d[N - 1] = 1/sqrt(2)`.
pub fn dst2<T: FftSample>(input: &[T]) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    let length = input.len();
    direct_transform(input, |k, i| {
        let (v_sin, _) = kernel_pi::<T>((2 * i + 1) * (k + 1), 2 * length);
        v_sin * boundary::<T>(k + 1 == length)
    })
}

/// DST-III, inverse of [`dst2`]: the last input sample is weighted by `1/sqrt(2)`.
pub fn dst3<T: FftSample>(input: &[T]) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    let length = input.len();
    direct_transform(input, |k, i| {
        let (v_sin, _) = kernel_pi::<T>((i + 1) * (2 * k + 1), 2 * length);
        v_sin * boundary::<T>(i + 1 == length)
    })
}

/// DST-IV, `y[k] = sqrt(2/N) * sum x[i] * sin(pi * (2i + 1) * (2k + 1) / 4N)`.
pub fn dst4<T: FftSample>(input: &[T]) -> Vec<T>
where
    f64: AsPrimitive<T>,
{
    let length = input.len();
    direct_transform(input, |k, i| {
        kernel_pi::<T>((2 * i + 1) * (2 * k + 1), 4 * length).0
    })
}
