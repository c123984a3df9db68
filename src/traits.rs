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
use num_traits::{Float, MulAdd};
use std::fmt::Debug;

pub trait FftTrigonometry {
    /// Returns `(sin(pi * self), cos(pi * self))`.
    fn sincos_pi(self) -> (Self, Self)
    where
        Self: Sized;
}

macro_rules! impl_sincos_pi {
    ($t:ty, $pi:expr) => {
        impl FftTrigonometry for $t {
            #[inline]
            fn sincos_pi(self) -> ($t, $t) {
                // Split into quarter turns so that 0, 1/2, 1 and 3/2 come out exact
                let reduced = self % 2.0;
                let quadrant = (reduced * 2.0).round();
                let fraction = reduced - quadrant * 0.5;
                let (s, c) = (fraction * $pi).sin_cos();
                match (quadrant as i64).rem_euclid(4) {
                    0 => (s, c),
                    1 => (c, -s),
                    2 => (-s, -c),
                    _ => (-c, s),
                }
            }
        }
    };
}

impl_sincos_pi!(f32, std::f32::consts::PI);
impl_sincos_pi!(f64, std::f64::consts::PI);

/// Floating point type the transforms operate on.
///
/// Implemented for `f32` and `f64`; `f64` is the reference precision.
pub trait FftSample:
    Float + FftTrigonometry + MulAdd<Self, Output = Self> + Default + Debug + Send + Sync + 'static
{
}

impl FftSample for f32 {}

impl FftSample for f64 {}
