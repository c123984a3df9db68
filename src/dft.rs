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
use crate::complex_fma::c_mul_add_fast;
use crate::fourier::FourierSample;
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Direct evaluation of the transform sum, used as the reference for every fast path.
pub(crate) struct Dft<T> {
    execution_length: usize,
    twiddles: Vec<Complex<T>>,
    direction: FftDirection,
}

impl<T: FftSample> Dft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> Dft<T> {
        Dft {
            execution_length: size,
            twiddles: generate_twiddles_dft(size, fft_direction),
            direction: fft_direction,
        }
    }
}

pub(crate) fn generate_twiddles_dft<T: FftSample>(
    size: usize,
    fft_direction: FftDirection,
) -> Vec<Complex<T>>
where
    f64: AsPrimitive<T>,
{
    (0..size)
        .map(|k| compute_twiddle(k, size, fft_direction))
        .collect()
}

impl<T: FftSample> FftExecutor<T> for Dft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) {
        assert_eq!(
            self.execution_length,
            in_place.len(),
            "In-place length expected to be {}, but it was {}",
            self.execution_length,
            in_place.len()
        );

        let mut output = vec![Complex::<T>::zero(); self.execution_length];

        for (k, dst) in output.iter_mut().enumerate() {
            let mut sum = Complex::<T>::zero();
            // k * n is tracked modulo N so the angle never grows with N^2
            let mut twiddle_idx = 0usize;
            for src in in_place.iter() {
                sum = c_mul_add_fast(*src, self.twiddles[twiddle_idx], sum);
                twiddle_idx += k;
                if twiddle_idx >= self.twiddles.len() {
                    twiddle_idx -= self.twiddles.len();
                }
            }
            *dst = sum;
        }

        in_place.copy_from_slice(&output);
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }
}

fn discrete_fourier<S: FourierSample>(
    input: &[S],
    direction: FftDirection,
) -> Vec<Complex<S::Scalar>>
where
    f64: AsPrimitive<S::Scalar>,
{
    let mut output = input.iter().map(|x| x.into_complex()).collect::<Vec<_>>();
    Dft::new(input.len(), direction).execute(&mut output);
    output
}

/// Forward transform evaluated straight from the definition in `O(N^2)`.
///
/// `X[k] = sum x[n] * exp(-2*pi*i*k*n/N)`. Intended as a reference, use [`crate::fft`] for real work.
pub fn dft<S: FourierSample>(input: &[S]) -> Vec<Complex<S::Scalar>>
where
    f64: AsPrimitive<S::Scalar>,
{
    discrete_fourier(input, FftDirection::Forward)
}

/// Unnormalized inverse transform evaluated straight from the definition in `O(N^2)`.
///
/// `x[n] = sum X[k] * exp(2*pi*i*k*n/N)`, without division by `N`.
pub fn idft<S: FourierSample>(input: &[S]) -> Vec<Complex<S::Scalar>>
where
    f64: AsPrimitive<S::Scalar>,
{
    discrete_fourier(input, FftDirection::Inverse)
}
