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
use crate::complex_fma::c_conj_mul_fast;
use crate::fourier::{FourierSample, fourier, synthesize};
use crate::spectrum_arithmetic::mul_scaled_in_place;
use crate::util::compute_twiddle;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use tracing::trace;

/// Circular convolution of two equally long sequences through their spectra.
///
/// Both operands are transformed forward, multiplied pointwise together with the
/// `1 / N` normalization, and synthesized back into `output`.
fn spectral_product<S: FourierSample>(a: &[S], b: &[S], output: &mut [S])
where
    f64: AsPrimitive<S::Scalar>,
{
    let length = a.len();
    let mut spectrum_a = vec![Complex::zero(); length];
    let mut spectrum_b = vec![Complex::zero(); length];
    fourier(a, &mut spectrum_a, FftDirection::Forward);
    fourier(b, &mut spectrum_b, FftDirection::Forward);

    let scale: S::Scalar = (1f64 / length as f64).as_();
    mul_scaled_in_place(&mut spectrum_a, &spectrum_b, scale);

    synthesize(&spectrum_a, output);
}

fn assert_same_length(a: usize, b: usize) {
    assert_eq!(
        a, b,
        "Operands must have the same length, but they were {a} and {b}"
    );
}

/// Linear convolution, `c[k] = sum a[i] * b[k - i]`, of length `N + M - 1`.
///
/// Operands are zero padded to the next power of two holding the full result.
/// Real operands give a real result. An empty operand gives an empty result.
///
/// ```
/// use fourier_conv::convolve;
///
/// let smoothed = convolve(&[1f64, 2., 3.], &[0.5, 0.5]);
/// assert_eq!(smoothed.len(), 4);
/// assert!((smoothed[1] - 1.5).abs() < 1e-12);
/// ```
pub fn convolve<S: FourierSample>(a: &[S], b: &[S]) -> Vec<S>
where
    f64: AsPrimitive<S::Scalar>,
{
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let result_length = a.len() + b.len() - 1;
    let fft_length = result_length.next_power_of_two();
    trace!(a = a.len(), b = b.len(), fft_length, "convolve");

    let mut padded_a = vec![S::zero(); fft_length];
    let mut padded_b = vec![S::zero(); fft_length];
    padded_a[..a.len()].copy_from_slice(a);
    padded_b[..b.len()].copy_from_slice(b);

    let mut output = vec![S::zero(); fft_length];
    spectral_product(&padded_a, &padded_b, &mut output);
    output.truncate(result_length);
    output
}

/// Circular convolution of two length `N` sequences, `c[k] = sum a[i] * b[(k - i) mod N]`.
///
/// # Panics
/// When the operands differ in length.
pub fn circular_convolve<S: FourierSample>(a: &[S], b: &[S]) -> Vec<S>
where
    f64: AsPrimitive<S::Scalar>,
{
    assert_same_length(a.len(), b.len());
    trace!(length = a.len(), "circular convolve");
    let mut output = vec![S::zero(); a.len()];
    if !a.is_empty() {
        spectral_product(a, b, &mut output);
    }
    output
}

/// Negacyclic convolution of two length `N` sequences: the circular convolution where
/// terms wrapping past `N` are subtracted, i.e. the product modulo `x^N + 1`.
///
/// # Panics
/// When the operands differ in length.
pub fn negacyclic_convolve<S: FourierSample>(a: &[S], b: &[S]) -> Vec<S>
where
    f64: AsPrimitive<S::Scalar>,
{
    assert_same_length(a.len(), b.len());
    let length = a.len();
    trace!(length, "negacyclic convolve");
    if length == 0 {
        return Vec::new();
    }

    // exp(i*pi*k/N), powers of a 2N-th root of unity whose N-th power is -1
    let twist = (0..length)
        .map(|k| compute_twiddle::<S::Scalar>(k, 2 * length, FftDirection::Inverse))
        .collect::<Vec<_>>();

    let twisted_a = a
        .iter()
        .zip(twist.iter())
        .map(|(&x, &w)| x.into_complex() * w)
        .collect::<Vec<_>>();
    let twisted_b = b
        .iter()
        .zip(twist.iter())
        .map(|(&x, &w)| x.into_complex() * w)
        .collect::<Vec<_>>();

    let mut product = vec![Complex::zero(); length];
    spectral_product(&twisted_a, &twisted_b, &mut product);

    product
        .iter()
        .zip(twist.iter())
        .map(|(&x, &w)| S::from_complex(c_conj_mul_fast(w, x)))
        .collect()
}

/// Linear convolution evaluated straight from the sum in `O(N * M)`.
pub fn direct_convolve<S: FourierSample>(a: &[S], b: &[S]) -> Vec<S> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut output = vec![S::zero(); a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (dst, &y) in output[i..].iter_mut().zip(b.iter()) {
            *dst = *dst + x * y;
        }
    }
    output
}
