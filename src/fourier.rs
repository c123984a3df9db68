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
use crate::bluestein::BluesteinFft;
use crate::r2c::{C2RFftEvenInterceptor, C2RFftExecutor, R2CFftEvenInterceptor, R2CFftExecutor};
use crate::radix2::Radix2;
use crate::traits::FftSample;
use crate::util::is_radix2_length;
use crate::{FftDirection, FftExecutor};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};
use tracing::trace;

/// Element of a sequence that can be transformed: a real `f32`/`f64` or a complex value.
///
/// Real samples take the half length path of the radix-2 engine; the public output
/// shape does not change, a real signal still produces all `N` complex bins.
pub trait FourierSample:
    Copy
    + Zero
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Debug
    + Send
    + Sync
    + 'static
{
    type Scalar: FftSample;

    fn into_complex(self) -> Complex<Self::Scalar>;

    /// Projects a complex value back onto the sample kind, real samples keep the real part.
    fn from_complex(value: Complex<Self::Scalar>) -> Self;

    /// Radix-2 transform of `input` into `output`, the length must be zero, one or a power of two.
    fn radix2(input: &[Self], output: &mut [Complex<Self::Scalar>], direction: FftDirection);

    /// Unnormalized inverse radix-2 transform of a spectrum known to belong to a
    /// sequence of `Self`.
    fn synthesize_radix2(spectrum: &[Complex<Self::Scalar>], output: &mut [Self]);
}

macro_rules! impl_real_fourier_sample {
    ($t:ty) => {
        impl FourierSample for $t {
            type Scalar = $t;

            #[inline]
            fn into_complex(self) -> Complex<$t> {
                Complex::new(self, 0.)
            }

            #[inline]
            fn from_complex(value: Complex<$t>) -> $t {
                value.re
            }

            fn radix2(input: &[$t], output: &mut [Complex<$t>], direction: FftDirection) {
                match input.len() {
                    0 => {}
                    1 => output[0] = input[0].into_complex(),
                    length => {
                        let executor = R2CFftEvenInterceptor::<$t>::install(
                            length,
                            Box::new(Radix2::<$t>::new(length / 2, FftDirection::Forward)),
                        );
                        executor.execute(input, output);
                        // a real signal's inverse spectrum is the conjugate of the forward one
                        if direction == FftDirection::Inverse {
                            for value in output.iter_mut() {
                                *value = value.conj();
                            }
                        }
                    }
                }
            }

            fn synthesize_radix2(spectrum: &[Complex<$t>], output: &mut [$t]) {
                match output.len() {
                    0 => {}
                    1 => output[0] = spectrum[0].re,
                    length => {
                        let executor = C2RFftEvenInterceptor::<$t>::install(
                            length,
                            Box::new(Radix2::<$t>::new(length / 2, FftDirection::Inverse)),
                        );
                        executor.execute(spectrum, output);
                    }
                }
            }
        }
    };
}

impl_real_fourier_sample!(f32);
impl_real_fourier_sample!(f64);

impl<T: FftSample> FourierSample for Complex<T>
where
    f64: AsPrimitive<T>,
{
    type Scalar = T;

    #[inline]
    fn into_complex(self) -> Complex<T> {
        self
    }

    #[inline]
    fn from_complex(value: Complex<T>) -> Complex<T> {
        value
    }

    fn radix2(input: &[Complex<T>], output: &mut [Complex<T>], direction: FftDirection) {
        output.copy_from_slice(input);
        Radix2::new(input.len(), direction).execute(output);
    }

    fn synthesize_radix2(spectrum: &[Complex<T>], output: &mut [Complex<T>]) {
        output.copy_from_slice(spectrum);
        Radix2::new(spectrum.len(), FftDirection::Inverse).execute(output);
    }
}

fn assert_same_length(input: usize, output: usize) {
    assert_eq!(
        input, output,
        "Output length expected to be {input}, but it was {output}"
    );
}

fn bluestein<S: FourierSample>(
    input: &[S],
    output: &mut [Complex<S::Scalar>],
    direction: FftDirection,
) where
    f64: AsPrimitive<S::Scalar>,
{
    for (dst, &src) in output.iter_mut().zip(input.iter()) {
        *dst = src.into_complex();
    }
    BluesteinFft::new(input.len(), direction).execute(output);
}

/// Routes a transform to radix-2 for power of two lengths and to Bluestein otherwise.
pub(crate) fn fourier<S: FourierSample>(
    input: &[S],
    output: &mut [Complex<S::Scalar>],
    direction: FftDirection,
) where
    f64: AsPrimitive<S::Scalar>,
{
    assert_same_length(input.len(), output.len());
    let length = input.len();
    if is_radix2_length(length) {
        trace!(length, ?direction, engine = "radix2", "fourier");
        S::radix2(input, output, direction);
    } else {
        trace!(length, ?direction, engine = "bluestein", "fourier");
        bluestein(input, output, direction);
    }
}

/// Unnormalized inverse of `spectrum` written as a sequence of `S`.
///
/// For real `S` the spectrum is taken as Hermitian: the radix-2 path reads only the
/// lower half, other lengths keep the real part of a full complex inverse.
pub(crate) fn synthesize<S: FourierSample>(spectrum: &[Complex<S::Scalar>], output: &mut [S])
where
    f64: AsPrimitive<S::Scalar>,
{
    assert_same_length(spectrum.len(), output.len());
    let length = spectrum.len();
    if is_radix2_length(length) {
        trace!(length, engine = "radix2", "synthesize");
        S::synthesize_radix2(spectrum, output);
    } else {
        trace!(length, engine = "bluestein", "synthesize");
        let mut scratch = spectrum.to_vec();
        BluesteinFft::new(length, FftDirection::Inverse).execute(&mut scratch);
        for (dst, src) in output.iter_mut().zip(scratch.into_iter()) {
            *dst = S::from_complex(src);
        }
    }
}

/// Forward discrete Fourier transform, `X[k] = sum x[n] * exp(-2*pi*i*k*n/N)`.
///
/// Any length is accepted, including zero. The result always has `N` bins,
/// real input included.
///
/// ```
/// use fourier_conv::{fft, Complex};
///
/// let spectrum = fft(&[Complex::new(1f64, 0.), Complex::new(0., 1.), Complex::new(-1., 0.)]);
/// assert_eq!(spectrum.len(), 3);
/// ```
pub fn fft<S: FourierSample>(input: &[S]) -> Vec<Complex<S::Scalar>>
where
    f64: AsPrimitive<S::Scalar>,
{
    let mut output = vec![Complex::zero(); input.len()];
    fourier(input, &mut output, FftDirection::Forward);
    output
}

/// Unnormalized inverse transform, `x[n] = sum X[k] * exp(2*pi*i*k*n/N)`.
///
/// Nothing is divided by `N`: `ifft(&fft(x))` returns `x` scaled by its length.
pub fn ifft<S: FourierSample>(input: &[S]) -> Vec<Complex<S::Scalar>>
where
    f64: AsPrimitive<S::Scalar>,
{
    let mut output = vec![Complex::zero(); input.len()];
    fourier(input, &mut output, FftDirection::Inverse);
    output
}

/// [`fft`] into a caller provided buffer.
///
/// # Panics
/// When `output` and `input` lengths differ.
pub fn fft_into<S: FourierSample>(input: &[S], output: &mut [Complex<S::Scalar>])
where
    f64: AsPrimitive<S::Scalar>,
{
    fourier(input, output, FftDirection::Forward);
}

/// [`ifft`] into a caller provided buffer.
///
/// # Panics
/// When `output` and `input` lengths differ.
pub fn ifft_into<S: FourierSample>(input: &[S], output: &mut [Complex<S::Scalar>])
where
    f64: AsPrimitive<S::Scalar>,
{
    fourier(input, output, FftDirection::Inverse);
}

/// Unnormalized inverse of a Hermitian spectrum (`X[N-k] == conj(X[k])`) as a real sequence.
///
/// Power of two lengths run a half length complex transform and read only bins
/// `0..=N/2`; the upper half is assumed to mirror them.
pub fn ifft_hermitian<T: FftSample>(spectrum: &[Complex<T>]) -> Vec<T>
where
    f64: AsPrimitive<T>,
    T: FourierSample<Scalar = T>,
{
    let mut output = vec![T::zero(); spectrum.len()];
    synthesize::<T>(spectrum, &mut output);
    output
}

fn radix2_only<S: FourierSample>(input: &[S], direction: FftDirection) -> Vec<Complex<S::Scalar>> {
    assert!(
        is_radix2_length(input.len()),
        "Input length must be a power of 2, but it was {}",
        input.len()
    );
    let mut output = vec![Complex::zero(); input.len()];
    S::radix2(input, &mut output, direction);
    output
}

/// Forward transform forced through the radix-2 engine.
///
/// # Panics
/// When the length is not zero, one or a power of two.
pub fn radix2_fft<S: FourierSample>(input: &[S]) -> Vec<Complex<S::Scalar>> {
    radix2_only(input, FftDirection::Forward)
}

/// Unnormalized inverse transform forced through the radix-2 engine.
///
/// # Panics
/// When the length is not zero, one or a power of two.
pub fn radix2_ifft<S: FourierSample>(input: &[S]) -> Vec<Complex<S::Scalar>> {
    radix2_only(input, FftDirection::Inverse)
}

/// Forward transform forced through Bluestein's algorithm, for any length.
pub fn bluestein_fft<S: FourierSample>(input: &[S]) -> Vec<Complex<S::Scalar>>
where
    f64: AsPrimitive<S::Scalar>,
{
    let mut output = vec![Complex::zero(); input.len()];
    bluestein(input, &mut output, FftDirection::Forward);
    output
}

/// Unnormalized inverse transform forced through Bluestein's algorithm, for any length.
pub fn bluestein_ifft<S: FourierSample>(input: &[S]) -> Vec<Complex<S::Scalar>>
where
    f64: AsPrimitive<S::Scalar>,
{
    let mut output = vec![Complex::zero(); input.len()];
    bluestein(input, &mut output, FftDirection::Inverse);
    output
}
