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
//! Discrete Fourier transforms of any length and convolutions built on top of them.
//!
//! Power of two lengths go through an iterative radix-2 Cooley-Tukey transform,
//! every other length through Bluestein's chirp-z algorithm. Real input is folded
//! into a half length complex transform.
//!
//! The inverse transform is **unnormalized**: `ifft(fft(x))` yields `x * N`.
//! The convolution functions divide by the transform length themselves.
//!
//! ```
//! use fourier_conv::{fft, Complex};
//!
//! let spectrum = fft(&[0f64, 1., 2., 3.]);
//! assert!((spectrum[1] - Complex::new(-2., 2.)).norm() < 1e-12);
//! ```
//!
//! Every function allocates what it needs per call and keeps no state between calls,
//! so all of them may be used from many threads at once.
mod bluestein;
mod complex_fma;
mod convolve;
mod dct;
mod dft;
mod fourier;
mod r2c;
mod radix2;
mod spectrum_arithmetic;
mod traits;
mod util;

pub use convolve::{circular_convolve, convolve, direct_convolve, negacyclic_convolve};
pub use dct::{dct2, dct3, dct4, dst2, dst3, dst4};
pub use dft::{dft, idft};
pub use fourier::{
    FourierSample, bluestein_fft, bluestein_ifft, fft, fft_into, ifft, ifft_hermitian, ifft_into,
    radix2_fft, radix2_ifft,
};
pub use num_complex::Complex;
pub use traits::{FftSample, FftTrigonometry};

pub(crate) trait FftExecutor<T> {
    fn execute(&self, in_place: &mut [Complex<T>]);
    fn direction(&self) -> FftDirection;
    fn length(&self) -> usize;
}

/// Sign of the transform exponent: `Forward` is `exp(-2*pi*i*k*n/N)`.
///
/// ```
/// use fourier_conv::{Complex, FftDirection, FourierSample};
///
/// let mut spectrum = vec![Complex::new(0f64, 0.); 4];
/// <f64 as FourierSample>::radix2(&[0., 1., 2., 3.], &mut spectrum, FftDirection::Inverse.inverse());
/// assert!((spectrum[1] - Complex::new(-2., 2.)).norm() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    pub fn inverse(self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}
