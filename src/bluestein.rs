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
use crate::radix2::Radix2;
use crate::spectrum_arithmetic::{conjugate_mul_by_b, mul, mul_conjugate_in_place};
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Transform of arbitrary length expressed as a convolution with a chirp,
/// the convolution itself runs through a zero padded radix-2 transform.
pub(crate) struct BluesteinFft<T> {
    convolve_fft: Box<dyn FftExecutor<T> + Send + Sync>,
    convolve_fft_twiddles: Vec<Complex<T>>,
    twiddles: Vec<Complex<T>>,
    execution_length: usize,
    direction: FftDirection,
}

/// Fills `destination` with the chirp `exp(-pi*i*n^2/N)`, or its conjugate for inverse.
fn make_bluesteins_twiddles<T: FftSample>(destination: &mut [Complex<T>], direction: FftDirection)
where
    f64: AsPrimitive<T>,
{
    let twice_len = destination.len() * 2;

    // n^2 grows past the precision of f64 quickly, the chirp is periodic in 2N so
    // the index is reduced before it becomes an angle
    if destination.len() < u32::MAX as usize {
        let twice_len_reduced = twice_len as u64;

        for (i, e) in destination.iter_mut().enumerate() {
            let i_squared = i as u64 * i as u64;
            let i_mod = i_squared % twice_len_reduced;
            *e = compute_twiddle(i_mod as usize, twice_len, direction);
        }
    } else {
        // n^2 does not fit in u64
        let twice_len_reduced = twice_len as u128;

        for (i, e) in destination.iter_mut().enumerate() {
            let i_squared = i as u128 * i as u128;
            let i_mod = i_squared % twice_len_reduced;
            *e = compute_twiddle(i_mod as usize, twice_len, direction);
        }
    }
}

/// Smallest power of two able to hold a linear convolution of two `size` long sequences.
pub(crate) fn bluestein_convolution_length(size: usize) -> usize {
    (size * 2).saturating_sub(1).next_power_of_two()
}

impl<T: FftSample> BluesteinFft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> BluesteinFft<T> {
        let convolve_fft_len = bluestein_convolution_length(size);
        let convolve_fft: Box<dyn FftExecutor<T> + Send + Sync> =
            Box::new(Radix2::<T>::new(convolve_fft_len, FftDirection::Forward));

        // The inner inverse transform is done as conjugate, forward, conjugate,
        // its 1/M normalization is folded into the kernel spectrum
        let inner_fft_scale: T = (1f64 / convolve_fft_len as f64).as_();

        let mut convolve_fft_twiddles = vec![Complex::zero(); convolve_fft_len];
        make_bluesteins_twiddles(
            &mut convolve_fft_twiddles[..size],
            fft_direction.inverse(),
        );

        // Kernel is symmetric around zero, mirror it to the end of the buffer
        if let Some(first) = convolve_fft_twiddles.first_mut() {
            *first = *first * inner_fft_scale;
        }
        for i in 1..size {
            let twiddle = convolve_fft_twiddles[i] * inner_fft_scale;
            convolve_fft_twiddles[i] = twiddle;
            convolve_fft_twiddles[convolve_fft_len - i] = twiddle;
        }

        convolve_fft.execute(&mut convolve_fft_twiddles);

        let mut twiddles = vec![Complex::zero(); size];
        make_bluesteins_twiddles(&mut twiddles, fft_direction);

        BluesteinFft {
            convolve_fft,
            convolve_fft_twiddles,
            twiddles,
            execution_length: size,
            direction: fft_direction,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for BluesteinFft<T>
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

        // Length 0 and 1 are the identity, nothing to convolve
        if self.execution_length <= 1 {
            return;
        }

        let mut inner_input = vec![Complex::zero(); self.convolve_fft_twiddles.len()];

        // premultiply by the chirp, the tail stays zero padded
        mul(
            in_place,
            &self.twiddles,
            &mut inner_input[..self.execution_length],
        );

        self.convolve_fft.execute(&mut inner_input);

        // pointwise product with the kernel spectrum, conjugated to set up the inverse
        mul_conjugate_in_place(&mut inner_input, &self.convolve_fft_twiddles);

        self.convolve_fft.execute(&mut inner_input);

        // conjugate back and postmultiply by the chirp
        conjugate_mul_by_b(
            &inner_input[..self.execution_length],
            &self.twiddles,
            in_place,
        );
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::Dft;
    use rand::Rng;

    fn check_against_dft(size: usize, direction: FftDirection, tolerance: f64) {
        let src = (0..size)
            .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
            .collect::<Vec<Complex<f64>>>();
        let mut reference = src.to_vec();
        Dft::new(size, direction).execute(&mut reference);
        let mut working = src.to_vec();
        BluesteinFft::new(size, direction).execute(&mut working);
        reference
            .iter()
            .zip(working.iter())
            .enumerate()
            .for_each(|(idx, (a, b))| {
                assert!(
                    (a.re - b.re).abs() < tolerance,
                    "a_re {} != b_re {} at {idx} for size {size}",
                    a.re,
                    b.re,
                );
                assert!(
                    (a.im - b.im).abs() < tolerance,
                    "a_im {} != b_im {} at {idx} for size {size}",
                    a.im,
                    b.im,
                );
            });
    }

    #[test]
    fn test_bluestein_small_sizes() {
        for size in 0..=48 {
            check_against_dft(size, FftDirection::Forward, 1e-9);
            check_against_dft(size, FftDirection::Inverse, 1e-9);
        }
    }

    #[test]
    fn test_bluestein_primes() {
        for size in [97, 127, 251, 509, 997] {
            check_against_dft(size, FftDirection::Forward, 1e-8);
        }
    }

    #[test]
    fn test_bluestein_convolution_length() {
        assert_eq!(bluestein_convolution_length(0), 1);
        assert_eq!(bluestein_convolution_length(1), 1);
        assert_eq!(bluestein_convolution_length(9), 32);
        assert_eq!(bluestein_convolution_length(16), 32);
        assert_eq!(bluestein_convolution_length(17), 64);
    }

    #[test]
    fn test_chirp_is_reduced() {
        // for even N, (N - 1)^2 = 1 (mod 2N)
        let size = 40_000usize;
        let mut chirp = vec![Complex::<f64>::zero(); size];
        make_bluesteins_twiddles(&mut chirp, FftDirection::Forward);
        let expected: Complex<f64> = compute_twiddle(1, 2 * size, FftDirection::Forward);
        assert!((chirp[size - 1] - expected).norm() < 1e-15);
    }
}
