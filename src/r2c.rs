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
use crate::complex_fma::c_mul_fast;
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

pub(crate) trait R2CFftExecutor<T> {
    /// Writes the whole conjugate symmetric spectrum of `input` into `output`,
    /// both slices have the real length the executor was installed with.
    fn execute(&self, input: &[T], output: &mut [Complex<T>]);
}

pub(crate) trait C2RFftExecutor<T> {
    /// Unnormalized inverse of a Hermitian spectrum.
    ///
    /// Only bins `0..=N/2` of `input` are read; the imaginary parts of the DC and
    /// Nyquist bins are treated as zero.
    fn execute(&self, input: &[Complex<T>], output: &mut [T]);
}

/// Two point real kernel: folds a real and an imaginary partial sum into the pair
/// written at two mirrored slots, `(a + b, a - b)`.
#[inline(always)]
pub(crate) fn real_two_point<T: FftSample>(a: T, b: T) -> (T, T) {
    (a + b, a - b)
}

// Multiplies by i
#[inline(always)]
fn rotate_90<T: FftSample>(value: Complex<T>) -> Complex<T> {
    Complex {
        re: -value.im,
        im: value.re,
    }
}

/// Forward real transform of even length `N` through a complex transform of `N / 2`.
///
/// Even samples go to the real part, odd samples to the imaginary part, and the
/// two interleaved spectra are separated afterwards using conjugate symmetry.
pub(crate) struct R2CFftEvenInterceptor<T> {
    intercept: Box<dyn FftExecutor<T> + Send + Sync>,
    twiddles: Vec<Complex<T>>,
    length: usize,
}

impl<T: FftSample> R2CFftEvenInterceptor<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn install(length: usize, intercept: Box<dyn FftExecutor<T> + Send + Sync>) -> Self {
        assert_eq!(length % 2, 0, "R2C must be even in even interceptor");
        assert_eq!(
            intercept.length(),
            length / 2,
            "Underlying interceptor must have a half-length of real values"
        );
        assert_eq!(
            intercept.direction(),
            FftDirection::Forward,
            "Real to complex fft must be forward"
        );

        let twiddles = (0..length / 2)
            .map(|k| compute_twiddle(k, length, FftDirection::Forward))
            .collect();

        Self {
            intercept,
            twiddles,
            length,
        }
    }
}

impl<T: FftSample> R2CFftExecutor<T> for R2CFftEvenInterceptor<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, input: &[T], output: &mut [Complex<T>]) {
        assert_eq!(
            input.len(),
            self.length,
            "Input length expected to be {}, but it was {}",
            self.length,
            input.len()
        );
        assert_eq!(
            output.len(),
            self.length,
            "Output length expected to be {}, but it was {}",
            self.length,
            output.len()
        );

        let half = self.length / 2;
        let mut scratch = input
            .chunks_exact(2)
            .map(|pair| Complex::new(pair[0], pair[1]))
            .collect::<Vec<_>>();

        self.intercept.execute(&mut scratch);

        let (dc, nyquist) = real_two_point(scratch[0].re, scratch[0].im);
        output[0] = Complex::new(dc, T::zero());
        output[half] = Complex::new(nyquist, T::zero());

        let one_half: T = 0.5f64.as_();

        for k in 1..half {
            let current = scratch[k];
            let mirrored = scratch[half - k].conj();
            let even = (current + mirrored) * one_half;
            // (current - mirrored) / 2i
            let diff = (current - mirrored) * one_half;
            let odd = Complex {
                re: diff.im,
                im: -diff.re,
            };
            let value = even + c_mul_fast(self.twiddles[k], odd);
            output[k] = value;
            output[self.length - k] = value.conj();
        }
    }
}

/// Inverse of [`R2CFftEvenInterceptor`]: rebuilds the packed half length spectrum
/// from a Hermitian one and writes real output through an inverse transform of `N / 2`.
pub(crate) struct C2RFftEvenInterceptor<T> {
    intercept: Box<dyn FftExecutor<T> + Send + Sync>,
    twiddles: Vec<Complex<T>>,
    length: usize,
}

impl<T: FftSample> C2RFftEvenInterceptor<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn install(length: usize, intercept: Box<dyn FftExecutor<T> + Send + Sync>) -> Self {
        assert_eq!(length % 2, 0, "C2R must be even in even interceptor");
        assert_eq!(
            intercept.length(),
            length / 2,
            "Underlying interceptor must have a half-length of real values"
        );
        assert_eq!(
            intercept.direction(),
            FftDirection::Inverse,
            "Complex to real fft must be inverse"
        );

        let twiddles = (0..length / 2)
            .map(|k| compute_twiddle(k, length, FftDirection::Inverse))
            .collect();

        Self {
            intercept,
            twiddles,
            length,
        }
    }
}

impl<T: FftSample> C2RFftExecutor<T> for C2RFftEvenInterceptor<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, input: &[Complex<T>], output: &mut [T]) {
        let half = self.length / 2;
        assert!(
            input.len() > half,
            "Input length expected to be at least {}, but it was {}",
            half + 1,
            input.len()
        );
        assert_eq!(
            output.len(),
            self.length,
            "Output length expected to be {}, but it was {}",
            self.length,
            output.len()
        );

        let mut scratch = vec![Complex::<T>::zero(); half];

        let (sum, diff) = real_two_point(input[0].re, input[half].re);
        scratch[0] = Complex::new(sum, diff);

        for k in 1..half {
            let current = input[k];
            let mirrored = input[half - k].conj();
            scratch[k] = (current + mirrored)
                + rotate_90(c_mul_fast(self.twiddles[k], current - mirrored));
        }

        self.intercept.execute(&mut scratch);

        for (dst, src) in output.chunks_exact_mut(2).zip(scratch.iter()) {
            dst[0] = src.re;
            dst[1] = src.im;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::Dft;
    use crate::radix2::Radix2;
    use rand::Rng;

    fn make_r2c(length: usize) -> R2CFftEvenInterceptor<f64> {
        R2CFftEvenInterceptor::install(
            length,
            Box::new(Radix2::<f64>::new(length / 2, FftDirection::Forward)),
        )
    }

    fn make_c2r(length: usize) -> C2RFftEvenInterceptor<f64> {
        C2RFftEvenInterceptor::install(
            length,
            Box::new(Radix2::<f64>::new(length / 2, FftDirection::Inverse)),
        )
    }

    #[test]
    fn test_real_two_point() {
        assert_eq!(real_two_point(5.0f64, 3.0), (8.0, 2.0));
        assert_eq!(real_two_point(-1.5f64, 0.5), (-1.0, -2.0));
    }

    #[test]
    fn test_r2c_matches_dft() {
        for i in 1..11 {
            let size = 2usize.pow(i);
            let src = (0..size)
                .map(|_| rand::rng().random())
                .collect::<Vec<f64>>();
            let mut reference = src
                .iter()
                .map(|&x| Complex::new(x, 0.0))
                .collect::<Vec<_>>();
            Dft::new(size, FftDirection::Forward).execute(&mut reference);

            let mut output = vec![Complex::<f64>::zero(); size];
            make_r2c(size).execute(&src, &mut output);

            reference
                .iter()
                .zip(output.iter())
                .enumerate()
                .for_each(|(idx, (a, b))| {
                    assert!(
                        (a.re - b.re).abs() < 1e-8,
                        "a_re {} != b_re {} at {idx} for size {size}",
                        a.re,
                        b.re,
                    );
                    assert!(
                        (a.im - b.im).abs() < 1e-8,
                        "a_im {} != b_im {} at {idx} for size {size}",
                        a.im,
                        b.im,
                    );
                });
        }
    }

    #[test]
    fn test_r2c_two_point_writes_mirrored_slots() {
        let mut output = vec![Complex::<f64>::zero(); 2];
        make_r2c(2).execute(&[5.0, 3.0], &mut output);
        assert_eq!(output, vec![Complex::new(8.0, 0.0), Complex::new(2.0, 0.0)]);
    }

    #[test]
    fn test_c2r_matches_complex_inverse() {
        for i in 1..11 {
            let size = 2usize.pow(i);
            let signal = (0..size)
                .map(|_| rand::rng().random())
                .collect::<Vec<f64>>();
            let mut spectrum = signal
                .iter()
                .map(|&x| Complex::new(x, 0.0))
                .collect::<Vec<_>>();
            Dft::new(size, FftDirection::Forward).execute(&mut spectrum);

            let mut reference = spectrum.to_vec();
            Dft::new(size, FftDirection::Inverse).execute(&mut reference);

            let mut output = vec![0f64; size];
            make_c2r(size).execute(&spectrum[..size / 2 + 1], &mut output);

            for (idx, (a, b)) in reference.iter().zip(output.iter()).enumerate() {
                assert!(
                    (a.re - b).abs() < 1e-8,
                    "a_re {} != b {} at {idx} for size {size}",
                    a.re,
                    b,
                );
                assert!(
                    (b / size as f64 - signal[idx]).abs() < 1e-10,
                    "roundtrip {} != {} at {idx} for size {size}",
                    b / size as f64,
                    signal[idx],
                );
            }
        }
    }

    #[test]
    fn test_c2r_two_point() {
        let mut output = vec![0f64; 2];
        make_c2r(2).execute(&[Complex::new(5.0, 0.0), Complex::new(3.0, 0.0)], &mut output);
        assert_eq!(output, vec![8.0, 2.0]);
    }
}
