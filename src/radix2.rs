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
use crate::util::{bit_reverse_indices, compute_twiddle, is_radix2_length, permute_inplace};
use crate::{FftDirection, FftExecutor};
use num_complex::Complex;
use num_traits::AsPrimitive;

pub(crate) struct Radix2<T> {
    twiddles: Vec<Complex<T>>,
    permutations: Vec<usize>,
    execution_length: usize,
    direction: FftDirection,
}

/// Twiddles of the full length, `exp(-2*pi*i*j/size)` for `j < size / 2`.
///
/// A stage of length `len` reads them with stride `size / len`, so every factor
/// comes straight from `sincos_pi` instead of a running product.
fn radix2_twiddles<T: FftSample>(size: usize, fft_direction: FftDirection) -> Vec<Complex<T>>
where
    f64: AsPrimitive<T>,
{
    (0..size / 2)
        .map(|j| compute_twiddle(j, size, fft_direction))
        .collect()
}

impl<T: FftSample> Radix2<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> Radix2<T> {
        assert!(
            is_radix2_length(size),
            "Input length must be a power of 2, but it was {size}"
        );

        Radix2 {
            twiddles: radix2_twiddles(size, fft_direction),
            permutations: bit_reverse_indices(size),
            execution_length: size,
            direction: fft_direction,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Radix2<T>
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

        if self.execution_length < 2 {
            return;
        }

        permute_inplace(in_place, &self.permutations);

        // Two point stage, twiddle is always 1
        for pair in in_place.chunks_exact_mut(2) {
            let u = pair[0];
            let v = pair[1];
            pair[0] = u + v;
            pair[1] = u - v;
        }

        let mut len = 4;
        while len <= self.execution_length {
            let half = len / 2;
            let stride = self.execution_length / len;
            for data in in_place.chunks_exact_mut(len) {
                let (lo, hi) = data.split_at_mut(half);
                for (j, (u, v)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                    let t = c_mul_fast(self.twiddles[j * stride], *v);
                    let a = *u;
                    *u = a + t;
                    *v = a - t;
                }
            }
            len *= 2;
        }
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

    #[test]
    fn test_radix2() {
        for i in 0..14 {
            let size = 2usize.pow(i);
            let mut input = vec![Complex::<f64>::default(); size];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let src = input.to_vec();
            let radix_forward = Radix2::new(size, FftDirection::Forward);
            let radix_inverse = Radix2::new(size, FftDirection::Inverse);
            radix_forward.execute(&mut input);
            radix_inverse.execute(&mut input);

            input = input
                .iter()
                .map(|&x| x * (1.0 / input.len() as f64))
                .collect();

            input.iter().zip(src.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re - b.re).abs() < 1e-9,
                    "a_re {} != b_re {} for size {}",
                    a.re,
                    b.re,
                    size
                );
                assert!(
                    (a.im - b.im).abs() < 1e-9,
                    "a_im {} != b_im {} for size {}",
                    a.im,
                    b.im,
                    size
                );
            });
        }
    }

    #[test]
    fn test_radix2_matches_dft() {
        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            for i in 0..10 {
                let size = 2usize.pow(i);
                let src = (0..size)
                    .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
                    .collect::<Vec<Complex<f64>>>();
                let mut reference = src.to_vec();
                Dft::new(size, direction).execute(&mut reference);
                let mut working = src.to_vec();
                Radix2::new(size, direction).execute(&mut working);
                for (idx, (a, b)) in reference.iter().zip(working.iter()).enumerate() {
                    assert!(
                        (a.re - b.re).abs() < 1e-8,
                        "a_re {} != b_re {} at {idx} for size {size}",
                        a.re,
                        b.re
                    );
                    assert!(
                        (a.im - b.im).abs() < 1e-8,
                        "a_im {} != b_im {} at {idx} for size {size}",
                        a.im,
                        b.im
                    );
                }
            }
        }
    }

    #[test]
    fn test_radix2_two_point() {
        let mut data = [Complex::new(3.0f64, 1.0), Complex::new(0.5, -2.0)];
        Radix2::new(2, FftDirection::Forward).execute(&mut data);
        assert_eq!(data[0], Complex::new(3.5, -1.0));
        assert_eq!(data[1], Complex::new(2.5, 3.0));
    }

    #[test]
    #[should_panic(expected = "power of 2")]
    fn test_radix2_rejects_odd_length() {
        let _ = Radix2::<f64>::new(12, FftDirection::Forward);
    }
}
