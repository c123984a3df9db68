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
use crate::complex_fma::{c_conj_mul_fast, c_mul_fast};
use crate::traits::FftSample;
use num_complex::Complex;

// dst = a * b
pub(crate) fn mul<T: FftSample>(a: &[Complex<T>], b: &[Complex<T>], dst: &mut [Complex<T>]) {
    for ((dst, src), twiddle) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *dst = c_mul_fast(*src, *twiddle);
    }
}

// dst = dst * b * scale
pub(crate) fn mul_scaled_in_place<T: FftSample>(
    dst: &mut [Complex<T>],
    b: &[Complex<T>],
    scale: T,
) {
    for (dst, &other) in dst.iter_mut().zip(b.iter()) {
        *dst = c_mul_fast(*dst, other) * scale;
    }
}

// dst = (dst * b).conj()
pub(crate) fn mul_conjugate_in_place<T: FftSample>(dst: &mut [Complex<T>], b: &[Complex<T>]) {
    for (scratch_cell, &twiddle) in dst.iter_mut().zip(b.iter()) {
        *scratch_cell = c_mul_fast(*scratch_cell, twiddle).conj();
    }
}

// dst = a.conj() * b
pub(crate) fn conjugate_mul_by_b<T: FftSample>(
    a: &[Complex<T>],
    b: &[Complex<T>],
    dst: &mut [Complex<T>],
) {
    for ((buffer_entry, inner_entry), twiddle) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *buffer_entry = c_conj_mul_fast(*inner_entry, *twiddle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectrum_ops() {
        let a = [Complex::new(1.0f64, 2.0), Complex::new(-0.5, 0.25)];
        let b = [Complex::new(3.0f64, -1.0), Complex::new(2.0, 4.0)];

        let mut dst = [Complex::new(0.0f64, 0.0); 2];
        mul(&a, &b, &mut dst);
        assert_eq!(dst, [a[0] * b[0], a[1] * b[1]]);

        let mut scaled = a;
        mul_scaled_in_place(&mut scaled, &b, 0.5);
        assert_eq!(scaled, [a[0] * b[0] * 0.5, a[1] * b[1] * 0.5]);

        let mut conjugated = a;
        mul_conjugate_in_place(&mut conjugated, &b);
        assert_eq!(conjugated, [(a[0] * b[0]).conj(), (a[1] * b[1]).conj()]);

        conjugate_mul_by_b(&a, &b, &mut dst);
        assert_eq!(dst, [a[0].conj() * b[0], a[1].conj() * b[1]]);
    }
}
