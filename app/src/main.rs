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
use fourier_conv::{Complex, bluestein_fft, convolve, direct_convolve, fft, ifft};
use rand::Rng;
use rustfft::FftPlanner;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn random_signal(size: usize) -> Vec<Complex<f64>> {
    (0..size)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect()
}

fn max_error(a: &[Complex<f64>], b: &[Complex<f64>]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0f64, f64::max)
}

fn compare_with_rustfft(size: usize) {
    let signal = random_signal(size);

    let start = Instant::now();
    let spectrum = fft(&signal);
    let ours = start.elapsed();

    let mut reference = signal
        .iter()
        .map(|x| rustfft::num_complex::Complex::new(x.re, x.im))
        .collect::<Vec<_>>();
    let start = Instant::now();
    FftPlanner::<f64>::new()
        .plan_fft_forward(size)
        .process(&mut reference);
    let theirs = start.elapsed();
    let reference = reference
        .iter()
        .map(|x| Complex::new(x.re, x.im))
        .collect::<Vec<_>>();

    let restored = ifft(&spectrum)
        .iter()
        .map(|&x| x / size as f64)
        .collect::<Vec<_>>();

    info!(
        size,
        error = max_error(&reference, &spectrum),
        roundtrip = max_error(&signal, &restored),
        fourier_us = ours.as_micros() as u64,
        rustfft_us = theirs.as_micros() as u64,
        "forward transform"
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    for size in [16, 17, 100, 256, 1000, 1024, 4093, 4096] {
        compare_with_rustfft(size);
    }

    let signal = random_signal(300);
    let dispatched = fft(&signal);
    let forced = bluestein_fft(&signal);
    info!(
        error = max_error(&dispatched, &forced),
        "dispatcher against forced bluestein"
    );

    let row = (0..640)
        .map(|_| rand::rng().random_range(0.0..255.0))
        .collect::<Vec<f64>>();
    let kernel = (-8..=8)
        .map(|x: i32| (-(x * x) as f64 / 18.).exp())
        .collect::<Vec<f64>>();
    let norm: f64 = kernel.iter().sum();
    let kernel = kernel.iter().map(|x| x / norm).collect::<Vec<f64>>();
    let fast = convolve(&row, &kernel);
    let direct = direct_convolve(&row, &kernel);
    let error = fast
        .iter()
        .zip(direct.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0f64, f64::max);
    info!(length = fast.len(), error, "gaussian row blur");
}
