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
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use fourier_conv::{Complex, fft};
use rand::Rng;
use rustfft::FftPlanner;
use std::hint::black_box;

fn make_signal(size: usize) -> Vec<Complex<f64>> {
    (0..size)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect()
}

pub fn bench_power_of_two(c: &mut Criterion) {
    for size in [256usize, 4096] {
        let signal = make_signal(size);
        c.bench_function(format!("fourier complex {size}").as_str(), |b| {
            b.iter(|| black_box(fft(black_box(&signal))))
        });
        let real = signal.iter().map(|x| x.re).collect::<Vec<f64>>();
        c.bench_function(format!("fourier real {size}").as_str(), |b| {
            b.iter(|| black_box(fft(black_box(&real))))
        });
        c.bench_function(format!("rustfft complex {size}").as_str(), |b| {
            let plan = FftPlanner::<f64>::new().plan_fft_forward(size);
            let src = signal
                .iter()
                .map(|x| rustfft::num_complex::Complex::new(x.re, x.im))
                .collect::<Vec<_>>();
            b.iter_batched(
                || src.to_vec(),
                |mut working| plan.process(&mut working),
                BatchSize::SmallInput,
            )
        });
    }
}

pub fn bench_arbitrary_length(c: &mut Criterion) {
    for size in [251usize, 1000, 4093] {
        let signal = make_signal(size);
        c.bench_function(format!("fourier bluestein {size}").as_str(), |b| {
            b.iter(|| black_box(fft(black_box(&signal))))
        });
        c.bench_function(format!("rustfft {size}").as_str(), |b| {
            let plan = FftPlanner::<f64>::new().plan_fft_forward(size);
            let src = signal
                .iter()
                .map(|x| rustfft::num_complex::Complex::new(x.re, x.im))
                .collect::<Vec<_>>();
            b.iter_batched(
                || src.to_vec(),
                |mut working| plan.process(&mut working),
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_power_of_two, bench_arbitrary_length);
criterion_main!(benches);
