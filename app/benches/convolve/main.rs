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
use criterion::{Criterion, criterion_group, criterion_main};
use fourier_conv::{circular_convolve, convolve, direct_convolve, negacyclic_convolve};
use rand::Rng;
use std::hint::black_box;

fn make_row(size: usize) -> Vec<f64> {
    (0..size).map(|_| rand::rng().random()).collect()
}

pub fn bench_linear(c: &mut Criterion) {
    let row = make_row(1920);
    for kernel_size in [9usize, 65, 257] {
        let kernel = make_row(kernel_size);
        c.bench_function(format!("convolve 1920x{kernel_size}").as_str(), |b| {
            b.iter(|| black_box(convolve(black_box(&row), black_box(&kernel))))
        });
        c.bench_function(format!("direct 1920x{kernel_size}").as_str(), |b| {
            b.iter(|| black_box(direct_convolve(black_box(&row), black_box(&kernel))))
        });
    }
}

pub fn bench_cyclic(c: &mut Criterion) {
    for size in [1024usize, 1000] {
        let a = make_row(size);
        let b_row = make_row(size);
        c.bench_function(format!("circular {size}").as_str(), |b| {
            b.iter(|| black_box(circular_convolve(black_box(&a), black_box(&b_row))))
        });
        c.bench_function(format!("negacyclic {size}").as_str(), |b| {
            b.iter(|| black_box(negacyclic_convolve(black_box(&a), black_box(&b_row))))
        });
    }
}

criterion_group!(benches, bench_linear, bench_cyclic);
criterion_main!(benches);
