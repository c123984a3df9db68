#![no_main]

use fourier_conv::{dft, fft, idft, ifft};
use libfuzzer_sys::fuzz_target;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    size: u8,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if !data.re.is_finite() || !data.im.is_finite() || data.re.abs() > 1e6 || data.im.abs() > 1e6
    {
        return;
    }
    let size = data.size as usize;
    let chunk = (0..size)
        .map(|i| Complex::new(data.re * i as f64, data.im - i as f64))
        .collect::<Vec<_>>();
    let (fast, reference) = if data.forward {
        (fft(&chunk), dft(&chunk))
    } else {
        (ifft(&chunk), idft(&chunk))
    };
    assert_eq!(fast.len(), size);
    let magnitude = chunk.iter().map(|x| x.norm()).sum::<f64>().max(1.);
    for (a, b) in fast.iter().zip(reference.iter()) {
        assert!(
            (a - b).norm() <= magnitude * 1e-9,
            "fast {a} != reference {b} for size {size}"
        );
    }
});
