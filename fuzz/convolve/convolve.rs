#![no_main]

use fourier_conv::{circular_convolve, convolve, direct_convolve, negacyclic_convolve};
use libfuzzer_sys::fuzz_target;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    a: Vec<i16>,
    b: Vec<i16>,
}

fuzz_target!(|data: Target| {
    if data.a.len() > 512 || data.b.len() > 512 {
        return;
    }
    let a = data.a.iter().map(|&x| x as f64).collect::<Vec<_>>();
    let b = data.b.iter().map(|&x| x as f64).collect::<Vec<_>>();

    let fast = convolve(&a, &b);
    let direct = direct_convolve(&a, &b);
    assert_eq!(fast.len(), direct.len());
    // integer inputs give integer products, every output must round back exactly
    for (x, y) in fast.iter().zip(direct.iter()) {
        assert_eq!(x.round(), *y, "fast {x} != direct {y}");
    }

    let size = a.len().min(b.len());
    let (a, b) = (&a[..size], &b[..size]);
    let direct = direct_convolve(a, b);
    let circular = circular_convolve(a, b);
    let negacyclic = negacyclic_convolve(a, b);
    assert_eq!(circular.len(), size);
    assert_eq!(negacyclic.len(), size);
    for i in 0..size {
        let tail = direct.get(i + size).copied().unwrap_or(0.);
        let wrapped = direct[i] + tail;
        let negated = direct[i] - tail;
        assert_eq!(circular[i].round(), wrapped, "circular {} != {wrapped}", circular[i]);
        assert_eq!(negacyclic[i].round(), negated, "negacyclic {} != {negated}", negacyclic[i]);
    }
});
