// Illustrative entry point: sample sin(t), transform, print.

use std::f32::consts::PI;

use num_complex::Complex;
use rs_simple_dft::InplaceDft;
use rs_simple_dft::signal::{print_samples, sample_signal};

fn main() {
    let mut samples = sample_signal(-2.0 * PI, 2.0 * PI, 16, |t: f32| {
        Complex::new(t.sin(), 0.0)
    });
    print_samples(&samples, "sin(t) samples");

    let dft = InplaceDft::new(false);
    dft.process(&mut samples);
    print_samples(&samples, "sin(t) transform");
}
