// src/signal.rs
//
// Thin harness around the transform core: sampling a continuous
// signal into discrete points, and printing a sample sequence.
// Nothing here feeds back into the kernels.

use core::fmt::Display;

use num_complex::Complex;

use crate::common::Precision;

/// Samples `signal` at `count` evenly spaced points over the
/// half-open interval `[min, max)`: `t_i = min + i*(max-min)/count`.
pub fn sample_signal<T, F>(min: T, max: T, count: usize, signal: F) -> Vec<Complex<T>>
where
    T: Precision,
    F: Fn(T) -> Complex<T>,
{
    let dt = (max - min) / T::from_usize(count).unwrap();
    (0..count)
        .map(|i| signal(min + T::from_usize(i).unwrap() * dt))
        .collect()
}

/// Prints every sample with its magnitude under a heading line.
pub fn print_samples<T: Precision + Display>(samples: &[Complex<T>], label: &str) {
    println!("{label}");
    for (i, sample) in samples.iter().enumerate() {
        println!(
            "- x[{i}] = ({:.2}, {:.2}) |{:.2}|",
            sample.re,
            sample.im,
            sample.norm()
        );
    }
    println!();
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
