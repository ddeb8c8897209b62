// src/recursive.rs

use alloc::vec::Vec;
use num_complex::Complex;

use crate::common::{DftProcess, Precision, angle_step, rotation};

/// Recursive radix-2 Cooley-Tukey transform, O(n log n).
///
/// Splits the buffer into even/odd halves (copies, since each half is
/// recursed into independently) and butterfly-combines the
/// sub-results. Power-of-two lengths only; anything else is left
/// untouched (documented limitation, not an error).
///
/// The inverse normalisation is paid as a factor of 1/2 at every
/// recursion level, so the product over log2(n) levels comes out to
/// the usual 1/n.
pub struct RecursiveDft {
    inverted: bool,
}

impl RecursiveDft {
    pub fn new(inverted: bool) -> Self {
        Self { inverted }
    }

    pub fn process<T: Precision>(&self, buffer: &mut [Complex<T>]) {
        let n = buffer.len();
        if n == 0 {
            return;
        }
        if !n.is_power_of_two() {
            return;
        }

        compute(buffer, self.inverted);
    }
}

fn compute<T: Precision>(buffer: &mut [Complex<T>], inverted: bool) {
    let n = buffer.len();
    if n == 1 {
        return;
    }

    let half = n / 2;
    let mut evens: Vec<Complex<T>> = Vec::with_capacity(half);
    let mut odds: Vec<Complex<T>> = Vec::with_capacity(half);
    for pair in buffer.chunks_exact(2) {
        evens.push(pair[0]);
        odds.push(pair[1]);
    }
    compute(&mut odds, inverted);
    compute(&mut evens, inverted);

    let omega = angle_step::<T>(n, inverted);
    let scale = if inverted {
        T::from_f64(0.5).unwrap()
    } else {
        T::one()
    };
    for k in 0..half {
        let w = rotation(omega * T::from_usize(k).unwrap());
        let t = w * odds[k];
        buffer[k] = (evens[k] + t).scale(scale);
        buffer[k + half] = (evens[k] - t).scale(scale);
    }
}

impl<T: Precision> DftProcess<T> for RecursiveDft {
    fn process(&self, buffer: &mut [Complex<T>]) {
        self.process(buffer)
    }
}

#[cfg(test)]
#[path = "recursive_tests.rs"]
mod tests;
