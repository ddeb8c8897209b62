// src/naive.rs

use alloc::vec::Vec;
use num_complex::Complex;

use crate::common::{DftProcess, Precision, angle_step, rotation};

/// Direct O(n²) evaluation of the transform definition.
///
/// Slow, but accepts any length and has no moving parts, which makes
/// it the reference oracle the fast variants are tested against.
pub struct NaiveDft {
    inverted: bool,
}

impl NaiveDft {
    pub fn new(inverted: bool) -> Self {
        Self { inverted }
    }

    pub fn process<T: Precision>(&self, buffer: &mut [Complex<T>]) {
        let n = buffer.len();
        if n == 0 {
            return;
        }

        // Every output bin reads every input sample, so the inputs
        // must be copied before the first bin is overwritten.
        let samples: Vec<Complex<T>> = buffer.to_vec();

        let omega = angle_step::<T>(n, self.inverted);
        let scale = if self.inverted {
            T::one() / T::from_usize(n).unwrap()
        } else {
            T::one()
        };

        for (k, out) in buffer.iter_mut().enumerate() {
            let mut sum = Complex::new(T::zero(), T::zero());
            for (i, sample) in samples.iter().enumerate() {
                let angle = omega * T::from_usize(k).unwrap() * T::from_usize(i).unwrap();
                sum = sum + *sample * rotation(angle);
            }
            *out = sum.scale(scale);
        }
    }
}

impl<T: Precision> DftProcess<T> for NaiveDft {
    fn process(&self, buffer: &mut [Complex<T>]) {
        self.process(buffer)
    }
}

#[cfg(test)]
#[path = "naive_tests.rs"]
mod tests;
