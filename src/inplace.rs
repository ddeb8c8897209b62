// src/inplace.rs

use num_complex::Complex;

use crate::common::{DftProcess, Precision, angle_step, rotation};

/// Iterative in-place radix-2 Cooley-Tukey transform, O(n log n).
///
/// Bit-reverses the buffer, then runs butterfly passes of doubling
/// stage length directly on the caller's storage; no scratch beyond a
/// handful of locals per stage. Power-of-two lengths only, same
/// silent no-op policy as [`crate::RecursiveDft`] for anything else.
///
/// Unlike the recursive variant, the inverse normalisation here is
/// the conventional single division by n at the end; the two agree
/// only up to floating-point rounding.
pub struct InplaceDft {
    inverted: bool,
}

impl InplaceDft {
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

        bit_reverse(buffer);

        let mut len = 2;
        while len <= n {
            let half = len / 2;
            let rot = rotation(angle_step::<T>(len, self.inverted));
            for block in buffer.chunks_exact_mut(len) {
                let mut w = Complex::new(T::one(), T::zero());
                for j in 0..half {
                    let u = block[j];
                    let v = block[j + half] * w;
                    block[j] = u + v;
                    block[j + half] = u - v;
                    w = w * rot;
                }
            }
            len <<= 1;
        }

        if self.inverted {
            let n_t = T::from_usize(n).unwrap();
            for sample in buffer.iter_mut() {
                *sample = sample.unscale(n_t);
            }
        }
    }
}

/// In-place bit-reversal permutation: the element at index `i` ends up
/// at the reversal of `i`'s bits within log2(n) bits.
///
/// `j` tracks the reversed counterpart of `i` incrementally: each step
/// clears the set bits from the top down to the first clear one, then
/// sets that one (the mirrored version of binary increment).
fn bit_reverse<U>(buffer: &mut [U]) {
    let n = buffer.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            buffer.swap(i, j);
        }
    }
}

impl<T: Precision> DftProcess<T> for InplaceDft {
    fn process(&self, buffer: &mut [Complex<T>]) {
        self.process(buffer)
    }
}

#[cfg(test)]
#[path = "inplace_tests.rs"]
mod tests;
