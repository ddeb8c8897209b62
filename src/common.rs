// src/common.rs

use num_complex::Complex;
use num_traits::{Float, FloatConst, FromPrimitive};

/// Floating precision usable for transform samples (f32 or f64).
///
/// The bound pulls in the trig, constants and casting support the
/// kernels need; it is blanket-implemented, so callers never name it
/// except in generic signatures.
pub trait Precision: Float + FloatConst + FromPrimitive {}

impl<T: Float + FloatConst + FromPrimitive> Precision for T {}

/// Common interface of the three transform variants, so they can be
/// swapped behind one object-safe seam.
///
/// The forward/inverse choice is fixed when the variant is
/// constructed; `process` itself takes only the buffer. Invalid
/// lengths never fail: the fast variants leave a non-power-of-two
/// buffer untouched, and an empty buffer is a no-op everywhere.
pub trait DftProcess<T: Precision> {
    fn process(&self, buffer: &mut [Complex<T>]);
}

/// Angle step `s * 2π / n`, with `s = +1` for the inverse transform
/// and `s = -1` for the forward one.
pub(crate) fn angle_step<T: Precision>(n: usize, inverted: bool) -> T {
    let step = T::TAU() / T::from_usize(n).unwrap();
    if inverted { step } else { -step }
}

/// Unit rotation `e^(i*angle)`.
pub(crate) fn rotation<T: Precision>(angle: T) -> Complex<T> {
    Complex::new(angle.cos(), angle.sin())
}
