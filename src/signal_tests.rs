use super::sample_signal;
use num_complex::Complex32;

#[test]
fn samples_are_evenly_spaced() {
    let samples = sample_signal(0.0f32, 4.0, 4, |t| Complex32::new(t, 0.0));

    assert_eq!(samples.len(), 4);
    for (i, sample) in samples.iter().enumerate() {
        assert!((sample.re - i as f32).abs() < 1e-6);
        assert_eq!(sample.im, 0.0);
    }
}

// The interval is half-open: max itself is never sampled.
#[test]
fn max_is_excluded() {
    let samples = sample_signal(0.0f32, 1.0, 8, |t| Complex32::new(t, 0.0));

    let last = samples.last().unwrap();
    assert!(last.re < 1.0);
    assert!((last.re - 0.875).abs() < 1e-6);
}

#[test]
fn zero_count_yields_empty() {
    let samples = sample_signal(0.0f32, 1.0, 0, |t| Complex32::new(t, 0.0));
    assert!(samples.is_empty());
}
