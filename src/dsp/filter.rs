#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Recursive (IIR) Coloring Filter
===============================

White noise has equal power at every frequency. Running it through a
low-order recursive filter tilts that spectrum; with poles close to DC the
result is "pink" - power falls roughly as 1/f.

Difference equation (order 3, four taps on each side):

    y[i] = b0·x[i] + b1·x[i-1] + b2·x[i-2] + b3·x[i-3]
                   - a1·y[i-1] - a2·y[i-2] - a3·y[i-3]

a0 is the normalising coefficient and is always 1.0.

Warm-up
-------

The first TAPS outputs have no full history and are left at exactly 0.0.
Filtering starts at index TAPS. This matters for reproducibility: the first
non-zero output reads x[1..=4] and y[1..=3] (which are zero), not a
zero-padded history before index 0.
*/

/// Taps per coefficient set, and the length of the zero warm-up.
pub const TAPS: usize = 4;

/// Feed-forward (`b`) and feedback (`a`) taps. Index 0 is the most recent sample.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IirCoefficients {
    pub b: [f64; TAPS],
    pub a: [f64; TAPS],
}

/// Pink noise coloring filter.
pub const PINK: IirCoefficients = IirCoefficients {
    b: [0.02109238, 0.07113478, 0.68873558, 1.0],
    a: [1.0, -2.49495602, 2.017265875, -0.5221894],
};

/// Noise colors with a coefficient table.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    Pink,
}

impl NoiseColor {
    pub fn coefficients(self) -> &'static IirCoefficients {
        match self {
            NoiseColor::Pink => &PINK,
        }
    }
}

impl IirCoefficients {
    /// One step of the difference equation at index `i` (requires `i >= TAPS - 1`).
    #[inline]
    fn step(&self, input: &[f64], output: &[f64], i: usize) -> f64 {
        let b = &self.b;
        let a = &self.a;
        b[0] * input[i] + b[1] * input[i - 1] + b[2] * input[i - 2] + b[3] * input[i - 3]
            - a[1] * output[i - 1]
            - a[2] * output[i - 2]
            - a[3] * output[i - 3]
    }

    /// Filter `input` into a new buffer of the same length.
    ///
    /// Outputs `0..TAPS` stay zero (see module notes).
    pub fn filter(&self, input: &[f64]) -> Vec<f64> {
        let mut output = vec![0.0f64; input.len()];
        for i in TAPS..input.len() {
            output[i] = self.step(input, &output, i);
        }
        output
    }
}
