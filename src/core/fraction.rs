//! Rational approximation of decimal results
//!
//! Non-integer results get a second reading as a fraction: the closest
//! fraction with a bounded denominator is computed from the continued
//! fraction expansion of the value, and its denominator decides whether
//! the decimal terminates (only factors of 2 and 5) or repeats forever.

use std::fmt;

/// A rational number stored in lowest terms with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Default denominator bound for [`Fraction::approximate`]
    pub const DEFAULT_MAX_DENOMINATOR: i64 = 1_000_000;

    /// Creates a reduced fraction; None when the denominator is zero
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self::reduced(numerator, denominator))
    }

    /// Returns the numerator (sign-carrying)
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator (always positive)
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns the fraction's value as a float
    #[must_use]
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Finds the closest fraction to `value` with denominator at most
    /// `max_denominator`, by walking the continued fraction expansion and
    /// stopping at the last convergent (or best semiconvergent) inside the
    /// bound.
    ///
    /// Returns None for non-finite values, a bound below 1, or magnitudes
    /// beyond f64 integer precision.
    #[must_use]
    pub fn approximate(value: f64, max_denominator: i64) -> Option<Self> {
        if !value.is_finite() || max_denominator < 1 {
            return None;
        }
        let negative = value < 0.0;
        let target = value.abs();
        if target > 1e15 {
            return None;
        }

        // Convergents p/q of the continued fraction [a0; a1, a2, ...]
        let (mut p0, mut q0, mut p1, mut q1): (i64, i64, i64, i64) = (0, 1, 1, 0);
        let mut remainder = target;

        for _ in 0..64 {
            let a = remainder.floor();
            let Some(p2) = (a as i64).checked_mul(p1).and_then(|v| v.checked_add(p0)) else {
                break;
            };
            let Some(q2) = (a as i64).checked_mul(q1).and_then(|v| v.checked_add(q0)) else {
                break;
            };

            if q2 > max_denominator {
                // The next convergent overshoots the bound; compare the best
                // semiconvergent inside it against the previous convergent.
                let k = (max_denominator - q0) / q1;
                let semi = (p0 + k * p1, q0 + k * q1);
                let conv = (p1, q1);
                let error = |(p, q): (i64, i64)| (target - p as f64 / q as f64).abs();
                let (num, den) = if semi.1 >= 1 && error(semi) < error(conv) {
                    semi
                } else {
                    conv
                };
                return Some(Self::signed(num, den, negative));
            }

            p0 = p1;
            q0 = q1;
            p1 = p2;
            q1 = q2;

            let frac = remainder - a;
            if frac < 1e-12 {
                break; // expansion is exact to within float noise
            }
            remainder = 1.0 / frac;
        }

        Some(Self::signed(p1, q1, negative))
    }

    /// Returns true if the fraction's decimal expansion terminates, i.e.
    /// the reduced denominator contains no prime factors other than 2 and 5
    #[must_use]
    pub const fn is_terminating(&self) -> bool {
        let mut den = self.denominator;
        while den % 2 == 0 {
            den /= 2;
        }
        while den % 5 == 0 {
            den /= 5;
        }
        den == 1
    }

    fn signed(numerator: i64, denominator: i64, negative: bool) -> Self {
        let numerator = if negative { -numerator } else { numerator };
        Self::reduced(numerator, denominator)
    }

    fn reduced(numerator: i64, denominator: i64) -> Self {
        let sign = if denominator < 0 { -1 } else { 1 };
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        if divisor == 0 {
            // 0/d reduces to 0/1
            return Self {
                numerator: 0,
                denominator: 1,
            };
        }
        Self {
            numerator: sign * numerator / divisor as i64,
            denominator: (denominator / divisor as i64).abs(),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
