#![cfg_attr(not(test), no_std)]
use core::ops::Add;

/// Primitive arithmetic types.
///
/// Sealed, so the set of types accepted by [`add_one`] is decided here and
/// checked at compile time.
pub trait Numeric: Copy + Add<Output = Self> + sealed::Sealed {
    const ONE: Self;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! numeric {
    ($($t:ty => $one:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {
                const ONE: Self = $one;
            }
        )*
    };
}

numeric!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

/// Returns `value + 1` in the type of `value`.
///
/// Overflow behaves like plain `+` on `T`: it panics when overflow checks
/// are on and wraps otherwise.
///
/// ```
/// assert_eq!(numeric::add_one(41), 42);
/// assert_eq!(numeric::add_one(255u16), 256);
/// ```
///
/// Text is not numeric.
/// ```compile_fail
/// numeric::add_one("hello");
/// ```
/// Neither are `bool` and `char`.
/// ```compile_fail
/// numeric::add_one(true);
/// ```
/// ```compile_fail
/// numeric::add_one('a');
/// ```
#[inline]
pub fn add_one<T: Numeric>(value: T) -> T {
    value + T::ONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(add_one(41), 42);
        assert_eq!(add_one(-1i8), 0);
        assert_eq!(add_one(i64::MAX - 1), i64::MAX);
        assert_eq!(add_one(u8::MAX - 1), u8::MAX);
        assert_eq!(add_one(0usize), 1);
        assert_eq!(add_one(u128::MAX - 1), u128::MAX);
        for v in i16::MIN..i16::MAX {
            assert_eq!(add_one(v), v + 1);
        }
    }

    #[test]
    fn floats() {
        assert!((add_one(2.14f32) - 3.14).abs() < 1e-6);
        assert_eq!(add_one(-1.0f64), 0.0);
        assert_eq!(add_one(0.5f64), 1.5);
        assert!(add_one(f32::NAN).is_nan());
        assert_eq!(add_one(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn float_rounding_is_the_types_own() {
        // 2^24 + 1 is not representable in f32
        let big = 16_777_216f32;
        assert_eq!(add_one(big), big);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn integer_overflow_is_not_saturated() {
        let _ = add_one(core::hint::black_box(u8::MAX));
    }
}
