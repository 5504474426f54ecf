//! A slot that holds exactly one value out of a closed set of alternatives:
//! an `i32`, an `f32` or a fixed-capacity text.
//!
//! Reading the slot through the wrong alternative is an error, never a
//! reinterpretation of the stored bytes.
//!
//! ```
//! use value_slot::{Kind, ValueSlot};
//!
//! let mut slot: ValueSlot = ValueSlot::default();
//! slot.assign(42);
//! assert_eq!(slot.get::<i32>(), Ok(&42));
//!
//! slot.assign(3.14f32);
//! assert_eq!(slot.active_kind(), Kind::Float);
//! assert!(slot.get::<i32>().is_err());
//! ```
#![cfg_attr(not(test), no_std)]

use core::fmt;

/// Text capacity used by `ValueSlot` when none is given.
pub const DEFAULT_TEXT_CAPACITY: usize = 32;

/// The text alternative. Stored inline, `N` bytes at most.
pub type Text<const N: usize> = heapless::String<N>;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Float,
    Text,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Integer, Kind::Float, Kind::Text];

    /// Position of the alternative in declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Text => "text",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The slot was read through an alternative that is not active.
    TypeMismatch { expected: Kind, found: Kind },
    /// Text does not fit in the slot's text capacity.
    TextTooLong { len: usize, capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            Error::TextTooLong { len, capacity } => {
                write!(f, "text too long: {} bytes, capacity {}", len, capacity)
            }
        }
    }
}

/// The stored alternative.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq)]
pub enum Value<const N: usize> {
    Integer(i32),
    Float(f32),
    Text(Text<N>),
}

impl<const N: usize> Value<N> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
        }
    }

    /// Copies `text` into a text alternative.
    pub fn text(text: &str) -> Result<Self, Error> {
        let mut s = Text::<N>::new();
        s.push_str(text).map_err(|_| Error::TextTooLong {
            len: text.len(),
            capacity: N,
        })?;
        Ok(Value::Text(s))
    }
}

impl<const N: usize> fmt::Display for Value<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v.as_str()),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl<const N: usize> Sealed for heapless::String<N> {}
}

/// A type that may be stored in a `ValueSlot<N>`.
///
/// Sealed: the set of alternatives is closed.
pub trait Alternative<const N: usize>: sealed::Sealed + Sized {
    const KIND: Kind;

    fn from_value(value: &Value<N>) -> Option<&Self>;
    fn from_value_mut(value: &mut Value<N>) -> Option<&mut Self>;
    fn into_value(self) -> Value<N>;
}

macro_rules! alternative {
    ($t:ty, $variant:ident) => {
        impl<const N: usize> Alternative<N> for $t {
            const KIND: Kind = Kind::$variant;

            fn from_value(value: &Value<N>) -> Option<&Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn from_value_mut(value: &mut Value<N>) -> Option<&mut Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_value(self) -> Value<N> {
                Value::$variant(self)
            }
        }
    };
}

alternative!(i32, Integer);
alternative!(f32, Float);
alternative!(Text<N>, Text);

/// Holds exactly one alternative at a time.
///
/// Assigning a new alternative drops the previous one first. A fresh slot
/// holds integer `0`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSlot<const N: usize = DEFAULT_TEXT_CAPACITY> {
    value: Value<N>,
}

impl<const N: usize> ValueSlot<N> {
    pub fn new<T: Alternative<N>>(value: T) -> Self {
        Self {
            value: value.into_value(),
        }
    }

    pub fn assign<T: Alternative<N>>(&mut self, value: T) {
        self.value = value.into_value();
    }

    pub fn assign_value(&mut self, value: Value<N>) {
        self.value = value;
    }

    /// Stores `value` and hands back the alternative it replaced.
    pub fn replace<T: Alternative<N>>(&mut self, value: T) -> Value<N> {
        core::mem::replace(&mut self.value, value.into_value())
    }

    /// Stores a copy of `text`. On error the slot keeps its current value.
    pub fn set_text(&mut self, text: &str) -> Result<(), Error> {
        self.value = Value::text(text)?;
        Ok(())
    }

    pub fn get<T: Alternative<N>>(&self) -> Result<&T, Error> {
        T::from_value(&self.value).ok_or(Error::TypeMismatch {
            expected: T::KIND,
            found: self.value.kind(),
        })
    }

    pub fn get_mut<T: Alternative<N>>(&mut self) -> Result<&mut T, Error> {
        let found = self.value.kind();
        T::from_value_mut(&mut self.value).ok_or(Error::TypeMismatch {
            expected: T::KIND,
            found,
        })
    }

    pub fn get_text(&self) -> Result<&str, Error> {
        self.get::<Text<N>>().map(|s| s.as_str())
    }

    pub fn holds<T: Alternative<N>>(&self) -> bool {
        self.value.kind() == T::KIND
    }

    pub fn active_kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn as_value(&self) -> &Value<N> {
        &self.value
    }

    pub fn into_value(self) -> Value<N> {
        self.value
    }
}

impl<const N: usize> Default for ValueSlot<N> {
    fn default() -> Self {
        Self::new(0i32)
    }
}

impl<const N: usize> From<Value<N>> for ValueSlot<N> {
    fn from(value: Value<N>) -> Self {
        Self { value }
    }
}

impl<const N: usize> From<i32> for ValueSlot<N> {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<f32> for ValueSlot<N> {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<Text<N>> for ValueSlot<N> {
    fn from(value: Text<N>) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> fmt::Display for ValueSlot<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Slot = ValueSlot<DEFAULT_TEXT_CAPACITY>;

    fn text(s: &str) -> Text<DEFAULT_TEXT_CAPACITY> {
        let mut t = Text::new();
        t.push_str(s).unwrap();
        t
    }

    // reads the slot through the alternative named by `kind`
    fn read(slot: &Slot, kind: Kind) -> Result<(), Error> {
        match kind {
            Kind::Integer => slot.get::<i32>().map(|_| ()),
            Kind::Float => slot.get::<f32>().map(|_| ()),
            Kind::Text => slot.get::<Text<DEFAULT_TEXT_CAPACITY>>().map(|_| ()),
        }
    }

    fn sample(kind: Kind) -> Slot {
        match kind {
            Kind::Integer => Slot::new(-7),
            Kind::Float => Slot::new(0.5f32),
            Kind::Text => Slot::new(text("abc")),
        }
    }

    #[test]
    fn assign_then_get_returns_same_value() {
        let mut slot = Slot::default();
        for v in [i32::MIN, -1, 0, 1, 42, i32::MAX] {
            slot.assign(v);
            assert_eq!(slot.get::<i32>(), Ok(&v));
        }
        for v in [-1.5f32, 0.0, 3.14, f32::MAX] {
            slot.assign(v);
            assert_eq!(slot.get::<f32>(), Ok(&v));
        }
        for s in ["", "hello", "0123456789abcdef0123456789abcdef"] {
            slot.set_text(s).unwrap();
            assert_eq!(slot.get_text(), Ok(s));
        }
    }

    #[test]
    fn wrong_alternative_is_type_mismatch() {
        for held in Kind::ALL {
            let slot = sample(held);
            for asked in Kind::ALL {
                let res = read(&slot, asked);
                if asked == held {
                    assert!(res.is_ok());
                } else {
                    assert_eq!(
                        res,
                        Err(Error::TypeMismatch {
                            expected: asked,
                            found: held
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn active_kind_follows_assignment() {
        let mut slot = Slot::default();
        assert_eq!(slot.active_kind(), Kind::Integer);
        slot.assign(1.0f32);
        assert_eq!(slot.active_kind(), Kind::Float);
        assert!(slot.holds::<f32>());
        slot.assign(text("x"));
        assert_eq!(slot.active_kind(), Kind::Text);
        assert!(!slot.holds::<i32>());
        slot.assign(5);
        assert_eq!(slot.active_kind(), Kind::Integer);
    }

    #[test]
    fn text_replaced_by_integer_is_gone() {
        let mut slot = Slot::new(text("hello"));
        slot.assign(7);
        assert_eq!(
            slot.get_text(),
            Err(Error::TypeMismatch {
                expected: Kind::Text,
                found: Kind::Integer
            })
        );
        assert_eq!(slot.get::<i32>(), Ok(&7));
    }

    #[test]
    fn sketch_sequence() {
        let mut slot = Slot::default();
        slot.assign(42);
        assert_eq!(*slot.get::<i32>().unwrap(), 42);

        slot.assign(3.14f32);
        assert!((*slot.get::<f32>().unwrap() - 3.14).abs() < f32::EPSILON);
        assert!(slot.get::<i32>().is_err());

        slot.set_text("hello").unwrap();
        assert_eq!(slot.get_text().unwrap(), "hello");
    }

    #[test]
    fn long_text_leaves_slot_unchanged() {
        let mut slot = ValueSlot::<4>::new(9);
        assert_eq!(
            slot.set_text("hello"),
            Err(Error::TextTooLong {
                len: 5,
                capacity: 4
            })
        );
        assert_eq!(slot.get::<i32>(), Ok(&9));
    }

    #[test]
    fn replace_returns_previous() {
        let mut slot = Slot::new(text("old"));
        let prev = slot.replace(2.5f32);
        assert_eq!(prev, Value::Text(text("old")));
        assert_eq!(slot.get::<f32>(), Ok(&2.5));
    }

    #[test]
    fn get_mut_writes_through() {
        let mut slot = Slot::new(41);
        *slot.get_mut::<i32>().unwrap() += 1;
        assert_eq!(slot.get::<i32>(), Ok(&42));
        assert!(slot.get_mut::<f32>().is_err());
    }

    #[test]
    fn value_round_trip() {
        let mut slot = Slot::from(Value::Text(text("hi")));
        assert_eq!(slot.as_value(), &Value::Text(text("hi")));

        slot.assign_value(Value::Float(1.5));
        assert_eq!(slot.get::<f32>(), Ok(&1.5));
        assert_eq!(slot.clone().into_value(), Value::Float(1.5));

        assert_eq!(Slot::from(3i32).into_value(), Value::Integer(3));
        assert_eq!(Slot::from(0.25f32).as_value(), &Value::Float(0.25));
        assert_eq!(Slot::from(text("abc")).get_text(), Ok("abc"));
    }

    #[test]
    fn kind_order_and_names() {
        assert_eq!(Kind::Integer.index(), 0);
        assert_eq!(Kind::Float.index(), 1);
        assert_eq!(Kind::Text.index(), 2);
        assert_eq!(format!("{}", Kind::Float), "float");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Slot::new(42)), "42");
        assert_eq!(format!("{}", Slot::new(text("hello"))), "hello");
        let err = Error::TypeMismatch {
            expected: Kind::Integer,
            found: Kind::Float,
        };
        assert_eq!(
            format!("{}", err),
            "type mismatch: expected integer, found float"
        );
    }
}
