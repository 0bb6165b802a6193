//! Naturally ordered values and their categories
//!
//! A heap built without a comparator orders its keys with their natural
//! ordering, so its element type must implement [`Orderable`]. The element
//! type is fixed at compile time, which already rules out mixing, say,
//! integers with strings. [`Orderable::category`] carries the remaining
//! runtime part of the type lock:
//!
//! - the first element inserted locks the container to its [`Category`];
//! - later elements of another category are rejected;
//! - [`Category::Composite`] values have no natural ordering and are always
//!   rejected unless a comparator was supplied.
//!
//! Statically typed element types report a single category, so the lock can
//! only trip for dynamically typed values such as [`Value`].

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;
use std::fmt;

/// Primitive category of a value, used by the type lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Integers and floating point numbers
    Number,
    /// Strings and string slices
    Text,
    /// Booleans
    Boolean,
    /// Unicode scalar values
    Character,
    /// Structured values (lists, records) with no natural ordering
    Composite,
}

impl Category {
    /// Whether values of this category can be ordered without a comparator
    pub fn is_orderable(self) -> bool {
        self != Category::Composite
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Number => "number",
            Category::Text => "text",
            Category::Boolean => "boolean",
            Category::Character => "character",
            Category::Composite => "composite",
        };
        f.write_str(name)
    }
}

/// A value with a natural ordering usable by comparator-less heaps
pub trait Orderable: PartialOrd {
    /// Runtime category of this value
    fn category(&self) -> Category;
}

macro_rules! impl_orderable {
    ($category:expr => $($t:ty),* $(,)?) => {
        $(
            impl Orderable for $t {
                #[inline]
                fn category(&self) -> Category {
                    $category
                }
            }
        )*
    };
}

impl_orderable!(Category::Number => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_orderable!(Category::Text => str, String);
impl_orderable!(Category::Boolean => bool);
impl_orderable!(Category::Character => char);

impl<T: Orderable + ?Sized> Orderable for &T {
    #[inline]
    fn category(&self) -> Category {
        (**self).category()
    }
}

impl<T: Orderable + ?Sized> Orderable for Box<T> {
    #[inline]
    fn category(&self) -> Category {
        (**self).category()
    }
}

impl<T: Orderable> Orderable for Reverse<T> {
    #[inline]
    fn category(&self) -> Category {
        self.0.category()
    }
}

/// A dynamically typed value
///
/// `Value` lets one container accept values whose category is only known at
/// runtime. Numbers compare with numbers (integers and floats interoperate),
/// text with text, booleans with booleans; any other pairing is incomparable.
/// Lists and records are [`Category::Composite`] and need a comparator.
///
/// # Example
///
/// ```rust
/// use rust_heap_containers::{BinaryHeap, ContainerError, Value};
///
/// let mut heap = BinaryHeap::new();
/// heap.insert(Value::from(5)).unwrap();
/// heap.insert(Value::from(2.5)).unwrap();
/// assert!(matches!(
///     heap.insert(Value::from("a")),
///     Err(ContainerError::TypeMismatch { .. })
/// ));
/// assert_eq!(heap.peek(), Some(&Value::Float(2.5)));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// String
    Text(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// String-keyed record
    Record(BTreeMap<String, Value>),
}

/// Exact comparison of an integer against a float
///
/// Casting the integer to `f64` rounds above 2^53 and breaks transitivity,
/// so the float is split into its integral part and fraction instead.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= BOUND {
        return Some(Ordering::Less);
    }
    if float < -BOUND {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&float),
        unequal => Some(unequal),
    }
}

impl Orderable for Value {
    fn category(&self) -> Category {
        match self {
            Value::Int(_) | Value::Float(_) => Category::Number,
            Value::Bool(_) => Category::Boolean,
            Value::Text(_) => Category::Text,
            Value::List(_) | Value::Record(_) => Category::Composite,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                cmp_int_float(*a, *b) == Some(Ordering::Equal)
            }
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::List(_), Value::List(_)) | (Value::Record(_), Value::Record(_)) => {
                (self == other).then_some(Ordering::Equal)
            }
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Record(value)
    }
}
