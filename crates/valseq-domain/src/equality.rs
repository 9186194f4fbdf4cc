//! Equality capability - domain-defined value equality

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

/// Domain-defined equality used by every search and membership operation
///
/// Implementers choose their own granularity, e.g. comparing entities by a
/// business key and ignoring the rest of their fields. Collections never
/// assume more than the relation supplies, but correct search and removal
/// need it to be reflexive and symmetric.
///
/// # Examples
///
/// ```
/// use valseq_domain::ValueEquality;
///
/// struct Article {
///     title: String,
///     body: String,
/// }
///
/// impl ValueEquality for Article {
///     fn compare(&self, other: &Self) -> bool {
///         self.title == other.title
///     }
/// }
///
/// let a = Article { title: "a".into(), body: "first".into() };
/// let b = Article { title: "a".into(), body: "second".into() };
/// assert!(a.compare(&b));
/// ```
pub trait ValueEquality {
    /// Returns true when `other` denotes the same domain value as `self`
    fn compare(&self, other: &Self) -> bool;
}

macro_rules! value_equality_via_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ValueEquality for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

value_equality_via_eq!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, String, str, (),
);

// NaN is never equal to itself, so float elements holding NaN cannot be found.
value_equality_via_eq!(f32, f64);

impl<U: ValueEquality> ValueEquality for [U] {
    fn compare(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.compare(b))
    }
}

impl<U: ValueEquality> ValueEquality for Vec<U> {
    fn compare(&self, other: &Self) -> bool {
        self.as_slice().compare(other.as_slice())
    }
}

impl<U: ValueEquality> ValueEquality for Option<U> {
    fn compare(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.compare(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<U: ValueEquality + ?Sized> ValueEquality for Box<U> {
    fn compare(&self, other: &Self) -> bool {
        (**self).compare(&**other)
    }
}

/// Compares the pointees, never the pointers
impl<U: ValueEquality + ?Sized> ValueEquality for Rc<U> {
    fn compare(&self, other: &Self) -> bool {
        (**self).compare(&**other)
    }
}

/// Compares the pointees, never the pointers
impl<U: ValueEquality + ?Sized> ValueEquality for Arc<U> {
    fn compare(&self, other: &Self) -> bool {
        (**self).compare(&**other)
    }
}

/// Compares the current contents
///
/// # Panics
/// Panics if either cell is mutably borrowed.
impl<U: ValueEquality> ValueEquality for RefCell<U> {
    fn compare(&self, other: &Self) -> bool {
        self.borrow().compare(&other.borrow())
    }
}

impl<U: ValueEquality + Copy> ValueEquality for Cell<U> {
    fn compare(&self, other: &Self) -> bool {
        self.get().compare(&other.get())
    }
}

impl<A: ValueEquality, B: ValueEquality> ValueEquality for (A, B) {
    fn compare(&self, other: &Self) -> bool {
        self.0.compare(&other.0) && self.1.compare(&other.1)
    }
}

/// Position of the first element that compares equal to `needle`
pub fn value_position<T: ValueEquality>(items: &[T], needle: &T) -> Option<usize> {
    items.iter().position(|item| item.compare(needle))
}

/// Position of the last element that compares equal to `needle`
///
/// Scans from the end, so with duplicates this differs from [`value_position`].
pub fn value_rposition<T: ValueEquality>(items: &[T], needle: &T) -> Option<usize> {
    items.iter().rposition(|item| item.compare(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Keyed {
        key: u32,
        payload: &'static str,
    }

    impl ValueEquality for Keyed {
        fn compare(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    fn keyed(key: u32, payload: &'static str) -> Keyed {
        Keyed { key, payload }
    }

    #[test]
    fn test_domain_key_equality_ignores_payload() {
        let a = keyed(1, "left");
        let b = keyed(1, "right");
        assert_ne!(a.payload, b.payload);
        assert!(a.compare(&b));
        assert!(!a.compare(&keyed(2, "left")));
    }

    #[test]
    fn test_vec_compares_elementwise() {
        let a = vec![keyed(1, "x"), keyed(2, "y")];
        let b = vec![keyed(1, "p"), keyed(2, "q")];
        let shorter = vec![keyed(1, "x")];

        assert!(a.compare(&b));
        assert!(!a.compare(&shorter));
    }

    #[test]
    fn test_shared_pointers_compare_by_value() {
        let a = Rc::new(keyed(7, "a"));
        let b = Rc::new(keyed(7, "b"));
        assert!(!Rc::ptr_eq(&a, &b));
        assert!(a.compare(&b));

        let c = Arc::new(String::from("same"));
        let d = Arc::new(String::from("same"));
        assert!(c.compare(&d));
    }

    #[test]
    fn test_option_equality() {
        assert!(Some(3).compare(&Some(3)));
        assert!(None::<i32>.compare(&None));
        assert!(!Some(3).compare(&None));
    }

    #[test]
    fn test_nan_is_not_self_equal() {
        assert!(!f64::NAN.compare(&f64::NAN));
        assert!(1.5f64.compare(&1.5));
    }

    #[test]
    fn test_positions_scan_from_opposite_ends() {
        let items = vec![keyed(1, "a"), keyed(2, "b"), keyed(1, "c")];
        let needle = keyed(1, "needle");

        assert_eq!(value_position(&items, &needle), Some(0));
        assert_eq!(value_rposition(&items, &needle), Some(2));
        assert_eq!(value_position(&items, &keyed(9, "missing")), None);
        assert_eq!(value_rposition(&items, &keyed(9, "missing")), None);
    }
}
