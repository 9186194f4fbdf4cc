//! Deep clone capability - copies that share no mutable sub-structure

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

/// A fully independent copy of a value
///
/// Unlike `Clone`, which for `Rc`/`Arc` only bumps a reference count, a deep
/// clone allocates new pointees all the way down. Mutating anything reachable
/// from the copy must never be observable through the original.
///
/// Plain owned types can reuse their `Clone` impl through
/// [`deep_clone_via_clone!`](crate::deep_clone_via_clone).
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use valseq_domain::DeepClone;
///
/// let original = Rc::new(RefCell::new(String::from("draft")));
/// let copy = original.deep_clone();
///
/// original.borrow_mut().push_str(" v2");
/// assert_eq!(*copy.borrow(), "draft");
/// ```
pub trait DeepClone {
    /// Produce a copy sharing nothing mutable with `self`
    fn deep_clone(&self) -> Self;
}

/// Implement [`DeepClone`] through `Clone` for types without shared pointers
///
/// Only sound when `Clone` already yields an independent value, i.e. the type
/// holds no `Rc`, `Arc` or other shared handle to mutable state.
#[macro_export]
macro_rules! deep_clone_via_clone {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::DeepClone for $ty {
                #[inline]
                fn deep_clone(&self) -> Self {
                    ::std::clone::Clone::clone(self)
                }
            }
        )*
    };
}

deep_clone_via_clone!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, String, (),
);

impl<U: DeepClone> DeepClone for Vec<U> {
    fn deep_clone(&self) -> Self {
        deep_clone_slice(self)
    }
}

impl<U: DeepClone> DeepClone for Option<U> {
    fn deep_clone(&self) -> Self {
        self.as_ref().map(DeepClone::deep_clone)
    }
}

impl<U: DeepClone> DeepClone for Box<U> {
    fn deep_clone(&self) -> Self {
        Box::new((**self).deep_clone())
    }
}

/// Allocates a new pointee; the copy is never `Rc::ptr_eq` to the original
impl<U: DeepClone> DeepClone for Rc<U> {
    fn deep_clone(&self) -> Self {
        Rc::new((**self).deep_clone())
    }
}

/// Allocates a new pointee; the copy is never `Arc::ptr_eq` to the original
impl<U: DeepClone> DeepClone for Arc<U> {
    fn deep_clone(&self) -> Self {
        Arc::new((**self).deep_clone())
    }
}

impl<U: DeepClone> DeepClone for RefCell<U> {
    fn deep_clone(&self) -> Self {
        RefCell::new(self.borrow().deep_clone())
    }
}

impl<U: Copy> DeepClone for Cell<U> {
    fn deep_clone(&self) -> Self {
        Cell::new(self.get())
    }
}

impl<A: DeepClone, B: DeepClone> DeepClone for (A, B) {
    fn deep_clone(&self) -> Self {
        (self.0.deep_clone(), self.1.deep_clone())
    }
}

/// Deep-copy every element of a slice into a new owned buffer
pub fn deep_clone_slice<T: DeepClone>(items: &[T]) -> Vec<T> {
    items.iter().map(DeepClone::deep_clone).collect()
}
