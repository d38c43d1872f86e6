//! Marker trait for types whose all-zero bit pattern is a valid value.
//!
//! The arena provisions every page and dedicated buffer zero-filled and
//! never hands the same byte out twice, so a freshly placed slot always
//! reads as zero. [`Zeroable`] lets [`Arena::alloc_zeroed`] and
//! [`Arena::alloc_array_zeroed`] return `&mut T` directly instead of
//! `&mut MaybeUninit<T>`.
//!
//! [`Arena::alloc_zeroed`]: crate::Arena::alloc_zeroed
//! [`Arena::alloc_array_zeroed`]: crate::Arena::alloc_array_zeroed

#![allow(unsafe_code)]

use std::cell::Cell;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::num::{
    NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU16, NonZeroU32,
    NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
};
use std::ptr::NonNull;
use std::sync::atomic::{
    AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicIsize, AtomicU16, AtomicU32,
    AtomicU64, AtomicU8, AtomicUsize,
};

/// Types for which a value made of all-zero bytes is valid.
///
/// # Safety
///
/// Implementors must guarantee that the all-zero byte pattern of
/// `size_of::<Self>()` bytes is a valid, initialised `Self`. For a
/// user-defined struct this holds when it is `#[repr(C)]` (or otherwise has
/// no niche-bearing layout tricks) and every field is `Zeroable`.
///
/// ```
/// use pagebump::Zeroable;
///
/// #[repr(C)]
/// struct Particle {
///     pos: [f32; 3],
///     alive: bool,
/// }
///
/// // SAFETY: repr(C), every field is Zeroable.
/// unsafe impl Zeroable for Particle {}
/// ```
pub unsafe trait Zeroable: Sized {}

macro_rules! impl_zeroable {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: zero is a valid value of this primitive.
            unsafe impl Zeroable for $ty {}
        )*
    };
}

impl_zeroable!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    AtomicBool,
    AtomicU8,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicUsize,
    AtomicI8,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicIsize,
    Option<NonZeroU8>,
    Option<NonZeroU16>,
    Option<NonZeroU32>,
    Option<NonZeroU64>,
    Option<NonZeroUsize>,
    Option<NonZeroI8>,
    Option<NonZeroI16>,
    Option<NonZeroI32>,
    Option<NonZeroI64>,
    Option<NonZeroIsize>,
);

// SAFETY: a null raw pointer is valid.
unsafe impl<T> Zeroable for *const T {}
// SAFETY: a null raw pointer is valid.
unsafe impl<T> Zeroable for *mut T {}
// SAFETY: `None` is represented by the null pointer.
unsafe impl<T> Zeroable for Option<NonNull<T>> {}
// SAFETY: any byte pattern is a valid `MaybeUninit`.
unsafe impl<T> Zeroable for MaybeUninit<T> {}
// SAFETY: zero-sized, no bytes to check.
unsafe impl<T: ?Sized> Zeroable for PhantomData<T> {}
// SAFETY: `Wrapping<T>` is `repr(transparent)` over `T`.
unsafe impl<T: Zeroable> Zeroable for Wrapping<T> {}
// SAFETY: `Cell<T>` is `repr(transparent)` over `T`.
unsafe impl<T: Zeroable> Zeroable for Cell<T> {}
// SAFETY: arrays have no padding or niches beyond their elements'.
unsafe impl<T: Zeroable, const N: usize> Zeroable for [T; N] {}

macro_rules! impl_zeroable_tuple {
    ($($name:ident),+) => {
        // SAFETY: padding bytes carry no validity requirement and every
        // field is Zeroable.
        unsafe impl<$($name: Zeroable),+> Zeroable for ($($name,)+) {}
    };
}

impl_zeroable_tuple!(A);
impl_zeroable_tuple!(A, B);
impl_zeroable_tuple!(A, B, C);
impl_zeroable_tuple!(A, B, C, D);
impl_zeroable_tuple!(A, B, C, D, E);
impl_zeroable_tuple!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;

    fn zeroed<T: Zeroable>() -> T {
        // SAFETY: T: Zeroable.
        unsafe { std::mem::zeroed() }
    }

    #[test]
    fn primitives_zero_to_default() {
        assert_eq!(zeroed::<u64>(), 0);
        assert_eq!(zeroed::<f64>(), 0.0);
        assert!(!zeroed::<bool>());
        assert_eq!(zeroed::<char>(), '\0');
    }

    #[test]
    fn niche_options_zero_to_none() {
        assert_eq!(zeroed::<Option<NonZeroU32>>(), None);
        assert!(zeroed::<Option<NonNull<u8>>>().is_none());
    }

    #[test]
    fn composites_zero_elementwise() {
        assert_eq!(zeroed::<[i32; 4]>(), [0; 4]);
        assert_eq!(zeroed::<(u8, f32, bool)>(), (0, 0.0, false));
        assert_eq!(zeroed::<Wrapping<u16>>(), Wrapping(0));
        assert!(zeroed::<*const u8>().is_null());
    }
}
