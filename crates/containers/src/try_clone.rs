use super::AllocError;
use alloc::{
    string::String,
    vec::Vec,
};

/// A fallible form of [`Clone`] for element types stored in the containers
/// of this crate.
///
/// Copying a value may require memory, and on constrained targets that
/// memory may not be available. Element types therefore state their copy
/// operation as fallible; a failed copy leaves no new value behind and the
/// source untouched.
pub trait TryClone: Sized {
    /// Returns an independent copy of `self`.
    ///
    /// # Errors
    ///
    /// If the memory needed for the copy cannot be acquired. No partial
    /// copy survives a failure.
    fn try_clone(&self) -> Result<Self, AllocError>;

    /// Replaces the value held by `self` with a copy of `source`.
    ///
    /// The copy is constructed completely before `self` is overwritten, so
    /// on failure `self` retains its prior value.
    ///
    /// # Errors
    ///
    /// If the memory needed for the copy cannot be acquired.
    fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
        let copy = source.try_clone()?;
        *self = copy;
        Ok(())
    }
}

macro_rules! impl_try_clone_for_copy {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl TryClone for $ty {
                #[inline]
                fn try_clone(&self) -> Result<Self, AllocError> {
                    Ok(*self)
                }
            }
        )*
    };
}

impl_try_clone_for_copy!(
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
);

impl<T> TryClone for Option<T>
where
    T: TryClone,
{
    fn try_clone(&self) -> Result<Self, AllocError> {
        match self {
            Some(value) => Ok(Some(value.try_clone()?)),
            None => Ok(None),
        }
    }
}

impl TryClone for String {
    fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = String::new();
        copy.try_reserve_exact(self.len()).map_err(|_| AllocError)?;
        copy.push_str(self);
        Ok(copy)
    }
}

impl<T> TryClone for Vec<T>
where
    T: TryClone,
{
    fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = Vec::new();
        copy.try_reserve_exact(self.len()).map_err(|_| AllocError)?;
        for value in self {
            // A failed element copy drops the prefix copied so far.
            copy.push(value.try_clone()?);
        }
        Ok(copy)
    }
}
