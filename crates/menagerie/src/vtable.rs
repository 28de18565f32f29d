//! Hand-rolled dispatch machinery.
//!
//! Rust trait objects keep the vtable pointer in the reference, not in the
//! instance, so a plain `&dyn Speak` would leave `Dog` and `ThinDog` the
//! same size and hide the layout cost of virtual dispatch. The types here
//! rebuild the classic arrangement instead: a per-type table of function
//! pointers lives in static memory, a polymorphic instance embeds a
//! reference to its table, and a base-typed view dispatches through
//! whatever table the instance carries.

use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::animal::Speak;

/// A dispatch table for the [`Speak`] surface.
///
/// Each entry is a thunk that downcasts the erased instance pointer back to
/// the concrete type and calls its implementation.
pub struct SpeakVtable {
    pub message: unsafe fn(NonNull<()>) -> &'static str,
    pub age: unsafe fn(NonNull<()>) -> i32,
}

impl SpeakVtable {
    /// Build the table for a concrete creature type.
    pub const fn for_type<T: Speak>() -> SpeakVtable {
        SpeakVtable {
            message: message_thunk::<T>,
            age: age_thunk::<T>,
        }
    }
}

/// # Safety
///
/// `data` must point at a live `T` for the duration of the call.
unsafe fn message_thunk<T: Speak>(data: NonNull<()>) -> &'static str {
    unsafe { data.cast::<T>().as_ref() }.message()
}

/// # Safety
///
/// `data` must point at a live `T` for the duration of the call.
unsafe fn age_thunk<T: Speak>(data: NonNull<()>) -> i32 {
    unsafe { data.cast::<T>().as_ref() }.age()
}

/// A creature whose instances embed their own dispatch table, the way a
/// polymorphic object does in a language with class-based inheritance.
///
/// # Safety
///
/// `vptr` must return a table built for the implementing type, so that its
/// thunks downcast the erased pointer to the right concrete type.
pub unsafe trait Polymorphic: Speak {
    fn vptr(&self) -> &'static SpeakVtable;
}

/// A base-typed view over a borrowed polymorphic creature.
///
/// The view erases the concrete type but keeps the table the instance
/// carries, so every call resolves to the creature's own overrides. This is
/// why a dog seen as a plain animal still says the dog's line.
pub struct AnimalRef<'a> {
    data: NonNull<()>,
    vptr: &'static SpeakVtable,
    _borrow: PhantomData<&'a ()>,
}

impl<'a> AnimalRef<'a> {
    pub fn new<T: Polymorphic>(creature: &'a T) -> Self {
        Self {
            data: NonNull::from(creature).cast(),
            vptr: creature.vptr(),
            _borrow: PhantomData,
        }
    }
}

impl Speak for AnimalRef<'_> {
    fn message(&self) -> &'static str {
        // SAFETY: `data` points at the creature this view borrows, and
        // `vptr` was built for its concrete type (Polymorphic contract).
        unsafe { (self.vptr.message)(self.data) }
    }

    fn age(&self) -> i32 {
        // SAFETY: as above.
        unsafe { (self.vptr.age)(self.data) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::{Animal, GENERIC_ANIMAL_MESSAGE};

    #[test]
    fn test_thunks_reach_the_concrete_impl() {
        static TABLE: SpeakVtable = SpeakVtable::for_type::<Animal>();
        let blob = Animal::new(4);
        let data = NonNull::from(&blob).cast::<()>();
        assert_eq!(unsafe { (TABLE.message)(data) }, GENERIC_ANIMAL_MESSAGE);
        assert_eq!(unsafe { (TABLE.age)(data) }, 4);
    }

    #[test]
    fn test_table_lives_in_static_memory() {
        // one table per type, shared by every instance
        use crate::dog::Dog;
        let a = Dog::with_age(1);
        let b = Dog::with_age(9);
        assert!(std::ptr::eq(a.vptr(), b.vptr()));
    }
}
