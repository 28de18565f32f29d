//! The derived dog: same surface as the base animal, plus the layout cost
//! of being polymorphic.

use crate::animal::Speak;
use crate::vtable::{AnimalRef, Polymorphic, SpeakVtable};

/// The fixed line the dog speaks, overriding the base behavior.
pub const DOG_MESSAGE: &str = "WOOF";

static DOG_VTABLE: SpeakVtable = SpeakVtable::for_type::<Dog>();

/// A dog that overrides `speak` and `age`.
///
/// The first field is the embedded dispatch-table reference, then the dog's
/// own `age` storage, independent of [`Animal`]'s field of the same name
/// (shadowing, not sharing). `#[repr(C)]` pins the table reference at offset
/// zero, which is what makes a `Dog` instance strictly larger than a
/// [`ThinDog`] even though the two expose identical operations.
///
/// [`Animal`]: crate::Animal
/// [`ThinDog`]: crate::ThinDog
#[repr(C)]
pub struct Dog {
    vtable: &'static SpeakVtable,
    age: i32,
}

impl Dog {
    /// Construct a dog, reproducing the classic shadowing pitfall: the
    /// constructor parameter shadows the age attribute, the write lands on
    /// the parameter, and the attribute never sees the argument. Rust
    /// refuses indeterminate storage, so the field holds `i32::default()`;
    /// either way the stored age is not a function of `age`.
    ///
    /// Use [`Dog::with_age`] for the corrected behavior.
    pub fn new(age: i32) -> Self {
        let _ = age;
        Self {
            vtable: &DOG_VTABLE,
            age: i32::default(),
        }
    }

    /// Construct a dog whose age attribute actually receives the argument.
    pub fn with_age(age: i32) -> Self {
        Self {
            vtable: &DOG_VTABLE,
            age,
        }
    }

    /// View this dog as the base animal type.
    ///
    /// The view dispatches through the table the instance carries, so
    /// `speak` still resolves to the dog's override.
    pub fn upcast(&self) -> AnimalRef<'_> {
        AnimalRef::new(self)
    }
}

impl Speak for Dog {
    fn message(&self) -> &'static str {
        DOG_MESSAGE
    }

    /// Dog years.
    fn age(&self) -> i32 {
        self.age * 7
    }
}

// SAFETY: DOG_VTABLE is built for Dog.
unsafe impl Polymorphic for Dog {
    fn vptr(&self) -> &'static SpeakVtable {
        self.vtable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_call_resolves_to_override() {
        let dog = Dog::with_age(2);
        assert_eq!(dog.message(), DOG_MESSAGE);
    }

    #[test]
    fn test_upcast_preserves_override() {
        let dog = Dog::with_age(2);
        let as_animal = dog.upcast();
        assert_eq!(as_animal.message(), DOG_MESSAGE);
        assert_eq!(as_animal.age(), 14);
    }

    #[test]
    fn test_trait_object_preserves_override() {
        let dog = Dog::with_age(2);
        let spoken: &dyn Speak = &dog;
        assert_eq!(spoken.message(), DOG_MESSAGE);
        assert_eq!(spoken.age(), 14);
    }

    #[test]
    fn test_shadowing_constructor_ignores_argument() {
        // the argument never reaches the attribute, so the reported age is
        // the same no matter what was passed
        assert_eq!(Dog::new(2).age(), Dog::new(40).age());
    }

    #[test]
    fn test_corrected_constructor_feeds_accessor() {
        assert_eq!(Dog::with_age(4).age(), 28);
    }
}
