//! The base animal type and its overridable speak behavior.

/// The fixed, species-agnostic line the base type speaks.
pub const GENERIC_ANIMAL_MESSAGE: &str =
    "I am the generic 'Animal'. I am an amorphous blob that should not be able to speak, yet here we are";

/// The overridable surface every speaking creature exposes.
///
/// `message` and `speak` have default bodies carrying the base behavior;
/// a derived type overrides them to substitute its own line. `age` is the
/// accessor of the stored age attribute; derived types may override it too.
pub trait Speak {
    /// The line this creature produces when asked to speak.
    fn message(&self) -> &'static str {
        GENERIC_ANIMAL_MESSAGE
    }

    /// Print the creature's line to stdout.
    fn speak(&self) {
        println!("{}", self.message());
    }

    /// The age-derived value this creature reports.
    fn age(&self) -> i32;
}

/// The base type: one age attribute, the default speak behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Animal {
    pub age: i32,
}

impl Animal {
    pub fn new(age: i32) -> Self {
        Self { age }
    }
}

impl Speak for Animal {
    // keeps the default message

    fn age(&self) -> i32 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_message_is_generic() {
        let blob = Animal::new(12);
        assert_eq!(blob.message(), GENERIC_ANIMAL_MESSAGE);
    }

    #[test]
    fn test_base_age_is_raw() {
        let blob = Animal::new(12);
        assert_eq!(blob.age(), 12);
    }

    #[test]
    fn test_speak_prints_without_panicking() {
        Animal::new(1).speak();
    }

    #[test]
    fn test_trait_object_keeps_base_behavior() {
        let blob = Animal::new(3);
        let spoken: &dyn Speak = &blob;
        assert_eq!(spoken.message(), GENERIC_ANIMAL_MESSAGE);
        assert_eq!(spoken.age(), 3);
    }
}
