//! The thin dog: same operations as [`Dog`], no dispatch relationship with
//! anything, and no per-instance dispatch bookkeeping to pay for.
//!
//! [`Dog`]: crate::Dog

/// The thin dog's own fixed line.
pub const THIN_DOG_MESSAGE: &str = "wof";

/// Structurally a dog, hierarchically nothing.
///
/// `ThinDog` deliberately implements neither [`Speak`] nor [`Polymorphic`]:
/// its `speak` is a single inherent implementation that no call site can
/// override, so the instance is just the bare age attribute.
///
/// [`Speak`]: crate::Speak
/// [`Polymorphic`]: crate::Polymorphic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinDog {
    age: i32,
}

impl ThinDog {
    /// Same shadowing pitfall as [`Dog::new`]: the argument never reaches
    /// the attribute, which holds `i32::default()`.
    ///
    /// [`Dog::new`]: crate::Dog::new
    pub fn new(age: i32) -> Self {
        let _ = age;
        Self { age: i32::default() }
    }

    /// Corrected constructor: the attribute receives the argument.
    pub fn with_age(age: i32) -> Self {
        Self { age }
    }

    pub fn message(&self) -> &'static str {
        THIN_DOG_MESSAGE
    }

    pub fn speak(&self) {
        println!("{}", self.message());
    }

    /// Dog years, same arithmetic as `Dog` without any shared declaration.
    pub fn age(&self) -> i32 {
        self.age * 7
    }
}
