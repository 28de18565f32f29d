//! A small menagerie of animal types for demonstrating object layout and
//! dynamic dispatch.
//!
//! The lab contains three creatures:
//!
//! - [`Animal`], the base type with an overridable [`Speak`] behavior;
//! - [`Dog`], which overrides `speak` and carries an embedded dispatch
//!   table in its instance layout, the way a polymorphic object does in
//!   languages with class-based inheritance;
//! - [`ThinDog`], which exposes the same surface but declares no dispatch
//!   relationship with the others and pays for none.
//!
//! Calling `speak` on a `Dog` through a base-typed [`AnimalRef`] view still
//! resolves to the dog's override, and `Dog` instances are strictly larger
//! than `ThinDog` instances by at least one vtable pointer. Both facts fall
//! out of the [`demo`](run_demo) routine, which prints them.

mod animal;
pub use animal::*;

mod dog;
pub use dog::*;

mod thin;
pub use thin::*;

mod vtable;
pub use vtable::*;

mod layout;
pub use layout::*;

mod demo;
pub use demo::*;

pub mod error;
pub use error::{MenagerieError, MenagerieResult};
