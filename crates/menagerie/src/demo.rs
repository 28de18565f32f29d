//! The demonstration routine: the fixed sequence of speak calls and size
//! reports, written to a caller-provided sink so tests can capture it.

use std::io::Write;
use std::mem;

use crate::animal::Speak;
use crate::dog::Dog;
use crate::error::MenagerieResult;
use crate::thin::ThinDog;

/// Ages handed to the three constructors.
///
/// Note that with the defect-preserving constructors these never reach the
/// stored attributes; they are here because the original demonstration
/// passes them, and because the corrected constructors would use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAges {
    pub dog: i32,
    pub thin_dog: i32,
    pub silent_dog: i32,
}

impl Default for DemoAges {
    fn default() -> Self {
        Self {
            dog: 2,
            thin_dog: 3,
            silent_dog: 4,
        }
    }
}

/// Run the full demonstration, writing its lines to `out` in fixed order:
///
/// 1. the dog speaking for itself, then again through a base-typed view;
/// 2. the thin dog speaking for itself;
/// 3. a blank line, then the two instance sizes;
/// 4. a blank line, then a second dog's reported age and its size again.
pub fn run_demo(ages: DemoAges, out: &mut impl Write) -> MenagerieResult<()> {
    let dog = Dog::new(ages.dog);
    writeln!(out, "{}", dog.message())?;

    let as_animal = dog.upcast();
    writeln!(out, "{}", as_animal.message())?;

    let thin_dog = ThinDog::new(ages.thin_dog);
    writeln!(out, "{}", thin_dog.message())?;
    writeln!(out)?;

    writeln!(out, "sizeof(Dog) = {}", mem::size_of_val(&dog))?;
    writeln!(out, "sizeof(ThinDog) = {}", mem::size_of_val(&thin_dog))?;
    writeln!(out)?;

    let silent_dog = Dog::new(ages.silent_dog);
    writeln!(out, "How old is silent dog? - {}", silent_dog.age())?;
    writeln!(out, "sizeof(silentDog) = {}", mem::size_of_val(&silent_dog))?;

    Ok(())
}

/// Run the demonstration and hand back its text.
pub fn demo_text(ages: DemoAges) -> MenagerieResult<String> {
    let mut out = Vec::new();
    run_demo(ages, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
