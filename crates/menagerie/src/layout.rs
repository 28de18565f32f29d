//! Instance-layout reporting: who pays for dispatch, and where.

use std::fmt;
use std::mem;

use serde::Serialize;

use crate::animal::{Animal, Speak};
use crate::dog::Dog;
use crate::error::MenagerieResult;
use crate::thin::ThinDog;
use crate::vtable::SpeakVtable;

/// How an operation gets selected at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Dispatch {
    /// Resolved from the declared type at compile time.
    Static,
    /// Resolved from the instance's runtime type through a dispatch table.
    Virtual,
}

/// Size and alignment of one creature type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub dispatch: Dispatch,
}

impl TypeLayout {
    fn of<T>(name: &'static str, dispatch: Dispatch) -> Self {
        Self {
            name,
            size: mem::size_of::<T>(),
            align: mem::align_of::<T>(),
            dispatch,
        }
    }
}

/// A snapshot of every layout fact the demonstration talks about.
///
/// Sizes are properties of the types alone; nothing here depends on how any
/// particular instance was constructed.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub types: Vec<TypeLayout>,
    /// Width of one embedded dispatch-table reference.
    pub vptr_width: usize,
    /// Width of a plain reference to a non-polymorphic creature.
    pub thin_ref_width: usize,
    /// Width of a `&dyn Speak` trait object, where native Rust keeps the
    /// table pointer instead.
    pub fat_ref_width: usize,
}

impl LayoutReport {
    pub fn capture() -> Self {
        Self {
            types: vec![
                TypeLayout::of::<Animal>("Animal", Dispatch::Static),
                TypeLayout::of::<Dog>("Dog", Dispatch::Virtual),
                TypeLayout::of::<ThinDog>("ThinDog", Dispatch::Static),
            ],
            vptr_width: mem::size_of::<&'static SpeakVtable>(),
            thin_ref_width: mem::size_of::<&ThinDog>(),
            fat_ref_width: mem::size_of::<&dyn Speak>(),
        }
    }

    pub fn type_named(&self, name: &str) -> Option<&TypeLayout> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn dog_size(&self) -> usize {
        mem::size_of::<Dog>()
    }

    pub fn thin_dog_size(&self) -> usize {
        mem::size_of::<ThinDog>()
    }

    /// What one instance pays for carrying its own dispatch table.
    pub fn dispatch_overhead(&self) -> usize {
        self.dog_size() - self.thin_dog_size()
    }

    pub fn to_json(&self) -> MenagerieResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "instance layouts:")?;
        for t in &self.types {
            writeln!(
                f,
                "  {:<8} {:>2} bytes (align {}, {} dispatch)",
                t.name, t.size, t.align, t.dispatch
            )?;
        }
        writeln!(f)?;
        writeln!(f, "vtable reference width: {} bytes", self.vptr_width)?;
        writeln!(
            f,
            "references: &ThinDog is {} bytes, &dyn Speak is {} bytes",
            self.thin_ref_width, self.fat_ref_width
        )?;
        writeln!(
            f,
            "dispatch overhead per Dog instance: {} bytes",
            self.dispatch_overhead()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polymorphic_instance_is_strictly_larger() {
        let report = LayoutReport::capture();
        assert!(report.dog_size() >= report.thin_dog_size() + report.vptr_width);
        assert_eq!(report.type_named("Dog").map(|t| t.dispatch), Some(Dispatch::Virtual));
        assert_eq!(report.type_named("ThinDog").map(|t| t.dispatch), Some(Dispatch::Static));
    }

    #[test]
    fn test_size_ignores_construction_arguments() {
        let report = LayoutReport::capture();
        assert_eq!(mem::size_of_val(&Dog::new(2)), report.dog_size());
        assert_eq!(mem::size_of_val(&Dog::with_age(1000)), report.dog_size());
        assert_eq!(mem::size_of_val(&ThinDog::new(3)), report.thin_dog_size());
        assert_eq!(mem::size_of_val(&ThinDog::with_age(-5)), report.thin_dog_size());
    }

    #[test]
    fn test_native_rust_moves_the_table_into_the_reference() {
        let report = LayoutReport::capture();
        assert_eq!(
            report.fat_ref_width,
            report.thin_ref_width + report.vptr_width
        );
    }

    #[test]
    fn test_dispatch_names_render_snake_case() {
        assert_eq!(Dispatch::Virtual.to_string(), "virtual");
        assert_eq!(Dispatch::Static.to_string(), "static");
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = LayoutReport::capture();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["types"][1]["name"].as_str(),
            Some("Dog")
        );
        assert_eq!(
            value["types"][1]["dispatch"].as_str(),
            Some("virtual")
        );
    }
}
