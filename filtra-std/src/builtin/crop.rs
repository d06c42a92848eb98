//! Crop filter.

use filtra_core::{Filter, FilterError, Opts, Param, Registrable, Value, validate};

/// Cuts a `w` × `h` window out of the subject at offset (`x`, `y`).
///
/// All options are optional: the offset defaults to the origin and the
/// window to 10 × 10.
#[derive(Debug, Default, Clone, Copy)]
pub struct Crop;

impl Crop {
    /// Name this filter registers under.
    pub const NAME: &'static str = "crop";
}

impl Filter for Crop {
    fn apply(&self, subject: &Value, opts: &Opts) -> Result<Value, FilterError> {
        let src = super::subject_str(subject)?;
        let x: i64 = Param::new("x")
            .with_default(0)
            .validate(validate::non_negative)
            .get(opts)?;
        let y: i64 = Param::new("y")
            .with_default(0)
            .validate(validate::non_negative)
            .get(opts)?;
        let w: u64 = Param::new("w")
            .with_default(10)
            .validate(validate::positive)
            .get(opts)?;
        let h: u64 = Param::new("h")
            .with_default(10)
            .validate(validate::positive)
            .get(opts)?;
        Ok(Value::String(format!("cropped({src}, {x},{y}, {w}x{h})")))
    }
}

impl Registrable for Crop {}

#[cfg(feature = "inventory")]
inventory::submit! {
    crate::registry::FilterDef::named::<Crop>(Crop::NAME)
}
