//! Emoji filter.

use filtra_core::{Filter, FilterError, Opts, Registrable, Value};

/// Wraps the subject in sparkle markers.
///
/// Carries a declared alias instead of an explicit registration name, so it
/// reaches the registry purely through the implicit surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct Emoji;

impl Filter for Emoji {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        let src = super::subject_str(subject)?;
        Ok(Value::String(format!("✨{src}✨")))
    }
}

impl Registrable for Emoji {
    const ALIAS: Option<&'static str> = Some("emoji");
}

#[cfg(feature = "inventory")]
inventory::submit! {
    crate::registry::FilterDef::of::<Emoji>()
}
