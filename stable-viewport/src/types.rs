use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::error::InvalidPropertyName;

/// The three viewport-height units tracked by the stabilizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    /// Fixed viewport height: the stabilized substitute for native `vh`.
    Fvh,
    /// Large viewport height: browser UI fully retracted (maximum space).
    Lvh,
    /// Small viewport height: browser UI fully expanded (minimum space).
    Svh,
}

impl UnitKind {
    /// The CSS length expression measured for this unit.
    ///
    /// The same string doubles as the literal value the style property is
    /// reset to on teardown, reverting consumers to native unit behavior.
    pub fn css_expr(self) -> &'static str {
        match self {
            Self::Fvh => "1vh",
            Self::Lvh => "1lvh",
            Self::Svh => "1svh",
        }
    }

    /// The built-in custom-property name published for this unit.
    pub fn default_property_name(self) -> &'static str {
        match self {
            Self::Fvh => "--fvh",
            Self::Lvh => "--lvh",
            Self::Svh => "--svh",
        }
    }
}

/// A validated CSS custom-property identifier.
///
/// Accepted names match `--[A-Za-z0-9][A-Za-z0-9_-]*`. Input without a
/// leading `-` is prefixed with `--` before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyName(String);

impl PropertyName {
    pub fn new(raw: &str) -> Result<Self, InvalidPropertyName> {
        let name = if raw.starts_with('-') {
            raw.to_owned()
        } else {
            alloc::format!("--{raw}")
        };
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(InvalidPropertyName { name })
        }
    }

    /// Parses `raw`, falling back to `kind`'s built-in default on failure.
    pub fn sanitize(kind: UnitKind, raw: &str) -> Self {
        match Self::new(raw) {
            Ok(name) => name,
            Err(_) => {
                svwarn!(raw, "invalid custom property name, using the default");
                Self::default_for(kind)
            }
        }
    }

    pub fn default_for(kind: UnitKind) -> Self {
        Self(kind.default_property_name().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(name: &str) -> bool {
        let Some(body) = name.strip_prefix("--") else {
            return false;
        };
        let mut chars = body.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        first.is_ascii_alphanumeric()
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }
}

impl core::fmt::Display for PropertyName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
