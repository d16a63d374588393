//! String-backed enum definitions.

/// Error returned when a string does not name any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Defines a string-backed enum usable in JSON bodies and as a query filter.
///
/// Generates serde and OpenAPI derives, `as_str`, `Display`, a
/// case-insensitive `FromStr`, and the [`EnumField`] variant list.
///
/// [`EnumField`]: plantdesk_core::EnumField
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            utoipa::ToSchema,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant
            ),+
        }

        impl $name {
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::macros::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($value) {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::macros::ParseEnumError {
                    kind: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl plantdesk_core::EnumField for $name {
            const VARIANTS: &'static [&'static str] = &[$($value),+];
        }
    };
}
