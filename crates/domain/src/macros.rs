//! Macro for implementing Display and FromStr for wire-name enums
//!
//! Trigger event kinds are stored in SQLite and exchanged with the hosted
//! platform as short camelCase names. This macro keeps the mapping between a
//! variant and its wire name in one place.
//!
//! # Example
//!
//! ```rust
//! use formguest_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum SourceKind {
//!     Form,
//!     Spreadsheet,
//! }
//!
//! impl_wire_name_conversions!(SourceKind {
//!     Form => "form",
//!     Spreadsheet => "spreadsheet",
//! });
//!
//! assert_eq!(SourceKind::Form.to_string(), "form");
//! assert_eq!("SPREADSHEET".parse::<SourceKind>(), Ok(SourceKind::Spreadsheet));
//! ```

/// Implements Display and FromStr traits for enums with a fixed wire name.
///
/// - Display writes the wire name verbatim
/// - FromStr accepts the wire name in any ASCII case
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire name of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
