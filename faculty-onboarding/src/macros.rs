//! Declarative helpers shared across the crate

/// Define a closed set of form options as a typed enum.
///
/// Each variant maps to the exact label the form stores and renders.
/// The generated type exposes `OPTIONS` (labels in display order), `ALL`,
/// `as_str`, `Display` and `FromStr`, so the schema layer can check
/// membership and the presentation layer can list choices from one source.
///
/// ```ignore
/// choice_enum! {
///     /// Type of bank account
///     pub enum AccountType {
///         Savings => "Savings",
///         Current => "Current",
///     }
/// }
/// ```
#[macro_export]
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option label, in display order
            pub const OPTIONS: &'static [&'static str] = &[$($label),+];

            /// Every variant, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(anyhow::anyhow!(
                        "'{}' is not a valid {} (expected one of: {})",
                        other,
                        stringify!($name),
                        Self::OPTIONS.join(", ")
                    )),
                }
            }
        }
    };
}
