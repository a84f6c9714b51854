//! Shared macros for the codebase

/// Declare a closed tag enum that round-trips through its variant name and
/// keeps unrecognized tags in an `Other(String)` variant.
///
/// Front ends evolve faster than this crate; an unknown kind tag must not
/// fail deserialization of the whole tree.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Tag not modelled by this crate, kept verbatim
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                    $name::Other(tag) => tag.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                match tag.as_str() {
                    $(stringify!($variant) => $name::$variant,)+
                    _ => $name::Other(tag),
                }
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> String {
                kind.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
