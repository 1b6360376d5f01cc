//! Labeled enumerations
//!
//! Closed value sets whose wire form is the Portuguese label the console
//! shows. `Display`, `FromStr` and serde all agree on that label.

/// Declare a `Copy` enum whose serialized form is the given label.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Label shown in the console and used on the wire.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $label => Ok($name::$variant), )+
                    other => Err($crate::domain::DomainError::UnknownLabel {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use labeled_enum;

#[cfg(test)]
mod tests {
    use crate::domain::{CostCategory, DomainError, MemberUnit};
    use std::str::FromStr;

    #[test]
    fn test_label_round_trips_through_from_str() {
        for unit in MemberUnit::ALL {
            assert_eq!(MemberUnit::from_str(unit.label()).unwrap(), *unit);
        }
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&CostCategory::OfficeSupplies).unwrap();
        assert_eq!(json, "\"Material de Escritório\"");

        let parsed: CostCategory = serde_json::from_str("\"Alimentação\"").unwrap();
        assert_eq!(parsed, CostCategory::Food);
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = MemberUnit::from_str("Corujas").unwrap_err();
        assert!(matches!(err, DomainError::UnknownLabel { kind: "MemberUnit", .. }));
    }
}
