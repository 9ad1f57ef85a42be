/// Implement [`EnumConstants`](crate::primitives::EnumConstants) for a
/// fieldless enum, naming each constant.
///
/// The enum itself is also accepted by
/// [`allowed::is_in_enum`](crate::primitives::allowed::is_in_enum). Every
/// variant must be listed; a missing one is a compile error.
///
/// # Syntax
///
/// ```ignore
/// fluent_rules::enum_constants! {
///     EnumType {
///         Variant => "NAME",
///         // ...
///     }
/// }
/// ```
///
/// # Example
///
/// ```
/// use fluent_rules::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// pub enum Level { Low, High }
///
/// fluent_rules::enum_constants! {
///     Level { Low => "LOW", High => "HIGH" }
/// }
///
/// assert_eq!(Level::names(), vec!["LOW", "HIGH"]);
/// assert_eq!(Level::High.name(), "HIGH");
/// assert!(allowed::is_in_enum::<Level, Level>().is_satisfied_by(&Level::Low));
/// ```
#[macro_export]
macro_rules! enum_constants {
    (
        $name:ident {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        impl $crate::primitives::EnumConstants for $name {
            fn constants() -> &'static [Self] {
                &[ $( $name::$variant ),+ ]
            }

            fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl $crate::primitives::EnumCandidate<$name> for $name {
            fn is_constant_of(&self) -> bool {
                true
            }
        }
    };
}
