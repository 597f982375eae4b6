//! Macros for declaring process-wide enums that are built once, on first use.

/// Defines a `static` [crate::StringEnum], built from its tags on first access.
///
/// An invalid value set is a programming error: first access panics with the
/// [crate::InvalidDefinition] message.
///
/// ```
/// use tagset_core::{define_string_enum, EnumType, Value};
///
/// define_string_enum!(pub static STATUS: "status" = ["open", "closed", "paid"]);
///
/// assert!(STATUS.equal(&Value::tag("open"), &Value::from("open")));
/// ```
#[macro_export]
macro_rules! define_string_enum {
    (
        $(#[$attr:meta])*
        $vis:vis static $ident:ident : $name:literal = [$($tag:literal),+ $(,)?]
        $(, overrides = $overrides:expr)? $(;)?
    ) => {
        $(#[$attr])*
        $vis static $ident: $crate::__private::Lazy<$crate::StringEnum> =
            $crate::__private::Lazy::new(|| {
                match $crate::StringEnum::build_with(
                    $name,
                    [$($tag),+],
                    $crate::__overrides!($($overrides)?),
                ) {
                    Ok(built) => built,
                    Err(err) => panic!("{}", err),
                }
            });
    };
}

/// Defines a `static` [crate::IntegerEnum], built from its `tag => code` pairs on first access.
///
/// ```
/// use tagset_core::{define_integer_enum, EnumType, Stored, Value};
///
/// define_integer_enum!(static PRIORITY: "priority" = ["low" => 1, "high" => 2]);
///
/// assert_eq!(PRIORITY.dump(&Value::tag("high")).unwrap(), Stored::Int(2));
/// ```
#[macro_export]
macro_rules! define_integer_enum {
    (
        $(#[$attr:meta])*
        $vis:vis static $ident:ident : $name:literal = [$($tag:literal => $code:expr),+ $(,)?]
        $(, overrides = $overrides:expr)? $(;)?
    ) => {
        $(#[$attr])*
        $vis static $ident: $crate::__private::Lazy<$crate::IntegerEnum> =
            $crate::__private::Lazy::new(|| {
                match $crate::IntegerEnum::build_with(
                    $name,
                    [$(($tag, $code)),+],
                    $crate::__overrides!($($overrides)?),
                ) {
                    Ok(built) => built,
                    Err(err) => panic!("{}", err),
                }
            });
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __overrides {
    () => {
        $crate::Overrides::new()
    };
    ($overrides:expr) => {
        $overrides
    };
}

#[cfg(test)]
mod test {
    use crate::{EnumType, Overrides, Stored, Tag, Value};
    use once_cell::sync::Lazy;

    define_string_enum!(
        /// Order status.
        static STATUS: "status" = ["open", "closed", "paid"],
        overrides = Overrides::new().with_alias("legacy", "open")
    );

    define_integer_enum!(static PRIORITY: "priority" = ["low" => 1, "high" => 2,]);

    define_string_enum!(static BROKEN: "broken" = ["a", "a"]);

    #[test]
    fn test_static_string_enum() {
        assert_eq!(STATUS.name(), "status");
        assert_eq!(STATUS.cast(&Value::from("legacy")).unwrap(), Tag::new("open"));
        assert_eq!(STATUS.dump(&Value::tag("paid")).unwrap(), Stored::Str("paid".into()));
    }

    #[test]
    fn test_static_integer_enum() {
        assert_eq!(PRIORITY.codes(), &[1, 2]);
        assert!(PRIORITY.equal(&Value::Int(2), &Value::from("high")));
    }

    #[test]
    #[should_panic(expected = "tag :a is declared more than once")]
    fn test_invalid_definition_is_fatal() {
        Lazy::force(&BROKEN);
    }
}
