//! Macros for ergonomic state and symbol declarations.

/// Generate a `State` trait implementation for a simple enum.
///
/// Each variant's name defaults to its identifier; an explicit name can
/// be given with `Variant = "name"`.
///
/// # Example
///
/// ```
/// use fsmkit::state_enum;
///
/// state_enum! {
///     pub enum Remainder {
///         S0,
///         S1,
///         S2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $display:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@display $variant $(, $display)?)),*
                }
            }
        }
    };

    (@display $variant:ident) => {
        stringify!($variant)
    };
    (@display $variant:ident, $display:literal) => {
        $display
    };
}

/// Generate a `Symbol` trait implementation for a simple enum.
///
/// Each variant's name defaults to its identifier; an explicit name can
/// be given with `Variant = "name"`, which is handy when symbols mirror
/// single characters of an input string.
///
/// # Example
///
/// ```
/// use fsmkit::symbol_enum;
/// use fsmkit::core::Symbol;
///
/// symbol_enum! {
///     pub enum Bit {
///         Zero = "0",
///         One = "1",
///     }
/// }
///
/// assert_eq!(Bit::Zero.name(), "0");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $display:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Symbol for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::symbol_enum!(@display $variant $(, $display)?)),*
                }
            }
        }
    };

    (@display $variant:ident) => {
        stringify!($variant)
    };
    (@display $variant:ident, $display:literal) => {
        $display
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, Symbol};

    state_enum! {
        enum TestState {
            Idle,
            Busy,
        }
    }

    symbol_enum! {
        enum TestSymbol {
            Zero = "0",
            One = "1",
            Halt,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
    }

    #[test]
    fn symbol_enum_macro_supports_display_names() {
        assert_eq!(TestSymbol::Zero.name(), "0");
        assert_eq!(TestSymbol::One.name(), "1");
        assert_eq!(TestSymbol::Halt.name(), "Halt");
    }

    #[test]
    fn macro_enums_are_hashable() {
        let mut set = std::collections::HashSet::new();
        set.insert((TestState::Idle, TestSymbol::Zero));
        set.insert((TestState::Idle, TestSymbol::Zero));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
    }
}
