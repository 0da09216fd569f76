//! Macro for declaring the event type table.

/// Declares the closed set of event types from a single table.
///
/// Each row names the enum variant, the symbol, the wire value, and the
/// category. This generates:
/// - An `event_types` module with one `&str` constant per symbol
/// - The `EventType` enum
/// - `EventType::ALL` in declaration order
/// - `as_str()`, `symbol()`, and `category()` as `const fn` matches
///
/// # Example
///
/// ```ignore
/// define_event_types! {
///     ServiceCreate => SERVICE_CREATE = "sh.keptn.internal.event.service.create", Service;
/// }
/// ```
macro_rules! define_event_types {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $symbol:ident = $wire:literal, $category:ident;
    )+) => {
        /// All event type wire values as constants.
        pub mod event_types {
            $(
                pub const $symbol: &str = $wire;
            )+
        }

        /// A registered Keptn event type.
        ///
        /// Serializes as its wire value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum EventType {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl EventType {
            /// Every event type, in declaration order.
            pub const ALL: &'static [EventType] = &[$(EventType::$variant,)+];

            /// Returns the wire value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(EventType::$variant => event_types::$symbol,)+
                }
            }

            /// Returns the symbol name, e.g. `DEPLOYMENT_FINISHED`.
            #[must_use]
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(EventType::$variant => stringify!($symbol),)+
                }
            }

            /// Returns the category this event type belongs to.
            #[must_use]
            pub const fn category(self) -> $crate::EventCategory {
                match self {
                    $(EventType::$variant => $crate::EventCategory::$category,)+
                }
            }
        }
    };
}
