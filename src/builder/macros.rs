//! Macros for ergonomic transition table construction.

/// Build a [`Config`](crate::core::Config) from a table literal.
///
/// State and event names are written as identifiers and stored as strings.
/// States are registered in the order they appear.
///
/// # Example
///
/// ```
/// use retrace::fsm_config;
///
/// let config = fsm_config! {
///     initial: red,
///     states: {
///         red: { timer => green },
///         green: { timer => yellow },
///         yellow: { timer => red },
///     }
/// };
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.target("green", "timer"), Some("yellow"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident : { $( $event:ident => $target:ident ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::core::Config::new(stringify!($initial));
        $(
            config.states.insert(
                stringify!($state).to_string(),
                $crate::core::StateDefinition::new()
                    $( .with_transition(stringify!($event), stringify!($target)) )*,
            );
        )*
        config
    }};
}
