//! Macros for declarative state graph construction.

/// Declare a state graph as a literal.
///
/// Expands to a [`StateGraphBuilder`](crate::builder::StateGraphBuilder)
/// chain, so it produces `Result<StateGraph, BuildError>` and performs the
/// same validation as the builder.
///
/// # Example
///
/// ```
/// use retrace::state_graph;
///
/// let graph = state_graph! {
///     initial: "normal",
///     "normal" => { "study" => "busy" },
///     "busy" => { "get_tired" => "sleeping" },
///     "sleeping" => { "get_up" => "normal" },
/// }
/// .unwrap();
///
/// assert_eq!(graph.initial(), "normal");
/// ```
#[macro_export]
macro_rules! state_graph {
    (
        initial: $initial:expr,
        $(
            $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
        ),* $(,)?
    ) => {
        $crate::builder::StateGraphBuilder::new()
            .initial($initial)
            $(
                .state(
                    $crate::builder::StateBuilder::new($state)
                        $( .on($event, $target) )*
                )
            )*
            .build()
    };
}
