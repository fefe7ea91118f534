//! Declarative helpers for writing configuration inline.

// =============================================================================
// discovery_map! - Build a RawDiscovery without nested IndexMap boilerplate
// =============================================================================

/// Build a [`RawDiscovery`](crate::config::RawDiscovery) inline.
///
/// # Example
///
/// ```ignore
/// let discovery = discovery_map! {
///     "Animal" => {
///         "siblings" => ["Animal"],
///         "parents" => ["Animal", "Pet"],
///     },
///     "Toy" => {
///         "owners" => ["Pet"],
///     },
/// };
/// ```
///
/// Order is kept at both levels. Repeating a capability merges its functions
/// into the first entry; repeating a function replaces its targets.
#[macro_export]
macro_rules! discovery_map {
    () => {
        $crate::config::RawDiscovery::new()
    };
    (
        $(
            $capability:expr => {
                $( $function:expr => [ $( $target:expr ),* $(,)? ] ),* $(,)?
            }
        ),+ $(,)?
    ) => {{
        let mut map = $crate::config::RawDiscovery::new();
        $(
            let functions = map
                .entry(::std::string::String::from($capability))
                .or_insert_with($crate::indexmap::IndexMap::new);
            $(
                functions.insert(
                    ::std::string::String::from($function),
                    ::std::vec![ $( ::std::string::String::from($target) ),* ],
                );
            )*
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_discovery_map_order_and_merge() {
        let map = discovery_map! {
            "Animal" => { "siblings" => ["Animal"] },
            "Toy" => { "owners" => ["Pet", "Animal"], "makers" => [] },
            "Animal" => { "parents" => ["Animal"] },
        };

        let capabilities: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(capabilities, vec!["Animal", "Toy"]);

        let animal: Vec<_> = map["Animal"].keys().map(String::as_str).collect();
        assert_eq!(animal, vec!["siblings", "parents"]);
        assert_eq!(map["Toy"]["owners"], vec!["Pet", "Animal"]);
        assert!(map["Toy"]["makers"].is_empty());
    }

    #[test]
    fn test_empty_discovery_map() {
        let map = discovery_map! {};
        assert!(map.is_empty());
    }
}
