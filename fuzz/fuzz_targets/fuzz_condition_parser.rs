#![no_main]

use libfuzzer_sys::fuzz_target;
use xivapi::query::{parse_condition, Prefix};
use xivapi::SearchQuery;

fuzz_target!(|data: &str| {
    // Parsing must never panic, and accepted conditions must render
    if let Ok(condition) = parse_condition(data) {
        let query = condition.apply(SearchQuery::new(), Prefix::Must);
        assert!(query.build().starts_with('+'));
    }
});
