#![no_main]

use libfuzzer_sys::fuzz_target;
use xivapi::response::{RowResponse, SearchResponse, SheetResponse, VersionsResponse};

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<SearchResponse>(data);
    let _ = serde_json::from_slice::<SheetResponse>(data);
    let _ = serde_json::from_slice::<RowResponse>(data);
    let _ = serde_json::from_slice::<VersionsResponse>(data);
});
