#![no_main]

use libfuzzer_sys::fuzz_target;
use mensura_format::{UnitCatalog, parse_quantity};

// The parse boundary must reject arbitrary input with a typed error,
// never a panic.
fuzz_target!(|data: &str| {
    let catalog = UnitCatalog::common();
    let _ = parse_quantity(data, &catalog);
});
