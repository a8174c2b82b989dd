//! Fuzz target for the reader and profiler.
//!
//! Checks that arbitrary bytes never panic the CSV reader, and that any table
//! it produces profiles with consistent missing/count accounting.

#![no_main]

use libfuzzer_sys::fuzz_target;
use csvprof::{Parser, Profiler};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(table) = Parser::new().parse_bytes(data) {
        let report = Profiler::new().profile_table(&table);
        for column in &report.columns {
            assert_eq!(column.count + column.missing, report.n_rows);
        }
    }
});
