//! Fuzz target for numeric parsing and type inference.

#![no_main]

use libfuzzer_sys::fuzz_target;
use csvprof::{Classifier, InferredType, parse_numeric};

fuzz_target!(|data: &str| {
    if data.len() > 1_000 {
        return;
    }

    let parsed = parse_numeric(data);
    let classifier = Classifier::new();
    let inferred = classifier.infer_type([data]);

    if classifier.is_missing(data) {
        assert_eq!(inferred, InferredType::Text);
    } else {
        assert_eq!(inferred == InferredType::Number, parsed.is_some());
    }
});
