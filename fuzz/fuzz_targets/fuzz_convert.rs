#![no_main]

//! Fuzz target that feeds arbitrary JSON to every tool's converter.
//! Conversion must either succeed with one issue per finding or fail cleanly,
//! never panic, and a failed run must leave no output behind.

use climate_subset_lib::{ConvertOptions, Tool};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(report) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    for tool in Tool::ALL {
        let validated = tool.validator().validate(&report).is_ok();
        let mut converter = tool.converter(report.clone(), ConvertOptions::default());

        match converter.convert_to_subset() {
            Ok(()) => assert!(validated, "{tool} converted a report its validator rejected"),
            Err(_) => assert!(converter.output().is_empty(), "{tool} kept output from a failed conversion"),
        }
    }
});
