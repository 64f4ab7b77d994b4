#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Scanning should never panic; unknown types come back as errors.
        if let Ok(doc) = matwrap_parser::parse(source) {
            let _ = matwrap_ir::dump_document(&doc);
        }
    }
});
