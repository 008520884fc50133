#![no_main]

use libfuzzer_sys::fuzz_target;
use keyfmt::{Encoding, ParameterFormat, PrivateFormat, PublicFormat};

fuzz_target!(|data: &str| {
    // Label lookup should never panic, and any hit must round-trip
    if let Ok(encoding) = Encoding::try_from(data) {
        assert_eq!(encoding.label(), data);
    }
    if let Ok(format) = PrivateFormat::try_from(data) {
        assert_eq!(format.label(), data);
    }
    if let Ok(format) = PublicFormat::try_from(data) {
        assert_eq!(format.label(), data);
    }
    if let Ok(format) = ParameterFormat::try_from(data) {
        assert_eq!(format.label(), data);
    }
});
