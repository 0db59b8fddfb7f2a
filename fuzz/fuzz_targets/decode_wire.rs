#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(parts) = keyed_envelope::wire::decode_wire(data) {
        let _ = keyed_envelope::wire::split_nonce(parts.sealed);
    }
});
