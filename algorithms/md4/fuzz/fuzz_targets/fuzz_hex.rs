#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Digest bytes always survive a hex round trip
    let hash = md4_hash::digest(data);
    let hex = md4_hash::to_hex(&hash);
    assert_eq!(md4_hash::from_hex(&hex), Ok(hash));

    // Arbitrary text must parse or fail cleanly
    if let Ok(text) = core::str::from_utf8(data) {
        let _ = md4_hash::from_hex(text);
    }
});
