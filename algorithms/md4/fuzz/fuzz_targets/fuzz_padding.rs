#![no_main]

use libfuzzer_sys::fuzz_target;
use md4_hash::kernels::compress::{process, State};
use md4_hash::kernels::finalize::assemble;
use md4_hash::kernels::padding::pad;

fuzz_target!(|data: &[u8]| {
    let padded = pad(data);

    // Block aligned, with room for the marker and the length field
    assert_eq!(padded.len() % 64, 0);
    assert!(padded.len() >= data.len() + 9);
    assert!(padded.len() <= data.len() + 72);
    assert_eq!(&padded.as_bytes()[..data.len()], data);

    // The staged pipeline and the one-shot API must agree
    let staged = assemble(process(&padded, State::INITIAL));
    assert_eq!(staged, md4_hash::digest(data), "Staged and one-shot digests differ!");
});
