//! md4-hash Basic Example
//!
//! Minimal usage: `let digest = md4_hash::digest(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"Hello, World!";
    let digest = md4_hash::digest(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("MD4:  {}", md4_hash::to_hex(&digest));

    // Text goes through an explicit UTF-8 entry point
    println!("Text: {}", md4_hash::digest_str_hex("Hello, World!"));
}
