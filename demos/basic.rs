//! Keyed Envelope: walkthrough
//!
//! Run with: `RUST_LOG=debug cargo run --example basic`
//!
//! Encrypts with the in-memory key manager, inspects the blob, shows tamper
//! detection and the empty-blob case.

use keyed_envelope::{
    decrypt, encrypt, inspect, EncryptedData, Envelope, EnvelopeError, MemoryKeyManager, OsRandom,
    wire::{LENGTH_PREFIX_BYTES, NONCE_BYTES, TAG_BYTES},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), EnvelopeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    section("1. Wire format");
    println!("  Length prefix:  {} bytes (little-endian)", LENGTH_PREFIX_BYTES);
    println!("  Nonce:          {} bytes", NONCE_BYTES);
    println!("  Tag:            {} bytes", TAG_BYTES);

    section("2. Round trip");
    let manager = MemoryKeyManager::new();
    let sealed = encrypt(b"My Context", b"Hello World", &manager, &OsRandom)?;
    let opened = decrypt(&sealed, &manager)?;
    println!("  {}", inspect(&sealed)?);
    println!("  Plaintext:      {}", String::from_utf8_lossy(&opened));

    section("3. Tamper detection");
    let mut data = sealed.data().to_vec();
    let last = data.len() - 1;
    data[last] ^= 0x01;
    match decrypt(&EncryptedData::new(sealed.key_id(), data), &manager) {
        Err(e) => println!("  Flipped tag bit -> {}", e),
        Ok(_) => println!("  Flipped tag bit -> accepted (unexpected)"),
    }

    section("4. Empty blob");
    let empty = EncryptedData::new(sealed.key_id(), Vec::new());
    println!("  Decrypts to {} bytes", decrypt(&empty, &manager)?.len());

    section("5. Envelope façade");
    let envelope = Envelope::new(manager.clone(), manager.clone());
    for tenant in ["alpha", "beta", "alpha"] {
        let ct = envelope.seal(tenant.as_bytes(), b"per-tenant payload")?;
        envelope.open(&ct)?;
        println!("  {:<6} -> key family {}", tenant, ct.key_id());
    }
    println!("  Keys held:      {}", manager.len());

    Ok(())
}

fn section(title: &str) {
    println!("\n== {} ==", title);
}
