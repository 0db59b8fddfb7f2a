#![no_main]

use keyed_envelope::{BoxError, EncryptedData, Key, KeyId};
use libfuzzer_sys::fuzz_target;

fn retriever(_: &KeyId, encrypted_key: &[u8]) -> Result<Key, BoxError> {
    // Derive a key from the blob so the fuzzer can reach the AEAD path.
    let mut key = [0x5Au8; 32];
    for (k, b) in key.iter_mut().zip(encrypted_key) {
        *k ^= b;
    }
    Ok(Key::from_bytes(key))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let mut id = [0u8; 16];
    id.copy_from_slice(&data[..16]);
    let blob = EncryptedData::new(KeyId::new(id), data[16..].to_vec());

    let _ = keyed_envelope::decrypt(&blob, &retriever);
    let _ = keyed_envelope::inspect(&blob);
});
