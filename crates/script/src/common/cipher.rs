//! Rolling-key XOR stream used for every string stored in a script image.
//!
//! The key is reset for each string. Both directions feed the *plaintext*
//! byte back into the key, which is what makes them inverse to each other.

pub const STRING_KEY: u32 = 0x4B5AB4A5;

#[inline]
fn next_key(key: u32, plain: u8) -> u32 {
  plain as u32 ^ ((key << 9) | ((key >> 23) & 0x1F0))
}

pub fn decrypt(data: &mut [u8]) {
  let mut key = STRING_KEY;

  for byte in data.iter_mut() {
    *byte ^= key as u8;
    key = next_key(key, *byte);
  }
}

pub fn encrypt(data: &mut [u8]) {
  let mut key = STRING_KEY;

  for byte in data.iter_mut() {
    let plain = *byte;
    *byte ^= key as u8;
    key = next_key(key, plain);
  }
}
