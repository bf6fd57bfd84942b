use crate::foundation::math::Fnv1a64;

/// 128-bit content fingerprint from two independently seeded FNV-1a lanes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub fn fingerprint_bytes(bytes: &[u8]) -> ContentFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);
    a.write_bytes(&(bytes.len() as u64).to_le_bytes());
    b.write_bytes(&(bytes.len() as u64).to_le_bytes());
    a.write_bytes(bytes);
    b.write_bytes(bytes);
    ContentFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/fingerprint.rs"]
mod tests;
