use super::*;

#[test]
fn fnv_is_stable_across_split_writes() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"vitrine");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"vit");
    b.write_bytes(b"rine");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_differs_for_different_input() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"index.html");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"style.css");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u8(255, 255), 255);
}
