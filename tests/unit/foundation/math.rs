use super::*;

#[test]
fn mul_div255_identity_and_zero() {
    for x in [0u16, 1, 127, 255] {
        assert_eq!(u16::from(mul_div255_u8(x, 255)), x);
        assert_eq!(mul_div255_u8(x, 0), 0);
    }
}

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp_u8(10, 250, 0.0), 10);
    assert_eq!(lerp_u8(10, 250, 1.0), 250);
    assert_eq!(lerp_u8(0, 200, 0.5), 100);
    assert_eq!(lerp_u8(0, 200, 7.0), 200);
}

#[test]
fn scale_saturates() {
    assert_eq!(scale_u8(200, 2.0), 255);
    assert_eq!(scale_u8(200, 0.5), 100);
    assert_eq!(scale_u8(200, -1.0), 0);
}
