use super::*;

#[test]
fn starts_at_unity() {
    assert_eq!(breathing_factor(0.035, 0.55, 0.0), 1.0);
}

#[test]
fn stays_within_strength_band() {
    for i in 0..500 {
        let t = f64::from(i) * 0.017;
        let f = breathing_factor(0.035, 0.55, t);
        assert!((1.0 - 0.035 - 1e-12..=1.0 + 0.035 + 1e-12).contains(&f));
    }
}

#[test]
fn peaks_at_quarter_period() {
    let hz = 0.5;
    let f = breathing_factor(0.1, hz, 0.25 / hz);
    assert!((f - 1.1).abs() < 1e-9);
}
