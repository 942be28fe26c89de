/// `a * (1 - t) + b * t`
#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + b * t
}
