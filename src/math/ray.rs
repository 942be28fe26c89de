use super::Vec3;

/// Half-line `origin + direction * t`. The direction is not required to be
/// normalized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f64) -> Vec3 {
        self.origin + self.direction * time
    }
}
