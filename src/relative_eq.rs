use crate::{BoundingBox, LngLat};

use approx::{AbsDiffEq, RelativeEq};

impl AbsDiffEq<Self> for LngLat {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        Self::Epsilon::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lng().abs_diff_eq(&other.lng(), epsilon)
            && self.lat().abs_diff_eq(&other.lat(), epsilon)
    }
}

impl RelativeEq for LngLat {
    fn default_max_relative() -> Self::Epsilon {
        Self::Epsilon::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lng().relative_eq(&other.lng(), epsilon, max_relative)
            && self.lat().relative_eq(&other.lat(), epsilon, max_relative)
    }
}

impl AbsDiffEq<Self> for BoundingBox {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        Self::Epsilon::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.min().abs_diff_eq(other.min(), epsilon)
            && self.max().abs_diff_eq(other.max(), epsilon)
            && self.trailing().abs_diff_eq(other.trailing(), epsilon)
    }
}

impl RelativeEq for BoundingBox {
    fn default_max_relative() -> Self::Epsilon {
        Self::Epsilon::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.min().relative_eq(other.min(), epsilon, max_relative)
            && self.max().relative_eq(other.max(), epsilon, max_relative)
            && self
                .trailing()
                .relative_eq(other.trailing(), epsilon, max_relative)
    }
}
