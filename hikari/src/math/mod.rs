// Component-wise impls shared by the three-component types.
// Defined before the submodules so that they are in scope there.

/// Implements `$tr` as `$lhs op $rhs -> $out`, component by component.
macro_rules! impl_component_op {
    ($tr:ident, $fun:ident, $op:tt, $lhs:ty, $rhs:ty, $out:ident, [$($c:ident)+]) => {
        impl std::ops::$tr<$rhs> for $lhs {
            type Output = $out;

            fn $fun(self, other: $rhs) -> $out {
                $out::new($(self.$c $op other.$c),+)
            }
        }
    };
}

/// Implements `$tr` as `$lhs op f64 -> $lhs`.
macro_rules! impl_scalar_op {
    ($tr:ident, $fun:ident, $op:tt, $lhs:ident, [$($c:ident)+]) => {
        impl std::ops::$tr<f64> for $lhs {
            type Output = $lhs;

            fn $fun(self, other: f64) -> $lhs {
                $lhs::new($(self.$c $op other),+)
            }
        }
    };
}

/// Implements the compound assignment `$tr` through the matching binary op.
macro_rules! impl_assign_op {
    ($tr:ident, $fun:ident, $op:tt, $lhs:ident, $rhs:ty) => {
        impl std::ops::$tr<$rhs> for $lhs {
            fn $fun(&mut self, other: $rhs) {
                *self = *self $op other;
            }
        }
    };
}

macro_rules! impl_approx {
    ($t:ident, [$($c:ident)+]) => {
        impl approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                <f64 as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$c, &other.$c, epsilon))&&+
            }
        }

        impl approx::RelativeEq for $t {
            fn default_max_relative() -> f64 {
                <f64 as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                $(approx::RelativeEq::relative_eq(&self.$c, &other.$c, epsilon, max_relative))&&+
            }
        }
    };
}

pub mod common;
pub mod point;
pub mod ray;
pub mod spectrum;
pub mod vector;

pub use common::{align_zero, is_zero, EPSILON};
pub use point::{point3, Point3};
pub use ray::{Ray, RAY_BIAS};
pub use spectrum::Spectrum;
pub use vector::{vec3, Vec3};
