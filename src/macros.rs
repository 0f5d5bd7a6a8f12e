//! Utility macros.
//!
//! Each macro takes the generic scalar parameter of the implementing type in
//! brackets, e.g. `[F]` for `Vector3<F>`, or `[]` for concrete types like the
//! matrices.

macro_rules! impl_binop {
    (
        $op:ident, $method:ident, [$($param:ident)?], $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a $(, $param: $crate::num::Float)?> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($param: $crate::num::Float)?> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a $(, $param: $crate::num::Float)?> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<$($param: $crate::num::Float)?> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($param:ident)?], $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($param: $crate::num::Float)?> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($param: $crate::num::Float)?> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    (
        $op:ident, $method:ident, [$($param:ident)?], $tl:ty, $tr:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<$($param: $crate::num::Float)?> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($param: $crate::num::Float)?> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements a pure binary operator in terms of the corresponding compound
/// assignment operator by copying the left operand and mutating the copy.
macro_rules! impl_binop_via_assign {
    (
        $op:ident, $method:ident, $assign_op:ident, $assign_method:ident,
        [$($param:ident)?], $tl:ty, $tr:ty
    ) => {
        impl_binop!($op, $method, [$($param)?], $tl, $tr, $tl, |a, b| {
            let mut result = *a;
            ::std::ops::$assign_op::$assign_method(&mut result, b);
            result
        });
    };
}

macro_rules! impl_abs_diff_eq {
    ([$($param:ident)?], $t:ty, $eps:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<$($param: $crate::num::Float)?> ::approx::AbsDiffEq for $t {
            type Epsilon = $eps;

            fn default_epsilon() -> Self::Epsilon {
                <$eps as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    (
        [$($param:ident)?], $t:ty, $eps:ty,
        |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block
    ) => {
        impl<$($param: $crate::num::Float)?> ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <$eps as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
