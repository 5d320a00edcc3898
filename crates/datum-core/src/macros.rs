/// Implement a binary operator for a newtype over a `num-bigint` value, for
/// owned and borrowed operands.
macro_rules! forward_binop {
    ($ty:ident, $trait:ident, $method:ident) => {
        impl std::ops::$trait for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty(std::ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl std::ops::$trait<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(std::ops::$trait::$method(self.0, &rhs.0))
            }
        }

        impl std::ops::$trait<&$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(std::ops::$trait::$method(&self.0, &rhs.0))
            }
        }
    };
}
