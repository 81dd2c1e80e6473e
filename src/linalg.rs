//! Small fixed-size vector and matrix types.
//!
//! Arithmetic on these types is element-wise and is forwarded to the kernels
//! installed in the dispatch table.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use trigon_simd::{kernels, KernelElem, Mat4x4};

/// A vector of four `f32` or `f64` lanes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec4<T> {
    data: [T; 4],
}

impl<T: Copy> Vec4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Vec4<T> {
        Vec4 { data: [x, y, z, w] }
    }

    /// Return a vector with every lane set to `x`.
    pub fn splat(x: T) -> Vec4<T> {
        Vec4 { data: [x; 4] }
    }

    pub fn to_array(self) -> [T; 4] {
        self.data
    }
}

impl<T> From<[T; 4]> for Vec4<T> {
    fn from(data: [T; 4]) -> Vec4<T> {
        Vec4 { data }
    }
}

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    fn index(&self, lane: usize) -> &T {
        &self.data[lane]
    }
}

impl<T> IndexMut<usize> for Vec4<T> {
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.data[lane]
    }
}

macro_rules! impl_vec_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $scalar_slot:ident) => {
        impl<T: KernelElem> $trait for Vec4<T> {
            type Output = Vec4<T>;

            #[inline]
            fn $method(self, rhs: Vec4<T>) -> Vec4<T> {
                let op = T::vec4_kernels(kernels()).$method;
                Vec4 {
                    data: op(self.data, rhs.data),
                }
            }
        }

        impl<T: KernelElem> $trait<T> for Vec4<T> {
            type Output = Vec4<T>;

            #[inline]
            fn $method(self, rhs: T) -> Vec4<T> {
                let op = T::vec4_kernels(kernels()).$scalar_slot;
                Vec4 {
                    data: op(self.data, rhs),
                }
            }
        }

        impl<T: KernelElem> $assign_trait for Vec4<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Vec4<T>) {
                *self = <Self as $trait>::$method(*self, rhs);
            }
        }

        impl<T: KernelElem> $assign_trait<T> for Vec4<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = <Self as $trait<T>>::$method(*self, rhs);
            }
        }
    };
}

impl_vec_op!(Add, add, AddAssign, add_assign, add_scalar);
impl_vec_op!(Sub, sub, SubAssign, sub_assign, sub_scalar);
impl_vec_op!(Mul, mul, MulAssign, mul_assign, mul_scalar);
impl_vec_op!(Div, div, DivAssign, div_assign, div_scalar);

/// A 4×4 `f32` matrix, stored row by row.
///
/// `*` and `/` are element-wise, not matrix products.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Mat4 {
    rows: Mat4x4,
}

impl Mat4 {
    pub fn identity() -> Mat4 {
        Mat4 {
            rows: std::array::from_fn(|r| std::array::from_fn(|c| if r == c { 1. } else { 0. })),
        }
    }

    pub fn from_rows(rows: Mat4x4) -> Mat4 {
        Mat4 { rows }
    }

    pub fn rows(&self) -> &Mat4x4 {
        &self.rows
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    fn index(&self, row: usize) -> &[f32; 4] {
        &self.rows[row]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, row: usize) -> &mut [f32; 4] {
        &mut self.rows[row]
    }
}

macro_rules! impl_mat_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $scalar_slot:ident) => {
        impl $trait for Mat4 {
            type Output = Mat4;

            #[inline]
            fn $method(self, rhs: Mat4) -> Mat4 {
                Mat4 {
                    rows: (kernels().mat4.$method)(&self.rows, &rhs.rows),
                }
            }
        }

        impl $trait<f32> for Mat4 {
            type Output = Mat4;

            #[inline]
            fn $method(self, rhs: f32) -> Mat4 {
                Mat4 {
                    rows: (kernels().mat4.$scalar_slot)(&self.rows, rhs),
                }
            }
        }

        impl $assign_trait for Mat4 {
            #[inline]
            fn $assign_method(&mut self, rhs: Mat4) {
                self.rows = (kernels().mat4.$method)(&self.rows, &rhs.rows);
            }
        }

        impl $assign_trait<f32> for Mat4 {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                self.rows = (kernels().mat4.$scalar_slot)(&self.rows, rhs);
            }
        }
    };
}

impl_mat_op!(Add, add, AddAssign, add_assign, add_scalar);
impl_mat_op!(Sub, sub, SubAssign, sub_assign, sub_scalar);
impl_mat_op!(Mul, mul, MulAssign, mul_assign, mul_scalar);
impl_mat_op!(Div, div, DivAssign, div_assign, div_scalar);

#[cfg(test)]
mod tests {
    use super::{Mat4, Vec4};

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0f32, 2., 3., 4.);
        let b = Vec4::from([4., 3., 2., 1.]);

        assert_eq!((a + b).to_array(), [5.; 4]);
        assert_eq!((a - b).to_array(), [-3., -1., 1., 3.]);
        assert_eq!((a * b).to_array(), [4., 6., 6., 4.]);
        assert_eq!((a / 2.).to_array(), [0.5, 1., 1.5, 2.]);
        assert_eq!(a + 1., Vec4::new(2., 3., 4., 5.));

        let mut c = Vec4::splat(2.0f64);
        c *= Vec4::new(1., 2., 3., 4.);
        c -= 1.;
        c /= Vec4::splat(0.5);
        c += 0.25;
        assert_eq!(c.to_array(), [2.25, 6.25, 10.25, 14.25]);
        assert_eq!(c[2], 10.25);
        c[0] = 0.;
        assert_eq!(c[0], 0.);
    }

    #[test]
    fn test_mat4_ops() {
        let id = Mat4::identity();
        assert_eq!(id[2], [0., 0., 1., 0.]);

        let m = Mat4::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| (r * 4 + c) as f32)
        }));

        // Element-wise, so multiplying by the identity keeps the diagonal.
        let diag = m * id;
        assert_eq!(diag.rows()[1], [0., 5., 0., 0.]);
        assert_eq!((m + 1.)[3][3], 16.);
        assert_eq!((m - m), Mat4::default());
        assert_eq!((m / 2.)[0][1], 0.5);

        let mut n = m;
        n += m;
        n /= Mat4::from_rows([[2.; 4]; 4]);
        assert_eq!(n, m);
        n *= 3.;
        n -= 1.;
        assert_eq!(n[1][0], 11.);
        n[1][0] = -1.;
        assert_eq!(n.rows()[1][0], -1.);
    }
}
