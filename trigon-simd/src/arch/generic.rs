//! Portable fallback kernels.
//!
//! Vector kernels are plain loops over the lanes, which the compiler is free
//! to auto-vectorize. Trig kernels defer to the standard library.

use std::ops::{Add, Div, Mul, Sub};

use crate::dispatch::{Mat4x4, Mat4Kernels, TrigKernels, Vec4Kernels};

#[inline]
fn zip<T: Copy>(a: [T; 4], b: [T; 4], op: impl Fn(T, T) -> T) -> [T; 4] {
    std::array::from_fn(|i| op(a[i], b[i]))
}

#[inline]
fn zip_scalar<T: Copy>(a: [T; 4], b: T, op: impl Fn(T, T) -> T) -> [T; 4] {
    a.map(|x| op(x, b))
}

#[inline]
fn zip_mat(a: &Mat4x4, b: &Mat4x4, op: impl Fn(f32, f32) -> f32) -> Mat4x4 {
    std::array::from_fn(|row| zip(a[row], b[row], &op))
}

#[inline]
fn zip_mat_scalar(a: &Mat4x4, b: f32, op: impl Fn(f32, f32) -> f32) -> Mat4x4 {
    a.map(|row| zip_scalar(row, b, &op))
}

fn add<T: Copy + Add<Output = T>>(a: [T; 4], b: [T; 4]) -> [T; 4] {
    zip(a, b, T::add)
}

fn sub<T: Copy + Sub<Output = T>>(a: [T; 4], b: [T; 4]) -> [T; 4] {
    zip(a, b, T::sub)
}

fn mul<T: Copy + Mul<Output = T>>(a: [T; 4], b: [T; 4]) -> [T; 4] {
    zip(a, b, T::mul)
}

fn div<T: Copy + Div<Output = T>>(a: [T; 4], b: [T; 4]) -> [T; 4] {
    zip(a, b, T::div)
}

fn add_scalar<T: Copy + Add<Output = T>>(a: [T; 4], b: T) -> [T; 4] {
    zip_scalar(a, b, T::add)
}

fn sub_scalar<T: Copy + Sub<Output = T>>(a: [T; 4], b: T) -> [T; 4] {
    zip_scalar(a, b, T::sub)
}

fn mul_scalar<T: Copy + Mul<Output = T>>(a: [T; 4], b: T) -> [T; 4] {
    zip_scalar(a, b, T::mul)
}

fn div_scalar<T: Copy + Div<Output = T>>(a: [T; 4], b: T) -> [T; 4] {
    zip_scalar(a, b, T::div)
}

fn mat_add(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
    zip_mat(a, b, |x, y| x + y)
}

fn mat_sub(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
    zip_mat(a, b, |x, y| x - y)
}

fn mat_mul(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
    zip_mat(a, b, |x, y| x * y)
}

fn mat_div(a: &Mat4x4, b: &Mat4x4) -> Mat4x4 {
    zip_mat(a, b, |x, y| x / y)
}

fn mat_add_scalar(a: &Mat4x4, b: f32) -> Mat4x4 {
    zip_mat_scalar(a, b, |x, y| x + y)
}

fn mat_sub_scalar(a: &Mat4x4, b: f32) -> Mat4x4 {
    zip_mat_scalar(a, b, |x, y| x - y)
}

fn mat_mul_scalar(a: &Mat4x4, b: f32) -> Mat4x4 {
    zip_mat_scalar(a, b, |x, y| x * y)
}

fn mat_div_scalar(a: &Mat4x4, b: f32) -> Mat4x4 {
    zip_mat_scalar(a, b, |x, y| x / y)
}

macro_rules! std_trig {
    ($type:ty, $sin:ident, $cos:ident, $sin_cos:ident) => {
        fn $sin(x: $type) -> $type {
            x.sin()
        }

        fn $cos(x: $type) -> $type {
            x.cos()
        }

        fn $sin_cos(x: $type) -> ($type, $type) {
            x.sin_cos()
        }
    };
}

std_trig!(f32, sin_f32, cos_f32, sin_cos_f32);
std_trig!(f64, sin_f64, cos_f64, sin_cos_f64);

pub const fn vec4_f32_kernels() -> Vec4Kernels<f32> {
    Vec4Kernels {
        isa: "fallback",
        add: add::<f32>,
        sub: sub::<f32>,
        mul: mul::<f32>,
        div: div::<f32>,
        add_scalar: add_scalar::<f32>,
        sub_scalar: sub_scalar::<f32>,
        mul_scalar: mul_scalar::<f32>,
        div_scalar: div_scalar::<f32>,
    }
}

pub const fn vec4_f64_kernels() -> Vec4Kernels<f64> {
    Vec4Kernels {
        isa: "fallback",
        add: add::<f64>,
        sub: sub::<f64>,
        mul: mul::<f64>,
        div: div::<f64>,
        add_scalar: add_scalar::<f64>,
        sub_scalar: sub_scalar::<f64>,
        mul_scalar: mul_scalar::<f64>,
        div_scalar: div_scalar::<f64>,
    }
}

pub const fn mat4_kernels() -> Mat4Kernels {
    Mat4Kernels {
        isa: "fallback",
        add: mat_add,
        sub: mat_sub,
        mul: mat_mul,
        div: mat_div,
        add_scalar: mat_add_scalar,
        sub_scalar: mat_sub_scalar,
        mul_scalar: mat_mul_scalar,
        div_scalar: mat_div_scalar,
    }
}

pub const fn trig_f32_kernels() -> TrigKernels<f32> {
    TrigKernels {
        isa: "fallback",
        sin: sin_f32,
        cos: cos_f32,
        sin_cos: sin_cos_f32,
    }
}

pub const fn trig_f64_kernels() -> TrigKernels<f64> {
    TrigKernels {
        isa: "fallback",
        sin: sin_f64,
        cos: cos_f64,
        sin_cos: sin_cos_f64,
    }
}

#[cfg(test)]
mod tests {
    use super::{mat4_kernels, trig_f64_kernels, vec4_f32_kernels, vec4_f64_kernels};

    #[test]
    fn test_vec4_kernels() {
        let k = vec4_f32_kernels();
        let a = [1., 2., 3., 4.];
        let b = [4., 3., 2., 1.];
        assert_eq!((k.add)(a, b), [5., 5., 5., 5.]);
        assert_eq!((k.sub)(a, b), [-3., -1., 1., 3.]);
        assert_eq!((k.mul)(a, b), [4., 6., 6., 4.]);
        assert_eq!((k.div)(a, b), [0.25, 2. / 3., 1.5, 4.]);
        assert_eq!((k.mul_scalar)(a, 2.), [2., 4., 6., 8.]);
        assert_eq!((k.sub_scalar)(a, 1.), [0., 1., 2., 3.]);

        let k = vec4_f64_kernels();
        assert_eq!((k.add_scalar)([1., 2., 3., 4.], 0.5), [1.5, 2.5, 3.5, 4.5]);
        assert_eq!((k.div_scalar)([1., 2., 3., 4.], 2.), [0.5, 1., 1.5, 2.]);
    }

    #[test]
    fn test_mat4_kernels_are_element_wise() {
        let k = mat4_kernels();
        let a: [[f32; 4]; 4] = std::array::from_fn(|r| std::array::from_fn(|c| (r * 4 + c) as f32));
        let ones = [[1.0f32; 4]; 4];
        let prod = (k.mul)(&a, &ones);
        assert_eq!(prod, a);
        let sum = (k.add_scalar)(&a, 1.);
        assert_eq!(sum[3][3], 16.);
        assert_eq!((k.div)(&a, &[[2.0; 4]; 4])[1][2], 3.);
    }

    #[test]
    fn test_trig_kernels() {
        let k = trig_f64_kernels();
        assert_eq!((k.sin)(1.0), 1.0f64.sin());
        assert_eq!((k.sin_cos)(0.0), (0.0, 1.0));
    }
}
