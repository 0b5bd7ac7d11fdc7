//! This module contains the traits definitions shared by the decomposer and
//! the helpers.

use crate::input::InputMatrix;
use ndarray::{Array2, ArrayView2};

/// Anything that can lend a two dimensional view of its data.
pub trait ArrayProvider<T> {
    fn array_view(&self) -> ArrayView2<T>;
}

impl<T> ArrayProvider<T> for ArrayView2<'_, T> {
    fn array_view(&self) -> ArrayView2<'_, T> {
        self.view()
    }
}

impl<T> ArrayProvider<T> for Array2<T> {
    fn array_view(&self) -> ArrayView2<'_, T> {
        self.view()
    }
}

impl<T, P: ArrayProvider<T>> ArrayProvider<T> for &P {
    fn array_view(&self) -> ArrayView2<'_, T> {
        P::array_view(*self)
    }
}

impl<T> ArrayProvider<T> for InputMatrix<T> {
    fn array_view(&self) -> ArrayView2<'_, T> {
        self.view()
    }
}
