//
// This file is part of tree_search.
//
// tree_search is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tree_search is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tree_search. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

use std::fmt::{Debug, Display};
use std::ops::Neg;

/// A node value.
///
/// This is a signed numeric type.  Searches seed their running extrema and their
/// alpha-beta windows with `min()` and `max()`, so these must bound every value a
/// tree can hold.
///
/// The floating point implementations use the IEEE infinities.  The integer
/// implementations use the saturating sentinels `T::MAX` and `-T::MAX`, so `T::MIN`
/// is not a valid node value.  A node holding exactly `T::MAX` compares equal to the
/// sentinel.
///
/// # Example
///
/// ```rust
/// use tree_search::analysis::Evaluation;
///
/// assert_eq!(<f64 as Evaluation>::max(), f64::INFINITY);
/// assert_eq!(<i32 as Evaluation>::min(), -i32::MAX);
/// assert!(!f64::NAN.is_valid());
/// ```
pub trait Evaluation:
    Sized +
    Clone +
    Copy +
    Debug +
    Display +
    Neg<Output = Self> +
    PartialEq +
    PartialOrd {
    /// The largest value, used as positive infinity.  This must be safely negatable.
    fn max() -> Self;
    /// The smallest value, used as negative infinity.
    fn min() -> Self { -Self::max() }
    /// Returns `false` if this value cannot be ordered against the others.
    fn is_valid(&self) -> bool { true }
}

macro_rules! impl_float_evaluation {
    ($($type_: ident),*) => {$(
        impl Evaluation for $type_ {
            fn max() -> $type_ { $type_::INFINITY }
            fn is_valid(&self) -> bool { !self.is_nan() }
        }
    )*}
}

macro_rules! impl_integer_evaluation {
    ($($type_: ident),*) => {$(
        impl Evaluation for $type_ {
            fn max() -> $type_ { $type_::MAX }
            fn is_valid(&self) -> bool { *self != $type_::MIN }
        }
    )*}
}

impl_float_evaluation!(f32, f64);
impl_integer_evaluation!(i16, i32, i64);
