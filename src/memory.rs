use num::{NumCast, Zero, Float};
use std::{
    fmt::{Debug, Display, LowerExp}, iter::Sum, ops::{Add, AddAssign, Sub, SubAssign}
};
use rand::distributions::uniform::SampleUniform;

/// Floating point type a k-means run is calculated in.
pub trait Primitive: Add + AddAssign + Sum + Sub + SubAssign + Zero + Float + NumCast + SampleUniform
                + PartialOrd + Copy + Default + Display + Debug + Sync + Send + LowerExp + 'static
                + for<'a> AddAssign<&'a Self> {
    /// Convert a member count into the primitive (used as divisor for the mean).
    fn from_count(cnt: usize) -> Self {
        <Self as NumCast>::from(cnt).unwrap_or_else(Self::infinity)
    }
}
impl Primitive for f32 {}
impl Primitive for f64 {}
