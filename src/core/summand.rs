use std::fmt::Debug;

/// Element type that can be accumulated by a range-sum structure.
///
/// `Default::default()` is the zero of the sum. `plus` and `minus` wrap on
/// overflow, so propagating a delta such as `new - old` never panics even when
/// the difference itself does not fit the type. A query result is exact
/// whenever the true sum fits the type.
pub trait Summand: Copy + Default + PartialOrd + Debug {
    fn plus(self, rhs: Self) -> Self;
    fn minus(self, rhs: Self) -> Self;
}

macro_rules! impl_summand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Summand for $ty {
                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
                #[inline]
                fn minus(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
            }
        )*
    };
}

impl_summand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
