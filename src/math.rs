/// Fixed point scaling factor.
///
/// Represents scaling from 0 (at `0`) to 1 (at `u16::MAX`).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScalingFactor(u16);

impl ScalingFactor {
    pub const ONE: Self = Self(u16::MAX);

    /// Indicator intensity, where `u8::MAX` is full brightness.
    pub fn from_intensity(intensity: u8) -> Self {
        // 0xff * 0x101 = 0xffff
        Self(u16::from(intensity) * 0x101)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Fixed point scaling.
pub trait ScaleBy {
    fn scale_by(self, by: ScalingFactor) -> Self;
}

macro_rules! impl_scaleby {
    ($this:ty, via: $intermediate:ty) => {
        impl ScaleBy for $this {
            fn scale_by(self, by: ScalingFactor) -> Self {
                if by == ScalingFactor::ONE {
                    return self;
                }
                let scaled =
                    (<$intermediate>::from(self) * <$intermediate>::from(by.raw())) >> u16::BITS;
                #[allow(clippy::cast_possible_truncation)]
                let scaled = scaled as $this;
                scaled
            }
        }
    };
}

impl_scaleby!(u16, via: u32);

/// Integer narrowing, checked in debug mode.
pub trait Truncate<To> {
    fn truncate(self) -> To;
}

macro_rules! impl_truncate {
    ($from:ty => $to:ty) => {
        impl Truncate<$to> for $from {
            fn truncate(self) -> $to {
                debug_assert!(<$to>::try_from(self).is_ok());
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let truncated = self as $to;
                truncated
            }
        }
    };
}

impl_truncate!(i32 => u16);
