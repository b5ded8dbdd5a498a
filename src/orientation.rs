//! Fixed sequence of sampled load orientations.

/// Angular step between sampled orientations, in degrees.
pub const STEP_DEGREES: f64 = 1.0;

/// Number of sampled orientations, 0° to 360° inclusive.
///
/// 0° and 360° describe the same direction; both are kept so that consumers can
/// draw closed curves.
pub const ORIENTATION_COUNT: usize = 361;

/// Integer index into the sampled orientation sequence.
///
/// Per-orientation results are stored in dense arrays addressed by this index,
/// so lookups never depend on floating-point equality of angles.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Orientation(usize);

impl Orientation {
    /// The reference orientation, 0°.
    pub const REFERENCE: Self = Self(0);

    /// Orientation at position `index`, if it is part of the sequence.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < ORIENTATION_COUNT).then_some(Self(index))
    }

    /// Orientation sampled at exactly `degrees`.
    ///
    /// # Examples
    /// ```
    /// use anchorx::Orientation;
    ///
    /// assert_eq!(Orientation::from_degrees(90.0).map(|o| o.index()), Some(90));
    /// assert!(Orientation::from_degrees(90.5).is_none());
    /// ```
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        let steps = degrees / STEP_DEGREES;
        if steps.fract() != 0.0 || steps < 0.0 {
            return None;
        }
        Self::new(steps as usize)
    }

    /// Every sampled orientation in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..ORIENTATION_COUNT).map(Self)
    }

    /// Position of the orientation within the sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Angle of the orientation in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0 as f64 * STEP_DEGREES
    }
}
