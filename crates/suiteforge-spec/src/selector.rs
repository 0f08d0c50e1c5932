//! Weighted selection engine.
//!
//! One [`Selector`] is created per suite-generation run, seeded from the
//! specification, and threaded by `&mut` through every accessor and table
//! builder. Every decision point consumes exactly one draw, so a given seed
//! plus a given specification reproduces the identical sequence of
//! inclusions and alternative choices across the whole run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusion or alternative weight, an integer in `[0, 100]`.
///
/// Absent weight attributes default to 100 (always included / full share).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u8);

impl Weight {
    /// The always-include weight.
    pub const MAX: Self = Self(100);

    /// Validate a raw value into a weight.
    ///
    /// Returns `None` when the value lies outside `[0, 100]`; the caller
    /// turns that into a specification error naming the element.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value).ok().filter(|v| *v <= 100).map(Self)
    }

    /// Raw weight value.
    #[inline]
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::MAX
    }
}

/// Raised when the drawn value exceeds the cumulative weight of all
/// alternatives of an element: the weights fail to cover `[1, 100]`.
///
/// This is a specification authoring defect and is fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no alternative selected for '{element}': drew {drawn}, weights cover only {total}")]
pub struct SelectionExhausted {
    /// Name of the element whose alternatives were being resolved.
    pub element: String,
    /// The value drawn from the stream.
    pub drawn: u8,
    /// Cumulative weight across all alternatives.
    pub total: u32,
}

/// Seeded selection engine over a single shared pseudo-random stream.
///
/// The stream is seeded exactly once at run start and never reset, not per
/// test case, table, or entity. Generation must stay strictly sequential to
/// preserve the draw order.
#[derive(Debug)]
pub struct Selector {
    rng: StdRng,
    draws: u64,
}

impl Selector {
    /// Create a selector seeded for an entire suite-generation run.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Draw one value uniformly from `[1, 100]`, consuming one unit of the
    /// stream.
    pub fn draw(&mut self) -> u8 {
        self.draws += 1;
        self.rng.gen_range(1..=100)
    }

    /// Decide inclusion of a weighted element. Consumes exactly one draw.
    ///
    /// Weight 100 always includes; weight 0 always excludes.
    pub fn included(&mut self, weight: Weight) -> bool {
        self.draw() <= weight.get()
    }

    /// Choose among weighted alternatives in declaration order.
    ///
    /// Consumes exactly one draw, then scans candidates accumulating a
    /// running weight sum; the first candidate whose cumulative sum reaches
    /// the drawn value wins.
    ///
    /// # Errors
    /// [`SelectionExhausted`] when the draw exceeds the total cumulative
    /// weight; the element's weights do not cover the full draw range.
    pub fn choose<'a, T>(
        &mut self,
        element: &str,
        candidates: impl IntoIterator<Item = (Weight, &'a T)>,
    ) -> Result<&'a T, SelectionExhausted>
    where
        T: ?Sized,
    {
        let drawn = self.draw();
        let mut total: u32 = 0;
        for (weight, value) in candidates {
            total += u32::from(weight.get());
            if u32::from(drawn) <= total {
                return Ok(value);
            }
        }
        Err(SelectionExhausted {
            element: element.to_string(),
            drawn,
            total,
        })
    }

    /// Number of draws consumed so far. Each decision point anywhere in the
    /// run consumes exactly one.
    #[inline]
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
