//! Tick planning for the millimeter and sixteenth-inch scales
//!
//! Both planners are lazy iterators over an index range. They hold no state
//! beyond their cursor: a clone replays the remaining marks, and calling a planner
//! twice with the same inputs yields the same marks.
//!
//! Every sequence is offset one millimeter from the near edge and stops short
//! of the far edge, so no mark is ever flush with either end of the band.

use crate::constants::*;
use std::iter::FusedIterator;
use tracing::trace;

/// Which unit system a mark belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitScale {
    /// Drawn from the near edge of the band
    Millimeter,
    /// Drawn from the far edge of the band
    Inch,
}

/// Visual weight of a graduation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Every centimeter, labeled
    MajorTen,
    /// Every half centimeter
    MidFive,
    /// Every remaining millimeter
    Minor,
    /// Every inch, labeled
    MajorInch,
    HalfInch,
    QuarterInch,
    EighthInch,
    SixteenthInch,
}

impl Tier {
    /// Mark length as a fraction of the band thickness
    ///
    /// Millimeter tiers halve at each step, inch tiers shrink by 3/4, which
    /// keeps the two scales visually distinct on one band.
    pub fn length_fraction(self) -> f64 {
        match self {
            Tier::MajorTen => MAJOR_TICK_FRACTION,
            Tier::MidFive => MAJOR_TICK_FRACTION * MM_TIER_DECAY,
            Tier::Minor => MAJOR_TICK_FRACTION * MM_TIER_DECAY.powi(2),
            Tier::MajorInch => MAJOR_TICK_FRACTION,
            Tier::HalfInch => MAJOR_TICK_FRACTION * INCH_TIER_DECAY,
            Tier::QuarterInch => MAJOR_TICK_FRACTION * INCH_TIER_DECAY.powi(2),
            Tier::EighthInch => MAJOR_TICK_FRACTION * INCH_TIER_DECAY.powi(3),
            Tier::SixteenthInch => MAJOR_TICK_FRACTION * INCH_TIER_DECAY.powi(4),
        }
    }

    pub fn length_px(self, short_dim_px: f64) -> f64 {
        short_dim_px * self.length_fraction()
    }

    pub fn scale(self) -> UnitScale {
        match self {
            Tier::MajorTen | Tier::MidFive | Tier::Minor => UnitScale::Millimeter,
            _ => UnitScale::Inch,
        }
    }

    fn for_millimeter(mm: usize) -> Self {
        if mm % 10 == 0 {
            Tier::MajorTen
        } else if mm % 5 == 0 {
            Tier::MidFive
        } else {
            Tier::Minor
        }
    }

    fn for_sixteenth(sixteenth: usize) -> Self {
        if sixteenth % 16 == 0 {
            Tier::MajorInch
        } else if sixteenth % 8 == 0 {
            Tier::HalfInch
        } else if sixteenth % 4 == 0 {
            Tier::QuarterInch
        } else if sixteenth % 2 == 0 {
            Tier::EighthInch
        } else {
            Tier::SixteenthInch
        }
    }
}

/// A single graduation along the band's long axis
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Distance from the near edge in millimeters
    pub position_mm: f64,
    /// Distance from the near edge in pixels
    pub position_px: f64,
    pub tier: Tier,
    pub label: Option<String>,
}

impl TickMark {
    pub fn length_px(&self, short_dim_px: f64) -> f64 {
        self.tier.length_px(short_dim_px)
    }

    /// Start and end of the mark across the band
    ///
    /// Millimeter marks hang from the near edge, inch marks rise from the
    /// far edge, so the two scales sit on opposite sides of the band.
    pub fn span(&self, short_dim_px: f64) -> (f64, f64) {
        let length = self.length_px(short_dim_px);
        match self.tier.scale() {
            UnitScale::Millimeter => (0.0, length),
            UnitScale::Inch => (short_dim_px - length, short_dim_px),
        }
    }
}

/// Tick generator bound to one long-axis scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlanner {
    px_per_mm: f64,
}

impl TickPlanner {
    pub fn new(px_per_mm: f64) -> Self {
        Self { px_per_mm }
    }

    pub fn mm_ticks(&self, long_dim_mm: f64) -> MmTicks {
        plan_mm_ticks(long_dim_mm, self.px_per_mm)
    }

    pub fn inch_ticks(&self, long_dim_mm: f64) -> InchTicks {
        plan_inch_ticks(long_dim_mm, self.px_per_mm)
    }
}

/// Plan millimeter graduations along a band `long_dim_mm` long
///
/// Yields `floor(long_dim_mm) - 2` marks: index `mm` sits at `(mm + 1)`
/// millimeters, every tenth is a labeled centimeter mark.
///
/// # Examples
///
/// ```
/// use screen_ruler::{Tier, plan_mm_ticks};
///
/// let ticks: Vec<_> = plan_mm_ticks(127.0, 3.6923).collect();
/// assert_eq!(ticks.len(), 125);
/// assert_eq!(ticks[10].tier, Tier::MajorTen);
/// assert_eq!(ticks[10].label.as_deref(), Some("1"));
/// ```
pub fn plan_mm_ticks(long_dim_mm: f64, px_per_mm: f64) -> MmTicks {
    let count = if usable(long_dim_mm, px_per_mm) {
        // Skip the last unit and account for the one millimeter lead-in.
        whole_units(long_dim_mm).saturating_sub(2)
    } else {
        0
    };
    trace!("Planning {} millimeter ticks over {} mm", count, long_dim_mm);
    MmTicks {
        px_per_mm,
        next: 0,
        count,
    }
}

/// Plan sixteenth-inch graduations along a band `long_dim_mm` long
///
/// Index `s` sits at `s / 16` inches plus the one millimeter lead-in shared
/// with the millimeter scale; every sixteenth index is a labeled inch mark.
///
/// # Examples
///
/// ```
/// use screen_ruler::{Tier, plan_inch_ticks};
///
/// let ticks: Vec<_> = plan_inch_ticks(127.0, 3.6923).collect();
/// assert_eq!(ticks.len(), 79);
/// assert_eq!(ticks[16].tier, Tier::MajorInch);
/// assert_eq!(ticks[16].label.as_deref(), Some("1"));
/// ```
pub fn plan_inch_ticks(long_dim_mm: f64, px_per_mm: f64) -> InchTicks {
    let count = if usable(long_dim_mm, px_per_mm) {
        let sixteenths = long_dim_mm / MM_PER_INCH * f64::from(SIXTEENTHS_PER_INCH);
        whole_units(sixteenths).saturating_sub(1)
    } else {
        0
    };
    trace!("Planning {} sixteenth-inch ticks over {} mm", count, long_dim_mm);
    InchTicks {
        px_per_mm,
        next: 0,
        count,
    }
}

fn usable(long_dim_mm: f64, px_per_mm: f64) -> bool {
    long_dim_mm.is_finite() && long_dim_mm > 0.0 && px_per_mm.is_finite() && px_per_mm > 0.0
}

/// Whole units in `length`, tolerating representation error (127 mm is 5 in)
fn whole_units(length: f64) -> usize {
    (length + WHOLE_UNIT_EPSILON).floor() as usize
}

/// Lazy millimeter graduations, see [`plan_mm_ticks`]
#[derive(Debug, Clone)]
pub struct MmTicks {
    px_per_mm: f64,
    next: usize,
    count: usize,
}

impl Iterator for MmTicks {
    type Item = TickMark;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let mm = self.next;
        self.next += 1;

        let tier = Tier::for_millimeter(mm);
        let position_mm = (mm + 1) as f64;
        Some(TickMark {
            position_mm,
            position_px: position_mm * self.px_per_mm,
            tier,
            label: (tier == Tier::MajorTen).then(|| (mm / 10).to_string()),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MmTicks {}
impl FusedIterator for MmTicks {}

/// Lazy sixteenth-inch graduations, see [`plan_inch_ticks`]
#[derive(Debug, Clone)]
pub struct InchTicks {
    px_per_mm: f64,
    next: usize,
    count: usize,
}

impl Iterator for InchTicks {
    type Item = TickMark;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let sixteenth = self.next;
        self.next += 1;

        let per_inch = SIXTEENTHS_PER_INCH as usize;
        let tier = Tier::for_sixteenth(sixteenth);
        let inches = sixteenth as f64 / f64::from(SIXTEENTHS_PER_INCH);
        let px_per_inch = self.px_per_mm * MM_PER_INCH;
        Some(TickMark {
            position_mm: inches * MM_PER_INCH + 1.0,
            position_px: inches * px_per_inch + self.px_per_mm,
            tier,
            label: (tier == Tier::MajorInch).then(|| (sixteenth / per_inch).to_string()),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for InchTicks {}
impl FusedIterator for InchTicks {}
