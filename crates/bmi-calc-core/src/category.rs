//! BMI category bands.
//!
//! Classification walks an ordered table of exclusive upper bounds and picks
//! the first band whose bound exceeds the BMI. Anything past the last bound
//! lands in [`Category::ObeseClassIII`], so every `f64` maps to exactly one
//! category and boundary values fall into the higher band.
//!
//! | BMI range    | Category          |
//! |--------------|-------------------|
//! | < 16         | Severe Thinness   |
//! | [16, 17)     | Moderate Thinness |
//! | [17, 18.5)   | Mild Thinness     |
//! | [18.5, 25)   | Normal            |
//! | [25, 30)     | Overweight        |
//! | [30, 35)     | Obese Class I     |
//! | [35, 40)     | Obese Class II    |
//! | ≥ 40         | Obese Class III   |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named BMI category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Category {
    /// BMI below 16.
    #[serde(rename = "Severe Thinness")]
    SevereThinness,
    /// BMI in `[16, 17)`.
    #[serde(rename = "Moderate Thinness")]
    ModerateThinness,
    /// BMI in `[17, 18.5)`.
    #[serde(rename = "Mild Thinness")]
    MildThinness,
    /// BMI in `[18.5, 25)`.
    #[serde(rename = "Normal")]
    Normal,
    /// BMI in `[25, 30)`.
    #[serde(rename = "Overweight")]
    Overweight,
    /// BMI in `[30, 35)`.
    #[serde(rename = "Obese Class I")]
    ObeseClassI,
    /// BMI in `[35, 40)`.
    #[serde(rename = "Obese Class II")]
    ObeseClassII,
    /// BMI of 40 or more.
    #[serde(rename = "Obese Class III")]
    ObeseClassIII,
}

/// Exclusive upper bound of every band except the last, in ascending order.
const UPPER_BOUNDS: &[(f64, Category)] = &[
    (16.0, Category::SevereThinness),
    (17.0, Category::ModerateThinness),
    (18.5, Category::MildThinness),
    (25.0, Category::Normal),
    (30.0, Category::Overweight),
    (35.0, Category::ObeseClassI),
    (40.0, Category::ObeseClassII),
];

/// Category for BMIs at or above the last bound in [`UPPER_BOUNDS`].
const TOP_CATEGORY: Category = Category::ObeseClassIII;

impl Category {
    /// All categories in ascending band order.
    pub const ALL: [Self; 8] = [
        Self::SevereThinness,
        Self::ModerateThinness,
        Self::MildThinness,
        Self::Normal,
        Self::Overweight,
        Self::ObeseClassI,
        Self::ObeseClassII,
        Self::ObeseClassIII,
    ];

    /// Human-readable label shown next to the BMI.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SevereThinness => "Severe Thinness",
            Self::ModerateThinness => "Moderate Thinness",
            Self::MildThinness => "Mild Thinness",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese Class I",
            Self::ObeseClassII => "Obese Class II",
            Self::ObeseClassIII => "Obese Class III",
        }
    }

    /// The half-open BMI interval this category covers.
    pub fn band(&self) -> CategoryBand {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or_default();
        let lower = index
            .checked_sub(1)
            .and_then(|prev| UPPER_BOUNDS.get(prev))
            .map(|(bound, _)| *bound);
        let upper = UPPER_BOUNDS.get(index).map(|(bound, _)| *bound);
        CategoryBand {
            category: *self,
            lower,
            upper,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A category together with its `[lower, upper)` BMI interval.
///
/// `None` on either side means the band is unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryBand {
    /// The category this band selects.
    pub category: Category,
    /// Inclusive lower bound.
    pub lower: Option<f64>,
    /// Exclusive upper bound.
    pub upper: Option<f64>,
}

impl CategoryBand {
    /// Whether `bmi` falls inside this band.
    pub fn contains(&self, bmi: f64) -> bool {
        self.lower.is_none_or(|lower| bmi >= lower) && self.upper.is_none_or(|upper| bmi < upper)
    }
}

/// Classify a BMI value into its category.
///
/// Total over every `f64`: values past the last bound, and `NaN`, fall into
/// the top category.
///
/// # Examples
///
/// ```
/// use bmi_calc_core::category::{Category, classify};
///
/// assert_eq!(classify(22.49), Category::Normal);
/// assert_eq!(classify(18.5), Category::Normal);
/// assert_eq!(classify(40.0), Category::ObeseClassIII);
/// ```
pub fn classify(bmi: f64) -> Category {
    UPPER_BOUNDS
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map_or(TOP_CATEGORY, |(_, category)| *category)
}

/// The full band table in ascending order.
pub fn bands() -> Vec<CategoryBand> {
    Category::ALL.iter().map(Category::band).collect()
}
