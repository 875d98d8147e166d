use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Default stroke cycle assigned to categories: steel blue, purple, green.
pub const CATEGORY_COLOR_CYCLE: [Color; 3] = [
    Color::rgb8(0x46, 0x82, 0xB4),
    Color::rgb8(0x80, 0x00, 0x80),
    Color::rgb8(0x00, 0x80, 0x00),
];

/// Fixed, order-stable category → stroke color assignment.
///
/// Built once at chart construction from the validated global category list;
/// assignment follows first-seen category order and cycles the palette when
/// there are more categories than palette entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    by_category: IndexMap<String, Color>,
}

impl ColorTable {
    pub fn from_categories(categories: &[String]) -> ChartResult<Self> {
        Self::from_categories_with_cycle(categories, &CATEGORY_COLOR_CYCLE)
    }

    pub fn from_categories_with_cycle(
        categories: &[String],
        cycle: &[Color],
    ) -> ChartResult<Self> {
        if categories.is_empty() {
            return Err(ChartError::InvalidData(
                "color table requires at least one category".to_owned(),
            ));
        }
        if cycle.is_empty() {
            return Err(ChartError::InvalidData(
                "color table requires a non-empty color cycle".to_owned(),
            ));
        }
        for color in cycle {
            color.validate()?;
        }

        let mut by_category = IndexMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            by_category.insert(category.clone(), cycle[position % cycle.len()]);
        }
        Ok(Self { by_category })
    }

    #[must_use]
    pub fn color_of(&self, category: &str) -> Option<Color> {
        self.by_category.get(category).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_category.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}
