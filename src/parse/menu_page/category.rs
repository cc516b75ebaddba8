/// Number of menu slots published for each day.
pub const CATEGORY_COUNT: usize = 17;

/// One named menu slot and where to find it in the weekly table.
///
/// `row` indexes the `tr` elements of the menu table. A weekday's cell is the
/// `td` at `weekday offset (1..=5) + column_shift`: the soup/starter and first
/// snack rows carry one extra leading cell, every other row does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    name: &'static str,
    row: usize,
    column_shift: usize,
}

pub static CATEGORIES: [Category; CATEGORY_COUNT] = [
    Category::new("potage_entree", 1, 1),
    Category::new("entree_classique", 2, 0),
    Category::new("entree_sans_porc", 3, 0),
    Category::new("entree_sans_viande", 4, 0),
    Category::new("entree_vg", 5, 0),
    Category::new("plat_classique", 6, 0),
    Category::new("plat_sans_porc", 7, 0),
    Category::new("plat_sans_viande", 8, 0),
    Category::new("plat_vg", 9, 0),
    Category::new("garniture_classique", 10, 0),
    Category::new("garniture_sans_porc", 11, 0),
    Category::new("garniture_sans_viande", 12, 0),
    Category::new("garniture_vg", 13, 0),
    Category::new("produit_laitier", 14, 0),
    Category::new("dessert", 15, 0),
    Category::new("gouter_1", 16, 1),
    Category::new("gouter_2", 17, 0),
];

impl Category {
    const fn new(name: &'static str, row: usize, column_shift: usize) -> Self {
        Self {
            name,
            row,
            column_shift,
        }
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Cell index of the weekday at `offset`, where Monday is 1 and Friday is 5.
    #[inline]
    #[must_use]
    pub const fn column(&self, offset: usize) -> usize {
        offset + self.column_shift
    }

    /// Position of the category named `name` in [`CATEGORIES`].
    pub fn position(name: &str) -> Option<usize> {
        CATEGORIES.iter().position(|c| c.name == name)
    }
}
