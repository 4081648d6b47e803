/// Active listing filters. Unset fields do not constrain the query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub category: Option<String>,
    pub region: Option<String>,
    pub min_score: Option<f64>,
}

/// A new value for exactly one filter field.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Category(Option<String>),
    Region(Option<String>),
    MinScore(Option<f64>),
}

impl FilterState {
    /// Applies `change`, returning whether the stored value actually changed.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        match change {
            FilterChange::Category(value) => replace_if_different(&mut self.category, value),
            FilterChange::Region(value) => replace_if_different(&mut self.region, value),
            FilterChange::MinScore(value) => replace_if_different(&mut self.min_score, value),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.region.is_none() && self.min_score.is_none()
    }
}

fn replace_if_different<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
