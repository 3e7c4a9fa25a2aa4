//! Fixed option lists for the date of birth dropdowns

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A `<option>` entry: submitted value and visible label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn numbered(n: u32) -> Self {
        Self {
            value: n.to_string(),
            label: n.to_string(),
        }
    }
}

/// Days 1 through 31 regardless of month
pub fn day_options() -> Vec<SelectOption> {
    (1..=31).map(SelectOption::numbered).collect()
}

/// Months labelled by name, valued 1 through 12
pub fn month_options() -> Vec<SelectOption> {
    MONTH_NAMES
        .iter()
        .zip(1u32..)
        .map(|(name, n)| SelectOption {
            value: n.to_string(),
            label: (*name).to_string(),
        })
        .collect()
}

/// Upper bound on the year dropdown length
pub const MAX_YEAR_COUNT: u32 = 150;

/// `count` years counting down from `reference_year`, at most
/// [`MAX_YEAR_COUNT`] of them
pub fn year_options(reference_year: u32, count: u32) -> Vec<SelectOption> {
    (0..count.min(MAX_YEAR_COUNT))
        .map_while(|i| reference_year.checked_sub(i))
        .map(SelectOption::numbered)
        .collect()
}
