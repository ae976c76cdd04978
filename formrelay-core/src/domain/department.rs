//! Department / position table
//!
//! Single source of truth for which positions can be applied for in each
//! department. Both the form controller (populating the position control)
//! and any server-side checks read this table; it is never duplicated as
//! branching elsewhere.

/// Positions offered, keyed by department name, in display order.
pub const POSITIONS_BY_DEPARTMENT: &[(&str, &[&str])] = &[
    (
        "Construction",
        &[
            "Project Manager",
            "Site Engineer",
            "Supervisor",
            "Site Accountant",
            "Store Keeper",
        ],
    ),
    ("Oil & Gas", &["Pump Attendant"]),
    ("Head Office", &["Accountant"]),
];

/// All department names, in display order.
pub fn departments() -> impl Iterator<Item = &'static str> {
    POSITIONS_BY_DEPARTMENT.iter().map(|(name, _)| *name)
}

/// Positions for a department, or `None` for an unknown department.
pub fn positions_for(department: &str) -> Option<&'static [&'static str]> {
    POSITIONS_BY_DEPARTMENT
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, positions)| *positions)
}

/// Whether `position` is offered within `department`.
pub fn is_valid_position(department: &str, position: &str) -> bool {
    positions_for(department).is_some_and(|positions| positions.contains(&position))
}
