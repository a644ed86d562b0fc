//! Interior dimensions of the modeled cargo hold

/// Interior clearance; the maximum stacked cargo height per zone
pub const HEIGHT: f64 = 2.7;

/// Interior length of the trailer
pub const LENGTH: f64 = 13.625;

/// Interior width of the trailer
pub const WIDTH: f64 = 2.48;
