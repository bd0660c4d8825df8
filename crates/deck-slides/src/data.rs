//! Hard-coded chart data
//!
//! Every value is a literal; nothing here is derived at runtime.

use deck_core::{ChartSpec, Record, Rgb};

const PURPLE: Rgb = Rgb::from_hex(0x8884d8);
const GREEN: Rgb = Rgb::from_hex(0x82ca9d);

/// Slice colors for the awareness pie chart
pub const PIE_PALETTE: [Rgb; 3] = [
    Rgb::from_hex(0x0088FE),
    Rgb::from_hex(0x00C49F),
    Rgb::from_hex(0xFFBB28),
];

/// Engagement of traditional vs. regression-based recommendations
pub fn streaming_engagement_chart() -> ChartSpec {
    let rows = [
        ("Jan", 65.0, 78.0),
        ("Feb", 68.0, 82.0),
        ("Mar", 67.0, 86.0),
        ("Apr", 69.0, 89.0),
        ("May", 70.0, 91.0),
        ("Jun", 72.0, 94.0),
    ];

    let series = rows
        .iter()
        .map(|(month, traditional, regression)| {
            Record::new()
                .label("month", *month)
                .number("traditional", *traditional)
                .number("regression", *regression)
        })
        .collect();

    ChartSpec::line(series)
        .x_field("month")
        .y_label("User Engagement (%)")
        .colored_channel("traditional", "Traditional Algorithm", PURPLE)
        .colored_channel("regression", "Regression-Based Algorithm", GREEN)
}

/// Revenue increase per category, static vs. dynamic pricing
pub fn pricing_chart() -> ChartSpec {
    let rows = [
        ("Electronics", 3.2, 7.8),
        ("Clothing", 2.4, 5.2),
        ("Home Goods", 4.1, 6.7),
        ("Toys", 2.8, 4.9),
        ("Books", 1.9, 3.5),
    ];

    let series = rows
        .iter()
        .map(|(category, static_pricing, dynamic_pricing)| {
            Record::new()
                .label("category", *category)
                .number("staticPricing", *static_pricing)
                .number("dynamicPricing", *dynamic_pricing)
        })
        .collect();

    ChartSpec::bar(series)
        .x_field("category")
        .y_label("Revenue Increase (%)")
        .colored_channel("staticPricing", "Static Pricing", PURPLE)
        .colored_channel("dynamicPricing", "Regression-Based Dynamic Pricing", GREEN)
}

/// Feature count vs. accuracy for increasingly complex models
pub fn model_complexity_chart() -> ChartSpec {
    let rows = [
        (2.0, 72.0, 10.0, "SLR Model"),
        (5.0, 81.0, 20.0, "Basic MLR"),
        (12.0, 87.0, 30.0, "Advanced MLR"),
        (25.0, 89.0, 40.0, "Complex MLR"),
        (50.0, 90.0, 50.0, "Very Complex MLR"),
        (100.0, 90.5, 60.0, "Excessive MLR"),
    ];

    let series = rows
        .iter()
        .map(|(features, accuracy, size, name)| {
            Record::new()
                .number("features", *features)
                .number("accuracy", *accuracy)
                .number("size", *size)
                .label("name", *name)
        })
        .collect();

    ChartSpec::scatter(series)
        .x_field("features")
        .x_label("Number of Features")
        .y_label("Accuracy (%)")
        .colored_channel("accuracy", "Model Complexity/Accuracy Relationship", PURPLE)
        .size("size", (100.0, 500.0))
        .point_label("name")
}

/// Public awareness of predictive analytics usage
pub fn privacy_awareness_chart() -> ChartSpec {
    let rows = [("Aware", 33.0), ("Somewhat Aware", 41.0), ("Unaware", 26.0)];

    let series = rows
        .iter()
        .map(|(name, value)| Record::new().label("name", *name).number("value", *value))
        .collect();

    ChartSpec::pie(series)
        .x_field("name")
        .colored_channel("value", "Awareness", PURPLE)
        .palette(&PIE_PALETTE)
}
