use deck_core::{ContentNode, GroupStyle, HeadingLevel, Paragraph, Rgb, SwatchCard};

use super::unit_connection;

pub const TITLE: &str = "Social Media Applications";

const BLUE: Rgb = Rgb::from_hex(0x3B82F6);
const GREEN: Rgb = Rgb::from_hex(0x22C55E);
const YELLOW: Rgb = Rgb::from_hex(0xEAB308);
const RED: Rgb = Rgb::from_hex(0xEF4444);
const PURPLE: Rgb = Rgb::from_hex(0xA855F7);

pub fn content() -> Vec<ContentNode> {
    let traditional = SwatchCard::new("Traditional Algorithm")
        .swatch("User History (40%)", BLUE)
        .swatch("Content Type (30%)", GREEN)
        .swatch("Time of Day (30%)", YELLOW);

    let regression = SwatchCard::new("Regression Model")
        .swatch("User History (25%)", BLUE)
        .swatch("Content Type (20%)", GREEN)
        .swatch("Time of Day (15%)", YELLOW)
        .swatch("Early Engagement (25%)", RED)
        .swatch("Network Effects (15%)", PURPLE);

    vec![
        ContentNode::heading(HeadingLevel::Section, "Content Virality Prediction"),
        ContentNode::Text(
            Paragraph::new(
                "Platforms like TikTok and Instagram now use regression to predict content virality, \
                 as documented in multiple academic papers. A Stanford University study revealed the \
                 specific regression techniques used by major platforms:",
            )
            .cite(&[5]),
        ),
        ContentNode::list([
            "TikTok's algorithm uses regression to analyze early engagement signals to predict which videos will go viral",
            "Meta has developed regression models that can predict content engagement across different user segments",
            "These models must account for non-linear relationships (using transformations similar to those covered in Unit 10)",
        ]),
        ContentNode::group(
            GroupStyle::Panel,
            vec![
                ContentNode::heading(
                    HeadingLevel::Subsection,
                    "Social Media Algorithm: Feature Importance",
                ),
                ContentNode::group(
                    GroupStyle::Row,
                    vec![
                        ContentNode::Swatches(traditional),
                        ContentNode::Swatches(regression),
                    ],
                ),
            ],
        ),
        unit_connection(
            "Social media algorithms use variable transformations, similar to those covered in Unit \
             10, to account for non-linear relationships between features and outcomes. The \
             statistical significance tests for these transformed variables work just like those we \
             learned for regular linear regression.",
        ),
    ]
}
