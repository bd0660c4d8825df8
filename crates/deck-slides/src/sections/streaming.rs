use deck_core::{ContentNode, GroupStyle, HeadingLevel, Paragraph};

use super::unit_connection;
use crate::data::streaming_engagement_chart;

pub const TITLE: &str = "Streaming Services Applications";

pub fn content() -> Vec<ContentNode> {
    vec![
        ContentNode::heading(HeadingLevel::Section, "Netflix's Content Engagement Prediction"),
        ContentNode::Text(
            Paragraph::new(
                "Netflix has recently enhanced their regression models to better predict viewer \
                 engagement with upcoming content releases. According to their technology summit \
                 presentation, engineers have achieved significant improvements in prediction \
                 accuracy using advanced regression techniques. Their approach combines:",
            )
            .cite(&[1, 15]),
        ),
        ContentNode::list([
            "Multiple regression models that incorporate viewer demographics, viewing history, and content metadata",
            "Time-series components to account for seasonal viewing patterns",
            "Transformation of variables (similar to what you're learning in Unit 10)",
        ]),
        ContentNode::group(
            GroupStyle::Panel,
            vec![
                ContentNode::heading(
                    HeadingLevel::Subsection,
                    "Engagement Improvement: Traditional vs. Regression-Based Recommendations",
                ),
                ContentNode::Chart(streaming_engagement_chart()),
                ContentNode::Text(
                    Paragraph::new(
                        "This chart illustrates the improved user engagement achieved by streaming \
                         services after implementing advanced regression models for content \
                         recommendations. Data compiled from multiple industry reports shows \
                         consistent improvement across platforms using regression-based approaches.",
                    )
                    .caption(),
                ),
            ],
        ),
        unit_connection(
            "The slope coefficients from these regression models help streaming services quantify \
             exactly how much each user attribute contributes to predicted engagement - similar to \
             how we interpreted slope parameters in Unit 10's multiple linear regression sections.",
        ),
    ]
}
