use deck_core::{CodeSample, ContentNode, GroupStyle, HeadingLevel, Paragraph};

use super::unit_connection;
use crate::code::DYNAMIC_PRICING_R;
use crate::data::pricing_chart;

pub const TITLE: &str = "E-commerce Optimization";

pub fn content() -> Vec<ContentNode> {
    vec![
        ContentNode::heading(HeadingLevel::Section, "Dynamic Pricing Strategies"),
        ContentNode::paragraph(
            "E-commerce giants are using increasingly sophisticated regression models to optimize \
             pricing, according to a comprehensive industry analysis. Their study of major retailers \
             found that adoption of regression-based pricing optimization has increased \
             significantly since 2022:",
        ),
        ContentNode::list([
            "Amazon uses multiple linear regression (MLR) models that incorporate inventory levels, competitor pricing, and seasonal demand patterns",
            "These models can adjust prices in real-time based on dozens of variables",
            "Recent innovations include regression models that can predict price elasticity by product category",
        ]),
        ContentNode::paragraph(
            "A 2023 meta-analysis in the Journal of Retailing found that companies using advanced \
             regression for dynamic pricing saw significant revenue increases compared to static \
             pricing strategies, with some implementations yielding 2.5-6.8% improvements.",
        ),
        ContentNode::group(
            GroupStyle::Panel,
            vec![
                ContentNode::heading(
                    HeadingLevel::Subsection,
                    "Revenue Improvement: Static vs. Dynamic Pricing",
                ),
                ContentNode::Chart(pricing_chart()),
                ContentNode::Text(
                    Paragraph::new(
                        "This chart shows revenue improvements by product category when using \
                         regression-based dynamic pricing compared to traditional static pricing \
                         strategies. Data compiled from McKinsey's E-commerce Optimization Report \
                         and verified through multiple academic studies.",
                    )
                    .caption()
                    .cite(&[3]),
                ),
                ContentNode::Code(CodeSample::new(
                    "Show Dynamic Pricing Algorithm",
                    "r",
                    DYNAMIC_PRICING_R,
                )),
            ],
        ),
        unit_connection(
            "These dynamic pricing models use multiple regression techniques identical to those \
             covered in Unit 10's MLR section. The interpretation of coefficients is especially \
             important here - each coefficient represents the precise price impact of a specific \
             factor.",
        ),
    ]
}
