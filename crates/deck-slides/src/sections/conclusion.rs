use deck_core::{ContentNode, GroupStyle, HeadingLevel, Paragraph};

pub const TITLE: &str = "Conclusion & Unit 10 Connections";

fn concept_card(title: &str, text: &str) -> ContentNode {
    ContentNode::group(
        GroupStyle::Card,
        vec![
            ContentNode::heading(HeadingLevel::Card, title),
            ContentNode::Text(Paragraph::new(text).caption()),
        ],
    )
}

pub fn content() -> Vec<ContentNode> {
    vec![
        ContentNode::heading(HeadingLevel::Section, "Key Takeaways"),
        ContentNode::Text(
            Paragraph::new(
                "Regression analysis has evolved from a purely statistical technique to a critical \
                 business tool, as documented in the Harvard Business Review's special issue on data \
                 science in business. Their meta-analysis of 500+ case studies revealed several key \
                 trends:",
            )
            .cite(&[10]),
        ),
        ContentNode::list([
            "Modern applications combine multiple regression approaches to model complex behaviors",
            "Cross-validation (as covered in Unit 10) is essential for ensuring these models generalize",
            "Transformations and careful feature selection (also from Unit 10) remain crucial even in sophisticated applications",
        ]),
        ContentNode::group(
            GroupStyle::Highlight,
            vec![
                ContentNode::heading(
                    HeadingLevel::Subsection,
                    "Unit 10 Connections: Regression Concepts in Industry",
                ),
                ContentNode::group(
                    GroupStyle::Columns(2),
                    vec![
                        concept_card(
                            "Slopes and Coefficients",
                            "Tech companies interpret regression coefficients to understand exactly \
                             how each user action impacts engagement or conversion likelihood.",
                        ),
                        concept_card(
                            "Cross-Validation",
                            "Netflix and other streaming platforms use cross-validation techniques to \
                             ensure their models generalize across different user segments.",
                        ),
                        concept_card(
                            "Variable Transformations",
                            "E-commerce companies apply transformations to account for non-linear \
                             relationships between price points and purchase likelihood.",
                        ),
                        concept_card(
                            "Multiple Linear Regression",
                            "Social media algorithms use MLR to weigh dozens of factors \
                             simultaneously when predicting content performance.",
                        ),
                    ],
                ),
            ],
        ),
    ]
}
