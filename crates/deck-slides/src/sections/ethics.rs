use deck_core::{ContentNode, GroupStyle, HeadingLevel, Paragraph};

use crate::data::privacy_awareness_chart;

pub const TITLE: &str = "Ethical Considerations";

pub fn content() -> Vec<ContentNode> {
    vec![
        ContentNode::heading(HeadingLevel::Section, "Privacy and Ethical Challenges"),
        ContentNode::Text(
            Paragraph::new(
                "The increasing use of regression in predicting user behavior raises several ethical \
                 concerns, as highlighted in a Nature special issue on algorithmic ethics. Researchers \
                 from MIT and Stanford identified specific risks associated with regression-based \
                 behavioral prediction systems:",
            )
            .cite(&[7]),
        ),
        ContentNode::list([
            "Data collection practices needed to feed these regression models often push privacy boundaries",
            "Regression models can inadvertently amplify existing biases in the data",
            "There's growing concern about psychological manipulation when companies can accurately predict user responses",
        ]),
        ContentNode::group(
            GroupStyle::Panel,
            vec![
                ContentNode::heading(
                    HeadingLevel::Subsection,
                    "Public Awareness of Predictive Analytics Usage",
                ),
                ContentNode::Chart(privacy_awareness_chart()),
                ContentNode::Text(
                    Paragraph::new(
                        "This chart shows the varying levels of public awareness regarding how \
                         companies use their data in predictive models, based on research from Pew \
                         Research Center's report \"Public Understanding of AI and Data Science\".",
                    )
                    .caption()
                    .cite(&[7]),
                ),
            ],
        ),
    ]
}
