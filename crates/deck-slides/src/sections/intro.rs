use deck_core::{CodeSample, ContentNode, GroupStyle, HeadingLevel, Paragraph};

use super::unit_connection;
use crate::code::MODEL_COMPLEXITY_R;
use crate::data::model_complexity_chart;

pub const TITLE: &str = "How Tech Companies Are Using Regression Analysis";

pub fn content() -> Vec<ContentNode> {
    vec![
        ContentNode::paragraph(
            "Regression analysis has become a cornerstone in how modern tech companies make product \
             decisions and predict user behavior. As competition intensifies in the digital space, \
             companies are refining their regression models to gain competitive advantages.",
        ),
        ContentNode::paragraph(
            "This DSNOW presentation explores recent applications of regression analysis in tech - \
             connecting directly to the concepts from Unit 10 of DS 6306 Doing Data Science.",
        ),
        ContentNode::group(
            GroupStyle::Highlight,
            vec![
                ContentNode::heading(HeadingLevel::Subsection, "Model Complexity vs. Accuracy"),
                ContentNode::paragraph(
                    "This visualization demonstrates the relationship between model complexity \
                     (number of features) and prediction accuracy - illustrating the curse of \
                     dimensionality concept from Unit 10:",
                ),
                ContentNode::Chart(model_complexity_chart()),
                ContentNode::Text(
                    Paragraph::new(
                        "Note how accuracy gains diminish as feature count increases - a key \
                         insight when building regression models. This relationship has been \
                         extensively documented in machine learning literature and directly \
                         connects to the curse of dimensionality concept covered in Unit 10.",
                    )
                    .caption()
                    .cite(&[13]),
                ),
                ContentNode::Code(CodeSample::new(
                    "Show R Implementation",
                    "r",
                    MODEL_COMPLEXITY_R,
                )),
                unit_connection(
                    "This directly relates to the discussion in Unit 10 about the optimal number of \
                     parameters in a model. The cross-validation techniques shown here are essential \
                     for evaluating how well models will generalize to new data - just as covered in \
                     the course's cross-validation section.",
                ),
            ],
        ),
        ContentNode::group(
            GroupStyle::Highlight,
            vec![
                ContentNode::heading(HeadingLevel::Subsection, "Why This Matters Now"),
                ContentNode::paragraph(
                    "In today's data-saturated business environment, simple descriptive analytics \
                     are no longer sufficient. Companies need predictive capabilities that can \
                     translate vast amounts of user data into actionable insights about future \
                     behavior.",
                ),
            ],
        ),
    ]
}
