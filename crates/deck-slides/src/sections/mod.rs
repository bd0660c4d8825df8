//! Section content, one module per slide

pub mod conclusion;
pub mod ecommerce;
pub mod ethics;
pub mod intro;
pub mod references;
pub mod social;
pub mod streaming;

use deck_core::{ContentNode, GroupStyle, HeadingLevel};

/// The amber "Unit 10 Connection" box that closes most slides
pub(crate) fn unit_connection(text: &str) -> ContentNode {
    ContentNode::group(
        GroupStyle::Callout,
        vec![
            ContentNode::heading(HeadingLevel::Card, "Unit 10 Connection"),
            ContentNode::paragraph(text),
        ],
    )
}
