//! Presentation renderer
//!
//! [`render`] is a pure function of the presentation and its view state.
//! It resolves the active section into a [`VisualNode`] tree that the
//! content painter walks; nothing here touches egui.

use std::borrow::Cow;

use deck_core::{
    CodeSample, ContentNode, DeckChrome, GroupStyle, HeadingLevel, Paragraph, Presentation,
    Reference, Result, SectionKey, SwatchCard, ViewState,
};

use crate::plots::{adapt, ChartModel};

/// Everything on screen for one view state
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationFrame<'a> {
    /// Header and footer text
    pub chrome: &'a DeckChrome,

    /// One control per section, in registry order
    pub navigation: Vec<NavControl<'a>>,

    pub body: Body<'a>,
}

/// A navigation strip button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl<'a> {
    pub key: SectionKey,
    pub label: &'a str,
    pub active: bool,
}

/// The active section's title and resolved content
#[derive(Debug, Clone, PartialEq)]
pub struct Body<'a> {
    pub key: SectionKey,
    pub title: &'a str,

    /// Source content the nodes were resolved from
    pub content: &'a [ContentNode],

    pub nodes: Vec<VisualNode<'a>>,
}

/// Control revealing a code sample, plus the block while revealed
#[derive(Debug, Clone, PartialEq)]
pub struct CodeToggle<'a> {
    pub label: Cow<'a, str>,
    pub block: Option<&'a CodeSample>,
}

impl CodeToggle<'_> {
    pub fn expanded(&self) -> bool {
        self.block.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VisualNode<'a> {
    Heading { level: HeadingLevel, text: &'a str },
    Text(&'a Paragraph),
    List(&'a [String]),
    Chart(ChartModel),
    CodeToggle(CodeToggle<'a>),
    Swatches(&'a SwatchCard),
    References(&'a [Reference]),
    Group { style: GroupStyle, children: Vec<VisualNode<'a>> },
}

impl<'a> Body<'a> {
    /// The code toggle in this body, if the section embeds a sample
    pub fn code_toggle(&self) -> Option<&CodeToggle<'a>> {
        fn find<'n, 'v>(nodes: &'n [VisualNode<'v>]) -> Option<&'n CodeToggle<'v>> {
            nodes.iter().find_map(|node| match node {
                VisualNode::CodeToggle(toggle) => Some(toggle),
                VisualNode::Group { children, .. } => find(children),
                _ => None,
            })
        }
        find(&self.nodes)
    }

    /// Chart models in document order
    pub fn charts(&self) -> Vec<&ChartModel> {
        fn collect<'n>(nodes: &'n [VisualNode<'_>], out: &mut Vec<&'n ChartModel>) {
            for node in nodes {
                match node {
                    VisualNode::Chart(model) => out.push(model),
                    VisualNode::Group { children, .. } => collect(children, out),
                    _ => {}
                }
            }
        }
        let mut charts = Vec::new();
        collect(&self.nodes, &mut charts);
        charts
    }
}

fn resolve<'a>(node: &'a ContentNode, show_code: bool) -> VisualNode<'a> {
    match node {
        ContentNode::Heading { level, text } => VisualNode::Heading {
            level: *level,
            text,
        },
        ContentNode::Text(paragraph) => VisualNode::Text(paragraph),
        ContentNode::List(items) => VisualNode::List(items),
        ContentNode::Chart(spec) => VisualNode::Chart(adapt(spec)),
        ContentNode::Code(sample) => VisualNode::CodeToggle(if show_code {
            CodeToggle {
                label: Cow::Owned(format!("Hide {} Code", sample.language.to_uppercase())),
                block: Some(sample),
            }
        } else {
            CodeToggle {
                label: Cow::Borrowed(&sample.label),
                block: None,
            }
        }),
        ContentNode::Swatches(card) => VisualNode::Swatches(card),
        ContentNode::References(references) => VisualNode::References(references),
        ContentNode::Group { style, children } => VisualNode::Group {
            style: *style,
            children: children.iter().map(|child| resolve(child, show_code)).collect(),
        },
    }
}

/// Resolve the frame for the current view state
pub fn render<'a>(presentation: &'a Presentation, state: &ViewState) -> Result<PresentationFrame<'a>> {
    let registry = &presentation.sections;
    let active = state.active_section();
    let section = registry.get(active.as_str())?;

    let navigation = registry
        .sections()
        .map(|s| NavControl {
            key: s.key,
            label: &s.title,
            active: s.key == active,
        })
        .collect();

    let nodes = section
        .content
        .iter()
        .map(|node| resolve(node, state.show_code()))
        .collect();

    Ok(PresentationFrame {
        chrome: &presentation.chrome,
        navigation,
        body: Body {
            key: section.key,
            title: &section.title,
            content: &section.content,
            nodes,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::DeckError;
    use deck_slides::{keys, presentation, MODEL_COMPLEXITY_R};

    #[test]
    fn test_body_follows_selected_section() {
        let deck = presentation().unwrap();
        let mut state = ViewState::new(&deck.sections);

        for key in keys::ALL {
            state.select_section(&deck.sections, key).unwrap();
            let frame = render(&deck, &state).unwrap();
            let section = deck.sections.get(key).unwrap();
            assert_eq!(frame.body.key.as_str(), key);
            assert_eq!(frame.body.title, section.title);
            assert_eq!(frame.body.content, section.content.as_slice());
            assert_eq!(frame.body.nodes.len(), section.content.len());
        }
    }

    #[test]
    fn test_navigation_strip_lists_every_section() {
        let deck = presentation().unwrap();
        let mut state = ViewState::new(&deck.sections);
        state.select_section(&deck.sections, keys::SOCIAL).unwrap();
        let frame = render(&deck, &state).unwrap();

        let order: Vec<_> = frame.navigation.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(order, keys::ALL.to_vec());

        let labels: Vec<_> = frame.navigation.iter().map(|c| c.label).collect();
        let titles: Vec<_> = deck.sections.sections().map(|s| s.title.as_str()).collect();
        assert_eq!(labels, titles);

        let active: Vec<_> = frame
            .navigation
            .iter()
            .filter(|c| c.active)
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(active, vec![keys::SOCIAL]);
    }

    #[test]
    fn test_initial_frame_and_ecommerce_chart() {
        let deck = presentation().unwrap();
        let mut state = ViewState::new(&deck.sections);

        let frame = render(&deck, &state).unwrap();
        assert_eq!(frame.body.title, "How Tech Companies Are Using Regression Analysis");
        assert_eq!(frame.chrome.title, "Data Science News of the Week");

        state.select_section(&deck.sections, "ecommerce").unwrap();
        let frame = render(&deck, &state).unwrap();
        assert_eq!(frame.body.title, "E-commerce Optimization");

        let charts = frame.body.charts();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].kind(), deck_core::ChartKind::Bar);
        let ChartModel::Bar(chart) = charts[0] else {
            panic!("expected the pricing bar chart");
        };
        assert_eq!(
            chart.categories,
            vec!["Electronics", "Clothing", "Home Goods", "Toys", "Books"]
        );
        assert_eq!(chart.series.len(), 2);
    }

    #[test]
    fn test_code_toggle_reveals_and_hides_sample() {
        let deck = presentation().unwrap();
        let mut state = ViewState::new(&deck.sections);

        let frame = render(&deck, &state).unwrap();
        let toggle = frame.body.code_toggle().unwrap();
        assert_eq!(toggle.label, "Show R Implementation");
        assert!(!toggle.expanded());

        state.toggle_code();
        let frame = render(&deck, &state).unwrap();
        let toggle = frame.body.code_toggle().unwrap();
        assert_eq!(toggle.label, "Hide R Code");
        assert_eq!(toggle.block.map(|b| b.code.as_str()), Some(MODEL_COMPLEXITY_R));

        state.toggle_code();
        let frame = render(&deck, &state).unwrap();
        assert!(!frame.body.code_toggle().unwrap().expanded());
    }

    #[test]
    fn test_sections_without_code_have_no_toggle() {
        let deck = presentation().unwrap();
        let mut state = ViewState::new(&deck.sections);
        state.toggle_code();

        for key in [keys::STREAMING, keys::SOCIAL, keys::ETHICS, keys::CONCLUSION, keys::REFERENCES] {
            state.select_section(&deck.sections, key).unwrap();
            let frame = render(&deck, &state).unwrap();
            assert!(frame.body.code_toggle().is_none(), "{} has a code toggle", key);
        }

        state.select_section(&deck.sections, keys::ECOMMERCE).unwrap();
        let frame = render(&deck, &state).unwrap();
        assert!(frame.body.code_toggle().unwrap().expanded());
    }

    #[test]
    fn test_invalid_selection_leaves_frame_unchanged() {
        let deck = presentation().unwrap();
        let mut state = ViewState::new(&deck.sections);
        state.select_section(&deck.sections, keys::ETHICS).unwrap();
        let before = render(&deck, &state).unwrap();

        let err = state.select_section(&deck.sections, "doesNotExist").unwrap_err();
        assert_eq!(err, DeckError::InvalidKey("doesNotExist".to_string()));
        assert_eq!(render(&deck, &state).unwrap(), before);
    }

    #[test]
    fn test_ethics_pie_labels() {
        let deck = presentation().unwrap();
        let mut state = ViewState::new(&deck.sections);
        state.select_section(&deck.sections, keys::ETHICS).unwrap();
        let frame = render(&deck, &state).unwrap();

        let ChartModel::Pie(chart) = frame.body.charts()[0] else {
            panic!("expected the awareness pie chart");
        };
        let labels: Vec<_> = (0..chart.slices.len()).map(|i| chart.slice_label(i)).collect();
        assert_eq!(labels, vec!["Aware: 33%", "Somewhat Aware: 41%", "Unaware: 26%"]);
    }
}
