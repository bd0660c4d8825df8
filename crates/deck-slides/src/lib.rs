//! The DSNOW regression-analysis presentation
//!
//! Prebuilt deck: seven sections of static text, chart data and R code
//! samples, assembled once into a [`Presentation`].

mod code;
mod data;
mod sections;

use deck_core::{DeckChrome, Presentation, Result, SectionRegistry};

pub use code::{DYNAMIC_PRICING_R, MODEL_COMPLEXITY_R};
pub use data::{
    model_complexity_chart, pricing_chart, privacy_awareness_chart, streaming_engagement_chart,
};

/// Section keys in navigation order
pub mod keys {
    pub const INTRO: &str = "intro";
    pub const STREAMING: &str = "streaming";
    pub const ECOMMERCE: &str = "ecommerce";
    pub const SOCIAL: &str = "social";
    pub const ETHICS: &str = "ethics";
    pub const CONCLUSION: &str = "conclusion";
    pub const REFERENCES: &str = "references";

    pub const ALL: [&str; 7] = [INTRO, STREAMING, ECOMMERCE, SOCIAL, ETHICS, CONCLUSION, REFERENCES];
}

/// Build the full presentation
pub fn presentation() -> Result<Presentation> {
    let sections = SectionRegistry::builder()
        .section(keys::INTRO, sections::intro::TITLE, sections::intro::content())
        .section(keys::STREAMING, sections::streaming::TITLE, sections::streaming::content())
        .section(keys::ECOMMERCE, sections::ecommerce::TITLE, sections::ecommerce::content())
        .section(keys::SOCIAL, sections::social::TITLE, sections::social::content())
        .section(keys::ETHICS, sections::ethics::TITLE, sections::ethics::content())
        .section(keys::CONCLUSION, sections::conclusion::TITLE, sections::conclusion::content())
        .section(keys::REFERENCES, sections::references::TITLE, sections::references::content())
        .build()?;

    tracing::info!("Loaded DSNOW presentation with {} sections", sections.len());

    Ok(Presentation {
        chrome: DeckChrome {
            title: "Data Science News of the Week".to_string(),
            subtitle: "How Tech Companies Are Using Regression Analysis".to_string(),
            tagline: "DS 6306 - Doing Data Science | Unit 10".to_string(),
            footer: "DSNOW Presentation | March 2025".to_string(),
        },
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{ChartKind, ContentNode};

    #[test]
    fn test_sections_are_registered_in_order() {
        let deck = presentation().unwrap();
        let order: Vec<_> = deck.sections.keys().map(|k| k.as_str()).collect();
        assert_eq!(order, keys::ALL.to_vec());
    }

    #[test]
    fn test_section_titles() {
        let deck = presentation().unwrap();
        let titles: Vec<_> = deck.sections.sections().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "How Tech Companies Are Using Regression Analysis",
                "Streaming Services Applications",
                "E-commerce Optimization",
                "Social Media Applications",
                "Ethical Considerations",
                "Conclusion & Unit 10 Connections",
                "References",
            ]
        );
    }

    #[test]
    fn test_code_samples_live_on_intro_and_ecommerce() {
        let deck = presentation().unwrap();
        let with_code: Vec<_> = deck
            .sections
            .sections()
            .filter(|s| s.code_sample().is_some())
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(with_code, vec![keys::INTRO, keys::ECOMMERCE]);

        let intro = deck.sections.get(keys::INTRO).unwrap().code_sample().unwrap();
        assert_eq!(intro.label, "Show R Implementation");
        assert_eq!(intro.code, MODEL_COMPLEXITY_R);

        let pricing = deck.sections.get(keys::ECOMMERCE).unwrap().code_sample().unwrap();
        assert_eq!(pricing.label, "Show Dynamic Pricing Algorithm");
        assert_eq!(pricing.code, DYNAMIC_PRICING_R);
    }

    #[test]
    fn test_chart_kinds_per_section() {
        let deck = presentation().unwrap();
        let kinds = |key: &str| -> Vec<ChartKind> {
            deck.sections
                .get(key)
                .unwrap()
                .content
                .iter()
                .flat_map(|node| node.charts())
                .map(|chart| chart.kind)
                .collect()
        };

        assert_eq!(kinds(keys::INTRO), vec![ChartKind::Scatter]);
        assert_eq!(kinds(keys::STREAMING), vec![ChartKind::Line]);
        assert_eq!(kinds(keys::ECOMMERCE), vec![ChartKind::Bar]);
        assert!(kinds(keys::SOCIAL).is_empty());
        assert_eq!(kinds(keys::ETHICS), vec![ChartKind::Pie]);
        assert!(kinds(keys::CONCLUSION).is_empty());
        assert!(kinds(keys::REFERENCES).is_empty());
    }

    #[test]
    fn test_references_are_complete() {
        let deck = presentation().unwrap();
        let section = deck.sections.get(keys::REFERENCES).unwrap();
        let references = section
            .content
            .iter()
            .find_map(|node| match node {
                ContentNode::References(refs) => Some(refs),
                _ => None,
            })
            .unwrap();

        assert_eq!(references.len(), 15);
        assert!(references.iter().all(|r| r.url.starts_with("https://")));
    }
}
