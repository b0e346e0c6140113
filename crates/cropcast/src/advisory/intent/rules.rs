//! Declarative keyword hierarchy for the intent router.
//!
//! The chain of string-contains checks is expressed as an ordered rule
//! table walked by one generic matcher: first matching topic wins, then the
//! first matching sub-topic within it, then the topic's own template.
//! Matching is case-insensitive substring containment.

use super::templates;

/// Crop or subject bucket addressed by a top-level rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Topic {
    Wheat,
    Corn,
    Rice,
    Tomato,
    Soil,
    Pest,
    Water,
    Organic,
}

pub(crate) struct SubtopicRule {
    pub(crate) keywords: &'static [&'static str],
    pub(crate) template: &'static str,
}

pub(crate) struct TopicRule {
    pub(crate) topic: Topic,
    pub(crate) keywords: &'static [&'static str],
    pub(crate) subtopics: &'static [SubtopicRule],
    pub(crate) template: &'static str,
}

/// Priority order of the hierarchy. A bucket is never re-entered once
/// passed, so earlier rules shadow later ones for shared keywords
/// (e.g. "corn fertilizer" resolves under corn, not soil).
pub(crate) const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Wheat,
        keywords: &["wheat"],
        subtopics: &[
            SubtopicRule {
                keywords: &["plant", "sow", "when", "timing", "season"],
                template: templates::WHEAT_PLANTING,
            },
            SubtopicRule {
                keywords: &["yield", "improve", "increase", "production"],
                template: templates::WHEAT_YIELD,
            },
            SubtopicRule {
                keywords: &["fertilizer", "fertiliser", "nutrient", "npk"],
                template: templates::WHEAT_FERTILIZER,
            },
        ],
        template: templates::WHEAT_GENERAL,
    },
    TopicRule {
        topic: Topic::Corn,
        keywords: &["corn", "maize"],
        subtopics: &[
            SubtopicRule {
                keywords: &["plant", "sow", "when", "timing", "spacing"],
                template: templates::CORN_PLANTING,
            },
            SubtopicRule {
                keywords: &["fertilizer", "fertiliser", "nutrient", "nitrogen", "npk"],
                template: templates::CORN_FERTILIZER,
            },
            SubtopicRule {
                keywords: &["pest", "worm", "borer", "insect"],
                template: templates::CORN_PEST,
            },
        ],
        template: templates::CORN_GENERAL,
    },
    TopicRule {
        topic: Topic::Rice,
        keywords: &["rice", "paddy"],
        subtopics: &[],
        template: templates::RICE_GENERAL,
    },
    TopicRule {
        topic: Topic::Tomato,
        keywords: &["tomato"],
        subtopics: &[
            SubtopicRule {
                keywords: &["disease", "blight", "wilt", "spot", "fungus"],
                template: templates::TOMATO_DISEASE,
            },
            SubtopicRule {
                keywords: &["water", "irrigat", "drip"],
                template: templates::TOMATO_WATERING,
            },
        ],
        template: templates::TOMATO_GENERAL,
    },
    TopicRule {
        topic: Topic::Soil,
        keywords: &["soil", "fertilizer", "fertiliser", "nutrient"],
        subtopics: &[],
        template: templates::SOIL_GENERAL,
    },
    TopicRule {
        topic: Topic::Pest,
        keywords: &["pest", "disease", "insect"],
        subtopics: &[],
        template: templates::PEST_GENERAL,
    },
    TopicRule {
        topic: Topic::Water,
        keywords: &["water", "irrigation", "drought"],
        subtopics: &[],
        template: templates::WATER_GENERAL,
    },
    TopicRule {
        topic: Topic::Organic,
        keywords: &["organic", "sustainable", "natural"],
        subtopics: &[],
        template: templates::ORGANIC_GENERAL,
    },
];

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Walk the hierarchy for `message`, returning the selected template, or
/// `None` when no bucket matched and the caller should fall back.
pub(crate) fn match_template(message: &str) -> Option<&'static str> {
    let lowered = message.to_lowercase();
    let rule = TOPIC_RULES
        .iter()
        .find(|rule| contains_any(&lowered, rule.keywords))?;
    tracing::debug!(topic = ?rule.topic, "intent matched");

    let template = rule
        .subtopics
        .iter()
        .find(|subtopic| contains_any(&lowered, subtopic.keywords))
        .map(|subtopic| subtopic.template)
        .unwrap_or(rule.template);

    Some(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_order_is_fixed() {
        let order: Vec<Topic> = TOPIC_RULES.iter().map(|rule| rule.topic).collect();
        assert_eq!(
            order,
            vec![
                Topic::Wheat,
                Topic::Corn,
                Topic::Rice,
                Topic::Tomato,
                Topic::Soil,
                Topic::Pest,
                Topic::Water,
                Topic::Organic,
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            match_template("Tell me about WHEAT"),
            Some(templates::WHEAT_GENERAL)
        );
    }

    #[test]
    fn first_topic_in_priority_order_wins() {
        // Mentions both corn and soil keywords; corn is tested first.
        assert_eq!(
            match_template("what fertilizer for my corn field soil"),
            Some(templates::CORN_FERTILIZER)
        );
    }

    #[test]
    fn subtopic_selection_is_ordered_first_match() {
        assert_eq!(
            match_template("when should I plant wheat?"),
            Some(templates::WHEAT_PLANTING)
        );
        assert_eq!(
            match_template("how to improve wheat yield"),
            Some(templates::WHEAT_YIELD)
        );
        assert_eq!(
            match_template("best npk for wheat"),
            Some(templates::WHEAT_FERTILIZER)
        );
    }

    #[test]
    fn single_template_buckets_have_no_subtopics() {
        assert_eq!(
            match_template("my rice paddy is flooding"),
            Some(templates::RICE_GENERAL)
        );
        assert_eq!(
            match_template("drought is hurting my farm"),
            Some(templates::WATER_GENERAL)
        );
        assert_eq!(
            match_template("going fully organic next year"),
            Some(templates::ORGANIC_GENERAL)
        );
    }

    #[test]
    fn tomato_watering_shadows_the_water_bucket() {
        assert_eq!(
            match_template("how often to water tomatoes"),
            Some(templates::TOMATO_WATERING)
        );
    }

    #[test]
    fn unmatched_message_returns_none() {
        assert_eq!(match_template("tell me about quinoa"), None);
    }
}
