//! Keyword expansion: one topic fanned out into several query angles.

/// Placeholder substituted with the topic in each template.
const TOPIC: &str = "{topic}";

/// Query templates, in the order their variants are searched: raw topic,
/// recency, tutorial, review, definition.
const TEMPLATES: &[&str] = &[
    "{topic}",
    "{topic} latest",
    "{topic} tutorial",
    "{topic} review",
    "what is {topic}",
];

/// Expand `topic` into an ordered, duplicate-free list of query variants.
///
/// Each variant is trimmed. The first entry is always the trimmed topic,
/// and the list holds between 1 and 5 entries.
///
/// # Examples
///
/// ```
/// use research_search::orchestrator::expand::expand_keywords;
///
/// let keywords = expand_keywords("rust async");
/// assert_eq!(keywords[0], "rust async");
/// assert_eq!(keywords.len(), 5);
/// ```
pub fn expand_keywords(topic: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::with_capacity(TEMPLATES.len());
    for template in TEMPLATES {
        let candidate = template.replace(TOPIC, topic).trim().to_owned();
        if !keywords.contains(&candidate) {
            keywords.push(candidate);
        }
    }
    keywords
}
