use data::neighborhoods::{self, CATALOG};
use data::format_count;
use tracing::debug;

use crate::templates::{self, GROUPS};

/// Maps free-text input to a display reply.
///
/// The input is split into question segments on sentence punctuation and
/// each segment is matched independently; distinct answers are joined in
/// segment order, duplicates collapse. Unmatched input falls back to a
/// fixed hint.
pub fn respond(input: &str) -> String {
    let segments = split_questions(input);

    let mut answers: Vec<String> = Vec::new();
    for segment in &segments {
        if let Some(answer) = match_segment(segment) {
            if !answers.contains(&answer) {
                answers.push(answer);
            }
        }
    }

    if answers.is_empty() {
        debug!("no template matched, using fallback");
        return templates::FALLBACK.to_string();
    }
    answers.join(" ")
}

/// Splits on sentence punctuation and lowercases each segment. Matching
/// is verbatim substring from here on, so short keywords can match
/// inside longer words.
fn split_questions(input: &str) -> Vec<String> {
    input
        .split(['.', '?', '!', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn match_segment(segment: &str) -> Option<String> {
    for group in GROUPS {
        for template in *group {
            if template.keywords.iter().any(|k| segment.contains(k)) {
                return Some(template.response.to_string());
            }
        }
    }
    neighborhood_reply(segment)
}

/// Checks the segment against known neighborhood names, after all
/// template groups have had their chance.
fn neighborhood_reply(segment: &str) -> Option<String> {
    CATALOG
        .iter()
        .find(|info| segment.contains(&info.name.to_lowercase()))
        .map(|info| describe_neighborhood(info.name))
}

fn describe_neighborhood(name: &str) -> String {
    let Some(summary) = neighborhoods::summary(name) else {
        return format!(
            "{name} is in our neighborhood catalog, but detailed demographic data for it \
             isn't available yet."
        );
    };

    let mut reply = format!(
        "{name} has a population of {} residents with a median age of {:.1} years. Children \
         make up {}% of residents, working-age adults {}%, and older adults {}%.",
        format_count(summary.total_population),
        summary.median_age,
        summary.age_distribution.children,
        summary.age_distribution.working_age,
        summary.age_distribution.elderly,
    );
    if let Some(income) = summary.median_income {
        reply.push_str(&format!(" The median household income is ${}.", format_count(income)));
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{FALLBACK, GENERAL, METRIC};

    #[test]
    fn greeting_matches_the_general_group() {
        assert_eq!(respond("hello"), GENERAL[0].response);
        assert_eq!(respond("HELLO there"), GENERAL[0].response);
    }

    #[test]
    fn neighborhood_reply_includes_the_current_population() {
        let reply = respond("tell me about Ballard");
        assert!(reply.contains("Ballard"));
        assert!(reply.contains("32,530"));
        assert!(reply.contains("33.0 years"));
    }

    #[test]
    fn unmatched_input_gets_the_fallback() {
        assert_eq!(respond("xyzzy plugh"), FALLBACK);
        assert_eq!(respond(""), FALLBACK);
        assert_eq!(respond("?!"), FALLBACK);
    }

    #[test]
    fn metric_keywords_are_case_insensitive() {
        assert_eq!(respond("What is the GINI coefficient"), METRIC[0].response);
    }

    #[test]
    fn multiple_questions_get_multiple_answers_in_order() {
        let reply = respond("What is the gini coefficient? Tell me about Fremont.");
        let gini_pos = reply.find("Gini coefficient measures").unwrap();
        let fremont_pos = reply.find("Fremont has a population").unwrap();
        assert!(gini_pos < fremont_pos);
    }

    #[test]
    fn duplicate_answers_collapse() {
        let reply = respond("gini? gini!");
        assert_eq!(reply, METRIC[0].response);
    }

    #[test]
    fn template_groups_outrank_neighborhood_names() {
        // "washington" belongs to the comparison group even though it is
        // also a place name.
        let reply = respond("how does washington do");
        // "how" hits the general help template first.
        assert_eq!(reply, GENERAL[1].response);
    }

    #[test]
    fn forecast_group_wins_over_comparison_for_shared_keywords() {
        // "worse" appears in both the forecast and comparison groups;
        // the forecast group is scanned first.
        let reply = respond("is inequality getting worse");
        assert!(reply.contains("increasing trends in our forecast"));
    }

    #[test]
    fn catalog_only_neighborhood_gets_the_no_data_reply() {
        let reply = respond("tell me about West Seattle");
        assert!(reply.contains("West Seattle"));
        assert!(reply.contains("isn't available yet"));
    }
}
