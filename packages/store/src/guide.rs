//! Built-in guide content and search.

use crate::models::{FaqEntry, GuideStep, ResourceLink};

fn step(
    order: u32,
    key: &str,
    title: &str,
    description: &str,
    resources: &[(&str, &str)],
    estimate_days: u32,
    cost_estimate: &str,
) -> GuideStep {
    GuideStep {
        id: None,
        key: key.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: String::new(),
        resources: resources
            .iter()
            .map(|(label, url)| ResourceLink::new(label, url))
            .collect(),
        estimate_days,
        cost_estimate: cost_estimate.to_string(),
        order,
    }
}

/// The six steps shown on the Guide page, in order.
pub fn builtin_steps() -> Vec<GuideStep> {
    vec![
        step(
            0,
            "passport",
            "Passport Application",
            "Documents, links, and timelines.",
            &[
                ("Your country DFA", "https://www.dfa.gov.ph/"),
                ("Sample form (PDF)", "#"),
            ],
            30,
            "$60-120",
        ),
        step(
            1,
            "job-search",
            "Job Search",
            "Boards, recruiters, and tips.",
            &[
                ("104 Job Bank", "https://www.104.com.tw/"),
                ("LinkedIn Jobs", "https://www.linkedin.com/jobs/"),
            ],
            21,
            "Varies",
        ),
        step(
            2,
            "work-permit",
            "Work Permit & Visa",
            "Requirements and processing.",
            &[
                ("Ministry of Labor", "https://www.mol.gov.tw/"),
                ("BOCA Visa", "https://www.boca.gov.tw/"),
            ],
            30,
            "$100-200",
        ),
        step(
            3,
            "arrival",
            "Arrival & ARC",
            "ARC, housing, banking, SIM.",
            &[
                ("NIA ARC", "https://www.immigration.gov.tw/"),
                ("Taiwan Bank List", "https://www.banking.gov.tw/"),
            ],
            14,
            "$200-600+",
        ),
        step(
            4,
            "taxes-insurance",
            "Taxes & NHI",
            "Taxes, health, social security.",
            &[
                ("Taiwan NHI", "https://www.nhi.gov.tw/"),
                ("MOF Tax", "https://www.mof.gov.tw/"),
            ],
            7,
            "$0-100",
        ),
        step(
            5,
            "mandarin-culture",
            "Mandarin & Culture (Optional)",
            "Learn language and local etiquette.",
            &[(
                "Taiwan Mandarin Institute",
                "https://www.taiwanmandarininstitute.com/",
            )],
            60,
            "Varies",
        ),
    ]
}

/// Steps whose title or description contains `query`, ignoring case.
///
/// An empty query returns every step. Order is preserved.
pub fn search_steps<'a>(steps: &'a [GuideStep], query: &str) -> Vec<&'a GuideStep> {
    let needle = query.to_lowercase();
    steps
        .iter()
        .filter(|step| needle.is_empty() || step.matches_lowercase(&needle))
        .collect()
}

/// Questions shown on the FAQ page.
pub fn faq_entries() -> Vec<FaqEntry> {
    [
        (
            "How long does a work permit take?",
            "Typically 7-14 business days after employer submission, but allow 30 days with visa.",
        ),
        (
            "Do I need an ARC?",
            "Yes, if you plan to stay longer than 180 days. Apply within 15 days of arrival.",
        ),
        (
            "Can I change jobs on a work permit?",
            "You need a new work permit tied to the new employer.",
        ),
    ]
    .into_iter()
    .map(|(q, a)| FaqEntry {
        question: q.to_string(),
        answer: a.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::DEFAULT_KEYS;

    #[test]
    fn test_builtin_keys_match_checklist() {
        let keys: Vec<String> = builtin_steps().into_iter().map(|s| s.key).collect();
        assert_eq!(keys, DEFAULT_KEYS.to_vec());
    }

    #[test]
    fn test_empty_query_returns_all() {
        let steps = builtin_steps();
        assert_eq!(search_steps(&steps, "").len(), steps.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let steps = builtin_steps();
        let found = search_steps(&steps, "VISA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "work-permit");

        // Matches in the description count too.
        let found = search_steps(&steps, "banking");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "arrival");
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let steps = builtin_steps();
        let query = "and";
        let found: Vec<&str> = search_steps(&steps, query)
            .iter()
            .map(|s| s.key.as_str())
            .collect();
        let expected: Vec<&str> = steps
            .iter()
            .filter(|s| s.matches_lowercase(query))
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(found, expected);
        assert!(found.contains(&"passport"));
        assert!(found.contains(&"job-search"));
        assert!(found.contains(&"mandarin-culture"));
    }

    #[test]
    fn test_search_without_match() {
        let steps = builtin_steps();
        assert!(search_steps(&steps, "scuba").is_empty());
    }

    #[test]
    fn test_faq_has_three_entries() {
        let faqs = faq_entries();
        assert_eq!(faqs.len(), 3);
        assert!(faqs[1].question.contains("ARC"));
    }
}
