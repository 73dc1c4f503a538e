//! Static lookup tables behind the derived-text rules.
//!
//! Personality types are matched exactly (case-sensitive) against the
//! table; anything else falls back to the default strings.

/// Canned guidance for one personality type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityGuide {
    pub kind: &'static str,
    pub selling_strategy: &'static str,
    pub communication_style: &'static str,
    pub email_length: &'static str,
}

pub const PERSONALITY_GUIDES: &[PersonalityGuide] = &[
    PersonalityGuide {
        kind: "Driver",
        selling_strategy: "Lead with outcomes and ROI. Be direct, skip the small talk and give them a clear decision to make.",
        communication_style: "Direct and results-oriented; prefers bullet points and bottom-line answers.",
        email_length: "Keep it under 75 words and put the ask in the first two sentences.",
    },
    PersonalityGuide {
        kind: "Analytical",
        selling_strategy: "Bring data, benchmarks and proof points. Give them time to evaluate and avoid pressure tactics.",
        communication_style: "Detail-oriented and skeptical of hype; responds to evidence and precise language.",
        email_length: "Up to 150 words is fine if every sentence carries a fact or a number.",
    },
    PersonalityGuide {
        kind: "Amiable",
        selling_strategy: "Build trust first. Emphasize partnership, low risk and how the change helps their team.",
        communication_style: "Warm and relationship-focused; values sincerity and a personal touch.",
        email_length: "Aim for 100 words with a friendly opener and a low-pressure ask.",
    },
    PersonalityGuide {
        kind: "Expressive",
        selling_strategy: "Sell the vision. Share stories, recognize their ideas and keep the energy high.",
        communication_style: "Enthusiastic and big-picture; enjoys stories, recognition and bold ideas.",
        email_length: "Keep it around 90 words and open with something about them, not you.",
    },
    PersonalityGuide {
        kind: "Dominant",
        selling_strategy: "Respect their time: state the problem, the result and the next step. Let them feel in control.",
        communication_style: "Brief and assertive; wants the point immediately.",
        email_length: "Keep it under 60 words with a single clear call to action.",
    },
    PersonalityGuide {
        kind: "Influential",
        selling_strategy: "Make it social. Reference peers and customers they admire and keep the tone upbeat.",
        communication_style: "Talkative and optimistic; responds to names, stories and excitement.",
        email_length: "Around 100 words with a personal hook in the first line.",
    },
    PersonalityGuide {
        kind: "Steady",
        selling_strategy: "Show a safe, step-by-step path. Stress reliability, support and minimal disruption.",
        communication_style: "Patient and loyal; prefers calm, consistent and reassuring language.",
        email_length: "About 100 words, calm tone, no urgency language.",
    },
    PersonalityGuide {
        kind: "Conscientious",
        selling_strategy: "Be accurate and thorough. Offer documentation and let the facts make the case.",
        communication_style: "Precise and process-driven; dislikes exaggeration and vague claims.",
        email_length: "Up to 150 words, structured, with a link to supporting material.",
    },
];

pub const DEFAULT_SELLING_STRATEGY: &str =
    "Personalize around their recent work, keep the message concise and end with a specific, easy next step.";

pub const DEFAULT_COMMUNICATION_STYLE: &str =
    "Professional and clear; mirror the tone of their own posts.";

/// Exact-match lookup.
pub fn personality_guide(kind: &str) -> Option<&'static PersonalityGuide> {
    PERSONALITY_GUIDES.iter().find(|g| g.kind == kind)
}

pub fn selling_strategy(kind: &str) -> &'static str {
    personality_guide(kind)
        .map(|g| g.selling_strategy)
        .unwrap_or(DEFAULT_SELLING_STRATEGY)
}

/// Communication style from the personality type, falling back to a
/// trait-led description when the type is absent or unknown.
pub fn communication_style(kind: Option<&str>, traits: &[String]) -> Option<String> {
    if let Some(guide) = kind.and_then(personality_guide) {
        return Some(guide.communication_style.to_string());
    }
    match traits {
        [] => kind.map(|_| DEFAULT_COMMUNICATION_STYLE.to_string()),
        [only] => Some(format!("Lead with what they value most: {}.", only.to_lowercase())),
        [first, second, ..] => Some(format!(
            "Lead with what they value most: {} and {}.",
            first.to_lowercase(),
            second.to_lowercase()
        )),
    }
}

pub fn email_length(kind: &str) -> Option<&'static str> {
    personality_guide(kind).map(|g| g.email_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_uses_table() {
        assert_eq!(selling_strategy("Analytical"), PERSONALITY_GUIDES[1].selling_strategy);
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(selling_strategy("analytical"), DEFAULT_SELLING_STRATEGY);
        assert_eq!(selling_strategy(" Driver"), DEFAULT_SELLING_STRATEGY);
        assert!(email_length("driver").is_none());
    }

    #[test]
    fn unknown_type_falls_back() {
        assert_eq!(selling_strategy("INTJ"), DEFAULT_SELLING_STRATEGY);
        assert_eq!(
            communication_style(Some("INTJ"), &[]).as_deref(),
            Some(DEFAULT_COMMUNICATION_STYLE)
        );
    }

    #[test]
    fn traits_drive_style_when_type_is_unknown() {
        let traits = vec!["Curious".to_string(), "Pragmatic".to_string(), "Calm".to_string()];
        assert_eq!(
            communication_style(None, &traits).as_deref(),
            Some("Lead with what they value most: curious and pragmatic.")
        );
    }

    #[test]
    fn known_type_wins_over_traits() {
        let traits = vec!["Curious".to_string()];
        assert_eq!(
            communication_style(Some("Steady"), &traits).as_deref(),
            Some(PERSONALITY_GUIDES[6].communication_style)
        );
    }

    #[test]
    fn no_signal_means_no_style() {
        assert!(communication_style(None, &[]).is_none());
    }

    #[test]
    fn table_kinds_are_unique() {
        let kinds: std::collections::HashSet<_> = PERSONALITY_GUIDES.iter().map(|g| g.kind).collect();
        assert_eq!(kinds.len(), PERSONALITY_GUIDES.len());
    }
}
