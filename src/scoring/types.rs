/// The sixteen canonical type codes with their one-line descriptions.
pub const TYPE_DESCRIPTIONS: [(&str, &str); 16] = [
    ("INTJ", "The Architect - Strategic, logical, and independent thinkers"),
    ("INTP", "The Logician - Innovative, curious, and analytical problem-solvers"),
    ("ENTJ", "The Commander - Bold, strategic, and natural-born leaders"),
    ("ENTP", "The Debater - Quick-witted, clever, and love intellectual challenges"),
    ("INFJ", "The Advocate - Idealistic, compassionate, and insightful"),
    ("INFP", "The Mediator - Poetic, kind, and altruistic dreamers"),
    ("ENFJ", "The Protagonist - Charismatic, inspiring, and natural leaders"),
    ("ENFP", "The Campaigner - Enthusiastic, creative, and sociable free spirits"),
    ("ISTJ", "The Logistician - Practical, fact-minded, and reliable"),
    ("ISFJ", "The Defender - Dedicated, warm, and protective caregivers"),
    ("ESTJ", "The Executive - Organized, traditional, and excellent administrators"),
    ("ESFJ", "The Consul - Caring, social, and popular helpers"),
    ("ISTP", "The Virtuoso - Bold, practical, and masters of tools"),
    ("ISFP", "The Adventurer - Charming, flexible, and artistic explorers"),
    ("ESTP", "The Entrepreneur - Smart, energetic, and perceptive risk-takers"),
    ("ESFP", "The Entertainer - Spontaneous, enthusiastic, and life of the party"),
];

pub const FALLBACK_DESCRIPTION: &str = "A unique personality type";

/// Look up the description for a four-letter code. Exact, case-sensitive match.
pub fn describe(code: &str) -> &'static str {
    TYPE_DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, desc)| *desc)
        .unwrap_or(FALLBACK_DESCRIPTION)
}
