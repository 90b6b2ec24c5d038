//! Quick definition lookup for common academic terms.

/// Short definitions served without a model call
const DEFINITIONS: &[(&str, &str)] = &[
    (
        "algebra",
        "A branch of mathematics that uses letters and symbols to represent numbers and quantities in formulas and equations.",
    ),
    (
        "geometry",
        "The branch of mathematics concerned with the properties and relations of points, lines, surfaces, and solids.",
    ),
    (
        "calculus",
        "Advanced mathematics involving rates of change and accumulation of quantities.",
    ),
    (
        "photosynthesis",
        "The process by which plants use sunlight to synthesize foods from carbon dioxide and water.",
    ),
    (
        "gravity",
        "The force that attracts objects toward the center of the Earth or toward any other physical body having mass.",
    ),
    (
        "atom",
        "The basic unit of a chemical element, consisting of protons, neutrons, and electrons.",
    ),
    (
        "hypothesis",
        "A proposed explanation for a phenomenon, used as a starting point for investigation.",
    ),
    (
        "analysis",
        "Detailed examination of the elements or structure of something.",
    ),
];

/// Look up the definition of a term, ignoring case and surrounding whitespace
pub fn lookup_definition(term: &str) -> Option<&'static str> {
    let term = term.trim().to_lowercase();
    DEFINITIONS
        .iter()
        .find(|(name, _)| *name == term)
        .map(|(_, definition)| *definition)
}

/// Render the definition tool reply
pub fn describe_term(term: &str) -> String {
    match lookup_definition(term) {
        Some(definition) => format!("{}: {}", term.trim(), definition),
        None => format!(
            "Quick definition not available for '{}'. This may require detailed research.",
            term.trim()
        ),
    }
}
