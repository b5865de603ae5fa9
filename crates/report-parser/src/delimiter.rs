/// Column-header keywords (English and Spanish) used to locate the most
/// plausible header line before counting fields.
const HEADER_KEYWORDS: &[&str] = &[
    "profit",
    "resultado",
    "p/l",
    "net profit",
    "beneficio neto",
    "ganancia neta",
    "time",
    "close time",
    "fecha",
    "close date",
    "fecha de cierre",
    "hora de cierre",
    "type",
    "action",
    "tipo",
];

/// Candidates tried when no `sep=` directive is present. Order matters:
/// ties are broken by the first candidate reaching the best field count.
const CANDIDATE_DELIMITERS: [char; 3] = [',', ';', '\t'];

/// True when the file opens with an explicit `sep=<char>` directive line.
pub fn has_separator_directive(lines: &[String]) -> bool {
    lines
        .first()
        .and_then(|line| line.get(..4))
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("sep="))
}

/// Resolves the field delimiter for a generic separated-value file.
///
/// A leading `sep=` directive wins outright; an empty declared value and
/// the literal two-character `\t` escape both mean tab. Otherwise the
/// delimiter splitting the best header-line candidate into the most fields
/// wins.
pub fn infer_delimiter(lines: &[String]) -> char {
    let Some(first) = lines.first() else {
        return ',';
    };

    if has_separator_directive(lines) {
        let declared = first[4..].trim();
        if declared.is_empty() || declared == "\\t" {
            return '\t';
        }
        return declared.chars().next().unwrap_or('\t');
    }

    let header_line = lines
        .iter()
        .find(|line| {
            let lower = line.to_lowercase();
            HEADER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        })
        .unwrap_or(first);

    let mut best = CANDIDATE_DELIMITERS[0];
    let mut best_fields = 0;
    for candidate in CANDIDATE_DELIMITERS {
        let fields = header_line.split(candidate).count();
        if fields > best_fields {
            best = candidate;
            best_fields = fields;
        }
    }
    best
}
