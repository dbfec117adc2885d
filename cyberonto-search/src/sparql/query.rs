//! SPARQL query construction.
//!
//! One parametrised builder serves every language: the label language tag,
//! the optional category keyword filter and the row limit are arguments.

use std::fmt::Write as _;

use crate::types::Language;

const PREFIXES: &str = "PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>\n\
PREFIX dbo: <http://dbpedia.org/ontology/>\n\
PREFIX dct: <http://purl.org/dc/terms/>\n";

/// Query used to check that an endpoint answers at all.
pub const PROBE_QUERY: &str = "SELECT * WHERE { ?s ?p ?o } LIMIT 1";

/// Build a label-containment query.
///
/// Matches resources whose `rdfs:label` in `language` contains `text`
/// case-insensitively, fetching `dbo:abstract` in the same language when
/// present. With `keywords`, resources must either have a `dct:subject`
/// containing one of them or no subject at all.
pub fn build_label_query(
    text: &str,
    language: Language,
    keywords: Option<&[&str]>,
    limit: usize,
) -> String {
    let needle = escape_literal(&text.trim().to_lowercase());
    let tag = language.code();

    let mut query = String::from(PREFIXES);
    query.push_str("\nSELECT DISTINCT ?resource ?label ?abstract WHERE {\n");
    query.push_str("  ?resource rdfs:label ?label .\n");
    let _ = writeln!(
        query,
        "  FILTER(CONTAINS(LCASE(?label), \"{needle}\") && LANG(?label) = \"{tag}\")"
    );
    let _ = writeln!(
        query,
        "  OPTIONAL {{ ?resource dbo:abstract ?abstract . FILTER(LANG(?abstract) = \"{tag}\") }}"
    );

    if let Some(keywords) = keywords.filter(|k| !k.is_empty()) {
        query.push_str("  OPTIONAL { ?resource dct:subject ?category . }\n");
        let terms: Vec<String> = keywords
            .iter()
            .map(|k| {
                format!(
                    "CONTAINS(LCASE(STR(?category)), \"{}\")",
                    escape_literal(&k.to_lowercase())
                )
            })
            .collect();
        let _ = writeln!(query, "  FILTER({} || !BOUND(?category))", terms.join(" || "));
    }

    query.push_str("}\nORDER BY ?label\n");
    let _ = write!(query, "LIMIT {limit}");
    query
}

/// Escape a value for use inside a double-quoted SPARQL string literal.
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::domain_keywords;

    #[test]
    fn english_query_with_category_filter() {
        let query = build_label_query("Virus", Language::En, Some(&["security", "malware"]), 15);
        assert!(query.contains("CONTAINS(LCASE(?label), \"virus\") && LANG(?label) = \"en\""));
        assert!(query.contains("FILTER(LANG(?abstract) = \"en\")"));
        assert!(query.contains("?resource dct:subject ?category"));
        assert!(query.contains(
            "FILTER(CONTAINS(LCASE(STR(?category)), \"security\") || \
             CONTAINS(LCASE(STR(?category)), \"malware\") || !BOUND(?category))"
        ));
        assert!(query.ends_with("ORDER BY ?label\nLIMIT 15"));
    }

    #[test]
    fn every_language_tags_label_and_abstract() {
        for lang in Language::all() {
            let query = build_label_query("red", *lang, Some(domain_keywords(*lang)), 10);
            let tag = format!("= \"{}\"", lang.code());
            assert_eq!(query.matches(&tag).count(), 2, "{lang}: {query}");
            assert!(query.contains("SELECT DISTINCT ?resource ?label ?abstract"));
            assert!(query.contains("LIMIT 10"));
        }
    }

    #[test]
    fn keywords_are_lowercased_and_escaped() {
        let query = build_label_query(
            "gusano",
            Language::Es,
            Some(domain_keywords(Language::Es)),
            5,
        );
        assert!(query.contains("\"criptografía\""));
        assert!(query.contains("\"seguridad\""));
    }

    #[test]
    fn no_keywords_means_no_category_clause() {
        let query = build_label_query("wurm", Language::De, None, 5);
        assert!(!query.contains("dct:subject"));
        assert!(!query.contains("BOUND"));

        let query = build_label_query("wurm", Language::De, Some(&[]), 5);
        assert!(!query.contains("dct:subject"));
    }

    #[test]
    fn user_text_cannot_break_out_of_literal() {
        let query = build_label_query("x\") } DROP ALL #", Language::En, None, 1);
        assert!(query.contains("\"x\\\") } drop all #\""));
    }

    #[test]
    fn escape_literal_handles_control_characters() {
        assert_eq!(escape_literal("a\\b"), "a\\\\b");
        assert_eq!(escape_literal("l'union"), "l\\'union");
        assert_eq!(escape_literal("line\nbreak\t"), "line\\nbreak\\t");
        assert_eq!(escape_literal("plain"), "plain");
    }
}
