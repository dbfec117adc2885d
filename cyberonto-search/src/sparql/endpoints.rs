//! DBpedia chapter addresses by language.

use crate::config::SearchConfig;
use crate::types::Language;

/// Public SPARQL endpoint of the DBpedia chapter for `language`.
pub fn default_endpoint(language: Language) -> &'static str {
    match language {
        Language::En => "https://dbpedia.org/sparql",
        Language::Es => "https://es.dbpedia.org/sparql",
        Language::Fr => "https://fr.dbpedia.org/sparql",
        Language::De => "https://de.dbpedia.org/sparql",
        Language::It => "https://it.dbpedia.org/sparql",
        Language::Pt => "https://pt.dbpedia.org/sparql",
    }
}

/// Endpoint to query for `language`, honouring configured overrides.
pub fn endpoint_for(language: Language, config: &SearchConfig) -> String {
    config
        .endpoints
        .get(&language)
        .cloned()
        .unwrap_or_else(|| default_endpoint(language).to_owned())
}

/// Human-facing page of a resource in the chapter for `language`.
pub fn page_link(language: Language, name: &str) -> String {
    match language {
        Language::En => format!("http://dbpedia.org/page/{name}"),
        other => format!("https://{}.dbpedia.org/page/{name}", other.code()),
    }
}

/// Resource IRI of `name` in the chapter for `language`.
pub fn resource_uri(language: Language, name: &str) -> String {
    match language {
        Language::En => format!("http://dbpedia.org/resource/{name}"),
        other => format!("http://{}.dbpedia.org/resource/{name}", other.code()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_uses_main_chapter() {
        assert_eq!(default_endpoint(Language::En), "https://dbpedia.org/sparql");
        assert_eq!(
            page_link(Language::En, "Computer_worm"),
            "http://dbpedia.org/page/Computer_worm"
        );
        assert_eq!(
            resource_uri(Language::En, "Botnet"),
            "http://dbpedia.org/resource/Botnet"
        );
    }

    #[test]
    fn other_languages_use_their_chapter() {
        for lang in Language::all().iter().filter(|l| **l != Language::En) {
            let endpoint = default_endpoint(*lang);
            assert!(endpoint.starts_with(&format!("https://{}.dbpedia.org", lang.code())));
        }
        assert_eq!(
            page_link(Language::Pt, "Malware"),
            "https://pt.dbpedia.org/page/Malware"
        );
    }

    #[test]
    fn configured_override_wins() {
        let mut config = SearchConfig::default();
        config
            .endpoints
            .insert(Language::Fr, "http://localhost:8890/sparql".into());
        assert_eq!(
            endpoint_for(Language::Fr, &config),
            "http://localhost:8890/sparql"
        );
        assert_eq!(
            endpoint_for(Language::De, &config),
            "https://de.dbpedia.org/sparql"
        );
    }
}
