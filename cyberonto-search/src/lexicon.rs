//! Per-language string tables: domain keywords and description templates.

use crate::normalize::normalize;
use crate::types::{EntityKind, Language};

/// Cybersecurity terms used to constrain remote category matches and to
/// boost remote candidates that mention them.
pub fn domain_keywords(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &[
            "security",
            "cyber",
            "malware",
            "ransomware",
            "hacker",
            "virus",
            "attack",
            "firewall",
            "antivirus",
            "phishing",
            "botnet",
            "vulnerability",
            "encryption",
            "cryptography",
            "spyware",
            "trojan",
            "worm",
            "exploit",
            "breach",
            "intrusion",
            "detection",
            "network",
            "information",
            "computer",
            "data",
            "protection",
            "defense",
        ],
        Language::Es => &[
            "seguridad",
            "ciber",
            "malware",
            "ransomware",
            "hacker",
            "virus",
            "ataque",
            "cortafuegos",
            "antivirus",
            "phishing",
            "botnet",
            "vulnerabilidad",
            "cifrado",
            "criptografía",
            "spyware",
            "troyano",
            "gusano",
            "explotación",
            "brecha",
            "intrusión",
            "detección",
            "red",
            "información",
            "ordenador",
            "datos",
            "protección",
            "defensa",
        ],
        Language::Fr => &[
            "sécurité",
            "cyber",
            "malware",
            "logiciel malveillant",
            "rançongiciel",
            "pirate",
            "virus",
            "attaque",
            "pare-feu",
            "antivirus",
            "hameçonnage",
            "botnet",
            "vulnérabilité",
            "chiffrement",
            "cryptographie",
            "logiciel espion",
            "cheval de troie",
            "ver",
            "exploit",
            "intrusion",
            "détection",
            "réseau",
            "information",
            "informatique",
            "données",
            "protection",
        ],
        Language::De => &[
            "sicherheit",
            "cyber",
            "schadsoftware",
            "malware",
            "ransomware",
            "hacker",
            "virus",
            "angriff",
            "firewall",
            "antivirus",
            "phishing",
            "botnetz",
            "sicherheitslücke",
            "verschlüsselung",
            "kryptographie",
            "spyware",
            "trojaner",
            "wurm",
            "exploit",
            "einbruch",
            "erkennung",
            "netzwerk",
            "information",
            "computer",
            "daten",
            "schutz",
        ],
        Language::It => &[
            "sicurezza",
            "ciber",
            "malware",
            "ransomware",
            "hacker",
            "virus",
            "attacco",
            "firewall",
            "antivirus",
            "phishing",
            "botnet",
            "vulnerabilità",
            "cifratura",
            "crittografia",
            "spyware",
            "trojan",
            "worm",
            "exploit",
            "violazione",
            "intrusione",
            "rilevamento",
            "rete",
            "informazione",
            "computer",
            "dati",
            "protezione",
        ],
        Language::Pt => &[
            "segurança",
            "ciber",
            "malware",
            "ransomware",
            "hacker",
            "vírus",
            "ataque",
            "firewall",
            "antivírus",
            "phishing",
            "botnet",
            "vulnerabilidade",
            "criptografia",
            "cifra",
            "spyware",
            "cavalo de troia",
            "verme",
            "exploit",
            "violação",
            "intrusão",
            "detecção",
            "rede",
            "informação",
            "computador",
            "dados",
            "proteção",
        ],
    }
}

/// [`domain_keywords`] folded with [`normalize`], ready for matching
/// against normalised text. Compute once per batch of candidates.
pub fn normalized_keywords(language: Language) -> Vec<String> {
    domain_keywords(language)
        .iter()
        .map(|k| normalize(k))
        .filter(|k| !k.is_empty())
        .collect()
}

/// Description for a remote result that came back without an abstract.
pub fn missing_abstract_description(language: Language, query: &str) -> String {
    match language {
        Language::En => format!("Cybersecurity resource: {query}"),
        Language::Es => format!("Recurso de ciberseguridad: {query}"),
        Language::Fr => format!("Ressource de cybersécurité: {query}"),
        Language::De => format!("Cybersicherheitsressource: {query}"),
        Language::It => format!("Risorsa di cybersicurezza: {query}"),
        Language::Pt => format!("Recurso de cibersegurança: {query}"),
    }
}

/// Display description for a local entity without a comment.
pub fn kind_description(language: Language, kind: EntityKind) -> &'static str {
    match (language, kind) {
        (Language::En, EntityKind::Class) => "Cybersecurity class",
        (Language::En, EntityKind::ObjectProperty) => "Ontology property",
        (Language::En, EntityKind::DataProperty) => "Data property",
        (Language::En, EntityKind::Individual) => "Cybersecurity instance",
        (Language::Es, EntityKind::Class) => "Clase de ciberseguridad",
        (Language::Es, EntityKind::ObjectProperty) => "Propiedad de la ontología",
        (Language::Es, EntityKind::DataProperty) => "Propiedad de datos",
        (Language::Es, EntityKind::Individual) => "Instancia de ciberseguridad",
        (Language::Fr, EntityKind::Class) => "Classe de cybersécurité",
        (Language::Fr, EntityKind::ObjectProperty) => "Propriété de l'ontologie",
        (Language::Fr, EntityKind::DataProperty) => "Propriété de données",
        (Language::Fr, EntityKind::Individual) => "Instance de cybersécurité",
        (Language::De, EntityKind::Class) => "Cybersicherheitsklasse",
        (Language::De, EntityKind::ObjectProperty) => "Ontologie-Eigenschaft",
        (Language::De, EntityKind::DataProperty) => "Dateneigenschaft",
        (Language::De, EntityKind::Individual) => "Cybersicherheitsinstanz",
        (Language::It, EntityKind::Class) => "Classe di cybersicurezza",
        (Language::It, EntityKind::ObjectProperty) => "Proprietà dell'ontologia",
        (Language::It, EntityKind::DataProperty) => "Proprietà dei dati",
        (Language::It, EntityKind::Individual) => "Istanza di cybersicurezza",
        (Language::Pt, EntityKind::Class) => "Classe de cibersegurança",
        (Language::Pt, EntityKind::ObjectProperty) => "Propriedade da ontologia",
        (Language::Pt, EntityKind::DataProperty) => "Propriedade de dados",
        (Language::Pt, EntityKind::Individual) => "Instância de cibersegurança",
    }
}

/// Placeholder shown in entity details when no comment exists.
pub fn no_description(language: Language) -> &'static str {
    match language {
        Language::En => "No description available",
        Language::Es => "Sin descripción disponible",
        Language::Fr => "Aucune description disponible",
        Language::De => "Keine Beschreibung verfügbar",
        Language::It => "Nessuna descrizione disponibile",
        Language::Pt => "Nenhuma descrição disponível",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_keywords() {
        for lang in Language::all() {
            let keywords = domain_keywords(*lang);
            assert!(keywords.len() >= 20, "{lang} has too few keywords");
            assert!(keywords.iter().all(|k| !k.is_empty()));
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for lang in Language::all() {
            for keyword in domain_keywords(*lang) {
                assert_eq!(*keyword, keyword.to_lowercase(), "{lang}: {keyword}");
            }
        }
    }

    #[test]
    fn normalized_keywords_are_folded() {
        let fr = normalized_keywords(Language::Fr);
        assert!(fr.iter().any(|k| k == "securite"));
        assert!(fr.iter().any(|k| k == "rancongiciel"));
        for lang in Language::all() {
            assert_eq!(normalized_keywords(*lang).len(), domain_keywords(*lang).len());
        }
    }

    #[test]
    fn missing_abstract_embeds_query() {
        assert_eq!(
            missing_abstract_description(Language::Es, "gusano"),
            "Recurso de ciberseguridad: gusano"
        );
        assert!(missing_abstract_description(Language::De, "wurm").ends_with("wurm"));
    }

    #[test]
    fn kind_descriptions_are_translated() {
        assert_eq!(
            kind_description(Language::En, EntityKind::Class),
            "Cybersecurity class"
        );
        assert_ne!(
            kind_description(Language::Fr, EntityKind::Individual),
            kind_description(Language::En, EntityKind::Individual)
        );
    }

    #[test]
    fn no_description_per_language() {
        assert_eq!(no_description(Language::It), "Nessuna descrizione disponibile");
    }
}
