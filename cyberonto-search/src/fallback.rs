//! Static per-language fallback results.
//!
//! A small curated table of well-known cybersecurity resources for each
//! DBpedia chapter. It answers instantly and is used when the remote call
//! fails, times out, returns too few results, or when there is no time
//! budget left to try it.

use crate::lexicon::normalized_keywords;
use crate::normalize::normalize;
use crate::orchestrator::scoring::score_remote;
use crate::sparql::endpoints::{page_link, resource_uri};
use crate::types::{CandidateKind, Language, Provenance, Relations, SearchCandidate};

/// One curated resource: its DBpedia name and a short description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackEntry {
    pub name: &'static str,
    pub description: &'static str,
}

const fn entry(name: &'static str, description: &'static str) -> FallbackEntry {
    FallbackEntry { name, description }
}

const EN: &[FallbackEntry] = &[
    entry("Computer_security", "Protection of computer systems and networks from attack, theft or damage"),
    entry("Malware", "Software intentionally designed to disrupt or damage computers and networks"),
    entry("Computer_virus", "Malware that replicates itself by modifying other programs"),
    entry("Ransomware", "Malware that encrypts a victim's data and demands payment to restore access"),
    entry("Phishing", "Social engineering attack that tricks people into revealing sensitive information"),
    entry("Firewall_(computing)", "Network security system that filters incoming and outgoing traffic"),
    entry("Computer_worm", "Standalone malware that spreads to other computers over a network"),
    entry("Trojan_horse_(computing)", "Malware that misleads users about its true intent"),
    entry("Spyware", "Software that gathers information about a user without their knowledge"),
    entry("Botnet", "Group of compromised Internet-connected devices controlled by an attacker"),
    entry("Vulnerability_(computing)", "Flaw in a computer system that weakens its security"),
    entry("Encryption", "Encoding information so that only authorized parties can read it"),
    entry("Intrusion_detection_system", "Device or software that monitors a network for malicious activity"),
    entry("Denial-of-service_attack", "Attack that makes a machine or network resource unavailable"),
];

const ES: &[FallbackEntry] = &[
    entry("Seguridad_informática", "Protección de sistemas informáticos y redes frente a ataques, robos o daños"),
    entry("Malware", "Software diseñado para dañar o infiltrarse en un sistema sin consentimiento"),
    entry("Virus_informático", "Malware que se replica modificando otros programas"),
    entry("Ransomware", "Malware que cifra los datos de la víctima y exige un rescate"),
    entry("Phishing", "Técnica de ingeniería social para obtener información confidencial"),
    entry("Cortafuegos_(informática)", "Sistema que filtra el tráfico de red entrante y saliente"),
    entry("Gusano_informático", "Malware que se propaga por la red a otros equipos"),
    entry("Troyano_(informática)", "Malware que se presenta como un programa legítimo"),
    entry("Programa_espía", "Software que recopila información de un usuario sin su conocimiento"),
    entry("Botnet", "Red de equipos comprometidos controlados por un atacante"),
    entry("Vulnerabilidad", "Debilidad de un sistema que compromete su seguridad"),
    entry("Cifrado_(criptografía)", "Codificación de la información para que solo la lean partes autorizadas"),
    entry("Sistema_de_detección_de_intrusos", "Programa que vigila la red en busca de actividad maliciosa"),
    entry("Ataque_de_denegación_de_servicio", "Ataque que deja un servicio o recurso de red inaccesible"),
];

const FR: &[FallbackEntry] = &[
    entry("Sécurité_des_systèmes_d'information", "Protection des systèmes informatiques et des réseaux contre les attaques"),
    entry("Logiciel_malveillant", "Programme conçu pour nuire à un système informatique"),
    entry("Virus_informatique", "Logiciel malveillant qui se reproduit en modifiant d'autres programmes"),
    entry("Rançongiciel", "Logiciel malveillant qui chiffre les données et exige une rançon"),
    entry("Hameçonnage", "Technique d'ingénierie sociale visant à obtenir des informations confidentielles"),
    entry("Pare-feu_(informatique)", "Système qui filtre le trafic réseau entrant et sortant"),
    entry("Ver_informatique", "Logiciel malveillant qui se propage sur le réseau"),
    entry("Cheval_de_Troie_(informatique)", "Logiciel malveillant déguisé en programme légitime"),
    entry("Logiciel_espion", "Logiciel qui collecte des informations sur un utilisateur à son insu"),
    entry("Botnet", "Réseau de machines compromises contrôlées par un attaquant"),
    entry("Vulnérabilité_(informatique)", "Faiblesse d'un système qui compromet sa sécurité"),
    entry("Chiffrement", "Procédé rendant une information illisible sans la clé de déchiffrement"),
    entry("Système_de_détection_d'intrusion", "Mécanisme qui surveille un réseau pour repérer les activités malveillantes"),
    entry("Attaque_par_déni_de_service", "Attaque qui rend un service indisponible"),
];

const DE: &[FallbackEntry] = &[
    entry("Informationssicherheit", "Schutz von Computersystemen und Netzwerken vor Angriffen und Schäden"),
    entry("Schadprogramm", "Software, die unerwünschte und schädliche Funktionen ausführt"),
    entry("Computervirus", "Schadprogramm, das sich durch Veränderung anderer Programme verbreitet"),
    entry("Ransomware", "Schadprogramm, das Daten verschlüsselt und Lösegeld fordert"),
    entry("Phishing", "Betrugsversuch, um über gefälschte Nachrichten an vertrauliche Daten zu gelangen"),
    entry("Firewall", "Sicherungssystem, das den Netzwerkverkehr filtert"),
    entry("Computerwurm", "Schadprogramm, das sich selbständig über Netzwerke verbreitet"),
    entry("Trojanisches_Pferd_(Computerprogramm)", "Schadprogramm, das als nützliche Anwendung getarnt ist"),
    entry("Spyware", "Software, die Daten eines Nutzers ohne dessen Wissen sammelt"),
    entry("Botnetz", "Netz kompromittierter Rechner unter der Kontrolle eines Angreifers"),
    entry("Sicherheitslücke", "Fehler in einer Software, der die Sicherheit eines Systems gefährdet"),
    entry("Verschlüsselung", "Umwandlung von Informationen in eine nur mit Schlüssel lesbare Form"),
    entry("Intrusion_Detection_System", "System zur Erkennung von Angriffen auf ein Netzwerk"),
    entry("Denial_of_Service", "Angriff, der einen Dienst oder ein Netzwerk unerreichbar macht"),
];

const IT: &[FallbackEntry] = &[
    entry("Sicurezza_informatica", "Protezione dei sistemi informatici e delle reti da attacchi e danni"),
    entry("Malware", "Software creato per danneggiare un sistema informatico"),
    entry("Virus_(informatica)", "Malware che si replica modificando altri programmi"),
    entry("Ransomware", "Malware che cifra i dati della vittima e chiede un riscatto"),
    entry("Phishing", "Truffa di ingegneria sociale per ottenere informazioni riservate"),
    entry("Firewall", "Sistema che filtra il traffico di rete in entrata e in uscita"),
    entry("Worm", "Malware che si diffonde autonomamente attraverso la rete"),
    entry("Trojan_(informatica)", "Malware nascosto all'interno di un programma apparentemente legittimo"),
    entry("Spyware", "Software che raccoglie informazioni su un utente a sua insaputa"),
    entry("Botnet", "Rete di computer compromessi controllati da un attaccante"),
    entry("Vulnerabilità_informatica", "Debolezza di un sistema che ne compromette la sicurezza"),
    entry("Crittografia", "Tecnica per rendere un messaggio leggibile solo dai destinatari autorizzati"),
    entry("Intrusion_detection_system", "Dispositivo che monitora la rete alla ricerca di attività malevole"),
    entry("Denial_of_service", "Attacco che rende un servizio o una risorsa di rete indisponibile"),
];

const PT: &[FallbackEntry] = &[
    entry("Segurança_de_computadores", "Proteção de sistemas de computador e redes contra ataques e danos"),
    entry("Malware", "Software criado para danificar ou invadir um sistema"),
    entry("Vírus_de_computador", "Malware que se replica modificando outros programas"),
    entry("Ransomware", "Malware que cifra os dados da vítima e exige um resgate"),
    entry("Phishing", "Golpe de engenharia social para obter informações confidenciais"),
    entry("Firewall", "Sistema que filtra o tráfego de rede de entrada e de saída"),
    entry("Worm_(informática)", "Malware que se propaga sozinho pela rede"),
    entry("Cavalo_de_troia_(computação)", "Malware disfarçado de programa legítimo"),
    entry("Spyware", "Software que recolhe informações de um usuário sem o seu conhecimento"),
    entry("Botnet", "Rede de computadores comprometidos controlados por um atacante"),
    entry("Vulnerabilidade_(computação)", "Falha de um sistema que compromete a sua segurança"),
    entry("Criptografia", "Técnica para tornar uma mensagem legível apenas por quem tem a chave"),
    entry("Sistema_de_detecção_de_intrusos", "Ferramenta que monitora a rede em busca de atividade maliciosa"),
    entry("Ataque_de_negação_de_serviço", "Ataque que torna um serviço ou recurso de rede indisponível"),
];

/// The curated table for `language`.
pub fn table(language: Language) -> &'static [FallbackEntry] {
    match language {
        Language::En => EN,
        Language::Es => ES,
        Language::Fr => FR,
        Language::De => DE,
        Language::It => IT,
        Language::Pt => PT,
    }
}

impl FallbackEntry {
    /// The resource name with underscores shown as spaces.
    pub fn label(&self) -> String {
        self.name.replace('_', " ")
    }

    fn matches(&self, query: &str, tokens: &[&str]) -> bool {
        let label = normalize(&self.label());
        let name = normalize(self.name);
        label.contains(query)
            || normalize(self.description).contains(query)
            || tokens.iter().any(|token| name.contains(token))
    }

    fn to_candidate(self, query: &str, language: Language, keywords: &[String]) -> SearchCandidate {
        let label = self.label();
        let score = score_remote(
            query,
            &normalize(&label),
            &normalize(self.description),
            keywords,
        );
        SearchCandidate {
            name: self.name.to_owned(),
            label,
            kind: CandidateKind::External,
            description: self.description.to_owned(),
            score,
            source: Provenance::Fallback,
            uri: Some(resource_uri(language, self.name)),
            external_link: Some(page_link(language, self.name)),
            relations: Relations::None,
        }
    }
}

/// Up to `limit` table entries for `language` matching `query`.
///
/// An entry matches when its normalised name or description contains the
/// normalised query, or when any whitespace-separated token of the query
/// occurs in its name. Entries keep table order.
pub fn fallback_results(query: &str, language: Language, limit: usize) -> Vec<SearchCandidate> {
    let query = normalize(query);
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }
    let tokens: Vec<&str> = query.split_whitespace().collect();
    let keywords = normalized_keywords(language);

    table(language)
        .iter()
        .filter(|entry| entry.matches(&query, &tokens))
        .take(limit)
        .map(|entry| entry.to_candidate(&query, language, &keywords))
        .collect()
}
