//! UI strings per locale.

use common::{Facet, Locale};

/// `(key, de, en, fr)`; the English text doubles as the key.
const ENTRIES: &[(&str, &str, &str, &str)] = &[
    ("Find your next job", "Finde deinen nächsten Job", "Find your next job", "Trouve ton prochain emploi"),
    ("Filters", "Filter", "Filters", "Filtres"),
    ("Apply", "Anwenden", "Apply", "Appliquer"),
    ("Apply filters", "Filter anwenden", "Apply filters", "Appliquer les filtres"),
    ("Clear", "Zurücksetzen", "Clear", "Effacer"),
    ("Close", "Schliessen", "Close", "Fermer"),
    ("Remove", "Entfernen", "Remove", "Retirer"),
    ("Regions", "Regionen", "Regions", "Régions"),
    ("Career Fields", "Berufsfelder", "Career Fields", "Domaines professionnels"),
    ("Technologies", "Technologien", "Technologies", "Technologies"),
    ("Job Levels", "Karrierestufen", "Job Levels", "Niveaux de poste"),
    ("Salary", "Lohn", "Salary", "Salaire"),
    ("Workload", "Pensum", "Workload", "Taux d'occupation"),
    ("Home Office", "Homeoffice", "Home Office", "Télétravail"),
    ("Industries", "Branchen", "Industries", "Secteurs"),
    ("Company Sizes", "Firmengrössen", "Company Sizes", "Tailles d'entreprise"),
    ("Whole Switzerland", "Ganze Schweiz", "Whole Switzerland", "Toute la Suisse"),
    ("Min. salary", "Mindestlohn", "Min. salary", "Salaire minimum"),
    ("Workload range", "Pensum von bis", "Workload range", "Plage du taux d'occupation"),
    ("% of full time", "% Vollzeit", "% of full time", "% du plein temps"),
    ("Min. Home Office", "Min. Homeoffice", "Min. Home Office", "Télétravail min."),
    (
        "We never share this with companies",
        "Wir teilen dies nie mit Firmen",
        "We never share this with companies",
        "Nous ne partageons jamais cela avec les entreprises",
    ),
    (
        "We only use this to filter out roles and save you time",
        "Wir nutzen dies nur, um Stellen zu filtern und dir Zeit zu sparen",
        "We only use this to filter out roles and save you time",
        "Nous l'utilisons uniquement pour filtrer les postes et te faire gagner du temps",
    ),
    (
        "If you're unsure, we recommend choosing a lower amount so you don't miss out on roles that could be great",
        "Wenn du unsicher bist, wähle lieber einen tieferen Betrag, damit du keine spannenden Stellen verpasst",
        "If you're unsure, we recommend choosing a lower amount so you don't miss out on roles that could be great",
        "En cas de doute, choisis un montant plus bas pour ne pas manquer de bons postes",
    ),
    ("Logo of", "Logo von", "Logo of", "Logo de"),
    (
        "Yearly salary in thousands",
        "Jahreslohn in Tausend",
        "Yearly salary in thousands",
        "Salaire annuel en milliers",
    ),
    (
        "Salary slightly below or above this range is possible, depending on your skills",
        "Je nach Fähigkeiten ist ein Lohn leicht unter oder über dieser Spanne möglich",
        "Salary slightly below or above this range is possible, depending on your skills",
        "Selon tes compétences, un salaire légèrement en dessous ou au-dessus est possible",
    ),
    ("Location", "Arbeitsort", "Location", "Lieu"),
    (
        "Like 2 or more jobs to compare",
        "Like 2 oder mehr Jobs, um sie zu vergleichen",
        "Like 2 or more jobs to compare",
        "Aime 2 offres ou plus pour les comparer",
    ),
    ("Like", "Gefällt mir", "Like", "J'aime"),
    ("Previous", "Zurück", "Previous", "Précédent"),
    ("Next", "Weiter", "Next", "Suivant"),
    ("More...", "Mehr...", "More...", "Plus..."),
    ("No jobs found", "Keine Jobs gefunden", "No jobs found", "Aucune offre trouvée"),
    ("Something went wrong!", "Etwas ist schiefgelaufen!", "Something went wrong!", "Une erreur est survenue !"),
    ("Go back home", "Zurück zur Startseite", "Go back home", "Retour à l'accueil"),
];

/// Lookup of UI strings for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    locale: Locale,
}

impl Dictionary {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translation of `key`, or the key itself when there is none.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        ENTRIES
            .iter()
            .find(|(k, ..)| *k == key)
            .map(|(_, de, en, fr)| match self.locale {
                Locale::De => *de,
                Locale::En => *en,
                Locale::Fr => *fr,
            })
            .unwrap_or(key)
    }

    pub fn facet_title(&self, facet: Facet) -> &'static str {
        self.t(match facet {
            Facet::Regions => "Regions",
            Facet::CareerFields => "Career Fields",
            Facet::Technologies => "Technologies",
            Facet::JobLevels => "Job Levels",
            Facet::Salary => "Salary",
            Facet::Workload => "Workload",
            Facet::HomeOffice => "Home Office",
            Facet::Industries => "Industries",
            Facet::CompanySizes => "Company Sizes",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_per_locale() {
        assert_eq!(Dictionary::new(Locale::De).t("Clear"), "Zurücksetzen");
        assert_eq!(Dictionary::new(Locale::Fr).t("Clear"), "Effacer");
        assert_eq!(Dictionary::new(Locale::En).t("Clear"), "Clear");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(Dictionary::new(Locale::De).t("Unknown"), "Unknown");
    }

    #[test]
    fn every_facet_has_a_title() {
        let dict = Dictionary::new(Locale::De);
        for facet in Facet::ALL {
            let english = Dictionary::new(Locale::En).facet_title(facet);
            assert!(ENTRIES.iter().any(|(k, ..)| *k == english), "{facet}");
            assert!(!dict.facet_title(facet).is_empty());
        }
    }
}
