//! Portfolio project ideas
//!
//! Static list of data-analysis project ideas for a CPAM internship,
//! rendered as a table by the `projects` subcommand.

use tabled::Tabled;

/// A single project idea with its difficulty level, objective and tooling
#[derive(Debug, Clone, Tabled)]
pub struct ProjectIdea {
    /// Difficulty level
    #[tabled(rename = "Level")]
    pub level: &'static str,
    /// Project name
    #[tabled(rename = "Project")]
    pub name: &'static str,
    /// What the project sets out to answer
    #[tabled(rename = "Objective")]
    pub objective: &'static str,
    /// Suggested tooling
    #[tabled(rename = "Tools")]
    pub tools: &'static str,
}

/// The full static list of project ideas, ordered by level
pub fn project_ideas() -> Vec<ProjectIdea> {
    vec![
        ProjectIdea {
            level: "Basique",
            name: "Analyse des dépenses de santé",
            objective: "Étudier l'évolution des dépenses de santé par région, catégorie et temps",
            tools: "Python, Tableau, Power BI",
        },
        ProjectIdea {
            level: "Basique",
            name: "Répartition des actes médicaux par spécialité",
            objective: "Comprendre la distribution des actes médicaux par spécialité et région, identifier les pics saisonniers",
            tools: "Python, Power BI",
        },
        ProjectIdea {
            level: "Intermédiaire",
            name: "Prévision des dépenses médicales",
            objective: "Anticiper les coûts futurs des remboursements pour aider à la planification budgétaire",
            tools: "Python (ARIMA, Prophet), Tableau",
        },
        ProjectIdea {
            level: "Intermédiaire",
            name: "Détection de fraudes potentielles",
            objective: "Identifier des comportements atypiques ou anomalies dans les remboursements pour détecter des fraudes",
            tools: "Python (Isolation Forest, DBSCAN)",
        },
        ProjectIdea {
            level: "Avancé",
            name: "Étude de la consommation de médicaments",
            objective: "Identifier les tendances de consommation, détecter surconsommations et corréler avec les campagnes de prévention",
            tools: "Python, Tableau",
        },
        ProjectIdea {
            level: "Avancé",
            name: "Optimisation des délais de traitement des dossiers",
            objective: "Réduire les délais de traitement des dossiers de remboursement, analyser les étapes ralentissant le processus",
            tools: "Python (Kaplan-Meier), Power BI",
        },
    ]
}
