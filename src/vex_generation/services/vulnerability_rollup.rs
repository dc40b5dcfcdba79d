use crate::vex_generation::domain::{
    AnalysisDecision, AuditedFinding, ProjectId, VexEntry, Vulnerability, VulnerabilityKey,
};
use std::collections::HashMap;

/// Findings of one vulnerability, split by distinct decision content
struct VulnerabilityGroup {
    vulnerability: Vulnerability,
    decisions: Vec<Option<AnalysisDecision>>,
}

/// VulnerabilityRollup service for building project-scoped VEX entries
///
/// Collapses per-component findings into one entry per
/// (vulnerability identity, decision content) pair. Decisions are compared
/// structurally; two absent decisions are equal, a present and an absent
/// decision never are.
///
/// Output order is deterministic: vulnerabilities by first occurrence in
/// the input, then decisions by first occurrence within the vulnerability.
pub struct VulnerabilityRollup;

impl VulnerabilityRollup {
    /// Rolls findings up to the project level
    ///
    /// # Arguments
    /// * `project` - The project every entry affects
    /// * `findings` - Audited findings in traversal order of their components
    ///
    /// # Returns
    /// One VexEntry per distinct (vulnerability, decision) pair
    pub fn rollup<I>(project: ProjectId, findings: I) -> Vec<VexEntry>
    where
        I: IntoIterator<Item = AuditedFinding>,
    {
        let mut groups: Vec<VulnerabilityGroup> = Vec::new();
        let mut index: HashMap<VulnerabilityKey, usize> = HashMap::new();

        for audited in findings {
            let (finding, decision) = audited.into_parts();
            let key = finding.vulnerability().key().clone();

            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(VulnerabilityGroup {
                    vulnerability: finding.vulnerability().clone(),
                    decisions: Vec::new(),
                });
                groups.len() - 1
            });

            let group = &mut groups[slot];
            if !group.decisions.contains(&decision) {
                group.decisions.push(decision);
            }
        }

        groups
            .into_iter()
            .flat_map(|group| {
                let vulnerability = group.vulnerability;
                group
                    .decisions
                    .into_iter()
                    .map(move |decision| VexEntry::new(vulnerability.clone(), decision, project))
            })
            .collect()
    }
}
