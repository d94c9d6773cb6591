//! Skill-overlap scoring.
//!
//! Jaccard similarity over normalized skill sets: symmetric and bounded
//! in [0, 1].

use std::collections::BTreeSet;

use crate::skill::SkillName;

/// Computes the Jaccard similarity `|a ∩ b| / |a ∪ b|` of two skill sets.
///
/// Returns 0.0 when the union is empty (both parties skill-less).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use skillsync_core::matching::score::jaccard;
/// use skillsync_core::skill::SkillName;
///
/// let subject: BTreeSet<_> = ["python", "sql", "ml"]
///     .iter()
///     .map(|s| SkillName::new(s).unwrap())
///     .collect();
/// let candidate: BTreeSet<_> = ["sql", "ml", "docker"]
///     .iter()
///     .map(|s| SkillName::new(s).unwrap())
///     .collect();
/// // intersection {sql, ml}, union of four skills
/// assert_eq!(jaccard(&subject, &candidate), 0.5);
/// ```
pub fn jaccard(a: &BTreeSet<SkillName>, b: &BTreeSet<SkillName>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Returns the skills common to both sets.
pub fn overlapping(a: &BTreeSet<SkillName>, b: &BTreeSet<SkillName>) -> BTreeSet<SkillName> {
    a.intersection(b).cloned().collect()
}
