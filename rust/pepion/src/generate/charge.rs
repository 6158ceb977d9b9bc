//! Charge-state expansion and position-ordered merging of ion batches.

use crate::constants::PROTON_MASS;
use crate::labels;
use crate::models::Ion;

/// Derives the charge-state `charge` copies of a singly-charged ion list.
///
/// An ion is only eligible when its backbone position is at least
/// `2 * charge - 1`, an empirical rule excluding charge states the fragment
/// is too short to carry. Immonium ions (position 0) are never eligible.
pub(crate) fn expand_charge(ions: &[Ion], charge: usize) -> Vec<Ion> {
    let proton_padding = PROTON_MASS * (charge - 1) as f64;
    let min_position = 2 * charge - 1;
    ions.iter()
        .filter(|ion| ion.position >= min_position)
        .map(|ion| Ion {
            mass: (ion.mass + proton_padding) / charge as f64,
            label: labels::recharge(&ion.label, charge),
            position: ion.position,
        })
        .collect()
}

/// Expands a singly-charged ion list to every charge state up to
/// `max_charge`.
///
/// Each state is always derived from the original singly-charged set, never
/// from previously expanded output, so charge states do not compound.
pub(crate) fn expand_charges(singly_charged: Vec<Ion>, max_charge: usize) -> Vec<Ion> {
    let mut all = singly_charged.clone();
    for charge in 2..=max_charge {
        merge_by_position(&mut all, expand_charge(&singly_charged, charge));
    }
    all
}

/// Stable two-way merge of two position-sorted ion lists into `target`.
///
/// Equal-position ions keep their arrival order: everything already in
/// `target` stays ahead of the new batch.
pub(crate) fn merge_by_position(target: &mut Vec<Ion>, source: Vec<Ion>) {
    if target.is_empty() {
        *target = source;
        return;
    }
    if source.is_empty() {
        return;
    }

    let current = std::mem::take(target);
    let mut merged = Vec::with_capacity(current.len() + source.len());
    let mut incoming = source.into_iter().peekable();
    for ion in current {
        while incoming
            .peek()
            .is_some_and(|next| next.position < ion.position)
        {
            merged.extend(incoming.next());
        }
        merged.push(ion);
    }
    merged.extend(incoming);
    *target = merged;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ion(label: &str, position: usize) -> Ion {
        Ion::new(100.0, label, position)
    }

    #[test]
    fn charge_two_requires_position_three() {
        let singly = vec![ion("b1[+]", 1), ion("b2[+]", 2), ion("b3[+]", 3)];
        let doubled = expand_charge(&singly, 2);
        assert_eq!(doubled.len(), 1);
        assert_eq!(doubled[0].label, "b3[2+]");
        assert_eq!(doubled[0].position, 3);
    }

    #[test]
    fn expanded_mass_adds_protons_and_divides() {
        let singly = vec![Ion::new(500.0, "y5[+]", 5)];
        let tripled = expand_charge(&singly, 3);
        let expected = (500.0 + 2.0 * PROTON_MASS) / 3.0;
        assert!((tripled[0].mass - expected).abs() < 1e-9);
    }

    #[test]
    fn immonium_is_never_multiply_charged() {
        let singly = vec![ion("imm(P)", 0), ion("b5[+]", 5)];
        let expanded = expand_charges(singly, 3);
        assert_eq!(
            expanded
                .iter()
                .filter(|i| i.label.starts_with("imm"))
                .count(),
            1
        );
    }

    #[test]
    fn expansion_does_not_compound() {
        let singly = vec![ion("b5[+]", 5)];
        let expanded = expand_charges(singly, 3);
        let labels: Vec<&str> = expanded.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["b5[+]", "b5[2+]", "b5[3+]"]);
    }

    #[test]
    fn merge_is_stable_on_equal_positions() {
        let mut target = vec![ion("first", 1), ion("third", 2)];
        let source = vec![ion("second", 1), ion("fourth", 2)];
        merge_by_position(&mut target, source);
        let labels: Vec<&str> = target.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn merge_interleaves_by_position() {
        let mut target = vec![ion("a", 1), ion("c", 4)];
        let source = vec![ion("b", 2), ion("d", 6)];
        merge_by_position(&mut target, source);
        let positions: Vec<usize> = target.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2, 4, 6]);
    }
}
